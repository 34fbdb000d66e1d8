use std::env;
use std::sync::Mutex;
use tagall_bot::config::{Config, StoreBackend, DEFAULT_SWEEP_SCHEDULE};

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

const ALL_VARS: &[&str] = &[
    "TELEGRAM_BOT_TOKEN",
    "DATABASE_URL",
    "HTTP_PORT",
    "STORE_BACKEND",
    "BOT_USERNAME",
    "WEBHOOK_PATH",
    "SWEEP_SCHEDULE",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("STORE_BACKEND", "memory");
    env::set_var("BOT_USERNAME", "@TagAllBot");
    env::set_var("WEBHOOK_PATH", "/hooks/telegram");
    env::set_var("SWEEP_SCHEDULE", "0 0 9 * * *");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.store_backend, StoreBackend::Memory);
    assert_eq!(config.bot_username.as_deref(), Some("TagAllBot"));
    assert_eq!(config.webhook_path, "/hooks/telegram");
    assert_eq!(config.sweep_schedule, "0 0 9 * * *");

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.database_url, "sqlite:./data/tagall.db");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.store_backend, StoreBackend::Sqlite);
    assert_eq!(config.bot_username, None);
    assert_eq!(config.webhook_path, "/webhook");
    assert_eq!(config.sweep_schedule, DEFAULT_SWEEP_SCHEDULE);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HTTP_PORT", "invalid_port");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    env::set_var("HTTP_PORT", "-1");
    assert!(Config::from_env().is_err());

    env::set_var("HTTP_PORT", "65535");
    assert_eq!(Config::from_env().unwrap().http_port, 65535);

    clear_env();
}

#[test]
fn test_config_invalid_store_backend() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("STORE_BACKEND", "redis");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid STORE_BACKEND"));

    env::set_var("STORE_BACKEND", " SQLite ");
    assert_eq!(Config::from_env().unwrap().store_backend, StoreBackend::Sqlite);

    clear_env();
}

#[test]
fn test_config_invalid_webhook_path() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("WEBHOOK_PATH", "webhook");

    let error_msg = Config::from_env().unwrap_err().to_string();
    assert!(error_msg.contains("Invalid WEBHOOK_PATH"));

    clear_env();
}

#[test]
fn test_config_empty_values() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    // Empty token is rejected
    env::set_var("TELEGRAM_BOT_TOKEN", "");
    assert!(Config::from_env().is_err());

    // Blank optional values fall back to defaults
    env::set_var("TELEGRAM_BOT_TOKEN", "valid_token");
    env::set_var("DATABASE_URL", "");
    env::set_var("BOT_USERNAME", "@");
    env::set_var("STORE_BACKEND", "   ");
    let config = Config::from_env().unwrap();
    assert_eq!(config.database_url, "sqlite:./data/tagall.db");
    assert_eq!(config.bot_username, None);
    assert_eq!(config.store_backend, StoreBackend::Sqlite);

    clear_env();
}
