use anyhow::{anyhow, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/tagall.db";
pub const DEFAULT_WEBHOOK_PATH: &str = "/webhook";
/// Daily at 15:33 UTC.
pub const DEFAULT_SWEEP_SCHEDULE: &str = "0 33 15 * * *";

/// Which persistence adapter backs the rosters and reminder lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "sqlite" => Ok(StoreBackend::Sqlite),
            other => Err(anyhow!("Invalid STORE_BACKEND '{}': expected 'memory' or 'sqlite'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub http_port: u16,
    pub store_backend: StoreBackend,
    pub bot_username: Option<String>,
    pub webhook_path: String,
    pub sweep_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let database_url = non_blank_var("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let store_backend = match non_blank_var("STORE_BACKEND") {
            Some(value) => value.parse()?,
            None => StoreBackend::Sqlite,
        };

        let bot_username = non_blank_var("BOT_USERNAME")
            .map(|name| name.trim().trim_start_matches('@').to_string())
            .filter(|name| !name.is_empty());

        let webhook_path = non_blank_var("WEBHOOK_PATH")
            .map(|path| path.trim().to_string())
            .unwrap_or_else(|| DEFAULT_WEBHOOK_PATH.to_string());
        if !webhook_path.starts_with('/') {
            return Err(anyhow!("Invalid WEBHOOK_PATH: must start with '/'"));
        }

        let sweep_schedule = non_blank_var("SWEEP_SCHEDULE")
            .unwrap_or_else(|| DEFAULT_SWEEP_SCHEDULE.to_string());

        Ok(Config {
            telegram_bot_token: token,
            database_url,
            http_port,
            store_backend,
            bot_username,
            webhook_path,
            sweep_schedule,
        })
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
