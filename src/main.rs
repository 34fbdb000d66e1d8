//! # Tag-All Bot Main Entry Point
//!
//! Initializes logging, loads configuration, opens the store,
//! starts the reminder sweep, and serves the webhook.

use anyhow::Result;
use std::sync::Arc;
use teloxide::Bot;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tagall_bot::bot::handlers::BotHandler;
use tagall_bot::bot::messenger::{Messenger, TelegramMessenger};
use tagall_bot::config::{Config, StoreBackend};
use tagall_bot::database::connection::DatabaseManager;
use tagall_bot::database::memory::MemoryStore;
use tagall_bot::database::store::Store;
use tagall_bot::services::health::HealthService;
use tagall_bot::services::reminder::ReminderService;
use tagall_bot::services::webhook::WebhookService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tagall_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Tag-All Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Store: {:?}, HTTP Port: {}, Webhook: {}",
        config.store_backend, config.http_port, config.webhook_path);

    let store = open_store(&config).await?;

    info!("Initializing Telegram bot...");
    let messenger: Arc<dyn Messenger> =
        Arc::new(TelegramMessenger::new(Bot::new(&config.telegram_bot_token)));
    let handler = BotHandler::new(store.clone(), messenger.clone())
        .with_bot_username(config.bot_username.clone());

    match handler.sync_commands().await {
        Ok(true) => info!("Command menu published"),
        Ok(false) => info!("Command menu already up to date"),
        Err(e) => tracing::error!("Failed to sync command menu: {:#}", e),
    }

    info!("Initializing reminder service...");
    let mut reminder_service =
        match ReminderService::new(messenger, handler.reminders.clone(), config.sweep_schedule.clone()).await {
            Ok(service) => service,
            Err(e) => {
                tracing::error!("Failed to create reminder service: {}", e);
                return Err(anyhow::anyhow!("Failed to create reminder service: {}", e));
            }
        };

    if let Err(e) = reminder_service.start().await {
        tracing::error!("Failed to start reminder service: {}", e);
    } else {
        info!("Reminder service started successfully");
    }

    let app = HealthService::new(store)
        .router
        .merge(WebhookService::new(handler, &config.webhook_path).router)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("HTTP server listening on port {}", config.http_port);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("HTTP server error: {}", e);
    }

    // Stop reminder service on shutdown
    if let Err(e) = reminder_service.stop().await {
        tracing::warn!("Error stopping reminder service: {}", e);
    }

    info!("Application stopped");
    Ok(())
}

async fn open_store(config: &Config) -> Result<Arc<dyn Store>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, state is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Sqlite => {
            info!("Initializing database connection...");
            let db_manager = DatabaseManager::new(&config.database_url).await?;
            info!("Running database migrations...");
            db_manager.run_migrations().await?;
            info!("Database initialized successfully");
            Ok(Arc::new(db_manager))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
