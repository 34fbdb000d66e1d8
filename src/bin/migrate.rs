use anyhow::{Result, anyhow};
use sqlx::Row;
use std::env;
use std::io;
use std::path::Path;
use tagall_bot::config::DEFAULT_DATABASE_URL;
use tagall_bot::database::connection::{ensure_parent_dir, DatabaseManager};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize basic logging for the migration
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("migrate");

    match command {
        "migrate" | "up" => run_migrations().await,
        "check" => check_database().await,
        "reset" => reset_database().await,
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

fn database_url() -> String {
    dotenvy::dotenv().ok();
    env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

async fn run_migrations() -> Result<()> {
    println!("🔧 Tag-All Bot - Database Migration Tool");
    println!("========================================");

    let database_url = database_url();
    println!("📊 Database URL: {}", mask_url(&database_url));

    ensure_parent_dir(&database_url)?;

    println!("🚀 Running database migrations...");

    let db_manager = DatabaseManager::new(&database_url).await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match db_manager.run_migrations().await {
        Ok(_) => {
            println!("✅ Migrations completed successfully!");
        }
        Err(e) => {
            eprintln!("❌ Migration failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn check_database() -> Result<()> {
    println!("🔍 Checking database connection and schema...");

    let database_url = database_url();
    println!("📊 Database URL: {}", mask_url(&database_url));

    let db_manager = DatabaseManager::new(&database_url).await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match check_tables(&db_manager).await {
        Ok(tables) => {
            println!("✅ Database connection successful!");
            println!("📋 Found tables:");
            for (table, rows) in tables {
                println!("  • {table} ({rows} rows)");
            }
        }
        Err(e) => {
            println!("⚠️  Database check failed: {e}");
            println!("💡 Try running 'migrate up' to create the schema");
        }
    }

    Ok(())
}

async fn reset_database() -> Result<()> {
    println!("⚠️  WARNING: This will delete ALL rosters and reminders!");
    println!("🤔 Are you sure you want to continue? (yes/no)");

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    if input.trim().to_lowercase() != "yes" {
        println!("❌ Reset cancelled.");
        return Ok(());
    }

    let database_url = database_url();
    let db_path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .ok_or_else(|| anyhow!("Reset is only supported for SQLite databases"))?;

    if Path::new(db_path).exists() {
        std::fs::remove_file(db_path)?;
        println!("🗑️  Deleted database file: {db_path}");
    }

    println!("🔄 Recreating database schema...");
    run_migrations().await?;

    println!("✅ Database reset completed!");

    Ok(())
}

async fn check_tables(db_manager: &DatabaseManager) -> Result<Vec<(String, i64)>> {
    let names: Vec<String> = sqlx::query(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE '\\_%' ESCAPE '\\' ORDER BY name",
    )
    .fetch_all(&db_manager.pool)
    .await?
    .into_iter()
    .map(|row| row.try_get::<String, _>("name"))
    .collect::<Result<_, _>>()?;

    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM \"{name}\""))
            .fetch_one(&db_manager.pool)
            .await?;
        tables.push((name, count));
    }
    Ok(tables)
}

fn mask_url(url: &str) -> String {
    if url.starts_with("sqlite:") {
        let path = url.strip_prefix("sqlite:").unwrap_or(url);
        if let Some(filename) = Path::new(path).file_name() {
            format!("sqlite:.../{}", filename.to_string_lossy())
        } else {
            url.to_string()
        }
    } else {
        url.to_string()
    }
}

fn print_help() {
    println!("🏷️  Tag-All Bot - Database Migration Tool");
    println!();
    println!("USAGE:");
    println!("    migrate [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    migrate, up    Run database migrations (default)");
    println!("    check          List tables and their row counts");
    println!("    reset          Delete the SQLite file and recreate the schema - DESTRUCTIVE!");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATABASE_URL   Database connection string (default: {DEFAULT_DATABASE_URL})");
    println!();
}
