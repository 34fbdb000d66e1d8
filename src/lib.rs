//! # Tag-All Bot
//!
//! A Telegram group bot that keeps opt-in rosters and a dated reminder list per chat.
//!
//! ## Features
//! - Opt-in member and helper rosters, each mentionable in one command
//! - Per-user cooldown on mass mentions
//! - Reply-to-set reminders, announced and pruned by a daily sweep
//! - Webhook ingestion with in-memory or SQLite persistence

/// Update parsing, command dispatch, and the outbound messenger
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Persistence adapters, models, and migrations
pub mod database;
/// Roster and reminder services, plus the HTTP-facing services
pub mod services;
/// Formatting, validation, logging, and reply helpers
pub mod utils;
