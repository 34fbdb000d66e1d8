pub mod commands;
pub mod cooldown;
pub mod handlers;
pub mod messenger;
pub mod update;
