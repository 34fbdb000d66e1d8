pub mod health;
pub mod reminder;
pub mod reminder_book;
pub mod roster;
pub mod webhook;
