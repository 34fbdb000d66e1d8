pub mod connection;
pub mod memory;
pub mod models;
pub mod sqlite;
pub mod store;
