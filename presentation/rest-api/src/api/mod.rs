pub mod database;
pub mod error;
pub mod health;
pub mod request_context;
pub mod tags;
