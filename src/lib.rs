pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod listing;
pub mod listing_store;
pub mod query;
pub mod router;
