pub mod config;
pub mod database;
pub mod item_repository;
pub mod schema;
pub mod session;

pub use config::DatabaseConfig;
pub use database::Database;
pub use item_repository::ItemRepository;
pub use schema::{ITEMS_TABLE, TableSchema};
pub use session::Session;
