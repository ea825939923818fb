//! Storage layer - SQLite credential persistence
//!
//! # Architecture
//!
//! - `database`: Connection pool management and initialization
//! - `token_repository`: Durable storage for the bearer credential
//!
//! # Usage
//!
//! ```ignore
//! use petfinder_core::storage::{Database, SqliteTokenRepository};
//!
//! let db = Database::in_memory().await?;
//! let repository = SqliteTokenRepository::new(db.pool().clone());
//! ```

pub mod database;
pub mod token_repository;

// Re-export commonly used types
pub use database::{Database, DatabaseConfig, default_database_path};
pub use token_repository::{
    CREATE_CREDENTIALS_TABLE_SQL, InMemoryTokenRepository, SqliteTokenRepository, TOKEN_KEY,
};
