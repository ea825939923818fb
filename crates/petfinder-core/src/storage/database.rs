//! SQLite database operations
//!
//! Provides connection pool management and initialization for the local
//! credential store.

use anyhow::Context;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use super::token_repository::CREATE_CREDENTIALS_TABLE_SQL;

/// Default maximum connections in the pool
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database configuration options
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: PathBuf,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Whether to create the schema automatically on connect
    pub auto_init: bool,
    /// Journal mode (default: WAL for better concurrency)
    pub journal_mode: SqliteJournalMode,
    /// Synchronous mode (default: NORMAL for balance of safety/performance)
    pub synchronous: SqliteSynchronous,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            auto_init: true,
            journal_mode: SqliteJournalMode::Wal,
            synchronous: SqliteSynchronous::Normal,
        }
    }
}

impl DatabaseConfig {
    /// Create a new database config with the specified path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Create a config for an in-memory database (useful for testing)
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::from(":memory:"),
            max_connections: 1, // In-memory requires single connection
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Disable automatic schema creation
    pub fn no_init(mut self) -> Self {
        self.auto_init = false;
        self
    }
}

/// Get the default database path
///
/// Lives next to the config file; `PETFINDER_CONFIG_DIR` overrides the
/// directory, which test runs rely on for isolation.
pub fn default_database_path() -> PathBuf {
    if let Ok(custom_dir) = env::var("PETFINDER_CONFIG_DIR") {
        return PathBuf::from(custom_dir).join("petfinder.db");
    }
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("petfinder").join("petfinder.db")
    } else {
        PathBuf::from("petfinder.db")
    }
}

/// Database connection pool wrapper
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection with the given configuration
    pub async fn new(config: DatabaseConfig) -> anyhow::Result<Self> {
        let in_memory = config.path.to_string_lossy() == ":memory:";

        // Ensure the directory exists
        if !in_memory {
            if let Some(parent) = config.path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create database directory: {:?}", parent)
                    })?;
                }
            }
        }

        let connection_str = if in_memory {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite:{}?mode=rwc", config.path.display())
        };

        let connect_options = SqliteConnectOptions::from_str(&connection_str)?
            .journal_mode(config.journal_mode)
            .synchronous(config.synchronous)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(connect_options)
            .await
            .with_context(|| format!("Failed to open database at {}", config.path.display()))?;

        if config.auto_init {
            sqlx::raw_sql(CREATE_CREDENTIALS_TABLE_SQL)
                .execute(&pool)
                .await
                .context("Failed to initialize database schema")?;
        }

        info!(path = %config.path.display(), "Database opened");
        Ok(Self { pool })
    }

    /// Open an in-memory database (useful for testing)
    pub async fn in_memory() -> anyhow::Result<Self> {
        Self::new(DatabaseConfig::in_memory()).await
    }

    /// Get the underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the connection pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
