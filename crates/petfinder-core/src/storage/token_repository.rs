//! SQLite-backed credential repository
//!
//! Persists the bearer token in a small key-value table so the session
//! survives app restarts. The session layer decides what the token means;
//! this repository only stores it.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::session::TokenRepository;

/// Storage key under which the bearer token is kept
pub const TOKEN_KEY: &str = "token";

/// SQL to create the credentials table
pub const CREATE_CREDENTIALS_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS credentials (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL,
        updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    );
"#;

/// SQLite-backed implementation of TokenRepository
#[derive(Debug, Clone)]
pub struct SqliteTokenRepository {
    pool: SqlitePool,
}

impl SqliteTokenRepository {
    /// Create a new SQLite token repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the database schema for credentials
    ///
    /// Creates the credentials table if it doesn't exist.
    pub async fn initialize(&self) -> Result<()> {
        sqlx::raw_sql(CREATE_CREDENTIALS_TABLE_SQL)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl TokenRepository for SqliteTokenRepository {
    async fn get(&self) -> Result<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM credentials WHERE key = ?")
            .bind(TOKEN_KEY)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&self, token: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO credentials (key, value, updated_at)
            VALUES (?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(TOKEN_KEY)
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self) -> Result<()> {
        // Deleting an absent credential is a successful no-op
        sqlx::query("DELETE FROM credentials WHERE key = ?")
            .bind(TOKEN_KEY)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// In-memory token repository for testing
///
/// Stores the credential in memory only; it should NOT be used in
/// production.
#[derive(Debug, Default)]
pub struct InMemoryTokenRepository {
    token: std::sync::Mutex<Option<String>>,
}

impl InMemoryTokenRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn get(&self) -> Result<Option<String>> {
        Ok(self.token.lock().unwrap().clone())
    }

    async fn set(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    async fn delete(&self) -> Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
