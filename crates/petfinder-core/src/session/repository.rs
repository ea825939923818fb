//! Repository trait for credential persistence
//!
//! Abstracts the durable key-value store holding the bearer token, so the
//! session manager can run against SQLite in the app and an in-memory
//! store in tests.

use async_trait::async_trait;

use crate::error::Result;

/// Repository for the single persisted bearer credential
///
/// The store holds at most one token; `set` replaces any previous value
/// and `delete` of an absent token is a no-op.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Read the persisted token, if any
    async fn get(&self) -> Result<Option<String>>;

    /// Persist the token, replacing any previous one
    async fn set(&self, token: &str) -> Result<()>;

    /// Remove the persisted token; succeeds when none is stored
    async fn delete(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Verify trait is object-safe
    fn _assert_object_safe(_: &dyn TokenRepository) {}
}
