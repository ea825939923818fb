//! Petfinder Core Library
//!
//! This crate provides the core functionality for the Petfinder client,
//! including:
//! - Session management (token persistence, claim decoding, role derivation)
//! - Marketplace API client (pets, users, adoption requests)
//! - Local credential storage (SQLite)
//! - Configuration management
//!
//! The UI layer consumes these pieces: screens read the session, call the
//! API client with the session's bearer token, and render the result.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::ApiClient;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::session::{SessionManager, SessionStatus};
}
