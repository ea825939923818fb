//! Session domain module
//!
//! Owns the authentication token and the identity decoded from it.
//!
//! # Architecture
//!
//! - **State**: `SessionState`, `SessionStatus`, `Identity`
//! - **Claims**: token payload decoding (`decode_token`, `TokenClaims`)
//! - **Repository**: `TokenRepository` trait for durable credential storage
//! - **Manager**: `SessionManager` orchestrating the session lifecycle
//!
//! # Lifecycle
//!
//! The session starts `Initializing`, becomes `Authenticated` or
//! `Unauthenticated` once storage has been read, and cycles between the two
//! on login/logout for the life of the process.
//!
//! # Example
//!
//! ```ignore
//! use petfinder_core::session::SessionManager;
//! use petfinder_core::storage::SqliteTokenRepository;
//!
//! let manager = SessionManager::new(Box::new(SqliteTokenRepository::new(pool)));
//! manager.initialize().await;
//!
//! if manager.is_authenticated() {
//!     println!("logged in as {:?}", manager.current_role());
//! }
//! ```
//!
//! # Security note
//!
//! Token claims are decoded without signature verification; the role they
//! carry selects which screens to show and nothing more. The server is the
//! authority on what the credential may actually do.

pub mod claims;
pub mod manager;
pub mod repository;
pub mod state;

// Re-export main types
pub use claims::{DEFAULT_ROLE, DecodeError, TokenClaims, decode_token};
pub use manager::SessionManager;
pub use repository::TokenRepository;
pub use state::{ADMIN_ROLE, Identity, SessionState, SessionStatus};
