//! Data models for the marketplace API
//!
//! Serde models mirroring the remote API's JSON. Pets use snake_case
//! fields, adoption requests camelCase; the renames live on the types.

pub mod adoption;
pub mod pet;
pub mod user;

// Re-export model types
pub use adoption::{AdoptionRequest, AdoptionStatus, NewAdoptionRequest};
pub use pet::{NewPet, Pet};
pub use user::{AuthResponse, Credentials, RegisterUser, UpdateUser, User};
