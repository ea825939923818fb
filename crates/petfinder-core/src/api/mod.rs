//! HTTP client for the remote marketplace API
//!
//! The screens are thin consumers: each fetches from these endpoints with
//! the session's bearer token and renders the result.

pub mod client;

pub use client::{ApiClient, ApiClientBuilder, PETFINDER_BASE_URL};
