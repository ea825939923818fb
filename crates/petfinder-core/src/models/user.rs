//! User and authentication models

use serde::{Deserialize, Serialize};

/// A registered user of the marketplace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier
    pub id: i64,

    pub name: String,

    pub email: String,

    /// Brazilian taxpayer id, digits only
    #[serde(default)]
    pub cpf: Option<String>,

    /// Phone number, digits only
    #[serde(default)]
    pub phone: Option<String>,
}

/// Payload for `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub cpf: String,
}

/// Payload for updating a user's profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Payload for `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response of a successful login: the bearer token to hand to the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}
