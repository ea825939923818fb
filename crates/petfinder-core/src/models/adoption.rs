//! Adoption request models
//!
//! Adoption endpoints use camelCase JSON, unlike the pet endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Pet, User};

/// Review status of an adoption request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdoptionStatus {
    /// Submitted and awaiting review
    Pending,
    /// Approved by an administrator
    Approved,
    /// Rejected by an administrator
    Rejected,
}

impl AdoptionStatus {
    /// Create from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Convert to the API's string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An adoption request, as returned by `GET /adoptions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdoptionRequest {
    /// Server-assigned identifier
    pub id: i64,

    pub status: AdoptionStatus,

    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,

    /// Answers from the adoption questionnaire; the API returns them either
    /// as a JSON object or as a JSON-encoded string depending on the route
    #[serde(default, rename = "formResponse")]
    pub form_response: serde_json::Value,

    /// The pet being requested, embedded by the list endpoint
    #[serde(default)]
    pub pet: Option<Pet>,

    /// The requesting user, embedded by the list endpoint
    #[serde(default)]
    pub user: Option<User>,
}

/// Payload for `POST /adoptions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdoptionRequest {
    #[serde(rename = "petId")]
    pub pet_id: i64,

    #[serde(rename = "userId")]
    pub user_id: i64,

    /// Questionnaire answers, JSON-encoded as a string (the wire format
    /// the API expects)
    #[serde(rename = "formResponse")]
    pub form_response: String,
}
