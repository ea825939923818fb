//! Pet model
//!
//! Field names follow the marketplace API's JSON, which uses snake_case
//! for pets. Everything beyond the name and species is optional because
//! older listings predate the richer intake form.

use serde::{Deserialize, Serialize};

/// A pet listed for adoption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    /// Server-assigned identifier
    pub id: i64,

    /// Display name of the pet
    pub petname: String,

    /// Species (e.g. "dog", "cat")
    pub specie: String,

    #[serde(default)]
    pub breed: Option<String>,

    /// Age in years
    #[serde(default)]
    pub age: Option<i64>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub size: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub energy_level: Option<String>,

    #[serde(default)]
    pub estimated_weight: Option<String>,

    #[serde(default)]
    pub health_condition: Option<String>,

    #[serde(default)]
    pub temperament: Option<String>,

    /// Date of the last vet consultation, as the API's display string
    #[serde(default)]
    pub last_consultation_date: Option<String>,

    #[serde(default)]
    pub is_castrated: bool,

    #[serde(default)]
    pub is_dewormed: bool,

    #[serde(default)]
    pub is_vaccinated: bool,

    #[serde(default)]
    pub is_good_with_kids: bool,

    #[serde(default)]
    pub is_good_with_other_dogs: bool,

    /// Hosted photo URL; some endpoints return it as `image`
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
}

/// Payload for creating or updating a pet listing
///
/// Photo upload is handled out of band, so this payload carries only the
/// descriptive fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPet {
    pub petname: String,
    pub specie: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_weight: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_condition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperament: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_consultation_date: Option<String>,

    pub is_castrated: bool,
    pub is_dewormed: bool,
    pub is_vaccinated: bool,
    pub is_good_with_kids: bool,
    pub is_good_with_other_dogs: bool,
}
