//! Marketplace API client
//!
//! Async HTTP client for the remote pet-adoption API. Authenticated
//! endpoints take the session's raw token and send it as a bearer
//! credential; the server decides what that credential may do.

use std::time::Duration;

use reqwest::{Client as HttpClient, RequestBuilder, Response};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{
    AdoptionRequest, AdoptionStatus, AuthResponse, Credentials, NewAdoptionRequest, NewPet, Pet,
    RegisterUser, UpdateUser, User,
};

/// Production API base URL
pub const PETFINDER_BASE_URL: &str = "https://petfinder-l00r.onrender.com";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the marketplace REST API
#[derive(Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for creating an ApiClient
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout_secs: None,
        }
    }

    /// Set the base URL (defaults to the production API)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the ApiClient
    pub fn build(self) -> Result<ApiClient> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(
                self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()
            .map_err(Error::Network)?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| PETFINDER_BASE_URL.to_string());

        Ok(ApiClient {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl ApiClient {
    /// Create a client for the production API with default settings
    pub fn new() -> Result<Self> {
        ApiClientBuilder::new().build()
    }

    /// Create a builder for customizing the client
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into `Error::Api`, carrying the body
    /// text as the message
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            message: if message.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                message
            },
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        debug!(status = %response.status(), url = %response.url(), "API response");
        Self::check(response).await
    }

    // ========== Auth ==========

    /// Exchange credentials for a bearer token
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let response = self
            .send(self.http_client.post(self.url("/auth/login")).json(credentials))
            .await?;
        Ok(response.json().await?)
    }

    /// Create a new user account
    pub async fn register(&self, user: &RegisterUser) -> Result<()> {
        self.send(self.http_client.post(self.url("/auth/register")).json(user))
            .await?;
        Ok(())
    }

    // ========== Pets ==========

    /// List all pets (public endpoint)
    pub async fn list_pets(&self) -> Result<Vec<Pet>> {
        let response = self.send(self.http_client.get(self.url("/pets"))).await?;
        Ok(response.json().await?)
    }

    /// Fetch a single pet by id (public endpoint)
    pub async fn get_pet(&self, id: i64) -> Result<Pet> {
        let response = self
            .send(self.http_client.get(self.url(&format!("/pets/{id}"))))
            .await?;
        Ok(response.json().await?)
    }

    /// Create a pet listing (admin)
    pub async fn create_pet(&self, pet: &NewPet, token: &str) -> Result<Pet> {
        let response = self
            .send(
                self.http_client
                    .post(self.url("/pets"))
                    .bearer_auth(token)
                    .json(pet),
            )
            .await?;
        Ok(response.json().await?)
    }

    /// Update a pet listing (admin)
    pub async fn update_pet(&self, id: i64, pet: &NewPet, token: &str) -> Result<()> {
        self.send(
            self.http_client
                .put(self.url(&format!("/pets/{id}")))
                .bearer_auth(token)
                .json(pet),
        )
        .await?;
        Ok(())
    }

    /// Remove a pet listing (admin)
    pub async fn delete_pet(&self, id: i64, token: &str) -> Result<()> {
        self.send(
            self.http_client
                .delete(self.url(&format!("/pets/{id}")))
                .bearer_auth(token),
        )
        .await?;
        Ok(())
    }

    // ========== Users ==========

    /// List all users (admin)
    pub async fn list_users(&self, token: &str) -> Result<Vec<User>> {
        let response = self
            .send(self.http_client.get(self.url("/users")).bearer_auth(token))
            .await?;
        Ok(response.json().await?)
    }

    /// Fetch a single user by id
    pub async fn get_user(&self, id: i64, token: &str) -> Result<User> {
        let response = self
            .send(
                self.http_client
                    .get(self.url(&format!("/users/{id}")))
                    .bearer_auth(token),
            )
            .await?;
        Ok(response.json().await?)
    }

    /// Update a user's profile
    pub async fn update_user(&self, id: i64, user: &UpdateUser, token: &str) -> Result<()> {
        self.send(
            self.http_client
                .put(self.url(&format!("/users/{id}")))
                .bearer_auth(token)
                .json(user),
        )
        .await?;
        Ok(())
    }

    /// Remove a user account (admin)
    pub async fn delete_user(&self, id: i64, token: &str) -> Result<()> {
        self.send(
            self.http_client
                .delete(self.url(&format!("/users/{id}")))
                .bearer_auth(token),
        )
        .await?;
        Ok(())
    }

    // ========== Adoptions ==========

    /// List adoption requests (admin)
    pub async fn list_adoptions(&self, token: &str) -> Result<Vec<AdoptionRequest>> {
        let response = self
            .send(
                self.http_client
                    .get(self.url("/adoptions"))
                    .bearer_auth(token),
            )
            .await?;
        Ok(response.json().await?)
    }

    /// Submit an adoption request for a pet
    pub async fn request_adoption(&self, request: &NewAdoptionRequest, token: &str) -> Result<()> {
        self.send(
            self.http_client
                .post(self.url("/adoptions"))
                .bearer_auth(token)
                .json(request),
        )
        .await?;
        Ok(())
    }

    /// Approve or reject an adoption request (admin)
    pub async fn set_adoption_status(
        &self,
        id: i64,
        status: AdoptionStatus,
        token: &str,
    ) -> Result<()> {
        self.send(
            self.http_client
                .patch(self.url(&format!("/adoptions/{id}")))
                .bearer_auth(token)
                .json(&serde_json::json!({ "status": status })),
        )
        .await?;
        Ok(())
    }
}
