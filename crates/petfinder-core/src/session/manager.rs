//! Session manager owning the authentication state
//!
//! Single source of truth for "who is logged in". All mutation goes
//! through `initialize`, `login` and `logout`; screens only read.
//!
//! Every operation derives its replacement state from its own input and
//! installs it wholesale under the lock, so interleaved calls can never
//! observe or produce a half-updated session.

use std::sync::RwLock;

use tracing::{info, warn};

use super::claims::decode_token;
use super::repository::TokenRepository;
use super::state::{Identity, SessionState, SessionStatus};
use crate::error::Result;

/// Manager for the process-wide authentication session
pub struct SessionManager {
    repository: Box<dyn TokenRepository>,
    state: RwLock<SessionState>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("status", &self.status())
            .finish()
    }
}

impl SessionManager {
    /// Create a new session manager in the `Initializing` state
    ///
    /// Call [`initialize`](Self::initialize) before any consumer reads
    /// session state.
    pub fn new(repository: Box<dyn TokenRepository>) -> Self {
        Self {
            repository,
            state: RwLock::new(SessionState::initializing()),
        }
    }

    // ========== Lifecycle ==========

    /// Restore the session from durable storage
    ///
    /// Transitions to `Authenticated` when a stored token decodes, and to
    /// `Unauthenticated` otherwise. A stored token that fails to decode is
    /// removed from storage. Never fails: a corrupt credential or a storage
    /// read error must not take down startup, so both degrade to the
    /// logged-out state. Idempotent; re-running without an intervening
    /// `login`/`logout` yields the same result.
    pub async fn initialize(&self) {
        let stored = match self.repository.get().await {
            Ok(stored) => stored,
            Err(error) => {
                warn!(%error, "failed to read stored credential, starting logged out");
                None
            }
        };

        let next = match stored {
            None => SessionState::unauthenticated(),
            Some(token) => match decode_token(&token) {
                Ok(claims) => {
                    let identity = Identity::from_claims(&claims);
                    info!(role = %identity.role, "restored session from stored credential");
                    SessionState::authenticated(token, identity)
                }
                Err(error) => {
                    warn!(%error, "stored credential is unusable, removing it");
                    if let Err(error) = self.repository.delete().await {
                        warn!(%error, "failed to remove unusable credential");
                    }
                    SessionState::unauthenticated()
                }
            },
        };

        *self.state.write().unwrap() = next;
    }

    /// Log in with the given bearer token
    ///
    /// Decodes the token, persists it, and swaps the session to
    /// `Authenticated`. On decode failure nothing is persisted and the
    /// current session state is left untouched; the caller owns reporting
    /// the error to the user. Persist and state transition happen together
    /// or not at all.
    pub async fn login(&self, token: &str) -> Result<Identity> {
        let claims = decode_token(token)?;
        let identity = Identity::from_claims(&claims);

        self.repository.set(token).await?;
        *self.state.write().unwrap() =
            SessionState::authenticated(token.to_string(), identity.clone());

        info!(role = %identity.role, subject_id = ?identity.subject_id, "login succeeded");
        Ok(identity)
    }

    /// Log out, clearing both the session and the persisted credential
    ///
    /// The in-memory session is reset before storage is touched, so the
    /// user is logged out locally even if the delete fails. Deleting when
    /// nothing is stored is a no-op.
    pub async fn logout(&self) -> Result<()> {
        *self.state.write().unwrap() = SessionState::unauthenticated();
        self.repository.delete().await?;

        info!("logged out");
        Ok(())
    }

    // ========== Readers ==========

    /// Current lifecycle status
    pub fn status(&self) -> SessionStatus {
        self.state.read().unwrap().status
    }

    /// Role of the logged-in user, `None` when not authenticated
    ///
    /// Navigation selection keys off this value.
    pub fn current_role(&self) -> Option<String> {
        self.state.read().unwrap().role().map(String::from)
    }

    /// Decoded identity of the logged-in user, if any
    pub fn identity(&self) -> Option<Identity> {
        self.state.read().unwrap().identity.clone()
    }

    /// The stored bearer credential, for `Authorization` headers
    pub fn raw_token(&self) -> Option<String> {
        self.state.read().unwrap().raw_token.clone()
    }

    /// Check whether a user is logged in
    pub fn is_authenticated(&self) -> bool {
        self.status().is_authenticated()
    }

    /// Check whether the logged-in user carries the admin role
    pub fn is_admin(&self) -> bool {
        self.state
            .read()
            .unwrap()
            .identity
            .as_ref()
            .is_some_and(Identity::is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::claims::DEFAULT_ROLE;
    use crate::storage::InMemoryTokenRepository;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_with_payload(payload: &str) -> String {
        format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
    }

    fn manager() -> SessionManager {
        SessionManager::new(Box::new(InMemoryTokenRepository::new()))
    }

    #[tokio::test]
    async fn test_starts_initializing() {
        let manager = manager();
        assert_eq!(manager.status(), SessionStatus::Initializing);
        assert_eq!(manager.current_role(), None);
    }

    #[tokio::test]
    async fn test_initialize_with_empty_storage() {
        let manager = manager();
        manager.initialize().await;

        assert_eq!(manager.status(), SessionStatus::Unauthenticated);
        assert!(manager.identity().is_none());
        assert!(manager.raw_token().is_none());
    }

    #[tokio::test]
    async fn test_initialize_restores_stored_token() {
        let repository = InMemoryTokenRepository::new();
        let token = token_with_payload(r#"{"id": 42, "email": "a@b.com", "role": "ADMIN"}"#);
        repository.set(&token).await.unwrap();

        let manager = SessionManager::new(Box::new(repository));
        manager.initialize().await;

        assert_eq!(manager.status(), SessionStatus::Authenticated);
        assert_eq!(manager.raw_token(), Some(token));
        assert!(manager.is_admin());
    }

    #[tokio::test]
    async fn test_initialize_removes_corrupt_token() {
        let repository = InMemoryTokenRepository::new();
        repository.set("not-a-jwt").await.unwrap();

        let manager = SessionManager::new(Box::new(repository));
        manager.initialize().await;

        assert_eq!(manager.status(), SessionStatus::Unauthenticated);
        assert!(manager.identity().is_none());
        // The unusable credential must be gone so the next start is clean
        assert_eq!(manager.repository.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let repository = InMemoryTokenRepository::new();
        let token = token_with_payload(r#"{"id": 1, "email": "a@b.com"}"#);
        repository.set(&token).await.unwrap();

        let manager = SessionManager::new(Box::new(repository));
        manager.initialize().await;
        let first = (manager.status(), manager.identity());

        manager.initialize().await;
        let second = (manager.status(), manager.identity());

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_login_roundtrip() {
        let manager = manager();
        manager.initialize().await;

        let token = token_with_payload(r#"{"id": 42, "email": "a@b.com"}"#);
        let identity = manager.login(&token).await.unwrap();

        assert_eq!(identity.subject_id, Some(42));
        assert_eq!(identity.email.as_deref(), Some("a@b.com"));
        assert_eq!(identity.role, DEFAULT_ROLE);

        assert_eq!(manager.status(), SessionStatus::Authenticated);
        assert_eq!(manager.raw_token(), Some(token.clone()));
        assert_eq!(manager.repository.get().await.unwrap(), Some(token));
    }

    #[tokio::test]
    async fn test_login_failure_leaves_state_and_storage_untouched() {
        let manager = manager();
        manager.initialize().await;

        let good = token_with_payload(r#"{"id": 1, "email": "a@b.com"}"#);
        manager.login(&good).await.unwrap();

        for bad in ["not-a-jwt", "a.b", "a.!!!.c", ""] {
            let result = manager.login(bad).await;
            assert!(matches!(result, Err(crate::Error::Decode(_))), "{bad:?}");
        }

        // Prior session survives every failed attempt
        assert_eq!(manager.status(), SessionStatus::Authenticated);
        assert_eq!(manager.raw_token(), Some(good.clone()));
        assert_eq!(manager.repository.get().await.unwrap(), Some(good));
    }

    #[tokio::test]
    async fn test_login_replaces_existing_session() {
        let manager = manager();
        manager.initialize().await;

        let first = token_with_payload(r#"{"id": 1, "email": "a@b.com"}"#);
        let second = token_with_payload(r#"{"id": 2, "email": "c@d.com", "role": "ADMIN"}"#);

        manager.login(&first).await.unwrap();
        manager.login(&second).await.unwrap();

        assert_eq!(manager.raw_token(), Some(second));
        assert_eq!(manager.identity().unwrap().subject_id, Some(2));
        assert!(manager.is_admin());
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let manager = manager();
        manager.initialize().await;

        let token = token_with_payload(r#"{"id": 1, "email": "a@b.com"}"#);
        manager.login(&token).await.unwrap();
        manager.logout().await.unwrap();

        assert_eq!(manager.status(), SessionStatus::Unauthenticated);
        assert!(manager.identity().is_none());
        assert!(manager.raw_token().is_none());
        assert_eq!(manager.repository.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_without_login_is_a_noop() {
        let manager = manager();
        manager.initialize().await;

        manager.logout().await.unwrap();
        assert_eq!(manager.status(), SessionStatus::Unauthenticated);
    }

    #[tokio::test]
    async fn test_current_role_default() {
        let manager = manager();
        manager.initialize().await;
        assert_eq!(manager.current_role(), None);

        let token = token_with_payload(r#"{"id": 42, "email": "a@b.com"}"#);
        manager.login(&token).await.unwrap();
        assert_eq!(manager.current_role().as_deref(), Some(DEFAULT_ROLE));
        assert!(!manager.is_admin());
    }
}
