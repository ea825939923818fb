//! Session state and identity types
//!
//! Defines the session status machine and the identity derived from a
//! decoded token. Exactly one session exists per running app; it starts
//! `Initializing` and cycles between `Authenticated` and `Unauthenticated`
//! for the life of the process.

use crate::session::claims::TokenClaims;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role claim value that unlocks the admin screens
pub const ADMIN_ROLE: &str = "ADMIN";

/// Session status indicating where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Durable storage has not been read yet
    Initializing,
    /// No usable credential is present
    Unauthenticated,
    /// A credential is stored and its claims were decoded
    Authenticated,
}

impl SessionStatus {
    /// Create from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "initializing" => Some(Self::Initializing),
            "unauthenticated" => Some(Self::Unauthenticated),
            "authenticated" => Some(Self::Authenticated),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated => "authenticated",
        }
    }

    /// Check whether a user is logged in
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The decoded, unverified identity of the logged-in user
///
/// Used only for display and navigation decisions; the server re-checks
/// authorization on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Subject identifier from the token payload, when present
    pub subject_id: Option<i64>,

    /// Email address from the token payload, when present
    pub email: Option<String>,

    /// Role string, never empty (defaults to `USER`)
    pub role: String,
}

impl Identity {
    /// Derive an identity from decoded token claims
    pub fn from_claims(claims: &TokenClaims) -> Self {
        Self {
            subject_id: claims.subject_id,
            email: claims.email.clone(),
            role: claims.role.clone(),
        }
    }

    /// Check whether this identity carries the admin role
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Snapshot of the session: token, identity, and lifecycle status
///
/// Invariant: `identity` is present if and only if `status` is
/// `Authenticated`, and then `raw_token` is the credential it was
/// decoded from. The constructors are the only way to build a state,
/// which keeps the invariant in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Opaque bearer credential, present only when authenticated
    pub raw_token: Option<String>,

    /// Identity decoded from the token, present only when authenticated
    pub identity: Option<Identity>,

    /// Current lifecycle status
    pub status: SessionStatus,
}

impl SessionState {
    /// State before durable storage has been read
    pub fn initializing() -> Self {
        Self {
            raw_token: None,
            identity: None,
            status: SessionStatus::Initializing,
        }
    }

    /// Logged-out state
    pub fn unauthenticated() -> Self {
        Self {
            raw_token: None,
            identity: None,
            status: SessionStatus::Unauthenticated,
        }
    }

    /// Logged-in state for the given credential and its decoded identity
    pub fn authenticated(raw_token: String, identity: Identity) -> Self {
        Self {
            raw_token: Some(raw_token),
            identity: Some(identity),
            status: SessionStatus::Authenticated,
        }
    }

    /// Role of the logged-in user, `None` when not authenticated
    pub fn role(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.role.as_str())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initializing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::claims::DEFAULT_ROLE;

    fn identity(role: &str) -> Identity {
        Identity {
            subject_id: Some(1),
            email: Some("a@b.com".to_string()),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            SessionStatus::parse("authenticated"),
            Some(SessionStatus::Authenticated)
        );
        assert_eq!(
            SessionStatus::parse("UNAUTHENTICATED"),
            Some(SessionStatus::Unauthenticated)
        );
        assert_eq!(
            SessionStatus::parse("Initializing"),
            Some(SessionStatus::Initializing)
        );
        assert_eq!(SessionStatus::parse("invalid"), None);
    }

    #[test]
    fn test_status_display_roundtrip() {
        for status in [
            SessionStatus::Initializing,
            SessionStatus::Unauthenticated,
            SessionStatus::Authenticated,
        ] {
            assert_eq!(SessionStatus::parse(&status.to_string()), Some(status));
        }
    }

    #[test]
    fn test_identity_invariant_holds_across_constructors() {
        let initializing = SessionState::initializing();
        assert!(initializing.identity.is_none());
        assert!(initializing.raw_token.is_none());
        assert!(!initializing.status.is_authenticated());

        let logged_out = SessionState::unauthenticated();
        assert!(logged_out.identity.is_none());
        assert!(logged_out.raw_token.is_none());

        let logged_in = SessionState::authenticated("h.p.s".to_string(), identity(DEFAULT_ROLE));
        assert!(logged_in.identity.is_some());
        assert_eq!(logged_in.raw_token.as_deref(), Some("h.p.s"));
        assert!(logged_in.status.is_authenticated());
    }

    #[test]
    fn test_role_accessor() {
        assert_eq!(SessionState::unauthenticated().role(), None);

        let state = SessionState::authenticated("h.p.s".to_string(), identity("ADMIN"));
        assert_eq!(state.role(), Some("ADMIN"));
    }

    #[test]
    fn test_is_admin() {
        assert!(identity("ADMIN").is_admin());
        assert!(!identity("USER").is_admin());
        assert!(!identity("admin").is_admin());
    }
}
