//! Token claim decoding
//!
//! The server issues a compact three-segment token (`header.payload.signature`)
//! whose middle segment is a base64url-encoded JSON object carrying the user's
//! claims. The client only needs the claims for display and navigation, so the
//! signature segment is NOT verified here; any authorization decision based on
//! these claims must be re-checked server-side.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use thiserror::Error;

/// Role assigned when the token payload carries no role claim
pub const DEFAULT_ROLE: &str = "USER";

/// base64url decoder that accepts both padded and unpadded payloads
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Errors that can occur while decoding a token
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token is empty")]
    Empty,

    #[error("expected 3 token segments, found {0}")]
    SegmentCount(usize),

    #[error("token payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("token payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token payload is not a JSON object")]
    NotAnObject,
}

/// Claims extracted from a token payload
///
/// The server is trusted to populate `id` and `email`; a payload missing
/// either still decodes successfully, mirroring the permissive behavior the
/// rest of the app was built against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject identifier, when the payload carries an integer `id`
    pub subject_id: Option<i64>,
    /// Email address of the authenticated user
    pub email: Option<String>,
    /// Role claim, defaulting to [`DEFAULT_ROLE`] when absent
    pub role: String,
}

/// Decode the payload segment of a compact token into its claims
///
/// Fails when the token is empty, does not have exactly three dot-delimited
/// segments, the payload is not valid base64url, or the decoded bytes are
/// not a JSON object. Missing claim fields are not an error.
pub fn decode_token(token: &str) -> Result<TokenClaims, DecodeError> {
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::SegmentCount(segments.len()));
    }

    let bytes = PAYLOAD_ENGINE.decode(segments[1])?;
    let payload: serde_json::Value = serde_json::from_slice(&bytes)?;
    let claims = payload.as_object().ok_or(DecodeError::NotAnObject)?;

    Ok(TokenClaims {
        subject_id: claims.get("id").and_then(serde_json::Value::as_i64),
        email: claims
            .get("email")
            .and_then(serde_json::Value::as_str)
            .map(String::from),
        role: claims
            .get("role")
            .and_then(serde_json::Value::as_str)
            .unwrap_or(DEFAULT_ROLE)
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    /// Build a syntactically valid token around the given payload JSON
    fn token_with_payload(payload: &str) -> String {
        format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_decode_full_payload() {
        let token = token_with_payload(r#"{"id": 42, "email": "a@b.com", "role": "ADMIN"}"#);
        let claims = decode_token(&token).unwrap();

        assert_eq!(claims.subject_id, Some(42));
        assert_eq!(claims.email.as_deref(), Some("a@b.com"));
        assert_eq!(claims.role, "ADMIN");
    }

    #[test]
    fn test_decode_role_defaults_to_user() {
        let token = token_with_payload(r#"{"id": 42, "email": "a@b.com"}"#);
        let claims = decode_token(&token).unwrap();

        assert_eq!(claims.role, DEFAULT_ROLE);
    }

    #[test]
    fn test_decode_null_role_defaults_to_user() {
        let token = token_with_payload(r#"{"id": 1, "email": "a@b.com", "role": null}"#);
        let claims = decode_token(&token).unwrap();

        assert_eq!(claims.role, DEFAULT_ROLE);
    }

    #[test]
    fn test_decode_missing_subject_and_email_is_permitted() {
        let token = token_with_payload(r#"{"iat": 1700000000}"#);
        let claims = decode_token(&token).unwrap();

        assert_eq!(claims.subject_id, None);
        assert_eq!(claims.email, None);
        assert_eq!(claims.role, DEFAULT_ROLE);
    }

    #[test]
    fn test_decode_accepts_padded_payload() {
        use base64::engine::general_purpose::URL_SAFE;
        let token = format!("h.{}.s", URL_SAFE.encode(r#"{"id": 7}"#));
        let claims = decode_token(&token).unwrap();

        assert_eq!(claims.subject_id, Some(7));
    }

    #[test]
    fn test_decode_empty_token() {
        assert!(matches!(decode_token(""), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_decode_wrong_segment_count() {
        assert!(matches!(
            decode_token("not-a-jwt"),
            Err(DecodeError::SegmentCount(1))
        ));
        assert!(matches!(
            decode_token("a.b"),
            Err(DecodeError::SegmentCount(2))
        ));
        assert!(matches!(
            decode_token("a.b.c.d"),
            Err(DecodeError::SegmentCount(4))
        ));
    }

    #[test]
    fn test_decode_invalid_base64_payload() {
        assert!(matches!(
            decode_token("a.!!!.c"),
            Err(DecodeError::Base64(_))
        ));
    }

    #[test]
    fn test_decode_invalid_json_payload() {
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
        assert!(matches!(decode_token(&token), Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_decode_non_object_payload() {
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("42"));
        assert!(matches!(
            decode_token(&token),
            Err(DecodeError::NotAnObject)
        ));
    }

    #[test]
    fn test_decode_non_integer_subject_id() {
        let token = token_with_payload(r#"{"id": "42", "email": "a@b.com"}"#);
        let claims = decode_token(&token).unwrap();

        // Decode stays permissive: a string id is dropped, not an error
        assert_eq!(claims.subject_id, None);
        assert_eq!(claims.email.as_deref(), Some("a@b.com"));
    }
}
