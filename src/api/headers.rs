//! Header parsing utilities for session-scoped requests.

use axum::http::HeaderMap;

use crate::error::ApiError;
use crate::models::SessionId;

/// Header carrying the client's session id.
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Extension trait for convenient header parsing.
pub trait HeaderMapExt {
    /// Get a header value as a string, returning None if missing.
    fn get_str(&self, name: &str) -> Option<&str>;

    /// The session id, if the header is present and valid.
    fn session_id(&self) -> Option<SessionId>;

    /// The session id, or an error if missing or invalid.
    fn require_session(&self) -> Result<SessionId, ApiError>;
}

impl HeaderMapExt for HeaderMap {
    fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.to_str().ok())
    }

    fn session_id(&self) -> Option<SessionId> {
        self.get_str(SESSION_HEADER).and_then(SessionId::parse)
    }

    fn require_session(&self) -> Result<SessionId, ApiError> {
        self.session_id()
            .ok_or(ApiError::SessionRequired(SESSION_HEADER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};

    fn make_headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            // HTTP header names are case-insensitive
            let header_name = HeaderName::try_from(*name).unwrap();
            headers.insert(header_name, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn test_get_str_present() {
        let headers = make_headers(&[("content-type", "application/json")]);
        assert_eq!(headers.get_str("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_get_str_missing() {
        let headers = HeaderMap::new();
        assert_eq!(headers.get_str("content-type"), None);
    }

    #[test]
    fn test_session_id_present() {
        let headers = make_headers(&[("x-session-id", "abc123")]);
        assert_eq!(headers.session_id().unwrap().as_str(), "abc123");
    }

    #[test]
    fn test_session_id_blank() {
        let headers = make_headers(&[("x-session-id", "   ")]);
        assert!(headers.session_id().is_none());
    }

    #[test]
    fn test_require_session_missing() {
        let headers = HeaderMap::new();
        let err = headers.require_session().unwrap_err();
        assert!(matches!(err, ApiError::SessionRequired("X-Session-Id")));
    }
}
