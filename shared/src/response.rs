//! Session response surface
//!
//! Every mutating operation resolves to this tagged shape: a success flag
//! plus either the updated session (with an optional human-readable
//! message) or an error string. There is no partial-success form.

use crate::error::{SessionError, SessionResult};
use crate::models::Session;
use serde::{Deserialize, Serialize};

/// Unified response for all session operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SessionResponse {
    /// Successful response carrying the session
    pub fn ok(session: Session) -> Self {
        Self {
            success: true,
            session: Some(session),
            message: None,
            error: None,
        }
    }

    /// Successful response with a human-readable message
    pub fn ok_with_message(session: Session, message: impl Into<String>) -> Self {
        Self {
            success: true,
            session: Some(session),
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failed response with an error string
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            session: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

impl From<SessionResult<Session>> for SessionResponse {
    fn from(result: SessionResult<Session>) -> Self {
        match result {
            Ok(session) => Self::ok(session),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

impl From<SessionError> for SessionResponse {
    fn from(e: SessionError) -> Self {
        Self::error(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_result_maps_to_tagged_failure() {
        let response: SessionResponse = Err::<Session, _>(SessionError::Inactive).into();
        assert!(!response.success);
        assert!(response.session.is_none());
        assert_eq!(response.error.as_deref(), Some("Session is no longer active"));
    }

    #[test]
    fn none_fields_are_omitted_from_json() {
        let response = SessionResponse::error("Session not found");
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("session").is_none());
        assert!(json.get("message").is_none());
    }
}
