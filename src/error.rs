//! API Errors
//!
//! Failures of calls to the remote task-board API.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not signed in")]
    NotAuthenticated,
    #[error("session expired or token revoked")]
    Unauthorized,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("storage error: {0}")]
    Storage(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Map a non-2xx status and its body to an error
    pub fn from_status(status: u16, body: String) -> Self {
        let message = body.trim().to_string();
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound(message),
            _ => ApiError::Http { status, message },
        }
    }

    /// Errors that mean the token is gone and the session must end
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::NotAuthenticated)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ApiError::Decode(value.to_string())
        } else {
            ApiError::Network(value.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        ApiError::Decode(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(401, "invalid token".into()), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, " board not found \n".into()), ApiError::NotFound("board not found".into()));
        assert_eq!(
            ApiError::from_status(429, "rate limited".into()),
            ApiError::Http { status: 429, message: "rate limited".into() }
        );
    }

    #[test]
    fn test_auth_failure() {
        assert!(ApiError::Unauthorized.is_auth_failure());
        assert!(ApiError::NotAuthenticated.is_auth_failure());
        assert!(!ApiError::Network("offline".into()).is_auth_failure());
    }

    #[test]
    fn test_display() {
        let err = ApiError::Http { status: 500, message: "boom".into() };
        assert_eq!(err.to_string(), "request failed (500): boom");
    }
}
