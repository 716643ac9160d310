use thiserror::Error;

/// Errors returned by a [`TagApi`](super::TagApi) implementation.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unauthorized: check that the API token is valid")]
    Unauthorized,

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("API token contains characters that are not valid in an HTTP header")]
    InvalidToken,
}

impl ClientError {
    /// Whether the remote reported the target as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(ClientError::NotFound("workspaces/ws-1".to_string()).is_not_found());
        assert!(!ClientError::Unauthorized.is_not_found());
        assert!(!ClientError::Api {
            status: 500,
            message: "boom".to_string()
        }
        .is_not_found());
    }

    #[test]
    fn test_api_error_message() {
        let err = ClientError::Api {
            status: 422,
            message: "Name is invalid".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 422): Name is invalid");
    }
}
