use thiserror::Error;

use crate::validation::ValidationError;

/// Shown when nothing more specific can be said about a failure.
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not authenticated")]
    NotAuthenticated,
}

impl Error {
    /// Text suitable for a notice or an inline error panel.
    ///
    /// Server-provided messages and validation errors are passed through
    /// as-is. Decode failures are logged and collapsed into a generic message.
    pub fn display_message(&self) -> String {
        match self {
            Error::Api(message) => message.clone(),
            Error::Validation(e) => e.to_string(),
            Error::NotAuthenticated => "Please log in to continue".to_string(),
            Error::Http(e) if e.is_decode() => {
                log::error!("Unexpected response body: {}", e);
                GENERIC_FAILURE.to_string()
            }
            Error::Http(e) if e.is_timeout() => "The server took too long to respond".to_string(),
            Error::Http(e) if e.is_connect() => "Could not reach the server".to_string(),
            Error::Json(e) => {
                log::error!("Unexpected JSON: {}", e);
                GENERIC_FAILURE.to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_passes_through() {
        let err = Error::Api("User not found".to_string());
        assert_eq!(err.display_message(), "User not found");
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err: Error = ValidationError::InvalidAmount.into();
        assert_eq!(err.display_message(), ValidationError::InvalidAmount.to_string());
    }

    #[test]
    fn test_json_error_is_generic() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = parse.into();
        assert_eq!(err.display_message(), GENERIC_FAILURE);
    }
}
