//! Error taxonomy for calls to the remote user service.

use store::ValidationError;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// A required form field was blank; raised before any request is sent.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// The service refused to create a duplicate username.
    #[error("Username '{username}' already exists")]
    Conflict { username: String },

    /// The service answered with a status the operation does not accept.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never got a response.
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body was not what the contract promises.
    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation {
            field: err.field.to_string(),
            message: err.message,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Config(err.to_string())
    }
}
