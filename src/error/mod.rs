use reqwest::{header::HeaderMap, StatusCode};
use thiserror::Error;

use crate::models::ErrorObject;

#[derive(Error, Debug)]
pub enum SwishError {
    // HTTP 422: the request was rejected by the API's business rules
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // Any other failed exchange, including network-level failures
    #[error(transparent)]
    Transport(#[from] TransportError),

    // Client certificate could not be loaded
    #[error("Certificate error: {0}")]
    Certificate(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`SwishError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Usage,
}

impl SwishError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SwishError::Validation(_) => ErrorKind::Validation,
            SwishError::Transport(_) => ErrorKind::Transport,
            SwishError::Certificate(_) | SwishError::Config(_) => ErrorKind::Usage,
        }
    }

    /// Error objects returned with a 422 response, empty for every other error.
    pub fn error_objects(&self) -> &[ErrorObject] {
        match self {
            SwishError::Validation(e) => &e.errors,
            _ => &[],
        }
    }
}

/// The API answered 422 Unprocessable Entity.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub errors: Vec<ErrorObject>,
    pub response: Option<RawResponse>,
}

impl ValidationError {
    pub fn new(errors: Vec<ErrorObject>) -> Self {
        Self {
            message: "Unprocessable entity".to_string(),
            errors,
            response: None,
        }
    }

    /// Error list parsed from the response body, with the response kept.
    pub fn from_response(response: RawResponse) -> Self {
        Self {
            errors: ErrorObject::parse_list(&response.body),
            response: Some(response),
            ..Self::new(Vec::new())
        }
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.error_code == code)
    }
}

/// Snapshot of an HTTP response kept for diagnostics.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

#[derive(Error, Debug)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub response: Option<RawResponse>,
    #[source]
    pub source: Option<reqwest::Error>,
}

impl TransportError {
    pub fn from_response(message: impl Into<String>, response: RawResponse) -> Self {
        Self {
            message: message.into(),
            response: Some(response),
            source: None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.response
            .as_ref()
            .map(|r| r.status)
            .or_else(|| self.source.as_ref().and_then(|e| e.status()))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            message: format!("HTTP client error: {}", e),
            response: None,
            source: Some(e),
        }
    }
}

impl From<reqwest::Error> for SwishError {
    fn from(e: reqwest::Error) -> Self {
        SwishError::Transport(e.into())
    }
}

impl From<config::ConfigError> for SwishError {
    fn from(e: config::ConfigError) -> Self {
        SwishError::Config(e.to_string())
    }
}

pub type SwishResult<T> = Result<T, SwishError>;
