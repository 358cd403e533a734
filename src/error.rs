//! Error types for the Whistle API client.
//!
//! Failures fall into four groups: configuration errors raised before any
//! network activity, authentication failures raised while resolving
//! credentials, transport errors raised while dispatching a request, and
//! unexpected statuses reported by the resource accessors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Whistle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Whistle API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed (connection refused, TLS, malformed response)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Missing or malformed configuration, raised before any request is sent
    #[error("Configuration error: {0}")]
    Config(String),

    /// Login against the vendor failed or returned no usable credential
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The vendor rejected the credential attached to the request (401)
    #[error("Unauthorized; the credential was rejected")]
    Unauthorized,

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API answered with a status the accessor did not expect
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Field-level errors reported by the API
        errors: Vec<ApiErrorDetail>,
        /// Raw response body for debugging
        body: Value,
    },
}

/// A single entry of the `errors` array the API attaches to failed responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Machine-readable code
    #[serde(default)]
    pub code: String,
    /// Offending request field, if any
    #[serde(default)]
    pub field: String,
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    ///
    /// # Example
    ///
    /// ```
    /// use whistle_rs::Error;
    ///
    /// assert!(Error::Unauthorized.is_auth_error());
    /// assert!(!Error::Timeout.is_auth_error());
    /// ```
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_) | Error::Unauthorized)
    }

    /// Returns `true` if this error was raised before any network activity.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_) | Error::InvalidInput(_))
    }

    /// Returns `true` if the request never produced an HTTP response.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Timeout)
    }

    /// The HTTP status associated with this error, if there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Unauthorized => Some(401),
            Error::NotFound(_) => Some(404),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Map a transport failure, singling out timeouts.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Http(err)
        }
    }

    /// Create an API error from a response body.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let errors: Vec<ApiErrorDetail> = body
            .get("errors")
            .cloned()
            .and_then(|e| serde_json::from_value(e).ok())
            .unwrap_or_default();

        let message = errors
            .first()
            .map(|e| e.message.clone())
            .filter(|m| !m.is_empty())
            .or_else(|| {
                body.get("error")
                    .and_then(|e| e.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| "Unknown API error".to_string());

        Error::Api {
            status,
            message,
            errors,
            body,
        }
    }
}
