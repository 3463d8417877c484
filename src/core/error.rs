//! Typed error handling for the dashboard
//!
//! # Error Categories
//!
//! - [`FetchError`]: a call to the orchestrator failed (network, non-2xx, bad payload)
//! - [`ConfigError`]: configuration parsing and validation
//! - [`RequestError`]: malformed or unknown dashboard requests
//!
//! Fetch failures are deliberately collapsed for callers: whatever the cause,
//! the view and the proxy surface one generic "Failed to fetch <label>" message.
//! The cause is kept for logs only.
//!
//! # Example
//!
//! ```rust,ignore
//! match catalog.get(name) {
//!     Some(resource) => Ok(resource),
//!     None => Err(DashboardError::Request(RequestError::UnknownResource {
//!         name: name.to_string(),
//!     })),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for dashboard operations
#[derive(Debug)]
pub enum DashboardError {
    /// Listing a resource from the orchestrator failed
    Fetch { label: String, cause: FetchError },

    /// Starting a workflow run on the orchestrator failed
    Launch(FetchError),

    /// Configuration errors
    Config(ConfigError),

    /// HTTP/Request errors
    Request(RequestError),
}

impl DashboardError {
    /// Fetch failure for a resource label ("claims", "prior auths", ...)
    pub fn fetch(label: impl Into<String>, cause: FetchError) -> Self {
        DashboardError::Fetch {
            label: label.into(),
            cause,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // No distinction between backend 4xx, 5xx and network failures.
            DashboardError::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardError::Launch(_) => StatusCode::BAD_GATEWAY,
            DashboardError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardError::Request(e) => e.status_code(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DashboardError::Fetch { .. } => "FETCH_FAILED",
            DashboardError::Launch(_) => "WORKFLOW_LAUNCH_FAILED",
            DashboardError::Config(_) => "CONFIG_ERROR",
            DashboardError::Request(e) => e.error_code(),
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
        }
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Fetch { label, .. } => {
                write!(f, "Failed to fetch {} from backend", label)
            }
            DashboardError::Launch(_) => write!(f, "Failed to start workflow run"),
            DashboardError::Config(e) => write!(f, "{}", e),
            DashboardError::Request(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Fetch { cause, .. } => Some(cause),
            DashboardError::Launch(cause) => Some(cause),
            DashboardError::Config(e) => Some(e),
            DashboardError::Request(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
///
/// `error` carries the same key the dashboard pages read.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: String,
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let DashboardError::Fetch { label, cause } = &self {
            tracing::warn!(resource = %label, error = %cause, "backend fetch failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Fetch Errors
// =============================================================================

/// Failure of a single call to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (connect, timeout, TLS, ...)
    #[error("network failure: {0}")]
    Network(String),

    /// The orchestrator answered with a non-2xx status
    #[error("backend responded with {status}")]
    Backend { status: u16 },

    /// The response body was not a usable list payload
    #[error("unexpected payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Backend {
                status: status.as_u16(),
            }
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Missing required field in configuration
    MissingField { field: String },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::MissingField { field } => {
                write!(f, "Missing required config field '{}'", field)
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        DashboardError::Config(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to incoming dashboard requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No resource with this name is registered
    UnknownResource { name: String },

    /// Workflow type not accepted by the orchestrator
    InvalidWorkflowType { value: String },

    /// Multipart upload is missing a part or could not be read
    InvalidUpload { message: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::UnknownResource { name } => {
                write!(f, "Unknown resource: {}", name)
            }
            RequestError::InvalidWorkflowType { value } => {
                write!(f, "Invalid workflow type: {}", value)
            }
            RequestError::InvalidUpload { message } => {
                write!(f, "Invalid upload: {}", message)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::UnknownResource { .. } => StatusCode::NOT_FOUND,
            RequestError::InvalidWorkflowType { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidUpload { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::UnknownResource { .. } => "UNKNOWN_RESOURCE",
            RequestError::InvalidWorkflowType { .. } => "INVALID_WORKFLOW_TYPE",
            RequestError::InvalidUpload { .. } => "INVALID_UPLOAD",
        }
    }
}

impl From<RequestError> for DashboardError {
    fn from(err: RequestError) -> Self {
        DashboardError::Request(err)
    }
}
