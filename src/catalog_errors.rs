//! # Catalog Error Types Module
//!
//! Error types for talking to the recipe catalog.
//! The measurement and shopping-list core never fails and has no error type.

/// Custom error types for catalog operations
#[derive(Debug)]
pub enum CatalogError {
    /// Transport-level failure (connection, timeout, TLS)
    Request(String),
    /// The catalog answered with a non-success HTTP status
    Status(u16),
    /// The response body was not a valid search response
    Decode(String),
}

impl CatalogError {
    /// Whether repeating the request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Request(_) => true,
            CatalogError::Status(status) => *status >= 500,
            CatalogError::Decode(_) => false,
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Request(msg) => write!(f, "Request error: {msg}"),
            CatalogError::Status(status) => write!(f, "Catalog returned HTTP {status}"),
            CatalogError::Decode(msg) => write!(f, "Decode error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            CatalogError::Status(status.as_u16())
        } else {
            CatalogError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}
