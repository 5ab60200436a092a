//! API response types.
//!
//! Request and plan bodies reuse [`crate::payload`] so the CLI and the API
//! speak the same JSON.

use serde::{Deserialize, Serialize};

/// Service identification returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Crate name.
    pub name: String,
    /// Crate version.
    pub version: String,
}

impl ServiceInfo {
    /// Information about this build.
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Error body for refused requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable reason code.
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}
