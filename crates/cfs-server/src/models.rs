//! Response bodies for the HTTP API

use serde::Serialize;

/// Error payload carried by every non-2xx response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable failure description
    pub detail: String,
}

impl ErrorBody {
    /// Create an error body
    pub fn new<S: Into<String>>(detail: S) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Body of a successful create (201)
#[derive(Debug, Serialize)]
pub struct CreatedBody {
    /// Name of the created record
    #[serde(rename = "Created")]
    pub created: String,
}

/// Body of a successful update (200)
#[derive(Debug, Serialize)]
pub struct UpdatedBody {
    /// Name of the updated record
    #[serde(rename = "Updated")]
    pub updated: String,
}

/// Body of a successful delete (200)
#[derive(Debug, Serialize)]
pub struct DeletedBody {
    /// Name the delete was keyed on
    #[serde(rename = "Deleted")]
    pub deleted: String,
    /// How many records were removed
    pub total: u64,
}

/// Liveness probe result
#[derive(Debug, Serialize)]
pub struct HeartbeatResult {
    /// Whether the service is alive
    pub is_alive: bool,
}

/// Readiness/status probe result
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Whether the service is serving
    pub is_alive: bool,
}
