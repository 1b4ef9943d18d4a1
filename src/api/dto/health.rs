//! DTOs for the health check endpoint.
//!
//! Shape mirrors what monitoring expects: an overall verdict plus one entry
//! per checked component.

use serde::Serialize;

/// Top-level health report.
///
/// `status` is `"healthy"` when every component check is `"ok"`, otherwise
/// `"degraded"`; `version` is the crate version serving the request.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// One field per checked component. Currently only the database.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Verdict for a single component, with an optional human-readable detail.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
