//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /api/links`.
///
/// The target URL is checked by the link service, which owns the
/// http/https rule; no field-level URL validation here so malformed and
/// wrong-scheme targets get the same error shape.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The redirect target (must be a valid HTTP/HTTPS URL).
    pub target_url: String,

    /// Optional caller-chosen short code, `[A-Za-z0-9]{6,8}`.
    pub code: Option<String>,
}

/// Response body for a successfully created link.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub code: String,
    pub target_url: String,
    pub short_url: String,
}

/// JSON representation of a link with its click accounting.
///
/// Returned by the list and stats endpoints; reading it never increments
/// the click counter.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub target_url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            target_url: link.target_url,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}
