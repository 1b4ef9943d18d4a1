//! Target URL validation.
//!
//! A target is accepted only if it parses as an absolute URL with an `http`
//! or `https` scheme and a host. Validation happens once, at creation; the
//! redirect path never re-validates.

use url::Url;

/// Errors that can occur during target URL validation.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates a redirect target.
///
/// # Rules
///
/// 1. Must parse as an absolute URL
/// 2. Scheme must be `http` or `https` (rejects `javascript:`, `data:`,
///    `file:`, `ftp:`, ...)
/// 3. Must have a host component
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for malformed URLs.
/// Returns [`TargetUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`TargetUrlError::MissingHost`] for host-less URLs.
pub fn validate_target_url(input: &str) -> Result<(), TargetUrlError> {
    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none() {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(())
}
