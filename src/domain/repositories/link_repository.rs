//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of a conditional insert.
///
/// Distinguishes a code collision (retryable when the code was generated)
/// from a store failure (never retried, surfaced as [`AppError::Unavailable`]).
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// The link was created; no other live link had the code.
    Created(Link),
    /// Another live link already holds the code; nothing was inserted.
    CodeTaken,
}

/// Store interface for short links.
///
/// The store, not the caller, is responsible for atomicity: conditional
/// insert must be collision-free across concurrent writers, and
/// [`increment_and_touch`](LinkRepository::increment_and_touch) must apply
/// the increment and timestamp as one indivisible operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link only if no live link with the same code exists, as a
    /// single atomic store operation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the store call fails.
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Finds a link by its short code. Never touches click accounting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the store call fails.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter and stamps `last_clicked`,
    /// returning the target URL.
    ///
    /// Returns `Ok(None)` when no live link holds the code (never created,
    /// or deleted). In that case no update is applied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the store call fails.
    async fn increment_and_touch(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Deletes a link, immediately freeing its code for reuse.
    ///
    /// Returns `Ok(true)` if a link was removed, `Ok(false)` if the code had
    /// no live link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the store call fails.
    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError>;

    /// Lists all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] when the store call fails.
    async fn list(&self) -> Result<Vec<Link>, AppError>;
}
