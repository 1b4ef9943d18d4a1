//! Link allocation, redirect accounting, and deletion.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::target_url::validate_target_url;
use serde_json::json;

/// Upper bound on code regeneration attempts. Only collisions are retried;
/// store errors abort immediately.
const MAX_ATTEMPTS: usize = 10;

/// Service owning the lifecycle of short links.
///
/// Two responsibilities:
///
/// - **Allocation** ([`create_link`](Self::create_link)): validates input,
///   then claims a code through the store's atomic conditional insert. There
///   is no existence pre-check; the insert itself is the uniqueness
///   mechanism, so concurrent allocators cannot race past it.
/// - **Redirect accounting** ([`resolve_and_count`](Self::resolve_and_count)):
///   resolves a code to its target while counting the visit, in a single
///   atomic store operation.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link, allocating a code if none was supplied.
    ///
    /// Validation happens before any store call. A caller-supplied code gets
    /// exactly one insert attempt: the caller chose it, so a collision is a
    /// conflict, never a silent substitution. A generated code is retried on
    /// collision, up to [`MAX_ATTEMPTS`] times.
    ///
    /// On success exactly one new link exists, with `clicks = 0` and
    /// `last_clicked` unset.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed or non-http(s)
    /// target URL, or a custom code outside `[A-Za-z0-9]{6,8}`.
    /// Returns [`AppError::Conflict`] when the custom code is taken.
    /// Returns [`AppError::Internal`] when generation exhausts its attempts.
    pub async fn create_link(
        &self,
        target_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target_url(&target_url).map_err(|e| {
            AppError::bad_request(
                "target_url must be a valid URL with http/https",
                json!({ "reason": e.to_string() }),
            )
        })?;

        match custom_code {
            Some(code) => {
                validate_custom_code(&code)?;

                match self
                    .link_repository
                    .insert_if_absent(NewLink {
                        code: code.clone(),
                        target_url,
                    })
                    .await?
                {
                    InsertOutcome::Created(link) => Ok(link),
                    InsertOutcome::CodeTaken => Err(AppError::conflict(
                        "Code already exists",
                        json!({ "code": code }),
                    )),
                }
            }
            None => self.create_with_generated_code(target_url).await,
        }
    }

    /// Resolves a code to its target URL, counting the visit.
    ///
    /// The lookup, the increment, and the `last_clicked` stamp are one
    /// indivisible store operation, so concurrent visits are all counted and
    /// never observed half-applied. A code whose link was deleted (or never
    /// existed) reports not-found; a redirect racing a delete is treated as
    /// not-found rather than serving the stale target once more.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code has no live link.
    pub async fn resolve_and_count(&self, code: &str) -> Result<String, AppError> {
        self.link_repository
            .increment_and_touch(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })
    }

    /// Deletes a link, immediately freeing its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code has no live link.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.link_repository.delete_by_code(code).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ))
        }
    }

    /// Allocates a generated code with bounded collision retry.
    async fn create_with_generated_code(&self, target_url: String) -> Result<Link, AppError> {
        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            match self
                .link_repository
                .insert_if_absent(NewLink {
                    code,
                    target_url: target_url.clone(),
                })
                .await?
            {
                InsertOutcome::Created(link) => return Ok(link),
                InsertOutcome::CodeTaken => continue,
            }
        }

        // The code space is ~62^6 at minimum; hitting this means something
        // operational is wrong, not bad caller input.
        Err(AppError::internal(
            "Failed to allocate a unique code",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}
