//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;

/// PostgreSQL repository for link storage and accounting.
///
/// Uniqueness and click accounting rely on the database, not the
/// application: `INSERT .. ON CONFLICT DO NOTHING` for collision-free
/// allocation, and a server-side `clicks = clicks + 1` expression so
/// concurrent increments are never lost to stale read-modify-write.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn link_from_row(row: &PgRow) -> Result<Link, sqlx::Error> {
    Ok(Link::new(
        row.try_get("id")?,
        row.try_get("code")?,
        row.try_get("target_url")?,
        row.try_get("clicks")?,
        row.try_get("last_clicked")?,
        row.try_get("created_at")?,
    ))
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO links (code, target_url)
            VALUES ($1, $2)
            ON CONFLICT (code) DO NOTHING
            RETURNING id, code, target_url, clicks, last_clicked, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            Some(row) => Ok(InsertOutcome::Created(link_from_row(&row)?)),
            None => Ok(InsertOutcome::CodeTaken),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, code, target_url, clicks, last_clicked, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(|r| link_from_row(&r)).transpose().map_err(Into::into)
    }

    async fn increment_and_touch(&self, code: &str) -> Result<Option<String>, AppError> {
        // Lookup, increment, and timestamp as one statement; zero rows means
        // the code has no live link and nothing was updated.
        let target_url: Option<String> = sqlx::query_scalar(
            r#"
            UPDATE links
            SET clicks = clicks + 1, last_clicked = NOW()
            WHERE code = $1
            RETURNING target_url
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(target_url)
    }

    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT id, code, target_url, clicks, last_clicked, created_at
            FROM links
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter()
            .map(|r| link_from_row(r).map_err(Into::into))
            .collect()
    }
}
