//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A short link with its click accounting metadata.
///
/// `code` and `target_url` are immutable after creation; `clicks` and
/// `last_clicked` are mutated only by the redirect path, through the store's
/// atomic increment.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        target_url: String,
        clicks: i64,
        last_clicked: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            target_url,
            clicks,
            last_clicked,
            created_at,
        }
    }

    /// Returns true if the link has been visited at least once.
    pub fn was_clicked(&self) -> bool {
        self.last_clicked.is_some()
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            0,
            None,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "abc123");
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.created_at, now);
        assert!(!link.was_clicked());
    }

    #[test]
    fn test_link_was_clicked() {
        let link = Link::new(
            2,
            "xyz789A".to_string(),
            "https://example.com".to_string(),
            5,
            Some(Utc::now()),
            Utc::now(),
        );
        assert!(link.was_clicked());
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            code: "xyz789".to_string(),
            target_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.code, "xyz789");
        assert_eq!(new_link.target_url, "https://rust-lang.org");
    }
}
