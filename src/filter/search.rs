//! Free-text search normalization.

use crate::opportunity::Opportunity;

/// A normalized search query: trimmed and lowercased.
///
/// A query that is empty after trimming matches every record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Case-insensitive substring match against title, organization,
    /// description, location, or cause.
    pub fn matches(&self, opportunity: &Opportunity) -> bool {
        if self.is_empty() {
            return true;
        }

        opportunity
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl From<&str> for SearchQuery {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
