//! Opportunity - the immutable record a directory lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One volunteer listing.
///
/// Field names serialize in camelCase (`commitmentLevel`, `imageUrl`) and
/// the date as an ISO `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    pub commitment_level: String,
    pub cause: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Opportunity {
    /// The image to render, or `placeholder` when the record has none.
    pub fn image_url_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image_url.as_deref().unwrap_or(placeholder)
    }

    /// The fields free-text search looks at, in the order they are checked.
    pub(crate) fn searchable_fields(&self) -> [&str; 5] {
        [
            &self.title,
            &self.organization,
            &self.description,
            &self.location,
            &self.cause,
        ]
    }
}
