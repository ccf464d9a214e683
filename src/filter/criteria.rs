//! FilterCriteria - the structured constraints a user selects.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date bounds.
///
/// `start` is a plain lower bound. `end` covers its whole calendar day: a
/// date passes when it falls strictly before `end + 1 day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }

        if let Some(end) = self.end {
            // NaiveDate::MAX has no successor; nothing lies past it.
            if let Some(end_plus_one) = end.checked_add_days(Days::new(1)) {
                if date >= end_plus_one {
                    return false;
                }
            }
        }

        true
    }
}

/// The combined filter constraints, excluding free-text search.
///
/// Empty sets impose no constraint. A non-empty set matches any of its
/// members. All categories must match for a record to be visible.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub causes: BTreeSet<String>,
    pub commitment_levels: BTreeSet<String>,
    pub date_range: DateRange,
    pub show_bookmarks_only: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_causes<I, T>(mut self, causes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.causes = causes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_commitment_levels<I, T>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.commitment_levels = levels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.date_range = DateRange::new(start, end);
        self
    }

    pub fn bookmarks_only(mut self, show_bookmarks_only: bool) -> Self {
        self.show_bookmarks_only = show_bookmarks_only;
        self
    }

    /// Check or uncheck a cause.
    pub fn set_cause(&mut self, cause: impl Into<String>, checked: bool) {
        set_member(&mut self.causes, cause.into(), checked);
    }

    /// Check or uncheck a commitment level.
    pub fn set_commitment_level(&mut self, level: impl Into<String>, checked: bool) {
        set_member(&mut self.commitment_levels, level.into(), checked);
    }

    pub fn set_start(&mut self, start: Option<NaiveDate>) {
        self.date_range.start = start;
    }

    pub fn set_end(&mut self, end: Option<NaiveDate>) {
        self.date_range.end = end;
    }

    pub fn set_show_bookmarks_only(&mut self, show_bookmarks_only: bool) {
        self.show_bookmarks_only = show_bookmarks_only;
    }

    /// Reset every constraint.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no constraint is set at all.
    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
            && self.commitment_levels.is_empty()
            && self.date_range.is_unbounded()
            && !self.show_bookmarks_only
    }
}

fn set_member(set: &mut BTreeSet<String>, value: String, checked: bool) {
    if checked {
        set.insert(value);
    } else {
        set.remove(&value);
    }
}

/// One entry in the "active filters" summary shown above results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ActiveFilter {
    Cause(String),
    Commitment(String),
    BookmarkedOnly,
    Search(String),
}

/// Summarize the active constraints: causes, then commitment levels, then
/// the bookmarks toggle, then the search text. Date bounds are not listed.
///
/// Causes and commitment levels come out in sorted order, not the order
/// they were selected in. The search entry carries the text exactly as
/// typed; it is listed only when something other than whitespace was typed.
pub fn active_filters(criteria: &FilterCriteria, search_text: &str) -> Vec<ActiveFilter> {
    let mut active: Vec<ActiveFilter> = criteria
        .causes
        .iter()
        .cloned()
        .map(ActiveFilter::Cause)
        .chain(
            criteria
                .commitment_levels
                .iter()
                .cloned()
                .map(ActiveFilter::Commitment),
        )
        .collect();

    if criteria.show_bookmarks_only {
        active.push(ActiveFilter::BookmarkedOnly);
    }

    if !search_text.trim().is_empty() {
        active.push(ActiveFilter::Search(search_text.to_string()));
    }

    active
}

pub fn has_active_filters(criteria: &FilterCriteria, search_text: &str) -> bool {
    !criteria.causes.is_empty()
        || !criteria.commitment_levels.is_empty()
        || criteria.show_bookmarks_only
        || !search_text.trim().is_empty()
}
