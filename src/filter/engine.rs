//! The filter engine: pure, order-preserving selection over a catalog.

use crate::bookmark::BookmarkSet;
use crate::opportunity::Opportunity;

use super::{FilterCriteria, SearchQuery};

/// Does a single record satisfy the structured criteria?
pub fn matches_criteria(
    opportunity: &Opportunity,
    criteria: &FilterCriteria,
    bookmarks: &BookmarkSet,
) -> bool {
    if criteria.show_bookmarks_only && !bookmarks.contains(&opportunity.id) {
        return false;
    }

    if !criteria.causes.is_empty() && !criteria.causes.contains(&opportunity.cause) {
        return false;
    }

    if !criteria.commitment_levels.is_empty()
        && !criteria.commitment_levels.contains(&opportunity.commitment_level)
    {
        return false;
    }

    criteria.date_range.contains(opportunity.date)
}

/// First pass: bookmarks, causes, commitment levels, and date range.
pub fn filter_opportunities<'a, I>(
    catalog: I,
    criteria: &FilterCriteria,
    bookmarks: &BookmarkSet,
) -> Vec<&'a Opportunity>
where
    I: IntoIterator<Item = &'a Opportunity>,
{
    catalog
        .into_iter()
        .filter(|opp| matches_criteria(opp, criteria, bookmarks))
        .collect()
}

/// Second pass: free-text search over an already filtered list.
pub fn apply_search<'a>(
    results: Vec<&'a Opportunity>,
    query: &SearchQuery,
) -> Vec<&'a Opportunity> {
    if query.is_empty() {
        return results;
    }

    results.into_iter().filter(|opp| query.matches(opp)).collect()
}

/// The records a user should currently see, in catalog order.
pub fn visible_opportunities<'a, I>(
    catalog: I,
    criteria: &FilterCriteria,
    bookmarks: &BookmarkSet,
    search_text: &str,
) -> Vec<&'a Opportunity>
where
    I: IntoIterator<Item = &'a Opportunity>,
{
    let filtered = filter_opportunities(catalog, criteria, bookmarks);
    apply_search(filtered, &SearchQuery::new(search_text))
}
