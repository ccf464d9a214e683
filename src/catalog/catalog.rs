//! Catalog - validated, read-only collection of opportunities.

use std::collections::HashSet;
use std::sync::Arc;

use crate::opportunity::Opportunity;

use super::CatalogError;

/// The full set of opportunities for a session.
///
/// Ids are unique. Clone-friendly (clones share the same records).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Arc<[Opportunity]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(records: Vec<Opportunity>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// Parse a JSON array of opportunity records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<Opportunity> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(records)
    }

    pub fn as_slice(&self) -> &[Opportunity] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Opportunity> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a single opportunity, e.g. for a details view.
    pub fn get(&self, id: &str) -> Option<&Opportunity> {
        self.records.iter().find(|opp| opp.id == id)
    }

    /// Distinct causes in first-seen order.
    pub fn causes(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|opp| opp.cause.as_str()))
    }

    /// Distinct commitment levels in first-seen order.
    pub fn commitment_levels(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|opp| opp.commitment_level.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Opportunity;
    type IntoIter = std::slice::Iter<'a, Opportunity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
