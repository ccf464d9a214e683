use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The source could not be reached. Worth retrying.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("duplicate opportunity id: {0}")]
    DuplicateId(String),

    #[error("failed to parse catalog: {0}")]
    Parse(String),
}

impl CatalogError {
    pub fn is_transient(&self) -> bool {
        matches!(self, CatalogError::Unavailable(_))
    }
}
