//! Error types.
//!
//! The planning pipeline itself is infallible; errors only arise when
//! loading or validating external documents.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not a valid JSON array of item records.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The records parsed but failed integrity checks.
    #[error("catalog failed validation with {} issue(s)", .0.len())]
    Invalid(Vec<ValidationError>),
}

impl CatalogError {
    /// Validation issues, if this is an [`CatalogError::Invalid`] error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            CatalogError::Invalid(errors) => errors,
            CatalogError::Parse(_) => &[],
        }
    }
}
