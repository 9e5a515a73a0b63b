/// Catalog-specific errors
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The underlying store could not be opened or its schema could not be
    /// established
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// A read or write against the store failed
    #[error("Query error: {0}")]
    Query(String),
}

impl From<CatalogError> for aria_core::AriaError {
    fn from(err: CatalogError) -> Self {
        aria_core::AriaError::catalog(err.to_string())
    }
}
