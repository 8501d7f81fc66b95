use thiserror::Error;

/// Errors surfaced by the product catalog channel.
///
/// The catalog reports unresolved ids by omitting them from the response,
/// so the only failure mode of the call itself is a broken channel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors surfaced by the order store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors returned by the order service pipelines.
///
/// Business failures are values, not panics: every pipeline collapses its
/// failure into one of these variants before responding.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Product not found in catalog: {0}")]
    UnresolvedProduct(String),
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Product catalog unavailable: {0}")]
    CatalogUnavailable(String),
    #[error("Order storage error: {0}")]
    StorageError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// Client-facing status code carried alongside the rejection message.
    pub fn status(&self) -> u16 {
        match self {
            Self::ValidationError(_) | Self::UnresolvedProduct(_) => 400,
            Self::NotFound(_) => 404,
            Self::CatalogUnavailable(_) => 503,
            Self::StorageError(_) | Self::ActorCommunicationError(_) => 500,
        }
    }
}
