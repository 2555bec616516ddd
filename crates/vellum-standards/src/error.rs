//! Error types for registry queries.

use thiserror::Error;
use vellum_model::ModelError;

/// Errors raised by the standard defaults registry.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum StandardsError {
    /// The registry was queried before `initialize`.
    #[error("Standard defaults are not initialized; call initialize first")]
    NotInitialized,

    /// No default state is registered for the requested type.
    #[error("Type {type_name} has no default state registered")]
    MissingDefaultState { type_name: String },

    /// Adding a standard element to a project failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
