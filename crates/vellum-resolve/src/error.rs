//! Error types for resolution.

use thiserror::Error;
use vellum_standards::StandardsError;

/// Hard failures during resolution.
///
/// A variable that cannot be found is not an error; it is reported as
/// [`Resolution::NotFound`](crate::Resolution::NotFound).
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ResolveError {
    /// The defaults registry could not answer, usually because it was not
    /// initialized.
    #[error("Standard defaults unavailable: {0}")]
    Standards(#[from] StandardsError),
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
