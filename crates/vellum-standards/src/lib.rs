//! Built-in element types and their default-state schemas.
//!
//! The [`StandardDefaultsRegistry`] owns the canonical default state of each
//! standard type (Text, Sprite, Container, ...). Resolution falls back to
//! these schemas when an element does not author a value itself.
//!
//! The registry is an explicit value rather than process-wide state. Tools
//! that need extra schema entries inject a [`SchemaAugmenter`].

pub mod augment;
pub mod builders;
pub mod error;
pub mod registry;
pub mod schemas;

pub use augment::SchemaAugmenter;
pub use builders::DimensionVariableAction;
pub use error::{Result, StandardsError};
pub use registry::{DEFAULT_TYPE, StandardDefaultsRegistry};
pub use schemas::STANDARD_TYPES;
