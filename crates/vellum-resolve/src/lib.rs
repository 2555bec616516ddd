//! Variable cascade resolution.
//!
//! A variable's effective value is found by walking, for one element:
//!
//! 1. explicitly applied states (most recent first, or only the most recent
//!    one when stacking is off)
//! 2. selected category states (last applied category first)
//! 3. the element's default state
//! 4. the nested instance's element for qualified names, or the element's
//!    base type otherwise
//! 5. the standard default state from the registry
//!
//! The first value-setting entry wins. See [`VariableResolver`].

pub mod error;
pub mod options;
pub mod resolution;
pub mod resolver;
pub mod selection;

pub use error::{ResolveError, Result};
pub use options::{ResolveOptions, StackingMode};
pub use resolution::{Origin, Resolution, Source};
pub use resolver::{Scope, VariableResolver};
pub use selection::{StateRef, StateSelection};
