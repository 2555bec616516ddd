//! Data model for cascading UI descriptions.
//!
//! Elements (screens, components and standard primitives) are described by
//! named states holding typed variables. This crate provides the shapes
//! involved and enforces the invariants that can be checked at authoring
//! time:
//!
//! - [`types`] and [`value`]: type tags and tagged values
//! - [`enums`]: the standard enumerations used by built-in schemas
//! - [`name`]: instance-qualified variable names
//! - [`variable`], [`state`], [`element`]: variables, states and elements
//! - [`behavior`]: behavior contracts components can claim
//! - [`project`]: the catalog of elements and behaviors
//!
//! Resolution of effective values lives in `vellum-resolve`; contract
//! checking lives in `vellum-validate`.

pub mod behavior;
pub mod element;
pub mod enums;
pub mod error;
pub mod name;
pub mod project;
pub mod state;
pub mod types;
pub mod value;
pub mod variable;

pub use behavior::{BehaviorDefinition, BehaviorReference, RequiredInstance};
pub use element::{ElementDefinition, ElementKind, Instance};
pub use enums::{
    Blend, ChildrenLayout, DimensionUnitType, EnumKind, EnumValue, HorizontalAlignment,
    PositionUnitType, TextOverflowHorizontalMode, TextOverflowVerticalMode, TextureAddress,
    VerticalAlignment,
};
pub use error::{ModelError, Result};
pub use name::QualifiedName;
pub use project::{InstanceLocation, Project};
pub use state::{DEFAULT_STATE_NAME, StateCategory, StateDefinition};
pub use types::{ListItemType, TypeTag};
pub use value::{ListValue, Point, Variant};
pub use variable::{VariableEntry, VariableListEntry};
