//! Error types for model construction and mutation.

use thiserror::Error;

use crate::types::TypeTag;

/// Errors raised when an authoring operation would break a model invariant.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ModelError {
    /// An element with the same name already exists in the project.
    #[error("element {name} already exists")]
    DuplicateElement { name: String },

    /// An instance with the same name already exists in the owning element.
    #[error("element {element} already contains an instance named {instance}")]
    DuplicateInstance { element: String, instance: String },

    /// A state already contains an entry with the same qualified name.
    #[error("state {state} already defines variable {variable}")]
    DuplicateVariable { state: String, variable: String },

    /// A category with the same name already exists in the element.
    #[error("element {element} already has a category named {category}")]
    DuplicateCategory { element: String, category: String },

    /// A state with the same name already exists in the same scope.
    #[error("{scope} already has a state named {state}")]
    DuplicateState { scope: String, state: String },

    /// `Default` names the element's own default state and cannot be added
    /// as an ordinary or categorized state.
    #[error("{scope} cannot contain a state named {state}; the name is reserved")]
    ReservedStateName { scope: String, state: String },

    /// An element's default state carries a name other than `Default`.
    #[error("default state of element {element} is named {state}")]
    MisnamedDefaultState { element: String, state: String },

    /// A behavior with the same name already exists in the catalog.
    #[error("behavior {name} already exists")]
    DuplicateBehavior { name: String },

    /// No element with the given name exists.
    #[error("unknown element {name}")]
    UnknownElement { name: String },

    /// No behavior with the given name exists in the catalog.
    #[error("unknown behavior {name}")]
    UnknownBehavior { name: String },

    /// No state with the given name exists in the element.
    #[error("element {element} has no state named {state}")]
    UnknownState { element: String, state: String },

    /// A qualified variable name has an empty segment.
    #[error("invalid qualified variable name '{name}'")]
    InvalidQualifiedName { name: String },

    /// A type tag string could not be parsed.
    #[error("invalid type tag '{value}'")]
    InvalidTypeTag { value: String },

    /// Assigning the entry would change the variable's declared type.
    #[error("variable {variable} is declared as {expected} but was assigned as {actual}")]
    TypeMismatch {
        variable: String,
        expected: TypeTag,
        actual: TypeTag,
    },

    /// The entry's value does not conform to its own type tag.
    #[error("value of variable {variable} does not conform to type {type_tag}")]
    ValueTypeMismatch { variable: String, type_tag: TypeTag },

    /// The element cannot be removed while instances or derived elements
    /// still reference it.
    #[error("element {element} is still referenced by {}", .referenced_by.join(", "))]
    ElementInUse {
        element: String,
        referenced_by: Vec<String>,
    },

    /// Behaviors can only be attached to components.
    #[error("element {element} is not a component and cannot carry behaviors")]
    NotAComponent { element: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
