//! Validation diagnostics.
//!
//! Each variant carries only the data its message needs.

use std::fmt;

use serde::{Deserialize, Serialize};
use vellum_model::TypeTag;

/// Which check produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Behavior contracts a component claims to satisfy.
    Behavior,
    /// Parent references between instances.
    Parent,
    /// Consistency of variables set in states.
    State,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Behavior => "Behavior",
            Self::Parent => "Parent",
            Self::State => "State",
        }
    }
}

/// A problem found while validating an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Diagnostic {
    // Behavior checks
    /// The component references a behavior the project does not define.
    MissingBehaviorReference { behavior: String },
    /// No instance satisfies a behavior's required instance.
    MissingRequiredInstance {
        behavior: String,
        instance: String,
        required_type: Option<String>,
        required_behaviors: Vec<String>,
    },
    /// A variable required by a behavior is absent.
    MissingRequiredVariable { behavior: String, variable: String },
    /// A variable required by a behavior has the wrong type.
    RequiredVariableTypeMismatch {
        behavior: String,
        variable: String,
        required: TypeTag,
        actual: TypeTag,
    },

    // Parent checks
    /// A `Parent` variable names an instance that does not exist.
    DanglingParent {
        instance: String,
        parent: String,
        state: String,
    },

    // State checks
    /// A default-state-only variable is set in another state.
    DefaultOnlyVariableInState { variable: String, state: String },
    /// A qualified variable refers to an instance the element lacks.
    UnknownInstanceReference {
        variable: String,
        instance: String,
        state: String,
    },
    /// A state assigns a variable with a type other than its declaration.
    VariableTypeChanged {
        variable: String,
        state: String,
        declared: TypeTag,
        actual: TypeTag,
    },
}

impl Diagnostic {
    /// Stable code for filtering and reporting.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::MissingBehaviorReference { .. } => "VB001",
            Diagnostic::MissingRequiredInstance { .. } => "VB002",
            Diagnostic::MissingRequiredVariable { .. } => "VB003",
            Diagnostic::RequiredVariableTypeMismatch { .. } => "VB004",
            Diagnostic::DanglingParent { .. } => "VP001",
            Diagnostic::DefaultOnlyVariableInState { .. } => "VS001",
            Diagnostic::UnknownInstanceReference { .. } => "VS002",
            Diagnostic::VariableTypeChanged { .. } => "VS003",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Diagnostic::MissingBehaviorReference { .. }
            | Diagnostic::MissingRequiredInstance { .. }
            | Diagnostic::MissingRequiredVariable { .. }
            | Diagnostic::RequiredVariableTypeMismatch { .. } => Category::Behavior,
            Diagnostic::DanglingParent { .. } => Category::Parent,
            Diagnostic::DefaultOnlyVariableInState { .. }
            | Diagnostic::UnknownInstanceReference { .. }
            | Diagnostic::VariableTypeChanged { .. } => Category::State,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        match self {
            Diagnostic::MissingBehaviorReference { behavior } => {
                format!("Missing reference to behavior {behavior}")
            }

            Diagnostic::MissingRequiredInstance {
                behavior,
                instance,
                required_type,
                required_behaviors,
            } => {
                let mut message = format!("Missing instance with name {instance}");
                if let Some(required_type) = required_type {
                    message.push_str(&format!(" of type {required_type}"));
                }
                match required_behaviors.as_slice() {
                    [] => {}
                    [single] => message.push_str(&format!(" with behavior type {single}")),
                    many => message.push_str(&format!(" with behavior types {}", many.join(", "))),
                }
                message.push_str(&format!(" needed by behavior {behavior}"));
                message
            }

            Diagnostic::MissingRequiredVariable { behavior, variable } => format!(
                "The behavior {behavior} requires a variable named {variable} but this variable \
                 doesn't exist. Add a custom variable or expose a variable and give it the \
                 required name to solve this error."
            ),

            Diagnostic::RequiredVariableTypeMismatch {
                behavior,
                variable,
                required,
                actual,
            } => format!(
                "The behavior {behavior} requires a variable named {variable} with type \
                 {required}. This variable exists but it has the wrong type {actual}."
            ),

            Diagnostic::DanglingParent {
                instance,
                parent,
                state,
            } => format!(
                "{instance} has a parent set to {parent} which does not exist in the state {state}"
            ),

            Diagnostic::DefaultOnlyVariableInState { variable, state } => format!(
                "{variable} can only be set in the default state but is set in the state {state}"
            ),

            Diagnostic::UnknownInstanceReference {
                variable,
                instance,
                state,
            } => format!(
                "{variable} in the state {state} refers to instance {instance} which does not exist"
            ),

            Diagnostic::VariableTypeChanged {
                variable,
                state,
                declared,
                actual,
            } => format!(
                "{variable} is declared as {declared} but the state {state} sets it as {actual}"
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}
