//! Behavior contracts.

use serde::{Deserialize, Serialize};

use crate::state::StateCategory;
use crate::variable::VariableEntry;

/// An instance a behavior requires the implementing component to expose.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequiredInstance {
    pub name: String,
    /// When set, the instance's type must equal or derive from this type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    /// Behaviors the instance's base-type component must itself declare.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_behaviors: Vec<String>,
}

impl RequiredInstance {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: None,
            required_behaviors: Vec::new(),
        }
    }

    pub fn of_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    pub fn with_behavior(mut self, behavior: impl Into<String>) -> Self {
        self.required_behaviors.push(behavior.into());
        self
    }
}

/// A named contract that components can claim to satisfy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BehaviorDefinition {
    pub name: String,
    #[serde(default)]
    pub required_instances: Vec<RequiredInstance>,
    /// Variables the component must expose, with their required types.
    #[serde(default)]
    pub required_variables: Vec<VariableEntry>,
    /// Categories copied onto a component when the behavior is attached.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<StateCategory>,
}

impl BehaviorDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn require_instance(mut self, instance: RequiredInstance) -> Self {
        self.required_instances.push(instance);
        self
    }

    pub fn require_variable(mut self, variable: VariableEntry) -> Self {
        self.required_variables.push(variable);
        self
    }

    pub fn with_category(mut self, category: StateCategory) -> Self {
        self.categories.push(category);
        self
    }
}

/// A component's reference to a behavior in the project catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BehaviorReference {
    pub behavior_name: String,
}

impl BehaviorReference {
    pub fn new(behavior_name: impl Into<String>) -> Self {
        Self {
            behavior_name: behavior_name.into(),
        }
    }
}
