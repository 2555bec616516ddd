//! Element definitions and the instances they own.

use serde::{Deserialize, Serialize};

use crate::behavior::BehaviorReference;
use crate::error::{ModelError, Result};
use crate::state::{StateCategory, StateDefinition};
use crate::variable::VariableEntry;

/// What sort of element a definition describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Screen,
    Component,
    /// A built-in primitive such as Text or Sprite.
    Standard,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Screen => "Screen",
            Self::Component => "Component",
            Self::Standard => "Standard",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named usage of another element inside an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub name: String,
    /// Name of the element this instance instantiates.
    pub base_type: String,
    /// Extra behaviors this instance promises to satisfy.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub behaviors: Vec<String>,
}

impl Instance {
    pub fn new(name: impl Into<String>, base_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: base_type.into(),
            behaviors: Vec::new(),
        }
    }
}

/// A screen, component or standard element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ElementFile")]
pub struct ElementDefinition {
    pub name: String,
    pub kind: ElementKind,
    /// Element this one derives from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    pub default_state: StateDefinition,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<StateDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<StateCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<Instance>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub behaviors: Vec<BehaviorReference>,
}

impl ElementDefinition {
    fn with_kind(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            kind,
            base_type: None,
            default_state: StateDefinition::default_state(),
            states: Vec::new(),
            categories: Vec::new(),
            instances: Vec::new(),
            behaviors: Vec::new(),
        }
    }

    pub fn screen(name: impl Into<String>) -> Self {
        Self::with_kind(name, ElementKind::Screen)
    }

    pub fn component(name: impl Into<String>) -> Self {
        Self::with_kind(name, ElementKind::Component)
    }

    /// Creates a standard element whose default state is `defaults`.
    pub fn standard(name: impl Into<String>, defaults: StateDefinition) -> Self {
        let mut element = Self::with_kind(name, ElementKind::Standard);
        element.default_state = defaults;
        element
    }

    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    pub fn is_component(&self) -> bool {
        self.kind == ElementKind::Component
    }

    pub fn instance(&self, name: &str) -> Option<&Instance> {
        self.instances.iter().find(|instance| instance.name == name)
    }

    pub fn add_instance(&mut self, instance: Instance) -> Result<()> {
        if self.instance(&instance.name).is_some() {
            return Err(ModelError::DuplicateInstance {
                element: self.name.clone(),
                instance: instance.name,
            });
        }
        self.instances.push(instance);
        Ok(())
    }

    pub fn category(&self, name: &str) -> Option<&StateCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut StateCategory> {
        self.categories
            .iter_mut()
            .find(|category| category.name == name)
    }

    pub fn add_category(&mut self, category: StateCategory) -> Result<()> {
        if self.category(&category.name).is_some() {
            return Err(ModelError::DuplicateCategory {
                element: self.name.clone(),
                category: category.name,
            });
        }
        self.categories.push(category);
        Ok(())
    }

    /// Adds an uncategorized state. `Default` is reserved.
    pub fn add_state(&mut self, state: StateDefinition) -> Result<()> {
        if state.is_default() {
            return Err(ModelError::ReservedStateName {
                scope: format!("element {}", self.name),
                state: state.name,
            });
        }
        if self.states.iter().any(|s| s.name == state.name) {
            return Err(ModelError::DuplicateState {
                scope: format!("element {}", self.name),
                state: state.name,
            });
        }
        self.states.push(state);
        Ok(())
    }

    /// Looks up a state by name, either uncategorized or inside `category`.
    ///
    /// `Default` always names the default state when no category is given.
    pub fn state_in(&self, category: Option<&str>, name: &str) -> Option<&StateDefinition> {
        match category {
            Some(category) => self.category(category)?.state(name),
            None if name == self.default_state.name => Some(&self.default_state),
            None => self.states.iter().find(|state| state.name == name),
        }
    }

    pub fn state_in_mut(
        &mut self,
        category: Option<&str>,
        name: &str,
    ) -> Option<&mut StateDefinition> {
        match category {
            Some(category) => self.category_mut(category)?.state_mut(name),
            None if name == self.default_state.name => Some(&mut self.default_state),
            None => self.states.iter_mut().find(|state| state.name == name),
        }
    }

    /// Every state of the element with its category, default state first.
    pub fn all_states(&self) -> impl Iterator<Item = (Option<&str>, &StateDefinition)> {
        std::iter::once((None, &self.default_state))
            .chain(self.states.iter().map(|state| (None, state)))
            .chain(self.categories.iter().flat_map(|category| {
                category
                    .states
                    .iter()
                    .map(move |state| (Some(category.name.as_str()), state))
            }))
    }

    pub fn implements_behavior(&self, behavior: &str) -> bool {
        self.behaviors
            .iter()
            .any(|reference| reference.behavior_name == behavior)
    }

    /// Records a behavior reference. Only components carry behaviors.
    pub fn add_behavior_reference(&mut self, behavior: impl Into<String>) -> Result<()> {
        if !self.is_component() {
            return Err(ModelError::NotAComponent {
                element: self.name.clone(),
            });
        }
        let behavior = behavior.into();
        if !self.implements_behavior(&behavior) {
            self.behaviors.push(BehaviorReference::new(behavior));
        }
        Ok(())
    }

    /// Sets a variable in one of the element's states.
    ///
    /// Non-default states may not change the type the default state declares.
    pub fn set_variable(
        &mut self,
        category: Option<&str>,
        state: &str,
        entry: VariableEntry,
    ) -> Result<()> {
        if let Some(declared) = self.default_state.variable(&entry.name)
            && declared.type_tag != entry.type_tag
        {
            return Err(ModelError::TypeMismatch {
                variable: entry.name.to_string(),
                expected: declared.type_tag,
                actual: entry.type_tag,
            });
        }
        let element = self.name.clone();
        let target = self
            .state_in_mut(category, state)
            .ok_or_else(|| ModelError::UnknownState {
                element,
                state: state.to_string(),
            })?;
        target.set_variable(entry)
    }
}

/// Serialized shape of an element.
///
/// Loading rebuilds the element through the same checked operations that
/// authoring uses.
#[derive(Deserialize)]
struct ElementFile {
    name: String,
    kind: ElementKind,
    #[serde(default)]
    base_type: Option<String>,
    default_state: StateDefinition,
    #[serde(default)]
    states: Vec<StateDefinition>,
    #[serde(default)]
    categories: Vec<StateCategory>,
    #[serde(default)]
    instances: Vec<Instance>,
    #[serde(default)]
    behaviors: Vec<BehaviorReference>,
}

impl TryFrom<ElementFile> for ElementDefinition {
    type Error = ModelError;

    fn try_from(file: ElementFile) -> Result<Self> {
        if !file.default_state.is_default() {
            return Err(ModelError::MisnamedDefaultState {
                element: file.name,
                state: file.default_state.name,
            });
        }
        let mut element = Self::with_kind(file.name, file.kind);
        element.base_type = file.base_type;
        element.default_state = file.default_state;
        for state in file.states {
            element.add_state(state)?;
        }
        for category in file.categories {
            element.add_category(category)?;
        }
        for instance in file.instances {
            element.add_instance(instance)?;
        }
        for reference in file.behaviors {
            element.add_behavior_reference(reference.behavior_name)?;
        }
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeTag;

    #[test]
    fn instances_are_unique() {
        let mut element = ElementDefinition::component("Button");
        element.add_instance(Instance::new("Icon", "Sprite")).unwrap();
        let err = element
            .add_instance(Instance::new("Icon", "Text"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "element Button already contains an instance named Icon"
        );
    }

    #[test]
    fn default_is_reserved() {
        let mut element = ElementDefinition::component("Button");
        assert!(matches!(
            element.add_state(StateDefinition::default_state()),
            Err(ModelError::ReservedStateName { .. })
        ));
        element.add_state(StateDefinition::new("Pressed")).unwrap();
        assert!(element.state_in(None, "Pressed").is_some());
        assert!(element.state_in(None, "Default").is_some());
    }

    #[test]
    fn all_states_lists_categories_last() {
        let mut element = ElementDefinition::component("Toggle");
        element.add_state(StateDefinition::new("Loose")).unwrap();
        let mut category = StateCategory::new("ToggleCategory");
        category.add_state(StateDefinition::new("On")).unwrap();
        element.add_category(category).unwrap();

        let names: Vec<_> = element
            .all_states()
            .map(|(category, state)| (category, state.name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                (None, "Default"),
                (None, "Loose"),
                (Some("ToggleCategory"), "On")
            ]
        );
    }

    #[test]
    fn behaviors_require_a_component() {
        let mut screen = ElementDefinition::screen("Main");
        assert!(matches!(
            screen.add_behavior_reference("ButtonBehavior"),
            Err(ModelError::NotAComponent { .. })
        ));
    }

    #[test]
    fn set_variable_checks_default_declaration() {
        let mut element = ElementDefinition::component("Button");
        element
            .default_state
            .push_variable(VariableEntry::named("IsOn", TypeTag::Bool, false))
            .unwrap();
        element.add_state(StateDefinition::new("On")).unwrap();

        element
            .set_variable(None, "On", VariableEntry::named("IsOn", TypeTag::Bool, true))
            .unwrap();
        let err = element
            .set_variable(None, "On", VariableEntry::named("IsOn", TypeTag::String, "yes"))
            .unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch { .. }));
        assert!(matches!(
            element.set_variable(None, "Missing", VariableEntry::named("IsOn", TypeTag::Bool, true)),
            Err(ModelError::UnknownState { .. })
        ));
    }
}
