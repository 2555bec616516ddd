//! States and state categories.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::name::QualifiedName;
use crate::variable::{VariableEntry, VariableListEntry};

/// Name of the state every element carries.
pub const DEFAULT_STATE_NAME: &str = "Default";

/// A named, ordered collection of variable entries.
///
/// The default state of an element lists every variable the element
/// supports; other states are sparse and only list overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "StateFile")]
pub struct StateDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<VariableEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable_lists: Vec<VariableListEntry>,
}

impl StateDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            variable_lists: Vec::new(),
        }
    }

    /// Creates an empty state named `Default`.
    pub fn default_state() -> Self {
        Self::new(DEFAULT_STATE_NAME)
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_STATE_NAME
    }

    pub fn variable(&self, name: &QualifiedName) -> Option<&VariableEntry> {
        self.variables.iter().find(|entry| &entry.name == name)
    }

    pub fn variable_mut(&mut self, name: &QualifiedName) -> Option<&mut VariableEntry> {
        self.variables.iter_mut().find(|entry| &entry.name == name)
    }

    pub fn list(&self, name: &QualifiedName) -> Option<&VariableListEntry> {
        self.variable_lists.iter().find(|entry| &entry.name == name)
    }

    /// Appends an entry, rejecting a second entry with the same qualified
    /// name or a value that does not fit the entry's type.
    pub fn push_variable(&mut self, entry: VariableEntry) -> Result<()> {
        if !entry.is_well_typed() {
            return Err(ModelError::ValueTypeMismatch {
                variable: entry.name.to_string(),
                type_tag: entry.type_tag,
            });
        }
        if self.variable(&entry.name).is_some() {
            return Err(ModelError::DuplicateVariable {
                state: self.name.clone(),
                variable: entry.name.to_string(),
            });
        }
        self.variables.push(entry);
        Ok(())
    }

    pub fn push_list(&mut self, entry: VariableListEntry) -> Result<()> {
        if self.list(&entry.name).is_some() {
            return Err(ModelError::DuplicateVariable {
                state: self.name.clone(),
                variable: entry.name.to_string(),
            });
        }
        self.variable_lists.push(entry);
        Ok(())
    }

    /// Adds or replaces an entry.
    ///
    /// Replacing keeps the existing position and refuses a change of type.
    pub fn set_variable(&mut self, entry: VariableEntry) -> Result<()> {
        if !entry.is_well_typed() {
            return Err(ModelError::ValueTypeMismatch {
                variable: entry.name.to_string(),
                type_tag: entry.type_tag,
            });
        }
        match self.variable_mut(&entry.name) {
            Some(existing) if existing.type_tag != entry.type_tag => Err(ModelError::TypeMismatch {
                variable: entry.name.to_string(),
                expected: existing.type_tag,
                actual: entry.type_tag,
            }),
            Some(existing) => {
                *existing = entry;
                Ok(())
            }
            None => {
                self.variables.push(entry);
                Ok(())
            }
        }
    }

    /// Removes an entry, returning it if it was present.
    pub fn remove_variable(&mut self, name: &QualifiedName) -> Option<VariableEntry> {
        let index = self.variables.iter().position(|entry| &entry.name == name)?;
        Some(self.variables.remove(index))
    }
}

/// Serialized shape of a state. Entries go through the checked builders.
#[derive(Deserialize)]
struct StateFile {
    name: String,
    #[serde(default)]
    variables: Vec<VariableEntry>,
    #[serde(default)]
    variable_lists: Vec<VariableListEntry>,
}

impl TryFrom<StateFile> for StateDefinition {
    type Error = ModelError;

    fn try_from(file: StateFile) -> Result<Self> {
        let mut state = Self::new(file.name);
        for entry in file.variables {
            state.push_variable(entry)?;
        }
        for list in file.variable_lists {
            state.push_list(list)?;
        }
        Ok(state)
    }
}

/// A named group of mutually exclusive states.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "CategoryFile")]
pub struct StateCategory {
    pub name: String,
    #[serde(default)]
    pub states: Vec<StateDefinition>,
}

impl StateCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
        }
    }

    pub fn state(&self, name: &str) -> Option<&StateDefinition> {
        self.states.iter().find(|state| state.name == name)
    }

    pub fn state_mut(&mut self, name: &str) -> Option<&mut StateDefinition> {
        self.states.iter_mut().find(|state| state.name == name)
    }

    /// Adds a state, rejecting duplicate names within the category.
    /// `Default` is reserved.
    pub fn add_state(&mut self, state: StateDefinition) -> Result<()> {
        if state.is_default() {
            return Err(ModelError::ReservedStateName {
                scope: format!("category {}", self.name),
                state: state.name,
            });
        }
        if self.state(&state.name).is_some() {
            return Err(ModelError::DuplicateState {
                scope: format!("category {}", self.name),
                state: state.name,
            });
        }
        self.states.push(state);
        Ok(())
    }
}

#[derive(Deserialize)]
struct CategoryFile {
    name: String,
    #[serde(default)]
    states: Vec<StateDefinition>,
}

impl TryFrom<CategoryFile> for StateCategory {
    type Error = ModelError;

    fn try_from(file: CategoryFile) -> Result<Self> {
        let mut category = Self::new(file.name);
        for state in file.states {
            category.add_state(state)?;
        }
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeTag;

    fn x(value: f32) -> VariableEntry {
        VariableEntry::named("X", TypeTag::Float, value)
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut state = StateDefinition::default_state();
        state.push_variable(x(1.0)).unwrap();
        let err = state.push_variable(x(2.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "state Default already defines variable X"
        );
    }

    #[test]
    fn set_variable_replaces_in_place() {
        let mut state = StateDefinition::new("Pressed");
        state.push_variable(x(1.0)).unwrap();
        state
            .push_variable(VariableEntry::named("Y", TypeTag::Float, 0.0f32))
            .unwrap();
        state.set_variable(x(9.0)).unwrap();
        assert_eq!(state.variables[0].value, Some(9.0f32.into()));
        assert_eq!(state.variables.len(), 2);
    }

    #[test]
    fn set_variable_refuses_type_change() {
        let mut state = StateDefinition::default_state();
        state.push_variable(x(1.0)).unwrap();
        let err = state
            .set_variable(VariableEntry::named("X", TypeTag::Int, 1))
            .unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch { .. }));
    }

    #[test]
    fn category_states_are_unique() {
        let mut category = StateCategory::new("Selection");
        category.add_state(StateDefinition::new("Selected")).unwrap();
        assert!(category.add_state(StateDefinition::new("Selected")).is_err());
        assert!(category.state("Selected").is_some());
    }

    #[test]
    fn categories_cannot_hold_a_default_state() {
        let mut category = StateCategory::new("Selection");
        let err = category
            .add_state(StateDefinition::default_state())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "category Selection cannot contain a state named Default; the name is reserved"
        );
        assert!(category.states.is_empty());
    }

    #[test]
    fn push_rejects_ill_typed_values() {
        let mut state = StateDefinition::default_state();
        let err = state
            .push_variable(VariableEntry::named("IsOn", TypeTag::Bool, "yes"))
            .unwrap_err();
        assert!(matches!(err, ModelError::ValueTypeMismatch { .. }));
        assert!(state.variables.is_empty());
    }
}
