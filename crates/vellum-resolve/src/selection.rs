//! Which states are active during a resolution.

/// A reference to a state, optionally inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateRef {
    pub category: Option<String>,
    pub name: String,
}

impl StateRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            category: None,
            name: name.into(),
        }
    }

    pub fn in_category(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            name: name.into(),
        }
    }
}

/// The explicitly applied states and selected category states of an
/// element, in the order they were applied.
///
/// State names are matched against each element the cascade visits; names
/// an element does not define are skipped there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSelection {
    applied: Vec<StateRef>,
    categories: Vec<(String, String)>,
}

impl StateSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an uncategorized state on top of the current ones.
    pub fn with_state(mut self, name: impl Into<String>) -> Self {
        self.apply(StateRef::new(name));
        self
    }

    /// Selects a state within a category.
    pub fn with_category_state(
        mut self,
        category: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        self.select_category(category, state);
        self
    }

    pub fn apply(&mut self, state: StateRef) {
        self.applied.push(state);
    }

    /// Selects `state` in `category`.
    ///
    /// A category has at most one selected state; reselecting moves the
    /// category to the most recently applied position.
    pub fn select_category(&mut self, category: impl Into<String>, state: impl Into<String>) {
        let category = category.into();
        self.categories.retain(|(existing, _)| *existing != category);
        self.categories.push((category, state.into()));
    }

    /// Applied states, oldest first.
    pub fn applied(&self) -> &[StateRef] {
        &self.applied
    }

    /// Category selections, oldest first.
    pub fn categories(&self) -> &[(String, String)] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reselecting_a_category_moves_it_last() {
        let selection = StateSelection::new()
            .with_category_state("Hover", "On")
            .with_category_state("Press", "Down")
            .with_category_state("Hover", "Off");
        assert_eq!(
            selection.categories(),
            [
                ("Press".to_string(), "Down".to_string()),
                ("Hover".to_string(), "Off".to_string())
            ]
        );
    }

    #[test]
    fn applied_states_keep_order() {
        let selection = StateSelection::new().with_state("S1").with_state("S2");
        let names: Vec<_> = selection.applied().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["S1", "S2"]);
        assert!(!selection.is_empty());
    }
}
