//! Extension hook for default-state schemas.

use vellum_model::StateDefinition;

/// Adjusts default-state schemas during registry initialization.
///
/// Tooling that needs extra variables (an editor, a plugin host) injects an
/// augmenter at registry construction instead of forking the built-in
/// schemas.
pub trait SchemaAugmenter: Send + Sync {
    /// Extra named types whose default states the registry should carry.
    ///
    /// Names that collide with built-in types are ignored.
    fn additional_types(&self) -> Vec<(String, StateDefinition)> {
        Vec::new()
    }

    /// Called once per registered type with its fully built default state.
    fn augment_default_state(&self, type_name: &str, state: &mut StateDefinition);
}

impl<F> SchemaAugmenter for F
where
    F: Fn(&str, &mut StateDefinition) + Send + Sync,
{
    fn augment_default_state(&self, type_name: &str, state: &mut StateDefinition) {
        self(type_name, state);
    }
}
