//! Registry of built-in element types and their default states.

use std::fmt;

use tracing::{debug, warn};
use vellum_model::{ElementDefinition, Project, StateDefinition};

use crate::augment::SchemaAugmenter;
use crate::error::{Result, StandardsError};
use crate::schemas;

/// Type used when no type is specified for a new instance.
pub const DEFAULT_TYPE: &str = "Container";

/// Holds the default state of every built-in type.
///
/// The registry starts uninitialized and every query fails until
/// [`initialize`](Self::initialize) is called. Re-initializing rebuilds all
/// schemas and swaps them in as a whole.
///
/// # Example
///
/// ```
/// use vellum_standards::StandardDefaultsRegistry;
///
/// let mut registry = StandardDefaultsRegistry::new();
/// assert!(registry.get_default_state_for("Text", true).is_err());
///
/// registry.initialize();
/// let text = registry.get_default_state_for("Text", true).unwrap().unwrap();
/// assert!(text.is_default());
/// ```
#[derive(Default)]
pub struct StandardDefaultsRegistry {
    defaults: Option<Vec<(String, StateDefinition)>>,
    augmenter: Option<Box<dyn SchemaAugmenter>>,
}

impl fmt::Debug for StandardDefaultsRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardDefaultsRegistry")
            .field(
                "types",
                &self
                    .defaults
                    .as_ref()
                    .map(|defaults| defaults.iter().map(|(name, _)| name).collect::<Vec<_>>()),
            )
            .field("augmenter", &self.augmenter.is_some())
            .finish()
    }
}

impl StandardDefaultsRegistry {
    /// Creates an uninitialized registry without an augmenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an uninitialized registry that runs `augmenter` on every
    /// initialization.
    pub fn with_augmenter(augmenter: impl SchemaAugmenter + 'static) -> Self {
        Self {
            defaults: None,
            augmenter: Some(Box::new(augmenter)),
        }
    }

    /// Creates and initializes a registry.
    pub fn initialized() -> Self {
        let mut registry = Self::new();
        registry.initialize();
        registry
    }

    /// Builds every default state and replaces the current set.
    ///
    /// The augmenter, if any, runs exactly once per type after the built-in
    /// schemas are complete. Nothing is visible to queries until the whole
    /// set is built.
    pub fn initialize(&mut self) {
        let mut defaults = schemas::build_all();

        if let Some(augmenter) = &self.augmenter {
            for (name, state) in augmenter.additional_types() {
                if defaults.iter().any(|(existing, _)| *existing == name) {
                    warn!(type_name = %name, "augmenter type collides with a built-in type");
                    continue;
                }
                defaults.push((name, state));
            }
            for (name, state) in &mut defaults {
                augmenter.augment_default_state(name, state);
            }
        }

        debug!(
            types = defaults.len(),
            variables = defaults
                .iter()
                .map(|(_, state)| state.variables.len())
                .sum::<usize>(),
            reinitialized = self.defaults.is_some(),
            "standard defaults initialized"
        );
        self.defaults = Some(defaults);
    }

    /// Alias of [`initialize`](Self::initialize) for schema refreshes.
    pub fn reinitialize(&mut self) {
        self.initialize();
    }

    pub fn is_initialized(&self) -> bool {
        self.defaults.is_some()
    }

    fn defaults(&self) -> Result<&[(String, StateDefinition)]> {
        self.defaults
            .as_deref()
            .ok_or(StandardsError::NotInitialized)
    }

    /// Returns the default state registered for `type_name`.
    ///
    /// An empty name yields `Ok(None)`. An unknown name is an error when
    /// `throw_on_missing` is set and `Ok(None)` otherwise.
    ///
    /// # Errors
    ///
    /// Fails if the registry is not initialized, or if the type is unknown
    /// and `throw_on_missing` is set.
    pub fn get_default_state_for(
        &self,
        type_name: &str,
        throw_on_missing: bool,
    ) -> Result<Option<&StateDefinition>> {
        let defaults = self.defaults()?;
        if type_name.is_empty() {
            return Ok(None);
        }
        match defaults.iter().find(|(name, _)| name == type_name) {
            Some((_, state)) => Ok(Some(state)),
            None if throw_on_missing => Err(StandardsError::MissingDefaultState {
                type_name: type_name.to_string(),
            }),
            None => Ok(None),
        }
    }

    /// Registered type names in registration order.
    pub fn default_types(&self) -> Result<Vec<&str>> {
        Ok(self
            .defaults()?
            .iter()
            .map(|(name, _)| name.as_str())
            .collect())
    }

    /// Returns true if `type_name` has a registered default state.
    ///
    /// An uninitialized registry knows no types.
    pub fn is_default_type(&self, type_name: &str) -> bool {
        self.defaults
            .as_ref()
            .is_some_and(|defaults| defaults.iter().any(|(name, _)| name == type_name))
    }

    /// Adds one standard element per registered type, except `Screen`.
    pub fn populate_project(&self, project: &mut Project) -> Result<()> {
        let types: Vec<String> = self
            .defaults()?
            .iter()
            .map(|(name, _)| name.clone())
            .filter(|name| name != "Screen")
            .collect();
        for type_name in &types {
            self.add_standard_element(project, type_name)?;
        }
        debug!(count = types.len(), "populated project with standard elements");
        Ok(())
    }

    /// Adds a standard element whose default state is a copy of the
    /// registered one.
    pub fn add_standard_element(&self, project: &mut Project, type_name: &str) -> Result<()> {
        let state = self
            .get_default_state_for(type_name, true)?
            .ok_or_else(|| StandardsError::MissingDefaultState {
                type_name: type_name.to_string(),
            })?;
        project.add_element(ElementDefinition::standard(type_name, state.clone()))?;
        Ok(())
    }
}
