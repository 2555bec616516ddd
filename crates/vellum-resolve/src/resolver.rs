//! The variable cascade.

use tracing::{trace, warn};
use vellum_model::{
    ElementDefinition, ElementKind, Instance, Project, QualifiedName, StateDefinition,
    VariableEntry, VariableListEntry, Variant,
};
use vellum_standards::StandardDefaultsRegistry;

use crate::error::Result;
use crate::options::{ResolveOptions, StackingMode};
use crate::resolution::{Origin, Resolution, Source};
use crate::selection::{StateRef, StateSelection};

/// Base-type and instance chains deeper than this are treated as cyclic.
const MAX_DEPTH: usize = 64;

/// What a variable is resolved against.
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a> {
    /// An element resolving its own variables.
    Element(&'a ElementDefinition),
    /// An instance inside its owning element.
    Instance {
        instance: &'a Instance,
        owner: &'a ElementDefinition,
    },
}

/// Entries the cascade can resolve.
trait CascadeEntry: Sized {
    fn find<'s>(state: &'s StateDefinition, name: &QualifiedName) -> Option<&'s Self>;
    fn sets_value(&self) -> bool;
    fn default_only(&self) -> bool;
}

impl CascadeEntry for VariableEntry {
    fn find<'s>(state: &'s StateDefinition, name: &QualifiedName) -> Option<&'s Self> {
        state.variable(name)
    }

    fn sets_value(&self) -> bool {
        self.sets_value
    }

    fn default_only(&self) -> bool {
        self.can_only_be_set_in_default_state
    }
}

impl CascadeEntry for VariableListEntry {
    fn find<'s>(state: &'s StateDefinition, name: &QualifiedName) -> Option<&'s Self> {
        state.list(name)
    }

    fn sets_value(&self) -> bool {
        true
    }

    fn default_only(&self) -> bool {
        false
    }
}

/// One state searched by the cascade for a single element.
#[derive(Debug, Clone, Copy)]
struct Level<'a> {
    category: Option<&'a str>,
    state: &'a StateDefinition,
}

impl Level<'_> {
    /// Only the uncategorized `Default` state is the element's default.
    fn is_default(&self) -> bool {
        self.category.is_none() && self.state.is_default()
    }
}

/// Where the cascade continues once an element's own states are exhausted.
enum Step<'a> {
    /// Into another element, either through an instance or a base type.
    Element {
        element: &'a ElementDefinition,
        name: QualifiedName,
        via_instance: Option<&'a Instance>,
    },
    /// Into a default state held by the registry.
    Registry {
        type_name: &'a str,
        name: QualifiedName,
    },
    /// The qualified name refers to an instance the element lacks.
    Dangling,
    End,
}

/// Computes effective variable values.
///
/// Resolution is a pure read of the project and registry. For one element
/// the precedence is:
///
/// **Applied states → Category states → Default state → Instance or base type → Registry**
///
/// A present, value-setting entry wins even when its value is `None`.
/// Entries that never set values are skipped. Entries marked as
/// default-state-only are ignored outside the default state.
///
/// # Example
///
/// ```
/// use vellum_model::{ElementDefinition, Instance, Project, QualifiedName};
/// use vellum_resolve::{Scope, StateSelection, VariableResolver};
/// use vellum_standards::StandardDefaultsRegistry;
///
/// let registry = StandardDefaultsRegistry::initialized();
/// let mut project = Project::new();
/// let mut button = ElementDefinition::component("Button");
/// button.add_instance(Instance::new("Label", "Text")).unwrap();
/// project.add_element(button).unwrap();
///
/// let resolver = VariableResolver::new(&project, &registry);
/// let button = project.element("Button").unwrap();
/// let size: QualifiedName = "Label.FontSize".parse().unwrap();
/// let resolution = resolver
///     .resolve(Scope::Element(button), &size, &StateSelection::new())
///     .unwrap();
/// assert_eq!(resolution.as_f64(), Some(18.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VariableResolver<'a> {
    project: &'a Project,
    registry: &'a StandardDefaultsRegistry,
    options: ResolveOptions,
}

impl<'a> VariableResolver<'a> {
    pub fn new(project: &'a Project, registry: &'a StandardDefaultsRegistry) -> Self {
        Self {
            project,
            registry,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    pub fn project(&self) -> &'a Project {
        self.project
    }

    pub fn registry(&self) -> &'a StandardDefaultsRegistry {
        self.registry
    }

    /// Resolves a variable.
    ///
    /// # Errors
    ///
    /// Fails only when the cascade reaches the registry and the registry
    /// cannot answer. A missing variable is [`Resolution::NotFound`].
    pub fn resolve(
        &self,
        scope: Scope<'a>,
        name: &QualifiedName,
        selection: &StateSelection,
    ) -> Result<Resolution<'a, VariableEntry>> {
        self.resolve_scoped(scope, name, selection)
    }

    /// Resolves a list variable with the same precedence as [`resolve`](Self::resolve).
    pub fn resolve_list(
        &self,
        scope: Scope<'a>,
        name: &QualifiedName,
        selection: &StateSelection,
    ) -> Result<Resolution<'a, VariableListEntry>> {
        self.resolve_scoped(scope, name, selection)
    }

    /// Resolves against an element's default state only.
    pub fn resolve_default(
        &self,
        element: &'a ElementDefinition,
        name: &QualifiedName,
    ) -> Result<Resolution<'a, VariableEntry>> {
        self.lookup(element, name, &StateSelection::new(), 0)
    }

    /// Resolves what `element` inherits for `name`, skipping the element's
    /// own states.
    ///
    /// This is the declaration an element's default state overrides.
    pub fn resolve_inherited(
        &self,
        element: &'a ElementDefinition,
        name: &QualifiedName,
    ) -> Result<Resolution<'a, VariableEntry>> {
        let none = StateSelection::new();
        match self.next_step(element, name) {
            Step::Element {
                element: next,
                name: next_name,
                via_instance: Some(instance),
            } => {
                let nested = self.instance_selection(element, &none, instance, next);
                self.lookup(next, &next_name, &nested, 1)
            }
            Step::Element {
                element: next,
                name: next_name,
                via_instance: None,
            } => self.lookup(next, &next_name, &none, 1),
            Step::Registry { type_name, name } => self.lookup_registry(type_name, &name),
            Step::Dangling | Step::End => Ok(Resolution::NotFound),
        }
    }

    /// Returns true if any declaration of `name` along the cascade is
    /// restricted to the default state.
    pub fn is_default_only(&self, element: &'a ElementDefinition, name: &QualifiedName) -> bool {
        self.declared_default_only(element, name, 0)
    }

    fn resolve_scoped<E: CascadeEntry>(
        &self,
        scope: Scope<'a>,
        name: &QualifiedName,
        selection: &StateSelection,
    ) -> Result<Resolution<'a, E>> {
        match scope {
            Scope::Element(element) => self.lookup(element, name, selection, 0),
            Scope::Instance { instance, owner } => {
                self.lookup(owner, &name.on_instance(&instance.name), selection, 0)
            }
        }
    }

    fn lookup<E: CascadeEntry>(
        &self,
        element: &'a ElementDefinition,
        name: &QualifiedName,
        selection: &StateSelection,
        depth: usize,
    ) -> Result<Resolution<'a, E>> {
        if depth > MAX_DEPTH {
            warn!(element = %element.name, variable = %name, "cascade too deep, base types may be cyclic");
            return Ok(Resolution::NotFound);
        }

        let mut declared = None;
        let mut default_only = None;

        // 1-3. Applied states, category states, then the default state
        for level in self.active_levels(element, selection) {
            let Some(entry) = E::find(level.state, name) else {
                continue;
            };
            let source = Source {
                element: &element.name,
                category: level.category,
                state: &level.state.name,
                origin: Origin::Element,
            };
            if !entry.sets_value() {
                trace!(%source, variable = %name, "skipping non-value-setting entry");
                declared.get_or_insert((entry, source));
                continue;
            }
            if !level.is_default()
                && (entry.default_only()
                    || *default_only
                        .get_or_insert_with(|| self.declared_default_only(element, name, depth)))
            {
                trace!(%source, variable = %name, "ignoring default-state-only entry");
                continue;
            }
            trace!(%source, variable = %name, "resolved");
            return Ok(Resolution::Found { entry, source });
        }

        // 4. Nested instance or base type
        let deeper = match self.next_step(element, name) {
            Step::Element {
                element: next,
                name: next_name,
                via_instance,
            } => {
                trace!(from = %element.name, to = %next.name, variable = %next_name, "descending");
                match via_instance {
                    Some(instance) => {
                        let nested = self.instance_selection(element, selection, instance, next);
                        self.lookup(next, &next_name, &nested, depth + 1)?
                    }
                    None => self.lookup(next, &next_name, selection, depth + 1)?,
                }
            }
            // 5. Registry defaults
            Step::Registry { type_name, name } => self.lookup_registry(type_name, &name)?,
            Step::Dangling => {
                warn!(element = %element.name, variable = %name, "variable refers to a missing instance");
                Resolution::NotFound
            }
            Step::End => Resolution::NotFound,
        };

        Ok(match (deeper, declared) {
            (found @ Resolution::Found { .. }, _) => found,
            (_, Some((entry, source))) => Resolution::Declared { entry, source },
            (deeper, None) => deeper,
        })
    }

    fn lookup_registry<E: CascadeEntry>(
        &self,
        type_name: &'a str,
        name: &QualifiedName,
    ) -> Result<Resolution<'a, E>> {
        let Some(state) = self.registry.get_default_state_for(type_name, false)? else {
            trace!(type_name, "no registered default state");
            return Ok(Resolution::NotFound);
        };
        let source = Source {
            element: type_name,
            category: None,
            state: &state.name,
            origin: Origin::Registry,
        };
        Ok(match E::find(state, name) {
            Some(entry) if entry.sets_value() => {
                trace!(%source, variable = %name, "resolved from registry");
                Resolution::Found { entry, source }
            }
            Some(entry) => Resolution::Declared { entry, source },
            None => Resolution::NotFound,
        })
    }

    /// States of `element` in precedence order, ending with its default state.
    fn active_levels(
        &self,
        element: &'a ElementDefinition,
        selection: &StateSelection,
    ) -> Vec<Level<'a>> {
        let applied = selection.applied();
        let applied = match self.options.stacking {
            StackingMode::Single => &applied[applied.len().saturating_sub(1)..],
            StackingMode::Stacked => applied,
        };

        let mut levels = Vec::with_capacity(applied.len() + selection.categories().len() + 1);
        for StateRef { category, name } in applied.iter().rev() {
            match element.state_in(category.as_deref(), name) {
                Some(state) => levels.push(Level {
                    category: category
                        .as_deref()
                        .and_then(|category| element.category(category))
                        .map(|category| category.name.as_str()),
                    state,
                }),
                None => trace!(element = %element.name, state = %name, "applied state not defined here"),
            }
        }
        // Last-applied category wins.
        for (category, state) in selection.categories().iter().rev() {
            if let Some(category) = element.category(category)
                && let Some(state) = category.state(state)
            {
                levels.push(Level {
                    category: Some(&category.name),
                    state,
                });
            }
        }
        levels.push(Level {
            category: None,
            state: &element.default_state,
        });
        levels
    }

    fn next_step(&self, element: &'a ElementDefinition, name: &QualifiedName) -> Step<'a> {
        if let Some((instance_name, rest)) = name.split_first_instance() {
            let Some(instance) = element.instance(instance_name) else {
                return Step::Dangling;
            };
            return self.step_into_type(&instance.base_type, rest, Some(instance));
        }
        match (&element.base_type, element.kind) {
            (Some(base), _) => self.step_into_type(base, name.clone(), None),
            (None, ElementKind::Standard) => Step::Registry {
                type_name: &element.name,
                name: name.clone(),
            },
            (None, ElementKind::Component) => Step::Registry {
                type_name: "Component",
                name: name.clone(),
            },
            (None, ElementKind::Screen) => Step::Registry {
                type_name: "Screen",
                name: name.clone(),
            },
        }
    }

    fn step_into_type(
        &self,
        type_name: &'a str,
        name: QualifiedName,
        via_instance: Option<&'a Instance>,
    ) -> Step<'a> {
        match self.project.element(type_name) {
            Some(element) => Step::Element {
                element,
                name,
                via_instance,
            },
            // Registry types have no instances of their own.
            None if name.is_qualified() => Step::End,
            None => Step::Registry { type_name, name },
        }
    }

    /// The states an owning element selects for one of its instances
    /// through `<Instance>.State` and `<Instance>.<Category>State`.
    fn instance_selection(
        &self,
        owner: &'a ElementDefinition,
        owner_selection: &StateSelection,
        instance: &'a Instance,
        base: &'a ElementDefinition,
    ) -> StateSelection {
        let levels = self.active_levels(owner, owner_selection);
        let authored = |root: &str| -> Option<&'a str> {
            let key = QualifiedName::unqualified(root).on_instance(&instance.name);
            levels.iter().find_map(|level| {
                level
                    .state
                    .variable(&key)
                    .filter(|entry| entry.sets_value)
                    .and_then(|entry| entry.value.as_ref())
                    .and_then(Variant::as_str)
            })
        };

        let mut nested = StateSelection::new();
        if let Some(state) = authored("State") {
            nested.apply(StateRef::new(state));
        }
        for category in &base.categories {
            if let Some(state) = authored(format!("{}State", category.name).as_str()) {
                nested.select_category(category.name.as_str(), state);
            }
        }
        nested
    }

    fn declared_default_only(
        &self,
        element: &'a ElementDefinition,
        name: &QualifiedName,
        depth: usize,
    ) -> bool {
        if depth > MAX_DEPTH {
            return false;
        }
        if element
            .default_state
            .variable(name)
            .is_some_and(|entry| entry.can_only_be_set_in_default_state)
        {
            return true;
        }
        match self.next_step(element, name) {
            Step::Element {
                element: next,
                name: next_name,
                ..
            } => self.declared_default_only(next, &next_name, depth + 1),
            Step::Registry { type_name, name } => self
                .registry
                .get_default_state_for(type_name, false)
                .ok()
                .flatten()
                .and_then(|state| state.variable(&name))
                .is_some_and(|entry| entry.can_only_be_set_in_default_state),
            Step::Dangling | Step::End => false,
        }
    }
}
