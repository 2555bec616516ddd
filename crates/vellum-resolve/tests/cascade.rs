#![allow(missing_docs)]

use vellum_model::{
    ElementDefinition, Instance, ListValue, Project, QualifiedName, StateCategory,
    StateDefinition, TypeTag, VariableEntry, Variant,
};
use vellum_resolve::{
    Origin, Resolution, ResolveError, ResolveOptions, Scope, StateSelection, VariableResolver,
};
use vellum_standards::{StandardDefaultsRegistry, StandardsError};

fn name(value: &str) -> QualifiedName {
    value.parse().unwrap()
}

fn float(variable: &str, value: f32) -> VariableEntry {
    VariableEntry::new(name(variable), TypeTag::Float, Some(Variant::Float(value)))
}

fn state(state_name: &str, entries: Vec<VariableEntry>) -> StateDefinition {
    let mut state = StateDefinition::new(state_name);
    for entry in entries {
        state.push_variable(entry).unwrap();
    }
    state
}

/// A `Panel` component derived from Container with an `Icon` sprite,
/// two loose states and a `Highlight` category.
fn panel_project() -> Project {
    let mut panel = ElementDefinition::component("Panel").with_base_type("Container");
    panel.default_state.push_variable(float("X", 1.0)).unwrap();
    panel
        .default_state
        .push_variable(VariableEntry::new(name("Offset"), TypeTag::FloatNullable, Some(Variant::Float(3.0))))
        .unwrap();
    panel.add_instance(Instance::new("Icon", "Sprite")).unwrap();

    panel
        .add_state(state("S1", vec![float("Y", 7.0), float("X", 10.0)]))
        .unwrap();
    panel.add_state(state("S2", vec![float("Width", 40.0)])).unwrap();
    panel
        .add_state(state(
            "Cleared",
            vec![VariableEntry::new(name("Offset"), TypeTag::FloatNullable, None)],
        ))
        .unwrap();
    panel
        .add_state(state(
            "Quiet",
            vec![VariableEntry::named("HasEvents", TypeTag::Bool, false)],
        ))
        .unwrap();

    let mut highlight = StateCategory::new("Highlight");
    highlight
        .add_state(state("On", vec![float("X", 50.0), float("Height", 5.0)]))
        .unwrap();
    panel.add_category(highlight).unwrap();

    let mut size = StateCategory::new("Size");
    size.add_state(state("Big", vec![float("Height", 99.0)])).unwrap();
    panel.add_category(size).unwrap();

    let mut project = Project::new();
    project.add_element(panel).unwrap();
    project
}

fn resolve_x<'a>(
    resolver: &VariableResolver<'a>,
    element: &'a ElementDefinition,
    variable: &str,
    selection: &StateSelection,
) -> Resolution<'a, VariableEntry> {
    resolver
        .resolve(Scope::Element(element), &name(variable), selection)
        .unwrap()
}

#[test]
fn test_default_state_value_is_returned_unchanged() {
    let registry = StandardDefaultsRegistry::initialized();
    let project = panel_project();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();

    let resolution = resolve_x(&resolver, panel, "X", &StateSelection::new());
    assert_eq!(resolution.value(), Some(&Variant::Float(1.0)));
    let source = resolution.source().unwrap();
    assert_eq!((source.element, source.state), ("Panel", "Default"));
}

#[test]
fn test_active_state_outranks_default() {
    let registry = StandardDefaultsRegistry::initialized();
    let project = panel_project();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();

    let selection = StateSelection::new().with_state("S1");
    assert_eq!(resolve_x(&resolver, panel, "X", &selection).as_f64(), Some(10.0));
}

#[test]
fn test_missing_variable_is_not_found() {
    let registry = StandardDefaultsRegistry::initialized();
    let project = panel_project();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();

    let resolution = resolve_x(&resolver, panel, "Nonexistent", &StateSelection::new());
    assert_eq!(resolution, Resolution::NotFound);
    assert_eq!(resolution.value_and_found(), (None, false));
}

#[test]
fn test_stacked_state_without_value_does_not_mask_earlier_state() {
    let registry = StandardDefaultsRegistry::initialized();
    let project = panel_project();
    let panel = project.element("Panel").unwrap();
    let selection = StateSelection::new().with_state("S1").with_state("S2");

    let stacked = VariableResolver::new(&project, &registry).with_options(ResolveOptions::stacked());
    assert_eq!(resolve_x(&stacked, panel, "X", &selection).as_f64(), Some(10.0));
    assert_eq!(resolve_x(&stacked, panel, "Width", &selection).as_f64(), Some(40.0));

    // Without stacking only S2 is active.
    let single = VariableResolver::new(&project, &registry);
    assert_eq!(resolve_x(&single, panel, "X", &selection).as_f64(), Some(1.0));
}

#[test]
fn test_present_null_value_still_wins() {
    let registry = StandardDefaultsRegistry::initialized();
    let project = panel_project();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();

    let resolution = resolve_x(
        &resolver,
        panel,
        "Offset",
        &StateSelection::new().with_state("Cleared"),
    );
    assert!(resolution.is_found());
    assert_eq!(resolution.value(), None);
    assert_eq!(resolution.source().unwrap().state, "Cleared");
}

#[test]
fn test_state_entry_beats_category_entry() {
    let registry = StandardDefaultsRegistry::initialized();
    let project = panel_project();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();

    let selection = StateSelection::new()
        .with_state("S1")
        .with_category_state("Highlight", "On");
    assert_eq!(resolve_x(&resolver, panel, "X", &selection).as_f64(), Some(10.0));
    // S1 does not set Height, so the category supplies it.
    let height = resolve_x(&resolver, panel, "Height", &selection);
    assert_eq!(height.as_f64(), Some(5.0));
    assert_eq!(height.source().unwrap().category, Some("Highlight"));
}

#[test]
fn test_last_applied_category_wins() {
    let registry = StandardDefaultsRegistry::initialized();
    let project = panel_project();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();

    let size_last = StateSelection::new()
        .with_category_state("Highlight", "On")
        .with_category_state("Size", "Big");
    assert_eq!(resolve_x(&resolver, panel, "Height", &size_last).as_f64(), Some(99.0));

    let highlight_last = StateSelection::new()
        .with_category_state("Size", "Big")
        .with_category_state("Highlight", "On");
    assert_eq!(resolve_x(&resolver, panel, "Height", &highlight_last).as_f64(), Some(5.0));
}

#[test]
fn test_base_type_defaults_come_from_registry() {
    let registry = StandardDefaultsRegistry::initialized();
    let project = panel_project();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();

    let layout = resolve_x(&resolver, panel, "Children Layout", &StateSelection::new());
    let source = layout.source().unwrap();
    assert_eq!(source.origin, Origin::Registry);
    assert_eq!(source.element, "Container");
    assert_eq!(layout.value().map(ToString::to_string).as_deref(), Some("Regular"));
}

#[test]
fn test_int_values_widen_to_f64() {
    let registry = StandardDefaultsRegistry::initialized();
    let project = panel_project();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();

    let alpha = resolve_x(&resolver, panel, "Icon.Alpha", &StateSelection::new());
    assert_eq!(alpha.type_tag(), Some(TypeTag::Int));
    assert_eq!(alpha.as_f64(), Some(255.0));
}

#[test]
fn test_instance_scope_sees_owner_overrides() {
    let registry = StandardDefaultsRegistry::initialized();
    let mut project = panel_project();
    project
        .element_mut("Panel")
        .unwrap()
        .default_state
        .push_variable(float("Icon.Y", 12.0))
        .unwrap();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();
    let icon = panel.instance("Icon").unwrap();
    let scope = Scope::Instance {
        instance: icon,
        owner: panel,
    };

    let y = resolver.resolve(scope, &name("Y"), &StateSelection::new()).unwrap();
    assert_eq!(y.as_f64(), Some(12.0));
    let x = resolver.resolve(scope, &name("X"), &StateSelection::new()).unwrap();
    assert_eq!(x.as_f64(), Some(0.0));
    assert_eq!(x.source().unwrap().element, "Sprite");
}

#[test]
fn test_nested_instance_uses_selected_state() {
    let registry = StandardDefaultsRegistry::initialized();
    let mut project = Project::new();

    let mut button = ElementDefinition::component("Button");
    button.add_instance(Instance::new("Label", "Text")).unwrap();
    let mut pressed = StateDefinition::new("Pressed");
    pressed
        .push_variable(VariableEntry::new(name("Label.FontSize"), TypeTag::Int, Some(Variant::Int(30))))
        .unwrap();
    button.add_state(pressed).unwrap();
    let mut emphasis = StateCategory::new("Emphasis");
    emphasis
        .add_state(state(
            "Loud",
            vec![VariableEntry::new(name("Label.IsBold"), TypeTag::Bool, Some(Variant::Bool(true)))],
        ))
        .unwrap();
    button.add_category(emphasis).unwrap();
    project.add_element(button).unwrap();

    let mut screen = ElementDefinition::screen("Main");
    screen.add_instance(Instance::new("Ok", "Button")).unwrap();
    screen.add_instance(Instance::new("Cancel", "Button")).unwrap();
    screen
        .default_state
        .push_variable(VariableEntry::new(name("Ok.State"), TypeTag::State, Some(Variant::from("Pressed"))))
        .unwrap();
    screen
        .default_state
        .push_variable(VariableEntry::new(
            name("Ok.EmphasisState"),
            TypeTag::String,
            Some(Variant::from("Loud")),
        ))
        .unwrap();
    project.add_element(screen).unwrap();

    let resolver = VariableResolver::new(&project, &registry);
    let main = project.element("Main").unwrap();
    let none = StateSelection::new();

    assert_eq!(resolve_x(&resolver, main, "Ok.Label.FontSize", &none).as_f64(), Some(30.0));
    assert_eq!(
        resolve_x(&resolver, main, "Ok.Label.IsBold", &none).value(),
        Some(&Variant::Bool(true))
    );
    assert_eq!(resolve_x(&resolver, main, "Cancel.Label.FontSize", &none).as_f64(), Some(18.0));
}

#[test]
fn test_derived_component_inherits_base_values() {
    let registry = StandardDefaultsRegistry::initialized();
    let mut project = panel_project();
    project
        .add_element(ElementDefinition::component("FancyPanel").with_base_type("Panel"))
        .unwrap();
    let resolver = VariableResolver::new(&project, &registry);
    let fancy = project.element("FancyPanel").unwrap();

    assert_eq!(resolve_x(&resolver, fancy, "X", &StateSelection::new()).as_f64(), Some(1.0));
    // State names apply to the base element too.
    let selection = StateSelection::new().with_state("S1");
    assert_eq!(resolve_x(&resolver, fancy, "Y", &selection).as_f64(), Some(7.0));
}

#[test]
fn test_default_only_variable_ignored_outside_default() {
    let registry = StandardDefaultsRegistry::initialized();
    let project = panel_project();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();

    assert!(resolver.is_default_only(panel, &name("HasEvents")));
    let has_events = resolve_x(&resolver, panel, "HasEvents", &StateSelection::new().with_state("Quiet"));
    assert_eq!(has_events.value(), Some(&Variant::Bool(true)));
    assert_eq!(has_events.source().unwrap().element, "Container");
}

#[test]
fn test_categorized_default_state_still_ignores_default_only_entries() {
    let registry = StandardDefaultsRegistry::initialized();
    let mut project = panel_project();
    let mut mode = StateCategory::new("Mode");
    mode.states.push(state(
        "Default",
        vec![VariableEntry::named("HasEvents", TypeTag::Bool, false)],
    ));
    project
        .element_mut("Panel")
        .unwrap()
        .add_category(mode)
        .unwrap();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();

    let selection = StateSelection::new().with_category_state("Mode", "Default");
    let has_events = resolve_x(&resolver, panel, "HasEvents", &selection);
    assert_eq!(has_events.value(), Some(&Variant::Bool(true)));
    assert_eq!(has_events.source().unwrap().origin, Origin::Registry);
}

#[test]
fn test_state_selector_is_declared_not_found() {
    let registry = StandardDefaultsRegistry::initialized();
    let mut project = Project::new();
    project.add_element(ElementDefinition::component("Bare")).unwrap();
    let resolver = VariableResolver::new(&project, &registry);
    let bare = project.element("Bare").unwrap();

    let state = resolve_x(&resolver, bare, "State", &StateSelection::new());
    assert!(matches!(state, Resolution::Declared { .. }));
    assert_eq!(state.type_tag(), Some(TypeTag::State));
    assert_eq!(state.value(), None);
}

#[test]
fn test_missing_instance_is_not_found() {
    let registry = StandardDefaultsRegistry::initialized();
    let project = panel_project();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();

    assert_eq!(
        resolve_x(&resolver, panel, "Frame.X", &StateSelection::new()),
        Resolution::NotFound
    );
}

#[test]
fn test_cyclic_base_types_terminate() {
    let registry = StandardDefaultsRegistry::initialized();
    let mut project = Project::new();
    project
        .add_element(ElementDefinition::component("A").with_base_type("B"))
        .unwrap();
    project
        .add_element(ElementDefinition::component("B").with_base_type("A"))
        .unwrap();
    let resolver = VariableResolver::new(&project, &registry);
    let a = project.element("A").unwrap();

    assert_eq!(resolve_x(&resolver, a, "X", &StateSelection::new()), Resolution::NotFound);
}

#[test]
fn test_uninitialized_registry_fails_fast() {
    let registry = StandardDefaultsRegistry::new();
    let project = panel_project();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();

    // Values authored on the element do not need the registry.
    assert!(resolve_x(&resolver, panel, "X", &StateSelection::new()).is_found());
    let err = resolver
        .resolve(Scope::Element(panel), &name("Rotation"), &StateSelection::new())
        .unwrap_err();
    assert_eq!(err, ResolveError::Standards(StandardsError::NotInitialized));
}

#[test]
fn test_list_variables_cascade() {
    let registry = StandardDefaultsRegistry::initialized();
    let mut project = Project::new();
    let mut shape = ElementDefinition::component("Shape");
    shape.add_instance(Instance::new("Outline", "Polygon")).unwrap();
    project.add_element(shape).unwrap();
    let resolver = VariableResolver::new(&project, &registry);
    let shape = project.element("Shape").unwrap();

    let points = resolver
        .resolve_list(Scope::Element(shape), &name("Outline.Points"), &StateSelection::new())
        .unwrap();
    let entry = points.found().unwrap();
    assert!(matches!(&entry.value, ListValue::Points(points) if points.len() == 5));
}

#[test]
fn test_resolution_is_repeatable() {
    let registry = StandardDefaultsRegistry::initialized();
    let project = panel_project();
    let resolver = VariableResolver::new(&project, &registry);
    let panel = project.element("Panel").unwrap();
    let selection = StateSelection::new()
        .with_state("S1")
        .with_category_state("Highlight", "On");

    for variable in ["X", "Height", "Icon.Width Units", "State", "Nope"] {
        let first = resolve_x(&resolver, panel, variable, &selection);
        let second = resolve_x(&resolver, panel, variable, &selection);
        assert_eq!(first, second, "{variable}");
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn filler(count: usize) -> Vec<VariableEntry> {
        (0..count).map(|i| float(&format!("Filler{i}"), i as f32)).collect()
    }

    proptest! {
        #[test]
        fn default_value_round_trips(value in -1.0e6f32..1.0e6f32) {
            let registry = StandardDefaultsRegistry::initialized();
            let mut element = ElementDefinition::component("Probe");
            element.default_state.push_variable(float("Probe Value", value)).unwrap();
            let mut project = Project::new();
            project.add_element(element).unwrap();
            let resolver = VariableResolver::new(&project, &registry);
            let probe = project.element("Probe").unwrap();

            let resolution = resolve_x(&resolver, probe, "Probe Value", &StateSelection::new());
            prop_assert_eq!(resolution.value(), Some(&Variant::Float(value)));
        }

        #[test]
        fn state_entry_wins_regardless_of_position(
            default_value in -1000.0f32..1000.0,
            state_value in -1000.0f32..1000.0,
            before in 0usize..6,
            after in 0usize..6,
        ) {
            let registry = StandardDefaultsRegistry::initialized();
            let mut element = ElementDefinition::component("Probe");
            element.default_state.push_variable(float("X", default_value)).unwrap();

            let mut entries = filler(before + after);
            entries.insert(before, float("X", state_value));
            element.add_state(state("Active", entries)).unwrap();

            let mut project = Project::new();
            project.add_element(element).unwrap();
            let resolver = VariableResolver::new(&project, &registry);
            let probe = project.element("Probe").unwrap();

            let selection = StateSelection::new().with_state("Active");
            let resolution = resolve_x(&resolver, probe, "X", &selection);
            prop_assert_eq!(resolution.value(), Some(&Variant::Float(state_value)));
            prop_assert_eq!(resolution.source().map(|source| source.state), Some("Active"));
        }
    }
}
