#![allow(missing_docs)]

use vellum_model::{
    BehaviorDefinition, ElementDefinition, Instance, ModelError, Project, QualifiedName,
    RequiredInstance, StateCategory, StateDefinition, TypeTag, VariableEntry, Variant,
};

fn sample_project() -> Project {
    let mut project = Project::new();

    let mut button = ElementDefinition::component("Button").with_base_type("Container");
    button
        .default_state
        .push_variable(VariableEntry::named("IsOn", TypeTag::Bool, false))
        .unwrap();
    button.add_instance(Instance::new("Icon", "Sprite")).unwrap();
    let mut category = StateCategory::new("ButtonCategory");
    let mut pressed = StateDefinition::new("Pressed");
    pressed
        .push_variable(VariableEntry::new(
            QualifiedName::parse("Icon.Parent").unwrap(),
            TypeTag::String,
            Some(Variant::from("Frame")),
        ))
        .unwrap();
    category.add_state(pressed).unwrap();
    button.add_category(category).unwrap();
    project.add_element(button).unwrap();

    project
        .add_behavior(
            BehaviorDefinition::new("ButtonBehavior")
                .require_instance(RequiredInstance::new("Icon").of_type("Sprite")),
        )
        .unwrap();
    project.add_behavior_to("Button", "ButtonBehavior").unwrap();
    project
}

#[test]
fn test_project_json_round_trip() {
    let project = sample_project();
    let json = serde_json::to_string_pretty(&project).unwrap();
    let back: Project = serde_json::from_str(&json).unwrap();

    let button = back.element("Button").unwrap();
    assert_eq!(button.base_type.as_deref(), Some("Container"));
    assert!(button.implements_behavior("ButtonBehavior"));
    let pressed = button.state_in(Some("ButtonCategory"), "Pressed").unwrap();
    let parent = pressed
        .variable(&"Icon.Parent".parse().unwrap())
        .unwrap();
    assert_eq!(parent.value.as_ref().and_then(Variant::as_str), Some("Frame"));
    assert_eq!(
        back.behavior("ButtonBehavior").unwrap().required_instances[0]
            .base_type
            .as_deref(),
        Some("Sprite")
    );
}

#[test]
fn test_json_uses_dotted_names_and_type_strings() {
    let json = serde_json::to_value(sample_project()).unwrap();
    let entry = &json["elements"][0]["categories"][0]["states"][0]["variables"][0];
    assert_eq!(entry["name"], "Icon.Parent");
    assert_eq!(entry["type"], "string");
}

#[test]
fn test_duplicate_elements_rejected_on_load() {
    let json = r#"{
        "elements": [
            {"name": "A", "kind": "Component", "default_state": {"name": "Default"}},
            {"name": "A", "kind": "Screen", "default_state": {"name": "Default"}}
        ]
    }"#;
    let err = serde_json::from_str::<Project>(json).unwrap_err();
    assert!(err.to_string().contains("element A already exists"));
}

fn load_panel(default_variables: &str, rest: &str) -> Result<Project, serde_json::Error> {
    let json = format!(
        r#"{{
            "elements": [
                {{
                    "name": "Panel",
                    "kind": "Component",
                    "default_state": {{"name": "Default", "variables": [{default_variables}]}}
                    {rest}
                }}
            ]
        }}"#
    );
    serde_json::from_str(&json)
}

#[test]
fn test_well_formed_panel_loads() {
    let project = load_panel(
        r#"{"name": "X", "type": "float", "value": {"Float": 1.0}}"#,
        r#", "instances": [{"name": "Icon", "base_type": "Sprite"}]"#,
    )
    .unwrap();
    let panel = project.element("Panel").unwrap();
    assert_eq!(panel.default_state.variables.len(), 1);
    assert_eq!(panel.instances.len(), 1);
}

#[test]
fn test_duplicate_variables_rejected_on_load() {
    let err = load_panel(
        r#"{"name": "X", "type": "float", "value": {"Float": 1.0}},
           {"name": "X", "type": "float", "value": {"Float": 2.0}}"#,
        "",
    )
    .unwrap_err();
    assert!(err.to_string().contains("state Default already defines variable X"));
}

#[test]
fn test_duplicate_instances_rejected_on_load() {
    let err = load_panel(
        "",
        r#", "instances": [
            {"name": "Icon", "base_type": "Sprite"},
            {"name": "Icon", "base_type": "Text"}
        ]"#,
    )
    .unwrap_err();
    assert!(
        err.to_string()
            .contains("element Panel already contains an instance named Icon")
    );
}

#[test]
fn test_duplicate_categories_rejected_on_load() {
    let err = load_panel(
        "",
        r#", "categories": [{"name": "Size"}, {"name": "Size"}]"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("already has a category named Size"));
}

#[test]
fn test_ill_typed_value_rejected_on_load() {
    let err = load_panel(r#"{"name": "IsOn", "type": "bool", "value": {"String": "yes"}}"#, "")
        .unwrap_err();
    assert!(
        err.to_string()
            .contains("value of variable IsOn does not conform to type bool")
    );
}

#[test]
fn test_categorized_default_state_rejected_on_load() {
    let err = load_panel(
        "",
        r#", "categories": [{"name": "Size", "states": [{"name": "Default"}]}]"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("the name is reserved"));
}

#[test]
fn test_misnamed_default_state_rejected_on_load() {
    let json = r#"{"elements": [{"name": "A", "kind": "Screen", "default_state": {"name": "Idle"}}]}"#;
    let err = serde_json::from_str::<Project>(json).unwrap_err();
    assert!(err.to_string().contains("default state of element A is named Idle"));
}

#[test]
fn test_invalid_qualified_name_rejected_on_load() {
    let json = r#"{"name": "Icon..X", "type": "float", "value": {"Float": 1.0}}"#;
    assert!(serde_json::from_str::<VariableEntry>(json).is_err());
}

#[test]
fn test_remove_requires_detached_instances() {
    let mut project = sample_project();
    project.add_element(ElementDefinition::component("Sprite")).unwrap();
    match project.remove_element("Sprite") {
        Err(ModelError::ElementInUse { referenced_by, .. }) => {
            assert_eq!(referenced_by, vec!["Button.Icon".to_string()]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(project.referencing_instances("Sprite").len(), 1);
}
