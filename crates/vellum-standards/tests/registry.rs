#![allow(missing_docs)]

use vellum_model::{
    DimensionUnitType, EnumKind, QualifiedName, StateDefinition, TypeTag, Variant,
};
use vellum_standards::{DEFAULT_TYPE, STANDARD_TYPES, StandardDefaultsRegistry};

fn listing(state: &StateDefinition) -> String {
    state
        .variables
        .iter()
        .map(|entry| {
            let value = entry
                .value
                .as_ref()
                .map_or_else(|| "null".to_string(), ToString::to_string);
            format!(
                "{} {}: {} = {}",
                entry.desired_order.unwrap_or_default(),
                entry.name,
                entry.type_tag,
                value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn snapshot(registry: &StandardDefaultsRegistry) -> Vec<(String, StateDefinition)> {
    registry
        .default_types()
        .unwrap()
        .into_iter()
        .map(|name| {
            let state = registry.get_default_state_for(name, true).unwrap().unwrap();
            (name.to_string(), state.clone())
        })
        .collect()
}

#[test]
fn test_initialize_is_idempotent() {
    let mut registry = StandardDefaultsRegistry::initialized();
    let first = snapshot(&registry);
    registry.reinitialize();
    let second = snapshot(&registry);
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
        STANDARD_TYPES
    );
}

#[test]
fn test_default_type_is_registered() {
    let registry = StandardDefaultsRegistry::initialized();
    assert!(registry.is_default_type(DEFAULT_TYPE));
    assert!(!registry.is_default_type("Button"));
}

#[test]
fn test_rectangle_schema() {
    let registry = StandardDefaultsRegistry::initialized();
    let rectangle = registry
        .get_default_state_for("Rectangle", true)
        .unwrap()
        .unwrap();
    insta::assert_snapshot!(listing(rectangle), @r#"
    0 X: float = 0
    1 X Units: PositionUnitType = PixelsFromLeft
    2 Y: float = 0
    3 Y Units: PositionUnitType = PixelsFromTop
    4 X Origin: HorizontalAlignment = Left
    5 Y Origin: VerticalAlignment = Top
    6 Guide: string = null
    7 Parent: string = null
    8 IgnoredByParentSize: bool = false
    9 Width: float = 16
    10 Width Units: DimensionUnitType = Absolute
    11 Height: float = 16
    12 Height Units: DimensionUnitType = Absolute
    13 Visible: bool = true
    14 Alpha: int = 255
    15 Red: int = 255
    16 Green: int = 255
    17 Blue: int = 255
    18 Rotation: float = 0
    19 HasEvents: bool = false
    20 ExposeChildrenEvents: bool = false
    21 State: State = "Default"
    "#);
}

#[test]
fn test_sprite_defaults_to_percentage_of_file() {
    let registry = StandardDefaultsRegistry::initialized();
    let sprite = registry.get_default_state_for("Sprite", true).unwrap().unwrap();
    let width_units = sprite
        .variable(&QualifiedName::unqualified("Width Units"))
        .unwrap();
    assert_eq!(width_units.type_tag, TypeTag::Enum(EnumKind::DimensionUnitType));
    assert_eq!(
        width_units.value,
        Some(Variant::from(DimensionUnitType::PercentageOfSourceFile))
    );
    assert!(
        sprite
            .list(&QualifiedName::unqualified("AnimationFrames"))
            .is_some()
    );
    assert!(
        sprite
            .list(&QualifiedName::unqualified("VariableReferences"))
            .is_some()
    );
}

#[test]
fn test_most_visual_types_carry_positioning() {
    let registry = StandardDefaultsRegistry::initialized();
    for type_name in ["Text", "Sprite", "Container", "ColoredRectangle", "Circle", "NineSlice"] {
        let state = registry.get_default_state_for(type_name, true).unwrap().unwrap();
        for name in ["X", "Y", "X Units", "Y Units", "X Origin", "Y Origin", "Guide", "Parent"] {
            assert!(
                state.variable(&QualifiedName::unqualified(name)).is_some(),
                "{type_name} lacks {name}"
            );
        }
    }
}
