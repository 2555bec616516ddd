//! Reusable blocks of default-state variables.
//!
//! Each helper appends a fixed, ordered block of entries. Order is the
//! display order, so callers finish a schema with
//! [`apply_sort_values_from_order`].

use vellum_model::{
    DimensionUnitType, EnumKind, HorizontalAlignment, PositionUnitType, StateDefinition, TypeTag,
    VariableEntry, VariableListEntry, Variant, VerticalAlignment,
};

/// How dimension units treat file-relative options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionVariableAction {
    /// Exclude units that only make sense with a source file.
    ExcludeFileOptions,
    AllowFileOptions,
    /// Allow file units and default to a percentage of the file size.
    DefaultToPercentageOfFile,
}

fn float(name: &str, value: f32, category: &str) -> VariableEntry {
    VariableEntry::named(name, TypeTag::Float, value).category(category)
}

fn boolean(name: &str, value: bool, category: &str) -> VariableEntry {
    VariableEntry::named(name, TypeTag::Bool, value).category(category)
}

/// X, Y, their units, optional origins, Guide, Parent and IgnoredByParentSize.
pub fn add_positioning_variables(
    state: &mut StateDefinition,
    add_origin_variables: bool,
    include_baseline: bool,
) {
    let position = TypeTag::Enum(EnumKind::PositionUnitType);
    let x_exclusions = PositionUnitType::ALL
        .iter()
        .copied()
        .filter(PositionUnitType::is_vertical_only);
    let y_exclusions = PositionUnitType::ALL
        .iter()
        .copied()
        .filter(PositionUnitType::is_horizontal_only);

    state.variables.push(float("X", 0.0, "Position"));
    state.variables.push(
        VariableEntry::named("X Units", position, PositionUnitType::PixelsFromLeft)
            .category("Position")
            .excluding(x_exclusions),
    );
    state.variables.push(float("Y", 0.0, "Position"));
    state.variables.push(
        VariableEntry::named("Y Units", position, PositionUnitType::PixelsFromTop)
            .category("Position")
            .excluding(y_exclusions),
    );

    if add_origin_variables {
        state.variables.push(
            VariableEntry::named(
                "X Origin",
                TypeTag::Enum(EnumKind::HorizontalAlignment),
                HorizontalAlignment::Left,
            )
            .category("Position"),
        );
        let mut y_origin = VariableEntry::named(
            "Y Origin",
            TypeTag::Enum(EnumKind::VerticalAlignment),
            VerticalAlignment::Top,
        )
        .category("Position");
        if !include_baseline {
            y_origin = y_origin.excluding([VerticalAlignment::TextBaseline]);
        }
        state.variables.push(y_origin);
    }

    state.variables.push(string_entry("Guide", None).category("Position"));
    add_parent_variables(state);
}

fn string_entry(name: &str, value: Option<&str>) -> VariableEntry {
    VariableEntry::new(
        vellum_model::QualifiedName::unqualified(name),
        TypeTag::String,
        value.map(Variant::from),
    )
}

fn add_parent_variables(state: &mut StateDefinition) {
    state.variables.push(
        string_entry("Parent", None)
            .category("Parent")
            .default_state_only(),
    );
    state
        .variables
        .push(boolean("IgnoredByParentSize", false, "Parent"));
}

/// Width, Width Units, Height and Height Units.
pub fn add_dimensions_variables(
    state: &mut StateDefinition,
    default_width: f32,
    default_height: f32,
    action: DimensionVariableAction,
) {
    let default_unit = match action {
        DimensionVariableAction::DefaultToPercentageOfFile => {
            DimensionUnitType::PercentageOfSourceFile
        }
        _ => DimensionUnitType::Absolute,
    };
    let units = |name: &str| {
        let entry = VariableEntry::named(
            name,
            TypeTag::Enum(EnumKind::DimensionUnitType),
            default_unit,
        )
        .category("Dimensions");
        if action == DimensionVariableAction::ExcludeFileOptions {
            entry.excluding(
                DimensionUnitType::ALL
                    .iter()
                    .copied()
                    .filter(DimensionUnitType::depends_on_file),
            )
        } else {
            entry
        }
    };

    state
        .variables
        .push(float("Width", default_width, "Dimensions"));
    state.variables.push(units("Width Units"));
    state
        .variables
        .push(float("Height", default_height, "Dimensions"));
    state.variables.push(units("Height Units"));
}

/// Alpha (optional), Red, Green and Blue channels, all 255.
pub fn add_color_variables(state: &mut StateDefinition, include_alpha: bool) {
    let channels: &[&str] = if include_alpha {
        &["Alpha", "Red", "Green", "Blue"]
    } else {
        &["Red", "Green", "Blue"]
    };
    for channel in channels {
        state
            .variables
            .push(VariableEntry::named(channel, TypeTag::Int, 255).category("Rendering"));
    }
}

/// HasEvents and ExposeChildrenEvents. Both are default-state only.
pub fn add_event_variables(state: &mut StateDefinition, default_has_events: bool) {
    for name in ["HasEvents", "ExposeChildrenEvents"] {
        state.variables.push(
            boolean(name, default_has_events, "Behavior").default_state_only(),
        );
    }
}

/// The synthetic, non-value-setting `State` selector.
pub fn add_state_variable(state: &mut StateDefinition) {
    state
        .variables
        .push(VariableEntry::named("State", TypeTag::State, "Default").non_value_setting());
}

pub fn add_rotation_variable(state: &mut StateDefinition) {
    state
        .variables
        .push(float("Rotation", 0.0, "Flip and Rotation"));
}

pub fn add_clips_children(state: &mut StateDefinition) {
    state
        .variables
        .push(boolean("Clips Children", false, "Children"));
}

/// Empty `VariableReferences` string list.
pub fn add_variable_reference_list(state: &mut StateDefinition) {
    state
        .variable_lists
        .push(VariableListEntry::strings("VariableReferences").category("References"));
}

/// Assigns ascending display order to every variable in insertion order.
pub fn apply_sort_values_from_order(state: &mut StateDefinition) {
    for (order, entry) in (0u32..).zip(state.variables.iter_mut()) {
        entry.desired_order = Some(order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_model::{EnumValue, QualifiedName};

    fn names(state: &StateDefinition) -> Vec<String> {
        state
            .variables
            .iter()
            .map(|entry| entry.name.to_string())
            .collect()
    }

    #[test]
    fn positioning_block_order() {
        let mut state = StateDefinition::default_state();
        add_positioning_variables(&mut state, true, false);
        assert_eq!(
            names(&state),
            [
                "X",
                "X Units",
                "Y",
                "Y Units",
                "X Origin",
                "Y Origin",
                "Guide",
                "Parent",
                "IgnoredByParentSize"
            ]
        );
    }

    #[test]
    fn x_units_exclude_vertical_units() {
        let mut state = StateDefinition::default_state();
        add_positioning_variables(&mut state, true, false);
        let x_units = state
            .variable(&QualifiedName::unqualified("X Units"))
            .unwrap();
        assert_eq!(x_units.excluded_enum_values.len(), 6);
        assert!(x_units.excludes(&EnumValue::from(PositionUnitType::PixelsFromBaseline)));
        assert!(!x_units.excludes(&EnumValue::from(PositionUnitType::PixelsFromLeft)));
    }

    #[test]
    fn baseline_is_excluded_unless_requested() {
        let baseline = EnumValue::from(VerticalAlignment::TextBaseline);
        let origin = QualifiedName::unqualified("Y Origin");

        let mut plain = StateDefinition::default_state();
        add_positioning_variables(&mut plain, true, false);
        assert!(plain.variable(&origin).unwrap().excludes(&baseline));

        let mut text = StateDefinition::default_state();
        add_positioning_variables(&mut text, true, true);
        assert!(!text.variable(&origin).unwrap().excludes(&baseline));
    }

    #[test]
    fn dimension_action_controls_units() {
        let units = QualifiedName::unqualified("Width Units");

        let mut excluded = StateDefinition::default_state();
        add_dimensions_variables(&mut excluded, 10.0, 10.0, DimensionVariableAction::ExcludeFileOptions);
        assert_eq!(excluded.variable(&units).unwrap().excluded_enum_values.len(), 2);

        let mut file = StateDefinition::default_state();
        add_dimensions_variables(
            &mut file,
            10.0,
            10.0,
            DimensionVariableAction::DefaultToPercentageOfFile,
        );
        let entry = file.variable(&units).unwrap();
        assert!(entry.excluded_enum_values.is_empty());
        assert_eq!(
            entry.value,
            Some(Variant::from(DimensionUnitType::PercentageOfSourceFile))
        );
    }

    #[test]
    fn sort_values_follow_insertion() {
        let mut state = StateDefinition::default_state();
        add_color_variables(&mut state, false);
        add_state_variable(&mut state);
        apply_sort_values_from_order(&mut state);
        let orders: Vec<_> = state.variables.iter().map(|e| e.desired_order).collect();
        assert_eq!(orders, [Some(0), Some(1), Some(2), Some(3)]);
        assert!(!state.variables[3].sets_value);
    }
}
