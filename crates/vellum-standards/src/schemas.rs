//! Default-state schemas of the built-in element types.
//!
//! Variable names and types here are what persisted projects and the
//! rendering layer rely on. Renaming or retyping an entry is a breaking
//! change.

use vellum_model::{
    Blend, ChildrenLayout, EnumKind, HorizontalAlignment, Point, QualifiedName, StateDefinition,
    TextOverflowHorizontalMode, TextOverflowVerticalMode, TextureAddress, TypeTag, VariableEntry,
    VariableListEntry, VerticalAlignment,
};

use crate::builders::{
    DimensionVariableAction, add_clips_children, add_color_variables, add_dimensions_variables,
    add_event_variables, add_positioning_variables, add_rotation_variable, add_state_variable,
    add_variable_reference_list, apply_sort_values_from_order,
};

/// Built-in type names, in registration order.
pub const STANDARD_TYPES: &[&str] = &[
    "Text",
    "Sprite",
    "Container",
    "ColoredRectangle",
    "Circle",
    "Rectangle",
    "Polygon",
    "NineSlice",
    "Component",
    "Screen",
];

/// Builds every built-in schema in registration order.
pub fn build_all() -> Vec<(String, StateDefinition)> {
    vec![
        ("Text".to_string(), text()),
        ("Sprite".to_string(), sprite()),
        ("Container".to_string(), container()),
        ("ColoredRectangle".to_string(), colored_rectangle()),
        ("Circle".to_string(), circle()),
        ("Rectangle".to_string(), rectangle()),
        ("Polygon".to_string(), polygon()),
        ("NineSlice".to_string(), nine_slice()),
        ("Component".to_string(), component()),
        ("Screen".to_string(), screen()),
    ]
}

fn var(name: &str, type_tag: TypeTag, value: impl Into<vellum_model::Variant>) -> VariableEntry {
    VariableEntry::named(name, type_tag, value)
}

fn null(name: &str, type_tag: TypeTag) -> VariableEntry {
    VariableEntry::new(QualifiedName::unqualified(name), type_tag, None)
}

fn visible() -> VariableEntry {
    var("Visible", TypeTag::Bool, true)
}

fn text() -> StateDefinition {
    let mut state = StateDefinition::default_state();
    add_positioning_variables(&mut state, true, true);
    add_dimensions_variables(&mut state, 100.0, 50.0, DimensionVariableAction::ExcludeFileOptions);

    state.variables.extend([
        visible(),
        var("Text", TypeTag::String, "Hello").category("Text"),
        var(
            "HorizontalAlignment",
            TypeTag::Enum(EnumKind::HorizontalAlignment),
            HorizontalAlignment::Left,
        )
        .category("Text"),
        var(
            "VerticalAlignment",
            TypeTag::Enum(EnumKind::VerticalAlignment),
            VerticalAlignment::Top,
        )
        .category("Text"),
        null("MaxLettersToShow", TypeTag::IntNullable).category("Text"),
        var(
            "TextOverflowVerticalMode",
            TypeTag::Enum(EnumKind::TextOverflowVerticalMode),
            TextOverflowVerticalMode::SpillOver,
        )
        .category("Text"),
        var(
            "TextOverflowHorizontalMode",
            TypeTag::Enum(EnumKind::TextOverflowHorizontalMode),
            TextOverflowHorizontalMode::TruncateWord,
        )
        .category("Text"),
        var("UseCustomFont", TypeTag::Bool, false).category("Font"),
        var("Font", TypeTag::String, "Arial").category("Font").font(),
        var("FontSize", TypeTag::Int, 18).category("Font"),
        var("OutlineThickness", TypeTag::Int, 0).category("Font"),
        var("IsItalic", TypeTag::Bool, false).category("Font"),
        var("IsBold", TypeTag::Bool, false).category("Font"),
        var("UseFontSmoothing", TypeTag::Bool, true).category("Font"),
        var("CustomFontFile", TypeTag::String, "").category("Font").file(),
        var("Font Scale", TypeTag::Float, 1.0f32).category("Font"),
        var("LineHeightMultiplier", TypeTag::Float, 1.0f32).category("Font"),
    ]);

    add_rotation_variable(&mut state);
    add_event_variables(&mut state, false);
    add_state_variable(&mut state);
    add_variable_reference_list(&mut state);
    add_color_variables(&mut state, true);
    apply_sort_values_from_order(&mut state);
    state
}

fn source_texture_variables(state: &mut StateDefinition) {
    state.variables.push(
        var(
            "Texture Address",
            TypeTag::Enum(EnumKind::TextureAddress),
            TextureAddress::EntireTexture,
        )
        .category("Source"),
    );
    for name in ["Texture Left", "Texture Top", "Texture Width", "Texture Height"] {
        state
            .variables
            .push(var(name, TypeTag::Int, 0).category("Source"));
    }
}

fn sprite() -> StateDefinition {
    let mut state = StateDefinition::default_state();
    add_positioning_variables(&mut state, true, false);
    add_dimensions_variables(
        &mut state,
        100.0,
        100.0,
        DimensionVariableAction::DefaultToPercentageOfFile,
    );
    state.variables.extend([
        var("SourceFile", TypeTag::String, "").file(),
        visible(),
        var("Animate", TypeTag::Bool, false).category("Animation"),
        null("CurrentChainName", TypeTag::String).category("Animation"),
    ]);

    add_rotation_variable(&mut state);
    state.variables.extend([
        var("FlipHorizontal", TypeTag::Bool, false).category("Flip and Rotation"),
        var("FlipVertical", TypeTag::Bool, false).category("Flip and Rotation"),
    ]);

    source_texture_variables(&mut state);
    state.variables.extend([
        var("Texture Width Scale", TypeTag::Float, 0.0f32).category("Source"),
        var("Texture Height Scale", TypeTag::Float, 0.0f32).category("Source"),
        var("Wrap", TypeTag::Bool, false).category("Source"),
    ]);

    add_color_variables(&mut state, true);
    add_event_variables(&mut state, false);
    add_state_variable(&mut state);
    add_variable_reference_list(&mut state);
    state
        .variable_lists
        .push(VariableListEntry::strings("AnimationFrames").category("Animation"));
    apply_sort_values_from_order(&mut state);
    state
}

fn container() -> StateDefinition {
    let mut state = StateDefinition::default_state();
    add_positioning_variables(&mut state, true, false);
    add_dimensions_variables(&mut state, 150.0, 150.0, DimensionVariableAction::ExcludeFileOptions);

    state.variables.extend([
        null("Contained Type", TypeTag::String).category("Children"),
        var(
            "Children Layout",
            TypeTag::Enum(EnumKind::ChildrenLayout),
            ChildrenLayout::Regular,
        )
        .category("Children"),
        var("StackSpacing", TypeTag::Float, 0.0f32).category("Children"),
        var("Wraps Children", TypeTag::Bool, false).category("Children"),
        var("AutoGridHorizontalCells", TypeTag::Int, 4).category("Children"),
        var("AutoGridVerticalCells", TypeTag::Int, 4).category("Children"),
    ]);
    add_clips_children(&mut state);
    state.variables.push(visible());

    add_rotation_variable(&mut state);
    state
        .variables
        .push(var("FlipHorizontal", TypeTag::Bool, false).category("Flip and Rotation"));

    add_variable_reference_list(&mut state);
    add_event_variables(&mut state, true);
    apply_sort_values_from_order(&mut state);
    state
}

fn blend() -> VariableEntry {
    var("Blend", TypeTag::Enum(EnumKind::Blend), Blend::Normal).category("Rendering")
}

fn colored_rectangle() -> StateDefinition {
    let mut state = StateDefinition::default_state();
    add_positioning_variables(&mut state, true, false);
    add_dimensions_variables(&mut state, 50.0, 50.0, DimensionVariableAction::ExcludeFileOptions);
    add_rotation_variable(&mut state);
    state.variables.push(visible());
    add_color_variables(&mut state, true);
    state.variables.push(blend());
    add_event_variables(&mut state, false);
    add_state_variable(&mut state);
    apply_sort_values_from_order(&mut state);
    add_variable_reference_list(&mut state);
    state
}

fn circle() -> StateDefinition {
    let mut state = StateDefinition::default_state();
    add_positioning_variables(&mut state, true, false);
    state.variables.extend([
        var("Radius", TypeTag::Float, 16.0f32),
        var("Width", TypeTag::Float, 16.0f32).hidden(),
        var("Height", TypeTag::Float, 16.0f32).hidden(),
        visible(),
    ]);
    add_color_variables(&mut state, true);
    // Rotating about a non-center origin still moves a circle.
    add_rotation_variable(&mut state);
    add_event_variables(&mut state, false);
    add_state_variable(&mut state);
    apply_sort_values_from_order(&mut state);
    add_variable_reference_list(&mut state);
    state
}

fn rectangle() -> StateDefinition {
    let mut state = StateDefinition::default_state();
    add_positioning_variables(&mut state, true, false);
    add_dimensions_variables(&mut state, 16.0, 16.0, DimensionVariableAction::ExcludeFileOptions);
    state.variables.push(visible());
    add_color_variables(&mut state, true);
    add_rotation_variable(&mut state);
    add_event_variables(&mut state, false);
    add_state_variable(&mut state);
    apply_sort_values_from_order(&mut state);
    add_variable_reference_list(&mut state);
    state
}

fn polygon() -> StateDefinition {
    let mut state = StateDefinition::default_state();
    add_positioning_variables(&mut state, false, false);
    state.variables.push(visible());
    add_color_variables(&mut state, true);
    add_rotation_variable(&mut state);

    let corners = [(-32.0, -32.0), (32.0, -32.0), (32.0, 32.0), (-32.0, 32.0), (-32.0, -32.0)];
    state.variable_lists.push(
        VariableListEntry::points(
            "Points",
            corners.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        )
        .category("Points"),
    );

    add_state_variable(&mut state);
    add_variable_reference_list(&mut state);
    apply_sort_values_from_order(&mut state);
    state
}

fn nine_slice() -> StateDefinition {
    let mut state = StateDefinition::default_state();
    add_positioning_variables(&mut state, true, false);
    add_dimensions_variables(&mut state, 64.0, 64.0, DimensionVariableAction::ExcludeFileOptions);
    state
        .variables
        .extend([var("SourceFile", TypeTag::String, "").file(), visible()]);

    add_color_variables(&mut state, true);
    state.variables.push(blend());
    source_texture_variables(&mut state);
    state.variables.push(
        null("CustomFrameTextureCoordinateWidth", TypeTag::FloatNullable).category("Source"),
    );

    add_variable_reference_list(&mut state);
    add_event_variables(&mut state, false);
    add_state_variable(&mut state);
    add_rotation_variable(&mut state);
    apply_sort_values_from_order(&mut state);
    state
}

fn component() -> StateDefinition {
    let mut state = StateDefinition::default_state();
    add_state_variable(&mut state);
    apply_sort_values_from_order(&mut state);
    state
}

fn screen() -> StateDefinition {
    StateDefinition::default_state()
}
