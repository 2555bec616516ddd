//! Terminal tables and one-line summaries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use vellum_model::{StateDefinition, VariableEntry};
use vellum_resolve::Resolution;
use vellum_validate::{Category, Diagnostic};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// One row per built-in type with the size of its default state.
pub fn types_table<'a>(types: impl IntoIterator<Item = (&'a str, &'a StateDefinition)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Variables"),
        header_cell("Lists"),
    ]);
    apply_table_style(&mut table);
    for (name, state) in types {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(state.variables.len()),
            Cell::new(state.variable_lists.len()),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

/// The default-state schema of one type.
pub fn schema_table(state: &StateDefinition) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Order"),
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Category"),
        header_cell("Default"),
        header_cell("Flags"),
    ]);
    apply_table_style(&mut table);
    for entry in &state.variables {
        table.add_row(vec![
            order_cell(entry.desired_order),
            Cell::new(&entry.name),
            Cell::new(entry.type_tag),
            category_cell(entry.category.as_deref()),
            match &entry.value {
                Some(value) => Cell::new(value),
                None => dim_cell("null"),
            },
            Cell::new(entry_flags(entry).join(", ")),
        ]);
    }
    for list in &state.variable_lists {
        table.add_row(vec![
            order_cell(list.desired_order),
            Cell::new(&list.name),
            Cell::new(list.type_tag()),
            category_cell(list.category.as_deref()),
            Cell::new(format!("{} items", list.value.len())),
            Cell::new(""),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

fn order_cell(order: Option<u32>) -> Cell {
    match order {
        Some(order) => Cell::new(order),
        None => dim_cell("-"),
    }
}

fn category_cell(category: Option<&str>) -> Cell {
    match category {
        Some(category) => Cell::new(category),
        None => dim_cell("-"),
    }
}

/// Short labels for the flags set on an entry.
pub fn entry_flags(entry: &VariableEntry) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if !entry.sets_value {
        flags.push("no-value");
    }
    if entry.can_only_be_set_in_default_state {
        flags.push("default-only");
    }
    if entry.is_file {
        flags.push("file");
    }
    if entry.is_font {
        flags.push("font");
    }
    if entry.hidden_in_property_grid {
        flags.push("hidden");
    }
    if !entry.excluded_enum_values.is_empty() {
        flags.push("excludes");
    }
    flags
}

/// Diagnostics grouped by element.
pub fn diagnostics_table<'a>(
    report: impl IntoIterator<Item = (&'a str, &'a [Diagnostic])>,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Element"),
        header_cell("Code"),
        header_cell("Category"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for (element, diagnostics) in report {
        for diagnostic in diagnostics {
            table.add_row(vec![
                Cell::new(element),
                Cell::new(diagnostic.code())
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                category_label(diagnostic.category()),
                Cell::new(diagnostic.message()),
            ]);
        }
    }
    align_column(&mut table, 1, CellAlignment::Center);
    table
}

fn category_label(category: Category) -> Cell {
    let color = match category {
        Category::Behavior => Color::Yellow,
        Category::Parent => Color::Magenta,
        Category::State => Color::Cyan,
    };
    Cell::new(category.label()).fg(color)
}

/// One line describing how `variable` resolved.
pub fn describe_resolution(variable: &str, resolution: &Resolution<'_, VariableEntry>) -> String {
    match resolution {
        Resolution::Found { entry, source } => match &entry.value {
            Some(value) => format!("{variable} = {value} ({}, from {source})", entry.type_tag),
            None => format!("{variable} = null ({}, from {source})", entry.type_tag),
        },
        Resolution::Declared { entry, source } => format!(
            "{variable} is declared as {} by {source} but has no value",
            entry.type_tag
        ),
        Resolution::NotFound => format!("{variable} not found"),
    }
}
