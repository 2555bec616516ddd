//! Variable entries stored in states.

use serde::{Deserialize, Serialize};

use crate::enums::EnumValue;
use crate::name::QualifiedName;
use crate::types::{ListItemType, TypeTag};
use crate::value::{ListValue, Variant};

fn default_true() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A single named, typed value inside a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableEntry {
    /// Variable name, optionally qualified by an instance path.
    pub name: QualifiedName,
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// Display grouping. Plays no part in resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Authored value. `None` is a present-but-unset value, not an absence.
    #[serde(default)]
    pub value: Option<Variant>,
    /// When false the entry never overrides a computed value.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub sets_value: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub can_only_be_set_in_default_state: bool,
    /// Enum values tooling must treat as invalid for this entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_enum_values: Vec<EnumValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_order: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_file: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_font: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden_in_property_grid: bool,
}

impl VariableEntry {
    /// Creates a value-setting entry with no category or flags.
    pub fn new(name: QualifiedName, type_tag: TypeTag, value: Option<Variant>) -> Self {
        Self {
            name,
            type_tag,
            category: None,
            value,
            sets_value: true,
            can_only_be_set_in_default_state: false,
            excluded_enum_values: Vec::new(),
            desired_order: None,
            is_file: false,
            is_font: false,
            hidden_in_property_grid: false,
        }
    }

    /// Shorthand for an unqualified entry with a value.
    pub fn named(name: &str, type_tag: TypeTag, value: impl Into<Variant>) -> Self {
        Self::new(QualifiedName::unqualified(name), type_tag, Some(value.into()))
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn non_value_setting(mut self) -> Self {
        self.sets_value = false;
        self
    }

    pub fn default_state_only(mut self) -> Self {
        self.can_only_be_set_in_default_state = true;
        self
    }

    pub fn excluding<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<EnumValue>,
    {
        self.excluded_enum_values
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn file(mut self) -> Self {
        self.is_file = true;
        self
    }

    pub fn font(mut self) -> Self {
        self.is_font = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden_in_property_grid = true;
        self
    }

    /// Returns true if the value conforms to the entry's own type tag.
    pub fn is_well_typed(&self) -> bool {
        self.type_tag.accepts(self.value.as_ref())
    }

    /// Returns true if `value` is in the exclusion set.
    pub fn excludes(&self, value: &EnumValue) -> bool {
        self.excluded_enum_values.contains(value)
    }
}

/// A list-valued entry inside a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableListEntry {
    pub name: QualifiedName,
    pub item_type: ListItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub value: ListValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_order: Option<u32>,
}

impl VariableListEntry {
    /// Creates an empty string list.
    pub fn strings(name: &str) -> Self {
        Self {
            name: QualifiedName::unqualified(name),
            item_type: ListItemType::String,
            category: None,
            value: ListValue::Strings(Vec::new()),
            desired_order: None,
        }
    }

    /// Creates a point list with the given items.
    pub fn points(name: &str, points: Vec<crate::value::Point>) -> Self {
        Self {
            name: QualifiedName::unqualified(name),
            item_type: ListItemType::Point,
            category: None,
            value: ListValue::Points(points),
            desired_order: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn type_tag(&self) -> TypeTag {
        TypeTag::List(self.item_type)
    }
}
