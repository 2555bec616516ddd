//! Semantic type tags for variables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::EnumKind;
use crate::error::ModelError;
use crate::value::{ListValue, Variant};

/// Item type of a typed list variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ListItemType {
    String,
    Point,
}

impl ListItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Point => "Point",
        }
    }
}

/// The declared type of a variable.
///
/// The type of a qualified variable name is fixed by its baseline
/// declaration and never changes across the cascade.
///
/// # Example
///
/// ```
/// use vellum_model::{EnumKind, TypeTag};
///
/// let tag: TypeTag = "float?".parse().unwrap();
/// assert_eq!(tag, TypeTag::FloatNullable);
///
/// let units: TypeTag = "PositionUnitType".parse().unwrap();
/// assert_eq!(units, TypeTag::Enum(EnumKind::PositionUnitType));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeTag {
    Bool,
    Int,
    IntNullable,
    Float,
    FloatNullable,
    String,
    /// The synthetic state selector; values are state names.
    State,
    Enum(EnumKind),
    List(ListItemType),
}

impl TypeTag {
    /// Returns true if the tag admits a missing value.
    pub fn is_nullable(&self) -> bool {
        matches!(
            self,
            Self::IntNullable | Self::FloatNullable | Self::String | Self::State
        )
    }

    /// Returns true for numeric tags (int, float and their nullable forms).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int | Self::IntNullable | Self::Float | Self::FloatNullable
        )
    }

    /// Checks whether a value may be stored under this tag.
    ///
    /// `None` is accepted only by nullable tags.
    pub fn accepts(&self, value: Option<&Variant>) -> bool {
        let Some(value) = value else {
            return self.is_nullable();
        };
        match (self, value) {
            (Self::Bool, Variant::Bool(_)) => true,
            (Self::Int | Self::IntNullable, Variant::Int(_)) => true,
            (Self::Float | Self::FloatNullable, Variant::Float(_)) => true,
            (Self::String | Self::State, Variant::String(_)) => true,
            (Self::Enum(kind), Variant::Enum(value)) => value.kind() == *kind,
            (Self::List(ListItemType::String), Variant::List(ListValue::Strings(_))) => true,
            (Self::List(ListItemType::Point), Variant::List(ListValue::Points(_))) => true,
            _ => false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::IntNullable => f.write_str("int?"),
            Self::Float => f.write_str("float"),
            Self::FloatNullable => f.write_str("float?"),
            Self::String => f.write_str("string"),
            Self::State => f.write_str("State"),
            Self::Enum(kind) => f.write_str(kind.type_name()),
            Self::List(item) => write!(f, "List<{}>", item.as_str()),
        }
    }
}

impl FromStr for TypeTag {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let tag = match trimmed {
            "bool" => Self::Bool,
            "int" => Self::Int,
            "int?" => Self::IntNullable,
            "float" => Self::Float,
            "float?" => Self::FloatNullable,
            "string" => Self::String,
            "State" => Self::State,
            "List<string>" => Self::List(ListItemType::String),
            "List<Point>" => Self::List(ListItemType::Point),
            other => match EnumKind::from_type_name(other) {
                Some(kind) => Self::Enum(kind),
                None => {
                    return Err(ModelError::InvalidTypeTag {
                        value: s.to_string(),
                    });
                }
            },
        };
        Ok(tag)
    }
}

impl TryFrom<String> for TypeTag {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeTag> for String {
    fn from(value: TypeTag) -> Self {
        value.to_string()
    }
}
