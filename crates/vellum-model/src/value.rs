//! Tagged variable values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::EnumValue;

/// A 2D point used by list-valued variables such as polygon points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The value of a typed list variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListValue {
    Strings(Vec<String>),
    Points(Vec<Point>),
}

impl ListValue {
    pub fn len(&self) -> usize {
        match self {
            Self::Strings(items) => items.len(),
            Self::Points(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A variable value. Absence of a value is modelled as `Option<Variant>`.
///
/// Integer and float values are kept distinct. Reading an integer as a
/// float widens it losslessly through [`Variant::as_f64`]; reading a float
/// as an integer is not supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variant {
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
    Enum(EnumValue),
    List(ListValue),
}

impl Variant {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value of an integer variant. Floats are not narrowed.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns a numeric value as `f64`; both `i32` and `f32` widen exactly.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(f64::from(*value)),
            Self::Float(value) => Some(f64::from(*value)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<EnumValue> {
        match self {
            Self::Enum(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            Self::List(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "\"{value}\""),
            Self::Enum(value) => write!(f, "{value}"),
            Self::List(ListValue::Strings(items)) => write!(f, "[{}]", items.join(", ")),
            Self::List(ListValue::Points(items)) => {
                let points: Vec<String> = items
                    .iter()
                    .map(|p| format!("({}, {})", p.x, p.y))
                    .collect();
                write!(f, "[{}]", points.join(", "))
            }
        }
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for Variant {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<EnumValue> for Variant {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

impl From<ListValue> for Variant {
    fn from(value: ListValue) -> Self {
        Self::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::HorizontalAlignment;

    #[test]
    fn int_widens_to_f64_without_rounding() {
        let big = Variant::Int(16_777_217);
        assert_eq!(big.as_f64(), Some(16_777_217.0));
    }

    #[test]
    fn float_is_not_narrowed_to_int() {
        assert_eq!(Variant::Float(10.0).as_i32(), None);
        assert_eq!(Variant::Int(10).as_i32(), Some(10));
    }

    #[test]
    fn enum_conversion() {
        let value = Variant::from(HorizontalAlignment::Center);
        assert_eq!(value.to_string(), "Center");
        assert_eq!(
            value.as_enum(),
            Some(EnumValue::HorizontalAlignment(HorizontalAlignment::Center))
        );
    }
}
