//! Qualified variable names.
//!
//! A variable name may be prefixed by the names of the instances it belongs
//! to, e.g. `ButtonInstance.Icon.X`. The prefix is parsed once into a path of
//! instance segments so that resolution can walk instances directly.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A variable name with an optional instance path.
///
/// # Example
///
/// ```
/// use vellum_model::QualifiedName;
///
/// let name: QualifiedName = "Button.Icon.X Units".parse().unwrap();
/// assert_eq!(name.instance_path(), ["Button", "Icon"]);
/// assert_eq!(name.root(), "X Units");
/// assert_eq!(name.to_string(), "Button.Icon.X Units");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName {
    path: Vec<String>,
    root: String,
}

impl QualifiedName {
    /// Parses a dotted name. Every segment must be non-empty.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        let mut segments: Vec<String> = value.split('.').map(str::to_string).collect();
        if segments.iter().any(|segment| segment.trim().is_empty()) {
            return Err(ModelError::InvalidQualifiedName {
                name: value.to_string(),
            });
        }
        let root = segments.pop().unwrap_or_default();
        Ok(Self {
            path: segments,
            root,
        })
    }

    /// Creates an unqualified name without parsing.
    ///
    /// Intended for schema builders whose names are known constants.
    pub fn unqualified(root: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            root: root.into(),
        }
    }

    /// The name as seen from the element owning `instance`.
    pub fn on_instance(&self, instance: &str) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.push(instance.to_string());
        path.extend(self.path.iter().cloned());
        Self {
            path,
            root: self.root.clone(),
        }
    }

    /// Instance segments, outermost first.
    pub fn instance_path(&self) -> &[String] {
        &self.path
    }

    /// The variable's own (unqualified) name.
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn is_qualified(&self) -> bool {
        !self.path.is_empty()
    }

    /// The outermost instance segment, if any.
    pub fn first_instance(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// Splits off the outermost instance, returning it and the remaining name.
    pub fn split_first_instance(&self) -> Option<(&str, Self)> {
        let (first, rest) = self.path.split_first()?;
        Some((
            first.as_str(),
            Self {
                path: rest.to_vec(),
                root: self.root.clone(),
            },
        ))
    }

    /// Returns the same name with a different root, keeping the instance path.
    pub fn with_root(&self, root: impl Into<String>) -> Self {
        Self {
            path: self.path.clone(),
            root: root.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.path {
            write!(f, "{segment}.")?;
        }
        f.write_str(&self.root)
    }
}

impl FromStr for QualifiedName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for QualifiedName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for QualifiedName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
