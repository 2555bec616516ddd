//! Resolution results.

use std::fmt;

use vellum_model::{TypeTag, VariableEntry, Variant};

/// Where in the cascade an entry was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A state of an element in the project.
    Element,
    /// A default state held by the standard defaults registry.
    Registry,
}

/// The state that supplied a resolved entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'a> {
    /// Element name, or the type name for registry defaults.
    pub element: &'a str,
    pub category: Option<&'a str>,
    pub state: &'a str,
    pub origin: Origin,
}

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element)?;
        if self.origin == Origin::Registry {
            f.write_str(" (standard)")?;
        }
        if let Some(category) = self.category {
            write!(f, " / {category}")?;
        }
        write!(f, " / {}", self.state)
    }
}

/// Outcome of resolving one variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a, E> {
    /// A value-setting entry won the cascade. Its value may still be `None`.
    Found { entry: &'a E, source: Source<'a> },
    /// Only entries that never set values (such as the `State` selector)
    /// exist for this name. The nearest one is reported.
    Declared { entry: &'a E, source: Source<'a> },
    /// No level of the cascade mentions the name.
    NotFound,
}

impl<'a, E> Resolution<'a, E> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The winning value-setting entry.
    pub fn found(&self) -> Option<&'a E> {
        match self {
            Self::Found { entry, .. } => Some(*entry),
            _ => None,
        }
    }

    /// The winning entry, value-setting or not.
    pub fn entry(&self) -> Option<&'a E> {
        match self {
            Self::Found { entry, .. } | Self::Declared { entry, .. } => Some(*entry),
            Self::NotFound => None,
        }
    }

    pub fn source(&self) -> Option<Source<'a>> {
        match self {
            Self::Found { source, .. } | Self::Declared { source, .. } => Some(*source),
            Self::NotFound => None,
        }
    }
}

impl<'a> Resolution<'a, VariableEntry> {
    /// The resolved value. `None` both when nothing was found and when the
    /// winning entry holds no value; use [`value_and_found`](Self::value_and_found)
    /// to tell them apart.
    pub fn value(&self) -> Option<&'a Variant> {
        self.found().and_then(|entry| entry.value.as_ref())
    }

    /// The resolved value together with whether any value-setting entry
    /// was found.
    pub fn value_and_found(&self) -> (Option<&'a Variant>, bool) {
        (self.value(), self.is_found())
    }

    /// The resolved value widened to `f64`. Integers widen exactly.
    pub fn as_f64(&self) -> Option<f64> {
        self.value().and_then(Variant::as_f64)
    }

    /// The type of the winning entry.
    pub fn type_tag(&self) -> Option<TypeTag> {
        self.entry().map(|entry| entry.type_tag)
    }
}
