//! Resolution options.

use serde::{Deserialize, Serialize};

/// How explicitly applied states combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackingMode {
    /// Only the most recently applied state is active.
    #[default]
    Single,
    /// Every applied state is active, most recent first.
    Stacked,
}

impl std::str::FromStr for StackingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "stacked" => Ok(Self::Stacked),
            other => Err(format!("Unknown stacking mode: {other}")),
        }
    }
}

/// Options controlling the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    pub stacking: StackingMode,
}

impl ResolveOptions {
    pub fn stacked() -> Self {
        Self {
            stacking: StackingMode::Stacked,
        }
    }
}
