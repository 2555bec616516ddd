//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use vellum_cli::logging::{LogFormat, LogLevel};
use vellum_resolve::StackingMode;

#[derive(Parser)]
#[command(
    name = "vellum",
    version,
    about = "Inspect UI element schemas, validate projects and resolve variables",
    long_about = "Inspect the default schemas of the built-in element types, validate \
                  project files against behavior contracts and state rules, and \
                  resolve effective variable values through the state cascade."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: ./vellum.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags and the configuration file).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in element types.
    Types,

    /// Show the default-state schema of a built-in type.
    Schema(SchemaArgs),

    /// Validate elements of a project file.
    Validate(ValidateArgs),

    /// Resolve the effective value of a variable.
    Resolve(ResolveArgs),
}

#[derive(Args)]
pub struct SchemaArgs {
    /// Built-in type name, such as Sprite or Text.
    #[arg(value_name = "TYPE")]
    pub type_name: String,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Project file in JSON format.
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Validate a single element instead of every element.
    #[arg(long = "element", value_name = "NAME")]
    pub element: Option<String>,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Project file in JSON format.
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Element whose variable is resolved.
    #[arg(long = "element", value_name = "NAME")]
    pub element: String,

    /// Variable name, qualified with instance names where needed (Icon.Alpha).
    #[arg(long = "variable", value_name = "NAME")]
    pub variable: String,

    /// Apply an uncategorized state. Repeat to apply several, oldest first.
    #[arg(long = "state", value_name = "STATE")]
    pub states: Vec<String>,

    /// Select a state within a category, as CATEGORY=STATE. Repeatable.
    #[arg(long = "category", value_name = "CATEGORY=STATE", value_parser = parse_category_state)]
    pub categories: Vec<(String, String)>,

    /// How applied states combine (overrides the configuration file).
    #[arg(long = "stacking", value_enum)]
    pub stacking: Option<StackingArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StackingArg {
    Single,
    Stacked,
}

impl From<StackingArg> for StackingMode {
    fn from(arg: StackingArg) -> Self {
        match arg {
            StackingArg::Single => StackingMode::Single,
            StackingArg::Stacked => StackingMode::Stacked,
        }
    }
}

fn parse_category_state(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((category, state)) if !category.trim().is_empty() && !state.trim().is_empty() => {
            Ok((category.trim().to_string(), state.trim().to_string()))
        }
        _ => Err(format!("expected CATEGORY=STATE, got {value}")),
    }
}
