//! The `vellum` command line tool.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::debug;
use vellum_cli::config::Config;
use vellum_cli::logging::{LogConfig, init_logging};
use vellum_resolve::ResolveOptions;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{run_resolve, run_schema, run_types, run_validate};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let (config, source) = match Config::load_with_source(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(2);
        }
    };
    let log_config = log_config_from_cli(&cli, &config);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    debug!(%source, "configuration loaded");

    let result = match &cli.command {
        Command::Types => run_types().map(|()| 0),
        Command::Schema(args) => run_schema(args).map(|()| 0),
        Command::Validate(args) => {
            run_validate(args, config.resolve).map(|count| if count > 0 { 1 } else { 0 })
        }
        Command::Resolve(args) => {
            run_resolve(args, resolve_options(args.stacking, config.resolve)).map(|()| 0)
        }
    };
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            2
        }
    };
    std::process::exit(exit_code);
}

fn resolve_options(stacking: Option<cli::StackingArg>, file: ResolveOptions) -> ResolveOptions {
    match stacking {
        Some(stacking) => ResolveOptions {
            stacking: stacking.into(),
        },
        None => file,
    }
}

/// Build logging configuration with flags taking precedence over the file.
fn log_config_from_cli(cli: &Cli, config: &Config) -> LogConfig {
    let mut log_config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    if let Some(level) = cli.log_level {
        log_config.level_filter = level.into();
        log_config.use_env_filter = false;
    } else if cli.verbosity.is_present() {
        log_config.use_env_filter = false;
    } else if let Some(level) = config.logging.level {
        log_config.level_filter = level.into();
    }
    log_config.format = cli
        .log_format
        .or(config.logging.format)
        .unwrap_or_default();
    log_config.log_file = cli.log_file.clone();
    log_config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    log_config
}
