use anyhow::{Context, Result};
use tracing::{info, info_span};

use vellum_cli::project::{load_project, require_element};
use vellum_cli::report::{describe_resolution, diagnostics_table, schema_table, types_table};
use vellum_model::QualifiedName;
use vellum_resolve::{ResolveOptions, Scope, StateSelection, VariableResolver};
use vellum_standards::StandardDefaultsRegistry;
use vellum_validate::{Diagnostic, ErrorChecker};

use crate::cli::{ResolveArgs, SchemaArgs, ValidateArgs};

pub fn run_types() -> Result<()> {
    let registry = StandardDefaultsRegistry::initialized();
    let mut rows = Vec::new();
    for name in registry.default_types()? {
        if let Some(state) = registry.get_default_state_for(name, true)? {
            rows.push((name, state));
        }
    }
    println!("{}", types_table(rows));
    Ok(())
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let registry = StandardDefaultsRegistry::initialized();
    let state = registry
        .get_default_state_for(&args.type_name, true)?
        .with_context(|| format!("no default state for {}", args.type_name))?;
    println!("{}", schema_table(state));
    Ok(())
}

/// Prints diagnostics and returns how many were found.
pub fn run_validate(args: &ValidateArgs, options: ResolveOptions) -> Result<usize> {
    let span = info_span!("validate", project = %args.project.display());
    let _guard = span.enter();

    let project = load_project(&args.project)?;
    let registry = StandardDefaultsRegistry::initialized();
    let checker =
        ErrorChecker::with_resolver(VariableResolver::new(&project, &registry).with_options(options));

    let report: Vec<(&str, Vec<Diagnostic>)> = match &args.element {
        Some(name) => {
            let element = require_element(&project, name)?;
            let diagnostics = checker.errors_for(element)?;
            if diagnostics.is_empty() {
                Vec::new()
            } else {
                vec![(element.name.as_str(), diagnostics)]
            }
        }
        None => checker.errors_for_project()?,
    };

    let count: usize = report.iter().map(|(_, diagnostics)| diagnostics.len()).sum();
    info!(count, elements = report.len(), "validation complete");
    if count == 0 {
        println!("No problems found.");
        return Ok(0);
    }
    println!(
        "{}",
        diagnostics_table(
            report
                .iter()
                .map(|(element, diagnostics)| (*element, diagnostics.as_slice()))
        )
    );
    println!("{count} problem(s) found.");
    Ok(count)
}

pub fn run_resolve(args: &ResolveArgs, options: ResolveOptions) -> Result<()> {
    let span = info_span!("resolve", element = %args.element, variable = %args.variable);
    let _guard = span.enter();

    let project = load_project(&args.project)?;
    let registry = StandardDefaultsRegistry::initialized();
    let resolver = VariableResolver::new(&project, &registry).with_options(options);
    let element = require_element(&project, &args.element)?;
    let name: QualifiedName = args
        .variable
        .parse()
        .with_context(|| format!("invalid variable name {}", args.variable))?;

    let mut selection = StateSelection::new();
    for state in &args.states {
        selection = selection.with_state(state.as_str());
    }
    for (category, state) in &args.categories {
        selection.select_category(category.as_str(), state.as_str());
    }

    let resolution = resolver.resolve(Scope::Element(element), &name, &selection)?;
    println!("{}", describe_resolution(&args.variable, &resolution));
    Ok(())
}
