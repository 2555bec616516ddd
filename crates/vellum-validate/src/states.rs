//! State consistency checks.

use tracing::trace;
use vellum_model::{ElementDefinition, StateDefinition, TypeTag, VariableEntry};
use vellum_resolve::{Result, VariableResolver};

use crate::diagnostic::Diagnostic;

/// Checks the variables every state of `element` sets.
///
/// Reports qualified names pointing at missing instances, default-only
/// variables set outside the default state, and entries whose type differs
/// from the variable's declaration.
pub fn check<'a>(
    element: &'a ElementDefinition,
    resolver: &VariableResolver<'a>,
) -> Result<Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();
    for (category, state) in element.all_states() {
        let in_default = category.is_none() && state.is_default();
        for entry in &state.variables {
            check_entry(element, state, in_default, entry, resolver, &mut diagnostics)?;
        }
    }
    Ok(diagnostics)
}

fn check_entry<'a>(
    element: &'a ElementDefinition,
    state: &StateDefinition,
    in_default: bool,
    entry: &VariableEntry,
    resolver: &VariableResolver<'a>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<()> {
    if let Some(instance) = entry.name.first_instance()
        && element.instance(instance).is_none()
    {
        diagnostics.push(Diagnostic::UnknownInstanceReference {
            variable: entry.name.to_string(),
            instance: instance.to_string(),
            state: state.name.clone(),
        });
        return Ok(());
    }

    if !in_default
        && (entry.can_only_be_set_in_default_state
            || resolver.is_default_only(element, &entry.name))
    {
        diagnostics.push(Diagnostic::DefaultOnlyVariableInState {
            variable: entry.name.to_string(),
            state: state.name.clone(),
        });
    }

    // The default state may redeclare inherited variables; other states are
    // held to the element's own declaration.
    let declaration = if in_default {
        resolver.resolve_inherited(element, &entry.name)?
    } else {
        resolver.resolve_default(element, &entry.name)?
    };
    let Some(declared) = declaration.type_tag() else {
        trace!(element = %element.name, variable = %entry.name, "no declaration to compare against");
        return Ok(());
    };
    if !compatible(declared, entry.type_tag) {
        diagnostics.push(Diagnostic::VariableTypeChanged {
            variable: entry.name.to_string(),
            state: state.name.clone(),
            declared,
            actual: entry.type_tag,
        });
    }
    Ok(())
}

/// State selectors hold state names and may be authored as plain strings.
fn compatible(declared: TypeTag, actual: TypeTag) -> bool {
    declared == actual
        || matches!(
            (declared, actual),
            (TypeTag::State, TypeTag::String) | (TypeTag::String, TypeTag::State)
        )
}
