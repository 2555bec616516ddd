//! Behavior contract checks.
//!
//! A component that references a behavior must contain the instances the
//! behavior requires and expose its required variables with matching types.

use tracing::{debug, trace};
use vellum_model::{BehaviorDefinition, ElementDefinition, Instance, Project, RequiredInstance};
use vellum_resolve::{Result, VariableResolver};

use crate::diagnostic::Diagnostic;

/// Checks every behavior referenced by `component`.
///
/// Screens and standard elements cannot carry behaviors and yield nothing.
pub fn check<'a>(
    component: &'a ElementDefinition,
    resolver: &VariableResolver<'a>,
) -> Result<Vec<Diagnostic>> {
    let project = resolver.project();
    let mut diagnostics = Vec::new();
    if !component.is_component() {
        return Ok(diagnostics);
    }

    for reference in &component.behaviors {
        let Some(behavior) = project.behavior(&reference.behavior_name) else {
            debug!(component = %component.name, behavior = %reference.behavior_name, "behavior not defined");
            diagnostics.push(Diagnostic::MissingBehaviorReference {
                behavior: reference.behavior_name.clone(),
            });
            continue;
        };
        check_instances(component, behavior, project, &mut diagnostics);
        check_variables(component, behavior, resolver, &mut diagnostics)?;
    }

    Ok(diagnostics)
}

fn check_instances(
    component: &ElementDefinition,
    behavior: &BehaviorDefinition,
    project: &Project,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for required in &behavior.required_instances {
        let satisfied = component
            .instance(&required.name)
            .is_some_and(|instance| satisfies(instance, required, project));
        if satisfied {
            continue;
        }
        diagnostics.push(Diagnostic::MissingRequiredInstance {
            behavior: behavior.name.clone(),
            instance: required.name.clone(),
            required_type: required.base_type.clone(),
            required_behaviors: required.required_behaviors.clone(),
        });
    }
}

fn satisfies(instance: &Instance, required: &RequiredInstance, project: &Project) -> bool {
    if let Some(required_type) = &required.base_type
        && !project.is_of_type(&instance.base_type, required_type)
    {
        trace!(instance = %instance.name, actual = %instance.base_type, %required_type, "instance has the wrong type");
        return false;
    }
    // Only the base component's own declarations count.
    let base = project.element(&instance.base_type);
    required
        .required_behaviors
        .iter()
        .all(|behavior| base.is_some_and(|base| base.implements_behavior(behavior)))
}

fn check_variables<'a>(
    component: &'a ElementDefinition,
    behavior: &BehaviorDefinition,
    resolver: &VariableResolver<'a>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<()> {
    for required in &behavior.required_variables {
        let resolution = resolver.resolve_default(component, &required.name)?;
        match resolution.type_tag() {
            None => diagnostics.push(Diagnostic::MissingRequiredVariable {
                behavior: behavior.name.clone(),
                variable: required.name.to_string(),
            }),
            Some(actual) if actual != required.type_tag => {
                diagnostics.push(Diagnostic::RequiredVariableTypeMismatch {
                    behavior: behavior.name.clone(),
                    variable: required.name.to_string(),
                    required: required.type_tag,
                    actual,
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
