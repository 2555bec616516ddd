//! Parent reference checks.

use vellum_model::{ElementDefinition, Variant};

use crate::diagnostic::Diagnostic;

const PARENT_VARIABLE: &str = "Parent";

/// Reports every `<Instance>.Parent` value naming an instance that does not
/// exist in `element`.
///
/// Every state is checked, categorized ones included. Empty values mean the
/// instance is attached to the element itself and are never reported.
pub fn check(element: &ElementDefinition) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for (_, state) in element.all_states() {
        for entry in &state.variables {
            if !entry.name.is_qualified() || entry.name.root() != PARENT_VARIABLE {
                continue;
            }
            let Some(Variant::String(parent)) = &entry.value else {
                continue;
            };
            // `Frame.Slot` style parents address a child of an instance.
            let target = parent.split('.').next().unwrap_or_default();
            if parent.is_empty() || element.instance(target).is_some() {
                continue;
            }
            diagnostics.push(Diagnostic::DanglingParent {
                instance: entry.name.instance_path().join("."),
                parent: parent.clone(),
                state: state.name.clone(),
            });
        }
    }
    diagnostics
}
