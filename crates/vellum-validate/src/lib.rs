//! Element validation.
//!
//! Three families of checks run against one element at a time:
//!
//! - [`behavior`]: components satisfy the behaviors they reference
//! - [`parent`]: `Parent` variables name existing instances
//! - [`states`]: states set variables consistently with their declarations
//!
//! Diagnostics are data. Validation never modifies the project and never
//! stops at the first problem.

pub mod behavior;
pub mod diagnostic;
pub mod parent;
pub mod states;

use tracing::debug;
use vellum_model::{ElementDefinition, Project};
use vellum_resolve::VariableResolver;
use vellum_standards::StandardDefaultsRegistry;

pub use diagnostic::{Category, Diagnostic};
pub use vellum_resolve::{ResolveError, Result};

/// Runs every check against elements of one project.
#[derive(Debug, Clone, Copy)]
pub struct ErrorChecker<'a> {
    resolver: VariableResolver<'a>,
}

impl<'a> ErrorChecker<'a> {
    pub fn new(project: &'a Project, registry: &'a StandardDefaultsRegistry) -> Self {
        Self::with_resolver(VariableResolver::new(project, registry))
    }

    /// Uses an already configured resolver.
    pub fn with_resolver(resolver: VariableResolver<'a>) -> Self {
        Self { resolver }
    }

    /// All diagnostics for `element`, behavior checks first.
    ///
    /// # Errors
    ///
    /// Fails only when the standard defaults registry is not initialized.
    pub fn errors_for(&self, element: &'a ElementDefinition) -> Result<Vec<Diagnostic>> {
        let mut diagnostics = self.behavior_errors(element)?;
        diagnostics.extend(self.parent_errors(element));
        diagnostics.extend(self.state_errors(element)?);
        debug!(element = %element.name, count = diagnostics.len(), "validated element");
        Ok(diagnostics)
    }

    pub fn behavior_errors(&self, element: &'a ElementDefinition) -> Result<Vec<Diagnostic>> {
        behavior::check(element, &self.resolver)
    }

    pub fn parent_errors(&self, element: &ElementDefinition) -> Vec<Diagnostic> {
        parent::check(element)
    }

    pub fn state_errors(&self, element: &'a ElementDefinition) -> Result<Vec<Diagnostic>> {
        states::check(element, &self.resolver)
    }

    /// Diagnostics for every element in the project, paired with the
    /// element's name. Elements without problems are omitted.
    pub fn errors_for_project(&self) -> Result<Vec<(&'a str, Vec<Diagnostic>)>> {
        let mut report = Vec::new();
        for element in self.resolver.project().elements() {
            let diagnostics = self.errors_for(element)?;
            if !diagnostics.is_empty() {
                report.push((element.name.as_str(), diagnostics));
            }
        }
        Ok(report)
    }
}

/// Validates one element with default resolution options.
///
/// # Errors
///
/// Fails only when the standard defaults registry is not initialized.
pub fn validate<'a>(
    element: &'a ElementDefinition,
    project: &'a Project,
    registry: &'a StandardDefaultsRegistry,
) -> Result<Vec<Diagnostic>> {
    ErrorChecker::new(project, registry).errors_for(element)
}
