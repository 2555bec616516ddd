//! The project catalog of elements and behaviors.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::behavior::BehaviorDefinition;
use crate::element::{ElementDefinition, ElementKind};
use crate::error::{ModelError, Result};

/// Where an instance lives: the owning element and the instance name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceLocation {
    pub element: String,
    pub instance: String,
}

impl fmt::Display for InstanceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.element, self.instance)
    }
}

/// Serialized shape of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ProjectFile {
    #[serde(default)]
    elements: Vec<ElementDefinition>,
    #[serde(default)]
    behaviors: Vec<BehaviorDefinition>,
}

/// All elements and behaviors known to an authoring session.
///
/// Element and behavior names are unique. Lookups by name go through an
/// index that is kept in sync with the element list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "ProjectFile", into = "ProjectFile")]
pub struct Project {
    elements: Vec<ElementDefinition>,
    behaviors: Vec<BehaviorDefinition>,
    index: HashMap<String, usize>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(&mut self, element: ElementDefinition) -> Result<()> {
        if self.index.contains_key(&element.name) {
            return Err(ModelError::DuplicateElement { name: element.name });
        }
        self.index.insert(element.name.clone(), self.elements.len());
        self.elements.push(element);
        Ok(())
    }

    pub fn element(&self, name: &str) -> Option<&ElementDefinition> {
        self.index.get(name).map(|&i| &self.elements[i])
    }

    pub fn element_mut(&mut self, name: &str) -> Option<&mut ElementDefinition> {
        self.index.get(name).map(|&i| &mut self.elements[i])
    }

    pub fn elements(&self) -> impl Iterator<Item = &ElementDefinition> {
        self.elements.iter()
    }

    pub fn components(&self) -> impl Iterator<Item = &ElementDefinition> {
        self.elements
            .iter()
            .filter(|element| element.kind == ElementKind::Component)
    }

    pub fn add_behavior(&mut self, behavior: BehaviorDefinition) -> Result<()> {
        if self.behavior(&behavior.name).is_some() {
            return Err(ModelError::DuplicateBehavior {
                name: behavior.name,
            });
        }
        self.behaviors.push(behavior);
        Ok(())
    }

    pub fn behavior(&self, name: &str) -> Option<&BehaviorDefinition> {
        self.behaviors.iter().find(|behavior| behavior.name == name)
    }

    pub fn behaviors(&self) -> impl Iterator<Item = &BehaviorDefinition> {
        self.behaviors.iter()
    }

    /// Returns true if `type_name` equals `required` or derives from it.
    ///
    /// Types missing from the project only match by name.
    pub fn is_of_type(&self, type_name: &str, required: &str) -> bool {
        let mut seen = HashSet::new();
        let mut current = Some(type_name);
        while let Some(name) = current {
            if name == required {
                return true;
            }
            if !seen.insert(name) {
                debug!(type_name, "base type chain loops");
                return false;
            }
            current = self
                .element(name)
                .and_then(|element| element.base_type.as_deref());
        }
        false
    }

    /// Every instance, in any element, whose base type is `element`.
    pub fn referencing_instances(&self, element: &str) -> Vec<InstanceLocation> {
        self.elements
            .iter()
            .flat_map(|owner| {
                owner
                    .instances
                    .iter()
                    .filter(|instance| instance.base_type == element)
                    .map(|instance| InstanceLocation {
                        element: owner.name.clone(),
                        instance: instance.name.clone(),
                    })
            })
            .collect()
    }

    /// Names of the elements whose base type is `element`.
    pub fn derived_elements(&self, element: &str) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|derived| derived.base_type.as_deref() == Some(element))
            .map(|derived| derived.name.as_str())
            .collect()
    }

    /// Removes an element that no instance references and no element
    /// derives from.
    pub fn remove_element(&mut self, name: &str) -> Result<ElementDefinition> {
        let Some(&position) = self.index.get(name) else {
            return Err(ModelError::UnknownElement {
                name: name.to_string(),
            });
        };
        let mut referenced_by: Vec<String> = self
            .referencing_instances(name)
            .iter()
            .map(ToString::to_string)
            .collect();
        referenced_by.extend(
            self.derived_elements(name)
                .into_iter()
                .map(|derived| format!("{derived} (base type)")),
        );
        if !referenced_by.is_empty() {
            return Err(ModelError::ElementInUse {
                element: name.to_string(),
                referenced_by,
            });
        }
        let removed = self.elements.remove(position);
        self.rebuild_index();
        Ok(removed)
    }

    /// Attaches a behavior to a component.
    ///
    /// Categories the behavior declares and the component lacks are copied
    /// onto the component.
    pub fn add_behavior_to(&mut self, component: &str, behavior: &str) -> Result<()> {
        let categories = self
            .behavior(behavior)
            .ok_or_else(|| ModelError::UnknownBehavior {
                name: behavior.to_string(),
            })?
            .categories
            .clone();
        let element = self
            .element_mut(component)
            .ok_or_else(|| ModelError::UnknownElement {
                name: component.to_string(),
            })?;
        element.add_behavior_reference(behavior)?;
        for category in categories {
            if element.category(&category.name).is_none() {
                element.add_category(category)?;
            }
        }
        Ok(())
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .elements
            .iter()
            .enumerate()
            .map(|(i, element)| (element.name.clone(), i))
            .collect();
    }
}

impl TryFrom<ProjectFile> for Project {
    type Error = ModelError;

    fn try_from(file: ProjectFile) -> Result<Self> {
        let mut project = Project::new();
        for element in file.elements {
            project.add_element(element)?;
        }
        for behavior in file.behaviors {
            project.add_behavior(behavior)?;
        }
        Ok(project)
    }
}

impl From<Project> for ProjectFile {
    fn from(project: Project) -> Self {
        Self {
            elements: project.elements,
            behaviors: project.behaviors,
        }
    }
}
