//! Equation skeletons and their instantiation

mod builder;
mod skeleton;

pub use skeleton::{Template, Wrap, WrapKind};

use log::debug;

use crate::catalog::CatalogError;
use skeleton::STANDARD_TEMPLATES;

/// Ordered skeletons; order breaks ties between templates for one assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    /// # Errors
    ///
    /// Returns an error if `templates` is empty.
    pub fn new(templates: Vec<Template>) -> Result<Self, CatalogError> {
        if templates.is_empty() {
            return Err(CatalogError::EmptyTemplateSet);
        }
        Ok(Self { templates })
    }

    pub fn standard() -> Self {
        debug!("Standard template set has {} skeletons", STANDARD_TEMPLATES.len());
        Self {
            templates: STANDARD_TEMPLATES.to_vec(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::standard()
    }
}
