use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Operator catalog cannot be empty")]
    EmptyCatalog,
    #[error("Template set cannot be empty")]
    EmptyTemplateSet,
    #[error("Template '{name}' is malformed: {reason}")]
    InvalidTemplate { name: String, reason: String },
}
