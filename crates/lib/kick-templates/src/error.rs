use crate::resources::ResourceKind;
use thiserror::Error;

/// Error type for template and resource lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Bundled resource not found: {path}")]
    ResourceNotFound { path: String },

    #[error("Bundled resource '{path}' is a {found}, expected a {expected}")]
    UnexpectedKind {
        path: String,
        expected: ResourceKind,
        found: ResourceKind,
    },
}

pub type TemplateResult<T> = Result<T, TemplateError>;
