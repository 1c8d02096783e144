use std::fmt::{self, Display};

/// Errors produced by schema lookups on the model surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The requested name is not one of the published schemas.
    UnknownSchema(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownSchema(name) => {
                write!(f, "unknown schema: {name}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
