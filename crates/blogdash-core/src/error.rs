//! Domain-level error types.

use thiserror::Error;

/// The message shown to the user when a required field is blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Post creation rejected - the store is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

impl ValidationError {
    /// Short text suitable for direct display.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingFields(_) => MISSING_FIELDS_MESSAGE.to_string(),
            ValidationError::InvalidCategory(_) => self.to_string(),
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown {option}: {value}")]
    UnknownOption { option: &'static str, value: String },
}
