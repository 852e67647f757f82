//! Validation error types

use std::fmt;

/// Validation error for import payload elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Element is not a JSON object
    NotAnObject,

    /// Field is absent or null
    Missing { field: &'static str },

    /// Field is present but empty
    Empty { field: &'static str },

    /// Field is an array or object
    WrongType { field: &'static str },
}

impl ValidationError {
    /// Name of the offending field, if the error is about a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotAnObject => None,
            Self::Missing { field } | Self::Empty { field } | Self::WrongType { field } => {
                Some(field)
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "article must be a JSON object"),
            Self::Missing { field } => write!(f, "{} is missing", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::WrongType { field } => write!(f, "{} must be text, a number or true", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Empty { field: "title" };
        assert_eq!(err.to_string(), "title cannot be empty");

        let err = ValidationError::Missing { field: "tags" };
        assert_eq!(err.to_string(), "tags is missing");
    }

    #[test]
    fn field_name() {
        assert_eq!(ValidationError::WrongType { field: "content" }.field(), Some("content"));
        assert_eq!(ValidationError::NotAnObject.field(), None);
    }
}
