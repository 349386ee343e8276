//! Interop errors and the message constants they are built from.

pub mod messages {
    pub const NOT_BOXED: &str = "Not a boxed value";
    pub const NOT_A_STRING: &str = "Not a string";
    pub const NOT_A_JAVA_STRING: &str = "Not a Java string";
    pub const NOT_A_NAME: &str = "Not a string or symbol";
    pub const ILL_FORMED_JAVA_STRING: &str = "Java string with unpaired surrogate";
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InteropError {
    #[error("Unknown identifier: {name}")]
    NotFound { name: String },

    #[error("TypeError: {expected} (got {found})")]
    Type {
        expected: &'static str,
        found: String,
    },

    #[error("Wrong number of arguments for '{method}' (given {found}, expected {expected})")]
    Arity {
        method: String,
        expected: usize,
        found: usize,
    },

    #[error("Undefined interop method '{0}'")]
    UnknownMethod(String),
}

impl InteropError {
    pub fn not_found(name: &str) -> Self {
        InteropError::NotFound {
            name: name.to_string(),
        }
    }

    pub fn type_error(expected: &'static str, found: impl Into<String>) -> Self {
        InteropError::Type {
            expected,
            found: found.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, InteropError::NotFound { .. })
    }

    pub fn is_type_error(&self) -> bool {
        matches!(self, InteropError::Type { .. })
    }
}

pub type InteropResult<T> = Result<T, InteropError>;
