use thiserror::Error;

/// Errors returned by registry operations.
///
/// Every variant is recoverable, and a failed operation leaves the registry
/// unchanged: all checks run before the first write.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A field value failed validation (empty name, gpa out of range, ...).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// A unique key (course code) is already registered.
    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },

    /// An id or code referenced something that does not exist, or a person
    /// lacks the role profile the operation requires.
    #[error("not found: {what}")]
    NotFound { what: String },

    /// A relationship reassignment that needs explicit intent (the `replace`
    /// flag) was attempted without it.
    #[error("conflict: {message}")]
    Conflict { message: String },
}

impl RegistryError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn duplicate(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
