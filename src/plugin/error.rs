//! Registry Error Handling

use thiserror::Error;

/// Result type alias for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Errors raised by the builtin registrar table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A registrar for this family is already bound
    #[error("Plugin family '{family}' is already registered")]
    DuplicateFamily { family: String },

    /// No registrar is bound to this family
    #[error("Plugin family not found: {family}")]
    FamilyNotFound { family: String },

    /// Family names must be non-empty
    #[error("Plugin family name must not be empty")]
    EmptyFamily,
}
