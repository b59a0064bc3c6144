//! Error types for dynamic registry lookups.

use thiserror::Error;

/// Result alias for registry lookups.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Errors raised by lookups keyed on a runtime string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No constant is declared under the requested name.
    #[error("unknown constant '{name}'")]
    NotFound {
        /// Name that was requested.
        name: String,
    },
}
