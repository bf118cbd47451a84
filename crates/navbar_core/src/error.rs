//! Core error types

use thiserror::Error;

/// Errors raised by core primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A color literal could not be parsed
    #[error("invalid color literal `{0}`: expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
