//! Menu error types

use thiserror::Error;

use crate::item::ItemId;

/// Errors raised while building or parsing a menu
#[derive(Error, Debug)]
pub enum MenuError {
    /// The definition is not valid TOML for the menu schema
    #[error("failed to parse menu definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two items share an id
    #[error("duplicate menu item id {0}")]
    DuplicateId(ItemId),

    /// More items than a navigation bar can hold
    #[error("menu holds {count} items, at most {max} are supported")]
    TooManyItems { count: usize, max: usize },

    /// A color attribute could not be parsed
    #[error(transparent)]
    Color(#[from] navbar_core::CoreError),
}

/// Result type for menu operations
pub type Result<T> = std::result::Result<T, MenuError>;
