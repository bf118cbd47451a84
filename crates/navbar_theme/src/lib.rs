//! Theming and configuration for the navigation widget
//!
//! - **Tokens**: dimensions (dp), motion timings, and the default palette
//! - **Config**: the `navbar.toml` file that tunes scroll behavior and layout
//!
//! # Example
//!
//! ```rust
//! use navbar_theme::{NavigationConfig, NavigationTheme};
//!
//! let config = NavigationConfig::from_toml_str(
//!     r#"
//!     [behavior]
//!     scrollable = false
//!
//!     [layout]
//!     density = 2.0
//!     "#,
//! )
//! .unwrap();
//!
//! let theme = NavigationTheme::default();
//! assert!(!config.behavior.scrollable);
//! assert_eq!(config.layout.density().to_px(theme.dimensions.bar_height), 112);
//! ```

pub mod config;
pub mod error;
pub mod tokens;

pub use config::{BehaviorConfig, Gravity, LayoutConfig, NavigationConfig};
pub use error::{ConfigError, Result};
pub use tokens::*;

/// Complete token set handed to the widget at construction
#[derive(Clone, Debug, Default)]
pub struct NavigationTheme {
    pub dimensions: Dimensions,
    pub motion: Motion,
    pub palette: Palette,
}
