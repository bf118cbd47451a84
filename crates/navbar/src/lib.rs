//! Bottom navigation bar
//!
//! A navigation bar whose items resize and fade as the selection moves, and
//! which hides and shows itself in response to nested scrolling of sibling
//! content.
//!
//! - **Items**: [`NavigationItem`] records grouped in a [`Menu`]
//! - **Sizing**: fixed and shifting width distribution ([`sizing`])
//! - **Container**: item views, selection, and transitions ([`ItemsContainer`])
//! - **Behavior**: scroll-driven visibility and dependent views ([`behavior`])
//! - **Badges**: per-item dots and counters ([`BadgeOverlay`])
//! - **Widget**: [`BottomNavigation`] composes all of the above
//!
//! # Example
//!
//! ```rust
//! use navbar::{BottomNavigation, ItemId};
//! use navbar_core::{NestedScrollEvent, ScrollTarget};
//! use navbar_theme::{NavigationConfig, NavigationTheme};
//!
//! let mut nav = BottomNavigation::new(NavigationConfig::default(), NavigationTheme::default());
//! nav.inflate_menu_str(
//!     r#"
//!     [[item]]
//!     id = 1
//!     icon = "ic_home"
//!     title = "Home"
//!
//!     [[item]]
//!     id = 2
//!     icon = "ic_search"
//!     title = "Search"
//!     "#,
//! );
//! nav.on_size_changed(360, 60);
//! nav.perform_item_click(1);
//! assert_eq!(nav.selected_index(), 1);
//! assert_eq!(nav.item_id(1), Some(ItemId(2)));
//!
//! // Scrolling content up hides the bar
//! let target = ScrollTarget::scrollable();
//! nav.on_nested_scroll_event(NestedScrollEvent::PreScroll { dx: 0, dy: 40, target });
//! assert!(!nav.is_expanded());
//! ```

pub mod badge;
pub mod behavior;
pub mod container;
pub mod error;
pub mod item;
pub mod item_view;
pub mod menu;
pub mod navigation;
pub mod sizing;

pub use badge::{BadgeChange, BadgeContent, BadgeKind, BadgeOverlay, BadgeSnapshot};
pub use behavior::{
    BarState, Behavior, BottomBehavior, DependentId, DependentKind, DependentLayout, RailPlacement,
    TabletBehavior,
};
pub use container::{ItemFrame, ItemsContainer};
pub use error::{MenuError, Result};
pub use item::{IconRef, ItemId, NavigationItem};
pub use item_view::{ItemRender, ItemState, ItemStyle, ItemTransition, ItemView, TransitionKind};
pub use menu::{ItemPalette, Menu, MAX_ITEMS};
pub use navigation::{
    BottomNavigation, NavigationRender, NavigationState, SelectionEvent, SelectionKind, SystemInsets,
};
pub use sizing::{ItemWidths, SizingEngine, SizingPolicy};
