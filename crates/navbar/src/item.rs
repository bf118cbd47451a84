//! Navigation item records

use std::fmt;

use navbar_core::Color;
use serde::{Deserialize, Serialize};

/// Identifier of a navigation item, unique within a menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to an icon resolved by the host
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One entry of the navigation bar
///
/// Items are immutable once created; a new menu replaces the whole set.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationItem {
    id: ItemId,
    icon: IconRef,
    title: String,
    color: Option<Color>,
    enabled: bool,
}

impl NavigationItem {
    pub fn new(id: ItemId, icon: IconRef, title: impl Into<String>) -> Self {
        Self {
            id,
            icon,
            title: title.into(),
            color: None,
            enabled: true,
        }
    }

    /// Builder: color the bar background takes while this item is selected
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder: initial enabled state
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn icon(&self) -> &IconRef {
        &self.icon
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// False means "use the theme default"
    pub fn has_color(&self) -> bool {
        self.color.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl fmt::Display for NavigationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NavigationItem{{id={}, icon='{}', title='{}', color={}, enabled={}}}",
            self.id,
            self.icon.as_str(),
            self.title,
            self.color.map(|c| c.to_string()).unwrap_or_else(|| "none".into()),
            self.enabled
        )
    }
}
