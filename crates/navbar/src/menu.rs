//! Menus: the ordered item set plus its presentation attributes
//!
//! A menu is built programmatically or read from a TOML definition:
//!
//! ```toml
//! [menu]
//! background = "#3F51B5"
//! item_animation_duration_ms = 200
//!
//! [[item]]
//! id = 1
//! icon = "ic_home"
//! title = "Home"
//!
//! [[item]]
//! id = 2
//! icon = "ic_music"
//! title = "Music"
//! color = "#00796B"
//! enabled = false
//! ```
//!
//! Unset colors resolve against the theme palette, following the policy the
//! menu ends up laid out with.

use std::fmt;

use navbar_core::Color;
use navbar_theme::{Motion, Palette};
use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::error::{MenuError, Result};
use crate::item::{IconRef, ItemId, NavigationItem};
use crate::sizing::SizingPolicy;

/// Upper bound on items in a navigation bar
pub const MAX_ITEMS: usize = 5;

/// Item count above which a bottom bar switches to the shifting policy
pub const FIXED_POLICY_MAX_ITEMS: usize = 3;

/// Resolved item colors for one menu
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPalette {
    pub active: Color,
    pub inactive: Color,
    pub disabled: Color,
}

impl ItemPalette {
    /// Color for an item in the given state
    pub fn color_for(&self, expanded: bool, enabled: bool) -> Color {
        match (enabled, expanded) {
            (false, _) => self.disabled,
            (true, true) => self.active,
            (true, false) => self.inactive,
        }
    }
}

/// Ordered navigation items plus presentation attributes
#[derive(Clone, Debug, PartialEq)]
pub struct Menu {
    items: Vec<NavigationItem>,
    item_animation_duration_ms: Option<u32>,
    background: Option<Color>,
    color_active: Option<Color>,
    color_inactive: Option<Color>,
    color_disabled: Option<Color>,
    ripple_color: Option<Color>,
    badge_color: Color,
    always_show_labels: bool,
    tablet: bool,
}

impl Menu {
    /// Build a menu, checking id uniqueness and the item limit
    pub fn new(items: Vec<NavigationItem>) -> Result<Self> {
        if items.len() > MAX_ITEMS {
            return Err(MenuError::TooManyItems {
                count: items.len(),
                max: MAX_ITEMS,
            });
        }

        let mut seen = FxHashSet::default();
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(MenuError::DuplicateId(item.id()));
            }
        }

        Ok(Self {
            items,
            ..Self::empty()
        })
    }

    /// A menu with no items; the widget renders nothing but stays operable
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            item_animation_duration_ms: None,
            background: None,
            color_active: None,
            color_inactive: None,
            color_disabled: None,
            ripple_color: None,
            badge_color: Color::RED,
            always_show_labels: false,
            tablet: false,
        }
    }

    /// Parse a TOML menu definition
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let definition: MenuDefinition = toml::from_str(content)?;
        definition.into_menu()
    }

    /// Parse a TOML menu definition, falling back to an empty menu
    pub fn from_toml_str_or_empty(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(menu) => menu,
            Err(err) => {
                tracing::warn!(%err, "menu definition rejected, using an empty menu");
                Self::empty()
            }
        }
    }

    pub fn with_item_animation_duration(mut self, duration_ms: u32) -> Self {
        self.item_animation_duration_ms = Some(duration_ms);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_color_active(mut self, color: Color) -> Self {
        self.color_active = Some(color);
        self
    }

    pub fn with_color_inactive(mut self, color: Color) -> Self {
        self.color_inactive = Some(color);
        self
    }

    pub fn with_color_disabled(mut self, color: Color) -> Self {
        self.color_disabled = Some(color);
        self
    }

    pub fn with_ripple_color(mut self, color: Color) -> Self {
        self.ripple_color = Some(color);
        self
    }

    pub fn with_badge_color(mut self, color: Color) -> Self {
        self.badge_color = color;
        self
    }

    /// Keep labels on every item, which forces the fixed policy
    pub fn with_always_show_labels(mut self, always: bool) -> Self {
        self.always_show_labels = always;
        self
    }

    /// Lay the menu out as a side rail
    pub fn with_tablet(mut self, tablet: bool) -> Self {
        self.tablet = tablet;
        self
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_at(&self, index: usize) -> Option<&NavigationItem> {
        self.items.get(index)
    }

    /// Position of the item with `id`
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn is_tablet(&self) -> bool {
        self.tablet
    }

    pub fn always_show_labels(&self) -> bool {
        self.always_show_labels
    }

    /// More than three items on a bottom bar, unless labels are forced
    pub fn is_shifting(&self) -> bool {
        !self.tablet && self.items.len() > FIXED_POLICY_MAX_ITEMS && !self.always_show_labels
    }

    pub fn policy(&self) -> SizingPolicy {
        if self.tablet {
            SizingPolicy::Tablet
        } else if self.is_shifting() {
            SizingPolicy::Shifting
        } else {
            SizingPolicy::Fixed
        }
    }

    /// Whether the first item carries its own color
    pub fn has_changing_color(&self) -> bool {
        self.items.first().is_some_and(NavigationItem::has_color)
    }

    pub fn item_animation_duration(&self, motion: &Motion) -> u32 {
        self.item_animation_duration_ms.unwrap_or(motion.item_ms)
    }

    pub fn badge_color(&self) -> Color {
        self.badge_color
    }

    /// Bar background, or the theme surface that suits the policy
    pub fn background(&self, palette: &Palette) -> Color {
        self.background.unwrap_or(if self.is_shifting() {
            palette.primary
        } else {
            palette.window_background
        })
    }

    pub fn ripple_color(&self, palette: &Palette) -> Color {
        self.ripple_color.unwrap_or(if self.is_shifting() {
            palette.ripple_shifting
        } else {
            palette.ripple_fixed
        })
    }

    /// Item colors; inactive defaults to active at half alpha, disabled to
    /// inactive at half alpha
    pub fn item_palette(&self, palette: &Palette) -> ItemPalette {
        let active = self.color_active.unwrap_or(if self.is_shifting() {
            palette.foreground_inverse
        } else {
            palette.foreground
        });
        let inactive = self.color_inactive.unwrap_or_else(|| active.half_alpha());
        let disabled = self.color_disabled.unwrap_or_else(|| inactive.half_alpha());
        ItemPalette {
            active,
            inactive,
            disabled,
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Menu{{items:{}, policy:{:?}, always_show_labels:{}}}",
            self.items.len(),
            self.policy(),
            self.always_show_labels
        )
    }
}

// ============================================================================
// TOML definition
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MenuDefinition {
    #[serde(default)]
    menu: MenuAttributes,
    #[serde(default, rename = "item")]
    items: Vec<ItemDefinition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MenuAttributes {
    #[serde(default)]
    item_animation_duration_ms: Option<u32>,
    #[serde(default)]
    background: Option<String>,
    #[serde(default)]
    color_active: Option<String>,
    #[serde(default)]
    color_inactive: Option<String>,
    #[serde(default)]
    color_disabled: Option<String>,
    #[serde(default)]
    ripple_color: Option<String>,
    #[serde(default)]
    badge_color: Option<String>,
    #[serde(default)]
    always_show_labels: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemDefinition {
    id: i32,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    title: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default)]
    color: Option<String>,
}

fn default_enabled() -> bool {
    true
}

fn parse_color(value: Option<String>) -> Result<Option<Color>> {
    value
        .map(|text| text.parse::<Color>().map_err(MenuError::from))
        .transpose()
}

impl MenuDefinition {
    fn into_menu(self) -> Result<Menu> {
        let items = self
            .items
            .into_iter()
            .map(|def| {
                let mut item = NavigationItem::new(ItemId(def.id), IconRef(def.icon), def.title)
                    .with_enabled(def.enabled);
                if let Some(color) = parse_color(def.color)? {
                    item = item.with_color(color);
                }
                Ok(item)
            })
            .collect::<Result<Vec<_>>>()?;

        let attrs = self.menu;
        let mut menu = Menu::new(items)?.with_always_show_labels(attrs.always_show_labels);
        menu.item_animation_duration_ms = attrs.item_animation_duration_ms;
        menu.background = parse_color(attrs.background)?;
        menu.color_active = parse_color(attrs.color_active)?;
        menu.color_inactive = parse_color(attrs.color_inactive)?;
        menu.color_disabled = parse_color(attrs.color_disabled)?;
        menu.ripple_color = parse_color(attrs.ripple_color)?;
        if let Some(color) = parse_color(attrs.badge_color)? {
            menu.badge_color = color;
        }
        Ok(menu)
    }
}
