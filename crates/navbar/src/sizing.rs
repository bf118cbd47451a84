//! Item sizing
//!
//! Distributes the container width among the menu items. Bottom bars use one
//! of two policies:
//!
//! - **Fixed**: every item gets the same width, clamped to the fixed bounds.
//! - **Shifting**: the selected item is wider than the others. When the
//!   preferred widths overflow the container they are scaled down by a
//!   rounded ratio and then rebalanced until they fit.
//!
//! Side rails (tablet) give every item the full rail width.
//!
//! All results are whole pixels and every intermediate value truncates, so
//! the same input always yields the same widths.

use navbar_theme::{Density, Dimensions, FixedWidths, ShiftingWidths};

/// Multiplier applied before rounding the shrink ratio (one decimal digit)
const RATIO_ROUND_FACTOR: f64 = 10.0;

/// Added to the rounded ratio so shrunk items are not starved
const RATIO_MIN_INCREASE: f64 = 0.05;

/// How items share the container width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizingPolicy {
    /// Equal widths, labels always shown
    #[default]
    Fixed,
    /// One wide active item, labels shown only on the active item
    Shifting,
    /// Vertical rail, every item spans the rail
    Tablet,
}

impl SizingPolicy {
    pub fn is_tablet(&self) -> bool {
        matches!(self, SizingPolicy::Tablet)
    }
}

/// Shifting width bounds in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShiftingBounds {
    pub max_active: i32,
    pub min_active: i32,
    pub max_inactive: i32,
    pub min_inactive: i32,
}

impl ShiftingBounds {
    pub fn from_tokens(widths: &ShiftingWidths, density: Density) -> Self {
        Self {
            max_active: density.to_px(widths.max_active),
            min_active: density.to_px(widths.min_active),
            max_inactive: density.to_px(widths.max_inactive),
            min_inactive: density.to_px(widths.min_inactive),
        }
    }
}

/// Fixed width bounds in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedBounds {
    pub max_active: i32,
    pub min_active: i32,
}

impl FixedBounds {
    pub fn from_tokens(widths: &FixedWidths, density: Density) -> Self {
        Self {
            max_active: density.to_px(widths.max_active),
            min_active: density.to_px(widths.min_active),
        }
    }
}

/// Widths handed to item views
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemWidths {
    /// Width of every unselected item
    pub inactive: i32,
    /// Width of the selected item
    pub active: i32,
}

impl ItemWidths {
    pub fn uniform(width: i32) -> Self {
        Self {
            inactive: width,
            active: width,
        }
    }

    /// Width of the item at a position, given the selection
    pub fn for_item(&self, selected: bool) -> i32 {
        if selected {
            self.active
        } else {
            self.inactive
        }
    }

    /// Combined width of `count` items with one of them selected
    pub fn total(&self, count: usize) -> i32 {
        match count {
            0 => 0,
            n => self.inactive * (n as i32 - 1) + self.active,
        }
    }
}

/// Shifting widths for `count` items in `container_width` pixels
pub fn shifting_widths(container_width: i32, count: usize, bounds: &ShiftingBounds) -> ItemWidths {
    if count == 0 || container_width <= 0 {
        return ItemWidths::default();
    }
    if count == 1 {
        return ItemWidths::uniform(bounds.max_active.min(container_width));
    }

    let others = count as i32 - 1;
    let total = bounds.max_inactive * others + bounds.max_active;
    if total <= container_width {
        return ItemWidths {
            inactive: bounds.max_inactive,
            active: bounds.max_active,
        };
    }

    let ratio = container_width as f64 / total as f64;
    let ratio = (ratio * RATIO_ROUND_FACTOR).round() / RATIO_ROUND_FACTOR + RATIO_MIN_INCREASE;

    let mut inactive = ((bounds.max_inactive as f64 * ratio) as i32).max(bounds.min_inactive);
    let mut active = (bounds.max_active as f64 * ratio) as i32;

    tracing::trace!(container_width, count, total, ratio, inactive, active, "shifting widths scaled");

    if inactive * others + active > container_width {
        active = container_width - inactive * others;
        // `<=` rather than `==`: a residual below the inactive width would invert the pair
        if active <= inactive {
            inactive = bounds.min_inactive;
            active = container_width - inactive * others;
        }
        tracing::trace!(inactive, active, "shifting widths rebalanced");
    }

    if active < inactive {
        // Too narrow for even the minimum inactive width; split evenly to keep inactive <= active
        let width = container_width / count as i32;
        return ItemWidths::uniform(width);
    }

    ItemWidths { inactive, active }
}

/// Fixed item width for `count` items in `container_width` pixels
pub fn fixed_width(container_width: i32, count: usize, bounds: &FixedBounds) -> i32 {
    if count == 0 || container_width <= 0 {
        return 0;
    }

    let count = count as i32;
    let even = container_width / count;
    let proposed = even.max(bounds.min_active).min(bounds.max_active);
    if proposed * count > container_width {
        even
    } else {
        proposed
    }
}

/// Pixel bounds for every policy, resolved once per density
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizingEngine {
    shifting: ShiftingBounds,
    fixed: FixedBounds,
    debug: bool,
}

impl SizingEngine {
    pub fn new(dimensions: &Dimensions, density: Density, debug: bool) -> Self {
        Self {
            shifting: ShiftingBounds::from_tokens(&dimensions.shifting, density),
            fixed: FixedBounds::from_tokens(&dimensions.fixed, density),
            debug,
        }
    }

    pub fn shifting_bounds(&self) -> &ShiftingBounds {
        &self.shifting
    }

    pub fn fixed_bounds(&self) -> &FixedBounds {
        &self.fixed
    }

    /// Widths for `count` items under `policy`
    pub fn widths(&self, policy: SizingPolicy, container_width: i32, count: usize) -> ItemWidths {
        let widths = match policy {
            SizingPolicy::Fixed => ItemWidths::uniform(fixed_width(container_width, count, &self.fixed)),
            SizingPolicy::Shifting => shifting_widths(container_width, count, &self.shifting),
            SizingPolicy::Tablet => ItemWidths::uniform(container_width.max(0)),
        };

        if self.debug {
            tracing::debug!(
                ?policy,
                container_width,
                count,
                inactive = widths.inactive,
                active = widths.active,
                total = widths.total(count),
                "item widths"
            );
        }
        widths
    }
}
