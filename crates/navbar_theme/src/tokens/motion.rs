//! Motion tokens

use navbar_animation::Easing;

/// Animation durations (ms) and curves
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Item expand/collapse
    pub item_ms: u32,
    /// Background color change on selection
    pub background_ms: u32,
    /// Bar show/hide
    pub hide_ms: u32,
    /// Press ripple reveal
    pub ripple_ms: u32,
    /// Badge fade-in
    pub badge_fade_ms: u32,
    pub hide_easing: Easing,
    pub item_easing: Easing,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            item_ms: 200,
            background_ms: 300,
            hide_ms: 300,
            ripple_ms: 200,
            badge_fade_ms: 100,
            hide_easing: Easing::LinearOutSlowIn,
            item_easing: Easing::Decelerate,
        }
    }
}
