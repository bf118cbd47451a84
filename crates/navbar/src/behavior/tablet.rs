//! Side rail placement
//!
//! A rail never hides on scroll. It only follows the app bar above it so the
//! first item is never covered.

/// Margin and padding the rail should apply
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RailPlacement {
    pub top_margin: i32,
    pub top_padding: i32,
}

/// Keeps a navigation rail below the app bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabletBehavior {
    width: i32,
    top_inset: i32,
    translucent_status: bool,
    enabled: bool,
    placement: RailPlacement,
}

impl TabletBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_layout_values(&mut self, width: i32, top_inset: i32, translucent_status: bool) {
        self.width = width;
        self.top_inset = top_inset.max(0);
        self.translucent_status = translucent_status;
        self.enabled = width > 0;
        tracing::debug!(width, top_inset, translucent_status, "rail layout values");
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn placement(&self) -> RailPlacement {
        self.placement
    }

    /// The app bar moved; `app_bar_bottom` is its bottom edge in parent coordinates
    pub fn on_app_bar_changed(&mut self, app_bar_bottom: i32) -> RailPlacement {
        let top = self.top_inset;
        let floor = if self.translucent_status { 0 } else { -top };
        let top_margin = (app_bar_bottom - top).max(floor);

        let top_padding = if self.translucent_status && top_margin < top {
            top - top_margin
        } else {
            0
        };

        self.placement = RailPlacement {
            top_margin,
            top_padding,
        };
        self.placement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follows_app_bar() {
        let mut behavior = TabletBehavior::new();
        behavior.set_layout_values(72, 24, false);
        assert!(behavior.is_enabled());

        let placement = behavior.on_app_bar_changed(80);
        assert_eq!(placement, RailPlacement { top_margin: 56, top_padding: 0 });

        // App bar scrolled away entirely
        let placement = behavior.on_app_bar_changed(-100);
        assert_eq!(placement.top_margin, -24);
    }

    #[test]
    fn test_translucent_status_pads_content() {
        let mut behavior = TabletBehavior::new();
        behavior.set_layout_values(72, 24, true);

        let placement = behavior.on_app_bar_changed(30);
        assert_eq!(placement, RailPlacement { top_margin: 6, top_padding: 18 });

        let placement = behavior.on_app_bar_changed(-10);
        assert_eq!(placement, RailPlacement { top_margin: 0, top_padding: 24 });
    }
}
