//! Scroll event vocabulary
//!
//! A coordinating layout forwards nested-scroll notifications from a child
//! scrollable view to sibling behaviors. These types describe those
//! notifications independently of any platform.

/// Event type identifier fed to state machines
pub type EventType = u32;

/// Events understood by the navigation state machines
pub mod event_types {
    use super::EventType;

    /// Content scrolled towards its end past the slop (finger moves up)
    pub const SCROLL_UP: EventType = 1;
    /// Content scrolled towards its start past the slop (finger moves down)
    pub const SCROLL_DOWN: EventType = 2;
    /// Explicit request to show the bar
    pub const EXPAND: EventType = 3;
    /// Explicit request to hide the bar
    pub const COLLAPSE: EventType = 4;
    /// Explicit request to show the bar without animating
    pub const EXPAND_IMMEDIATE: EventType = 5;
    /// Explicit request to hide the bar without animating
    pub const COLLAPSE_IMMEDIATE: EventType = 6;
    /// A running show/hide animation reached its target
    pub const ANIMATION_END: EventType = 10;

    /// Item view became the selected one
    pub const SELECT: EventType = 20;
    /// Item view lost the selection
    pub const DESELECT: EventType = 21;
}

/// Vertical direction of a scroll gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollDirection {
    /// Content moves towards its end (positive `dy`)
    Up,
    /// Content moves towards its start (negative `dy`)
    Down,
    #[default]
    None,
}

impl ScrollDirection {
    /// Direction implied by a delta or velocity sign
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 {
            ScrollDirection::Up
        } else if delta < 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::None
        }
    }

    /// Sign convention used when probing a target: `1` for up, `-1` for down
    pub fn sign(&self) -> i32 {
        match self {
            ScrollDirection::Up => 1,
            ScrollDirection::Down => -1,
            ScrollDirection::None => 0,
        }
    }
}

/// Axes a nested scroll session runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScrollAxes {
    pub horizontal: bool,
    pub vertical: bool,
}

impl ScrollAxes {
    pub const VERTICAL: ScrollAxes = ScrollAxes {
        horizontal: false,
        vertical: true,
    };
    pub const HORIZONTAL: ScrollAxes = ScrollAxes {
        horizontal: true,
        vertical: false,
    };
}

/// What a behavior may learn about the view that is scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollTarget {
    /// The target is a scroll container (list, scroll view)
    pub is_scroll_container: bool,
    /// The target can still scroll towards its start
    pub can_scroll_up: bool,
    /// The target can still scroll towards its end
    pub can_scroll_down: bool,
}

impl ScrollTarget {
    /// A scroll container with room in both directions
    pub const fn scrollable() -> Self {
        Self {
            is_scroll_container: true,
            can_scroll_up: true,
            can_scroll_down: true,
        }
    }

    /// A scroll container whose content fits entirely
    pub const fn exhausted() -> Self {
        Self {
            is_scroll_container: true,
            can_scroll_up: false,
            can_scroll_down: false,
        }
    }

    /// Whether the target can keep scrolling in `direction`
    pub fn can_scroll(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Up => self.can_scroll_down,
            ScrollDirection::Down => self.can_scroll_up,
            ScrollDirection::None => self.can_scroll_up || self.can_scroll_down,
        }
    }
}

impl Default for ScrollTarget {
    fn default() -> Self {
        Self::scrollable()
    }
}

/// A nested-scroll notification dispatched by the coordinating layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NestedScrollEvent {
    /// A scroll session begins
    Start { axes: ScrollAxes, target: ScrollTarget },
    /// Delta offered before the child consumes it
    PreScroll { dx: i32, dy: i32, target: ScrollTarget },
    /// Delta left after the child consumed what it could
    Scroll { dy_consumed: i32, dy_unconsumed: i32 },
    /// The child was flung
    Fling { velocity_x: f32, velocity_y: f32 },
    /// The session ended
    Stop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(ScrollDirection::from_delta(12.0), ScrollDirection::Up);
        assert_eq!(ScrollDirection::from_delta(-0.5), ScrollDirection::Down);
        assert_eq!(ScrollDirection::from_delta(0.0), ScrollDirection::None);
    }

    #[test]
    fn test_exhausted_target_cannot_scroll() {
        let target = ScrollTarget::exhausted();
        assert!(!target.can_scroll(ScrollDirection::Up));
        assert!(!target.can_scroll(ScrollDirection::Down));
        assert!(!target.can_scroll(ScrollDirection::None));
        assert!(ScrollTarget::scrollable().can_scroll(ScrollDirection::Up));
    }
}
