//! Vertical scroll direction tracking

use navbar_core::ScrollDirection;

/// Running totals of a nested scroll session, split by stream
///
/// A change of direction resets the running total of its stream, so the
/// totals always describe the current direction only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerticalScrollTracker {
    total_dy: i32,
    total_dy_unconsumed: i32,
    scroll_direction: ScrollDirection,
    over_scroll_direction: ScrollDirection,
}

impl VerticalScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pre-scroll delta and return the current direction
    pub fn on_pre_scroll(&mut self, dy: i32) -> ScrollDirection {
        Self::track(&mut self.total_dy, &mut self.scroll_direction, dy)
    }

    /// Record an unconsumed delta and return the over-scroll direction
    pub fn on_over_scroll(&mut self, dy_unconsumed: i32) -> ScrollDirection {
        Self::track(
            &mut self.total_dy_unconsumed,
            &mut self.over_scroll_direction,
            dy_unconsumed,
        )
    }

    /// A fling decides the direction on its own
    pub fn on_fling(&mut self, velocity_y: f32) -> ScrollDirection {
        self.scroll_direction = if velocity_y > 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        };
        self.scroll_direction
    }

    fn track(total: &mut i32, direction: &mut ScrollDirection, delta: i32) -> ScrollDirection {
        let next = ScrollDirection::from_delta(delta as f32);
        let flipped = (delta > 0 && *total < 0) || (delta < 0 && *total > 0);
        if flipped {
            *total = 0;
        }
        if next != ScrollDirection::None {
            *direction = next;
        }
        *total += delta;
        *direction
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll_direction
    }

    pub fn over_scroll_direction(&self) -> ScrollDirection {
        self.over_scroll_direction
    }

    pub fn total_dy(&self) -> i32 {
        self.total_dy
    }

    pub fn total_over_scroll(&self) -> i32 {
        self.total_dy_unconsumed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_resets_total() {
        let mut tracker = VerticalScrollTracker::new();
        assert_eq!(tracker.on_pre_scroll(5), ScrollDirection::Up);
        tracker.on_pre_scroll(7);
        assert_eq!(tracker.total_dy(), 12);

        assert_eq!(tracker.on_pre_scroll(-3), ScrollDirection::Down);
        assert_eq!(tracker.total_dy(), -3);

        assert_eq!(tracker.on_pre_scroll(0), ScrollDirection::Down);
        assert_eq!(tracker.total_dy(), -3);
    }

    #[test]
    fn test_streams_are_independent() {
        let mut tracker = VerticalScrollTracker::new();
        tracker.on_pre_scroll(10);
        assert_eq!(tracker.on_over_scroll(-4), ScrollDirection::Down);
        assert_eq!(tracker.scroll_direction(), ScrollDirection::Up);
        assert_eq!(tracker.total_over_scroll(), -4);
    }

    #[test]
    fn test_fling_sets_direction() {
        let mut tracker = VerticalScrollTracker::new();
        assert_eq!(tracker.on_fling(1500.0), ScrollDirection::Up);
        assert_eq!(tracker.on_fling(-20.0), ScrollDirection::Down);
        tracker.reset();
        assert_eq!(tracker.scroll_direction(), ScrollDirection::None);
    }
}
