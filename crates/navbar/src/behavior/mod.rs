//! Behaviors plugged into the coordinating layout
//!
//! - [`BottomBehavior`]: hides and shows a bottom bar on nested scroll
//! - [`TabletBehavior`]: keeps a side rail below the app bar
//! - [`DependentRegistry`]: views whose margins follow the bar

pub mod bottom;
pub mod dependents;
pub mod direction;
pub mod tablet;

pub use bottom::{BarState, BottomBehavior, ExpandStatusListener};
pub use dependents::{BarGeometry, DependentId, DependentKind, DependentLayout, DependentRegistry};
pub use direction::VerticalScrollTracker;
pub use tablet::{RailPlacement, TabletBehavior};

/// Behavior attached to the widget's layout slot
#[derive(Debug)]
pub enum Behavior {
    Bottom(BottomBehavior),
    Tablet(TabletBehavior),
}

impl Behavior {
    pub fn as_bottom(&self) -> Option<&BottomBehavior> {
        match self {
            Behavior::Bottom(behavior) => Some(behavior),
            Behavior::Tablet(_) => None,
        }
    }

    pub fn as_bottom_mut(&mut self) -> Option<&mut BottomBehavior> {
        match self {
            Behavior::Bottom(behavior) => Some(behavior),
            Behavior::Tablet(_) => None,
        }
    }

    pub fn as_tablet_mut(&mut self) -> Option<&mut TabletBehavior> {
        match self {
            Behavior::Tablet(behavior) => Some(behavior),
            Behavior::Bottom(_) => None,
        }
    }
}
