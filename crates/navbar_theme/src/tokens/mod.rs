//! Design tokens for the navigation widget
//!
//! - Dimensions in density-independent pixels
//! - Motion durations and easing curves
//! - Default palette used when a menu leaves a color unset

mod dimensions;
mod motion;
mod palette;

pub use dimensions::*;
pub use motion::*;
pub use palette::*;
