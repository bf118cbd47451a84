//! Navbar Animation System
//!
//! Time-based tweens driven by an explicit frame clock.
//!
//! # Features
//!
//! - **Easing**: decelerate and cubic-bezier curves used by the widget
//! - **Tweens**: single-value interpolation over a fixed duration
//! - **Cancellable handles**: a cancelled tween's id stops resolving, so
//!   late frame callbacks find nothing to apply

pub mod easing;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use scheduler::{AnimationScheduler, TweenId};
pub use tween::Tween;
