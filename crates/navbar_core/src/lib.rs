//! Navbar Core
//!
//! Foundational primitives shared by the navigation widget crates:
//!
//! - **Colors**: RGBA colors with ARGB packing and interpolation
//! - **Scroll Events**: the nested-scroll vocabulary a coordinating layout dispatches
//! - **State Machines**: enum-based transition tables with history
//!
//! # Example
//!
//! ```rust
//! use navbar_core::fsm::{StateMachine, StateTransitions};
//! use navbar_core::events::event_types::{ANIMATION_END, SCROLL_UP};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Bar {
//!     Shown,
//!     Hiding,
//!     Hidden,
//! }
//!
//! impl StateTransitions for Bar {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Bar::Shown, SCROLL_UP) => Some(Bar::Hiding),
//!             (Bar::Hiding, ANIMATION_END) => Some(Bar::Hidden),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut fsm = StateMachine::new(Bar::Shown);
//! fsm.send(SCROLL_UP);
//! fsm.send(ANIMATION_END);
//! assert_eq!(fsm.current_state(), Bar::Hidden);
//! ```

pub mod color;
pub mod error;
pub mod events;
pub mod fsm;

pub use color::Color;
pub use error::{CoreError, Result};
pub use events::{event_types, EventType, NestedScrollEvent, ScrollAxes, ScrollDirection, ScrollTarget};
pub use fsm::{StateMachine, StateTransitions};
