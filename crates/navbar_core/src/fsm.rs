//! State Machine Runtime
//!
//! Flat state machines whose transition table lives on the state enum
//! itself. Each machine keeps the history of the transitions it took, which
//! widgets use to report state changes in order.

use std::fmt::Debug;
use std::hash::Hash;

use crate::events::EventType;

/// Transitions kept per machine; older entries are dropped first
pub const MAX_HISTORY: usize = 32;

/// Trait for state enums that define their own event transitions
///
/// # Example
///
/// ```ignore
/// impl StateTransitions for ItemState {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (ItemState::Collapsed, SELECT) => Some(ItemState::Expanded),
///             (ItemState::Expanded, DESELECT) => Some(ItemState::Collapsed),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// A state machine instance over a `StateTransitions` enum
#[derive(Clone, Debug)]
pub struct StateMachine<S: StateTransitions> {
    current_state: S,
    /// History of state transitions (for debugging and ordered reporting)
    history: Vec<(S, EventType, S)>,
}

impl<S: StateTransitions> StateMachine<S> {
    /// Create a state machine in its initial state
    pub fn new(initial_state: S) -> Self {
        Self {
            current_state: initial_state,
            history: Vec::new(),
        }
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: EventType) -> bool {
        self.current_state.on_event(event).is_some()
    }

    /// Send an event, returning the new state if a transition happened
    pub fn send(&mut self, event: EventType) -> Option<S> {
        let from = self.current_state;
        let to = from.on_event(event)?;
        self.current_state = to;
        if self.history.len() == MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push((from, event, to));
        tracing::trace!(?from, ?to, event, "state transition");
        Some(to)
    }

    /// Get transition history
    pub fn history(&self) -> &[(S, EventType, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Jump to a state without an event (restored state, teardown)
    pub fn reset(&mut self, state: S) {
        self.current_state = state;
    }
}

impl<S: StateTransitions + Default> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event_types::{DESELECT, SELECT};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    enum Toggle {
        #[default]
        Off,
        On,
    }

    impl StateTransitions for Toggle {
        fn on_event(&self, event: EventType) -> Option<Self> {
            match (self, event) {
                (Toggle::Off, SELECT) => Some(Toggle::On),
                (Toggle::On, DESELECT) => Some(Toggle::Off),
                _ => None,
            }
        }
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = StateMachine::<Toggle>::default();
        assert_eq!(fsm.current_state(), Toggle::Off);

        assert_eq!(fsm.send(SELECT), Some(Toggle::On));
        assert!(fsm.is_in(Toggle::On));

        assert_eq!(fsm.send(DESELECT), Some(Toggle::Off));
        assert!(fsm.is_in(Toggle::Off));
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut fsm = StateMachine::new(Toggle::Off);
        assert_eq!(fsm.send(DESELECT), None);
        assert_eq!(fsm.current_state(), Toggle::Off);
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_history_and_can_send() {
        let mut fsm = StateMachine::new(Toggle::Off);
        assert!(fsm.can_send(SELECT));
        assert!(!fsm.can_send(DESELECT));

        fsm.send(SELECT);
        fsm.send(DESELECT);
        assert_eq!(
            fsm.history(),
            &[(Toggle::Off, SELECT, Toggle::On), (Toggle::On, DESELECT, Toggle::Off)]
        );

        fsm.clear_history();
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut fsm = StateMachine::new(Toggle::Off);
        for _ in 0..MAX_HISTORY {
            fsm.send(SELECT);
            fsm.send(DESELECT);
        }
        assert_eq!(fsm.history().len(), MAX_HISTORY);
        assert_eq!(fsm.history().last(), Some(&(Toggle::On, DESELECT, Toggle::Off)));
    }

    #[test]
    fn test_reset_skips_history() {
        let mut fsm = StateMachine::new(Toggle::Off);
        fsm.reset(Toggle::On);
        assert!(fsm.is_in(Toggle::On));
        assert!(fsm.history().is_empty());
    }
}
