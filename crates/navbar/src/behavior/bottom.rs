//! Scroll-aware visibility for bottom bars
//!
//! The behavior listens to nested scroll notifications forwarded by the
//! coordinating layout. Scroll deltas accumulate until they pass twice the
//! touch slop; the bar then hides (content scrolled up) or shows (content
//! scrolled down) and the running offset restarts from zero. A fast fling
//! forces the transition regardless of the offset.
//!
//! Show/hide is animated on the bar's vertical translation. Only one
//! animation runs at a time: a new transition cancels the previous tween
//! before starting its own. Dependent views are laid out again on every
//! animation frame so they track the bar's visible edge.

use navbar_animation::{AnimationScheduler, Easing, Tween, TweenId};
use navbar_core::event_types::{
    ANIMATION_END, COLLAPSE, COLLAPSE_IMMEDIATE, EXPAND, EXPAND_IMMEDIATE, SCROLL_DOWN, SCROLL_UP,
};
use navbar_core::{
    EventType, NestedScrollEvent, ScrollAxes, ScrollDirection, ScrollTarget, StateMachine, StateTransitions,
};
use navbar_theme::{BehaviorConfig, Motion};
use smallvec::SmallVec;

use super::dependents::{BarGeometry, DependentId, DependentKind, DependentLayout, DependentRegistry};
use super::direction::VerticalScrollTracker;

/// Visibility of the bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarState {
    /// Fully on screen, translation 0
    #[default]
    Expanded,
    /// Animating towards the hidden offset
    Hiding,
    /// Fully off screen, translation at the maximum offset
    Hidden,
    /// Animating back on screen
    Showing,
}

impl BarState {
    /// Hidden or on its way there
    pub fn is_hidden(&self) -> bool {
        matches!(self, BarState::Hiding | BarState::Hidden)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, BarState::Hiding | BarState::Showing)
    }
}

impl StateTransitions for BarState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use BarState::*;
        match (self, event) {
            (Expanded | Showing, SCROLL_UP | COLLAPSE) => Some(Hiding),
            (Hidden | Hiding, SCROLL_DOWN | EXPAND) => Some(Showing),
            (Expanded | Showing | Hiding, COLLAPSE_IMMEDIATE) => Some(Hidden),
            (Hidden | Hiding | Showing, EXPAND_IMMEDIATE) => Some(Expanded),
            (Hiding, ANIMATION_END) => Some(Hidden),
            (Showing, ANIMATION_END) => Some(Expanded),
            _ => None,
        }
    }
}

/// Receives `(expanded, animate)` whenever the bar starts a transition
pub type ExpandStatusListener = Box<dyn FnMut(bool, bool)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingAction {
    expanded: bool,
    animate: bool,
}

/// Hide-on-scroll behavior of a bottom bar
pub struct BottomBehavior {
    scrollable: bool,
    duration_ms: u32,
    easing: Easing,
    scroll_threshold: i32,
    fling_threshold: f32,
    debug: bool,
    enabled: bool,
    state: StateMachine<BarState>,
    height: i32,
    bottom_inset: i32,
    max_offset: i32,
    offset: i32,
    translation: f32,
    animation: Option<TweenId>,
    tracker: VerticalScrollTracker,
    pending: Option<PendingAction>,
    listener: Option<ExpandStatusListener>,
    dependents: DependentRegistry,
}

impl BottomBehavior {
    /// A behavior that stays disabled until it learns the bar height
    pub fn new(config: &BehaviorConfig, motion: &Motion, debug: bool) -> Self {
        tracing::debug!(
            scrollable = config.scrollable,
            duration_ms = config.animation_duration_ms,
            threshold = config.scroll_threshold(),
            "bottom behavior created"
        );
        Self {
            scrollable: config.scrollable,
            duration_ms: config.animation_duration_ms,
            easing: motion.hide_easing,
            scroll_threshold: config.scroll_threshold(),
            fling_threshold: config.fling_velocity_threshold,
            debug,
            enabled: false,
            state: StateMachine::new(BarState::Expanded),
            height: 0,
            bottom_inset: 0,
            max_offset: 0,
            offset: 0,
            translation: 0.0,
            animation: None,
            tracker: VerticalScrollTracker::new(),
            pending: None,
            listener: None,
            dependents: DependentRegistry::new(),
        }
    }

    pub fn set_on_expand_status_change(&mut self, listener: impl FnMut(bool, bool) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Record the bar height and bottom inset
    ///
    /// A zero height disables scroll handling until a later non-zero report.
    pub fn set_layout_values(&mut self, height: i32, bottom_inset: i32) {
        if height <= 0 {
            tracing::debug!(height, "bar height unknown, scroll handling disabled");
            self.enabled = false;
            return;
        }

        self.height = height;
        self.bottom_inset = bottom_inset.max(0);
        self.max_offset = height + self.bottom_inset;
        self.enabled = true;

        if self.state.is_in(BarState::Hidden) {
            self.translation = self.max_offset as f32;
        }
        self.dependents.on_bar_changed(&self.geometry());

        tracing::debug!(
            height,
            bottom_inset = self.bottom_inset,
            translucent = self.is_translucent(),
            max_offset = self.max_offset,
            "layout values"
        );
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    pub fn set_scrollable(&mut self, scrollable: bool) {
        self.scrollable = scrollable;
    }

    /// A bottom inset is reserved for a translucent navigation bar
    pub fn is_translucent(&self) -> bool {
        self.bottom_inset > 0
    }

    pub fn state(&self) -> BarState {
        self.state.current_state()
    }

    pub fn is_expanded(&self) -> bool {
        !self.state.current_state().is_hidden()
    }

    pub fn is_hidden(&self) -> bool {
        self.state.current_state().is_hidden()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Current vertical translation, within `0..=max_offset`
    pub fn translation(&self) -> f32 {
        self.translation
    }

    pub fn max_offset(&self) -> i32 {
        self.max_offset
    }

    /// Scroll distance accumulated since the last transition
    pub fn accumulated_offset(&self) -> i32 {
        self.offset
    }

    pub fn tracker(&self) -> &VerticalScrollTracker {
        &self.tracker
    }

    pub fn geometry(&self) -> BarGeometry {
        BarGeometry {
            height: self.height,
            bottom_inset: self.bottom_inset,
            translation: self.translation,
            expanded: self.is_expanded(),
        }
    }

    // ------------------------------------------------------------------
    // Nested scroll
    // ------------------------------------------------------------------

    /// Route a nested scroll notification
    ///
    /// Returns whether a session start was accepted, or whether any other
    /// notification changed the bar state.
    pub fn on_nested_scroll_event(&mut self, event: NestedScrollEvent, scheduler: &mut AnimationScheduler) -> bool {
        match event {
            NestedScrollEvent::Start { axes, target } => self.on_start_nested_scroll(axes, target),
            NestedScrollEvent::PreScroll { dy, target, .. } => {
                self.on_nested_pre_scroll(dy, target, scheduler).is_some()
            }
            NestedScrollEvent::Scroll { dy_unconsumed, .. } => {
                self.on_nested_scroll(dy_unconsumed);
                false
            }
            NestedScrollEvent::Fling { velocity_y, .. } => self.on_nested_fling(velocity_y, scheduler).is_some(),
            NestedScrollEvent::Stop => {
                self.on_stop_nested_scroll();
                false
            }
        }
    }

    /// Returns false when the session should not be observed
    pub fn on_start_nested_scroll(&mut self, axes: ScrollAxes, target: ScrollTarget) -> bool {
        self.offset = 0;
        if !self.scrollable || !axes.vertical {
            return false;
        }
        if target.is_scroll_container && !target.can_scroll_up && !target.can_scroll_down {
            tracing::trace!("target cannot scroll, refusing nested scroll");
            return false;
        }
        true
    }

    /// Accumulate a delta; returns the state entered if a transition fired
    pub fn on_nested_pre_scroll(
        &mut self,
        dy: i32,
        target: ScrollTarget,
        scheduler: &mut AnimationScheduler,
    ) -> Option<BarState> {
        let direction = self.tracker.on_pre_scroll(dy);
        if !self.accepts_scroll() {
            return None;
        }

        self.offset += dy;
        if self.debug {
            tracing::trace!(
                dy,
                offset = self.offset,
                ?direction,
                can_scroll = target.can_scroll(direction),
                "pre-scroll"
            );
        }

        let direction = if self.offset > self.scroll_threshold {
            ScrollDirection::Up
        } else if self.offset < -self.scroll_threshold {
            ScrollDirection::Down
        } else {
            return None;
        };
        self.offset = 0;
        self.handle_direction(direction, scheduler)
    }

    pub fn on_nested_scroll(&mut self, dy_unconsumed: i32) {
        self.tracker.on_over_scroll(dy_unconsumed);
    }

    /// A fast fling forces the transition for its direction
    pub fn on_nested_fling(&mut self, velocity_y: f32, scheduler: &mut AnimationScheduler) -> Option<BarState> {
        let direction = self.tracker.on_fling(velocity_y);
        if !self.accepts_scroll() || velocity_y.abs() <= self.fling_threshold {
            return None;
        }
        tracing::trace!(velocity_y, ?direction, "fling");
        self.handle_direction(direction, scheduler)
    }

    pub fn on_stop_nested_scroll(&mut self) {
        self.offset = 0;
    }

    fn accepts_scroll(&self) -> bool {
        self.enabled && self.scrollable && self.pending.is_none()
    }

    fn handle_direction(&mut self, direction: ScrollDirection, scheduler: &mut AnimationScheduler) -> Option<BarState> {
        let (event, expanded) = match direction {
            ScrollDirection::Down if self.is_hidden() => (SCROLL_DOWN, true),
            ScrollDirection::Up if !self.is_hidden() => (SCROLL_UP, false),
            _ => return None,
        };
        self.transition(event, expanded, true, scheduler)
    }

    // ------------------------------------------------------------------
    // Explicit requests
    // ------------------------------------------------------------------

    /// Show or hide the bar now; a request matching the current target is a no-op
    pub fn set_expanded(&mut self, expanded: bool, animate: bool, scheduler: &mut AnimationScheduler) -> Option<BarState> {
        let event = match (expanded, animate) {
            (true, true) => EXPAND,
            (true, false) => EXPAND_IMMEDIATE,
            (false, true) => COLLAPSE,
            (false, false) => COLLAPSE_IMMEDIATE,
        };
        self.transition(event, expanded, animate, scheduler)
    }

    /// Queue a request for the next layout pass
    pub fn request_expanded(&mut self, expanded: bool, animate: bool) {
        self.pending = Some(PendingAction { expanded, animate });
    }

    pub fn has_pending_action(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply a queued request, then clear it
    pub fn on_layout_child(&mut self, scheduler: &mut AnimationScheduler) -> Option<BarState> {
        let pending = self.pending.take()?;
        self.set_expanded(pending.expanded, pending.animate, scheduler)
    }

    fn transition(
        &mut self,
        event: EventType,
        expanded: bool,
        animate: bool,
        scheduler: &mut AnimationScheduler,
    ) -> Option<BarState> {
        let mut state = self.state.send(event)?;

        if let Some(id) = self.animation.take() {
            scheduler.cancel(id);
        }

        let target = if expanded { 0.0 } else { self.max_offset as f32 };
        if animate && self.duration_ms > 0 && self.translation != target {
            let tween = Tween::new(self.translation, target, self.duration_ms).with_easing(self.easing);
            self.animation = Some(scheduler.start(tween));
        } else {
            self.translation = target;
            if state.is_animating() {
                state = self.state.send(ANIMATION_END).unwrap_or(state);
            }
        }
        self.dependents.on_bar_changed(&self.geometry());

        tracing::debug!(expanded, animate, ?state, translation = self.translation, "bar visibility");
        if let Some(listener) = self.listener.as_mut() {
            listener(expanded, animate);
        }
        Some(state)
    }

    // ------------------------------------------------------------------
    // Frames
    // ------------------------------------------------------------------

    /// Advance the show/hide animation; returns true while it runs
    ///
    /// Dependents are laid out again on every frame.
    pub fn on_animation_frame(&mut self, scheduler: &mut AnimationScheduler) -> bool {
        let Some(id) = self.animation else {
            return false;
        };
        let Some(tween) = scheduler.get(id) else {
            self.animation = None;
            return false;
        };

        // The hidden offset can change mid-animation; always head for the current one
        let target = if self.state.current_state().is_hidden() {
            self.max_offset as f32
        } else {
            0.0
        };
        let translation = if tween.is_finished() {
            target
        } else {
            tween.from() + (target - tween.from()) * tween.fraction()
        };
        self.translation = translation.clamp(0.0, self.max_offset.max(0) as f32);
        if tween.is_finished() {
            scheduler.finish(id);
            self.animation = None;
            self.state.send(ANIMATION_END);
        }
        self.dependents.on_bar_changed(&self.geometry());
        self.animation.is_some()
    }

    /// Cancel the running animation and settle on its target
    pub fn on_detached(&mut self, scheduler: &mut AnimationScheduler) {
        if let Some(id) = self.animation.take() {
            scheduler.cancel(id);
        }
        match self.state.current_state() {
            BarState::Hiding => {
                self.translation = self.max_offset as f32;
                self.state.send(ANIMATION_END);
            }
            BarState::Showing => {
                self.translation = 0.0;
                self.state.send(ANIMATION_END);
            }
            _ => {}
        }
        self.offset = 0;
        self.tracker.reset();
    }

    // ------------------------------------------------------------------
    // Dependents
    // ------------------------------------------------------------------

    pub fn register_dependent(&mut self, kind: DependentKind, layout: DependentLayout) -> DependentId {
        let bar = self.geometry();
        self.dependents.register(kind, layout, &bar)
    }

    pub fn unregister_dependent(&mut self, id: DependentId) -> Option<DependentLayout> {
        self.dependents.unregister(id)
    }

    pub fn dependent_layout(&self, id: DependentId) -> Option<DependentLayout> {
        self.dependents.layout(id)
    }

    /// A dependent was measured again or moved by its own animation
    pub fn update_dependent(&mut self, id: DependentId, height: i32, translation_y: f32) -> SmallVec<[DependentId; 4]> {
        let bar = self.geometry();
        self.dependents.update(id, height, translation_y, &bar)
    }

    /// Re-run dependent layout outside of an animation
    pub fn on_dependent_view_changed(&mut self) -> SmallVec<[DependentId; 4]> {
        let bar = self.geometry();
        self.dependents.on_bar_changed(&bar)
    }

    pub fn dependents(&self) -> &DependentRegistry {
        &self.dependents
    }
}

impl std::fmt::Debug for BottomBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BottomBehavior")
            .field("state", &self.state.current_state())
            .field("enabled", &self.enabled)
            .field("scrollable", &self.scrollable)
            .field("translation", &self.translation)
            .field("max_offset", &self.max_offset)
            .field("offset", &self.offset)
            .field("pending", &self.pending)
            .finish()
    }
}
