//! Item views
//!
//! One view per menu item. A view is either collapsed or expanded, and the
//! expand flag drives a small state machine: a transition happens only when
//! the flag actually changes. Each transition interpolates the view's
//! visual properties (width, tint, label alpha, label scale, icon offset) in
//! lockstep from one unit tween, or applies them at once when not animated.
//!
//! The three policies share this type; the policy only changes the target
//! visuals and the timing.

use navbar_animation::{AnimationScheduler, Easing, Tween, TweenId};
use navbar_core::event_types::{DESELECT, SELECT};
use navbar_core::{Color, EventType, StateMachine, StateTransitions};
use navbar_theme::{Density, Dimensions, Motion};

use crate::badge::BadgeContent;
use crate::item::{IconRef, ItemId, NavigationItem};
use crate::menu::ItemPalette;
use crate::sizing::SizingPolicy;

/// Expansion state of an item view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemState {
    #[default]
    Collapsed,
    Expanded,
}

impl StateTransitions for ItemState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (ItemState::Collapsed, SELECT) => Some(ItemState::Expanded),
            (ItemState::Expanded, DESELECT) => Some(ItemState::Collapsed),
            _ => None,
        }
    }
}

/// Direction of an item transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Collapse,
    Expand,
}

/// A committed expansion change on one item view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemTransition {
    pub position: usize,
    pub id: ItemId,
    pub kind: TransitionKind,
    pub animated: bool,
}

/// Pixel geometry shared by every view of one policy
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemMetrics {
    pub height: i32,
    pub icon_size: i32,
    pub icon_top_active: f32,
    pub icon_top_inactive: f32,
    /// Label scale of an expanded item
    pub text_scale_active: f32,
}

impl ItemMetrics {
    pub fn for_policy(policy: SizingPolicy, dimensions: &Dimensions, density: Density) -> Self {
        match policy {
            SizingPolicy::Fixed => {
                let item = &dimensions.fixed_item;
                Self {
                    height: density.to_px(dimensions.bar_height),
                    icon_size: density.to_px(item.icon_size),
                    icon_top_active: density.to_px(item.padding_top_active) as f32,
                    icon_top_inactive: density.to_px(item.padding_top_inactive) as f32,
                    text_scale_active: item.active_text_scale(),
                }
            }
            SizingPolicy::Shifting => {
                let item = &dimensions.shifting_item;
                Self {
                    height: density.to_px(dimensions.bar_height),
                    icon_size: density.to_px(item.icon_size),
                    icon_top_active: density.to_px(item.padding_top) as f32,
                    icon_top_inactive: density.to_px(item.padding_bottom_inactive) as f32,
                    text_scale_active: 1.0,
                }
            }
            SizingPolicy::Tablet => {
                let item = &dimensions.tablet_item;
                let height = density.to_px(item.item_height);
                let icon_size = density.to_px(item.icon_size);
                let centered = ((height - icon_size) / 2) as f32;
                Self {
                    height,
                    icon_size,
                    icon_top_active: centered,
                    icon_top_inactive: centered,
                    text_scale_active: 1.0,
                }
            }
        }
    }
}

/// Presentation shared by all views of one container
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemStyle {
    pub policy: SizingPolicy,
    pub palette: ItemPalette,
    pub metrics: ItemMetrics,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl ItemStyle {
    /// Shifting items animate for twice the menu duration
    pub fn new(
        policy: SizingPolicy,
        palette: ItemPalette,
        dimensions: &Dimensions,
        density: Density,
        motion: &Motion,
        duration_ms: u32,
    ) -> Self {
        let duration_ms = match policy {
            SizingPolicy::Shifting => duration_ms.saturating_mul(2),
            _ => duration_ms,
        };
        Self {
            policy,
            palette,
            metrics: ItemMetrics::for_policy(policy, dimensions, density),
            duration_ms,
            easing: motion.item_easing,
        }
    }
}

/// Interpolated visual properties of an item view
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemVisual {
    pub width: f32,
    pub icon_color: Color,
    pub label_color: Color,
    pub text_scale: f32,
    pub icon_top: f32,
}

const BLANK_VISUAL: ItemVisual = ItemVisual {
    width: 0.0,
    icon_color: Color::TRANSPARENT,
    label_color: Color::TRANSPARENT,
    text_scale: 1.0,
    icon_top: 0.0,
};

impl ItemVisual {
    fn lerp(&self, to: &ItemVisual, t: f32) -> ItemVisual {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        ItemVisual {
            width: mix(self.width, to.width),
            icon_color: self.icon_color.lerp(&to.icon_color, t),
            label_color: self.label_color.lerp(&to.label_color, t),
            text_scale: mix(self.text_scale, to.text_scale),
            icon_top: mix(self.icon_top, to.icon_top),
        }
    }
}

/// What the host draws for one item
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRender<'a> {
    pub id: ItemId,
    pub position: usize,
    pub icon: &'a IconRef,
    pub title: &'a str,
    pub width: i32,
    pub height: i32,
    pub icon_size: i32,
    pub icon_top: i32,
    pub icon_color: Color,
    pub label_color: Color,
    pub label_visible: bool,
    pub text_scale: f32,
    pub expanded: bool,
    pub enabled: bool,
    pub badge: Option<BadgeContent>,
}

/// View state of a single navigation item
#[derive(Clone, Debug)]
pub struct ItemView {
    item: NavigationItem,
    position: usize,
    style: ItemStyle,
    state: StateMachine<ItemState>,
    enabled: bool,
    visual: ItemVisual,
    from: ItemVisual,
    to: ItemVisual,
    animation: Option<TweenId>,
    badge: Option<BadgeContent>,
    needs_redraw: bool,
}

impl ItemView {
    /// A collapsed view with zero width until the container lays it out
    pub fn new(item: NavigationItem, position: usize, style: ItemStyle) -> Self {
        let enabled = item.is_enabled();
        let mut view = Self {
            item,
            position,
            style,
            state: StateMachine::new(ItemState::Collapsed),
            enabled,
            visual: BLANK_VISUAL,
            from: BLANK_VISUAL,
            to: BLANK_VISUAL,
            animation: None,
            badge: None,
            needs_redraw: true,
        };
        view.visual = view.target_visual(false, 0.0);
        view.to = view.visual;
        view.from = view.visual;
        view
    }

    pub fn item(&self) -> &NavigationItem {
        &self.item
    }

    pub fn id(&self) -> ItemId {
        self.item.id()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn policy(&self) -> SizingPolicy {
        self.style.policy
    }

    pub fn state(&self) -> ItemState {
        self.state.current_state()
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_in(ItemState::Expanded)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn visual(&self) -> &ItemVisual {
        &self.visual
    }

    /// Current laid-out width in whole pixels
    pub fn width(&self) -> i32 {
        self.visual.width as i32
    }

    pub fn history(&self) -> &[(ItemState, EventType, ItemState)] {
        self.state.history()
    }

    /// Change the expand flag, committing the state at once
    ///
    /// Returns `None` when the flag already had this value. Visuals either
    /// snap to the target or interpolate on later frames.
    pub fn set_expanded(
        &mut self,
        expanded: bool,
        target_width: i32,
        animate: bool,
        scheduler: &mut AnimationScheduler,
    ) -> Option<ItemTransition> {
        let event = if expanded { SELECT } else { DESELECT };
        self.state.send(event)?;

        self.cancel_animation(scheduler);
        let target = self.target_visual(expanded, target_width as f32);
        let animated = animate && self.style.duration_ms > 0;

        if animated {
            self.from = self.visual;
            self.to = target;
            let tween = Tween::unit(self.style.duration_ms).with_easing(self.style.easing);
            self.animation = Some(scheduler.start(tween));
        } else {
            self.visual = target;
            self.from = target;
            self.to = target;
        }
        self.needs_redraw = true;

        Some(ItemTransition {
            position: self.position,
            id: self.item.id(),
            kind: if expanded {
                TransitionKind::Expand
            } else {
                TransitionKind::Collapse
            },
            animated,
        })
    }

    /// Apply a new layout width without changing the expand flag
    pub fn set_width(&mut self, width: i32) {
        let width = width as f32;
        self.to.width = width;
        if self.animation.is_none() {
            self.visual.width = width;
            self.from.width = width;
        }
        self.needs_redraw = true;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;

        let expanded = self.is_expanded();
        let to = self.target_visual(expanded, self.to.width);
        let from = self.target_visual(!expanded, self.from.width);
        self.to = to;
        if self.animation.is_some() {
            self.from = from;
        } else {
            self.visual = to;
            self.from = to;
        }
        self.needs_redraw = true;
    }

    /// Attach or drop this view's badge; returns true when it changed
    pub fn set_badge(&mut self, badge: Option<BadgeContent>) -> bool {
        if self.badge == badge {
            return false;
        }
        self.badge = badge;
        self.needs_redraw = true;
        true
    }

    pub fn badge(&self) -> Option<BadgeContent> {
        self.badge
    }

    /// Advance the running transition; returns true while still animating
    ///
    /// A handle that no longer resolves was voided elsewhere and is dropped
    /// without touching the visuals.
    pub fn on_animation_frame(&mut self, scheduler: &mut AnimationScheduler) -> bool {
        let Some(id) = self.animation else {
            return false;
        };
        let Some(tween) = scheduler.get(id) else {
            self.animation = None;
            return false;
        };

        if tween.is_finished() {
            scheduler.finish(id);
            self.animation = None;
            self.visual = self.to;
        } else {
            self.visual = self.from.lerp(&self.to, tween.fraction());
        }
        self.needs_redraw = true;
        self.animation.is_some()
    }

    pub fn cancel_animation(&mut self, scheduler: &mut AnimationScheduler) {
        if let Some(id) = self.animation.take() {
            scheduler.cancel(id);
        }
    }

    /// Stop the running transition and jump to its target visuals
    pub fn settle(&mut self, scheduler: &mut AnimationScheduler) {
        if self.animation.is_none() {
            return;
        }
        self.cancel_animation(scheduler);
        self.visual = self.to;
        self.from = self.to;
        self.needs_redraw = true;
    }

    /// Returns and clears the pending redraw request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Preferred size `(width, height)`
    pub fn measure(&self) -> (i32, i32) {
        (self.width(), self.style.metrics.height)
    }

    pub fn render(&self) -> ItemRender<'_> {
        ItemRender {
            id: self.item.id(),
            position: self.position,
            icon: self.item.icon(),
            title: self.item.title(),
            width: self.width(),
            height: self.style.metrics.height,
            icon_size: self.style.metrics.icon_size,
            icon_top: self.visual.icon_top as i32,
            icon_color: self.visual.icon_color,
            label_color: self.visual.label_color,
            label_visible: self.visual.label_color.alpha_u8() > 0,
            text_scale: self.visual.text_scale,
            expanded: self.is_expanded(),
            enabled: self.enabled,
            badge: self.badge,
        }
    }

    fn target_visual(&self, expanded: bool, width: f32) -> ItemVisual {
        let palette = &self.style.palette;
        let metrics = &self.style.metrics;
        let icon_top = if expanded {
            metrics.icon_top_active
        } else {
            metrics.icon_top_inactive
        };

        match self.style.policy {
            SizingPolicy::Fixed => {
                let color = palette.color_for(expanded, self.enabled);
                ItemVisual {
                    width,
                    icon_color: color,
                    label_color: color,
                    text_scale: if expanded { metrics.text_scale_active } else { 1.0 },
                    icon_top,
                }
            }
            SizingPolicy::Shifting => {
                // Shifting items tint with the active color and fade by alpha
                let alpha_inactive = palette.inactive.a;
                let alpha_disabled = palette.disabled.a;
                let alpha_active = palette.active.a.max(alpha_inactive);
                let (icon_alpha, label_alpha) = match (self.enabled, expanded) {
                    (true, true) => (alpha_active, alpha_active),
                    (true, false) => (alpha_inactive, 0.0),
                    (false, true) => (alpha_disabled, alpha_disabled),
                    (false, false) => (alpha_disabled, 0.0),
                };
                ItemVisual {
                    width,
                    icon_color: palette.active.with_alpha(icon_alpha),
                    label_color: palette.active.with_alpha(label_alpha),
                    text_scale: 1.0,
                    icon_top,
                }
            }
            SizingPolicy::Tablet => ItemVisual {
                width,
                icon_color: palette.color_for(expanded, self.enabled),
                label_color: Color::TRANSPARENT,
                text_scale: 1.0,
                icon_top,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navbar_theme::NavigationTheme;

    fn style(policy: SizingPolicy) -> ItemStyle {
        let theme = NavigationTheme::default();
        let palette = ItemPalette {
            active: Color::WHITE,
            inactive: Color::WHITE.half_alpha(),
            disabled: Color::WHITE.half_alpha().half_alpha(),
        };
        ItemStyle::new(policy, palette, &theme.dimensions, Density(1.0), &theme.motion, 200)
    }

    fn view(policy: SizingPolicy) -> ItemView {
        let item = NavigationItem::new(ItemId(7), IconRef::new("ic_home"), "Home");
        ItemView::new(item, 0, style(policy))
    }

    #[test]
    fn test_transition_only_on_flag_change() {
        let mut scheduler = AnimationScheduler::new();
        let mut view = view(SizingPolicy::Fixed);

        assert_eq!(view.set_expanded(false, 120, false, &mut scheduler), None);
        let transition = view.set_expanded(true, 120, false, &mut scheduler).unwrap();
        assert_eq!(transition.kind, TransitionKind::Expand);
        assert!(!transition.animated);
        assert_eq!(view.set_expanded(true, 120, true, &mut scheduler), None);
        assert_eq!(view.history().len(), 1);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_immediate_path_applies_target() {
        let mut scheduler = AnimationScheduler::new();
        let mut view = view(SizingPolicy::Fixed);
        view.set_expanded(true, 120, false, &mut scheduler);

        assert_eq!(view.width(), 120);
        assert_eq!(view.visual().icon_color, Color::WHITE);
        assert!((view.visual().text_scale - 14.0 / 12.0).abs() < 1e-6);
        assert_eq!(view.visual().icon_top, 6.0);
    }

    #[test]
    fn test_shifting_animation_interpolates_in_lockstep() {
        let mut scheduler = AnimationScheduler::new();
        let mut view = view(SizingPolicy::Shifting);
        view.set_width(64);

        let transition = view.set_expanded(true, 104, true, &mut scheduler).unwrap();
        assert!(transition.animated);
        assert!(view.is_expanded());
        assert_eq!(view.width(), 64);

        // Shifting doubles the 200ms item duration
        scheduler.tick(200.0);
        assert!(view.on_animation_frame(&mut scheduler));
        let width = view.visual().width;
        assert!(width > 64.0 && width < 104.0);
        assert!(view.visual().label_color.a > 0.0);

        scheduler.tick(200.0);
        assert!(!view.on_animation_frame(&mut scheduler));
        assert_eq!(view.width(), 104);
        assert_eq!(view.visual().label_color.a, 1.0);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_shifting_collapsed_label_hidden() {
        let view = view(SizingPolicy::Shifting);
        let render = view.render();
        assert!(!render.label_visible);
        assert_eq!(render.icon_color.alpha_u8(), 0x7F);
    }

    #[test]
    fn test_voided_handle_is_dropped_silently() {
        let mut scheduler = AnimationScheduler::new();
        let mut view = view(SizingPolicy::Fixed);
        view.set_expanded(true, 120, true, &mut scheduler);
        let before = *view.visual();

        scheduler.clear();
        assert!(!view.on_animation_frame(&mut scheduler));
        assert!(!view.is_animating());
        assert_eq!(*view.visual(), before);
    }

    #[test]
    fn test_settle_jumps_to_target() {
        let mut scheduler = AnimationScheduler::new();
        let mut view = view(SizingPolicy::Shifting);
        view.set_width(64);
        view.set_expanded(true, 104, true, &mut scheduler);
        scheduler.tick(100.0);
        view.on_animation_frame(&mut scheduler);
        assert!(view.width() < 104);

        view.settle(&mut scheduler);
        assert!(!view.is_animating());
        assert!(scheduler.is_empty());
        assert_eq!(view.width(), 104);
        assert_eq!(view.visual().label_color.a, 1.0);

        scheduler.tick(16.0);
        assert!(!view.on_animation_frame(&mut scheduler));
        assert_eq!(view.width(), 104);
    }

    #[test]
    fn test_disabled_uses_disabled_color() {
        let mut scheduler = AnimationScheduler::new();
        let mut view = view(SizingPolicy::Fixed);
        view.set_expanded(true, 120, false, &mut scheduler);
        view.set_enabled(false);

        assert_eq!(view.visual().icon_color.to_argb(), 0x3FFF_FFFF);
        assert!(!view.render().enabled);
    }

    #[test]
    fn test_badge_requests_redraw() {
        let mut view = view(SizingPolicy::Tablet);
        view.take_redraw();
        assert!(view.set_badge(Some(BadgeContent::default())));
        assert!(view.take_redraw());
        assert!(!view.set_badge(Some(BadgeContent::default())));
        assert!(!view.needs_redraw());
        assert_eq!(view.measure(), (0, 56));
    }
}
