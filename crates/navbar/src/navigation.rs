//! The navigation widget
//!
//! `BottomNavigation` composes the menu, the items container, the badge
//! overlay and the behavior plugged into the coordinating layout. The host
//! forwards size reports, layout passes, nested scroll notifications and
//! frame ticks; the widget answers with render data and listener callbacks.
//!
//! Everything runs on the host's UI thread. Animations only advance inside
//! [`BottomNavigation::tick`].

use navbar_animation::{AnimationScheduler, Tween, TweenId};
use navbar_core::{Color, NestedScrollEvent};
use navbar_theme::{Density, NavigationConfig, NavigationTheme};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::badge::{BadgeKind, BadgeOverlay, BadgeSnapshot};
use crate::behavior::{
    BarState, Behavior, BottomBehavior, DependentId, DependentKind, DependentLayout, RailPlacement,
    TabletBehavior,
};
use crate::container::{ItemFrame, ItemsContainer};
use crate::item::{ItemId, NavigationItem};
use crate::item_view::{ItemRender, ItemStyle};
use crate::menu::Menu;
use crate::sizing::{SizingEngine, SizingPolicy};

/// Whether a tap moved the selection or hit the selected item again
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    Select,
    Reselect,
}

/// Delivered to the selection listener
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionEvent {
    pub kind: SelectionKind,
    pub item_id: ItemId,
    pub position: usize,
    /// The change came from a tap rather than the API
    pub from_user: bool,
}

pub type SelectionListener = Box<dyn FnMut(&SelectionEvent)>;
pub type MenuChangedListener = Box<dyn FnMut(&Menu)>;

/// System bar insets reported by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInsets {
    pub top: i32,
    pub bottom: i32,
    pub translucent_status: bool,
    pub translucent_navigation: bool,
}

impl SystemInsets {
    /// Inset reserved below the bar
    pub fn effective_bottom(&self) -> i32 {
        if self.translucent_navigation {
            self.bottom.max(0)
        } else {
            0
        }
    }
}

/// State kept across host restarts
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    pub selected_index: usize,
    #[serde(default)]
    pub disabled_indices: Vec<usize>,
    #[serde(default)]
    pub badges: BadgeSnapshot,
}

/// Everything the host draws for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationRender<'a> {
    pub background: Color,
    pub ripple_color: Color,
    pub badge_color: Color,
    pub badge_kind: BadgeKind,
    pub typeface: Option<&'a str>,
    /// Vertical translation of a bottom bar
    pub translation_y: f32,
    /// Shadow drawn above a bottom bar
    pub top_shadow: i32,
    pub rail: Option<RailPlacement>,
    pub items: Vec<(ItemFrame, ItemRender<'a>)>,
}

struct BackgroundAnimation {
    from: Color,
    to: Color,
    id: TweenId,
}

/// Bottom navigation bar (or side rail) widget
pub struct BottomNavigation {
    config: NavigationConfig,
    theme: NavigationTheme,
    density: Density,
    engine: SizingEngine,
    menu: Menu,
    container: Option<ItemsContainer>,
    behavior: Behavior,
    scheduler: AnimationScheduler,
    badges: BadgeOverlay,
    enabled: Vec<bool>,
    restored_disabled: Option<Vec<usize>>,
    default_selected_index: usize,
    typeface: Option<String>,
    background: Color,
    background_animation: Option<BackgroundAnimation>,
    selection_listener: Option<SelectionListener>,
    menu_listener: Option<MenuChangedListener>,
    insets: SystemInsets,
    width: i32,
    height: i32,
    attached: bool,
}

impl BottomNavigation {
    pub fn new(config: NavigationConfig, theme: NavigationTheme) -> Self {
        let density = config.layout.density();
        let engine = SizingEngine::new(&theme.dimensions, density, config.debug);
        let behavior = if config.layout.gravity.is_tablet() {
            Behavior::Tablet(TabletBehavior::new())
        } else {
            Behavior::Bottom(BottomBehavior::new(&config.behavior, &theme.motion, config.debug))
        };
        let background = theme.palette.window_background;
        let badges = BadgeOverlay::new(BadgeKind::Dot, theme.palette.badge);

        Self {
            config,
            theme,
            density,
            engine,
            menu: Menu::empty(),
            container: None,
            behavior,
            scheduler: AnimationScheduler::new(),
            badges,
            enabled: Vec::new(),
            restored_disabled: None,
            default_selected_index: 0,
            typeface: None,
            background,
            background_animation: None,
            selection_listener: None,
            menu_listener: None,
            insets: SystemInsets::default(),
            width: 0,
            height: 0,
            attached: false,
        }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn is_tablet(&self) -> bool {
        self.config.layout.gravity.is_tablet()
    }

    // ------------------------------------------------------------------
    // Menu
    // ------------------------------------------------------------------

    /// Replace the items with a new menu
    pub fn set_menu(&mut self, menu: Menu) {
        let always_show_labels = menu.always_show_labels() || self.config.layout.always_show_labels;
        let menu = menu
            .with_tablet(self.is_tablet())
            .with_always_show_labels(always_show_labels);

        self.stop_background_animation();
        self.enabled = menu.items().iter().map(NavigationItem::is_enabled).collect();
        if let Some(disabled) = self.restored_disabled.take() {
            for index in disabled {
                if let Some(flag) = self.enabled.get_mut(index) {
                    *flag = false;
                }
            }
        }
        self.badges.set_color(menu.badge_color());
        self.menu = menu;

        let policy = self.menu.policy();
        let style = self.item_style(policy);
        match self.container.as_mut() {
            Some(container) if *container.style() == style => container.remove_all(&mut self.scheduler),
            Some(container) => {
                container.remove_all(&mut self.scheduler);
                self.container = Some(self.build_container(style));
            }
            None => self.container = Some(self.build_container(style)),
        }

        let selected = if self.default_selected_index < self.menu.item_count() {
            self.default_selected_index
        } else {
            0
        };
        self.background = self.background_for(selected);
        self.populate(selected);

        tracing::debug!(menu = %self.menu, selected, "menu installed");
        if let Some(listener) = self.menu_listener.as_mut() {
            listener(&self.menu);
        }
    }

    /// Parse a TOML menu definition; a malformed one installs an empty menu
    pub fn inflate_menu_str(&mut self, definition: &str) {
        self.set_menu(Menu::from_toml_str_or_empty(definition));
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    fn item_style(&self, policy: SizingPolicy) -> ItemStyle {
        let motion = &self.theme.motion;
        ItemStyle::new(
            policy,
            self.menu.item_palette(&self.theme.palette),
            &self.theme.dimensions,
            self.density,
            motion,
            self.menu.item_animation_duration(motion),
        )
    }

    fn build_container(&self, style: ItemStyle) -> ItemsContainer {
        let padding_top = if style.policy.is_tablet() {
            self.density.to_px(self.theme.dimensions.tablet_item.layout_padding_top)
        } else {
            0
        };
        ItemsContainer::new(self.engine, style).with_padding_top(padding_top)
    }

    fn populate(&mut self, selected: usize) {
        let items: Vec<NavigationItem> = self
            .menu
            .items()
            .iter()
            .zip(&self.enabled)
            .map(|(item, enabled)| item.clone().with_enabled(*enabled))
            .collect();
        let (width, height) = self.container_size();

        let Some(container) = self.container.as_mut() else {
            return;
        };
        container.on_size_changed(width, height, &mut self.scheduler);
        if container.populate(&items, selected, &mut self.scheduler) {
            self.sync_badges();
        }
    }

    fn container_size(&self) -> (i32, i32) {
        let dims = &self.theme.dimensions;
        if self.is_tablet() {
            (self.density.to_px(dims.rail_width), self.height)
        } else {
            (self.width, self.density.to_px(dims.bar_height))
        }
    }

    // ------------------------------------------------------------------
    // Host lifecycle
    // ------------------------------------------------------------------

    pub fn on_attached(&mut self) {
        self.attached = true;
    }

    /// Cancel every animation and drop pending frames
    pub fn on_detached(&mut self) {
        self.attached = false;
        if let Some(container) = self.container.as_mut() {
            container.cancel_animations(&mut self.scheduler);
        }
        if let Some(behavior) = self.behavior.as_bottom_mut() {
            behavior.on_detached(&mut self.scheduler);
        }
        if let Some(animation) = self.background_animation.take() {
            self.background = animation.to;
        }
        self.scheduler.clear();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn set_system_insets(&mut self, insets: SystemInsets) {
        self.insets = insets;
        self.update_behavior_layout();
    }

    pub fn insets(&self) -> SystemInsets {
        self.insets
    }

    /// Preferred size given the space offered by the host
    pub fn measure(&self, available_width: i32, available_height: i32) -> (i32, i32) {
        let dims = &self.theme.dimensions;
        if self.is_tablet() {
            (self.density.to_px(dims.rail_width), available_height)
        } else {
            let height = self.density.to_px(dims.bar_height)
                + self.insets.effective_bottom()
                + self.density.to_px(dims.top_shadow);
            (available_width, height)
        }
    }

    /// The host assigned a new size
    pub fn on_size_changed(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;

        let (container_width, container_height) = self.container_size();
        if let Some(container) = self.container.as_mut() {
            let was_pending = container.is_pending();
            container.on_size_changed(container_width, container_height, &mut self.scheduler);
            if was_pending && container.is_populated() {
                self.sync_badges();
            }
        }
        self.update_behavior_layout();
    }

    fn update_behavior_layout(&mut self) {
        let bar_height = if self.height > 0 {
            self.density.to_px(self.theme.dimensions.bar_height)
        } else {
            0
        };
        let rail_width = self.density.to_px(self.theme.dimensions.rail_width);
        let insets = self.insets;
        match &mut self.behavior {
            Behavior::Bottom(behavior) => behavior.set_layout_values(bar_height, insets.effective_bottom()),
            Behavior::Tablet(behavior) => {
                behavior.set_layout_values(rail_width, insets.top, insets.translucent_status)
            }
        }
    }

    /// Layout pass; applies a queued expand/collapse request
    pub fn on_layout(&mut self) -> Option<BarState> {
        self.behavior.as_bottom_mut()?.on_layout_child(&mut self.scheduler)
    }

    /// Item frames in widget coordinates
    pub fn item_frames(&self) -> Vec<ItemFrame> {
        let shadow = if self.is_tablet() {
            0
        } else {
            self.density.to_px(self.theme.dimensions.top_shadow)
        };
        self.container
            .as_ref()
            .map(|container| {
                container
                    .layout()
                    .into_iter()
                    .map(|frame| ItemFrame {
                        y: frame.y + shadow,
                        ..frame
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn set_on_selection_listener(&mut self, listener: impl FnMut(&SelectionEvent) + 'static) {
        self.selection_listener = Some(Box::new(listener));
    }

    pub fn set_on_menu_changed_listener(&mut self, listener: impl FnMut(&Menu) + 'static) {
        self.menu_listener = Some(Box::new(listener));
    }

    /// Select an item from code
    pub fn set_selected_index(&mut self, index: usize, animate: bool) {
        self.select(index, animate, false);
    }

    /// Select an item as if the user tapped it; disabled items ignore taps
    pub fn perform_item_click(&mut self, index: usize) {
        if !self.is_item_enabled(index) {
            tracing::trace!(index, "tap on disabled item ignored");
            return;
        }
        self.select(index, true, true);
    }

    /// Route a tap in widget coordinates
    pub fn on_tap(&mut self, x: i32, y: i32) -> Option<usize> {
        let position = self
            .item_frames()
            .into_iter()
            .find(|f| x >= f.x && x < f.x + f.width && y >= f.y && y < f.y + f.height)?
            .position;
        self.perform_item_click(position);
        Some(position)
    }

    fn select(&mut self, index: usize, animate: bool, from_user: bool) {
        let Some(item_id) = self.menu.item_at(index).map(NavigationItem::id) else {
            tracing::warn!(index, count = self.menu.item_count(), "selection index out of range");
            return;
        };
        let Some(container) = self.container.as_mut() else {
            return;
        };

        let kind = if container.selected_index() != index {
            container.set_selected_index(index, animate, &mut self.scheduler);
            self.update_background(index, animate);
            SelectionKind::Select
        } else {
            SelectionKind::Reselect
        };

        let event = SelectionEvent {
            kind,
            item_id,
            position: index,
            from_user,
        };
        tracing::debug!(?event, "selection");
        if let Some(listener) = self.selection_listener.as_mut() {
            listener(&event);
        }
    }

    pub fn selected_index(&self) -> usize {
        self.container
            .as_ref()
            .map_or(self.default_selected_index, ItemsContainer::selected_index)
    }

    /// Selection used by the next menu; ignored once items are installed
    pub fn set_default_selected_index(&mut self, index: usize) {
        if self.container.as_ref().is_some_and(ItemsContainer::is_populated) {
            tracing::debug!(index, "items already installed, default selection ignored");
            return;
        }
        self.default_selected_index = index;
        if let Some(container) = self.container.as_mut() {
            container.set_selected_index(index, false, &mut self.scheduler);
        }
    }

    pub fn default_selected_index(&self) -> usize {
        self.default_selected_index
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    pub fn item_count(&self) -> usize {
        self.menu.item_count()
    }

    pub fn item_title(&self, index: usize) -> Option<&str> {
        self.menu.item_at(index).map(NavigationItem::title)
    }

    pub fn item_id(&self, index: usize) -> Option<ItemId> {
        self.menu.item_at(index).map(NavigationItem::id)
    }

    pub fn is_item_enabled(&self, index: usize) -> bool {
        self.enabled.get(index).copied().unwrap_or(false)
    }

    pub fn set_item_enabled(&mut self, index: usize, enabled: bool) {
        let Some(flag) = self.enabled.get_mut(index) else {
            tracing::warn!(index, "enable index out of range");
            return;
        };
        *flag = enabled;
        if let Some(container) = self.container.as_mut() {
            container.set_item_enabled(index, enabled);
        }
    }

    pub fn set_item_enabled_by_id(&mut self, id: ItemId, enabled: bool) {
        match self.menu.position_of(id) {
            Some(index) => self.set_item_enabled(index, enabled),
            None => tracing::warn!(%id, "unknown item id"),
        }
    }

    /// Typeface name the host uses for labels
    pub fn set_default_typeface(&mut self, typeface: impl Into<String>) {
        self.typeface = Some(typeface.into());
        if let Some(container) = self.container.as_ref() {
            tracing::trace!(count = container.len(), "typeface changed");
        }
    }

    pub fn typeface(&self) -> Option<&str> {
        self.typeface.as_deref()
    }

    // ------------------------------------------------------------------
    // Background
    // ------------------------------------------------------------------

    pub fn background_color(&self) -> Color {
        self.background
    }

    fn background_for(&self, index: usize) -> Color {
        let palette = &self.theme.palette;
        if self.menu.is_shifting() {
            if let Some(color) = self.menu.item_at(index).and_then(NavigationItem::color) {
                return color;
            }
        }
        self.menu.background(palette)
    }

    fn update_background(&mut self, index: usize, animate: bool) {
        let follows_item = self.menu.is_shifting()
            && self.menu.item_at(index).is_some_and(NavigationItem::has_color);
        if !follows_item {
            return;
        }

        let target = self.background_for(index);
        self.stop_background_animation();
        let duration = self.theme.motion.background_ms;
        if animate && duration > 0 {
            let id = self.scheduler.start(Tween::unit(duration));
            self.background_animation = Some(BackgroundAnimation {
                from: self.background,
                to: target,
                id,
            });
        } else {
            self.background = target;
        }
    }

    fn stop_background_animation(&mut self) {
        if let Some(animation) = self.background_animation.take() {
            self.scheduler.cancel(animation.id);
        }
    }

    fn background_frame(&mut self) -> bool {
        let Some(animation) = self.background_animation.as_ref() else {
            return false;
        };
        let Some(tween) = self.scheduler.get(animation.id) else {
            self.background_animation = None;
            return false;
        };

        self.background = animation.from.lerp(&animation.to, tween.fraction());
        if tween.is_finished() {
            let id = animation.id;
            self.background = animation.to;
            self.scheduler.finish(id);
            self.background_animation = None;
            return false;
        }
        true
    }

    // ------------------------------------------------------------------
    // Badges
    // ------------------------------------------------------------------

    /// Replace the badge overlay, keeping the menu's badge color
    pub fn set_badge_overlay(&mut self, mut overlay: BadgeOverlay) {
        overlay.set_color(self.menu.badge_color());
        self.badges = overlay;
        self.sync_badges();
    }

    pub fn badges(&self) -> &BadgeOverlay {
        &self.badges
    }

    pub fn show_badge(&mut self, id: ItemId) {
        let change = self.badges.show(id);
        self.redraw_badge(change.item());
    }

    /// Show or update a counted badge without hiding it in between
    pub fn show_badge_count(&mut self, id: ItemId, count: u32) {
        let change = self.badges.show_count(id, count);
        self.redraw_badge(change.item());
    }

    pub fn remove_badge(&mut self, id: ItemId) {
        let change = self.badges.remove(id);
        self.redraw_badge(change.item());
    }

    pub fn has_badge(&self, id: ItemId) -> bool {
        self.badges.has_badge(id)
    }

    fn redraw_badge(&mut self, id: Option<ItemId>) {
        let Some(id) = id else {
            return;
        };
        let badge = self.badges.badge(id);
        if let Some(view) = self.container.as_mut().and_then(|c| c.find_by_id_mut(id)) {
            view.set_badge(badge);
        }
    }

    fn sync_badges(&mut self) {
        let Some(container) = self.container.as_mut() else {
            return;
        };
        for position in 0..container.len() {
            let Some(id) = container.view(position).map(|view| view.id()) else {
                continue;
            };
            let badge = self.badges.badge(id);
            if let Some(view) = container.find_by_id_mut(id) {
                view.set_badge(badge);
            }
        }
    }

    // ------------------------------------------------------------------
    // Behavior
    // ------------------------------------------------------------------

    /// Forward a nested scroll notification; rails ignore scrolling
    pub fn on_nested_scroll_event(&mut self, event: NestedScrollEvent) -> bool {
        match self.behavior.as_bottom_mut() {
            Some(behavior) => behavior.on_nested_scroll_event(event, &mut self.scheduler),
            None => false,
        }
    }

    /// Show or hide the bar; queued until the bar height is known
    pub fn set_expanded(&mut self, expanded: bool, animate: bool) {
        let Some(behavior) = self.behavior.as_bottom_mut() else {
            return;
        };
        if behavior.is_enabled() {
            behavior.set_expanded(expanded, animate, &mut self.scheduler);
        } else {
            behavior.request_expanded(expanded, animate);
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.behavior.as_bottom().map_or(true, BottomBehavior::is_expanded)
    }

    pub fn set_on_expand_status_change(&mut self, listener: impl FnMut(bool, bool) + 'static) {
        if let Some(behavior) = self.behavior.as_bottom_mut() {
            behavior.set_on_expand_status_change(listener);
        }
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut Behavior {
        &mut self.behavior
    }

    pub fn translation_y(&self) -> f32 {
        self.behavior.as_bottom().map_or(0.0, BottomBehavior::translation)
    }

    pub fn register_dependent(&mut self, kind: DependentKind, layout: DependentLayout) -> Option<DependentId> {
        self.behavior
            .as_bottom_mut()
            .map(|behavior| behavior.register_dependent(kind, layout))
    }

    pub fn unregister_dependent(&mut self, id: DependentId) -> Option<DependentLayout> {
        self.behavior.as_bottom_mut()?.unregister_dependent(id)
    }

    pub fn dependent_layout(&self, id: DependentId) -> Option<DependentLayout> {
        self.behavior.as_bottom()?.dependent_layout(id)
    }

    /// Report a dependent's new height or slide offset
    pub fn update_dependent(&mut self, id: DependentId, height: i32, translation_y: f32) {
        if let Some(behavior) = self.behavior.as_bottom_mut() {
            behavior.update_dependent(id, height, translation_y);
        }
    }

    /// The app bar above a rail moved
    pub fn on_app_bar_changed(&mut self, app_bar_bottom: i32) -> Option<RailPlacement> {
        self.behavior
            .as_tablet_mut()
            .map(|behavior| behavior.on_app_bar_changed(app_bar_bottom))
    }

    // ------------------------------------------------------------------
    // Frames
    // ------------------------------------------------------------------

    /// Advance every animation by `dt_ms`; returns true while any still runs
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.scheduler.tick(dt_ms);
        self.on_frame()
    }

    /// Advance using wall-clock time
    pub fn tick_frame(&mut self) -> bool {
        self.scheduler.tick_frame();
        self.on_frame()
    }

    fn on_frame(&mut self) -> bool {
        let mut animating = false;
        if let Some(container) = self.container.as_mut() {
            animating |= container.on_animation_frame(&mut self.scheduler);
        }
        if let Some(behavior) = self.behavior.as_bottom_mut() {
            animating |= behavior.on_animation_frame(&mut self.scheduler);
        }
        animating |= self.background_frame();
        animating
    }

    pub fn has_active_animations(&self) -> bool {
        self.scheduler.has_active_animations()
    }

    /// Positions of items that asked for a redraw since the last call
    pub fn take_redraws(&mut self) -> SmallVec<[usize; 5]> {
        self.container
            .as_mut()
            .map(ItemsContainer::take_redraws)
            .unwrap_or_default()
    }

    pub fn render(&self) -> NavigationRender<'_> {
        let frames = self.item_frames();
        let items = match self.container.as_ref() {
            Some(container) => frames
                .into_iter()
                .zip(container.views())
                .map(|(frame, view)| (frame, view.render()))
                .collect(),
            None => Vec::new(),
        };
        let rail = match &self.behavior {
            Behavior::Tablet(behavior) => Some(behavior.placement()),
            Behavior::Bottom(_) => None,
        };

        NavigationRender {
            background: self.background,
            ripple_color: self.menu.ripple_color(&self.theme.palette),
            badge_color: self.badges.color(),
            badge_kind: self.badges.kind(),
            typeface: self.typeface.as_deref(),
            translation_y: self.translation_y(),
            top_shadow: if self.is_tablet() {
                0
            } else {
                self.density.to_px(self.theme.dimensions.top_shadow)
            },
            rail,
            items,
        }
    }

    // ------------------------------------------------------------------
    // Saved state
    // ------------------------------------------------------------------

    pub fn save_state(&self) -> NavigationState {
        NavigationState {
            selected_index: self.selected_index(),
            disabled_indices: self
                .enabled
                .iter()
                .enumerate()
                .filter_map(|(index, enabled)| (!enabled).then_some(index))
                .collect(),
            badges: self.badges.snapshot(),
        }
    }

    /// Apply saved state; before a menu is set it seeds the next one
    pub fn restore_state(&mut self, state: &NavigationState) {
        self.badges.restore(&state.badges);

        if self.menu.is_empty() {
            self.default_selected_index = state.selected_index;
            self.restored_disabled = Some(state.disabled_indices.clone());
            return;
        }

        for index in 0..self.enabled.len() {
            self.set_item_enabled(index, !state.disabled_indices.contains(&index));
        }
        if state.selected_index < self.menu.item_count() {
            self.select(state.selected_index, false, false);
        }
        self.sync_badges();
    }
}

impl std::fmt::Debug for BottomNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BottomNavigation")
            .field("menu", &self.menu)
            .field("selected_index", &self.selected_index())
            .field("behavior", &self.behavior)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("attached", &self.attached)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::IconRef;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn menu(count: i32) -> Menu {
        let items = (1..=count)
            .map(|i| NavigationItem::new(ItemId(i), IconRef::new(format!("ic_{i}")), format!("Item {i}")))
            .collect();
        Menu::new(items).unwrap()
    }

    fn widget() -> BottomNavigation {
        BottomNavigation::new(NavigationConfig::default(), NavigationTheme::default())
    }

    #[test]
    fn test_selection_events_and_reselect() {
        let mut nav = widget();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        nav.set_on_selection_listener(move |event| sink.borrow_mut().push(*event));

        nav.set_menu(menu(4));
        nav.on_size_changed(360, 60);
        nav.perform_item_click(2);
        nav.perform_item_click(2);
        nav.set_selected_index(0, false);

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].kind, SelectionKind::Select);
        assert_eq!(events[0].item_id, ItemId(3));
        assert!(events[0].from_user);
        assert_eq!(events[1].kind, SelectionKind::Reselect);
        assert!(!events[2].from_user);
        assert_eq!(nav.selected_index(), 0);
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut nav = widget();
        nav.set_menu(menu(3));
        nav.on_size_changed(360, 60);
        nav.set_selected_index(7, true);
        assert_eq!(nav.selected_index(), 0);
    }

    #[test]
    fn test_measure_includes_inset_and_shadow() {
        let mut nav = widget();
        nav.set_system_insets(SystemInsets {
            top: 24,
            bottom: 48,
            translucent_status: true,
            translucent_navigation: true,
        });
        assert_eq!(nav.measure(360, 640), (360, 56 + 48 + 4));
    }

    #[test]
    fn test_disabled_item_ignores_taps() {
        let mut nav = widget();
        nav.set_menu(menu(3));
        nav.on_size_changed(360, 60);
        nav.set_item_enabled_by_id(ItemId(2), false);
        nav.perform_item_click(1);
        assert_eq!(nav.selected_index(), 0);
        assert!(!nav.is_item_enabled(1));
    }

    #[test]
    fn test_detach_cancels_animations() {
        let mut nav = widget();
        nav.set_menu(menu(5));
        nav.on_size_changed(360, 60);
        nav.perform_item_click(3);
        nav.set_expanded(false, true);
        assert!(nav.has_active_animations());

        nav.tick(50.0);

        nav.on_detached();
        assert!(!nav.has_active_animations());
        assert!(!nav.is_expanded());
        assert!(!nav.tick(16.0));

        let render = nav.render();
        assert_eq!((render.items[3].1.width, render.items[3].1.expanded), (104, true));
        assert_eq!((render.items[0].1.width, render.items[0].1.expanded), (64, false));
    }
}
