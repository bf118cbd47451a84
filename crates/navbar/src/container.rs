//! Items container
//!
//! Owns the item views of the current menu, the selection, and the widths
//! computed by the sizing engine. Population waits for the first valid size
//! report; selection changes collapse the old view before expanding the new
//! one and report both transitions in that order.

use navbar_animation::AnimationScheduler;
use smallvec::SmallVec;

use crate::item::{ItemId, NavigationItem};
use crate::item_view::{ItemStyle, ItemTransition, ItemView};
use crate::sizing::{ItemWidths, SizingEngine, SizingPolicy};

/// Transitions produced by one selection change
pub type Transitions = SmallVec<[ItemTransition; 2]>;

/// Position and size of one item inside the container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemFrame {
    pub position: usize,
    pub id: ItemId,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Debug)]
struct PendingPopulate {
    items: Vec<NavigationItem>,
    selected: usize,
}

/// Holds the item views of one menu under one sizing policy
#[derive(Debug)]
pub struct ItemsContainer {
    policy: SizingPolicy,
    engine: SizingEngine,
    style: ItemStyle,
    padding_top: i32,
    views: Vec<ItemView>,
    populated: Vec<NavigationItem>,
    pending: Option<PendingPopulate>,
    selected_index: usize,
    previous_index: usize,
    width: i32,
    height: i32,
    widths: ItemWidths,
}

impl ItemsContainer {
    pub fn new(engine: SizingEngine, style: ItemStyle) -> Self {
        Self {
            policy: style.policy,
            engine,
            style,
            padding_top: 0,
            views: Vec::new(),
            populated: Vec::new(),
            pending: None,
            selected_index: 0,
            previous_index: 0,
            width: 0,
            height: 0,
            widths: ItemWidths::default(),
        }
    }

    /// Offset of the first item on a side rail
    pub fn with_padding_top(mut self, padding_top: i32) -> Self {
        self.padding_top = padding_top;
        self
    }

    pub fn policy(&self) -> SizingPolicy {
        self.policy
    }

    pub fn style(&self) -> &ItemStyle {
        &self.style
    }

    /// Install the views for `items`, or defer until a size is known
    ///
    /// Returns true when the views were built by this call. The same item
    /// set is never populated twice.
    pub fn populate(
        &mut self,
        items: &[NavigationItem],
        selected: usize,
        scheduler: &mut AnimationScheduler,
    ) -> bool {
        if self.is_populated() && self.populated == items {
            tracing::debug!("items already populated, skipping");
            return false;
        }
        if self.pending.as_ref().is_some_and(|p| p.items == items) {
            return false;
        }

        if self.width <= 0 {
            tracing::debug!(count = items.len(), "size unknown, deferring population");
            self.pending = Some(PendingPopulate {
                items: items.to_vec(),
                selected,
            });
            return false;
        }

        self.build(items.to_vec(), selected, scheduler);
        true
    }

    fn build(&mut self, items: Vec<NavigationItem>, selected: usize, scheduler: &mut AnimationScheduler) {
        self.cancel_animations(scheduler);
        self.pending = None;

        let selected = if selected < items.len() { selected } else { 0 };
        self.widths = self.engine.widths(self.policy, self.width, items.len());
        self.views = items
            .iter()
            .cloned()
            .enumerate()
            .map(|(position, item)| ItemView::new(item, position, self.style))
            .collect();
        self.populated = items;
        self.selected_index = selected;
        self.previous_index = selected;

        for (position, view) in self.views.iter_mut().enumerate() {
            let is_selected = position == selected;
            view.set_width(self.widths.for_item(is_selected));
            if is_selected {
                view.set_expanded(true, self.widths.active, false, scheduler);
            }
        }

        tracing::debug!(
            count = self.views.len(),
            selected,
            policy = ?self.policy,
            "items populated"
        );
    }

    /// React to a new container size
    ///
    /// A non-positive width leaves everything as is; a deferred population
    /// runs on the first positive width.
    pub fn on_size_changed(&mut self, width: i32, height: i32, scheduler: &mut AnimationScheduler) {
        if width <= 0 {
            tracing::debug!(width, "ignoring non-positive container width");
            return;
        }

        let changed = width != self.width;
        self.width = width;
        self.height = height;

        if let Some(pending) = self.pending.take() {
            self.build(pending.items, pending.selected, scheduler);
        } else if changed && !self.views.is_empty() {
            self.widths = self.engine.widths(self.policy, width, self.views.len());
            let selected = self.selected_index;
            for view in &mut self.views {
                let is_selected = view.position() == selected;
                view.set_width(self.widths.for_item(is_selected));
            }
        }
    }

    /// Move the selection, collapsing the old view then expanding the new one
    ///
    /// Out-of-range indices and the current index are no-ops.
    pub fn set_selected_index(
        &mut self,
        index: usize,
        animate: bool,
        scheduler: &mut AnimationScheduler,
    ) -> Transitions {
        let mut transitions = Transitions::new();

        if let Some(pending) = self.pending.as_mut() {
            if index < pending.items.len() {
                pending.selected = index;
            }
            return transitions;
        }

        if index >= self.views.len() {
            tracing::warn!(index, count = self.views.len(), "selection index out of range");
            return transitions;
        }
        if index == self.selected_index {
            return transitions;
        }

        let previous = self.selected_index;
        let widths = self.widths;
        if let Some(view) = self.views.get_mut(previous) {
            transitions.extend(view.set_expanded(false, widths.inactive, animate, scheduler));
        }
        if let Some(view) = self.views.get_mut(index) {
            transitions.extend(view.set_expanded(true, widths.active, animate, scheduler));
        }

        self.previous_index = previous;
        self.selected_index = index;
        tracing::trace!(previous, index, animate, "selection changed");
        transitions
    }

    /// Selected position, including a selection made while population waits
    pub fn selected_index(&self) -> usize {
        self.pending
            .as_ref()
            .map_or(self.selected_index, |pending| pending.selected)
    }

    pub fn previous_index(&self) -> usize {
        self.previous_index
    }

    /// Drop every view and reset the selection
    pub fn remove_all(&mut self, scheduler: &mut AnimationScheduler) {
        self.cancel_animations(scheduler);
        self.views.clear();
        self.populated.clear();
        self.pending = None;
        self.selected_index = 0;
        self.previous_index = 0;
        self.widths = ItemWidths::default();
    }

    /// Returns false when `index` is out of range
    pub fn set_item_enabled(&mut self, index: usize, enabled: bool) -> bool {
        if let Some(pending) = self.pending.as_mut() {
            return match pending.items.get_mut(index) {
                Some(item) => {
                    *item = item.clone().with_enabled(enabled);
                    true
                }
                None => false,
            };
        }
        match self.views.get_mut(index) {
            Some(view) => {
                view.set_enabled(enabled);
                true
            }
            None => false,
        }
    }

    /// Frames for every view: centered in a bar, stacked on a rail
    pub fn layout(&self) -> Vec<ItemFrame> {
        if self.policy.is_tablet() {
            let mut y = self.padding_top;
            return self
                .views
                .iter()
                .map(|view| {
                    let (_, height) = view.measure();
                    let frame = ItemFrame {
                        position: view.position(),
                        id: view.id(),
                        x: 0,
                        y,
                        width: self.width,
                        height,
                    };
                    y += height;
                    frame
                })
                .collect();
        }

        let total: i32 = self.views.iter().map(ItemView::width).sum();
        let mut x = ((self.width - total) / 2).max(0);
        self.views
            .iter()
            .map(|view| {
                let (width, height) = view.measure();
                let frame = ItemFrame {
                    position: view.position(),
                    id: view.id(),
                    x,
                    y: 0,
                    width,
                    height,
                };
                x += width;
                frame
            })
            .collect()
    }

    /// Position of the view hit by a point in container coordinates
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        self.layout()
            .into_iter()
            .find(|f| x >= f.x && x < f.x + f.width && y >= f.y && y < f.y + f.height)
            .map(|f| f.position)
    }

    pub fn find_by_id(&self, id: ItemId) -> Option<&ItemView> {
        self.views.iter().find(|view| view.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: ItemId) -> Option<&mut ItemView> {
        self.views.iter_mut().find(|view| view.id() == id)
    }

    pub fn views(&self) -> &[ItemView] {
        &self.views
    }

    pub fn view(&self, index: usize) -> Option<&ItemView> {
        self.views.get(index)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn is_populated(&self) -> bool {
        !self.views.is_empty()
    }

    /// Population is waiting for a size
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn widths(&self) -> ItemWidths {
        self.widths
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    /// Advance item transitions; returns true while any is still running
    pub fn on_animation_frame(&mut self, scheduler: &mut AnimationScheduler) -> bool {
        let mut animating = false;
        for view in &mut self.views {
            animating |= view.on_animation_frame(scheduler);
        }
        animating
    }

    /// Stop every transition, leaving each view at its target
    pub fn cancel_animations(&mut self, scheduler: &mut AnimationScheduler) {
        for view in &mut self.views {
            view.settle(scheduler);
        }
    }

    /// Positions of views that asked for a redraw, clearing the requests
    pub fn take_redraws(&mut self) -> SmallVec<[usize; 5]> {
        self.views
            .iter_mut()
            .filter_map(|view| view.take_redraw().then(|| view.position()))
            .collect()
    }
}
