//! Dependent view registry
//!
//! Views whose layout follows the bar (snackbars, floating buttons) are
//! registered with their original layout values. Every bar movement
//! recomputes their margins; unregistering hands back the original values
//! so the host can restore the view.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a registered dependent view
    pub struct DependentId;
}

/// What kind of view follows the bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DependentKind {
    /// Keeps its bottom edge on the bar's visible top edge
    Snackbar,
    /// Keeps its original margin above the bar and any snackbar
    FloatingButton,
    /// Tracked for bookkeeping, never moved
    Generic,
}

/// Layout values owned by the behavior while a view is registered
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DependentLayout {
    pub bottom_margin: i32,
    pub translation_y: f32,
    /// Measured height, reported by the host
    pub height: i32,
    /// Floating buttons are hidden with the bar over a navigation inset
    pub hidden: bool,
}

impl DependentLayout {
    /// Part of a snackbar that currently sits above its bottom edge
    fn raised_extent(&self) -> i32 {
        (self.height as f32 - self.translation_y).max(0.0) as i32
    }
}

/// Bar geometry dependents are laid out against
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub height: i32,
    pub bottom_inset: i32,
    pub translation: f32,
    /// Shown or showing
    pub expanded: bool,
}

impl Default for BarGeometry {
    fn default() -> Self {
        Self {
            height: 0,
            bottom_inset: 0,
            translation: 0.0,
            expanded: true,
        }
    }
}

impl BarGeometry {
    /// Height of the bar still on screen, insets included
    pub fn visible_extent(&self) -> i32 {
        let scrolled = (self.translation - self.bottom_inset as f32).max(0.0);
        (self.height as f32 + self.bottom_inset as f32 - scrolled) as i32
    }
}

#[derive(Clone, Copy, Debug)]
struct DependentView {
    kind: DependentKind,
    original: DependentLayout,
    current: DependentLayout,
}

impl DependentView {
    /// `snackbars` is the raised extent of every snackbar above the bar
    fn relayout(&mut self, bar: &BarGeometry, snackbars: i32) -> bool {
        let (bottom_margin, hidden) = match self.kind {
            DependentKind::Snackbar => (bar.visible_extent(), false),
            DependentKind::FloatingButton => (
                self.original.bottom_margin + bar.visible_extent() + snackbars,
                bar.bottom_inset > 0 && !bar.expanded,
            ),
            DependentKind::Generic => return false,
        };
        if self.current.bottom_margin == bottom_margin && self.current.hidden == hidden {
            return false;
        }
        self.current.bottom_margin = bottom_margin;
        self.current.hidden = hidden;
        true
    }
}

/// Registry of views that follow the bar
#[derive(Debug, Default)]
pub struct DependentRegistry {
    views: SlotMap<DependentId, DependentView>,
    bar: BarGeometry,
}

impl DependentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a view, laying it out against the bar right away
    pub fn register(&mut self, kind: DependentKind, layout: DependentLayout, bar: &BarGeometry) -> DependentId {
        let id = self.views.insert(DependentView {
            kind,
            original: layout,
            current: layout,
        });
        tracing::debug!(?id, ?kind, "dependent registered");
        self.on_bar_changed(bar);
        id
    }

    /// Stop tracking a view and return the layout it had when registered
    ///
    /// Unknown or already removed handles return `None`.
    pub fn unregister(&mut self, id: DependentId) -> Option<DependentLayout> {
        let view = self.views.remove(id)?;
        tracing::debug!(?id, kind = ?view.kind, "dependent unregistered");
        if view.kind == DependentKind::Snackbar {
            let bar = self.bar;
            self.relayout_buttons(&bar, None);
        }
        Some(view.original)
    }

    /// The host measured or moved a view (a snackbar sliding in or out)
    ///
    /// Returns the views whose margin moved as a result.
    pub fn update(
        &mut self,
        id: DependentId,
        height: i32,
        translation_y: f32,
        bar: &BarGeometry,
    ) -> SmallVec<[DependentId; 4]> {
        let Some(view) = self.views.get_mut(id) else {
            return SmallVec::new();
        };
        view.current.height = height;
        view.current.translation_y = translation_y;
        self.on_bar_changed(bar)
    }

    pub fn layout(&self, id: DependentId) -> Option<DependentLayout> {
        self.views.get(id).map(|view| view.current)
    }

    pub fn kind(&self, id: DependentId) -> Option<DependentKind> {
        self.views.get(id).map(|view| view.kind)
    }

    /// Re-run layout for every view; returns those whose layout moved
    ///
    /// Snackbars go first so floating buttons can stack above them.
    pub fn on_bar_changed(&mut self, bar: &BarGeometry) -> SmallVec<[DependentId; 4]> {
        self.bar = *bar;
        let mut moved: SmallVec<[DependentId; 4]> = self
            .views
            .iter_mut()
            .filter(|(_, view)| view.kind == DependentKind::Snackbar)
            .filter_map(|(id, view)| view.relayout(bar, 0).then_some(id))
            .collect();
        self.relayout_buttons(bar, Some(&mut moved));
        moved
    }

    fn relayout_buttons(&mut self, bar: &BarGeometry, moved: Option<&mut SmallVec<[DependentId; 4]>>) {
        let snackbars: i32 = self
            .views
            .values()
            .filter(|view| view.kind == DependentKind::Snackbar)
            .map(|view| view.current.raised_extent())
            .sum();
        let mut changed = SmallVec::<[DependentId; 4]>::new();
        for (id, view) in self.views.iter_mut() {
            if view.kind != DependentKind::Snackbar && view.relayout(bar, snackbars) {
                changed.push(id);
            }
        }
        if let Some(moved) = moved {
            moved.extend(changed);
        }
    }

    /// Drop every view, returning the layouts to restore
    pub fn clear(&mut self) -> Vec<(DependentId, DependentLayout)> {
        self.views.drain().map(|(id, view)| (id, view.original)).collect()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(translation: f32) -> BarGeometry {
        BarGeometry {
            height: 56,
            bottom_inset: 48,
            translation,
            expanded: translation < 104.0,
        }
    }

    #[test]
    fn test_visible_extent_tracks_translation() {
        assert_eq!(bar(0.0).visible_extent(), 104);
        assert_eq!(bar(48.0).visible_extent(), 104);
        assert_eq!(bar(80.0).visible_extent(), 72);
        assert_eq!(bar(104.0).visible_extent(), 48);
    }

    #[test]
    fn test_snackbar_and_button_follow_bar() {
        let mut registry = DependentRegistry::new();
        let snackbar = registry.register(DependentKind::Snackbar, DependentLayout::default(), &bar(0.0));
        let fab = registry.register(
            DependentKind::FloatingButton,
            DependentLayout {
                bottom_margin: 16,
                ..Default::default()
            },
            &bar(0.0),
        );
        let generic = registry.register(DependentKind::Generic, DependentLayout::default(), &bar(0.0));

        assert_eq!(registry.layout(snackbar).map(|l| l.bottom_margin), Some(104));
        assert_eq!(registry.layout(fab).map(|l| l.bottom_margin), Some(120));

        let moved = registry.on_bar_changed(&bar(104.0));
        assert_eq!(moved.len(), 2);
        assert_eq!(registry.layout(snackbar).map(|l| l.bottom_margin), Some(48));
        assert_eq!(registry.layout(fab).map(|l| l.bottom_margin), Some(64));
        assert_eq!(registry.layout(fab).map(|l| l.hidden), Some(true));
        assert_eq!(registry.layout(generic).map(|l| l.bottom_margin), Some(0));

        assert!(registry.on_bar_changed(&bar(104.0)).is_empty());
    }

    #[test]
    fn test_unregister_returns_original() {
        let mut registry = DependentRegistry::new();
        let original = DependentLayout {
            bottom_margin: 24,
            translation_y: 3.0,
            ..Default::default()
        };
        let id = registry.register(DependentKind::FloatingButton, original, &bar(0.0));

        assert_eq!(registry.unregister(id), Some(original));
        assert_eq!(registry.unregister(id), None);
        assert_eq!(registry.layout(id), None);
        assert!(registry.on_bar_changed(&bar(10.0)).is_empty());
    }

    #[test]
    fn test_button_stacks_above_snackbar() {
        let mut registry = DependentRegistry::new();
        let fab = registry.register(
            DependentKind::FloatingButton,
            DependentLayout {
                bottom_margin: 16,
                ..Default::default()
            },
            &bar(0.0),
        );
        // Measured but still slid below its resting position
        let snackbar = registry.register(
            DependentKind::Snackbar,
            DependentLayout {
                height: 40,
                translation_y: 40.0,
                ..Default::default()
            },
            &bar(0.0),
        );
        assert_eq!(registry.layout(fab).map(|l| l.bottom_margin), Some(120));

        let moved = registry.update(snackbar, 40, 0.0, &bar(0.0));
        assert_eq!(moved.as_slice(), &[fab]);
        let snackbar_top = registry.layout(snackbar).map(|l| l.bottom_margin + l.height);
        assert_eq!(snackbar_top, Some(144));
        assert_eq!(registry.layout(fab).map(|l| l.bottom_margin), Some(160));

        registry.on_bar_changed(&bar(104.0));
        assert_eq!(registry.layout(snackbar).map(|l| l.bottom_margin), Some(48));
        assert_eq!(registry.layout(fab).map(|l| l.bottom_margin), Some(104));

        registry.unregister(snackbar);
        assert_eq!(registry.layout(fab).map(|l| l.bottom_margin), Some(64));
    }
}
