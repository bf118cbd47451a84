//! Badge overlay
//!
//! Tracks which items show a badge. Changes report the affected item so the
//! widget can redraw exactly that view instead of relaying out the bar.

use navbar_core::Color;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// How badges are drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    /// A plain dot
    #[default]
    Dot,
    /// A dot with a count rendered as text
    Counter,
}

/// What one item's badge displays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeContent {
    pub count: u32,
}

impl BadgeContent {
    /// Text drawn inside a counter badge
    pub fn label(&self) -> String {
        if self.count > 99 {
            "99+".to_string()
        } else {
            self.count.to_string()
        }
    }
}

impl Default for BadgeContent {
    fn default() -> Self {
        Self { count: 1 }
    }
}

/// Result of a badge mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeChange {
    /// The item's badge appeared, disappeared, or changed; redraw it
    Redraw(ItemId),
    /// Nothing visible changed
    Unchanged,
}

impl BadgeChange {
    pub fn item(&self) -> Option<ItemId> {
        match self {
            BadgeChange::Redraw(id) => Some(*id),
            BadgeChange::Unchanged => None,
        }
    }
}

/// Saved badge set
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BadgeSnapshot {
    pub kind: BadgeKind,
    /// `(item id, count)` pairs in ascending id order
    pub badges: Vec<(ItemId, u32)>,
}

/// Sparse set of items with an active badge
#[derive(Clone, Debug)]
pub struct BadgeOverlay {
    kind: BadgeKind,
    color: Color,
    badges: FxHashMap<ItemId, BadgeContent>,
}

impl BadgeOverlay {
    pub fn new(kind: BadgeKind, color: Color) -> Self {
        Self {
            kind,
            color,
            badges: FxHashMap::default(),
        }
    }

    /// Dot badges in the default color
    pub fn dots() -> Self {
        Self::new(BadgeKind::Dot, Color::RED)
    }

    /// Counter badges in the default color
    pub fn counters() -> Self {
        Self::new(BadgeKind::Counter, Color::RED)
    }

    pub fn kind(&self) -> BadgeKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Show a badge on `id`
    pub fn show(&mut self, id: ItemId) -> BadgeChange {
        if self.badges.contains_key(&id) {
            return BadgeChange::Unchanged;
        }
        self.badges.insert(id, BadgeContent::default());
        tracing::trace!(%id, "badge shown");
        BadgeChange::Redraw(id)
    }

    /// Show a badge with a count, or update the count of a visible badge
    ///
    /// An existing badge is updated in place and never passes through a
    /// hidden state.
    pub fn show_count(&mut self, id: ItemId, count: u32) -> BadgeChange {
        let content = BadgeContent { count };
        match self.badges.insert(id, content) {
            Some(previous) if previous == content => BadgeChange::Unchanged,
            _ => {
                tracing::trace!(%id, count, "badge count set");
                BadgeChange::Redraw(id)
            }
        }
    }

    pub fn remove(&mut self, id: ItemId) -> BadgeChange {
        match self.badges.remove(&id) {
            Some(_) => {
                tracing::trace!(%id, "badge removed");
                BadgeChange::Redraw(id)
            }
            None => BadgeChange::Unchanged,
        }
    }

    pub fn has_badge(&self, id: ItemId) -> bool {
        self.badges.contains_key(&id)
    }

    pub fn badge(&self, id: ItemId) -> Option<BadgeContent> {
        self.badges.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    /// Drop every badge, returning the items that need a redraw
    pub fn clear(&mut self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.badges.drain().map(|(id, _)| id).collect();
        ids.sort();
        ids
    }

    pub fn snapshot(&self) -> BadgeSnapshot {
        let mut badges: Vec<(ItemId, u32)> = self
            .badges
            .iter()
            .map(|(id, content)| (*id, content.count))
            .collect();
        badges.sort();
        BadgeSnapshot {
            kind: self.kind,
            badges,
        }
    }

    /// Replace the badge set with a saved one
    pub fn restore(&mut self, snapshot: &BadgeSnapshot) {
        self.kind = snapshot.kind;
        self.badges = snapshot
            .badges
            .iter()
            .map(|(id, count)| (*id, BadgeContent { count: *count }))
            .collect();
    }
}

impl Default for BadgeOverlay {
    fn default() -> Self {
        Self::dots()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_remove_report_single_item() {
        let mut overlay = BadgeOverlay::dots();
        assert_eq!(overlay.show(ItemId(3)), BadgeChange::Redraw(ItemId(3)));
        assert_eq!(overlay.show(ItemId(3)), BadgeChange::Unchanged);
        assert!(overlay.has_badge(ItemId(3)));
        assert!(!overlay.has_badge(ItemId(4)));

        assert_eq!(overlay.remove(ItemId(3)), BadgeChange::Redraw(ItemId(3)));
        assert_eq!(overlay.remove(ItemId(3)), BadgeChange::Unchanged);
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_count_update_stays_visible() {
        let mut overlay = BadgeOverlay::counters();
        overlay.show_count(ItemId(42), 1);
        assert_eq!(overlay.show_count(ItemId(42), 7), BadgeChange::Redraw(ItemId(42)));
        assert!(overlay.has_badge(ItemId(42)));
        assert_eq!(overlay.badge(ItemId(42)).map(|b| b.count), Some(7));
        assert_eq!(overlay.show_count(ItemId(42), 7), BadgeChange::Unchanged);
    }

    #[test]
    fn test_counter_label() {
        assert_eq!(BadgeContent { count: 5 }.label(), "5");
        assert_eq!(BadgeContent { count: 250 }.label(), "99+");
    }

    #[test]
    fn test_snapshot_restore() {
        let mut overlay = BadgeOverlay::counters();
        overlay.show_count(ItemId(2), 4);
        overlay.show(ItemId(1));

        let snapshot = overlay.snapshot();
        assert_eq!(snapshot.badges, vec![(ItemId(1), 1), (ItemId(2), 4)]);

        let mut restored = BadgeOverlay::dots();
        restored.restore(&snapshot);
        assert_eq!(restored.kind(), BadgeKind::Counter);
        assert_eq!(restored.badge(ItemId(2)).map(|b| b.count), Some(4));
        assert_eq!(restored.clear(), vec![ItemId(1), ItemId(2)]);
    }
}
