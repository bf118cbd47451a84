//! Animation scheduler
//!
//! Owns every running tween and advances them each frame. Callers keep a
//! `TweenId` as their handle: cancelling removes the tween, after which the
//! handle no longer resolves and any late frame work is skipped.

use std::time::Instant;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::tween::Tween;

new_key_type! {
    /// Handle to a tween owned by the scheduler
    pub struct TweenId;
}

/// The animation scheduler that ticks all active tweens
pub struct AnimationScheduler {
    tweens: SlotMap<TweenId, Tween>,
    last_frame: Instant,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    /// Register a tween and return its handle
    pub fn start(&mut self, tween: Tween) -> TweenId {
        self.tweens.insert(tween)
    }

    /// Cancel a tween; returns false if the handle was already void
    pub fn cancel(&mut self, id: TweenId) -> bool {
        let cancelled = self.tweens.remove(id).is_some();
        if cancelled {
            tracing::trace!(?id, "tween cancelled");
        }
        cancelled
    }

    /// Remove a tween that has been fully handled by its owner
    pub fn finish(&mut self, id: TweenId) -> Option<Tween> {
        self.tweens.remove(id)
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(id)
    }

    /// Whether the handle still refers to a live tween
    pub fn contains(&self, id: TweenId) -> bool {
        self.tweens.contains_key(id)
    }

    /// Advance every tween by `dt_ms`, returning the ones that just finished
    ///
    /// Finished tweens stay registered until their owner calls `finish`, so
    /// the owner can read the final value on its next frame.
    pub fn tick(&mut self, dt_ms: f32) -> SmallVec<[TweenId; 4]> {
        let mut finished = SmallVec::new();
        for (id, tween) in self.tweens.iter_mut() {
            if tween.is_playing() && tween.tick(dt_ms) {
                finished.push(id);
            }
        }
        finished
    }

    /// Advance using wall-clock time since the previous frame
    pub fn tick_frame(&mut self) -> SmallVec<[TweenId; 4]> {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        self.tick(dt_ms)
    }

    /// Check if any tweens are still playing
    pub fn has_active_animations(&self) -> bool {
        self.tweens.iter().any(|(_, t)| t.is_playing())
    }

    /// Drop every tween, voiding all outstanding handles
    pub fn clear(&mut self) {
        if !self.tweens.is_empty() {
            tracing::debug!(count = self.tweens.len(), "clearing animations");
        }
        self.tweens.clear();
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_reports_finished_once() {
        let mut scheduler = AnimationScheduler::new();
        let short = scheduler.start(Tween::new(0.0, 1.0, 100));
        let long = scheduler.start(Tween::new(0.0, 1.0, 300));

        assert!(scheduler.tick(50.0).is_empty());
        assert_eq!(scheduler.tick(60.0).as_slice(), &[short]);
        assert!(scheduler.tick(60.0).is_empty());
        assert!(scheduler.has_active_animations());

        assert_eq!(scheduler.tick(200.0).as_slice(), &[long]);
        assert!(!scheduler.has_active_animations());
        assert_eq!(scheduler.len(), 2);
    }

    #[test]
    fn test_cancelled_handle_is_void() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.start(Tween::new(0.0, 10.0, 100));
        assert!(scheduler.contains(id));

        assert!(scheduler.cancel(id));
        assert!(!scheduler.contains(id));
        assert!(scheduler.get(id).is_none());
        assert!(!scheduler.cancel(id));

        // A new tween never resurrects the old handle
        let other = scheduler.start(Tween::new(0.0, 10.0, 100));
        assert_ne!(id, other);
        assert!(scheduler.get(id).is_none());
    }

    #[test]
    fn test_finish_and_clear() {
        let mut scheduler = AnimationScheduler::new();
        let a = scheduler.start(Tween::new(0.0, 1.0, 10));
        let b = scheduler.start(Tween::new(0.0, 1.0, 10));
        scheduler.tick(10.0);

        let done = scheduler.finish(a).map(|t| t.value());
        assert_eq!(done, Some(1.0));
        assert_eq!(scheduler.len(), 1);

        scheduler.clear();
        assert!(scheduler.is_empty());
        assert!(!scheduler.contains(b));
    }
}
