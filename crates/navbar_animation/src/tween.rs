//! Single-value tweens
//!
//! A tween interpolates from a start value to an end value over a fixed
//! duration. It is advanced explicitly with `tick`, so frame timing stays
//! under the caller's control.

use crate::easing::Easing;

/// A time-based interpolation between two values
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: u32,
    elapsed_ms: f32,
    easing: Easing,
    playing: bool,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
            easing: Easing::Linear,
            playing: duration_ms > 0,
        }
    }

    /// Unit tween from 0.0 to 1.0, for driving several properties in lockstep
    pub fn unit(duration_ms: u32) -> Self {
        Self::new(0.0, 1.0, duration_ms)
    }

    /// Builder: set the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        !self.playing
    }

    /// Linear time progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Eased progress (0.0 to 1.0)
    pub fn fraction(&self) -> f32 {
        self.easing.apply(self.progress())
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.fraction()
    }

    /// Advance by delta time (in milliseconds); returns true once finished
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return true;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.playing = false;
        }
        !self.playing
    }
}
