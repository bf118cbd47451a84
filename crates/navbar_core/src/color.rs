//! RGBA colors
//!
//! Colors are stored as normalized `f32` channels and can be packed to and
//! from 32-bit ARGB words. Interpolation happens per channel, so a color
//! transition reads the same as a platform ARGB evaluator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An RGBA color with channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal
    pub fn from_hex(hex: u32) -> Self {
        Self::from_argb(0xFF00_0000 | (hex & 0x00FF_FFFF))
    }

    /// Color from a packed `0xAARRGGBB` word
    pub fn from_argb(argb: u32) -> Self {
        let a = ((argb >> 24) & 0xFF) as f32 / 255.0;
        let r = ((argb >> 16) & 0xFF) as f32 / 255.0;
        let g = ((argb >> 8) & 0xFF) as f32 / 255.0;
        let b = (argb & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Pack into a `0xAARRGGBB` word
    pub fn to_argb(&self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.a) << 24) | (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Alpha channel as an 8-bit value
    pub fn alpha_u8(&self) -> u8 {
        (self.to_argb() >> 24) as u8
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Same color with its 8-bit alpha halved (integer division)
    pub fn half_alpha(&self) -> Self {
        let argb = self.to_argb();
        let alpha = (argb >> 24) / 2;
        Self::from_argb((alpha << 24) | (argb & 0x00FF_FFFF))
    }

    /// Per-channel linear interpolation, `t` clamped to `0.0..=1.0`
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    /// Parses `#RRGGBB` or `#AARRGGBB` (the leading `#` is optional)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        let invalid = || CoreError::InvalidColor(s.to_string());
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Color::from_hex(value)),
            8 => Ok(Color::from_argb(value)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
