//! Default palette

use navbar_core::Color;

/// Theme colors the widget falls back to when a menu leaves one unset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Regular foreground (fixed items on a light surface)
    pub foreground: Color,
    /// Foreground on a colored surface (shifting items)
    pub foreground_inverse: Color,
    /// Brand color behind shifting bars
    pub primary: Color,
    /// Surface behind fixed bars and rails
    pub window_background: Color,
    pub badge: Color,
    pub ripple_shifting: Color,
    pub ripple_fixed: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Color::from_argb(0xDE00_0000),
            foreground_inverse: Color::WHITE,
            primary: Color::from_hex(0x3F51B5),
            window_background: Color::from_hex(0xFAFAFA),
            badge: Color::RED,
            ripple_shifting: Color::from_argb(0x33FF_FFFF),
            ripple_fixed: Color::from_argb(0x1F00_0000),
        }
    }
}
