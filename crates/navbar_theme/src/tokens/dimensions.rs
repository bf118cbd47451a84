//! Dimension tokens (dp)

/// Pixels per density-independent pixel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density(pub f32);

impl Density {
    /// Convert dp to whole pixels, truncating
    pub fn to_px(&self, dp: f32) -> i32 {
        (dp * self.0) as i32
    }
}

impl Default for Density {
    fn default() -> Self {
        Density(1.0)
    }
}

/// Width bounds for shifting items (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShiftingWidths {
    pub max_active: f32,
    pub min_active: f32,
    pub max_inactive: f32,
    pub min_inactive: f32,
}

/// Width bounds for fixed items (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedWidths {
    pub max_active: f32,
    pub min_active: f32,
}

/// Inner geometry of a fixed item (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedItemMetrics {
    pub padding_top_active: f32,
    pub padding_top_inactive: f32,
    pub padding_bottom: f32,
    pub padding_horizontal: f32,
    pub icon_size: f32,
    pub text_size_inactive: f32,
    pub text_size_active: f32,
}

impl FixedItemMetrics {
    /// Label scale applied to the selected item
    pub fn active_text_scale(&self) -> f32 {
        self.text_size_active / self.text_size_inactive
    }
}

/// Inner geometry of a shifting item (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShiftingItemMetrics {
    pub padding_top: f32,
    pub padding_bottom_active: f32,
    pub padding_bottom_inactive: f32,
    pub icon_size: f32,
    pub text_size: f32,
}

/// Inner geometry of a navigation rail item (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabletItemMetrics {
    pub item_height: f32,
    pub layout_padding_top: f32,
    pub icon_size: f32,
}

/// All dimension tokens
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Height of a bottom bar, excluding shadow and insets
    pub bar_height: f32,
    /// Width of a side rail
    pub rail_width: f32,
    /// Shadow drawn above a bottom bar
    pub top_shadow: f32,
    pub shifting: ShiftingWidths,
    pub fixed: FixedWidths,
    pub fixed_item: FixedItemMetrics,
    pub shifting_item: ShiftingItemMetrics,
    pub tablet_item: TabletItemMetrics,
    pub badge_size: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            bar_height: 56.0,
            rail_width: 72.0,
            top_shadow: 4.0,
            shifting: ShiftingWidths {
                max_active: 168.0,
                min_active: 96.0,
                max_inactive: 96.0,
                min_inactive: 64.0,
            },
            fixed: FixedWidths {
                max_active: 168.0,
                min_active: 80.0,
            },
            fixed_item: FixedItemMetrics {
                padding_top_active: 6.0,
                padding_top_inactive: 8.0,
                padding_bottom: 10.0,
                padding_horizontal: 12.0,
                icon_size: 24.0,
                text_size_inactive: 12.0,
                text_size_active: 14.0,
            },
            shifting_item: ShiftingItemMetrics {
                padding_top: 8.0,
                padding_bottom_active: 10.0,
                padding_bottom_inactive: 16.0,
                icon_size: 24.0,
                text_size: 14.0,
            },
            tablet_item: TabletItemMetrics {
                item_height: 56.0,
                layout_padding_top: 8.0,
                icon_size: 24.0,
            },
            badge_size: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_truncates() {
        assert_eq!(Density(1.0).to_px(56.0), 56);
        assert_eq!(Density(1.5).to_px(57.0), 85);
        assert_eq!(Density(2.625).to_px(56.0), 147);
    }

    #[test]
    fn test_active_text_scale() {
        let scale = Dimensions::default().fixed_item.active_text_scale();
        assert!((scale - 14.0 / 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bounds_are_ordered() {
        let dims = Dimensions::default();
        assert!(dims.shifting.min_inactive <= dims.shifting.max_inactive);
        assert!(dims.shifting.min_active <= dims.shifting.max_active);
        assert!(dims.fixed.min_active <= dims.fixed.max_active);
    }
}
