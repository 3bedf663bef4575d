use egui::Color32;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Thickness bounds used when no config is supplied
pub const DEFAULT_THICKNESS_RANGE: RangeInclusive<f32> = 1.0..=50.0;
pub const DEFAULT_THICKNESS: f32 = 5.0;
pub const DEFAULT_COLOR: Color32 = Color32::BLUE;

/// The color and thickness new segments are drawn with.
///
/// Segments snapshot these values when they are created, so changing the
/// brush mid-stroke only affects the segments that follow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredBrush")]
pub struct BrushState {
    color: Color32,
    thickness: f32,
    #[serde(skip_serializing)]
    thickness_range: RangeInclusive<f32>,
}

// Persisted form; goes through the clamping constructor on load
#[derive(Deserialize)]
struct StoredBrush {
    color: Color32,
    thickness: f32,
}

impl From<StoredBrush> for BrushState {
    fn from(stored: StoredBrush) -> Self {
        Self::new(stored.color, stored.thickness)
    }
}

impl Default for BrushState {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR, DEFAULT_THICKNESS)
    }
}

/// Finite, positive and not inverted
pub fn is_valid_thickness_range(range: &RangeInclusive<f32>) -> bool {
    let (min, max) = (*range.start(), *range.end());
    min.is_finite() && max.is_finite() && min > 0.0 && min <= max
}

impl BrushState {
    pub fn new(color: Color32, thickness: f32) -> Self {
        Self::with_range(color, thickness, DEFAULT_THICKNESS_RANGE)
    }

    /// Create a brush whose thickness is always kept inside `range`.
    /// An invalid range falls back to [`DEFAULT_THICKNESS_RANGE`].
    pub fn with_range(color: Color32, thickness: f32, range: RangeInclusive<f32>) -> Self {
        let range = if is_valid_thickness_range(&range) {
            range
        } else {
            log::warn!("Invalid thickness range {range:?}, using default");
            DEFAULT_THICKNESS_RANGE
        };
        let mut brush = Self {
            color,
            thickness: *range.start(),
            thickness_range: range,
        };
        brush.set_thickness(thickness);
        brush
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Set the thickness, clamped into the configured range.
    /// Non-finite values are ignored.
    pub fn set_thickness(&mut self, thickness: f32) {
        if !thickness.is_finite() {
            log::warn!("Ignoring non-finite brush thickness {thickness}");
            return;
        }
        self.thickness = thickness.clamp(*self.thickness_range.start(), *self.thickness_range.end());
    }

    pub fn thickness_range(&self) -> RangeInclusive<f32> {
        self.thickness_range.clone()
    }

    /// Replace the allowed range and re-clamp the current thickness into it.
    /// An invalid range is ignored and the previous one kept.
    pub fn set_thickness_range(&mut self, range: RangeInclusive<f32>) {
        if !is_valid_thickness_range(&range) {
            log::warn!("Ignoring invalid thickness range {range:?}");
            return;
        }
        self.thickness_range = range;
        self.set_thickness(self.thickness);
    }
}
