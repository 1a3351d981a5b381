//! Pixel-grid rounding.
//!
//! Every derived length (item width, side padding, snap offsets, scroll
//! targets) is snapped to the smallest addressable pixel unit so adjacent
//! items never sit on sub-pixel seams.

/// Device pixel density used to snap layout units to the pixel grid.
///
/// The scale is the number of device pixels per layout unit: `1.0` on a
/// plain display, `2.0`/`3.0` on high-density displays. A scale of `1.0`
/// makes [`round_to_nearest`](Self::round_to_nearest) plain integer
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScale(f64);

impl PixelScale {
    /// Create a pixel scale. Non-positive scales fall back to `1.0`.
    pub fn new(scale: f64) -> Self {
        if scale > 0.0 {
            Self(scale)
        } else {
            Self(1.0)
        }
    }

    /// Pixels per layout unit.
    pub fn get(&self) -> f64 {
        self.0
    }

    /// Round a layout length to the nearest addressable pixel.
    ///
    /// Uses `f64::round`, which rounds half away from zero. For the
    /// non-negative lengths the picker derives this is round-half-up, so an
    /// offset resting exactly between two snap points resolves to the
    /// higher index. The tie-break is pinned by tests; changing it changes
    /// which item wins at exact midpoints.
    pub fn round_to_nearest(&self, value: f64) -> f64 {
        (value * self.0).round() / self.0
    }
}

impl Default for PixelScale {
    fn default() -> Self {
        Self(1.0)
    }
}
