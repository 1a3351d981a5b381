//! Geometry Calculator - Derived picker dimensions.
//!
//! Item width is defined as `1/visible_item_count` of the container so that
//! exactly `visible_item_count` items are visible at rest. The side padding
//! centers the first and last items under the selection point (the
//! container's horizontal midpoint), and each item gets one snap offset the
//! scroll surface is constrained to settle on.

use super::pixel::PixelScale;

/// Derived picker geometry.
///
/// Always a pure function of `(container width, visible-item count, item
/// count, pixel scale)` - never stored independently of its inputs. An
/// unmeasured container produces `item_width == 0`, which every consumer
/// must treat as "geometry not ready": no index resolution, no side
/// effects, until a nonzero measurement arrives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geometry {
    /// Width of one item, snapped to the pixel grid. `0` until measured.
    pub item_width: f64,
    /// Horizontal padding on each side of the item row.
    pub side_padding: f64,
    /// One settle offset per item: `round_px(i * item_width)`.
    pub snap_offsets: Vec<f64>,
}

impl Geometry {
    /// Geometry for an unmeasured container.
    pub fn not_ready() -> Self {
        Self::default()
    }

    /// Compute geometry from the container measurement and configuration.
    ///
    /// `container_width <= 0` or `visible_item_count == 0` yields a
    /// not-ready geometry rather than an error.
    pub fn compute(
        container_width: f64,
        visible_item_count: usize,
        item_count: usize,
        scale: PixelScale,
    ) -> Self {
        if container_width <= 0.0 || visible_item_count == 0 {
            return Self::not_ready();
        }

        let item_width = scale.round_to_nearest(container_width / visible_item_count as f64);
        let side_padding = scale.round_to_nearest(container_width / 2.0 - item_width / 2.0);
        let snap_offsets = (0..item_count)
            .map(|index| scale.round_to_nearest(index as f64 * item_width))
            .collect();

        Self {
            item_width,
            side_padding,
            snap_offsets,
        }
    }

    /// Whether a usable measurement has arrived.
    pub fn is_ready(&self) -> bool {
        self.item_width > 0.0
    }

    /// Item width before pixel snapping.
    ///
    /// The initial settle targets `initial_index * raw width` directly so
    /// the first jump doesn't accumulate two rounding steps.
    pub fn raw_item_width(container_width: f64, visible_item_count: usize) -> f64 {
        if visible_item_count == 0 {
            return 0.0;
        }
        container_width / visible_item_count as f64
    }
}
