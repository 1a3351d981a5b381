//! Positioner - Initial settle and programmatic scrolls.
//!
//! The positioner only issues scroll commands; it never writes selection
//! state. The offset change a command produces flows back through the
//! normal sample→resolve→track path, so a tap's visual and notification
//! effects ride the same code path as a drag.

use std::cell::Cell;
use std::rc::Rc;

use crate::layout::{Geometry, PixelScale};
use crate::surface::ScrollSurface;

/// Issues scroll commands against the collaborating surface.
pub struct Positioner {
    surface: Rc<dyn ScrollSurface>,
    scale: PixelScale,
    settled: Cell<bool>,
}

impl Positioner {
    pub fn new(surface: Rc<dyn ScrollSurface>, scale: PixelScale) -> Self {
        Self {
            surface,
            scale,
            settled: Cell::new(false),
        }
    }

    /// One-shot jump to the configured initial index.
    ///
    /// Runs once, on the first usable width measurement. The target uses
    /// the raw (unrounded) item width - going through the rounded geometry
    /// here would stack two rounding steps on first layout and drift the
    /// settle point off the item's true center.
    pub fn initial_settle(
        &self,
        container_width: f64,
        visible_item_count: usize,
        item_count: usize,
        initial_index: usize,
    ) {
        if self.settled.get() || container_width <= 0.0 || item_count == 0 {
            return;
        }

        let raw_width = Geometry::raw_item_width(container_width, visible_item_count);
        if raw_width <= 0.0 {
            return;
        }

        self.settled.set(true);
        let safe_index = initial_index.min(item_count - 1);
        let target = self.scale.round_to_nearest(safe_index as f64 * raw_width);
        self.surface.scroll_to(target, false);
    }

    /// Whether the initial settle already ran.
    pub fn has_settled(&self) -> bool {
        self.settled.get()
    }

    /// Animated scroll to the snap offset of `index`, clamped into bounds.
    ///
    /// Suppressed while geometry is not ready or the sequence is empty.
    pub fn scroll_to_index(&self, geometry: &Geometry, item_count: usize, index: usize) {
        if !geometry.is_ready() || item_count == 0 {
            return;
        }

        let safe_index = index.min(item_count - 1);
        let target = self
            .scale
            .round_to_nearest(safe_index as f64 * geometry.item_width);
        self.surface.scroll_to(target, true);
    }
}
