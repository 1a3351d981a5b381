//! Horizontal Picker - Widget wiring.
//!
//! Assembles the engine: geometry state, selection tracker, positioner,
//! effect queue, and per-cell focus flags. The data flow is one straight
//! pipe:
//!
//! ```text
//! offset samples → resolve_index → SelectionTracker → EffectQueue → callbacks
//!                                        │
//!                                        └→ FocusFlag (per cell) → shell
//! ```
//!
//! Layout width and configuration flow once (and on resize) into the
//! geometry, whose outputs feed both resolution and positioning. A tap
//! never writes selection state directly - it only scrolls, and the
//! selection follows the offset like any drag.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::layout::{Geometry, PixelScale, resolve_index};
use crate::pipeline::{EffectQueue, PickerEvent};
use crate::state::{FocusFlag, Positioner, SelectionTracker};
use crate::style::ItemStyle;
use crate::surface::ScrollSurface;
use crate::types::PickerItem;

use super::cell::PickerCell;
use super::types::{ChangeCallback, Cleanup, HapticCallback, PickerProps};

// =============================================================================
// Inner State
// =============================================================================

struct PickerInner {
    items: RefCell<Vec<PickerItem>>,
    visible_item_count: usize,
    initial_index: usize,
    scale: PixelScale,
    container_width: Cell<f64>,
    geometry: RefCell<Geometry>,
    tracker: SelectionTracker,
    positioner: Positioner,
    queue: EffectQueue,
    on_change: Option<ChangeCallback>,
    on_haptic: Option<HapticCallback>,
    container_style: Option<ItemStyle>,
    item_style: Option<ItemStyle>,
    selected_item_style: Option<ItemStyle>,
}

impl PickerInner {
    fn item_count(&self) -> usize {
        self.items.borrow().len()
    }

    fn recompute_geometry(&self) {
        *self.geometry.borrow_mut() = Geometry::compute(
            self.container_width.get(),
            self.visible_item_count,
            self.item_count(),
            self.scale,
        );
    }

    fn attempt_initial_settle(&self) {
        self.positioner.initial_settle(
            self.container_width.get(),
            self.visible_item_count,
            self.item_count(),
            self.initial_index,
        );
    }

    fn sample(&self, offset: f64) {
        if self.queue.is_closed() {
            return;
        }

        let items = self.items.borrow();
        let item_width = self.geometry.borrow().item_width;
        let Some(index) = resolve_index(offset, item_width, items.len()) else {
            // Geometry not ready or nothing to select: suppress entirely.
            return;
        };

        let emission = self.tracker.observe(index);
        if let Some(new_index) = emission.changed {
            self.queue.push(PickerEvent::Changed {
                value: items[new_index].value.clone(),
                index: new_index,
            });
        }
        if emission.haptic {
            self.queue.push(PickerEvent::Haptic);
        }
    }

    fn select(&self, index: usize) {
        if self.queue.is_closed() {
            return;
        }
        self.positioner
            .scroll_to_index(&self.geometry.borrow(), self.item_count(), index);
    }
}

// =============================================================================
// Handle
// =============================================================================

/// Live picker instance.
///
/// The handle is the surface's entry point (measurements, samples) and the
/// owner's query/drain point. Clones share the same instance.
#[derive(Clone)]
pub struct PickerHandle {
    inner: Rc<PickerInner>,
}

impl PickerHandle {
    /// Deliver a container width measurement (layout pass or resize).
    ///
    /// Recomputes geometry; the first usable measurement also triggers the
    /// one-shot initial settle jump.
    pub fn set_container_width(&self, width: f64) {
        if self.inner.queue.is_closed() {
            return;
        }
        self.inner.container_width.set(width.max(0.0));
        self.inner.recompute_geometry();
        self.inner.attempt_initial_settle();
    }

    /// Deliver one raw offset sample from the scroll surface.
    ///
    /// O(1), synchronous, and silent while geometry is not ready. Side
    /// effects are queued, not invoked - see [`drain_effects`](Self::drain_effects).
    pub fn offset_sample(&self, offset: f64) {
        self.inner.sample(offset);
    }

    /// Programmatic selection: animated scroll to `index` (clamped).
    ///
    /// Does not update the selected index itself; the resulting offset
    /// change flows back through the sample path.
    pub fn select(&self, index: usize) {
        self.inner.select(index);
    }

    /// Replace the item sequence.
    ///
    /// Indices are recomputed against the new sequence - geometry refreshes
    /// and out-of-range selection state re-clamps. Shells should re-query
    /// [`cells`](Self::cells) afterwards.
    pub fn set_items(&self, items: Vec<PickerItem>) {
        if self.inner.queue.is_closed() {
            return;
        }
        *self.inner.items.borrow_mut() = items;
        self.inner.tracker.reclamp(self.inner.item_count());
        self.inner.recompute_geometry();
        self.inner.attempt_initial_settle();
    }

    /// Build the per-item view-models for the rendering shell.
    pub fn cells(&self) -> Vec<PickerCell> {
        let items = self.inner.items.borrow();
        let index_signal = self.inner.tracker.index_signal();

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let weak = Rc::downgrade(&self.inner);
                let select: Rc<dyn Fn()> = Rc::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.select(index);
                    }
                });
                PickerCell::new(
                    index,
                    item.label.clone(),
                    FocusFlag::new(&index_signal, index),
                    self.inner.item_style,
                    self.inner.selected_item_style,
                    select,
                )
            })
            .collect()
    }

    /// Deliver queued change/haptic notifications, in sample order.
    ///
    /// Call from the context where the configured callbacks expect to run.
    /// Returns the number of events delivered.
    pub fn drain_effects(&self) -> usize {
        let on_change = self.inner.on_change.clone();
        let on_haptic = self.inner.on_haptic.clone();

        self.inner.queue.drain(move |event| match event {
            PickerEvent::Changed { value, index } => {
                if let Some(on_change) = &on_change {
                    on_change(&value, index);
                }
            }
            PickerEvent::Haptic => {
                if let Some(on_haptic) = &on_haptic {
                    on_haptic();
                }
            }
        })
    }

    /// Currently settled index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.inner.tracker.selected_index()
    }

    /// Snapshot of the current geometry.
    pub fn geometry(&self) -> Geometry {
        self.inner.geometry.borrow().clone()
    }

    /// Whether a usable width measurement has arrived.
    pub fn is_ready(&self) -> bool {
        self.inner.geometry.borrow().is_ready()
    }

    pub fn item_count(&self) -> usize {
        self.inner.item_count()
    }

    /// Container styling passthrough for the rendering shell.
    pub fn container_style(&self) -> Option<ItemStyle> {
        self.inner.container_style
    }
}

// =============================================================================
// Constructor
// =============================================================================

/// Create a horizontal picker bound to `surface`.
///
/// Returns the live handle plus a cleanup function. Cleanup drops pending
/// notifications and makes the instance inert: no callback fires after
/// teardown, and later measurements/samples/selects are ignored.
pub fn horizontal_picker(
    props: PickerProps,
    surface: Rc<dyn ScrollSurface>,
) -> (PickerHandle, Cleanup) {
    let PickerProps {
        items,
        initial_index,
        visible_item_count,
        pixel_scale,
        on_change,
        on_haptic_feedback,
        container_style,
        item_style,
        selected_item_style,
    } = props;

    // Baseline for the first-settle policy: the clamped initial index, or
    // "none" for an empty sequence.
    let baseline = if items.is_empty() {
        -1
    } else {
        initial_index.min(items.len() - 1) as i32
    };

    let inner = Rc::new(PickerInner {
        items: RefCell::new(items),
        visible_item_count,
        initial_index,
        scale: pixel_scale,
        container_width: Cell::new(0.0),
        geometry: RefCell::new(Geometry::not_ready()),
        tracker: SelectionTracker::new(baseline),
        positioner: Positioner::new(surface, pixel_scale),
        queue: EffectQueue::new(),
        on_change,
        on_haptic: on_haptic_feedback,
        container_style,
        item_style,
        selected_item_style,
    });

    let handle = PickerHandle {
        inner: inner.clone(),
    };
    let cleanup: Cleanup = Box::new(move || inner.queue.close());
    (handle, cleanup)
}

// =============================================================================
// Tests
// =============================================================================
