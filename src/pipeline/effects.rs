//! Effect Queue - Ordered side-effect marshaling with teardown.
//!
//! Single producer (the sample path pushing tracker emissions), single
//! consumer (the owning context draining). Pushing is O(1) and never runs
//! user code, so the surface delivering samples is never stalled. Draining
//! replays events strictly in push order - a later sample's effects can
//! never be observed before an earlier sample's.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::types::ItemValue;

// =============================================================================
// Events
// =============================================================================

/// A user-visible effect produced by the selection tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent {
    /// The selection settled on a new index.
    Changed { value: ItemValue, index: usize },
    /// A distinct index transition warranting a haptic pulse.
    Haptic,
}

// =============================================================================
// Queue
// =============================================================================

/// FIFO of pending picker events.
///
/// Closing the queue (widget teardown) drops everything pending and makes
/// both `push` and `drain` inert: no callback fires after teardown, even
/// for effects that were already queued mid-flight.
#[derive(Debug, Default)]
pub struct EffectQueue {
    events: RefCell<VecDeque<PickerEvent>>,
    closed: Cell<bool>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event. Dropped silently once closed.
    pub fn push(&self, event: PickerEvent) {
        if self.closed.get() {
            return;
        }
        self.events.borrow_mut().push_back(event);
    }

    /// Number of events waiting to be delivered.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Deliver all pending events to `apply`, in push order.
    ///
    /// Returns the number of events delivered. The pending batch is taken
    /// before delivery starts so `apply` never observes the queue
    /// mid-mutation; if a callback closes the queue (tearing the widget
    /// down from inside a notification), the rest of the batch is dropped.
    pub fn drain(&self, mut apply: impl FnMut(PickerEvent)) -> usize {
        if self.closed.get() {
            return 0;
        }

        let batch: Vec<PickerEvent> = self.events.borrow_mut().drain(..).collect();
        let mut delivered = 0;
        for event in batch {
            if self.closed.get() {
                break;
            }
            apply(event);
            delivered += 1;
        }
        delivered
    }

    /// Teardown: drop pending events and refuse everything from now on.
    pub fn close(&self) {
        self.closed.set(true);
        self.events.borrow_mut().clear();
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn changed(index: usize) -> PickerEvent {
        PickerEvent::Changed {
            value: ItemValue::Number(index as f64),
            index,
        }
    }

    #[test]
    fn test_drain_preserves_push_order() {
        let queue = EffectQueue::new();
        queue.push(changed(1));
        queue.push(PickerEvent::Haptic);
        queue.push(changed(2));

        let seen: Rc<RefCell<Vec<PickerEvent>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let delivered = queue.drain(move |event| seen_clone.borrow_mut().push(event));

        assert_eq!(delivered, 3);
        assert_eq!(
            *seen.borrow(),
            vec![changed(1), PickerEvent::Haptic, changed(2)]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_close_drops_pending() {
        let queue = EffectQueue::new();
        queue.push(changed(1));
        queue.close();

        assert!(queue.is_closed());
        assert_eq!(queue.drain(|_| panic!("closed queue delivered an event")), 0);
    }

    #[test]
    fn test_push_after_close_is_inert() {
        let queue = EffectQueue::new();
        queue.close();
        queue.push(changed(1));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_close_during_drain_stops_delivery() {
        let queue = Rc::new(EffectQueue::new());
        queue.push(changed(1));
        queue.push(changed(2));
        queue.push(changed(3));

        let queue_inner = queue.clone();
        let count = Rc::new(Cell::new(0));
        let count_inner = count.clone();
        queue.drain(move |_| {
            count_inner.set(count_inner.get() + 1);
            // Teardown from inside the first notification.
            queue_inner.close();
        });

        assert_eq!(count.get(), 1);
    }
}
