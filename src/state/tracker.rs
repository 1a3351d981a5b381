//! Selection Tracker - Deduplicated effect emission.
//!
//! Converts the stream of resolved indices (one per offset sample, often
//! many per frame) into two independent at-most-once-per-value effect
//! streams: change notifications and haptic pulses. The tracker is an
//! explicit state machine with two guarded transitions, each comparing the
//! incoming index against its own stored memory, so feeding the same
//! resolved index N times produces side effects exactly once, not N times.
//!
//! First-settle policy: `current_index` is seeded with the configured
//! initial index, so the first resolved index after layout fires a change
//! only if it differs from that baseline. The first observation also seeds
//! the haptic memory silently - the initial settle never pulses haptics,
//! even when it fires a change.

use std::cell::Cell;

use spark_signals::{signal, Signal};

/// Sentinel for "no index yet" (empty items, unmeasured layout).
const NO_INDEX: i32 = -1;

// =============================================================================
// Emission
// =============================================================================

/// Outcome of one observation pass.
///
/// The tracker never invokes callbacks itself; it reports which transitions
/// fired and the caller marshals them (see `pipeline::EffectQueue`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Emission {
    /// The index newly settled on, if the change transition fired.
    pub changed: Option<usize>,
    /// Whether the haptic transition fired.
    pub haptic: bool,
}

impl Emission {
    /// True when neither transition fired.
    pub fn is_silent(&self) -> bool {
        self.changed.is_none() && !self.haptic
    }
}

// =============================================================================
// Tracker
// =============================================================================

/// Per-widget selection state with dedup memories.
///
/// `current_index` is a signal because it is also the broadcast source for
/// per-cell focus flags; the haptic memory is tracker-private. Both cells
/// are written only by the tracker itself - single producer, single
/// consumer, no locking.
pub struct SelectionTracker {
    current_index: Signal<i32>,
    last_haptic_index: Cell<i32>,
    primed: Cell<bool>,
}

impl SelectionTracker {
    /// Create a tracker baselined at `initial_index` (`-1` for "none").
    pub fn new(initial_index: i32) -> Self {
        Self {
            current_index: signal(initial_index.max(NO_INDEX)),
            last_haptic_index: Cell::new(NO_INDEX),
            primed: Cell::new(false),
        }
    }

    /// Feed one resolved index through the state machine.
    ///
    /// `index` must already be clamped into bounds (the resolver guarantees
    /// this), which is what keeps the haptic transition's bounds condition
    /// an invariant rather than a check.
    pub fn observe(&self, index: usize) -> Emission {
        let index = index as i32;
        let first = !self.primed.get();
        self.primed.set(true);

        let mut emission = Emission::default();

        // Transition 1: changed-index.
        if index != self.current_index.get() {
            self.current_index.set(index);
            emission.changed = Some(index as usize);
        }

        // Transition 2: changed-haptic-index. The first pass only seeds
        // the memory; haptics accompany real transitions afterwards.
        if first {
            self.last_haptic_index.set(index);
        } else if index != self.last_haptic_index.get() {
            self.last_haptic_index.set(index);
            emission.haptic = true;
        }

        emission
    }

    /// Currently settled index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        let index = self.current_index.get();
        if index >= 0 {
            Some(index as usize)
        } else {
            None
        }
    }

    /// The shared index signal consumed by focus broadcasters.
    pub fn index_signal(&self) -> Signal<i32> {
        self.current_index.clone()
    }

    /// Re-clamp both memories after the item sequence was replaced.
    ///
    /// Never emits: replacing the sequence is a structural change, not a
    /// settle. A shrink below the current index pulls it to the new last
    /// item; an empty sequence clears the selection entirely.
    pub fn reclamp(&self, item_count: usize) {
        let max_index = item_count as i32 - 1;
        if self.current_index.get() > max_index {
            self.current_index.set(max_index.max(NO_INDEX));
        }
        if self.last_haptic_index.get() > max_index {
            self.last_haptic_index.set(max_index.max(NO_INDEX));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let tracker = SelectionTracker::new(2);
        assert_eq!(tracker.selected_index(), Some(2));

        let tracker = SelectionTracker::new(NO_INDEX);
        assert_eq!(tracker.selected_index(), None);
    }

    #[test]
    fn test_first_settle_at_initial_index_is_silent() {
        // Documented policy: the first resolved index establishes a silent
        // baseline when it equals the configured initial index.
        let tracker = SelectionTracker::new(3);
        let emission = tracker.observe(3);
        assert!(emission.is_silent());
        assert_eq!(tracker.selected_index(), Some(3));
    }

    #[test]
    fn test_first_settle_elsewhere_fires_change_without_haptic() {
        // Documented policy: a differing first settle notifies once, but
        // never pulses haptics - the two memories are independent.
        let tracker = SelectionTracker::new(0);
        let emission = tracker.observe(4);
        assert_eq!(emission.changed, Some(4));
        assert!(!emission.haptic);
    }

    #[test]
    fn test_idempotent_under_repeated_samples() {
        let tracker = SelectionTracker::new(0);
        tracker.observe(2);

        for _ in 0..50 {
            assert!(tracker.observe(2).is_silent());
        }
        assert_eq!(tracker.selected_index(), Some(2));
    }

    #[test]
    fn test_monotonic_drag_fires_each_boundary_once() {
        let tracker = SelectionTracker::new(0);
        let mut changes = Vec::new();
        let mut haptics = 0;

        // A drag resolving 0,0,1,1,2,2,3,3 - many samples per index.
        for index in [0, 0, 1, 1, 2, 2, 3, 3] {
            let emission = tracker.observe(index);
            if let Some(new_index) = emission.changed {
                changes.push(new_index);
            }
            if emission.haptic {
                haptics += 1;
            }
        }

        assert_eq!(changes, vec![1, 2, 3]);
        assert_eq!(haptics, 3);
    }

    #[test]
    fn test_direction_reversal_fires_again() {
        let tracker = SelectionTracker::new(0);
        tracker.observe(0);
        assert_eq!(tracker.observe(1).changed, Some(1));

        // Scrubbing back over an index already visited notifies again -
        // dedup is against the previous index, not a visited set.
        let emission = tracker.observe(0);
        assert_eq!(emission.changed, Some(0));
        assert!(emission.haptic);
    }

    #[test]
    fn test_index_signal_broadcasts() {
        let tracker = SelectionTracker::new(0);
        let index_signal = tracker.index_signal();
        assert_eq!(index_signal.get(), 0);

        tracker.observe(3);
        assert_eq!(index_signal.get(), 3);
    }

    #[test]
    fn test_reclamp_shrinks_selection() {
        let tracker = SelectionTracker::new(0);
        tracker.observe(4);

        tracker.reclamp(3);
        assert_eq!(tracker.selected_index(), Some(2));

        // Observing the clamped index afterwards is not a transition the
        // user caused twice: current already equals it.
        assert!(tracker.observe(2).changed.is_none());
    }

    #[test]
    fn test_reclamp_to_empty_clears_selection() {
        let tracker = SelectionTracker::new(1);
        tracker.observe(1);
        tracker.reclamp(0);
        assert_eq!(tracker.selected_index(), None);
    }
}
