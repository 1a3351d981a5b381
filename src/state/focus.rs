//! Focus Broadcaster - Per-cell focused flags.
//!
//! Every rendered cell reacts independently to the same shared selected
//! index: a one-to-many observer relation where the tracker's signal is the
//! single source of truth and each cell is a passive subscriber comparing
//! its own static index to the broadcast value. Cells never write back.
//!
//! The flag flips only on an actual transition. Offset samples arrive at
//! display-frame frequency, and the selected index is re-read on every one;
//! re-signaling an unchanged boolean would churn the rendering shell for
//! nothing.

use std::cell::Cell;

use spark_signals::{effect, signal, Signal};

/// A cell's subscription to the shared selected index.
///
/// Owns the comparison effect; dropping the flag stops the subscription,
/// so a torn-down cell can no longer observe focus changes.
pub struct FocusFlag {
    focused: Signal<bool>,
    stop: Option<Box<dyn FnOnce()>>,
}

impl FocusFlag {
    /// Subscribe cell `index` to `current_index`.
    pub fn new(current_index: &Signal<i32>, index: usize) -> Self {
        let focused = signal(current_index.get() == index as i32);

        let current = current_index.clone();
        let focused_out = focused.clone();
        let was = Cell::new(focused.get());
        let stop = effect(move || {
            let now = current.get() == index as i32;
            // Transition guard: only flips write through to the shell.
            if was.get() != now {
                was.set(now);
                focused_out.set(now);
            }
        });

        Self {
            focused,
            stop: Some(Box::new(stop)),
        }
    }

    /// Whether this cell is the selected one right now.
    pub fn get(&self) -> bool {
        self.focused.get()
    }

    /// The boolean signal consumed by the rendering shell.
    pub fn signal(&self) -> Signal<bool> {
        self.focused.clone()
    }
}

impl Drop for FocusFlag {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_initial_focus_matches_index() {
        let current = signal(2);
        assert!(FocusFlag::new(&current, 2).get());
        assert!(!FocusFlag::new(&current, 0).get());
    }

    #[test]
    fn test_focus_follows_broadcast() {
        let current = signal(0);
        let flag_a = FocusFlag::new(&current, 0);
        let flag_b = FocusFlag::new(&current, 1);

        current.set(1);
        assert!(!flag_a.get());
        assert!(flag_b.get());

        current.set(0);
        assert!(flag_a.get());
        assert!(!flag_b.get());
    }

    #[test]
    fn test_no_resignal_without_transition() {
        let current = signal(0);
        let flag = FocusFlag::new(&current, 4);

        // Count downstream reactions to the flag's own signal.
        let runs = Rc::new(Cell::new(0));
        let runs_clone = runs.clone();
        let focused = flag.signal();
        let _watch = effect(move || {
            let _ = focused.get();
            runs_clone.set(runs_clone.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        // Index moves between other cells; this flag stays false and the
        // shell must not be re-signaled.
        current.set(1);
        current.set(2);
        current.set(3);
        assert_eq!(runs.get(), 1);

        // A real transition propagates.
        current.set(4);
        assert_eq!(runs.get(), 2);
        assert!(flag.get());
    }

    #[test]
    fn test_dropped_flag_stops_following() {
        let current = signal(0);
        let flag = FocusFlag::new(&current, 1);
        let focused = flag.signal();
        drop(flag);

        current.set(1);
        assert!(!focused.get());
    }
}
