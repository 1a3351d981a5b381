//! State Module - Runtime selection state
//!
//! The stateful half of the engine:
//!
//! - **Tracker** - Deduplicated change/haptic emission per settled index
//! - **Focus** - Per-cell focused flags derived from the shared index
//! - **Positioner** - Initial settle and programmatic scroll commands

mod focus;
mod positioner;
mod tracker;

pub use focus::FocusFlag;
pub use positioner::Positioner;
pub use tracker::{Emission, SelectionTracker};
