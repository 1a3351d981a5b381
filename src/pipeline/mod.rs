//! Pipeline Module - Marshaling between the sample path and the owner.
//!
//! Offset samples are processed synchronously on whatever context the
//! surface delivers them from; user-visible side effects (change and haptic
//! callbacks) must instead run where the caller expects them, in sample
//! order, and never after teardown. The effect queue is that seam.

mod effects;

pub use effects::{EffectQueue, PickerEvent};
