//! Primitives Module - The picker widget surface.
//!
//! - **types** - `PickerProps`, callback aliases, `Cleanup`
//! - **picker** - `horizontal_picker()` wiring and `PickerHandle`
//! - **cell** - `PickerCell`, the per-item view-model for rendering shells

mod cell;
mod picker;
mod types;

pub use cell::PickerCell;
pub use picker::{horizontal_picker, PickerHandle};
pub use types::{ChangeCallback, Cleanup, HapticCallback, PickerProps};
