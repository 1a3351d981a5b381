//! # snappick
//!
//! Reactive horizontal snap-to-item picker engine for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! snappick is the continuous-to-discrete selection core of a horizontal
//! picker: the user drags or flings a row of items, the widget tracks the
//! scroll offset, resolves it to the nearest item index, snaps to that
//! item's position, and notifies exactly once per distinct settled index.
//!
//! The pipeline is one straight pipe:
//! ```text
//! offset samples → resolve_index → SelectionTracker → EffectQueue → callbacks
//!                                        │
//!                                        └→ FocusFlag (per cell) → rendering shell
//! ```
//!
//! Rendering, gesture capture, and platform scrolling stay outside the
//! crate: a collaborating surface implements [`ScrollSurface`], feeds the
//! engine width measurements and offset samples, and renders one
//! [`PickerCell`] per item.
//!
//! ## Modules
//!
//! - [`types`] - Core data model (`PickerItem`, `ItemValue`)
//! - [`layout`] - Geometry computation and offset→index resolution
//! - [`state`] - Selection tracking, focus broadcast, positioning
//! - [`pipeline`] - Ordered side-effect marshaling with teardown
//! - [`primitives`] - The picker widget surface (`horizontal_picker`)
//! - [`surface`] - The scroll surface collaborator boundary
//! - [`style`] - Opaque styling passthrough types

pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod state;
pub mod style;
pub mod surface;
pub mod types;

// Re-export commonly used items
pub use types::{DEFAULT_VISIBLE_ITEMS, ItemValue, PickerItem};

pub use layout::{Geometry, PixelScale, resolve_index};

pub use state::{Emission, FocusFlag, Positioner, SelectionTracker};

pub use pipeline::{EffectQueue, PickerEvent};

pub use primitives::{
    ChangeCallback, Cleanup, HapticCallback, PickerCell, PickerHandle, PickerProps,
    horizontal_picker,
};

pub use surface::{ScrollCommand, ScrollSurface, SimSurface, Tween};

pub use style::{Attr, ItemStyle, Rgba};
