//! Layout Module - Picker geometry computation
//!
//! Everything here is pure math over the widget's measured inputs:
//!
//! - **Pixel** - Snapping derived lengths to the device pixel grid
//! - **Geometry** - Item width, side padding, snap offsets
//! - **Resolve** - Mapping a continuous offset to the nearest item index
//!
//! Geometry is recomputed whenever container width, visible-item count, or
//! item count changes; resolution runs on every offset sample.

mod geometry;
mod pixel;
mod resolve;

pub use geometry::Geometry;
pub use pixel::PixelScale;
pub use resolve::resolve_index;
