//! Scroll Surface - the consumed collaborator boundary.
//!
//! The selection engine never owns scrolling. A platform surface (a native
//! scroll view, a canvas, a terminal shell) supplies the widget with:
//!
//! - a one-shot layout width measurement (`PickerHandle::set_container_width`)
//! - raw continuous offset samples at up to display-frame frequency
//!   (`PickerHandle::offset_sample`)
//! - execution of imperative scroll commands (this trait)
//!
//! The engine only ever *reads* the offset; the surface owns it.

mod sim;

pub use sim::{ScrollCommand, SimSurface, Tween};

/// Imperative scroll-command sink implemented by the platform surface.
///
/// `scroll_to` must eventually settle the content at `offset`; during an
/// animated scroll the surface keeps feeding intermediate offsets back
/// through the sample path, which is what drives selection updates. The
/// engine never assumes the command completed.
pub trait ScrollSurface {
    /// Scroll the content to `offset` layout units from the start.
    fn scroll_to(&self, offset: f64, animated: bool);
}
