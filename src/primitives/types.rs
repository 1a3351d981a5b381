//! Primitive types - Props and cleanup.

use std::rc::Rc;

use crate::layout::PixelScale;
use crate::style::ItemStyle;
use crate::types::{DEFAULT_VISIBLE_ITEMS, ItemValue, PickerItem};

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by components.
///
/// Call this to unmount the component and release resources. After cleanup
/// the widget stops producing effects entirely: pending notifications are
/// dropped and further samples are ignored.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Callback Types
// =============================================================================

/// Change notification callback: `(selected value, selected index)`.
///
/// Using Rc<dyn Fn> instead of Box<dyn Fn> allows cloning callbacks
/// into closures without ownership issues. This is the standard pattern
/// for event callbacks in Rust when callbacks need to be captured in closures.
pub type ChangeCallback = Rc<dyn Fn(&ItemValue, usize)>;

/// Haptic pulse callback, fired once per distinct settled index.
pub type HapticCallback = Rc<dyn Fn()>;

// =============================================================================
// Picker Props
// =============================================================================

/// Properties for the horizontal picker.
///
/// # Example
///
/// ```ignore
/// use std::rc::Rc;
/// use snappick::{horizontal_picker, PickerItem, PickerProps, SimSurface};
///
/// let surface = Rc::new(SimSurface::new());
/// let (picker, cleanup) = horizontal_picker(
///     PickerProps {
///         initial_index: 2,
///         on_change: Some(Rc::new(|value, index| {
///             println!("selected {value:?} at {index}");
///         })),
///         ..PickerProps::new(vec![
///             PickerItem::text("Mon"),
///             PickerItem::text("Tue"),
///             PickerItem::text("Wed"),
///         ])
///     },
///     surface,
/// );
///
/// picker.set_container_width(350.0);
/// cleanup();
/// ```
pub struct PickerProps {
    // =========================================================================
    // Domain
    // =========================================================================

    /// The ordered selectable sequence. Required.
    pub items: Vec<PickerItem>,

    /// Index selected before any interaction (default: 0, clamped at use).
    pub initial_index: usize,

    /// How many items are visible at rest (default: 7, must be > 0).
    pub visible_item_count: usize,

    /// Device pixel density for snapping derived lengths.
    pub pixel_scale: PixelScale,

    // =========================================================================
    // Event Callbacks
    // =========================================================================

    /// Called once per distinct settled index.
    pub on_change: Option<ChangeCallback>,

    /// Called once per distinct index transition after the initial settle.
    pub on_haptic_feedback: Option<HapticCallback>,

    // =========================================================================
    // Styling Passthroughs (opaque to the engine)
    // =========================================================================

    /// Style for the scroll container.
    pub container_style: Option<ItemStyle>,

    /// Style for unselected items.
    pub item_style: Option<ItemStyle>,

    /// Style for the selected item.
    pub selected_item_style: Option<ItemStyle>,
}

impl PickerProps {
    /// Create props with the given items and defaults for everything else.
    ///
    /// This is the recommended way to create PickerProps since items are
    /// required.
    pub fn new(items: Vec<PickerItem>) -> Self {
        Self {
            items,
            initial_index: 0,
            visible_item_count: DEFAULT_VISIBLE_ITEMS,
            pixel_scale: PixelScale::default(),
            on_change: None,
            on_haptic_feedback: None,
            container_style: None,
            item_style: None,
            selected_item_style: None,
        }
    }
}
