//! Core types for snappick.
//!
//! The data model is deliberately small: a picker selects one item out of an
//! ordered sequence, and an item is nothing more than a display label plus a
//! caller-owned value. Everything else in the crate (geometry, tracking,
//! focus) is derived state.

// =============================================================================
// Item Value
// =============================================================================

/// The caller-facing value carried by a picker item.
///
/// Mirrors the `string | number` domain pickers conventionally select over.
/// Values are opaque to the selection engine; they only travel outward
/// through the change notification.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValue {
    /// Textual value.
    Text(String),
    /// Numeric value.
    Number(f64),
}

impl From<&str> for ItemValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ItemValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ItemValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ItemValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

// =============================================================================
// Picker Item
// =============================================================================

/// One selectable entry in the picker.
///
/// Items are immutable; identity is the item's position in the configured
/// sequence plus its value. No stable identity is assumed across reorders -
/// when the sequence is replaced, indices are recomputed from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerItem {
    /// Display label for the rendering shell.
    pub label: String,
    /// Caller-owned value reported on selection.
    pub value: ItemValue,
}

impl PickerItem {
    /// Create an item with an explicit label and value.
    pub fn new(label: impl Into<String>, value: impl Into<ItemValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create an item whose value is its own label.
    pub fn text(label: impl Into<String>) -> Self {
        let label = label.into();
        let value = ItemValue::Text(label.clone());
        Self { label, value }
    }

    /// Create a numeric item labeled with the number's display form.
    pub fn number(value: f64) -> Self {
        Self {
            label: value.to_string(),
            value: ItemValue::Number(value),
        }
    }
}

// =============================================================================
// Defaults
// =============================================================================

/// Default number of items visible at rest.
pub const DEFAULT_VISIBLE_ITEMS: usize = 7;
