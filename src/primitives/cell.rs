//! Picker Cell - Per-item view-model for rendering shells.

use std::rc::Rc;

use spark_signals::Signal;

use crate::state::FocusFlag;
use crate::style::ItemStyle;

/// The per-item half of the collaborator contract.
///
/// A rendering shell gets one cell per item. Its only obligations are:
/// render `label` with the selected style while `focused()` reads true and
/// the unselected style otherwise, and invoke [`select`](Self::select) when
/// the cell is tapped. Cells are passive subscribers - they observe the
/// shared selection, they never write it.
pub struct PickerCell {
    index: usize,
    label: String,
    key: String,
    focus: FocusFlag,
    item_style: Option<ItemStyle>,
    selected_item_style: Option<ItemStyle>,
    select: Rc<dyn Fn()>,
}

impl PickerCell {
    pub(crate) fn new(
        index: usize,
        label: String,
        focus: FocusFlag,
        item_style: Option<ItemStyle>,
        selected_item_style: Option<ItemStyle>,
        select: Rc<dyn Fn()>,
    ) -> Self {
        // Stable view key: label + position, so shells can key their cells
        // the same way across re-renders.
        let key = format!("picker-item-{label}-{index}");
        Self {
            index,
            label,
            key,
            focus,
            item_style,
            selected_item_style,
            select,
        }
    }

    /// Position of this cell in the item sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stable view key for the rendering shell.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether this cell is currently the selected one.
    pub fn focused(&self) -> bool {
        self.focus.get()
    }

    /// The focused flag as a signal, for reactive shells.
    pub fn focused_signal(&self) -> Signal<bool> {
        self.focus.signal()
    }

    /// The style the shell should draw this cell with right now.
    pub fn current_style(&self) -> Option<ItemStyle> {
        if self.focused() {
            self.selected_item_style
        } else {
            self.item_style
        }
    }

    /// Tap trigger: ask the picker to scroll this cell under the selection
    /// point. Selection state updates arrive through the sample path, not
    /// from this call.
    pub fn select(&self) {
        (self.select)();
    }
}
