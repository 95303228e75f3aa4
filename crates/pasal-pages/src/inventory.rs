//! # Inventory List Controls
//!
//! Bulk selection on the inventory list page: the invert-selection
//! button, the check-all toggle, and the delete-selected flow.
//!
//! ## Delete Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Delete Selected                                    │
//! │                                                                         │
//! │  click ──► any boxes checked? ── no ──► alert "No items selected"       │
//! │                    │ yes                      (no request)              │
//! │                    ▼                                                    │
//! │            confirm dialog ────── declined ──► nothing                   │
//! │                    │ accepted                                           │
//! │                    ▼                                                    │
//! │            POST /inventory/delete {ids}                                 │
//! │                    │                                                    │
//! │         ok ────────┴──────── failed                                     │
//! │          │                      │                                       │
//! │          ▼                      ▼                                       │
//! │     page reload          alert "Error deleting items"                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures of any kind surface as the same alert; the row list is never
//! mutated locally, a successful delete simply reloads the page.

use tracing::{debug, warn};

use pasal_api::InventoryApi;

use crate::shell::PageShell;

// =============================================================================
// Constants
// =============================================================================

/// Alert shown when delete-selected is clicked with nothing checked.
pub const NO_ITEMS_SELECTED_ALERT: &str = "No items selected";

/// Confirmation prompt shown before a bulk delete.
pub const CONFIRM_DELETE_PROMPT: &str =
    "Are you sure you want to delete the selected items?";

/// Alert shown when the bulk delete fails.
pub const DELETE_FAILED_ALERT: &str = "Error deleting items";

// =============================================================================
// Checkboxes
// =============================================================================

/// One per-row checkbox of the inventory list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCheckbox {
    /// The row's item id, the checkbox `value` attribute.
    pub value: String,
    /// Whether the box is checked.
    pub checked: bool,
}

/// The checkbox column of the inventory list, in row order.
#[derive(Debug, Clone, Default)]
pub struct InventoryPanel {
    boxes: Vec<ItemCheckbox>,
}

/// What a delete-selected click ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No boxes were checked; the user was told and nothing was sent.
    NothingSelected,
    /// The user declined the confirmation prompt.
    Cancelled,
    /// The delete succeeded and a reload was requested.
    Deleted,
    /// The delete failed and the user was told.
    Failed,
}

impl InventoryPanel {
    /// Creates the panel for the listed item ids, all unchecked.
    pub fn new(values: Vec<String>) -> Self {
        InventoryPanel {
            boxes: values
                .into_iter()
                .map(|value| ItemCheckbox {
                    value,
                    checked: false,
                })
                .collect(),
        }
    }

    /// Checks or unchecks the box for `value`. Returns whether such a
    /// box exists.
    pub fn set_checked(&mut self, value: &str, checked: bool) -> bool {
        if let Some(b) = self.boxes.iter_mut().find(|b| b.value == value) {
            b.checked = checked;
            true
        } else {
            false
        }
    }

    /// Inverts every box independently (the invert-selection button).
    pub fn toggle_each(&mut self) {
        for b in &mut self.boxes {
            b.checked = !b.checked;
        }
    }

    /// Checks or unchecks every box (the check-all toggle).
    pub fn set_all(&mut self, checked: bool) {
        for b in &mut self.boxes {
            b.checked = checked;
        }
    }

    /// The checked item ids, in row order.
    pub fn selected(&self) -> Vec<String> {
        self.boxes
            .iter()
            .filter(|b| b.checked)
            .map(|b| b.value.clone())
            .collect()
    }

    /// All boxes in row order.
    pub fn boxes(&self) -> &[ItemCheckbox] {
        &self.boxes
    }

    /// Runs the delete-selected flow: guard, confirm, POST, then reload
    /// or alert.
    pub async fn delete_selected(
        &self,
        api: &dyn InventoryApi,
        shell: &dyn PageShell,
    ) -> DeleteOutcome {
        let ids = self.selected();
        if ids.is_empty() {
            shell.alert(NO_ITEMS_SELECTED_ALERT);
            return DeleteOutcome::NothingSelected;
        }

        if !shell.confirm(CONFIRM_DELETE_PROMPT) {
            debug!(count = ids.len(), "bulk delete declined");
            return DeleteOutcome::Cancelled;
        }

        match api.delete_items(&ids).await {
            Ok(()) => {
                debug!(count = ids.len(), "bulk delete succeeded");
                shell.reload();
                DeleteOutcome::Deleted
            }
            Err(error) => {
                warn!(%error, count = ids.len(), "bulk delete failed");
                shell.alert(DELETE_FAILED_ALERT);
                DeleteOutcome::Failed
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
