//! Focus and stacking policy: z-order allocation and active-window selection.
//!
//! Nothing here owns state. The window store holds the counter and calls these helpers so every
//! stacking decision is made in one place.

use serde::{Deserialize, Serialize};

use crate::model::{WindowId, WindowRecord, WorkspaceId};

/// Strictly increasing z-index source. Issued values are never handed out twice, so two windows
/// raised back to back always end up totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZOrderCounter {
    next: u32,
}

impl ZOrderCounter {
    pub const fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Value the next raised window will receive.
    pub const fn peek(self) -> u32 {
        self.next
    }

    pub fn issue(&mut self) -> u32 {
        let value = self.next;
        self.next = self.next.saturating_add(1);
        value
    }
}

/// Front-most window of `workspace_id`, ignoring `excluding`.
pub fn topmost_in_workspace(
    windows: &[WindowRecord],
    workspace_id: WorkspaceId,
    excluding: Option<WindowId>,
) -> Option<WindowId> {
    windows
        .iter()
        .filter(|w| w.workspace_id == workspace_id && Some(w.id) != excluding)
        .max_by_key(|w| w.z_index)
        .map(|w| w.id)
}

/// Active window after `closed` leaves the store.
///
/// Only a closed *active* window moves focus; the replacement is drawn from the same workspace and
/// never from another desktop.
pub fn next_active_after_close(
    windows: &[WindowRecord],
    active: Option<WindowId>,
    closed: WindowId,
    workspace_id: WorkspaceId,
) -> Option<WindowId> {
    if active != Some(closed) {
        return active;
    }
    topmost_in_workspace(windows, workspace_id, Some(closed))
}

/// Active window after `minimized` is hidden. Focus is cleared, not handed on.
pub fn next_active_after_minimize(
    active: Option<WindowId>,
    minimized: WindowId,
) -> Option<WindowId> {
    if active == Some(minimized) {
        None
    } else {
        active
    }
}

/// Windows in ascending paint order (last paints on top).
pub fn paint_order<'a>(
    windows: impl IntoIterator<Item = &'a WindowRecord>,
) -> Vec<&'a WindowRecord> {
    let mut ordered: Vec<_> = windows.into_iter().collect();
    ordered.sort_by_key(|w| w.z_index);
    ordered
}
