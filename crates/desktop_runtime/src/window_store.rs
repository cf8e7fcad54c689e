//! Canonical window list. Every window mutation goes through [`WindowStore`].
//!
//! Operations naming an unknown window id do nothing beyond a `debug!` event.

use desktop_app_contract::{OpenWindowRequest, WindowPosition, WindowRect, WindowSize};
use tracing::{debug, info};

use crate::{
    layout,
    model::{SnapPosition, Viewport, WindowId, WindowRecord, WorkspaceId},
    stacking::{self, ZOrderCounter},
};

/// First z-index handed out by a fresh store.
pub const DEFAULT_INITIAL_Z_INDEX: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowStore {
    windows: Vec<WindowRecord>,
    next_window_id: u64,
    z_order: ZOrderCounter,
    active_window_id: Option<WindowId>,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_Z_INDEX)
    }
}

impl WindowStore {
    pub fn new(initial_z_index: u32) -> Self {
        Self {
            windows: Vec::new(),
            next_window_id: 1,
            z_order: ZOrderCounter::starting_at(initial_z_index),
            active_window_id: None,
        }
    }

    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.active_window_id
    }

    pub fn next_z_index(&self) -> u32 {
        self.z_order.peek()
    }

    /// Windows on `workspace_id`, in insertion order.
    pub fn windows_in_workspace(
        &self,
        workspace_id: WorkspaceId,
    ) -> impl Iterator<Item = &WindowRecord> + '_ {
        self.windows
            .iter()
            .filter(move |w| w.workspace_id == workspace_id)
    }

    /// Opens a window on `workspace_id`, or raises the window already carrying the same title
    /// there. Returns the id of the window that ends up active.
    pub fn open_window(&mut self, request: OpenWindowRequest, workspace_id: WorkspaceId) -> WindowId {
        let existing = self
            .windows_in_workspace(workspace_id)
            .find(|w| w.title == request.title)
            .map(|w| w.id);
        if let Some(existing) = existing {
            debug!(window_id = %existing, title = %request.title, "open request focused existing window");
            self.bring_to_front(existing);
            return existing;
        }

        let id = WindowId(self.next_window_id);
        self.next_window_id = self.next_window_id.saturating_add(1);
        let z_index = self.z_order.issue();
        info!(window_id = %id, title = %request.title, component = %request.component, workspace_id = %workspace_id, "window opened");
        self.windows.push(WindowRecord {
            id,
            title: request.title,
            component: request.component,
            workspace_id,
            position: request.position,
            size: request.size,
            prev_position: None,
            prev_size: None,
            is_maximized: false,
            is_minimized: false,
            z_index,
        });
        self.active_window_id = Some(id);
        id
    }

    /// Removes a window. If it was active, focus passes to the top window left on
    /// `active_workspace`.
    pub fn close_window(&mut self, window_id: WindowId, active_workspace: WorkspaceId) {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != window_id);
        if self.windows.len() == before {
            debug!(window_id = %window_id, "close of unknown window ignored");
            return;
        }
        self.active_window_id = stacking::next_active_after_close(
            &self.windows,
            self.active_window_id,
            window_id,
            active_workspace,
        );
        info!(window_id = %window_id, active = ?self.active_window_id, "window closed");
    }

    pub fn minimize_window(&mut self, window_id: WindowId) {
        let Some(window) = self.find_window_mut(window_id) else {
            return;
        };
        window.is_minimized = true;
        self.active_window_id =
            stacking::next_active_after_minimize(self.active_window_id, window_id);
    }

    /// Flips the maximized flag, saving or restoring pre-maximize geometry, then raises the
    /// window.
    pub fn toggle_maximize_window(&mut self, window_id: WindowId) {
        let Some(window) = self.find_window_mut(window_id) else {
            return;
        };
        if window.is_maximized {
            let (position, size) = layout::restore_geometry(window);
            window.position = position;
            window.size = size;
            window.is_maximized = false;
        } else {
            window.prev_position = Some(window.position);
            window.prev_size = Some(window.size);
            window.is_maximized = true;
        }
        self.bring_to_front(window_id);
    }

    /// Un-minimizes, raises above every other window, and focuses.
    pub fn bring_to_front(&mut self, window_id: WindowId) {
        let Some(index) = self.windows.iter().position(|w| w.id == window_id) else {
            debug!(window_id = %window_id, "raise of unknown window ignored");
            return;
        };
        let z_index = self.z_order.issue();
        let window = &mut self.windows[index];
        window.is_minimized = false;
        window.z_index = z_index;
        self.active_window_id = Some(window_id);
    }

    /// "Show desktop": restores the active workspace's windows when all are minimized, otherwise
    /// minimizes them all.
    pub fn toggle_minimize_all_windows(&mut self, active_workspace: WorkspaceId) {
        let all_minimized = self
            .windows_in_workspace(active_workspace)
            .all(|w| w.is_minimized);
        for window in self
            .windows
            .iter_mut()
            .filter(|w| w.workspace_id == active_workspace)
        {
            window.is_minimized = !all_minimized;
        }
        if !all_minimized {
            self.active_window_id = None;
        }
    }

    pub fn update_window_position(&mut self, window_id: WindowId, position: WindowPosition) {
        if let Some(window) = self.find_window_mut(window_id) {
            window.position = position;
        }
    }

    pub fn update_window_size(&mut self, window_id: WindowId, size: WindowSize) {
        if let Some(window) = self.find_window_mut(window_id) {
            window.size = size;
        }
    }

    /// Reassigns the window's workspace. Stacking, flags, and focus are left as they are.
    pub fn move_window_to_workspace(&mut self, window_id: WindowId, workspace_id: WorkspaceId) {
        if let Some(window) = self.find_window_mut(window_id) {
            window.workspace_id = workspace_id;
            info!(window_id = %window_id, workspace_id = %workspace_id, "window moved to workspace");
        }
    }

    /// Replaces the window's geometry with the half-screen rect for `snap` and clears its
    /// maximized flag. Reserved corner positions are ignored.
    pub fn snap_window(&mut self, window_id: WindowId, snap: SnapPosition, viewport: Viewport) {
        let Some(rect) = layout::snap_rect(snap, viewport) else {
            debug!(?snap, "snap position has no geometry");
            return;
        };
        self.apply_rect(window_id, rect);
        if let Some(window) = self.find_window_mut(window_id) {
            window.is_maximized = false;
        }
    }

    fn apply_rect(&mut self, window_id: WindowId, rect: WindowRect) {
        if let Some(window) = self.find_window_mut(window_id) {
            window.position = rect.position();
            window.size = rect.size();
        }
    }

    fn find_window_mut(&mut self, window_id: WindowId) -> Option<&mut WindowRecord> {
        let found = self.windows.iter_mut().find(|w| w.id == window_id);
        if found.is_none() {
            debug!(window_id = %window_id, "operation on unknown window ignored");
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::AppKind;
    use pretty_assertions::assert_eq;

    use super::*;

    const WS1: WorkspaceId = WorkspaceId(1);
    const WS2: WorkspaceId = WorkspaceId(2);

    fn request(title: &str, x: i32, y: i32) -> OpenWindowRequest {
        OpenWindowRequest::new(
            title,
            AppKind::TextEditor,
            WindowPosition::new(x, y),
            WindowSize::new(600, 400),
        )
    }

    #[test]
    fn open_assigns_workspace_counter_and_focus() {
        let mut store = WindowStore::default();
        let first = store.open_window(request("A", 10, 10), WS1);
        let second = store.open_window(request("B", 20, 20), WS1);

        assert_eq!(store.windows().len(), 2);
        assert_eq!(store.active_window_id(), Some(second));
        assert_eq!(store.window(first).map(|w| w.z_index), Some(1000));
        assert_eq!(store.window(second).map(|w| w.z_index), Some(1001));
        assert_eq!(store.next_z_index(), 1002);
    }

    #[test]
    fn same_title_on_other_workspace_opens_new_window() {
        let mut store = WindowStore::default();
        let first = store.open_window(request("Terminal", 0, 0), WS1);
        let second = store.open_window(request("Terminal", 0, 0), WS2);
        assert_ne!(first, second);
        assert_eq!(store.windows().len(), 2);
    }

    #[test]
    fn duplicate_open_restores_minimized_window() {
        let mut store = WindowStore::default();
        let id = store.open_window(request("Notes", 5, 5), WS1);
        store.minimize_window(id);
        assert_eq!(store.active_window_id(), None);

        let again = store.open_window(request("Notes", 300, 300), WS1);
        let window = store.window(id).expect("window");
        assert_eq!(again, id);
        assert!(!window.is_minimized);
        assert_eq!(window.position, WindowPosition::new(5, 5));
        assert_eq!(store.active_window_id(), Some(id));
    }

    #[test]
    fn minimize_inactive_window_keeps_focus() {
        let mut store = WindowStore::default();
        let a = store.open_window(request("A", 0, 0), WS1);
        let b = store.open_window(request("B", 0, 0), WS1);
        store.minimize_window(a);
        assert_eq!(store.active_window_id(), Some(b));
    }

    #[test]
    fn maximize_saves_geometry_without_changing_it() {
        let mut store = WindowStore::default();
        let id = store.open_window(request("A", 40, 60), WS1);
        store.toggle_maximize_window(id);

        let window = store.window(id).expect("window");
        assert!(window.is_maximized);
        assert_eq!(window.position, WindowPosition::new(40, 60));
        assert_eq!(window.prev_position, Some(WindowPosition::new(40, 60)));
        assert_eq!(window.prev_size, Some(WindowSize::new(600, 400)));
        assert_eq!(window.z_index, 1001);
    }

    #[test]
    fn restore_falls_back_to_current_geometry_without_saved_values() {
        let mut store = WindowStore::default();
        let id = store.open_window(request("A", 40, 60), WS1);
        store.toggle_maximize_window(id);
        if let Some(window) = store.windows.iter_mut().find(|w| w.id == id) {
            window.prev_position = None;
            window.prev_size = None;
        }
        store.toggle_maximize_window(id);
        let window = store.window(id).expect("window");
        assert!(!window.is_maximized);
        assert_eq!(window.position, WindowPosition::new(40, 60));
    }

    #[test]
    fn minimize_preserves_maximized_flag() {
        let mut store = WindowStore::default();
        let id = store.open_window(request("A", 0, 0), WS1);
        store.toggle_maximize_window(id);
        store.minimize_window(id);
        store.bring_to_front(id);
        let window = store.window(id).expect("window");
        assert!(window.is_maximized);
        assert!(!window.is_minimized);
    }

    #[test]
    fn show_desktop_only_touches_active_workspace() {
        let mut store = WindowStore::default();
        let a = store.open_window(request("A", 0, 0), WS1);
        let other = store.open_window(request("B", 0, 0), WS2);

        store.toggle_minimize_all_windows(WS1);
        assert!(store.window(a).expect("a").is_minimized);
        assert!(!store.window(other).expect("b").is_minimized);
        assert_eq!(store.active_window_id(), None);

        store.toggle_minimize_all_windows(WS1);
        assert!(!store.window(a).expect("a").is_minimized);
        assert_eq!(store.active_window_id(), None);
    }

    #[test]
    fn snap_clears_maximized_and_applies_half_rect() {
        let viewport = Viewport {
            width: 1000,
            height: 748,
            taskbar_height: 48,
        };
        let mut store = WindowStore::default();
        let id = store.open_window(request("A", 300, 300), WS1);
        store.toggle_maximize_window(id);
        store.snap_window(id, SnapPosition::Right, viewport);

        let window = store.window(id).expect("window");
        assert!(!window.is_maximized);
        assert_eq!(window.position, WindowPosition::new(500, 0));
        assert_eq!(window.size, WindowSize::new(500, 700));
    }

    #[test]
    fn unknown_ids_leave_state_untouched() {
        let mut store = WindowStore::default();
        let id = store.open_window(request("A", 0, 0), WS1);
        store.close_window(id, WS1);
        let before = store.clone();

        store.close_window(id, WS1);
        store.minimize_window(id);
        store.toggle_maximize_window(id);
        store.bring_to_front(id);
        store.update_window_position(id, WindowPosition::new(9, 9));
        store.update_window_size(id, WindowSize::new(9, 9));
        store.move_window_to_workspace(id, WS2);

        assert_eq!(store, before);
    }
}
