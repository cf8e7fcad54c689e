//! Window, workspace, and interaction state types shared across the runtime.

use std::fmt;

use desktop_app_contract::{AppKind, WindowPosition, WindowRect, WindowSize};
use serde::{Deserialize, Serialize};

/// Opaque window identifier, unique for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(pub u64);

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    /// Pane token handed to the rendering layer; never inspected by the core.
    pub component: AppKind,
    pub workspace_id: WorkspaceId,
    pub position: WindowPosition,
    pub size: WindowSize,
    pub prev_position: Option<WindowPosition>,
    pub prev_size: Option<WindowSize>,
    pub is_maximized: bool,
    pub is_minimized: bool,
    pub z_index: u32,
}

impl WindowRecord {
    pub fn rect(&self) -> WindowRect {
        WindowRect::from_parts(self.position, self.size)
    }
}

/// Edge-snap targets. Only `Left` and `Right` have geometry; the corner variants are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapPosition {
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to this pointer, saturating at the `i32` range.
    pub fn delta_from(self, origin: PointerPosition) -> (i32, i32) {
        (
            self.x.saturating_sub(origin.x),
            self.y.saturating_sub(origin.y),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Screen dimensions supplied by the host plus the strip reserved for the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub taskbar_height: i32,
}

impl Viewport {
    /// Area windows may occupy: the full width, minus the taskbar at the bottom.
    pub fn available_area(self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.width,
            h: self.height.saturating_sub(self.taskbar_height).max(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuState {
    pub window_id: WindowId,
    pub position: PointerPosition,
}

/// Commands offered by the window context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum ContextMenuCommand {
    Minimize,
    Maximize,
    Close,
    MoveToWorkspace { workspace_id: WorkspaceId },
}

/// Transient shell overlays. These are toggled flags, not windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overlay {
    AiAssistant,
    RunDialog,
    NotificationCenter,
    WorkspaceSwitcher,
    WindowSwitcher,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayState {
    pub ai_assistant: bool,
    pub run_dialog: bool,
    pub notification_center: bool,
    pub workspace_switcher: bool,
    /// Selected entry while the Alt+Tab switcher is showing.
    pub window_switcher: Option<usize>,
}

impl OverlayState {
    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::AiAssistant => self.ai_assistant,
            Overlay::RunDialog => self.run_dialog,
            Overlay::NotificationCenter => self.notification_center,
            Overlay::WorkspaceSwitcher => self.workspace_switcher,
            Overlay::WindowSwitcher => self.window_switcher.is_some(),
        }
    }

    pub fn set(&mut self, overlay: Overlay, open: bool) {
        match overlay {
            Overlay::AiAssistant => self.ai_assistant = open,
            Overlay::RunDialog => self.run_dialog = open,
            Overlay::NotificationCenter => self.notification_center = open,
            Overlay::WorkspaceSwitcher => self.workspace_switcher = open,
            Overlay::WindowSwitcher => {
                self.window_switcher = if open {
                    Some(self.window_switcher.unwrap_or(0))
                } else {
                    None
                };
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HotCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
    pub preview: Option<SnapPosition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

/// Pointer bookkeeping owned by the interaction adapter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
    pub hot_corner: Option<HotCorner>,
}

impl InteractionState {
    pub fn snap_preview(&self) -> Option<SnapPosition> {
        self.dragging.as_ref().and_then(|session| session.preview)
    }
}

/// Read-only snapshot of everything the rendering layer queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopView {
    pub workspaces: Vec<Workspace>,
    pub active_workspace_id: WorkspaceId,
    pub windows: Vec<WindowRecord>,
    pub current_workspace_windows: Vec<WindowRecord>,
    pub active_window_id: Option<WindowId>,
    pub context_menu: Option<ContextMenuState>,
    pub overlays: OverlayState,
    pub snap_preview: Option<SnapPosition>,
}
