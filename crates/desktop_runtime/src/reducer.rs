//! Reducer actions, side-effect intents, and transition logic for the desktop session.

use desktop_app_contract::{
    default_open_request, resolve_run_command, AppKind, OpenWindowRequest, WindowPosition,
    WindowSize,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    layout,
    model::{
        ContextMenuCommand, ContextMenuState, DragSession, HotCorner, Overlay, PointerPosition,
        ResizeEdge, ResizeSession, SnapPosition, WindowId, WorkspaceId,
    },
    session::DesktopSession,
};

const START_MENU_TITLE: &str = "Start Menu";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
/// Actions accepted by [`reduce_desktop`] to mutate a [`DesktopSession`].
pub enum DesktopAction {
    /// Append a workspace and switch to it.
    AddWorkspace,
    /// Activate an existing workspace.
    SwitchWorkspace {
        /// Workspace to activate.
        workspace_id: WorkspaceId,
    },
    /// Open a window on the active workspace, or focus the one already carrying its title.
    OpenWindow(OpenWindowRequest),
    /// Close a window.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize or restore a window.
    ToggleMaximizeWindow {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Raise and focus a window, un-minimizing it.
    BringToFront {
        /// Window to raise.
        window_id: WindowId,
    },
    /// Show-desktop toggle for the active workspace.
    ToggleMinimizeAllWindows,
    /// Set a window's position directly.
    UpdateWindowPosition {
        /// Window to move.
        window_id: WindowId,
        /// New top-left corner.
        position: WindowPosition,
    },
    /// Set a window's size directly.
    UpdateWindowSize {
        /// Window to resize.
        window_id: WindowId,
        /// New size.
        size: WindowSize,
    },
    /// Reassign a window to another workspace.
    MoveWindowToWorkspace {
        /// Window to move.
        window_id: WindowId,
        /// Destination workspace.
        workspace_id: WorkspaceId,
    },
    /// Snap a window to a half of the screen.
    SnapWindow {
        /// Window to snap.
        window_id: WindowId,
        /// Target half.
        snap: SnapPosition,
    },
    /// Begin dragging a window by its header.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Release an in-progress drag, snapping when a preview is showing.
    EndMove {
        /// Pointer position at release.
        pointer: PointerPosition,
    },
    /// Begin resizing a window from an edge or corner.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active resize.
    EndResize,
    /// Pointer moved with no button held; drives hot corners.
    HoverPointer {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Open the window context menu. Missing values fall back to the active window and the
    /// keyboard menu position.
    ShowContextMenu {
        /// Target window.
        window_id: Option<WindowId>,
        /// Screen position of the menu.
        position: Option<PointerPosition>,
    },
    /// Dismiss the context menu.
    HideContextMenu,
    /// Run a context-menu entry against the menu's target, then dismiss the menu.
    RunContextMenuCommand {
        /// Chosen entry.
        command: ContextMenuCommand,
    },
    /// Flip a transient overlay.
    ToggleOverlay {
        /// Overlay to flip.
        overlay: Overlay,
    },
    /// Force a transient overlay open or closed.
    SetOverlay {
        /// Overlay to set.
        overlay: Overlay,
        /// Desired state.
        open: bool,
    },
    /// Open the window switcher, or advance its selection when already showing.
    ShowWindowSwitcher,
    /// Raise the switcher's selected window and close the switcher.
    CommitWindowSwitcher,
    /// Execute a run-dialog command.
    SubmitRunCommand {
        /// Raw text typed by the user.
        command: String,
    },
    /// Launch an app from the start menu and close the start menu window.
    LaunchFromStartMenu {
        /// App to launch.
        app: AppKind,
    },
    /// Ask the host to lock the session.
    LockSession,
    /// Ask the host to capture a screenshot.
    RequestScreenshot,
    /// The host screen changed size.
    ResizeViewport {
        /// New screen width.
        width: i32,
        /// New screen height.
        height: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the focused window's pane.
    FocusWindowInput(WindowId),
    /// Show a message to the user (for example, an unknown run-dialog command).
    ShowMessage(String),
    /// Tear down the desktop and show the lock screen.
    LockSession,
    /// Capture the screen.
    RequestScreenshot,
}

/// Applies a [`DesktopAction`] to the session and collects resulting side effects.
///
/// Actions that reference windows or workspaces no longer present are absorbed without changing
/// state.
pub fn reduce_desktop(session: &mut DesktopSession, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    let active_workspace = session.workspaces.active_workspace_id();
    match action {
        DesktopAction::AddWorkspace => {
            session.workspaces.add_workspace();
        }
        DesktopAction::SwitchWorkspace { workspace_id } => {
            session.workspaces.switch_workspace(workspace_id);
        }
        DesktopAction::OpenWindow(request) => {
            session.windows.open_window(request, active_workspace);
            push_focus_effect(session, &mut effects);
        }
        DesktopAction::CloseWindow { window_id } => {
            session.windows.close_window(window_id, active_workspace);
            drop_stale_sessions(session);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            session.windows.minimize_window(window_id);
        }
        DesktopAction::ToggleMaximizeWindow { window_id } => {
            if session.windows.window(window_id).is_some() {
                session.windows.toggle_maximize_window(window_id);
                push_focus_effect(session, &mut effects);
            }
        }
        DesktopAction::BringToFront { window_id } => {
            if session.windows.window(window_id).is_some() {
                session.windows.bring_to_front(window_id);
                push_focus_effect(session, &mut effects);
            }
        }
        DesktopAction::ToggleMinimizeAllWindows => {
            session.windows.toggle_minimize_all_windows(active_workspace);
        }
        DesktopAction::UpdateWindowPosition {
            window_id,
            position,
        } => {
            session.windows.update_window_position(window_id, position);
        }
        DesktopAction::UpdateWindowSize { window_id, size } => {
            session.windows.update_window_size(window_id, size);
        }
        DesktopAction::MoveWindowToWorkspace {
            window_id,
            workspace_id,
        } => {
            if session.workspaces.contains(workspace_id) {
                session
                    .windows
                    .move_window_to_workspace(window_id, workspace_id);
            } else {
                debug!(%workspace_id, "move to unknown workspace ignored");
            }
        }
        DesktopAction::SnapWindow { window_id, snap } => {
            session.windows.snap_window(window_id, snap, session.viewport);
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let Some(window) = session.windows.window(window_id) else {
                return effects;
            };
            if window.is_maximized {
                return effects;
            }
            session.interaction.resizing = None;
            session.interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                position_start: window.position,
                preview: None,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            update_drag(session, pointer);
        }
        DesktopAction::EndMove { pointer } => {
            update_drag(session, pointer);
            if let Some(drag) = session.interaction.dragging.take() {
                match drag.preview {
                    Some(snap) => {
                        info!(window_id = %drag.window_id, ?snap, "window snapped");
                        session
                            .windows
                            .snap_window(drag.window_id, snap, session.viewport);
                    }
                    None => {
                        let position = drag_target(&drag, pointer);
                        session
                            .windows
                            .update_window_position(drag.window_id, position);
                    }
                }
            }
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let Some(window) = session.windows.window(window_id) else {
                return effects;
            };
            if window.is_maximized {
                return effects;
            }
            session.interaction.dragging = None;
            session.interaction.resizing = Some(ResizeSession {
                window_id,
                edge,
                pointer_start: pointer,
                rect_start: window.rect(),
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(resize) = session.interaction.resizing.clone() {
                let (dx, dy) = pointer.delta_from(resize.pointer_start);
                let rect = layout::clamp_resized(
                    resize.rect_start,
                    layout::resize_rect(resize.rect_start, resize.edge, dx, dy),
                    resize.edge,
                    session.config.min_window_width,
                    session.config.min_window_height,
                );
                session
                    .windows
                    .update_window_position(resize.window_id, rect.position());
                session
                    .windows
                    .update_window_size(resize.window_id, rect.size());
                drop_stale_sessions(session);
            }
        }
        DesktopAction::EndResize => {
            session.interaction.resizing = None;
        }
        DesktopAction::HoverPointer { pointer } => {
            let corner =
                layout::hot_corner_at(pointer, session.viewport, session.config.hot_corner_size);
            let entered = corner.filter(|c| session.interaction.hot_corner != Some(*c));
            session.interaction.hot_corner = corner;
            match entered {
                Some(HotCorner::TopLeft) => {
                    session.overlays.set(Overlay::WorkspaceSwitcher, true);
                }
                Some(HotCorner::BottomRight) => {
                    session.windows.toggle_minimize_all_windows(active_workspace);
                }
                Some(HotCorner::TopRight | HotCorner::BottomLeft) | None => {}
            }
        }
        DesktopAction::ShowContextMenu {
            window_id,
            position,
        } => {
            let target = window_id
                .or(session.windows.active_window_id())
                .filter(|id| session.windows.window(*id).is_some());
            match target {
                Some(window_id) => {
                    session.context_menu = Some(ContextMenuState {
                        window_id,
                        position: position.unwrap_or(session.config.keyboard_menu_position),
                    });
                }
                None => debug!("context menu requested with no target window"),
            }
        }
        DesktopAction::HideContextMenu => {
            session.context_menu = None;
        }
        DesktopAction::RunContextMenuCommand { command } => {
            if let Some(menu) = session.context_menu.take() {
                let follow_up = match command {
                    ContextMenuCommand::Minimize => DesktopAction::MinimizeWindow {
                        window_id: menu.window_id,
                    },
                    ContextMenuCommand::Maximize => DesktopAction::ToggleMaximizeWindow {
                        window_id: menu.window_id,
                    },
                    ContextMenuCommand::Close => DesktopAction::CloseWindow {
                        window_id: menu.window_id,
                    },
                    ContextMenuCommand::MoveToWorkspace { workspace_id } => {
                        DesktopAction::MoveWindowToWorkspace {
                            window_id: menu.window_id,
                            workspace_id,
                        }
                    }
                };
                effects.extend(reduce_desktop(session, follow_up));
            }
        }
        DesktopAction::ToggleOverlay { overlay } => {
            if overlay == Overlay::WindowSwitcher {
                return reduce_desktop(session, DesktopAction::ShowWindowSwitcher);
            }
            let open = session.overlays.is_open(overlay);
            session.overlays.set(overlay, !open);
        }
        DesktopAction::SetOverlay { overlay, open } => {
            session.overlays.set(overlay, open);
        }
        DesktopAction::ShowWindowSwitcher => {
            let count = session.window_switcher_entries().len();
            session.overlays.window_switcher = match (session.overlays.window_switcher, count) {
                (_, 0) => None,
                (Some(selected), count) => Some((selected + 1) % count),
                (None, _) => Some(0),
            };
        }
        DesktopAction::CommitWindowSwitcher => {
            if let Some(selected) = session.overlays.window_switcher.take() {
                if let Some(window_id) = session.window_switcher_entries().get(selected).copied() {
                    effects.extend(reduce_desktop(
                        session,
                        DesktopAction::BringToFront { window_id },
                    ));
                }
            }
        }
        DesktopAction::SubmitRunCommand { command } => match resolve_run_command(&command) {
            Ok(request) => {
                session.overlays.run_dialog = false;
                effects.extend(reduce_desktop(session, DesktopAction::OpenWindow(request)));
            }
            Err(err) => {
                debug!(%command, "run dialog command rejected");
                effects.push(RuntimeEffect::ShowMessage(err.to_string()));
            }
        },
        DesktopAction::LaunchFromStartMenu { app } => {
            let Some(request) = default_open_request(app) else {
                return effects;
            };
            effects.extend(reduce_desktop(session, DesktopAction::OpenWindow(request)));
            let start_menu = session
                .windows
                .windows_in_workspace(active_workspace)
                .find(|w| w.title == START_MENU_TITLE)
                .map(|w| w.id);
            if let Some(window_id) = start_menu {
                effects.extend(reduce_desktop(
                    session,
                    DesktopAction::CloseWindow { window_id },
                ));
            }
        }
        DesktopAction::LockSession => {
            effects.push(RuntimeEffect::LockSession);
        }
        DesktopAction::RequestScreenshot => {
            effects.push(RuntimeEffect::RequestScreenshot);
        }
        DesktopAction::ResizeViewport { width, height } => {
            session.viewport.width = width.max(0);
            session.viewport.height = height.max(0);
        }
    }
    effects
}

fn push_focus_effect(session: &DesktopSession, effects: &mut Vec<RuntimeEffect>) {
    if let Some(window_id) = session.windows.active_window_id() {
        effects.push(RuntimeEffect::FocusWindowInput(window_id));
    }
}

fn drag_target(drag: &DragSession, pointer: PointerPosition) -> WindowPosition {
    let (dx, dy) = pointer.delta_from(drag.pointer_start);
    drag.position_start.offset(dx, dy).clamped_non_negative()
}

fn update_drag(session: &mut DesktopSession, pointer: PointerPosition) {
    let viewport = session.viewport;
    let threshold = session.config.snap_edge_threshold;
    let Some(drag) = session.interaction.dragging.as_mut() else {
        return;
    };
    drag.preview = layout::snap_preview_at(pointer.x, viewport, threshold);
    let window_id = drag.window_id;
    let position = drag_target(drag, pointer);
    session.windows.update_window_position(window_id, position);
    drop_stale_sessions(session);
}

/// A drag or resize whose window has gone away is cancelled.
fn drop_stale_sessions(session: &mut DesktopSession) {
    let windows = &session.windows;
    let interaction = &mut session.interaction;
    if let Some(drag) = &interaction.dragging {
        if windows.window(drag.window_id).is_none() {
            debug!(window_id = %drag.window_id, "drag cancelled; window closed");
            interaction.dragging = None;
        }
    }
    if let Some(resize) = &interaction.resizing {
        if windows.window(resize.window_id).is_none() {
            debug!(window_id = %resize.window_id, "resize cancelled; window closed");
            interaction.resizing = None;
        }
    }
}
