//! Raw pointer and keyboard events and their translation into [`DesktopAction`]s.
//!
//! Translation reads the session but never mutates it, so a host can log or replay the action
//! stream independently of the state it produced.

use desktop_app_contract::{default_open_request, start_menu_request, AppKind};
use serde::{Deserialize, Serialize};

use crate::{
    hotkeys::{self, HotkeyAction, KeyChord},
    model::{
        ContextMenuCommand, Overlay, PointerPosition, ResizeEdge, WindowId, WorkspaceId,
    },
    reducer::DesktopAction,
    session::DesktopSession,
};

/// Window title-bar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitleButton {
    Minimize,
    Maximize,
    Close,
}

/// Input reported by the host, already hit-tested against the rendered shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InputEvent {
    /// Primary button pressed on a window header.
    HeaderPointerDown {
        window_id: WindowId,
        pointer: PointerPosition,
    },
    /// Primary button pressed anywhere else inside a window.
    WindowPointerDown { window_id: WindowId },
    HeaderDoubleClick { window_id: WindowId },
    TitleButton {
        window_id: WindowId,
        button: TitleButton,
    },
    ResizeHandlePointerDown {
        window_id: WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
    },
    PointerMove { pointer: PointerPosition },
    PointerUp { pointer: PointerPosition },
    /// Click that hit no shell control, such as the desktop background.
    Click { pointer: PointerPosition },
    /// Secondary click on a window.
    ContextMenuRequest {
        window_id: WindowId,
        pointer: PointerPosition,
    },
    ContextMenuSelect { command: ContextMenuCommand },
    ContextMenuPointerLeave,
    KeyDown { chord: KeyChord },
    KeyUp { key: String },
    TaskbarStartButton,
    TaskbarLauncher { app: AppKind },
    TaskbarWindowButton { window_id: WindowId },
    TaskbarShowDesktop,
    TaskbarOverlayToggle { overlay: Overlay },
    DesktopIconOpen { app: AppKind },
    StartMenuLaunch { app: AppKind },
    RunDialogSubmit { command: String },
    OverlayDismiss { overlay: Overlay },
    WorkspaceSwitcherSelect { workspace_id: WorkspaceId },
    WorkspaceSwitcherAdd,
    /// A taskbar or switcher thumbnail dropped onto a workspace tile.
    WorkspaceSwitcherDrop {
        window_id: WindowId,
        workspace_id: WorkspaceId,
    },
    WindowSwitcherSelect { window_id: WindowId },
    ViewportResized { width: i32, height: i32 },
}

impl InputEvent {
    /// Presses and clicks anywhere in the shell, each of which dismisses an open context menu.
    fn is_click(&self) -> bool {
        matches!(
            self,
            Self::Click { .. }
                | Self::HeaderPointerDown { .. }
                | Self::WindowPointerDown { .. }
                | Self::ResizeHandlePointerDown { .. }
                | Self::HeaderDoubleClick { .. }
                | Self::TitleButton { .. }
                | Self::TaskbarStartButton
                | Self::TaskbarLauncher { .. }
                | Self::TaskbarWindowButton { .. }
                | Self::TaskbarShowDesktop
                | Self::TaskbarOverlayToggle { .. }
                | Self::DesktopIconOpen { .. }
                | Self::StartMenuLaunch { .. }
                | Self::WorkspaceSwitcherSelect { .. }
                | Self::WorkspaceSwitcherAdd
                | Self::WindowSwitcherSelect { .. }
        )
    }
}

/// Actions `event` produces against the current session, in dispatch order.
pub fn actions_for_input(session: &DesktopSession, event: &InputEvent) -> Vec<DesktopAction> {
    let mut actions = match event {
        InputEvent::HeaderPointerDown { window_id, pointer } => {
            let mut actions = vec![DesktopAction::BringToFront {
                window_id: *window_id,
            }];
            if session.window(*window_id).is_some_and(|w| !w.is_maximized) {
                actions.push(DesktopAction::BeginMove {
                    window_id: *window_id,
                    pointer: *pointer,
                });
            }
            actions
        }
        InputEvent::WindowPointerDown { window_id } => vec![DesktopAction::BringToFront {
            window_id: *window_id,
        }],
        InputEvent::HeaderDoubleClick { window_id } => vec![DesktopAction::ToggleMaximizeWindow {
            window_id: *window_id,
        }],
        InputEvent::TitleButton { window_id, button } => {
            let window_id = *window_id;
            vec![match button {
                TitleButton::Minimize => DesktopAction::MinimizeWindow { window_id },
                TitleButton::Maximize => DesktopAction::ToggleMaximizeWindow { window_id },
                TitleButton::Close => DesktopAction::CloseWindow { window_id },
            }]
        }
        InputEvent::ResizeHandlePointerDown {
            window_id,
            edge,
            pointer,
        } => vec![
            DesktopAction::BringToFront {
                window_id: *window_id,
            },
            DesktopAction::BeginResize {
                window_id: *window_id,
                edge: *edge,
                pointer: *pointer,
            },
        ],
        InputEvent::PointerMove { pointer } => {
            let pointer = *pointer;
            let interaction = session.interaction();
            if interaction.dragging.is_some() {
                vec![DesktopAction::UpdateMove { pointer }]
            } else if interaction.resizing.is_some() {
                vec![DesktopAction::UpdateResize { pointer }]
            } else {
                vec![DesktopAction::HoverPointer { pointer }]
            }
        }
        InputEvent::PointerUp { pointer } => {
            let interaction = session.interaction();
            if interaction.dragging.is_some() {
                vec![DesktopAction::EndMove { pointer: *pointer }]
            } else if interaction.resizing.is_some() {
                vec![DesktopAction::EndResize]
            } else {
                Vec::new()
            }
        }
        InputEvent::Click { .. } => Vec::new(),
        InputEvent::ContextMenuRequest { window_id, pointer } => {
            vec![DesktopAction::ShowContextMenu {
                window_id: Some(*window_id),
                position: Some(*pointer),
            }]
        }
        InputEvent::ContextMenuSelect { command } => {
            vec![DesktopAction::RunContextMenuCommand { command: *command }]
        }
        InputEvent::ContextMenuPointerLeave => vec![DesktopAction::HideContextMenu],
        InputEvent::KeyDown { chord } => hotkeys::resolve(&session.config().hotkeys, chord)
            .into_iter()
            .filter_map(|action| hotkey_to_action(session, action))
            .collect(),
        InputEvent::KeyUp { key } => {
            if key == "Alt" && session.overlays().window_switcher.is_some() {
                vec![DesktopAction::CommitWindowSwitcher]
            } else {
                Vec::new()
            }
        }
        InputEvent::TaskbarStartButton => vec![DesktopAction::OpenWindow(start_menu_request(
            session.viewport().height,
        ))],
        InputEvent::TaskbarLauncher { app } | InputEvent::DesktopIconOpen { app } => {
            default_open_request(*app)
                .map(DesktopAction::OpenWindow)
                .into_iter()
                .collect()
        }
        InputEvent::TaskbarWindowButton { window_id } => vec![DesktopAction::BringToFront {
            window_id: *window_id,
        }],
        InputEvent::TaskbarShowDesktop => vec![DesktopAction::ToggleMinimizeAllWindows],
        InputEvent::TaskbarOverlayToggle { overlay } => {
            vec![DesktopAction::ToggleOverlay { overlay: *overlay }]
        }
        InputEvent::StartMenuLaunch { app } => {
            vec![DesktopAction::LaunchFromStartMenu { app: *app }]
        }
        InputEvent::RunDialogSubmit { command } => vec![DesktopAction::SubmitRunCommand {
            command: command.clone(),
        }],
        InputEvent::OverlayDismiss { overlay } => vec![DesktopAction::SetOverlay {
            overlay: *overlay,
            open: false,
        }],
        InputEvent::WorkspaceSwitcherSelect { workspace_id } => vec![
            DesktopAction::SwitchWorkspace {
                workspace_id: *workspace_id,
            },
            DesktopAction::SetOverlay {
                overlay: Overlay::WorkspaceSwitcher,
                open: false,
            },
        ],
        InputEvent::WorkspaceSwitcherAdd => vec![DesktopAction::AddWorkspace],
        InputEvent::WorkspaceSwitcherDrop {
            window_id,
            workspace_id,
        } => vec![DesktopAction::MoveWindowToWorkspace {
            window_id: *window_id,
            workspace_id: *workspace_id,
        }],
        InputEvent::WindowSwitcherSelect { window_id } => vec![
            DesktopAction::BringToFront {
                window_id: *window_id,
            },
            DesktopAction::SetOverlay {
                overlay: Overlay::WindowSwitcher,
                open: false,
            },
        ],
        InputEvent::ViewportResized { width, height } => vec![DesktopAction::ResizeViewport {
            width: *width,
            height: *height,
        }],
    };

    if event.is_click() && session.context_menu().is_some() {
        actions.push(DesktopAction::HideContextMenu);
    }
    actions
}

fn hotkey_to_action(session: &DesktopSession, action: &HotkeyAction) -> Option<DesktopAction> {
    Some(match action {
        HotkeyAction::ToggleOverlay { overlay } => DesktopAction::ToggleOverlay { overlay: *overlay },
        HotkeyAction::ShowWindowSwitcher => DesktopAction::ShowWindowSwitcher,
        HotkeyAction::ToggleMinimizeAll => DesktopAction::ToggleMinimizeAllWindows,
        HotkeyAction::OpenWindow { request } => DesktopAction::OpenWindow(request.clone()),
        HotkeyAction::CloseActiveWindow => DesktopAction::CloseWindow {
            window_id: session.active_window_id()?,
        },
        HotkeyAction::ShowContextMenu => DesktopAction::ShowContextMenu {
            window_id: None,
            position: None,
        },
        HotkeyAction::LockSession => DesktopAction::LockSession,
        HotkeyAction::RequestScreenshot => DesktopAction::RequestScreenshot,
    })
}
