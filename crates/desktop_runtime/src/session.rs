//! The desktop session: single owner of all shell state plus its query surface.

use desktop_app_contract::WindowSize;
use tracing::info;

use crate::{
    config::DesktopConfig,
    interaction::{actions_for_input, InputEvent},
    model::{
        ContextMenuCommand, ContextMenuState, DesktopView, InteractionState, OverlayState,
        SnapPosition, Viewport, WindowId, WindowRecord, Workspace, WorkspaceId,
    },
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    stacking,
    window_store::WindowStore,
    workspace::WorkspaceRegistry,
};

/// Shell state for one logged-in desktop. Hosts hold one of these and feed it actions or raw
/// input events.
#[derive(Debug, Clone)]
pub struct DesktopSession {
    pub(crate) config: DesktopConfig,
    pub(crate) viewport: Viewport,
    pub(crate) workspaces: WorkspaceRegistry,
    pub(crate) windows: WindowStore,
    pub(crate) context_menu: Option<ContextMenuState>,
    pub(crate) overlays: OverlayState,
    pub(crate) interaction: InteractionState,
}

impl DesktopSession {
    pub fn new(config: DesktopConfig, screen: WindowSize) -> Self {
        Self::with_registry(config, screen, WorkspaceRegistry::default())
    }

    /// Builds a session around a prepared workspace registry, typically one with a fixed clock.
    pub fn with_registry(
        config: DesktopConfig,
        screen: WindowSize,
        workspaces: WorkspaceRegistry,
    ) -> Self {
        let viewport = Viewport {
            width: screen.width,
            height: screen.height,
            taskbar_height: config.taskbar_height,
        };
        info!(
            width = screen.width,
            height = screen.height,
            bindings = config.hotkeys.len(),
            "desktop session started"
        );
        Self {
            windows: WindowStore::new(config.initial_z_index),
            config,
            viewport,
            workspaces,
            context_menu: None,
            overlays: OverlayState::default(),
            interaction: InteractionState::default(),
        }
    }

    /// Applies one action. See [`reduce_desktop`].
    pub fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(self, action)
    }

    /// Translates a raw input event and applies the resulting actions in order.
    pub fn handle_input(&mut self, event: &InputEvent) -> Vec<RuntimeEffect> {
        let mut effects = Vec::new();
        for action in actions_for_input(self, event) {
            effects.extend(self.dispatch(action));
        }
        effects
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn workspaces(&self) -> &[Workspace] {
        self.workspaces.workspaces()
    }

    pub fn active_workspace_id(&self) -> WorkspaceId {
        self.workspaces.active_workspace_id()
    }

    /// Every window on every workspace, in creation order.
    pub fn windows(&self) -> &[WindowRecord] {
        self.windows.windows()
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.window(window_id)
    }

    /// Windows on the active workspace, in creation order.
    pub fn current_workspace_windows(&self) -> Vec<&WindowRecord> {
        self.windows
            .windows_in_workspace(self.active_workspace_id())
            .collect()
    }

    /// Visible windows on the active workspace, back to front.
    pub fn paint_order(&self) -> Vec<&WindowRecord> {
        stacking::paint_order(
            self.windows
                .windows_in_workspace(self.active_workspace_id())
                .filter(|w| !w.is_minimized),
        )
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.windows.active_window_id()
    }

    pub fn next_z_index(&self) -> u32 {
        self.windows.next_z_index()
    }

    pub fn context_menu(&self) -> Option<ContextMenuState> {
        self.context_menu
    }

    pub fn overlays(&self) -> &OverlayState {
        &self.overlays
    }

    pub fn snap_preview(&self) -> Option<SnapPosition> {
        self.interaction.snap_preview()
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Entries of the open context menu: window commands, then one move target per workspace.
    pub fn context_menu_entries(&self) -> Vec<ContextMenuCommand> {
        if self.context_menu.is_none() {
            return Vec::new();
        }
        let mut entries = vec![
            ContextMenuCommand::Minimize,
            ContextMenuCommand::Maximize,
            ContextMenuCommand::Close,
        ];
        entries.extend(
            self.workspaces()
                .iter()
                .map(|ws| ContextMenuCommand::MoveToWorkspace { workspace_id: ws.id }),
        );
        entries
    }

    /// Alt+Tab candidates: non-minimized windows on every workspace, in creation order.
    pub fn window_switcher_entries(&self) -> Vec<WindowId> {
        self.windows
            .windows()
            .iter()
            .filter(|w| !w.is_minimized)
            .map(|w| w.id)
            .collect()
    }

    /// Owned snapshot of everything a renderer needs.
    pub fn view(&self) -> DesktopView {
        DesktopView {
            workspaces: self.workspaces().to_vec(),
            active_workspace_id: self.active_workspace_id(),
            windows: self.windows().to_vec(),
            current_workspace_windows: self
                .current_workspace_windows()
                .into_iter()
                .cloned()
                .collect(),
            active_window_id: self.active_window_id(),
            context_menu: self.context_menu,
            overlays: self.overlays.clone(),
            snap_preview: self.snap_preview(),
        }
    }
}
