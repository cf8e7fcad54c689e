//! Static application registry: launcher labels, desktop icons, taskbar pins, and the default
//! geometry each entry point opens its window with.

use crate::{AppKind, OpenWindowRequest, RunCommandError, WindowPosition, WindowSize};

/// Where run-dialog launches place their window.
pub const RUN_DIALOG_POSITION: WindowPosition = WindowPosition::new(200, 150);

const START_MENU_SIZE: WindowSize = WindowSize::new(450, 500);
const START_MENU_BOTTOM_OFFSET: i32 = 550;

/// Registry entry for one launchable application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Application kind.
    pub app: AppKind,
    /// Window title (and launcher label).
    pub title: &'static str,
    /// Position used by desktop icons and launchers.
    pub default_position: WindowPosition,
    /// Size used by desktop icons and launchers.
    pub default_size: WindowSize,
    /// Listed in the start menu.
    pub show_in_launcher: bool,
    /// Shown as a desktop icon.
    pub show_on_desktop: bool,
    /// Pinned to the taskbar.
    pub pinned_to_taskbar: bool,
}

const fn descriptor(
    app: AppKind,
    title: &'static str,
    position: (i32, i32),
    size: (i32, i32),
    show_on_desktop: bool,
    pinned_to_taskbar: bool,
) -> AppDescriptor {
    AppDescriptor {
        app,
        title,
        default_position: WindowPosition::new(position.0, position.1),
        default_size: WindowSize::new(size.0, size.1),
        show_in_launcher: true,
        show_on_desktop,
        pinned_to_taskbar,
    }
}

const APP_REGISTRY: [AppDescriptor; 10] = [
    descriptor(AppKind::Terminal, "Terminal", (100, 100), (600, 400), false, true),
    descriptor(AppKind::FileManager, "File Manager", (150, 50), (700, 500), true, true),
    descriptor(AppKind::SystemMonitor, "System Monitor", (200, 100), (600, 450), true, false),
    descriptor(AppKind::TextEditor, "Text Editor", (100, 150), (600, 400), true, false),
    descriptor(AppKind::Calculator, "Calculator", (300, 200), (320, 450), true, false),
    descriptor(AppKind::Settings, "Settings", (250, 150), (550, 400), true, false),
    descriptor(AppKind::PackageManager, "Package Manager", (220, 120), (700, 500), true, false),
    descriptor(AppKind::ImageViewer, "Image Viewer", (160, 90), (800, 600), false, false),
    descriptor(AppKind::WebBrowser, "Web Browser", (120, 40), (1024, 768), false, false),
    descriptor(AppKind::Calendar, "Calendar", (180, 110), (800, 600), false, false),
];

const RUN_COMMANDS: [(&str, AppKind, WindowSize); 5] = [
    ("terminal", AppKind::Terminal, WindowSize::new(600, 400)),
    ("calc", AppKind::Calculator, WindowSize::new(320, 450)),
    ("notepad", AppKind::TextEditor, WindowSize::new(600, 400)),
    ("settings", AppKind::Settings, WindowSize::new(500, 400)),
    ("explorer", AppKind::FileManager, WindowSize::new(700, 500)),
];

/// Every registered application in launcher order. The start menu itself is not listed.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Looks up the registry entry for `app`.
pub fn app_descriptor(app: AppKind) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| entry.app == app)
}

/// Start menu entries.
pub fn launcher_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_launcher)
        .collect()
}

/// Start menu entries whose title contains `term`, ignoring case.
pub fn search_launcher_apps(term: &str) -> Vec<AppDescriptor> {
    let needle = term.trim().to_lowercase();
    launcher_apps()
        .into_iter()
        .filter(|entry| entry.title.to_lowercase().contains(&needle))
        .collect()
}

/// Desktop icon entries.
pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

/// Taskbar launcher pins, left to right.
pub fn taskbar_pins() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.pinned_to_taskbar)
        .collect()
}

/// Open request built from the registry defaults for `app`.
///
/// Returns `None` for the start menu, whose placement depends on the screen height; see
/// [`start_menu_request`].
pub fn default_open_request(app: AppKind) -> Option<OpenWindowRequest> {
    app_descriptor(app).map(|entry| {
        OpenWindowRequest::new(
            entry.title,
            entry.app,
            entry.default_position,
            entry.default_size,
        )
    })
}

/// Open request for the start menu, anchored above the taskbar.
pub fn start_menu_request(screen_height: i32) -> OpenWindowRequest {
    OpenWindowRequest::new(
        "Start Menu",
        AppKind::StartMenu,
        WindowPosition::new(10, screen_height - START_MENU_BOTTOM_OFFSET),
        START_MENU_SIZE,
    )
}

/// Resolves a run-dialog command (case-insensitive, surrounding whitespace ignored).
///
/// # Errors
///
/// Returns [`RunCommandError::NotFound`] when the command does not name a runnable program.
pub fn resolve_run_command(raw: &str) -> Result<OpenWindowRequest, RunCommandError> {
    let command = raw.trim().to_lowercase();
    let (_, app, size) = RUN_COMMANDS
        .iter()
        .find(|(name, _, _)| *name == command)
        .ok_or_else(|| RunCommandError::NotFound(command.clone()))?;
    let title = app_descriptor(*app)
        .map(|entry| entry.title)
        .unwrap_or_else(|| app.component_name());
    Ok(OpenWindowRequest::new(
        title,
        *app,
        RUN_DIALOG_POSITION,
        *size,
    ))
}
