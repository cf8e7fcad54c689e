//! Shared contract types between the desktop window manager core and the application panes it
//! hosts.
//!
//! Collaborators never build a full window record. They describe what they want opened with an
//! [`OpenWindowRequest`] and the core owns ids, stacking, and visibility flags. The pane to render
//! is named by [`AppKind`], a closed set of known application kinds that the core carries as an
//! opaque token.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use catalog::{
    app_descriptor, app_registry, default_open_request, desktop_icon_apps, launcher_apps,
    resolve_run_command, search_launcher_apps, start_menu_request, taskbar_pins, AppDescriptor,
    RUN_DIALOG_POSITION,
};

/// Application pane rendered inside a managed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppKind {
    /// Shell terminal emulator.
    Terminal,
    /// Mock file tree browser.
    FileManager,
    /// Launcher listing every installed application.
    StartMenu,
    /// CPU/memory/process metrics display.
    SystemMonitor,
    /// Plain text editor.
    TextEditor,
    /// Calculator.
    Calculator,
    /// Desktop settings.
    Settings,
    /// Simulated web browser.
    WebBrowser,
    /// Image viewer.
    ImageViewer,
    /// Month calendar.
    Calendar,
    /// Installed package list.
    PackageManager,
}

impl AppKind {
    /// Every known application kind, in launcher order.
    pub const ALL: [AppKind; 11] = [
        AppKind::Terminal,
        AppKind::FileManager,
        AppKind::StartMenu,
        AppKind::SystemMonitor,
        AppKind::TextEditor,
        AppKind::Calculator,
        AppKind::Settings,
        AppKind::WebBrowser,
        AppKind::ImageViewer,
        AppKind::Calendar,
        AppKind::PackageManager,
    ];

    /// Stable component token used by the rendering layer.
    pub const fn component_name(self) -> &'static str {
        match self {
            Self::Terminal => "Terminal",
            Self::FileManager => "FileManager",
            Self::StartMenu => "StartMenu",
            Self::SystemMonitor => "SystemMonitor",
            Self::TextEditor => "TextEditor",
            Self::Calculator => "Calculator",
            Self::Settings => "Settings",
            Self::WebBrowser => "WebBrowser",
            Self::ImageViewer => "ImageViewer",
            Self::Calendar => "Calendar",
            Self::PackageManager => "PackageManager",
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component_name())
    }
}

/// Error returned when a component token does not name a known [`AppKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown application component `{0}`")]
pub struct UnknownComponent(pub String);

impl FromStr for AppKind {
    type Err = UnknownComponent;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        AppKind::ALL
            .into_iter()
            .find(|kind| kind.component_name() == raw)
            .ok_or_else(|| UnknownComponent(raw.to_string()))
    }
}

/// Top-left corner of a window in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    /// Horizontal offset from the desktop's left edge.
    pub x: i32,
    /// Vertical offset from the desktop's top edge.
    pub y: i32,
}

impl WindowPosition {
    /// Creates a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Returns the position with negative coordinates raised to zero.
    pub fn clamped_non_negative(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
        }
    }
}

/// Outer window dimensions in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowSize {
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl WindowSize {
    /// Creates a size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the size grown to at least `min_w` x `min_h`.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            width: self.width.max(min_w),
            height: self.height.max(min_h),
        }
    }
}

/// Position and size combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl WindowRect {
    /// Builds a rect from a position and a size.
    pub const fn from_parts(position: WindowPosition, size: WindowSize) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.width,
            h: size.height,
        }
    }

    /// Top-left corner.
    pub const fn position(self) -> WindowPosition {
        WindowPosition::new(self.x, self.y)
    }

    /// Dimensions.
    pub const fn size(self) -> WindowSize {
        WindowSize::new(self.w, self.h)
    }

    /// Returns whether the point lies inside the rect (right/bottom edges exclusive).
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.w)
            && y >= self.y
            && y < self.y.saturating_add(self.h)
    }
}

/// Request to open a window, as issued by launchers, hotkeys, and the run dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    /// Window title, also the de-duplication key within a workspace.
    pub title: String,
    /// Pane to render.
    pub component: AppKind,
    /// Initial top-left corner.
    pub position: WindowPosition,
    /// Initial size.
    pub size: WindowSize,
}

impl OpenWindowRequest {
    /// Creates a request.
    pub fn new(
        title: impl Into<String>,
        component: AppKind,
        position: WindowPosition,
        size: WindowSize,
    ) -> Self {
        Self {
            title: title.into(),
            component,
            position,
            size,
        }
    }
}

/// Run-dialog failure surfaced to the user by the collaborator layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunCommandError {
    /// The typed command does not name a runnable program.
    #[error("Command not found: {0}")]
    NotFound(String),
}
