//! Global keyboard chord table.

use std::fmt;

use desktop_app_contract::{AppKind, OpenWindowRequest, WindowPosition, WindowSize};
use serde::{Deserialize, Serialize};

use crate::model::Overlay;

/// A key press as resolved by the platform input layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyChord {
    /// Logical key value (`"d"`, `"Tab"`, `"F4"`, `" "`).
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// What a matched binding asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum HotkeyAction {
    ToggleOverlay { overlay: Overlay },
    ShowWindowSwitcher,
    ToggleMinimizeAll,
    OpenWindow { request: OpenWindowRequest },
    CloseActiveWindow,
    ShowContextMenu,
    LockSession,
    RequestScreenshot,
}

impl fmt::Display for HotkeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToggleOverlay { overlay } => write!(f, "Toggle {overlay:?}"),
            Self::ShowWindowSwitcher => f.write_str("Show window switcher"),
            Self::ToggleMinimizeAll => f.write_str("Show desktop"),
            Self::OpenWindow { request } => write!(f, "Open {}", request.title),
            Self::CloseActiveWindow => f.write_str("Close active window"),
            Self::ShowContextMenu => f.write_str("Window context menu"),
            Self::LockSession => f.write_str("Lock"),
            Self::RequestScreenshot => f.write_str("Screenshot"),
        }
    }
}

/// One row of the chord table. A modifier left as `None` matches either state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyBinding {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctrl: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<bool>,
    #[serde(flatten)]
    pub action: HotkeyAction,
}

impl HotkeyBinding {
    fn on(key: &str, action: HotkeyAction) -> Self {
        Self {
            key: key.to_string(),
            ctrl: None,
            alt: None,
            shift: None,
            meta: None,
            action,
        }
    }

    fn with_ctrl(mut self) -> Self {
        self.ctrl = Some(true);
        self
    }

    fn with_alt(mut self) -> Self {
        self.alt = Some(true);
        self
    }

    fn with_shift(mut self) -> Self {
        self.shift = Some(true);
        self
    }

    fn with_meta(mut self) -> Self {
        self.meta = Some(true);
        self
    }

    pub fn matches(&self, chord: &KeyChord) -> bool {
        fn modifier_ok(wanted: Option<bool>, pressed: bool) -> bool {
            wanted.map_or(true, |wanted| wanted == pressed)
        }

        self.key.to_lowercase() == chord.key.to_lowercase()
            && modifier_ok(self.ctrl, chord.ctrl)
            && modifier_ok(self.alt, chord.alt)
            && modifier_ok(self.shift, chord.shift)
            && modifier_ok(self.meta, chord.meta)
    }

    /// Human-readable chord, e.g. `Ctrl+Alt+A`.
    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl == Some(true) {
            parts.push("Ctrl".to_string());
        }
        if self.alt == Some(true) {
            parts.push("Alt".to_string());
        }
        if self.shift == Some(true) {
            parts.push("Shift".to_string());
        }
        if self.meta == Some(true) {
            parts.push("Win".to_string());
        }
        let key = match self.key.as_str() {
            " " => "Space".to_string(),
            k if k.chars().count() == 1 => k.to_uppercase(),
            k => k.to_string(),
        };
        parts.push(key);
        parts.join("+")
    }
}

/// Every binding matching `chord`, in table order. All of them fire.
pub fn resolve<'a>(bindings: &'a [HotkeyBinding], chord: &KeyChord) -> Vec<&'a HotkeyAction> {
    bindings
        .iter()
        .filter(|binding| binding.matches(chord))
        .map(|binding| &binding.action)
        .collect()
}

pub fn default_bindings() -> Vec<HotkeyBinding> {
    vec![
        HotkeyBinding::on(
            "a",
            HotkeyAction::ToggleOverlay {
                overlay: Overlay::AiAssistant,
            },
        )
        .with_ctrl()
        .with_alt(),
        HotkeyBinding::on("d", HotkeyAction::ToggleMinimizeAll).with_meta(),
        HotkeyBinding::on("l", HotkeyAction::LockSession).with_meta(),
        HotkeyBinding::on(
            "p",
            HotkeyAction::OpenWindow {
                request: OpenWindowRequest::new(
                    "Settings",
                    AppKind::Settings,
                    WindowPosition::new(250, 150),
                    WindowSize::new(500, 400),
                ),
            },
        )
        .with_meta(),
        HotkeyBinding::on(
            "r",
            HotkeyAction::ToggleOverlay {
                overlay: Overlay::RunDialog,
            },
        )
        .with_meta(),
        HotkeyBinding::on(
            "e",
            HotkeyAction::OpenWindow {
                request: OpenWindowRequest::new(
                    "File Manager",
                    AppKind::FileManager,
                    WindowPosition::new(150, 50),
                    WindowSize::new(700, 500),
                ),
            },
        )
        .with_meta(),
        HotkeyBinding::on("Tab", HotkeyAction::ShowWindowSwitcher).with_alt(),
        HotkeyBinding::on(
            "Tab",
            HotkeyAction::ToggleOverlay {
                overlay: Overlay::WorkspaceSwitcher,
            },
        )
        .with_meta(),
        HotkeyBinding::on("s", HotkeyAction::RequestScreenshot)
            .with_meta()
            .with_shift(),
        HotkeyBinding::on(" ", HotkeyAction::ShowContextMenu).with_alt(),
        HotkeyBinding::on("F4", HotkeyAction::CloseActiveWindow).with_alt(),
    ]
}
