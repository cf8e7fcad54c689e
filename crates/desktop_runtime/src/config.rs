//! Typed desktop configuration and its TOML loader.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::{
    hotkeys::{default_bindings, HotkeyBinding},
    model::PointerPosition,
    window_store::DEFAULT_INITIAL_Z_INDEX,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Shell tuning knobs. Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Height of the strip reserved for the taskbar at the bottom of the screen.
    pub taskbar_height: i32,
    /// Distance from a screen edge at which a drag previews a snap.
    pub snap_edge_threshold: i32,
    /// First z-index issued to a window.
    pub initial_z_index: u32,
    pub min_window_width: i32,
    pub min_window_height: i32,
    /// Side of the square hot-corner trigger areas.
    pub hot_corner_size: i32,
    /// Where a keyboard-opened context menu appears.
    pub keyboard_menu_position: PointerPosition,
    pub hotkeys: Vec<HotkeyBinding>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            taskbar_height: 48,
            snap_edge_threshold: 5,
            initial_z_index: DEFAULT_INITIAL_Z_INDEX,
            min_window_width: 220,
            min_window_height: 140,
            hot_corner_size: 16,
            keyboard_menu_position: PointerPosition::new(100, 100),
            hotkeys: default_bindings(),
        }
    }
}

impl DesktopConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.taskbar_height < 0 {
            return Err(invalid("taskbar_height", "must not be negative"));
        }
        if self.snap_edge_threshold <= 0 {
            return Err(invalid("snap_edge_threshold", "must be positive"));
        }
        if self.min_window_width <= 0 || self.min_window_height <= 0 {
            return Err(invalid("min_window_width/min_window_height", "must be positive"));
        }
        if self.hot_corner_size < 0 {
            return Err(invalid("hot_corner_size", "must not be negative"));
        }
        if let Some(binding) = self.hotkeys.iter().find(|b| b.key.is_empty()) {
            return Err(invalid(
                "hotkeys",
                format!("binding for `{}` has an empty key", binding.action),
            ));
        }
        if self.hotkeys.is_empty() {
            warn!("config defines no hotkeys; keyboard shortcuts are disabled");
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// TOML-backed loader for [`DesktopConfig`].
#[derive(Clone, Debug)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads, parses, and validates the file.
    pub fn load(&self) -> Result<DesktopConfig, ConfigError> {
        let body = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        DesktopConfig::from_toml_str(&body, &self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{hotkeys::HotkeyAction, model::Overlay};

    fn unique_test_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "desktop-config-test-{}-{}",
            std::process::id(),
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = DesktopConfig::from_toml_str("", Path::new("inline")).expect("parse");
        assert_eq!(config, DesktopConfig::default());
        assert_eq!(config.snap_edge_threshold, 5);
        assert_eq!(config.taskbar_height, 48);
    }

    #[test]
    fn load_reads_overrides_and_hotkey_table() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");
        let path = root.join("desktop.toml");
        fs::write(
            &path,
            r#"
taskbar_height = 40
snap_edge_threshold = 12

[[hotkeys]]
key = "r"
meta = true
action = "toggle-overlay"
overlay = "run-dialog"

[[hotkeys]]
key = "t"
ctrl = true
alt = true
action = "open-window"
request = { title = "Terminal", component = "Terminal", position = { x = 100, y = 100 }, size = { width = 600, height = 400 } }
"#,
        )
        .expect("write config");

        let config = ConfigLoader::new(&path).load().expect("load config");
        assert_eq!(config.taskbar_height, 40);
        assert_eq!(config.snap_edge_threshold, 12);
        assert_eq!(config.hotkeys.len(), 2);
        assert_eq!(
            config.hotkeys[0].action,
            HotkeyAction::ToggleOverlay {
                overlay: Overlay::RunDialog
            }
        );
        assert_eq!(config.hotkeys[1].ctrl, Some(true));
        assert!(matches!(
            &config.hotkeys[1].action,
            HotkeyAction::OpenWindow { request } if request.title == "Terminal"
        ));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let loader = ConfigLoader::new(unique_test_root().join("missing.toml"));
        let err = loader.load().expect_err("missing config should fail");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn zero_snap_threshold_is_rejected() {
        let err = DesktopConfig::from_toml_str("snap_edge_threshold = 0", Path::new("inline"))
            .expect_err("invalid threshold");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "snap_edge_threshold",
                ..
            }
        ));
    }

    #[test]
    fn unknown_hotkey_action_is_a_parse_error() {
        let raw = "[[hotkeys]]\nkey = \"x\"\naction = \"self-destruct\"\n";
        let err = DesktopConfig::from_toml_str(raw, Path::new("inline")).expect_err("bad action");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
