//! Replay scripts: a JSON array of input events fed through a session in order.

use std::{
    fs,
    path::{Path, PathBuf},
};

use desktop_runtime::{DesktopSession, DesktopView, InputEvent, RuntimeEffect};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse script {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_script(path: &Path) -> Result<Vec<InputEvent>, ScriptError> {
    let raw = fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ScriptError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Final state of a replay plus every effect the host would have had to execute.
#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub view: DesktopView,
    pub effects: Vec<RuntimeEffect>,
}

pub fn replay(session: &mut DesktopSession, events: &[InputEvent]) -> ReplayReport {
    let mut effects = Vec::new();
    for (index, event) in events.iter().enumerate() {
        let produced = session.handle_input(event);
        debug!(index, effects = produced.len(), "replayed event");
        effects.extend(produced);
    }
    ReplayReport {
        view: session.view(),
        effects,
    }
}
