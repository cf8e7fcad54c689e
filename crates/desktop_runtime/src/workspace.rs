//! Virtual desktop registry. Workspaces are only ever appended; windows refer to them by id.

use tracing::{debug, info};

use crate::{
    model::{Workspace, WorkspaceId},
    time::{next_monotonic, unix_time_ms_now, MillisClock},
};

const INITIAL_WORKSPACE_ID: WorkspaceId = WorkspaceId(1);

#[derive(Debug, Clone)]
pub struct WorkspaceRegistry {
    workspaces: Vec<Workspace>,
    active: WorkspaceId,
    last_issued: u64,
    clock: MillisClock,
}

impl Default for WorkspaceRegistry {
    fn default() -> Self {
        Self::with_clock(unix_time_ms_now)
    }
}

impl WorkspaceRegistry {
    /// Creates a registry holding `Desktop 1`, drawing new ids from `clock`.
    pub fn with_clock(clock: MillisClock) -> Self {
        Self {
            workspaces: vec![Workspace {
                id: INITIAL_WORKSPACE_ID,
                name: workspace_name(1),
            }],
            active: INITIAL_WORKSPACE_ID,
            last_issued: INITIAL_WORKSPACE_ID.0,
            clock,
        }
    }

    /// Appends `Desktop {n+1}` with a fresh id and makes it active.
    pub fn add_workspace(&mut self) -> WorkspaceId {
        let id = WorkspaceId(next_monotonic(self.last_issued, (self.clock)()));
        self.last_issued = id.0;
        let name = workspace_name(self.workspaces.len() + 1);
        info!(workspace_id = %id, %name, "workspace added");
        self.workspaces.push(Workspace { id, name });
        self.active = id;
        id
    }

    /// Activates `id`. Unknown ids are ignored.
    pub fn switch_workspace(&mut self, id: WorkspaceId) {
        if self.contains(id) {
            self.active = id;
        } else {
            debug!(workspace_id = %id, "switch to unknown workspace ignored");
        }
    }

    pub fn contains(&self, id: WorkspaceId) -> bool {
        self.workspaces.iter().any(|ws| ws.id == id)
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn active_workspace_id(&self) -> WorkspaceId {
        self.active
    }
}

fn workspace_name(ordinal: usize) -> String {
    format!("Desktop {ordinal}")
}
