use crate::workspace::state::WorkspaceData;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Current workspace schema version - increment when making breaking changes
pub const WORKSPACE_VERSION: u32 = 1;

/// Get the config directory path
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("automaker")
}

/// Get the workspace file path
pub fn get_workspace_path() -> PathBuf {
    get_config_dir().join("workspace.json")
}

/// Validate and fix workspace data consistency.
/// Called after deserialization in all load paths.
pub(crate) fn validate_workspace_data(data: &mut WorkspaceData) {
    // Duplicate ids or paths in the active list: first occurrence wins
    let mut seen_ids = HashSet::new();
    let mut seen_paths = HashSet::new();
    data.projects.retain(|p| {
        if seen_ids.contains(&p.id) || seen_paths.contains(&p.path) {
            log::warn!("Dropping duplicate project entry {} ({})", p.id, p.path);
            return false;
        }
        seen_ids.insert(p.id.clone());
        seen_paths.insert(p.path.clone());
        true
    });

    // A project can't be both active and trashed
    data.trashed_projects.retain(|t| {
        let conflict = seen_ids.contains(t.id()) || seen_paths.contains(t.path());
        if conflict {
            log::warn!("Dropping trash entry {} that is also active", t.id());
        }
        !conflict
    });

    if let Some(current) = data.current_project_id.as_deref() {
        if !seen_ids.contains(current) {
            log::warn!("Current project {} no longer exists", current);
            data.current_project_id = None;
        }
    }

    let mut seen_history = HashSet::new();
    data.project_history
        .retain(|id| seen_ids.contains(id) && seen_history.insert(id.clone()));
    if data.history_index >= data.project_history.len() {
        data.history_index = 0;
    }
}

/// Load workspace from disk
pub fn load_workspace() -> Result<WorkspaceData> {
    load_workspace_from(&get_workspace_path())
}

pub(crate) fn load_workspace_from(path: &Path) -> Result<WorkspaceData> {
    if !path.exists() {
        log::info!("Workspace file not found at {}, starting empty", path.display());
        return Ok(default_workspace());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut data: WorkspaceData = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    data = migrate_workspace(data);
    validate_workspace_data(&mut data);

    log::info!("Loaded workspace with {} projects", data.projects.len());
    Ok(data)
}

/// Save workspace to `path` (normally [`get_workspace_path`])
pub(crate) fn save_workspace_to(path: &Path, data: &WorkspaceData) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(data)?;
    std::fs::write(path, content)?;

    Ok(())
}

/// Migrate workspace data from older versions to the current version
pub(crate) fn migrate_workspace(mut data: WorkspaceData) -> WorkspaceData {
    let original_version = data.version;

    if data.version == 0 {
        log::info!("Migrating workspace from pre-versioning (v0) to v1");
        data.version = 1;
    }

    if original_version != data.version {
        log::info!("Workspace migrated from v{} to v{}", original_version, data.version);
    }

    data
}

/// Empty workspace for first launch
pub fn default_workspace() -> WorkspaceData {
    WorkspaceData {
        version: WORKSPACE_VERSION,
        ..Default::default()
    }
}
