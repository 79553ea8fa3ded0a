use automaker_core::theme::ThemeMode;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;

/// The main workspace data structure (serializable)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkspaceData {
    /// Schema version for migration support
    #[serde(default = "default_workspace_version")]
    pub version: u32,
    /// Active projects in sidebar order
    pub projects: Vec<ProjectData>,
    #[serde(default)]
    pub trashed_projects: Vec<TrashedProject>,
    #[serde(default)]
    pub current_project_id: Option<String>,
    /// Previously visited project IDs, most recent first
    #[serde(default)]
    pub project_history: Vec<String>,
    /// Cursor into `project_history` used by prev/next cycling
    #[serde(default)]
    pub history_index: usize,
}

/// A single project shown in the sidebar
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectData {
    pub id: String,
    pub name: String,
    pub path: String,
    /// Per-project theme override. None means "use global".
    #[serde(default)]
    pub theme: Option<ThemeMode>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_opened: Option<OffsetDateTime>,
}

impl ProjectData {
    pub fn new(name: impl Into<String>, path: impl Into<String>, theme: Option<ThemeMode>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            path: path.into(),
            theme,
            last_opened: None,
        }
    }
}

/// A project removed from the sidebar but not yet purged
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashedProject {
    #[serde(flatten)]
    pub project: ProjectData,
    #[serde(with = "time::serde::rfc3339")]
    pub trashed_at: OffsetDateTime,
}

impl TrashedProject {
    pub fn id(&self) -> &str {
        &self.project.id
    }

    pub fn path(&self) -> &str {
        &self.project.path
    }
}

fn default_workspace_version() -> u32 {
    0 // pre-versioning workspace files
}

/// Project store. Every persistent mutation goes through a method that bumps `data_version`.
pub struct Workspace {
    pub(crate) data: WorkspaceData,
    /// Monotonic counter incremented only on persistent data mutations.
    /// The save loop compares this to skip writes for UI-only changes.
    data_version: u64,
}

impl Workspace {
    pub fn new(data: WorkspaceData) -> Self {
        Self { data, data_version: 0 }
    }

    /// Current data version (incremented on persistent data mutations)
    pub fn data_version(&self) -> u64 {
        self.data_version
    }

    /// Read-only access to persistent workspace data.
    pub fn data(&self) -> &WorkspaceData {
        &self.data
    }

    /// Notify that persistent data changed.
    pub fn notify_data(&mut self) {
        self.data_version += 1;
    }

    pub fn projects(&self) -> &[ProjectData] {
        &self.data.projects
    }

    pub fn trashed_projects(&self) -> &[TrashedProject] {
        &self.data.trashed_projects
    }

    pub fn project_history(&self) -> &[String] {
        &self.data.project_history
    }

    /// Get a project by ID
    pub fn project(&self, id: &str) -> Option<&ProjectData> {
        self.data.projects.iter().find(|p| p.id == id)
    }

    /// Get a mutable project by ID
    pub(crate) fn project_mut(&mut self, id: &str) -> Option<&mut ProjectData> {
        self.data.projects.iter_mut().find(|p| p.id == id)
    }

    pub fn project_by_path(&self, path: &str) -> Option<&ProjectData> {
        self.data.projects.iter().find(|p| p.path == path)
    }

    pub fn trashed_project(&self, id: &str) -> Option<&TrashedProject> {
        self.data.trashed_projects.iter().find(|p| p.id() == id)
    }

    pub fn trashed_project_by_path(&self, path: &str) -> Option<&TrashedProject> {
        self.data.trashed_projects.iter().find(|p| p.path() == path)
    }

    pub fn current_project(&self) -> Option<&ProjectData> {
        self.data
            .current_project_id
            .as_deref()
            .and_then(|id| self.project(id))
    }

    /// Theme a project created or opened at `path` should start with:
    /// a trashed project's theme for the same path, else the current project's,
    /// else the global theme.
    pub fn effective_theme_for_path(&self, path: &str, global: ThemeMode) -> ThemeMode {
        self.trashed_project_by_path(path)
            .and_then(|p| p.project.theme)
            .or_else(|| self.current_project().and_then(|p| p.theme))
            .unwrap_or(global)
    }

    /// Helper to mutate a project and notify if it changed.
    pub fn with_project<F>(&mut self, project_id: &str, f: F) -> bool
    where
        F: FnOnce(&mut ProjectData) -> bool,
    {
        if let Some(project) = self.project_mut(project_id) {
            if f(project) {
                self.notify_data();
                return true;
            }
        }
        false
    }
}

/// Shared handle to the workspace store.
///
/// Locks are short-lived; never hold a `read`/`update` closure across an `.await`.
#[derive(Clone)]
pub struct WorkspaceHandle(Arc<Mutex<Workspace>>);

impl WorkspaceHandle {
    pub fn new(workspace: Workspace) -> Self {
        Self(Arc::new(Mutex::new(workspace)))
    }

    pub fn read<R>(&self, f: impl FnOnce(&Workspace) -> R) -> R {
        f(&self.0.lock())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut Workspace) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// Snapshot of the persistent data together with its version.
    pub fn snapshot(&self) -> (WorkspaceData, u64) {
        self.read(|ws| (ws.data().clone(), ws.data_version()))
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn trashed_project_serializes_flat_with_rfc3339_timestamp() {
        let trashed = TrashedProject {
            project: project("p1", "Alpha"),
            trashed_at: OffsetDateTime::from_unix_timestamp(0).unwrap(),
        };
        let json = serde_json::to_value(&trashed).unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["path"], "/projects/Alpha");
        assert_eq!(json["trashed_at"], "1970-01-01T00:00:00Z");

        let back: TrashedProject = serde_json::from_value(json).unwrap();
        assert_eq!(back, trashed);
    }

    #[test]
    fn effective_theme_prefers_trashed_then_current_then_global() {
        let mut ws = workspace(vec![project("p1", "Alpha")]);
        assert_eq!(ws.effective_theme_for_path("/new", ThemeMode::Nord), ThemeMode::Nord);

        ws.data.projects[0].theme = Some(ThemeMode::Dracula);
        ws.data.current_project_id = Some("p1".into());
        assert_eq!(ws.effective_theme_for_path("/new", ThemeMode::Nord), ThemeMode::Dracula);

        let mut old = project("p2", "Beta");
        old.path = "/new".into();
        old.theme = Some(ThemeMode::Sepia);
        ws.data.trashed_projects.push(TrashedProject {
            project: old,
            trashed_at: OffsetDateTime::now_utc(),
        });
        assert_eq!(ws.effective_theme_for_path("/new", ThemeMode::Nord), ThemeMode::Sepia);
    }

    #[test]
    fn with_project_only_bumps_version_on_change() {
        let mut ws = workspace(vec![project("p1", "Alpha")]);
        assert!(!ws.with_project("p1", |_| false));
        assert_eq!(ws.data_version(), 0);
        assert!(ws.with_project("p1", |p| {
            p.name = "Renamed".into();
            true
        }));
        assert_eq!(ws.data_version(), 1);
        assert!(!ws.with_project("missing", |_| true));
    }

    #[test]
    fn handle_shares_state() {
        let handle = WorkspaceHandle::new(workspace(vec![project("p1", "Alpha")]));
        let other = handle.clone();
        other.update(|ws| ws.notify_data());
        assert_eq!(handle.read(|ws| ws.data_version()), 1);
        assert_eq!(handle.snapshot().0.projects.len(), 1);
    }
}
