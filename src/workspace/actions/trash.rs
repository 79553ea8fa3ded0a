//! Trash workspace actions
//!
//! Bookkeeping half of the trash lifecycle. Disk deletion lives in the sidebar's
//! trash operations, which call back into `remove_trashed_project` on success.

use crate::workspace::state::{TrashedProject, Workspace};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// What restoring a trash entry did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestoreOutcome {
    /// Back at the end of the active list
    Restored,
    /// Another active project already uses the path; the entry was dropped
    AlreadyActive,
}

impl Workspace {
    /// Move an active project to the trash. Returns the trash entry.
    pub fn move_project_to_trash(&mut self, project_id: &str) -> Option<TrashedProject> {
        self.move_project_to_trash_at(project_id, OffsetDateTime::now_utc())
    }

    pub(crate) fn move_project_to_trash_at(
        &mut self,
        project_id: &str,
        trashed_at: OffsetDateTime,
    ) -> Option<TrashedProject> {
        let index = self.data.projects.iter().position(|p| p.id == project_id)?;
        let project = self.data.projects.remove(index);

        if self.data.current_project_id.as_deref() == Some(project_id) {
            self.data.current_project_id = None;
        }
        self.forget_history_entry(project_id);

        // A stale entry for the same path would break the active/trash exclusivity on restore
        self.data
            .trashed_projects
            .retain(|t| t.id() != project.id && t.path() != project.path);

        let trashed = TrashedProject { project, trashed_at };
        log::info!("Moved project {} ({}) to trash", trashed.project.name, trashed.project.path);
        self.data.trashed_projects.push(trashed.clone());
        self.notify_data();
        Some(trashed)
    }

    /// Put a trashed project back at the end of the active list.
    /// The current project is left unchanged. `None` if the id is not in the trash.
    pub fn restore_trashed_project(&mut self, project_id: &str) -> Option<RestoreOutcome> {
        let index = self.data.trashed_projects.iter().position(|p| p.id() == project_id)?;
        let trashed = self.data.trashed_projects.remove(index);

        let outcome = if self.project_by_path(trashed.path()).is_some() {
            log::warn!(
                "Project path {} is already active, dropping trash entry {}",
                trashed.path(),
                project_id
            );
            RestoreOutcome::AlreadyActive
        } else {
            log::info!("Restored project {} from trash", trashed.project.name);
            self.data.projects.push(trashed.project);
            RestoreOutcome::Restored
        };
        self.notify_data();
        Some(outcome)
    }

    /// Drop a trash entry without touching the disk.
    pub fn remove_trashed_project(&mut self, project_id: &str) -> bool {
        let before = self.data.trashed_projects.len();
        self.data.trashed_projects.retain(|p| p.id() != project_id);
        if self.data.trashed_projects.len() == before {
            return false;
        }
        self.notify_data();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::RestoreOutcome;
    use crate::workspace::state::test_support::*;

    #[test]
    fn trash_then_restore_round_trip() {
        let mut ws = workspace(vec![project("a", "A"), project("b", "B")]);
        let original = ws.project("a").unwrap().clone();

        let trashed = ws.move_project_to_trash("a").unwrap();
        assert_eq!(trashed.project, original);
        assert!(ws.project("a").is_none());
        assert_mutually_exclusive(&ws);

        assert_eq!(ws.restore_trashed_project("a"), Some(RestoreOutcome::Restored));
        let restored = ws.project("a").unwrap();
        assert_eq!(restored.id, original.id);
        assert_eq!(restored.name, original.name);
        assert_eq!(restored.path, original.path);
        assert!(ws.trashed_projects().is_empty());
        assert_mutually_exclusive(&ws);
    }

    #[test]
    fn restore_appends_to_end() {
        let mut ws = workspace(vec![project("a", "A"), project("b", "B"), project("c", "C")]);
        ws.move_project_to_trash("a");
        ws.restore_trashed_project("a");
        let order: Vec<&str> = ws.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn trashing_current_project_clears_selection_and_history() {
        let mut ws = workspace(vec![project("a", "A"), project("b", "B")]);
        ws.set_current_project(Some("b"));
        ws.set_current_project(Some("a"));
        ws.move_project_to_trash("a");

        assert!(ws.current_project().is_none());
        assert_eq!(ws.project_history(), &["b".to_string()]);
    }

    #[test]
    fn restore_does_not_change_current_project() {
        let mut ws = workspace(vec![project("a", "A"), project("b", "B")]);
        ws.set_current_project(Some("b"));
        ws.move_project_to_trash("a");
        ws.restore_trashed_project("a");
        assert_eq!(ws.current_project().unwrap().id, "b");
    }

    #[test]
    fn remove_trashed_project_is_bookkeeping_only() {
        let mut ws = workspace(vec![project("a", "A")]);
        ws.move_project_to_trash("a");
        assert!(ws.remove_trashed_project("a"));
        assert!(!ws.remove_trashed_project("a"));
        assert!(ws.projects().is_empty());
        assert!(ws.trashed_projects().is_empty());
    }

    #[test]
    fn restore_over_active_path_drops_entry() {
        let mut ws = workspace(vec![project("a", "A")]);
        ws.move_project_to_trash("a");
        let mut replacement = project("b", "B");
        replacement.path = "/projects/A".into();
        ws.data.projects.push(replacement);

        assert_eq!(ws.restore_trashed_project("a"), Some(RestoreOutcome::AlreadyActive));
        assert!(ws.trashed_projects().is_empty());
        let ids: Vec<&str> = ws.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
        assert_mutually_exclusive(&ws);
    }

    #[test]
    fn unknown_ids_are_noops() {
        let mut ws = workspace(vec![project("a", "A")]);
        assert!(ws.move_project_to_trash("nope").is_none());
        assert_eq!(ws.restore_trashed_project("nope"), None);
        assert_eq!(ws.data_version(), 0);
    }
}
