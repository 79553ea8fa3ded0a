//! Trash dialog operations.
//!
//! Restore and remove are plain store intents. Deleting from disk goes through
//! the filesystem collaborator off the calling thread, guarded so the same
//! project is never deleted twice concurrently.

use super::Sidebar;
use crate::errors::{CommandError, TrashError};
use crate::host::ProjectFs;
use crate::notifications::Toast;
use crate::workspace::actions::RestoreOutcome;
use crate::workspace::actions::execute::WorkspaceAction;
use crate::workspace::state::WorkspaceHandle;
use futures::future::join_all;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Outcome of emptying the trash.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyTrashReport {
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Default)]
pub struct TrashOperations {
    /// Project ids with a disk deletion running
    in_flight: Mutex<HashSet<String>>,
    emptying: AtomicBool,
}

/// Releases an in-flight id when dropped, including on early return.
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<String>>,
    id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set.lock().remove(&self.id);
    }
}

struct EmptyingGuard<'a>(&'a AtomicBool);

impl Drop for EmptyingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl TrashOperations {
    pub fn is_deleting(&self, project_id: &str) -> bool {
        self.in_flight.lock().contains(project_id)
    }

    pub fn is_emptying(&self) -> bool {
        self.emptying.load(Ordering::SeqCst)
    }

    fn begin(&self, project_id: &str) -> Result<InFlightGuard<'_>, TrashError> {
        if !self.in_flight.lock().insert(project_id.to_string()) {
            return Err(TrashError::AlreadyInProgress(project_id.to_string()));
        }
        Ok(InFlightGuard { set: &self.in_flight, id: project_id.to_string() })
    }

    /// Send a trashed project's directory to the system trash, then drop its entry.
    /// On failure the entry stays in the trash.
    pub async fn delete_from_disk(
        &self,
        workspace: &WorkspaceHandle,
        fs: &Arc<dyn ProjectFs>,
        project_id: &str,
    ) -> Result<(), TrashError> {
        let path = workspace
            .read(|ws| ws.trashed_project(project_id).map(|p| p.path().to_string()))
            .ok_or_else(|| TrashError::NotInTrash(project_id.to_string()))?;
        let _guard = self.begin(project_id)?;

        log::info!("Deleting trashed project {} at {}", project_id, path);
        let fs = fs.clone();
        let target = path.clone();
        smol::unblock(move || fs.trash_path(&target))
            .await
            .map_err(|source| TrashError::DeleteFailed { path, source })?;

        workspace.update(|ws| ws.remove_trashed_project(project_id));
        Ok(())
    }

    /// Delete every trashed project from disk. Failures do not stop the batch.
    pub async fn empty_trash(
        &self,
        workspace: &WorkspaceHandle,
        fs: &Arc<dyn ProjectFs>,
    ) -> Result<EmptyTrashReport, TrashError> {
        if self.emptying.swap(true, Ordering::SeqCst) {
            return Err(TrashError::AlreadyInProgress("trash".to_string()));
        }
        let _guard = EmptyingGuard(&self.emptying);

        let ids: Vec<String> =
            workspace.read(|ws| ws.trashed_projects().iter().map(|p| p.id().to_string()).collect());
        let results = join_all(ids.iter().map(|id| self.delete_from_disk(workspace, fs, id))).await;

        let mut report = EmptyTrashReport::default();
        for result in results {
            match result {
                Ok(()) => report.succeeded += 1,
                // Removed by someone else while the batch ran
                Err(TrashError::NotInTrash(id)) => log::debug!("{} left the trash during empty", id),
                Err(e) => {
                    log::warn!("Empty trash: {}", e);
                    report.failed += 1;
                }
            }
        }
        log::info!("Emptied trash: {} deleted, {} failed", report.succeeded, report.failed);
        Ok(report)
    }
}

impl Sidebar {
    pub(crate) fn move_project_to_trash(&self, project_id: &str) -> Result<(), CommandError> {
        self.dispatch(WorkspaceAction::MoveProjectToTrash { project_id: project_id.to_string() })?;
        self.toasts.success("Project moved to trash");
        Ok(())
    }

    pub(crate) fn restore_project(&self, project_id: &str) -> Result<(), CommandError> {
        let name = self
            .workspace
            .read(|ws| ws.trashed_project(project_id).map(|p| p.project.name.clone()))
            .unwrap_or_default();
        let payload =
            self.dispatch(WorkspaceAction::RestoreTrashedProject { project_id: project_id.to_string() })?;
        let outcome = payload
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or(RestoreOutcome::Restored);

        let toast = match outcome {
            RestoreOutcome::Restored => Toast::success("Project restored"),
            RestoreOutcome::AlreadyActive => Toast::warning("Project is already open"),
        };
        self.toasts.post(toast.with_description(name));
        Ok(())
    }

    pub(crate) async fn delete_project_from_disk(&self, project_id: &str) -> Result<(), CommandError> {
        self.trash
            .delete_from_disk(&self.workspace, &self.host.fs, project_id)
            .await?;
        self.toasts.success("Project deleted from disk");
        Ok(())
    }

    /// Forget a trash entry without touching the disk.
    pub(crate) fn remove_from_trash(&self, project_id: &str) -> Result<(), CommandError> {
        self.dispatch(WorkspaceAction::RemoveTrashedProject { project_id: project_id.to_string() })?;
        Ok(())
    }

    pub(crate) async fn empty_trash(&self) -> Result<EmptyTrashReport, CommandError> {
        let report = self.trash.empty_trash(&self.workspace, &self.host.fs).await?;
        let summary = format!("{} deleted, {} failed", report.succeeded, report.failed);
        let toast = if report.failed == 0 {
            Toast::success("Trash emptied")
        } else {
            Toast::warning("Some projects could not be deleted")
        };
        self.toasts.post(toast.with_description(summary));
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::ToastLevel;
    use crate::sidebar::SidebarCommand;
    use crate::sidebar::test_support::*;
    use crate::workspace::state::test_support::{assert_mutually_exclusive, project};
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    fn trashed_sidebar(names: &[&str]) -> (Sidebar, Fakes) {
        let projects = names.iter().map(|n| project(&n.to_lowercase(), n)).collect();
        let (sidebar, fakes) = sidebar(projects);
        for name in names {
            sidebar.move_project_to_trash(&name.to_lowercase()).unwrap();
        }
        sidebar.toasts().take_all();
        (sidebar, fakes)
    }

    fn host_fs(fakes: &Fakes) -> Arc<dyn ProjectFs> {
        fakes.fs.clone()
    }

    #[test]
    fn trash_then_restore_round_trip() {
        let (mut sidebar, _fakes) = sidebar(vec![project("a", "A"), project("b", "B")]);
        smol::block_on(sidebar.handle_command(SidebarCommand::MoveToTrash { project_id: "a".into() }));
        sidebar.workspace().read(|ws| {
            assert_mutually_exclusive(ws);
            assert_eq!(ws.projects().len(), 1);
            assert_eq!(ws.trashed_projects().len(), 1);
        });

        smol::block_on(sidebar.handle_command(SidebarCommand::RestoreProject { project_id: "a".into() }));
        let order: Vec<String> =
            sidebar.workspace().read(|ws| ws.projects().iter().map(|p| p.id.clone()).collect());
        assert_eq!(order, vec!["b", "a"]);
        assert_eq!(toast_messages(&sidebar), vec!["Project moved to trash", "Project restored"]);
    }

    #[test]
    fn restore_onto_active_path_warns() {
        let (mut sidebar, _fakes) = trashed_sidebar(&["Alpha"]);
        sidebar.workspace().update(|ws| {
            let mut reopened = project("other", "Other");
            reopened.path = "/projects/Alpha".into();
            ws.data.projects.push(reopened);
        });

        smol::block_on(sidebar.handle_command(SidebarCommand::RestoreProject { project_id: "alpha".into() }));

        let toasts = sidebar.toasts().take_all();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].level, ToastLevel::Warning);
        assert_eq!(toasts[0].message, "Project is already open");
        assert_eq!(toasts[0].description.as_deref(), Some("Alpha"));
        sidebar.workspace().read(|ws| {
            assert!(ws.trashed_projects().is_empty());
            assert!(ws.project("alpha").is_none());
            assert_mutually_exclusive(ws);
        });
    }

    #[test]
    fn delete_success_removes_entry() {
        let (sidebar, fakes) = trashed_sidebar(&["Alpha"]);
        smol::block_on(sidebar.delete_project_from_disk("alpha")).unwrap();
        assert!(sidebar.workspace().read(|ws| ws.trashed_projects().is_empty()));
        assert_eq!(*fakes.fs.trashed.lock(), vec!["/projects/Alpha"]);
    }

    #[test]
    fn delete_failure_keeps_entry_and_reports() {
        let (mut sidebar, fakes) = trashed_sidebar(&["Alpha"]);
        fakes.fs.fail_trash.lock().insert("/projects/Alpha".into());

        smol::block_on(sidebar.handle_command(SidebarCommand::DeleteFromDisk { project_id: "alpha".into() }));

        assert!(sidebar.workspace().read(|ws| ws.trashed_project("alpha").is_some()));
        let toasts = sidebar.toasts().take_all();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].level, ToastLevel::Error);
        assert_eq!(toasts[0].message, "Failed to delete project");
        assert!(!sidebar.trash.is_deleting("alpha"));
    }

    #[test]
    fn delete_unknown_id_is_not_in_trash() {
        let (sidebar, fakes) = trashed_sidebar(&[]);
        let result = smol::block_on(sidebar.trash.delete_from_disk(
            &sidebar.workspace,
            &host_fs(&fakes),
            "ghost",
        ));
        assert!(matches!(result, Err(TrashError::NotInTrash(_))));
        assert_eq!(fakes.fs.trash_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn concurrent_delete_of_same_project_runs_once() {
        let (sidebar, fakes) = trashed_sidebar(&["Alpha"]);
        *fakes.fs.trash_delay.lock() = Some(Duration::from_millis(20));
        let fs = host_fs(&fakes);

        let (first, second) = smol::block_on(async {
            futures::join!(
                sidebar.trash.delete_from_disk(&sidebar.workspace, &fs, "alpha"),
                sidebar.trash.delete_from_disk(&sidebar.workspace, &fs, "alpha"),
            )
        });

        assert!(first.is_ok());
        assert!(matches!(second, Err(TrashError::AlreadyInProgress(_))));
        assert_eq!(fakes.fs.trash_calls.load(Ordering::SeqCst), 1);
        assert!(sidebar.workspace().read(|ws| ws.trashed_projects().is_empty()));
    }

    #[test]
    fn empty_trash_continues_past_failures() {
        let (sidebar, fakes) = trashed_sidebar(&["Alpha", "Beta", "Gamma"]);
        fakes.fs.fail_trash.lock().insert("/projects/Beta".into());

        let report = smol::block_on(sidebar.empty_trash()).unwrap();

        assert_eq!(report, EmptyTrashReport { succeeded: 2, failed: 1 });
        assert_eq!(fakes.fs.trash_calls.load(Ordering::SeqCst), 3);
        let remaining: Vec<String> = sidebar
            .workspace()
            .read(|ws| ws.trashed_projects().iter().map(|p| p.id().to_string()).collect());
        assert_eq!(remaining, vec!["beta"]);

        let toasts = sidebar.toasts().take_all();
        assert_eq!(toasts[0].level, ToastLevel::Warning);
        assert_eq!(toasts[0].description.as_deref(), Some("2 deleted, 1 failed"));
        assert!(!sidebar.trash.is_emptying());
    }

    #[test]
    fn remove_from_trash_never_touches_disk() {
        let (sidebar, fakes) = trashed_sidebar(&["Alpha"]);
        sidebar.remove_from_trash("alpha").unwrap();
        sidebar.remove_from_trash("alpha").unwrap();
        assert!(sidebar.workspace().read(|ws| ws.trashed_projects().is_empty()));
        assert_eq!(fakes.fs.trash_calls.load(Ordering::SeqCst), 0);
    }
}
