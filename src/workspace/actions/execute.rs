//! Unified action execution layer.
//!
//! Single entry point for every store mutation the sidebar issues. The
//! headless command loop and the sidebar flows both delegate here.

use crate::workspace::state::Workspace;
use automaker_core::theme::ThemeMode;
use serde::{Deserialize, Serialize};

/// Serializable store intent (tagged enum)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case", deny_unknown_fields)]
pub enum WorkspaceAction {
    SetCurrentProject {
        project_id: Option<String>,
    },
    UpsertAndSetCurrentProject {
        path: String,
        name: String,
        theme: ThemeMode,
    },
    RenameProject {
        project_id: String,
        name: String,
    },
    SetProjectTheme {
        project_id: String,
        theme: Option<ThemeMode>,
    },
    ReorderProjects {
        from: usize,
        to: usize,
    },
    MoveProjectToTrash {
        project_id: String,
    },
    RestoreTrashedProject {
        project_id: String,
    },
    RemoveTrashedProject {
        project_id: String,
    },
    CyclePrevProject,
    CycleNextProject,
    ClearProjectHistory,
}

/// Result of executing an action.
#[derive(Debug)]
pub enum ActionResult {
    /// Success with optional JSON payload.
    Ok(Option<serde_json::Value>),
    /// Error with human-readable message.
    Err(String),
}

impl ActionResult {
    pub fn into_result(self) -> Result<Option<serde_json::Value>, String> {
        match self {
            ActionResult::Ok(v) => Ok(v),
            ActionResult::Err(e) => Err(e),
        }
    }
}

fn to_payload<T: Serialize>(value: &T) -> ActionResult {
    match serde_json::to_value(value) {
        Ok(v) => ActionResult::Ok(Some(v)),
        Err(e) => ActionResult::Err(format!("failed to serialize result: {}", e)),
    }
}

/// Execute any `WorkspaceAction` against the workspace.
///
/// Unknown ids are reported as errors; actions that find nothing to change
/// (same name, same order, single-entry history) succeed without a payload.
pub fn execute_action(action: WorkspaceAction, ws: &mut Workspace) -> ActionResult {
    log::debug!("Executing {:?}", action);
    match action {
        WorkspaceAction::SetCurrentProject { project_id } => {
            if let Some(id) = project_id.as_deref() {
                if ws.project(id).is_none() {
                    return ActionResult::Err(format!("project not found: {}", id));
                }
            }
            ws.set_current_project(project_id.as_deref());
            ActionResult::Ok(None)
        }
        WorkspaceAction::UpsertAndSetCurrentProject { path, name, theme } => {
            if path.trim().is_empty() {
                return ActionResult::Err("project path is empty".to_string());
            }
            let project = ws.upsert_and_set_current(&path, &name, theme);
            to_payload(&project)
        }
        WorkspaceAction::RenameProject { project_id, name } => {
            if ws.project(&project_id).is_none() {
                return ActionResult::Err(format!("project not found: {}", project_id));
            }
            ws.rename_project(&project_id, name);
            ActionResult::Ok(None)
        }
        WorkspaceAction::SetProjectTheme { project_id, theme } => {
            if ws.project(&project_id).is_none() {
                return ActionResult::Err(format!("project not found: {}", project_id));
            }
            ws.set_project_theme(&project_id, theme);
            ActionResult::Ok(None)
        }
        WorkspaceAction::ReorderProjects { from, to } => {
            let len = ws.projects().len();
            if from >= len || to >= len {
                return ActionResult::Err(format!(
                    "reorder out of range: {} -> {} with {} projects",
                    from, to, len
                ));
            }
            ws.reorder_projects(from, to);
            ActionResult::Ok(None)
        }
        WorkspaceAction::MoveProjectToTrash { project_id } => {
            match ws.move_project_to_trash(&project_id) {
                Some(trashed) => to_payload(&trashed),
                None => ActionResult::Err(format!("project not found: {}", project_id)),
            }
        }
        WorkspaceAction::RestoreTrashedProject { project_id } => {
            match ws.restore_trashed_project(&project_id) {
                Some(outcome) => ActionResult::Ok(serde_json::to_value(outcome).ok()),
                None => ActionResult::Err(format!("trashed project not found: {}", project_id)),
            }
        }
        WorkspaceAction::RemoveTrashedProject { project_id } => {
            // Bookkeeping only; a missing entry is already the desired state.
            ws.remove_trashed_project(&project_id);
            ActionResult::Ok(None)
        }
        WorkspaceAction::CyclePrevProject => {
            ws.cycle_prev_project();
            ActionResult::Ok(None)
        }
        WorkspaceAction::CycleNextProject => {
            ws.cycle_next_project();
            ActionResult::Ok(None)
        }
        WorkspaceAction::ClearProjectHistory => {
            ws.clear_project_history();
            ActionResult::Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::state::test_support::*;

    #[test]
    fn actions_deserialize_from_tagged_json() {
        let action: WorkspaceAction =
            serde_json::from_str(r#"{"action":"reorder_projects","from":0,"to":2}"#).unwrap();
        assert_eq!(action, WorkspaceAction::ReorderProjects { from: 0, to: 2 });

        let action: WorkspaceAction =
            serde_json::from_str(r#"{"action":"set_project_theme","project_id":"p","theme":"nordlight"}"#)
                .unwrap();
        assert_eq!(
            action,
            WorkspaceAction::SetProjectTheme {
                project_id: "p".into(),
                theme: Some(ThemeMode::NordLight)
            }
        );

        let action: WorkspaceAction = serde_json::from_str(r#"{"action":"cycle_prev_project"}"#).unwrap();
        assert_eq!(action, WorkspaceAction::CyclePrevProject);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<WorkspaceAction>(
            r#"{"action":"move_project_to_trash","project_id":"p","force":true}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn trash_action_returns_entry_payload() {
        let mut ws = workspace(vec![project("a", "A")]);
        let result = execute_action(
            WorkspaceAction::MoveProjectToTrash { project_id: "a".into() },
            &mut ws,
        );
        let payload = result.into_result().unwrap().unwrap();
        assert_eq!(payload["id"], "a");
        assert!(payload["trashed_at"].is_string());
    }

    #[test]
    fn unknown_project_is_an_error() {
        let mut ws = workspace(vec![]);
        let result = execute_action(
            WorkspaceAction::RenameProject { project_id: "x".into(), name: "Y".into() },
            &mut ws,
        );
        assert!(result.into_result().is_err());
        let result = execute_action(WorkspaceAction::ReorderProjects { from: 0, to: 1 }, &mut ws);
        assert!(result.into_result().is_err());
    }

    #[test]
    fn upsert_returns_registered_project() {
        let mut ws = workspace(vec![]);
        let result = execute_action(
            WorkspaceAction::UpsertAndSetCurrentProject {
                path: "/tmp/Foo".into(),
                name: "Foo".into(),
                theme: ThemeMode::Dark,
            },
            &mut ws,
        );
        let payload = result.into_result().unwrap().unwrap();
        assert_eq!(payload["path"], "/tmp/Foo");
        assert_eq!(ws.current_project().unwrap().name, "Foo");
    }
}
