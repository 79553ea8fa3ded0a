use crate::workspace::actions::execute::WorkspaceAction;
use crate::workspace::state::ProjectData;

/// In-progress drag of a project row. Nothing is persisted until a drop lands on another row.
#[derive(Debug, Default)]
pub struct ProjectDrag {
    dragging: Option<String>,
}

impl ProjectDrag {
    pub fn start(&mut self, project_id: impl Into<String>) {
        self.dragging = Some(project_id.into());
    }

    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    pub fn cancel(&mut self) {
        self.dragging = None;
    }

    /// Finish the drag over `over_id` (`None` = dropped outside the list).
    /// Indices are positions in the full active list.
    pub fn drop_on(&mut self, over_id: Option<&str>, projects: &[ProjectData]) -> Option<WorkspaceAction> {
        let active_id = self.dragging.take()?;
        let over_id = over_id?;
        if active_id == over_id {
            return None;
        }

        let from = projects.iter().position(|p| p.id == active_id)?;
        let to = projects.iter().position(|p| p.id == over_id)?;
        Some(WorkspaceAction::ReorderProjects { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::actions::execute::execute_action;
    use crate::workspace::state::test_support::*;

    #[test]
    fn drop_on_other_row_reorders() {
        let mut ws = workspace(vec![project("a", "A"), project("b", "B"), project("c", "C")]);
        let mut drag = ProjectDrag::default();
        drag.start("a");
        let action = drag.drop_on(Some("c"), ws.projects()).unwrap();
        assert_eq!(action, WorkspaceAction::ReorderProjects { from: 0, to: 2 });

        assert!(execute_action(action, &mut ws).into_result().is_ok());
        let order: Vec<&str> = ws.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert!(drag.dragging().is_none());
    }

    #[test]
    fn drop_on_self_or_outside_does_nothing() {
        let projects = vec![project("a", "A"), project("b", "B")];
        let mut drag = ProjectDrag::default();

        drag.start("a");
        assert!(drag.drop_on(Some("a"), &projects).is_none());
        drag.start("a");
        assert!(drag.drop_on(None, &projects).is_none());
        assert!(drag.drop_on(Some("b"), &projects).is_none());
    }

    #[test]
    fn cancel_clears_drag() {
        let projects = vec![project("a", "A"), project("b", "B")];
        let mut drag = ProjectDrag::default();
        drag.start("b");
        drag.cancel();
        assert!(drag.drop_on(Some("a"), &projects).is_none());
    }
}
