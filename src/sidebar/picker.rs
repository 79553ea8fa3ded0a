//! Project switcher dropdown: type to filter, arrows to move, enter to switch.

use super::list::{ListAction, ListState, handle_list_key, substring_filter};
use crate::workspace::actions::execute::WorkspaceAction;
use crate::workspace::state::ProjectData;

/// A row in the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerEntry {
    pub project_id: String,
    pub name: String,
}

/// What the owner should do after a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerOutcome {
    /// Nothing beyond a possible re-render
    None,
    Closed,
    /// Switch to this project; the picker has already closed itself
    Select(WorkspaceAction),
}

#[derive(Default)]
pub struct ProjectPicker {
    state: Option<ListState<PickerEntry>>,
}

impl ProjectPicker {
    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// Open over a snapshot of the active list with an empty query and the first row highlighted.
    pub fn open(&mut self, projects: &[ProjectData]) {
        let entries = projects
            .iter()
            .map(|p| PickerEntry { project_id: p.id.clone(), name: p.name.clone() })
            .collect();
        self.state = Some(ListState::new(entries));
    }

    pub fn close(&mut self) {
        self.state = None;
    }

    pub fn query(&self) -> &str {
        self.state.as_ref().map(|s| s.search_query.as_str()).unwrap_or("")
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.selected_index)
    }

    /// Names of the projects currently matching the query, in list order.
    pub fn visible_names(&self) -> Vec<&str> {
        match &self.state {
            Some(state) => state.filtered_items().map(|e| e.name.as_str()).collect(),
            None => Vec::new(),
        }
    }

    /// Replace the query wholesale (e.g. pasted text).
    pub fn set_query(&mut self, query: &str) {
        if let Some(state) = self.state.as_mut() {
            state.search_query = query.to_string();
            refilter(state);
        }
    }

    pub fn handle_key(&mut self, key: &str) -> PickerOutcome {
        let Some(state) = self.state.as_mut() else {
            return PickerOutcome::None;
        };

        match handle_list_key(state, key) {
            ListAction::Close => {
                self.close();
                PickerOutcome::Closed
            }
            ListAction::Confirm => self.confirm(),
            ListAction::QueryChanged => {
                refilter(state);
                PickerOutcome::None
            }
            ListAction::SelectPrev | ListAction::SelectNext | ListAction::None => PickerOutcome::None,
        }
    }

    /// Switch to the highlighted project. No-op (picker stays open) when nothing matches.
    pub fn confirm(&mut self) -> PickerOutcome {
        let Some(entry) = self.state.as_ref().and_then(|s| s.selected_item()).cloned() else {
            return PickerOutcome::None;
        };
        self.close();
        PickerOutcome::Select(WorkspaceAction::SetCurrentProject {
            project_id: Some(entry.project_id),
        })
    }
}

fn refilter(state: &mut ListState<PickerEntry>) {
    let filtered = substring_filter(&state.items, &state.search_query, |e| e.name.as_str());
    state.set_filtered(filtered);
}
