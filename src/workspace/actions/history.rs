//! Project history navigation
//!
//! `project_history` is most-recent-first. Cycling moves `history_index` through it
//! without reordering, so repeated presses walk back and forth over the same list.

use crate::workspace::state::Workspace;

impl Workspace {
    /// Step to the previously visited (older) project, wrapping at the end.
    pub fn cycle_prev_project(&mut self) -> bool {
        let len = self.data.project_history.len();
        if len < 2 {
            return false;
        }
        self.jump_to_history_index((self.data.history_index + 1) % len)
    }

    /// Step back towards the most recent project, wrapping at the front.
    pub fn cycle_next_project(&mut self) -> bool {
        let len = self.data.project_history.len();
        if len < 2 {
            return false;
        }
        self.jump_to_history_index((self.data.history_index + len - 1) % len)
    }

    /// Forget every visited project except the current one.
    pub fn clear_project_history(&mut self) -> bool {
        let kept: Vec<String> = self.data.current_project_id.iter().cloned().collect();
        if self.data.project_history == kept && self.data.history_index == 0 {
            return false;
        }
        self.data.project_history = kept;
        self.data.history_index = 0;
        self.notify_data();
        true
    }

    /// Drop `project_id` from history, keeping the cursor on the same entry where possible.
    pub(crate) fn forget_history_entry(&mut self, project_id: &str) {
        let Some(position) = self.data.project_history.iter().position(|id| id == project_id) else {
            return;
        };
        self.data.project_history.remove(position);
        if position < self.data.history_index {
            self.data.history_index -= 1;
        }
        let len = self.data.project_history.len();
        if self.data.history_index >= len {
            self.data.history_index = len.saturating_sub(1);
        }
    }

    fn jump_to_history_index(&mut self, index: usize) -> bool {
        let id = self.data.project_history[index].clone();
        if self.project(&id).is_none() {
            log::warn!("History entry {} no longer exists, dropping it", id);
            self.forget_history_entry(&id);
            self.notify_data();
            return false;
        }
        self.data.history_index = index;
        self.data.current_project_id = Some(id);
        self.notify_data();
        true
    }
}
