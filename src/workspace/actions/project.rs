//! Project management workspace actions
//!
//! Actions for registering, selecting, modifying and reordering projects.

use crate::workspace::state::{ProjectData, Workspace};
use automaker_core::theme::ThemeMode;
use time::OffsetDateTime;

impl Workspace {
    /// Make `project_id` the current project and record the visit in history.
    /// Passing `None` clears the selection. Unknown IDs are ignored.
    pub fn set_current_project(&mut self, project_id: Option<&str>) -> bool {
        let Some(id) = project_id else {
            if self.data.current_project_id.take().is_some() {
                self.notify_data();
                return true;
            }
            return false;
        };

        let Some(project) = self.project_mut(id) else {
            log::warn!("Cannot select unknown project {}", id);
            return false;
        };
        project.last_opened = Some(OffsetDateTime::now_utc());

        self.data.current_project_id = Some(id.to_string());
        self.data.project_history.retain(|h| h != id);
        self.data.project_history.insert(0, id.to_string());
        self.data.history_index = 0;
        self.notify_data();
        true
    }

    /// Register the project at `path` (creating, restoring from trash, or reusing)
    /// and make it current. Returns the registered project.
    pub fn upsert_and_set_current(&mut self, path: &str, name: &str, theme: ThemeMode) -> ProjectData {
        let project = if let Some(existing) = self.project_by_path(path) {
            existing.clone()
        } else if let Some(index) = self.data.trashed_projects.iter().position(|p| p.path() == path) {
            let mut restored = self.data.trashed_projects.remove(index).project;
            restored.name = name.to_string();
            if restored.theme.is_none() {
                restored.theme = Some(theme);
            }
            log::info!("Restoring trashed project {} at {}", restored.id, path);
            self.data.projects.push(restored.clone());
            restored
        } else {
            let project = ProjectData::new(name, path, Some(theme));
            log::info!("Registered project {} at {}", project.id, path);
            self.data.projects.push(project.clone());
            project
        };

        self.set_current_project(Some(&project.id));
        project
    }

    /// Rename a project
    pub fn rename_project(&mut self, project_id: &str, new_name: String) -> bool {
        self.with_project(project_id, |project| {
            if project.name == new_name {
                return false;
            }
            project.name = new_name;
            true
        })
    }

    /// Set or clear (`None` = use global) the theme override for a project
    pub fn set_project_theme(&mut self, project_id: &str, theme: Option<ThemeMode>) -> bool {
        self.with_project(project_id, |project| {
            if project.theme == theme {
                return false;
            }
            project.theme = theme;
            true
        })
    }

    /// Move the project at `from` so it ends up at index `to`.
    /// Out-of-range indices and no-op moves leave the order untouched.
    pub fn reorder_projects(&mut self, from: usize, to: usize) -> bool {
        let len = self.data.projects.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let project = self.data.projects.remove(from);
        self.data.projects.insert(to, project);
        self.notify_data();
        true
    }
}
