//! Theme submenu of the project options menu.

use super::Sidebar;
use crate::errors::CommandError;
use crate::workspace::actions::execute::WorkspaceAction;
use automaker_core::theme::{ThemeInfo, ThemeMode};
use serde::Serialize;

/// One column of the theme menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeGroup {
    pub label: &'static str,
    pub themes: Vec<ThemeInfo>,
}

/// Dark column first, then light, each in declaration order.
pub fn theme_groups() -> Vec<ThemeGroup> {
    vec![
        ThemeGroup {
            label: "Dark",
            themes: ThemeMode::dark_themes().iter().map(|m| m.info()).collect(),
        },
        ThemeGroup {
            label: "Light",
            themes: ThemeMode::light_themes().iter().map(|m| m.info()).collect(),
        },
    ]
}

impl Sidebar {
    /// Theme that should be applied right now: the current project's override, else global.
    pub fn applied_theme_mode(&self) -> ThemeMode {
        self.workspace
            .read(|ws| ws.current_project().and_then(|p| p.theme))
            .unwrap_or(self.settings.theme_mode)
    }

    pub(crate) fn sync_applied_theme(&self) {
        let mode = self.applied_theme_mode();
        self.theme.0.lock().set_mode(mode);
    }

    /// Hovering a theme entry; resolves to `true` if the preview was applied.
    pub(crate) async fn preview_theme(&self, mode: ThemeMode) -> bool {
        self.theme_preview.enter(mode).await
    }

    pub(crate) fn end_theme_preview(&self) {
        self.theme_preview.leave();
    }

    /// Set (or clear with `None`) the current project's theme.
    pub(crate) fn select_project_theme(&self, theme: Option<ThemeMode>) -> Result<(), CommandError> {
        let project_id = self
            .workspace
            .read(|ws| ws.current_project().map(|p| p.id.clone()))
            .ok_or_else(|| CommandError::Validation("No project selected".into()))?;

        self.theme_preview.leave();
        self.dispatch(WorkspaceAction::SetProjectTheme { project_id, theme })?;
        Ok(())
    }

    pub(crate) fn set_global_theme(&mut self, mode: ThemeMode) {
        self.theme_preview.leave();
        self.settings.theme_mode = mode;
        self.settings_dirty = true;
        self.sync_applied_theme();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidebar::SidebarCommand;
    use crate::sidebar::test_support::*;
    use crate::workspace::state::test_support::project;

    fn applied(sidebar: &Sidebar) -> ThemeMode {
        sidebar.theme.mode()
    }

    #[test]
    fn groups_cover_both_families() {
        let groups = theme_groups();
        assert_eq!(groups[0].label, "Dark");
        assert!(groups[0].themes.iter().all(|t| t.is_dark));
        assert!(groups[1].themes.iter().all(|t| !t.is_dark));
        assert_eq!(groups[0].themes.len() + groups[1].themes.len(), 32);
    }

    #[test]
    fn project_theme_overrides_global_until_cleared() {
        let (mut sidebar, _fakes) = sidebar(vec![project("a", "A")]);
        smol::block_on(sidebar.handle_command(SidebarCommand::SelectProject { project_id: "a".into() }));
        assert_eq!(applied(&sidebar), ThemeMode::Dark);

        smol::block_on(sidebar.handle_command(SidebarCommand::SetProjectTheme { theme: Some(ThemeMode::Nord) }));
        assert_eq!(applied(&sidebar), ThemeMode::Nord);
        assert_eq!(sidebar.workspace().read(|ws| ws.project("a").unwrap().theme), Some(ThemeMode::Nord));

        smol::block_on(sidebar.handle_command(SidebarCommand::SetProjectTheme { theme: None }));
        assert_eq!(applied(&sidebar), ThemeMode::Dark);
    }

    #[test]
    fn switching_projects_applies_their_theme() {
        let mut styled = project("b", "B");
        styled.theme = Some(ThemeMode::Paper);
        let (mut sidebar, _fakes) = sidebar(vec![project("a", "A"), styled]);

        smol::block_on(sidebar.handle_command(SidebarCommand::SelectProject { project_id: "b".into() }));
        assert_eq!(applied(&sidebar), ThemeMode::Paper);
        smol::block_on(sidebar.handle_command(SidebarCommand::CyclePrevProject));
        assert_eq!(applied(&sidebar), ThemeMode::Paper);
        smol::block_on(sidebar.handle_command(SidebarCommand::SelectProject { project_id: "a".into() }));
        assert_eq!(applied(&sidebar), ThemeMode::Dark);
    }

    #[test]
    fn project_theme_needs_current_project() {
        let (mut sidebar, _fakes) = sidebar(vec![project("a", "A")]);
        smol::block_on(sidebar.handle_command(SidebarCommand::SetProjectTheme { theme: Some(ThemeMode::Nord) }));
        assert_eq!(toast_messages(&sidebar), vec!["No project selected"]);
    }

    #[test]
    fn selecting_clears_preview() {
        let (mut sidebar, _fakes) = sidebar(vec![project("a", "A")]);
        smol::block_on(sidebar.handle_command(SidebarCommand::SelectProject { project_id: "a".into() }));
        smol::block_on(sidebar.handle_command(SidebarCommand::PreviewTheme { theme: ThemeMode::Retro }));
        assert_eq!(sidebar.theme.0.lock().preview(), Some(ThemeMode::Retro));

        smol::block_on(sidebar.handle_command(SidebarCommand::SetProjectTheme { theme: Some(ThemeMode::Red) }));
        assert_eq!(sidebar.theme.0.lock().preview(), None);
        assert_eq!(applied(&sidebar), ThemeMode::Red);
    }

    #[test]
    fn global_theme_is_persisted_setting() {
        let (mut sidebar, _fakes) = sidebar(vec![]);
        smol::block_on(sidebar.handle_command(SidebarCommand::SetGlobalTheme { theme: ThemeMode::Sepia }));
        assert_eq!(sidebar.settings().theme_mode, ThemeMode::Sepia);
        assert!(sidebar.take_settings_dirty());
        assert_eq!(applied(&sidebar), ThemeMode::Sepia);

        smol::block_on(sidebar.handle_command(SidebarCommand::PreviewGlobalTheme));
        assert_eq!(sidebar.theme.0.lock().preview(), Some(ThemeMode::Sepia));
        smol::block_on(sidebar.handle_command(SidebarCommand::EndThemePreview));
        assert_eq!(sidebar.theme.0.lock().preview(), None);
    }
}
