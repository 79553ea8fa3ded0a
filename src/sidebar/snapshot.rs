//! Read-only view of everything the sidebar would render, answered by `get_state`.

use super::Sidebar;
use super::navigation::{NavItem, NavSection};
use super::theme_menu::{ThemeGroup, theme_groups};
use crate::workspace::state::{ProjectData, TrashedProject};
use automaker_core::theme::{Appearance, TerminalPalette, ThemeMode};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct SidebarSnapshot {
    pub chrome: ChromeView,
    pub current_project_id: Option<String>,
    pub projects: Vec<ProjectView>,
    /// Visited project ids, most recent first
    pub project_history: Vec<String>,
    /// Project row being dragged
    pub dragging: Option<String>,
    pub trash: TrashView,
    pub picker: Option<PickerView>,
    pub navigation: NavigationView,
    pub theme: ThemeView,
    pub dialogs: DialogsView,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChromeView {
    pub open: bool,
    pub auto_collapse: bool,
    pub width: f32,
}

#[derive(Clone, Debug, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: ProjectData,
    pub current: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct TrashView {
    pub projects: Vec<TrashedView>,
    pub emptying: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct TrashedView {
    #[serde(flatten)]
    pub entry: TrashedProject,
    pub deleting: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct PickerView {
    pub query: String,
    pub highlighted_index: usize,
    pub entries: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NavLinkView {
    #[serde(flatten)]
    pub item: NavItem,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct NavSectionView {
    pub label: Option<&'static str>,
    pub items: Vec<NavLinkView>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NavigationView {
    pub route: String,
    pub sections: Vec<NavSectionView>,
    pub bottom_links: Vec<NavLinkView>,
    pub running_agents_badge: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ThemeView {
    pub global: ThemeMode,
    /// Mode currently applied (project override or global)
    pub applied: ThemeMode,
    pub preview: Option<ThemeMode>,
    pub appearance: Option<Appearance>,
    /// `#rrggbb` background of the palette on screen, preview included
    pub background: String,
    pub groups: Vec<ThemeGroup>,
}

#[derive(Clone, Debug, Serialize)]
pub struct DialogsView {
    pub new_project_modal_open: bool,
    pub is_creating_project: bool,
    pub onboarding_open: bool,
    pub setup_open: bool,
    pub spec_creating_for: Option<String>,
}

impl Sidebar {
    fn link_view(&self, item: NavItem) -> NavLinkView {
        NavLinkView { active: self.is_active_route(item.id), item }
    }

    fn section_view(&self, section: NavSection) -> NavSectionView {
        NavSectionView {
            label: section.label,
            items: section.items.into_iter().map(|item| self.link_view(item)).collect(),
        }
    }

    pub fn snapshot(&self) -> SidebarSnapshot {
        let (current_project_id, projects, project_history, trashed) = self.workspace.read(|ws| {
            let current = ws.data().current_project_id.clone();
            let projects = ws
                .projects()
                .iter()
                .map(|p| ProjectView {
                    current: current.as_deref() == Some(p.id.as_str()),
                    project: p.clone(),
                })
                .collect::<Vec<_>>();
            (current, projects, ws.project_history().to_vec(), ws.trashed_projects().to_vec())
        });

        let trash = TrashView {
            projects: trashed
                .into_iter()
                .map(|entry| TrashedView { deleting: self.trash.is_deleting(entry.id()), entry })
                .collect(),
            emptying: self.trash.is_emptying(),
        };

        let picker = self.picker.highlighted_index().map(|highlighted_index| PickerView {
            query: self.picker.query().to_string(),
            highlighted_index,
            entries: self.picker.visible_names().into_iter().map(str::to_string).collect(),
        });

        let navigation = NavigationView {
            route: self.navigation.current_route.clone(),
            sections: self.nav_sections().into_iter().map(|s| self.section_view(s)).collect(),
            bottom_links: self.bottom_links().into_iter().map(|l| self.link_view(l)).collect(),
            running_agents_badge: self.running_agents_badge(),
        };

        let (preview, appearance) = {
            let theme = self.theme.0.lock();
            (theme.preview(), theme.appearance())
        };
        let theme = ThemeView {
            global: self.settings.theme_mode,
            applied: self.theme.mode(),
            preview,
            appearance,
            background: TerminalPalette::to_hex(self.theme.display_palette().background),
            groups: theme_groups(),
        };

        SidebarSnapshot {
            chrome: ChromeView {
                open: self.controller.is_open(),
                auto_collapse: self.controller.is_auto_collapse(),
                width: self.controller.current_width(),
            },
            current_project_id,
            projects,
            project_history,
            dragging: self.drag.dragging().map(str::to_string),
            trash,
            picker,
            navigation,
            theme,
            dialogs: DialogsView {
                new_project_modal_open: self.dialogs.new_project_modal_open,
                is_creating_project: self.dialogs.is_creating_project,
                onboarding_open: self.onboarding.onboarding_open,
                setup_open: self.onboarding.setup_open,
                spec_creating_for: self.onboarding.spec_creating_for.clone(),
            },
        }
    }
}
