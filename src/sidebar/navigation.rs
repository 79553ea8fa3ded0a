//! Navigation entries, bottom links and the running agents badge.

use super::Sidebar;
use crate::errors::{CommandError, ExternalContext};
use crate::workspace::settings::FeatureFlags;
use serde::Serialize;

/// Where "Report bug" sends the user.
pub const BUG_REPORT_URL: &str = "https://github.com/AutoMaker-Org/automaker/issues";

/// Highest count the running agents badge shows.
const BADGE_CAP: usize = 99;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub label: Option<&'static str>,
    pub items: Vec<NavItem>,
}

#[derive(Debug)]
pub struct NavigationState {
    pub current_route: String,
    pub running_agents: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self { current_route: "/".to_string(), running_agents: 0 }
    }
}

/// Route path for a view id. `welcome` is the root.
pub fn route_for(id: &str) -> String {
    if id == "welcome" { "/".to_string() } else { format!("/{}", id) }
}

/// Badge text for the running agents link; `None` hides the badge.
pub fn running_agents_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        n if n > BADGE_CAP => Some(BADGE_CAP.to_string()),
        n => Some(n.to_string()),
    }
}

/// Project views, honouring the hide flags. Empty without a current project.
pub fn nav_sections(flags: &FeatureFlags, has_project: bool) -> Vec<NavSection> {
    if !has_project {
        return Vec::new();
    }

    let project = vec![
        NavItem { id: "board", label: "Kanban Board" },
        NavItem { id: "agent", label: "Agent Runner" },
    ];

    let tools: Vec<NavItem> = [
        (NavItem { id: "spec", label: "Spec Editor" }, flags.hide_spec_editor),
        (NavItem { id: "context", label: "Context" }, flags.hide_context),
        (NavItem { id: "profiles", label: "AI Profiles" }, flags.hide_ai_profiles),
        (NavItem { id: "terminal", label: "Terminal" }, flags.hide_terminal),
    ]
    .into_iter()
    .filter_map(|(item, hidden)| (!hidden).then_some(item))
    .collect();

    let mut sections = vec![NavSection { label: None, items: project }];
    if !tools.is_empty() {
        sections.push(NavSection { label: Some("Tools"), items: tools });
    }
    sections
}

/// Links pinned to the bottom of the sidebar.
pub fn bottom_links(flags: &FeatureFlags) -> Vec<NavItem> {
    let mut links = Vec::new();
    if !flags.hide_wiki {
        links.push(NavItem { id: "wiki", label: "Wiki" });
    }
    if !flags.hide_running_agents {
        links.push(NavItem { id: "running-agents", label: "Running Agents" });
    }
    links.push(NavItem { id: "settings", label: "Settings" });
    links
}

fn is_known_view(id: &str, flags: &FeatureFlags) -> bool {
    id == "welcome"
        || bottom_links(flags).iter().any(|l| l.id == id)
        || nav_sections(flags, true).iter().flat_map(|s| &s.items).any(|i| i.id == id)
}

impl Sidebar {
    pub fn is_active_route(&self, id: &str) -> bool {
        self.navigation.current_route == route_for(id)
    }

    pub fn running_agents_badge(&self) -> Option<String> {
        running_agents_badge(self.navigation.running_agents)
    }

    pub fn nav_sections(&self) -> Vec<NavSection> {
        let has_project = self.workspace.read(|ws| ws.current_project().is_some());
        nav_sections(&self.settings.features, has_project)
    }

    pub fn bottom_links(&self) -> Vec<NavItem> {
        bottom_links(&self.settings.features)
    }

    pub(crate) fn navigate(&mut self, id: &str) -> Result<(), CommandError> {
        if !is_known_view(id, &self.settings.features) {
            return Err(CommandError::Validation(format!("Unknown view: {}", id)));
        }
        self.navigation.current_route = route_for(id);
        log::debug!("Navigated to {}", self.navigation.current_route);
        Ok(())
    }

    pub(crate) async fn report_bug(&self) -> Result<(), CommandError> {
        let links = self.host.links.clone();
        smol::unblock(move || links.open(BUG_REPORT_URL))
            .await
            .external("Failed to open link")
    }
}
