mod app;
mod errors;
mod host;
mod notifications;
mod process;
mod sidebar;
mod theme;
mod workspace;

use std::sync::Arc;

use crate::app::HeadlessApp;
use crate::host::Host;
use crate::host::local::{GitCloner, LocalBootstrap, LocalFs, LocalSpecGenerator, SystemLinkOpener};
use crate::notifications::ToastManager;
use crate::sidebar::Sidebar;
use crate::theme::{AppTheme, GlobalTheme, appearance_from_env};
use crate::workspace::state::{Workspace, WorkspaceHandle};
use crate::workspace::{persistence, settings};

fn main() {
    env_logger::init();

    // Load or create workspace
    let workspace_data = persistence::load_workspace().unwrap_or_else(|e| {
        log::warn!("Failed to load workspace: {:#}, using default", e);
        persistence::default_workspace()
    });

    let settings = settings::load_settings();
    let theme = GlobalTheme::new(AppTheme::new(settings.theme_mode, appearance_from_env()));

    let (spec_tx, spec_rx) = async_channel::unbounded();
    let local_fs = Arc::new(LocalFs::new());
    let host = Host {
        fs: local_fs.clone(),
        bootstrap: Arc::new(LocalBootstrap),
        cloner: Arc::new(GitCloner),
        spec_generator: Some(Arc::new(LocalSpecGenerator::new(spec_tx))),
        links: Arc::new(SystemLinkOpener),
    };

    let sidebar = Sidebar::new(
        WorkspaceHandle::new(Workspace::new(workspace_data)),
        host,
        ToastManager::new(),
        theme,
        settings,
    )
    .with_spec_events(spec_rx);

    let mut app = HeadlessApp::new(
        sidebar,
        local_fs,
        persistence::get_workspace_path(),
        settings::get_settings_path(),
    );

    log::info!("Reading sidebar commands from stdin");
    if let Err(e) = app.run(std::io::stdin().lock(), std::io::stdout().lock()) {
        log::error!("Command loop stopped: {:#}", e);
        std::process::exit(1);
    }
}
