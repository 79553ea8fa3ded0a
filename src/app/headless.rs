use crate::host::local::LocalFs;
use crate::notifications::Toast;
use crate::sidebar::{Sidebar, SidebarCommand};
use crate::workspace::persistence;
use crate::workspace::settings;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Headless driver: one JSON `SidebarCommand` per input line, toasts on output.
/// `get_state` lines are answered with the sidebar snapshot as one JSON line.
///
/// Persists the workspace whenever its data version moved and the settings
/// whenever the sidebar marked them dirty.
pub struct HeadlessApp {
    sidebar: Sidebar,
    /// Directory picker backing the sidebar; `open_folder` lines pre-answer it
    local_fs: Arc<LocalFs>,
    workspace_path: PathBuf,
    settings_path: PathBuf,
    /// Track last saved data_version to skip saves for UI-only changes
    last_saved_version: u64,
}

impl HeadlessApp {
    pub fn new(sidebar: Sidebar, local_fs: Arc<LocalFs>, workspace_path: PathBuf, settings_path: PathBuf) -> Self {
        let last_saved_version = sidebar.workspace().read(|ws| ws.data_version());
        Self {
            sidebar,
            local_fs,
            workspace_path,
            settings_path,
            last_saved_version,
        }
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Process `input` until EOF.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<SidebarCommand>(line) {
                Ok(SidebarCommand::GetState) => {
                    let state = serde_json::to_string(&self.sidebar.snapshot())
                        .context("Failed to serialize sidebar state")?;
                    writeln!(output, "{}", state)?;
                }
                Ok(command) => self.execute(command),
                Err(e) => {
                    log::error!("Invalid command {}: {}", line, e);
                    self.sidebar
                        .toasts()
                        .post(Toast::error("Invalid command").with_description(e.to_string()));
                }
            }

            for toast in self.sidebar.toasts().take_all() {
                writeln!(output, "{}", toast)?;
            }
            output.flush()?;
            self.save_if_dirty();
        }
        Ok(())
    }

    fn execute(&mut self, command: SidebarCommand) {
        if let SidebarCommand::OpenFolder { path: Some(path) } = &command {
            self.local_fs.queue_picker_result(path.clone());
        }
        smol::block_on(self.sidebar.handle_command(command));
    }

    fn save_if_dirty(&mut self) {
        let (data, version) = self.sidebar.workspace().snapshot();
        if version != self.last_saved_version {
            match persistence::save_workspace_to(&self.workspace_path, &data) {
                Ok(()) => self.last_saved_version = version,
                Err(e) => log::error!("Failed to save workspace: {}", e),
            }
        }

        if self.sidebar.take_settings_dirty() {
            if let Err(e) = settings::save_settings_to(&self.settings_path, self.sidebar.settings()) {
                log::error!("Failed to save settings: {}", e);
            }
        }
    }
}
