//! Navigation sidebar.
//!
//! `Sidebar` owns the sidebar's own UI state (picker, drag, dialogs, collapse)
//! and drives the shared workspace store through `WorkspaceAction`s. Every
//! user command enters through [`Sidebar::handle_command`], which is also the
//! error boundary: failures are logged and surfaced as toasts.

pub mod controller;
pub mod create;
pub mod drag;
pub mod list;
pub mod navigation;
pub mod onboarding;
pub mod picker;
pub mod snapshot;
pub mod theme_menu;
pub mod trash;

use crate::errors::{CommandError, panic_message, report};
use crate::host::{Host, SpecEvent};
use crate::notifications::ToastManager;
use crate::theme::{GlobalTheme, ThemePreview};
use crate::workspace::actions::execute::{WorkspaceAction, execute_action};
use crate::workspace::settings::AppSettings;
use crate::workspace::state::WorkspaceHandle;
use automaker_core::theme::{Appearance, ThemeMode};
use controller::{AnimationTarget, SidebarController};
use create::StarterTemplate;
use drag::ProjectDrag;
use futures::FutureExt;
use navigation::NavigationState;
use onboarding::OnboardingState;
use picker::{PickerOutcome, ProjectPicker};
use serde::{Deserialize, Serialize};
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use self::trash::TrashOperations;

/// A user interaction with the sidebar (tagged enum, one JSON object per command)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case", deny_unknown_fields)]
pub enum SidebarCommand {
    ToggleSidebar,
    SetAutoCollapse { enabled: bool },
    ViewportResized { width: f32 },
    /// Host light/dark signal changed; `None` when the host reports nothing
    AppearanceChanged { appearance: Option<Appearance> },

    OpenProjectPicker,
    PickerKey { key: String },
    PickerQuery { query: String },
    SelectProject { project_id: String },
    RenameProject { project_id: String, name: String },

    DragStart { project_id: String },
    DragDrop { over_id: Option<String> },
    DragCancel,

    MoveToTrash { project_id: String },
    RestoreProject { project_id: String },
    DeleteFromDisk { project_id: String },
    RemoveFromTrash { project_id: String },
    EmptyTrash,

    CyclePrevProject,
    CycleNextProject,
    ClearProjectHistory,

    PreviewTheme { theme: ThemeMode },
    PreviewGlobalTheme,
    EndThemePreview,
    SetProjectTheme { theme: Option<ThemeMode> },
    SetGlobalTheme { theme: ThemeMode },

    /// `path` pre-answers the directory picker in headless runs (see `main`)
    OpenFolder {
        #[serde(default)]
        path: Option<String>,
    },
    OpenNewProjectModal,
    CloseNewProjectModal,
    CreateBlankProject { name: String, parent_dir: String },
    CreateFromTemplate { template: StarterTemplate, name: String, parent_dir: String },
    CreateFromUrl { url: String, name: String, parent_dir: String },

    OnboardingGenerateSpec,
    OnboardingSkip,
    SetProjectOverview { overview: String },
    SetSpecOptions {
        generate_features: bool,
        analyze_project: bool,
        feature_count: u32,
    },
    CreateInitialSpec,
    SkipSetup,

    Navigate { route: String },
    SetRunningAgents { count: usize },
    ReportBug,

    /// Read-only; drivers answer it with [`Sidebar::snapshot`]
    GetState,
}

/// Modal visibility owned by the sidebar.
#[derive(Debug, Default)]
pub struct DialogState {
    pub new_project_modal_open: bool,
    /// Set while a creation flow runs; always cleared when it ends
    pub is_creating_project: bool,
}

pub struct Sidebar {
    workspace: WorkspaceHandle,
    host: Host,
    toasts: ToastManager,
    theme: GlobalTheme,
    theme_preview: ThemePreview,
    settings: AppSettings,
    settings_dirty: bool,
    controller: SidebarController,
    picker: ProjectPicker,
    drag: ProjectDrag,
    trash: TrashOperations,
    dialogs: DialogState,
    onboarding: OnboardingState,
    navigation: NavigationState,
    spec_events: Option<async_channel::Receiver<SpecEvent>>,
}

impl Sidebar {
    pub fn new(
        workspace: WorkspaceHandle,
        host: Host,
        toasts: ToastManager,
        theme: GlobalTheme,
        settings: AppSettings,
    ) -> Self {
        let theme_preview = ThemePreview::new(
            theme.clone(),
            Duration::from_millis(settings.theme_preview_delay_ms),
        );
        let sidebar = Self {
            controller: SidebarController::new(&settings.sidebar),
            workspace,
            host,
            toasts,
            theme,
            theme_preview,
            settings,
            settings_dirty: false,
            picker: ProjectPicker::default(),
            drag: ProjectDrag::default(),
            trash: TrashOperations::default(),
            dialogs: DialogState::default(),
            onboarding: OnboardingState::default(),
            navigation: NavigationState::default(),
            spec_events: None,
        };
        sidebar.sync_applied_theme();
        sidebar
    }

    /// Receive generation completions on `events`.
    pub fn with_spec_events(mut self, events: async_channel::Receiver<SpecEvent>) -> Self {
        self.spec_events = Some(events);
        self
    }

    pub fn workspace(&self) -> &WorkspaceHandle {
        &self.workspace
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Settings changed since the last call; clears the flag.
    pub fn take_settings_dirty(&mut self) -> bool {
        std::mem::take(&mut self.settings_dirty)
    }

    /// Run one command. Failures, panics included, become error toasts; nothing propagates.
    pub async fn handle_command(&mut self, command: SidebarCommand) {
        let label = format!("{:?}", command);
        let result = AssertUnwindSafe(self.run_command(command))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| {
                Err(CommandError::Unexpected(anyhow::anyhow!("panicked: {}", panic_message(&*panic))))
            });
        report(&self.toasts, &label, result);
        self.pump_spec_events();
    }

    async fn run_command(&mut self, command: SidebarCommand) -> Result<(), CommandError> {
        match command {
            SidebarCommand::ToggleSidebar => {
                let target = self.controller.toggle(&mut self.settings.sidebar);
                self.animate(target);
                self.settings_dirty = true;
            }
            SidebarCommand::SetAutoCollapse { enabled } => {
                self.controller.set_auto_collapse(enabled, &mut self.settings.sidebar);
                self.settings_dirty = true;
            }
            SidebarCommand::ViewportResized { width } => {
                let target = self.controller.viewport_resized(width, &mut self.settings.sidebar);
                if target.value().is_some() {
                    self.settings_dirty = true;
                }
                self.animate(target);
            }
            SidebarCommand::AppearanceChanged { appearance } => {
                self.theme.0.lock().set_appearance(appearance);
            }

            SidebarCommand::OpenProjectPicker => {
                let projects = self.workspace.read(|ws| ws.projects().to_vec());
                self.picker.open(&projects);
            }
            SidebarCommand::PickerKey { key } => {
                if let PickerOutcome::Select(action) = self.picker.handle_key(&key) {
                    self.dispatch(action)?;
                }
            }
            SidebarCommand::PickerQuery { query } => self.picker.set_query(&query),
            SidebarCommand::SelectProject { project_id } => {
                self.dispatch(WorkspaceAction::SetCurrentProject { project_id: Some(project_id) })?;
            }
            SidebarCommand::RenameProject { project_id, name } => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(CommandError::Validation("Project name is required".into()));
                }
                self.dispatch(WorkspaceAction::RenameProject { project_id, name })?;
            }

            SidebarCommand::DragStart { project_id } => self.drag.start(project_id),
            SidebarCommand::DragDrop { over_id } => {
                let projects = self.workspace.read(|ws| ws.projects().to_vec());
                if let Some(action) = self.drag.drop_on(over_id.as_deref(), &projects) {
                    self.dispatch(action)?;
                }
            }
            SidebarCommand::DragCancel => self.drag.cancel(),

            SidebarCommand::MoveToTrash { project_id } => self.move_project_to_trash(&project_id)?,
            SidebarCommand::RestoreProject { project_id } => self.restore_project(&project_id)?,
            SidebarCommand::DeleteFromDisk { project_id } => {
                self.delete_project_from_disk(&project_id).await?
            }
            SidebarCommand::RemoveFromTrash { project_id } => self.remove_from_trash(&project_id)?,
            SidebarCommand::EmptyTrash => {
                self.empty_trash().await?;
            }

            SidebarCommand::CyclePrevProject => {
                self.dispatch(WorkspaceAction::CyclePrevProject)?;
            }
            SidebarCommand::CycleNextProject => {
                self.dispatch(WorkspaceAction::CycleNextProject)?;
            }
            SidebarCommand::ClearProjectHistory => {
                self.dispatch(WorkspaceAction::ClearProjectHistory)?;
            }

            SidebarCommand::PreviewTheme { theme } => {
                self.preview_theme(theme).await;
            }
            SidebarCommand::PreviewGlobalTheme => {
                self.preview_theme(self.settings.theme_mode).await;
            }
            SidebarCommand::EndThemePreview => self.end_theme_preview(),
            SidebarCommand::SetProjectTheme { theme } => self.select_project_theme(theme)?,
            SidebarCommand::SetGlobalTheme { theme } => self.set_global_theme(theme),

            SidebarCommand::OpenFolder { .. } => self.open_folder().await?,
            SidebarCommand::OpenNewProjectModal => self.dialogs.new_project_modal_open = true,
            SidebarCommand::CloseNewProjectModal => self.dialogs.new_project_modal_open = false,
            SidebarCommand::CreateBlankProject { name, parent_dir } => {
                self.create_blank_project(&name, &parent_dir).await?
            }
            SidebarCommand::CreateFromTemplate { template, name, parent_dir } => {
                self.create_from_template(&template, &name, &parent_dir).await?
            }
            SidebarCommand::CreateFromUrl { url, name, parent_dir } => {
                self.create_from_custom_url(&url, &name, &parent_dir).await?
            }

            SidebarCommand::OnboardingGenerateSpec => self.onboarding_generate_spec(),
            SidebarCommand::OnboardingSkip => self.onboarding_skip(),
            SidebarCommand::SetProjectOverview { overview } => {
                self.onboarding.project_overview = overview;
            }
            SidebarCommand::SetSpecOptions { generate_features, analyze_project, feature_count } => {
                self.set_spec_options(generate_features, analyze_project, feature_count)?
            }
            SidebarCommand::CreateInitialSpec => self.create_initial_spec().await?,
            SidebarCommand::SkipSetup => self.skip_setup(),

            SidebarCommand::Navigate { route } => self.navigate(&route)?,
            SidebarCommand::SetRunningAgents { count } => self.navigation.running_agents = count,
            SidebarCommand::ReportBug => self.report_bug().await?,
            SidebarCommand::GetState => {}
        }
        Ok(())
    }

    /// Apply a store intent and keep the applied theme in step with the current project.
    pub(crate) fn dispatch(&self, action: WorkspaceAction) -> Result<Option<serde_json::Value>, CommandError> {
        let result = self
            .workspace
            .update(|ws| execute_action(action, ws))
            .into_result()
            .map_err(CommandError::Validation);
        self.sync_applied_theme();
        result
    }

    /// Play the collapse animation through to `target`; there is no frame clock headless.
    fn animate(&mut self, target: AnimationTarget) {
        for frame in self.controller.animation_frames(target) {
            self.controller.set_animation(frame);
        }
    }

    /// Drain completed generation events without blocking.
    pub fn pump_spec_events(&mut self) {
        let Some(events) = self.spec_events.clone() else {
            return;
        };
        while let Ok(event) = events.try_recv() {
            self.handle_spec_event(event);
        }
    }
}
