//! New project flows: blank, from a starter template, from a repository URL,
//! and opening an existing folder.
//!
//! Each flow acquires a directory, prepares `.automaker`, writes the initial
//! `app_spec.txt` and only then registers the project. The first failing step
//! aborts the flow with nothing registered.

use super::Sidebar;
use crate::errors::{CommandError, ExternalContext};
use crate::host::{InitResult, project_name_from_path};
use crate::notifications::Toast;
use crate::workspace::actions::execute::WorkspaceAction;
use automaker_core::app_spec::{self, AppSpec};
use serde::{Deserialize, Serialize};

const UNTITLED_PROJECT: &str = "Untitled Project";

/// A starter template offered by the new project modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarterTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub repo_url: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

fn required(value: &str, what: &str) -> Result<String, CommandError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CommandError::Validation(format!("{} is required", what)));
    }
    Ok(value.to_string())
}

fn join_path(parent_dir: &str, name: &str) -> String {
    format!("{}/{}", parent_dir.trim_end_matches(['/', '\\']), name)
}

impl Sidebar {
    pub(crate) async fn create_blank_project(&mut self, name: &str, parent_dir: &str) -> Result<(), CommandError> {
        let name = required(name, "Project name")?;
        let parent_dir = required(parent_dir, "Parent directory")?;

        self.dialogs.is_creating_project = true;
        let result = self.run_blank(&name, &parent_dir).await;
        self.dialogs.is_creating_project = false;
        result
    }

    async fn run_blank(&mut self, name: &str, parent_dir: &str) -> Result<(), CommandError> {
        let project_path = join_path(parent_dir, name);

        let fs = self.host.fs.clone();
        let target = project_path.clone();
        smol::unblock(move || fs.create_directory(&target))
            .await
            .external("Failed to create project directory")?;

        self.initialize(&project_path).await?;
        self.write_app_spec(&project_path, AppSpec::blank(name)).await?;
        self.register_new_project(&project_path, name)?;

        self.toasts.post(
            Toast::success("Project created")
                .with_description(format!("Created {} with .automaker directory", name)),
        );
        Ok(())
    }

    pub(crate) async fn create_from_template(
        &mut self,
        template: &StarterTemplate,
        name: &str,
        parent_dir: &str,
    ) -> Result<(), CommandError> {
        let name = required(name, "Project name")?;
        let parent_dir = required(parent_dir, "Parent directory")?;

        self.dialogs.is_creating_project = true;
        let result = self.run_template(template, &name, &parent_dir).await;
        self.dialogs.is_creating_project = false;
        result
    }

    async fn run_template(
        &mut self,
        template: &StarterTemplate,
        name: &str,
        parent_dir: &str,
    ) -> Result<(), CommandError> {
        let project_path = self
            .clone_into(&template.repo_url, name, parent_dir)
            .await
            .external("Failed to clone template")?;

        self.initialize(&project_path).await?;
        let spec = AppSpec::from_template(
            name,
            &template.name,
            &template.description,
            &template.tech_stack,
            &template.features,
        );
        self.write_app_spec(&project_path, spec).await?;
        self.register_new_project(&project_path, name)?;

        self.toasts.post(
            Toast::success("Project created from template")
                .with_description(format!("Created {} from {}", name, template.name)),
        );
        Ok(())
    }

    pub(crate) async fn create_from_custom_url(
        &mut self,
        repo_url: &str,
        name: &str,
        parent_dir: &str,
    ) -> Result<(), CommandError> {
        let repo_url = required(repo_url, "Repository URL")?;
        let name = required(name, "Project name")?;
        let parent_dir = required(parent_dir, "Parent directory")?;

        self.dialogs.is_creating_project = true;
        let result = self.run_custom_url(&repo_url, &name, &parent_dir).await;
        self.dialogs.is_creating_project = false;
        result
    }

    async fn run_custom_url(&mut self, repo_url: &str, name: &str, parent_dir: &str) -> Result<(), CommandError> {
        let project_path = self
            .clone_into(repo_url, name, parent_dir)
            .await
            .external("Failed to clone repository")?;

        self.initialize(&project_path).await?;
        self.write_app_spec(&project_path, AppSpec::from_repository(name, repo_url)).await?;
        self.register_new_project(&project_path, name)?;

        self.toasts.post(
            Toast::success("Project created from repository")
                .with_description(format!("Created {} from {}", name, repo_url)),
        );
        Ok(())
    }

    /// Pick a directory and register it. Cancelling the picker does nothing.
    pub(crate) async fn open_folder(&mut self) -> Result<(), CommandError> {
        let fs = self.host.fs.clone();
        let picked = smol::unblock(move || fs.open_directory_picker())
            .await
            .external("Failed to open project")?;
        let Some(path) = picked.and_then(|paths| paths.into_iter().find(|p| !p.is_empty())) else {
            log::debug!("Directory picker cancelled");
            return Ok(());
        };
        let name = project_name_from_path(&path).unwrap_or(UNTITLED_PROJECT).to_string();

        let bootstrap = self.host.bootstrap.clone();
        let target = path.clone();
        let had_automaker_dir = smol::unblock(move || bootstrap.has_automaker_dir(&target))
            .await
            .external("Failed to open project")?;

        let init = self.initialize(&path).await?;
        self.register(&path, &name)?;

        let bootstrap = self.host.bootstrap.clone();
        let target = path.clone();
        let spec_exists = smol::unblock(move || bootstrap.has_app_spec(&target))
            .await
            .external("Failed to open project")?;

        let toast = if !had_automaker_dir && !spec_exists {
            self.onboarding.open_setup(&path);
            Toast::success("Project opened")
                .with_description(format!("Opened {}. Let's set up your app specification!", name))
        } else if !init.created_files.is_empty() {
            let title = if init.is_new_project { "Project initialized" } else { "Project updated" };
            Toast::success(title)
                .with_description(format!("Set up {} file(s) in .automaker", init.created_files.len()))
        } else {
            Toast::success("Project opened").with_description(format!("Opened {}", name))
        };
        self.toasts.post(toast);
        Ok(())
    }

    async fn clone_into(&self, url: &str, name: &str, parent_dir: &str) -> anyhow::Result<String> {
        let cloner = self.host.cloner.clone();
        let (url, name, parent_dir) = (url.to_string(), name.to_string(), parent_dir.to_string());
        smol::unblock(move || cloner.clone_repository(&url, &name, &parent_dir)).await
    }

    async fn initialize(&self, project_path: &str) -> Result<InitResult, CommandError> {
        let bootstrap = self.host.bootstrap.clone();
        let target = project_path.to_string();
        smol::unblock(move || bootstrap.initialize_project_structure(&target))
            .await
            .external("Failed to initialize project")
    }

    async fn write_app_spec(&self, project_path: &str, spec: AppSpec) -> Result<(), CommandError> {
        let fs = self.host.fs.clone();
        let path = app_spec::app_spec_path(project_path);
        let contents = spec.render();
        smol::unblock(move || fs.write_file(&path, &contents))
            .await
            .external("Failed to create project")
    }

    /// Upsert `path` as the current project with the theme it should inherit.
    fn register(&self, path: &str, name: &str) -> Result<(), CommandError> {
        let global = self.settings.theme_mode;
        let theme = self.workspace.read(|ws| ws.effective_theme_for_path(path, global));
        self.dispatch(WorkspaceAction::UpsertAndSetCurrentProject {
            path: path.to_string(),
            name: name.to_string(),
            theme,
        })?;
        Ok(())
    }

    fn register_new_project(&mut self, path: &str, name: &str) -> Result<(), CommandError> {
        self.register(path, name)?;
        log::info!("Created project {} at {}", name, path);
        self.dialogs.new_project_modal_open = false;
        self.onboarding.open_onboarding(name, path);
        Ok(())
    }
}
