//! Post-creation onboarding and initial specification setup.
//!
//! After a project is created the onboarding dialog offers to generate an
//! `app_spec.txt`; the setup dialog collects an overview and generation
//! options. Generation itself runs elsewhere and reports back as a [`SpecEvent`].

use super::Sidebar;
use crate::errors::CommandError;
use crate::host::{SpecEvent, SpecOptions};
use crate::notifications::Toast;

/// Feature count offered by default in the setup dialog.
pub const DEFAULT_FEATURE_COUNT: u32 = 50;

#[derive(Debug)]
pub struct OnboardingState {
    pub onboarding_open: bool,
    pub new_project_name: String,
    pub new_project_path: String,

    pub setup_open: bool,
    pub setup_project_path: String,
    pub project_overview: String,
    pub generate_features: bool,
    pub analyze_project: bool,
    pub feature_count: u32,

    /// Project path whose specification is being generated
    pub spec_creating_for: Option<String>,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            onboarding_open: false,
            new_project_name: String::new(),
            new_project_path: String::new(),
            setup_open: false,
            setup_project_path: String::new(),
            project_overview: String::new(),
            generate_features: true,
            analyze_project: true,
            feature_count: DEFAULT_FEATURE_COUNT,
            spec_creating_for: None,
        }
    }
}

impl OnboardingState {
    pub(crate) fn open_onboarding(&mut self, name: &str, path: &str) {
        self.onboarding_open = true;
        self.new_project_name = name.to_string();
        self.new_project_path = path.to_string();
    }

    pub(crate) fn open_setup(&mut self, path: &str) {
        self.setup_open = true;
        self.setup_project_path = path.to_string();
        self.project_overview.clear();
    }

    fn clear_new_project(&mut self) {
        self.new_project_name.clear();
        self.new_project_path.clear();
    }

    fn close_setup(&mut self) {
        self.setup_open = false;
        self.setup_project_path.clear();
        self.project_overview.clear();
    }
}

impl Sidebar {
    pub(crate) fn onboarding_generate_spec(&mut self) {
        let path = self.onboarding.new_project_path.clone();
        self.onboarding.onboarding_open = false;
        self.onboarding.open_setup(&path);
    }

    pub(crate) fn onboarding_skip(&mut self) {
        self.onboarding.onboarding_open = false;
        self.onboarding.clear_new_project();
        self.toasts.post(
            Toast::info("You can generate your app_spec.txt anytime from the Spec view")
                .with_description("Your project is ready to use!"),
        );
    }

    pub(crate) fn skip_setup(&mut self) {
        self.onboarding.close_setup();
        self.onboarding.clear_new_project();
        self.toasts.post(
            Toast::info("Setup skipped")
                .with_description("You can set up your app_spec.txt later from the Spec view."),
        );
    }

    pub(crate) fn set_spec_options(
        &mut self,
        generate_features: bool,
        analyze_project: bool,
        feature_count: u32,
    ) -> Result<(), CommandError> {
        if feature_count == 0 {
            return Err(CommandError::Validation("Feature count must be at least 1".into()));
        }
        self.onboarding.generate_features = generate_features;
        self.onboarding.analyze_project = analyze_project;
        self.onboarding.feature_count = feature_count;
        Ok(())
    }

    /// Start generating the specification for the project in the setup dialog.
    pub(crate) async fn create_initial_spec(&mut self) -> Result<(), CommandError> {
        let overview = self.onboarding.project_overview.trim().to_string();
        let path = self.onboarding.setup_project_path.clone();
        if overview.is_empty() {
            return Err(CommandError::Validation("Project overview is required".into()));
        }
        if path.is_empty() {
            return Err(CommandError::Validation("No project selected for setup".into()));
        }

        self.onboarding.spec_creating_for = Some(path.clone());
        self.onboarding.setup_open = false;

        let Some(generator) = self.host.spec_generator.clone() else {
            self.onboarding.spec_creating_for = None;
            return Err(CommandError::Validation("Spec regeneration not available".into()));
        };
        let options = SpecOptions {
            generate_features: self.onboarding.generate_features,
            analyze_project: self.onboarding.analyze_project,
            max_features: self.onboarding.generate_features.then_some(self.onboarding.feature_count),
        };

        log::info!("Starting spec generation for {}", path);
        let target = path.clone();
        if let Err(e) = smol::unblock(move || generator.start_generation(&target, &overview, options)).await {
            self.onboarding.spec_creating_for = None;
            return Err(CommandError::external("Failed to create specification", format!("{:#}", e)));
        }

        self.toasts.post(
            Toast::info("Generating app specification...")
                .with_description("This may take a minute. You'll be notified when complete."),
        );
        Ok(())
    }

    /// Completion of a generation. Events for other paths are ignored.
    pub(crate) fn handle_spec_event(&mut self, event: SpecEvent) {
        if self.onboarding.spec_creating_for.as_deref() != Some(event.project_path()) {
            log::debug!("Ignoring spec event for {}", event.project_path());
            return;
        }
        self.onboarding.spec_creating_for = None;

        match event {
            SpecEvent::Completed { project_path } => {
                log::info!("Spec generation finished for {}", project_path);
                self.onboarding.close_setup();
                self.onboarding.clear_new_project();
                self.toasts.post(
                    Toast::success("App specification created")
                        .with_description("Your project is ready to use!"),
                );
            }
            SpecEvent::Failed { project_path, error } => {
                log::error!("Spec generation failed for {}: {}", project_path, error);
                self.toasts.post(Toast::error("Failed to create specification").with_description(error));
            }
        }
    }
}
