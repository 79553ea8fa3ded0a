//! External collaborators of the sidebar.
//!
//! Everything that touches the disk, the network or the desktop shell sits
//! behind one of these traits. Calls are blocking; async callers wrap them in
//! `smol::unblock`.

pub mod local;

use anyhow::Result;
use std::sync::Arc;

/// Filesystem and native dialog operations.
pub trait ProjectFs: Send + Sync {
    fn create_directory(&self, path: &str) -> Result<()>;
    fn write_file(&self, path: &str, contents: &str) -> Result<()>;
    /// `None` when the user cancelled the dialog.
    fn open_directory_picker(&self) -> Result<Option<Vec<String>>>;
    /// Move a project directory to the system trash. A missing path is not an error.
    fn trash_path(&self, path: &str) -> Result<()>;
}

/// Outcome of preparing a project's `.automaker` structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitResult {
    /// Entries created by this call, relative to the project root
    pub created_files: Vec<String>,
    /// `.automaker` did not exist before
    pub is_new_project: bool,
}

pub trait ProjectBootstrap: Send + Sync {
    fn initialize_project_structure(&self, path: &str) -> Result<InitResult>;
    fn has_automaker_dir(&self, path: &str) -> Result<bool>;
    fn has_app_spec(&self, path: &str) -> Result<bool>;
}

pub trait RepoCloner: Send + Sync {
    /// Clone `url` into `<parent_dir>/<name>`. Returns the project path.
    fn clone_repository(&self, url: &str, name: &str, parent_dir: &str) -> Result<String>;
}

/// Options for initial specification generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecOptions {
    pub generate_features: bool,
    pub analyze_project: bool,
    /// Only set when `generate_features` is on
    pub max_features: Option<u32>,
}

/// Completion of a generation started through [`SpecGenerator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpecEvent {
    Completed { project_path: String },
    Failed { project_path: String, error: String },
}

impl SpecEvent {
    pub fn project_path(&self) -> &str {
        match self {
            SpecEvent::Completed { project_path } | SpecEvent::Failed { project_path, .. } => project_path,
        }
    }
}

/// Starts specification generation. Completion arrives later as a [`SpecEvent`].
pub trait SpecGenerator: Send + Sync {
    fn start_generation(&self, project_path: &str, overview: &str, options: SpecOptions) -> Result<()>;
}

pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// The full set of collaborators a sidebar is wired to.
#[derive(Clone)]
pub struct Host {
    pub fs: Arc<dyn ProjectFs>,
    pub bootstrap: Arc<dyn ProjectBootstrap>,
    pub cloner: Arc<dyn RepoCloner>,
    /// `None` when generation is not available in this build
    pub spec_generator: Option<Arc<dyn SpecGenerator>>,
    pub links: Arc<dyn LinkOpener>,
}

/// Last non-empty component of a `/` or `\` separated path.
pub fn project_name_from_path(path: &str) -> Option<&str> {
    path.split(['/', '\\']).filter(|s| !s.is_empty()).last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_from_path() {
        assert_eq!(project_name_from_path("/home/me/app"), Some("app"));
        assert_eq!(project_name_from_path("C:\\work\\tool\\"), Some("tool"));
        assert_eq!(project_name_from_path("/"), None);
    }

    #[test]
    fn spec_event_path() {
        let event = SpecEvent::Failed { project_path: "/p".into(), error: "x".into() };
        assert_eq!(event.project_path(), "/p");
    }
}
