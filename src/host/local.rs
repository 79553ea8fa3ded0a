//! Local collaborators: `std::fs`, the `git` binary and the desktop link opener.

use super::{
    InitResult, LinkOpener, ProjectBootstrap, ProjectFs, RepoCloner, SpecEvent, SpecGenerator,
    SpecOptions, project_name_from_path,
};
use crate::process;
use anyhow::{Context, Result, bail};
use automaker_core::app_spec::{self, AUTOMAKER_DIR, AppSpec};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::Path;

/// Subdirectories created under `.automaker`
const AUTOMAKER_SUBDIRS: &[&str] = &["features", "context"];

/// Local filesystem. The directory picker serves queued paths, one per call.
#[derive(Default)]
pub struct LocalFs {
    picker_queue: Mutex<VecDeque<String>>,
}

impl LocalFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path the next `open_directory_picker` call returns.
    pub fn queue_picker_result(&self, path: impl Into<String>) {
        self.picker_queue.lock().push_back(path.into());
    }
}

impl ProjectFs for LocalFs {
    fn create_directory(&self, path: &str) -> Result<()> {
        std::fs::create_dir_all(path).with_context(|| format!("Failed to create {}", path))
    }

    fn write_file(&self, path: &str, contents: &str) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path))
    }

    fn open_directory_picker(&self) -> Result<Option<Vec<String>>> {
        Ok(self.picker_queue.lock().pop_front().map(|path| vec![path]))
    }

    fn trash_path(&self, path: &str) -> Result<()> {
        if !Path::new(path).exists() {
            log::warn!("{} is already gone", path);
            return Ok(());
        }
        trash::delete(path).with_context(|| format!("Failed to move {} to the trash", path))?;
        log::info!("Moved {} to the system trash", path);
        Ok(())
    }
}

/// Creates `.automaker` and its subdirectories.
pub struct LocalBootstrap;

impl ProjectBootstrap for LocalBootstrap {
    fn initialize_project_structure(&self, path: &str) -> Result<InitResult> {
        let root = Path::new(path);
        if !root.is_dir() {
            bail!("{} is not a directory", path);
        }

        let automaker = root.join(AUTOMAKER_DIR);
        let is_new_project = !automaker.exists();
        let mut created_files = Vec::new();

        if is_new_project {
            std::fs::create_dir_all(&automaker)
                .with_context(|| format!("Failed to create {}", automaker.display()))?;
            created_files.push(AUTOMAKER_DIR.to_string());
        }
        for sub in AUTOMAKER_SUBDIRS {
            let dir = automaker.join(sub);
            if !dir.exists() {
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                created_files.push(format!("{}/{}", AUTOMAKER_DIR, sub));
            }
        }

        Ok(InitResult { created_files, is_new_project })
    }

    fn has_automaker_dir(&self, path: &str) -> Result<bool> {
        Ok(Path::new(&app_spec::automaker_dir(path)).is_dir())
    }

    fn has_app_spec(&self, path: &str) -> Result<bool> {
        Ok(Path::new(&app_spec::app_spec_path(path)).is_file())
    }
}

/// Clones with the `git` command line.
pub struct GitCloner;

impl RepoCloner for GitCloner {
    fn clone_repository(&self, url: &str, name: &str, parent_dir: &str) -> Result<String> {
        let target = Path::new(parent_dir).join(name);
        if target.exists() {
            bail!("{} already exists", target.display());
        }

        log::info!("Cloning {} into {}", url, target.display());
        let mut cmd = process::command("git");
        cmd.args(["clone", "--depth", "1", url]).arg(&target);
        process::run_checked(&mut cmd)?;

        Ok(target.to_string_lossy().into_owned())
    }
}

/// Writes the overview into `app_spec.txt` and reports completion on a channel.
pub struct LocalSpecGenerator {
    events: async_channel::Sender<SpecEvent>,
}

impl LocalSpecGenerator {
    pub fn new(events: async_channel::Sender<SpecEvent>) -> Self {
        Self { events }
    }

    /// Write `overview` into the project's document, leaving the other sections alone.
    fn generate(project_path: &str, overview: &str) -> Result<()> {
        let lines: Vec<String> =
            overview.lines().map(|l| l.trim().to_string()).filter(|l| !l.is_empty()).collect();
        let path = app_spec::app_spec_path(project_path);

        let existing = match std::fs::read_to_string(&path) {
            Ok(document) => Some(document),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path)),
        };
        let document = match existing.as_deref().and_then(|doc| app_spec::replace_overview(doc, &lines)) {
            Some(document) => document,
            None => {
                if existing.is_some() {
                    log::warn!("{} has no overview section, rewriting it", path);
                }
                let name = project_name_from_path(project_path).unwrap_or("Untitled Project");
                AppSpec { overview: lines, ..AppSpec::blank(name) }.render()
            }
        };
        std::fs::write(&path, document).with_context(|| format!("Failed to write {}", path))
    }
}

impl SpecGenerator for LocalSpecGenerator {
    fn start_generation(&self, project_path: &str, overview: &str, options: SpecOptions) -> Result<()> {
        if !Path::new(&app_spec::automaker_dir(project_path)).is_dir() {
            bail!("{} has not been initialized", project_path);
        }
        log::info!(
            "Generating spec for {} (features: {}, analyze: {}, max: {:?})",
            project_path,
            options.generate_features,
            options.analyze_project,
            options.max_features
        );

        let event = match Self::generate(project_path, overview) {
            Ok(()) => SpecEvent::Completed { project_path: project_path.to_string() },
            Err(e) => SpecEvent::Failed {
                project_path: project_path.to_string(),
                error: format!("{:#}", e),
            },
        };
        if self.events.try_send(event).is_err() {
            log::warn!("Spec event receiver is gone");
        }
        Ok(())
    }
}

/// Opens links with the platform browser launcher.
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        process::open_url(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_str(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn bootstrap_reports_created_entries_once() {
        let dir = tempfile::tempdir().unwrap();
        let root = path_str(dir.path());

        assert!(!LocalBootstrap.has_automaker_dir(&root).unwrap());
        let first = LocalBootstrap.initialize_project_structure(&root).unwrap();
        assert!(first.is_new_project);
        assert_eq!(
            first.created_files,
            vec![".automaker", ".automaker/features", ".automaker/context"]
        );

        let second = LocalBootstrap.initialize_project_structure(&root).unwrap();
        assert!(!second.is_new_project);
        assert!(second.created_files.is_empty());
        assert!(LocalBootstrap.has_automaker_dir(&root).unwrap());
        assert!(!LocalBootstrap.has_app_spec(&root).unwrap());
    }

    #[test]
    fn bootstrap_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = path_str(&dir.path().join("nope"));
        assert!(LocalBootstrap.initialize_project_structure(&missing).is_err());
    }

    #[test]
    fn fs_writes_into_new_directories() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("proj");
        let fs = LocalFs::new();
        fs.create_directory(&path_str(&project)).unwrap();
        fs.write_file(&path_str(&project.join(".automaker/app_spec.txt")), "x").unwrap();
        assert_eq!(std::fs::read_to_string(project.join(".automaker/app_spec.txt")).unwrap(), "x");
    }

    #[test]
    fn trashing_a_missing_path_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFs::new();
        fs.trash_path(&path_str(&dir.path().join("gone"))).unwrap();
    }

    #[test]
    fn picker_serves_queued_paths_then_cancels() {
        let fs = LocalFs::new();
        fs.queue_picker_result("/work/app");
        assert_eq!(fs.open_directory_picker().unwrap(), Some(vec!["/work/app".to_string()]));
        assert_eq!(fs.open_directory_picker().unwrap(), None);
    }

    #[test]
    fn spec_generator_writes_document_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("shop");
        std::fs::create_dir_all(root.join(".automaker")).unwrap();
        let root = path_str(&root);

        let (tx, rx) = async_channel::unbounded();
        let generator = LocalSpecGenerator::new(tx);
        let options = SpecOptions { generate_features: false, analyze_project: true, max_features: None };
        generator.start_generation(&root, "An online shop\nwith a cart", options).unwrap();

        assert_eq!(rx.try_recv().unwrap(), SpecEvent::Completed { project_path: root.clone() });
        let doc = std::fs::read_to_string(app_spec::app_spec_path(&root)).unwrap();
        assert_eq!(app_spec::extract_tag(&doc, "project_name"), Some("shop"));
        assert!(doc.contains("    An online shop\n    with a cart\n"));
    }

    #[test]
    fn generation_keeps_template_sections() {
        let dir = tempfile::tempdir().unwrap();
        let root = path_str(&dir.path().join("shop-dir"));
        let fs = LocalFs::new();
        fs.create_directory(&root).unwrap();
        LocalBootstrap.initialize_project_structure(&root).unwrap();
        let template = AppSpec::from_template(
            "My Shop",
            "Next Starter",
            "A storefront.",
            &["Next.js".to_string()],
            &["Cart".to_string()],
        );
        fs.write_file(&app_spec::app_spec_path(&root), &template.render()).unwrap();

        let (tx, rx) = async_channel::unbounded();
        let options = SpecOptions { generate_features: true, analyze_project: true, max_features: Some(50) };
        LocalSpecGenerator::new(tx).start_generation(&root, "  Books and more  ", options).unwrap();
        assert!(matches!(rx.try_recv().unwrap(), SpecEvent::Completed { .. }));

        let doc = std::fs::read_to_string(app_spec::app_spec_path(&root)).unwrap();
        assert_eq!(app_spec::extract_tag(&doc, "project_name"), Some("My Shop"));
        assert_eq!(app_spec::extract_tag(&doc, "technology_stack"), Some("<technology>Next.js</technology>"));
        assert_eq!(app_spec::extract_tag(&doc, "core_capabilities"), Some("<capability>Cart</capability>"));
        assert_eq!(app_spec::extract_tag(&doc, "overview"), Some("Books and more"));
    }
}
