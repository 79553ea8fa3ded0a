//! Workspace actions module
//!
//! All workspace mutation methods, organized by domain:
//! - `project`: current project, upsert, rename, theme, reorder
//! - `trash`: move to trash, restore, purge bookkeeping
//! - `history`: previous/next cycling over visited projects
//! - `execute`: the serializable intent layer over all of the above

pub mod execute;
mod history;
mod project;
mod trash;

pub use self::trash::RestoreOutcome;
