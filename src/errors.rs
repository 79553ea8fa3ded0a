use crate::notifications::{Toast, ToastManager};
use thiserror::Error;

/// Failure of a user-triggered sidebar command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Input rejected before any collaborator was called
    #[error("{0}")]
    Validation(String),

    /// A collaborator failed; `title` is what the user sees first
    #[error("{title}: {description}")]
    External { title: String, description: String },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl CommandError {
    pub fn external(title: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::External {
            title: title.into(),
            description: error.to_string(),
        }
    }

    fn into_toast(self) -> Toast {
        match self {
            CommandError::Validation(message) => Toast::error(message),
            CommandError::External { title, description } => {
                Toast::error(title).with_description(description)
            }
            CommandError::Unexpected(e) => Toast::error("Unexpected error").with_description(format!("{:#}", e)),
        }
    }
}

/// Attach a user-facing title to a collaborator failure.
pub trait ExternalContext<T> {
    fn external(self, title: &str) -> Result<T, CommandError>;
}

impl<T> ExternalContext<T> for anyhow::Result<T> {
    fn external(self, title: &str) -> Result<T, CommandError> {
        self.map_err(|e| CommandError::External {
            title: title.to_string(),
            description: format!("{:#}", e),
        })
    }
}

/// Failure of a permanent deletion from the trash.
#[derive(Debug, Error)]
pub enum TrashError {
    #[error("Project {0} is not in the trash")]
    NotInTrash(String),

    #[error("Deletion of {0} is already in progress")]
    AlreadyInProgress(String),

    #[error("Failed to delete {path}: {source}")]
    DeleteFailed {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<TrashError> for CommandError {
    fn from(error: TrashError) -> Self {
        match error {
            TrashError::AlreadyInProgress(_) => CommandError::Validation(error.to_string()),
            TrashError::NotInTrash(_) => CommandError::Validation(error.to_string()),
            TrashError::DeleteFailed { path, source } => CommandError::External {
                title: "Failed to delete project".to_string(),
                description: format!("{}: {:#}", path, source),
            },
        }
    }
}

/// Text of a caught panic payload.
pub fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    }
}

/// Command boundary: log a failure and turn it into an error toast.
/// Returns the success value, if any.
pub fn report<T>(toasts: &ToastManager, command: &str, result: Result<T, CommandError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            log::error!("{} failed: {}", command, error);
            toasts.post(error.into_toast());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::ToastLevel;

    #[test]
    fn report_turns_errors_into_toasts() {
        let toasts = ToastManager::new();
        let result: Result<(), CommandError> =
            Err(anyhow::anyhow!("permission denied")).external("Failed to create project");
        assert!(report(&toasts, "create_blank_project", result).is_none());

        let posted = toasts.take_all();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].level, ToastLevel::Error);
        assert_eq!(posted[0].message, "Failed to create project");
        assert_eq!(posted[0].description.as_deref(), Some("permission denied"));
    }

    #[test]
    fn report_passes_success_through() {
        let toasts = ToastManager::new();
        assert_eq!(report(&toasts, "noop", Ok::<_, CommandError>(3)), Some(3));
        assert!(toasts.take_all().is_empty());
    }

    #[test]
    fn unexpected_errors_get_a_generic_title() {
        let toasts = ToastManager::new();
        let payload: Box<dyn std::any::Any + Send> = Box::new("index out of bounds");
        let error = CommandError::Unexpected(anyhow::anyhow!(panic_message(&*payload)));
        report(&toasts, "navigate", Err::<(), _>(error));

        let posted = toasts.take_all();
        assert_eq!(posted[0].message, "Unexpected error");
        assert_eq!(posted[0].description.as_deref(), Some("index out of bounds"));
    }

    #[test]
    fn trash_errors_map_to_command_errors() {
        let error: CommandError = TrashError::AlreadyInProgress("p1".into()).into();
        assert!(matches!(error, CommandError::Validation(_)));

        let error: CommandError = TrashError::DeleteFailed {
            path: "/tmp/x".into(),
            source: anyhow::anyhow!("busy"),
        }
        .into();
        assert_eq!(error.to_string(), "Failed to delete project: /tmp/x: busy");
    }
}
