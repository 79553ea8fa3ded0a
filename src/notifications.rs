use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Default time-to-live for toast notifications
const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Maximum number of visible toasts
const MAX_VISIBLE_TOASTS: usize = 5;

// ─── ToastLevel ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastLevel {
    fn icon_char(self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
            ToastLevel::Warning => "⚠",
            ToastLevel::Info => "ℹ",
        }
    }
}

// ─── Toast ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
    pub description: Option<String>,
    pub created: Instant,
    pub ttl: Duration,
}

impl Toast {
    fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            level,
            message: message.into(),
            description: None,
            created: Instant::now(),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= self.ttl
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level.icon_char(), self.message)?;
        if let Some(description) = &self.description {
            write!(f, ": {}", description)?;
        }
        Ok(())
    }
}

// ─── ToastManager ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct ToastManager(pub Arc<Mutex<Vec<Toast>>>);

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a toast, pruning expired ones and capping the queue at MAX_VISIBLE_TOASTS (oldest dropped).
    pub fn post(&self, toast: Toast) {
        log::debug!("Toast: {}", toast);
        let mut queue = self.0.lock();
        queue.retain(|t| !t.is_expired());
        queue.push(toast);
        while queue.len() > MAX_VISIBLE_TOASTS {
            queue.remove(0);
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.post(Toast::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.post(Toast::error(message));
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.post(Toast::warning(message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.post(Toast::info(message));
    }

    /// Remove and return every queued toast.
    pub fn take_all(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.0.lock())
    }
}
