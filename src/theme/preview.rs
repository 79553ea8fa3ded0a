use super::GlobalTheme;
use automaker_core::theme::ThemeMode;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Debounced hover preview for the theme menu.
///
/// Every hover or leave bumps a token; a pending preview only applies if its
/// token is still the latest when the delay elapses.
#[derive(Clone)]
pub struct ThemePreview {
    theme: GlobalTheme,
    hover_token: Arc<AtomicU64>,
    delay: Duration,
}

impl ThemePreview {
    pub fn new(theme: GlobalTheme, delay: Duration) -> Self {
        Self {
            theme,
            hover_token: Arc::new(AtomicU64::new(0)),
            delay,
        }
    }

    /// Pointer entered a theme entry. Resolves to `true` if the preview was applied.
    pub async fn enter(&self, mode: ThemeMode) -> bool {
        let token = self.hover_token.fetch_add(1, Ordering::SeqCst) + 1;
        smol::Timer::after(self.delay).await;

        if self.hover_token.load(Ordering::SeqCst) != token {
            return false;
        }
        self.theme.0.lock().set_preview(mode);
        true
    }

    /// Pointer left the menu: cancel anything pending and drop the preview now.
    pub fn leave(&self) {
        self.hover_token.fetch_add(1, Ordering::SeqCst);
        self.theme.0.lock().clear_preview();
    }
}
