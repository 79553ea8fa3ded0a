//! Theme module
//!
//! Application-level theme state: the global mode, the host appearance signal
//! and a transient hover preview. Palettes and the resolver live in `automaker_core`.

mod preview;

pub use preview::ThemePreview;

use automaker_core::theme::{Appearance, TerminalPalette, ThemeMode, resolve};
use parking_lot::Mutex;
use std::sync::Arc;

/// Global theme state
pub struct AppTheme {
    pub mode: ThemeMode,
    pub palette: TerminalPalette,
    appearance: Option<Appearance>,
    /// Theme being previewed from a hover (temporarily overrides `palette`)
    preview: Option<ThemeMode>,
}

impl AppTheme {
    pub fn new(mode: ThemeMode, appearance: Option<Appearance>) -> Self {
        Self {
            mode,
            palette: resolve(mode, appearance),
            appearance,
            preview: None,
        }
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        if self.mode != mode {
            log::info!("Theme changed to {}", mode.id());
        }
        self.mode = mode;
        self.update_palette();
    }

    pub fn set_appearance(&mut self, appearance: Option<Appearance>) {
        self.appearance = appearance;
        if self.mode == ThemeMode::System {
            self.update_palette();
        }
    }

    pub fn appearance(&self) -> Option<Appearance> {
        self.appearance
    }

    /// Preview `mode` until `clear_preview` is called
    pub fn set_preview(&mut self, mode: ThemeMode) {
        self.preview = Some(mode);
    }

    /// Clear preview and restore actual theme
    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    pub fn preview(&self) -> Option<ThemeMode> {
        self.preview
    }

    /// Palette to draw with: the preview if one is active, otherwise the resolved mode
    pub fn display_palette(&self) -> TerminalPalette {
        match self.preview {
            Some(mode) => resolve(mode, self.appearance),
            None => self.palette,
        }
    }

    fn update_palette(&mut self) {
        self.palette = resolve(self.mode, self.appearance);
    }
}

/// Shared handle to the application theme
#[derive(Clone)]
pub struct GlobalTheme(pub Arc<Mutex<AppTheme>>);

impl GlobalTheme {
    pub fn new(theme: AppTheme) -> Self {
        Self(Arc::new(Mutex::new(theme)))
    }

    pub fn display_palette(&self) -> TerminalPalette {
        self.0.lock().display_palette()
    }

    pub fn mode(&self) -> ThemeMode {
        self.0.lock().mode
    }
}

/// Host appearance from `AUTOMAKER_APPEARANCE` (`dark` or `light`). Unset or unknown yields `None`.
pub fn appearance_from_env() -> Option<Appearance> {
    parse_appearance(std::env::var("AUTOMAKER_APPEARANCE").ok()?.as_str())
}

fn parse_appearance(value: &str) -> Option<Appearance> {
    match value.trim().to_ascii_lowercase().as_str() {
        "dark" => Some(Appearance::Dark),
        "light" => Some(Appearance::Light),
        other => {
            log::warn!("Ignoring unknown appearance '{}'", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use automaker_core::theme::{DARK_PALETTE, DRACULA_PALETTE, LIGHT_PALETTE};

    #[test]
    fn system_mode_follows_appearance() {
        let mut theme = AppTheme::new(ThemeMode::System, None);
        assert_eq!(theme.palette, DARK_PALETTE);
        theme.set_appearance(Some(Appearance::Light));
        assert_eq!(theme.palette, LIGHT_PALETTE);
    }

    #[test]
    fn concrete_mode_ignores_appearance() {
        let mut theme = AppTheme::new(ThemeMode::Dracula, Some(Appearance::Dark));
        theme.set_appearance(Some(Appearance::Light));
        assert_eq!(theme.palette, DRACULA_PALETTE);
    }

    #[test]
    fn preview_overrides_display_until_cleared() {
        let mut theme = AppTheme::new(ThemeMode::Light, None);
        theme.set_preview(ThemeMode::Dracula);
        assert_eq!(theme.display_palette(), DRACULA_PALETTE);
        assert_eq!(theme.palette, LIGHT_PALETTE);
        theme.clear_preview();
        assert_eq!(theme.display_palette(), LIGHT_PALETTE);
    }

    #[test]
    fn appearance_parsing() {
        assert_eq!(parse_appearance("Dark"), Some(Appearance::Dark));
        assert_eq!(parse_appearance(" light "), Some(Appearance::Light));
        assert_eq!(parse_appearance("sepia"), None);
    }
}
