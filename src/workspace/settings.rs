use automaker_core::theme::ThemeMode;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Viewport width below which an open sidebar collapses on its own.
pub const AUTO_COLLAPSE_BREAKPOINT: f32 = 1024.0;

/// Default delay before a hovered theme is previewed.
pub const DEFAULT_THEME_PREVIEW_DELAY_MS: u64 = 16;

/// Sidebar settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SidebarSettings {
    /// Whether the sidebar is open
    #[serde(default = "default_true")]
    pub is_open: bool,
    /// Collapse automatically on narrow viewports
    #[serde(default = "default_true")]
    pub auto_collapse: bool,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            is_open: true,
            auto_collapse: true,
        }
    }
}

/// Sidebar entries that can be hidden per installation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default)]
    pub hide_terminal: bool,
    #[serde(default)]
    pub hide_wiki: bool,
    #[serde(default)]
    pub hide_running_agents: bool,
    #[serde(default)]
    pub hide_context: bool,
    #[serde(default)]
    pub hide_spec_editor: bool,
    #[serde(default)]
    pub hide_ai_profiles: bool,
}

impl FeatureFlags {
    /// Apply `AUTOMAKER_HIDE_*` overrides from the environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let flags: [(&str, &mut bool); 6] = [
            ("AUTOMAKER_HIDE_TERMINAL", &mut self.hide_terminal),
            ("AUTOMAKER_HIDE_WIKI", &mut self.hide_wiki),
            ("AUTOMAKER_HIDE_RUNNING_AGENTS", &mut self.hide_running_agents),
            ("AUTOMAKER_HIDE_CONTEXT", &mut self.hide_context),
            ("AUTOMAKER_HIDE_SPEC_EDITOR", &mut self.hide_spec_editor),
            ("AUTOMAKER_HIDE_AI_PROFILES", &mut self.hide_ai_profiles),
        ];
        for (name, flag) in flags {
            if let Some(value) = lookup(name) {
                *flag = matches!(value.trim(), "1" | "true" | "TRUE" | "True");
            }
        }
    }
}

/// Current settings schema version - increment when making breaking changes
pub const SETTINGS_VERSION: u32 = 1;

/// App settings (persisted separately from workspace)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppSettings {
    /// Settings schema version for migration support
    #[serde(default = "default_settings_version")]
    pub version: u32,
    /// Global theme, used when the current project has no override
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub sidebar: SidebarSettings,
    #[serde(default)]
    pub features: FeatureFlags,
    /// Hover delay before a theme preview is applied
    #[serde(default = "default_theme_preview_delay_ms")]
    pub theme_preview_delay_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            theme_mode: ThemeMode::default(),
            sidebar: SidebarSettings::default(),
            features: FeatureFlags::default(),
            theme_preview_delay_ms: default_theme_preview_delay_ms(),
        }
    }
}

fn default_settings_version() -> u32 {
    // Return 0 for settings files without version field (pre-versioning)
    0
}

fn default_true() -> bool {
    true
}

fn default_theme_preview_delay_ms() -> u64 {
    DEFAULT_THEME_PREVIEW_DELAY_MS
}

/// Get the settings file path
pub fn get_settings_path() -> std::path::PathBuf {
    super::persistence::get_config_dir().join("settings.json")
}

/// Load app settings from disk with robust error handling and migration support
pub fn load_settings() -> AppSettings {
    let mut settings = load_settings_from(&get_settings_path());
    settings.features.apply_env_overrides();
    settings
}

pub(crate) fn load_settings_from(path: &std::path::Path) -> AppSettings {
    if !path.exists() {
        log::info!("Settings file not found at {}, using defaults", path.display());
        return AppSettings::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::error!("Failed to read settings file {}: {}", path.display(), e);
            return AppSettings::default();
        }
    };

    // Fast path for valid settings
    match serde_json::from_str::<AppSettings>(&content) {
        Ok(settings) => return migrate_settings(settings),
        Err(e) => {
            log::warn!("Failed to parse settings directly: {}, attempting partial recovery", e);
        }
    }

    match recover_settings_from_json(&content) {
        Ok(settings) => {
            log::info!("Recovered settings with partial data");
            migrate_settings(settings)
        }
        Err(e) => {
            log::error!("Failed to recover settings from {}: {}", path.display(), e);
            AppSettings::default()
        }
    }
}

/// Extract the valid fields of a malformed settings file, defaulting the rest.
fn recover_settings_from_json(content: &str) -> Result<AppSettings> {
    use anyhow::Context;

    let value: serde_json::Value = serde_json::from_str(content)
        .context("Settings file is not valid JSON")?;
    let obj = value.as_object()
        .context("Settings file root is not a JSON object")?;

    let mut settings = AppSettings::default();

    if let Some(v) = obj.get("version").and_then(|v| v.as_u64()) {
        settings.version = v as u32;
    }

    if let Some(v) = obj.get("theme_mode") {
        match serde_json::from_value::<ThemeMode>(v.clone()) {
            Ok(theme) => settings.theme_mode = theme,
            Err(_) => log::warn!("Could not parse theme_mode, using default"),
        }
    }

    if let Some(v) = obj.get("sidebar") {
        match serde_json::from_value::<SidebarSettings>(v.clone()) {
            Ok(sidebar) => settings.sidebar = sidebar,
            Err(_) => log::warn!("Could not parse sidebar settings, using default"),
        }
    }

    if let Some(v) = obj.get("features") {
        if let Ok(features) = serde_json::from_value::<FeatureFlags>(v.clone()) {
            settings.features = features;
        }
    }

    if let Some(v) = obj.get("theme_preview_delay_ms").and_then(|v| v.as_u64()) {
        settings.theme_preview_delay_ms = v.min(1000);
    }

    Ok(settings)
}

/// Migrate settings from older versions to the current version
fn migrate_settings(mut settings: AppSettings) -> AppSettings {
    if settings.version == 0 {
        log::info!("Migrating settings from pre-versioning (v0) to v1");
        settings.version = 1;
    }
    settings
}

/// Save app settings to `path` (normally [`get_settings_path`])
pub(crate) fn save_settings_to(path: &std::path::Path, settings: &AppSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json"));
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert!(settings.sidebar.is_open);
        assert_eq!(settings.theme_preview_delay_ms, DEFAULT_THEME_PREVIEW_DELAY_MS);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut settings = AppSettings::default();
        settings.theme_mode = ThemeMode::NordLight;
        settings.features.hide_wiki = true;
        save_settings_to(&path, &settings).unwrap();

        let loaded = load_settings_from(&path);
        assert_eq!(loaded.theme_mode, ThemeMode::NordLight);
        assert!(loaded.features.hide_wiki);
    }

    #[test]
    fn partial_recovery_keeps_valid_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"version": 1, "theme_mode": "dracula", "sidebar": 42}"#).unwrap();

        let loaded = load_settings_from(&path);
        assert_eq!(loaded.theme_mode, ThemeMode::Dracula);
        assert!(loaded.sidebar.is_open);
    }

    #[test]
    fn unversioned_settings_are_migrated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"theme_mode": "light"}"#).unwrap();
        assert_eq!(load_settings_from(&path).version, 1);
    }

    #[test]
    fn env_overrides_feature_flags() {
        let env: HashMap<&str, &str> = [
            ("AUTOMAKER_HIDE_WIKI", "true"),
            ("AUTOMAKER_HIDE_TERMINAL", "1"),
            ("AUTOMAKER_HIDE_CONTEXT", "no"),
        ]
        .into_iter()
        .collect();
        let mut flags = FeatureFlags { hide_context: true, ..Default::default() };
        flags.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert!(flags.hide_wiki);
        assert!(flags.hide_terminal);
        assert!(!flags.hide_context);
        assert!(!flags.hide_running_agents);
    }
}
