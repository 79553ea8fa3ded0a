use serde::{Deserialize, Serialize};

/// Host light/dark preference signal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

/// Application theme identifier.
///
/// Closed set; `System` follows the host appearance and is resolved at lookup time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    System,
    #[default]
    Dark,
    Retro,
    Dracula,
    Nord,
    Monokai,
    TokyoNight,
    Solarized,
    Gruvbox,
    Catppuccin,
    OneDark,
    Synthwave,
    Red,
    Sunset,
    Gray,
    Forest,
    Ocean,
    Light,
    Cream,
    SolarizedLight,
    GitHub,
    Paper,
    Rose,
    Mint,
    Lavender,
    Sand,
    Sky,
    Peach,
    Snow,
    Sepia,
    GruvboxLight,
    NordLight,
    Blossom,
}

const DARK_THEMES: &[ThemeMode] = &[
    ThemeMode::Dark,
    ThemeMode::Retro,
    ThemeMode::Dracula,
    ThemeMode::Nord,
    ThemeMode::Monokai,
    ThemeMode::TokyoNight,
    ThemeMode::Solarized,
    ThemeMode::Gruvbox,
    ThemeMode::Catppuccin,
    ThemeMode::OneDark,
    ThemeMode::Synthwave,
    ThemeMode::Red,
    ThemeMode::Sunset,
    ThemeMode::Gray,
    ThemeMode::Forest,
    ThemeMode::Ocean,
];

const LIGHT_THEMES: &[ThemeMode] = &[
    ThemeMode::Light,
    ThemeMode::Cream,
    ThemeMode::SolarizedLight,
    ThemeMode::GitHub,
    ThemeMode::Paper,
    ThemeMode::Rose,
    ThemeMode::Mint,
    ThemeMode::Lavender,
    ThemeMode::Sand,
    ThemeMode::Sky,
    ThemeMode::Peach,
    ThemeMode::Snow,
    ThemeMode::Sepia,
    ThemeMode::GruvboxLight,
    ThemeMode::NordLight,
    ThemeMode::Blossom,
];

impl ThemeMode {
    /// Themes shown in the "Dark" column of the theme menu
    pub fn dark_themes() -> &'static [ThemeMode] {
        DARK_THEMES
    }

    /// Themes shown in the "Light" column of the theme menu
    pub fn light_themes() -> &'static [ThemeMode] {
        LIGHT_THEMES
    }

    /// Every identifier, `System` first.
    pub fn all() -> impl Iterator<Item = ThemeMode> {
        std::iter::once(ThemeMode::System)
            .chain(DARK_THEMES.iter().copied())
            .chain(LIGHT_THEMES.iter().copied())
    }

    /// Stable identifier, identical to the serialized form.
    pub fn id(self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Dark => "dark",
            ThemeMode::Retro => "retro",
            ThemeMode::Dracula => "dracula",
            ThemeMode::Nord => "nord",
            ThemeMode::Monokai => "monokai",
            ThemeMode::TokyoNight => "tokyonight",
            ThemeMode::Solarized => "solarized",
            ThemeMode::Gruvbox => "gruvbox",
            ThemeMode::Catppuccin => "catppuccin",
            ThemeMode::OneDark => "onedark",
            ThemeMode::Synthwave => "synthwave",
            ThemeMode::Red => "red",
            ThemeMode::Sunset => "sunset",
            ThemeMode::Gray => "gray",
            ThemeMode::Forest => "forest",
            ThemeMode::Ocean => "ocean",
            ThemeMode::Light => "light",
            ThemeMode::Cream => "cream",
            ThemeMode::SolarizedLight => "solarizedlight",
            ThemeMode::GitHub => "github",
            ThemeMode::Paper => "paper",
            ThemeMode::Rose => "rose",
            ThemeMode::Mint => "mint",
            ThemeMode::Lavender => "lavender",
            ThemeMode::Sand => "sand",
            ThemeMode::Sky => "sky",
            ThemeMode::Peach => "peach",
            ThemeMode::Snow => "snow",
            ThemeMode::Sepia => "sepia",
            ThemeMode::GruvboxLight => "gruvboxlight",
            ThemeMode::NordLight => "nordlight",
            ThemeMode::Blossom => "blossom",
        }
    }

    /// Parse an identifier. Unknown names yield `None`.
    pub fn from_id(id: &str) -> Option<ThemeMode> {
        Self::all().find(|mode| mode.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Dark => "Dark",
            ThemeMode::Retro => "Retro",
            ThemeMode::Dracula => "Dracula",
            ThemeMode::Nord => "Nord",
            ThemeMode::Monokai => "Monokai",
            ThemeMode::TokyoNight => "Tokyo Night",
            ThemeMode::Solarized => "Solarized Dark",
            ThemeMode::Gruvbox => "Gruvbox",
            ThemeMode::Catppuccin => "Catppuccin",
            ThemeMode::OneDark => "One Dark",
            ThemeMode::Synthwave => "Synthwave",
            ThemeMode::Red => "Red",
            ThemeMode::Sunset => "Sunset",
            ThemeMode::Gray => "Gray",
            ThemeMode::Forest => "Forest",
            ThemeMode::Ocean => "Ocean",
            ThemeMode::Light => "Light",
            ThemeMode::Cream => "Cream",
            ThemeMode::SolarizedLight => "Solarized Light",
            ThemeMode::GitHub => "GitHub",
            ThemeMode::Paper => "Paper",
            ThemeMode::Rose => "Rose",
            ThemeMode::Mint => "Mint",
            ThemeMode::Lavender => "Lavender",
            ThemeMode::Sand => "Sand",
            ThemeMode::Sky => "Sky",
            ThemeMode::Peach => "Peach",
            ThemeMode::Snow => "Snow",
            ThemeMode::Sepia => "Sepia",
            ThemeMode::GruvboxLight => "Gruvbox Light",
            ThemeMode::NordLight => "Nord Light",
            ThemeMode::Blossom => "Blossom",
        }
    }

    /// Presentation family. `None` for `System`, whose family depends on the host.
    pub fn family(self) -> Option<Appearance> {
        if self == ThemeMode::System {
            None
        } else if DARK_THEMES.contains(&self) {
            Some(Appearance::Dark)
        } else {
            Some(Appearance::Light)
        }
    }

    pub fn info(self) -> ThemeInfo {
        ThemeInfo {
            id: self.id().to_string(),
            name: self.display_name().to_string(),
            is_dark: self.family() != Some(Appearance::Light),
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Theme metadata for menus
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeInfo {
    pub id: String,
    pub name: String,
    pub is_dark: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_partition_every_concrete_theme() {
        assert_eq!(ThemeMode::dark_themes().len(), 16);
        assert_eq!(ThemeMode::light_themes().len(), 16);
        assert_eq!(ThemeMode::all().count(), 33);
        for mode in ThemeMode::all().filter(|m| *m != ThemeMode::System) {
            let in_dark = ThemeMode::dark_themes().contains(&mode);
            let in_light = ThemeMode::light_themes().contains(&mode);
            assert!(in_dark ^ in_light, "{} must be in exactly one family", mode);
        }
        assert_eq!(ThemeMode::System.family(), None);
    }

    #[test]
    fn id_matches_serialized_form() {
        for mode in ThemeMode::all() {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.id()));
            assert_eq!(ThemeMode::from_id(mode.id()), Some(mode));
        }
    }

    #[test]
    fn from_id_rejects_unknown_names() {
        assert_eq!(ThemeMode::from_id("neon"), None);
        assert_eq!(ThemeMode::from_id("Dark"), None);
        assert_eq!(ThemeMode::from_id(""), None);
    }
}
