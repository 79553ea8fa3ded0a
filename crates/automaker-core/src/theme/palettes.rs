use super::types::{Appearance, ThemeMode};

/// Terminal palette for one theme, colors as `0xRRGGBB`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalPalette {
    pub background: u32,
    pub foreground: u32,
    pub cursor: u32,
    pub cursor_accent: u32,
    pub selection_background: u32,
    pub selection_foreground: Option<u32>,

    // ANSI colors
    pub black: u32,
    pub red: u32,
    pub green: u32,
    pub yellow: u32,
    pub blue: u32,
    pub magenta: u32,
    pub cyan: u32,
    pub white: u32,
    pub bright_black: u32,
    pub bright_red: u32,
    pub bright_green: u32,
    pub bright_yellow: u32,
    pub bright_blue: u32,
    pub bright_magenta: u32,
    pub bright_cyan: u32,
    pub bright_white: u32,
}

impl TerminalPalette {
    /// Format a color as `#rrggbb`
    pub fn to_hex(color: u32) -> String {
        format!("#{:06x}", color & 0xFFFFFF)
    }

    /// The 16 ANSI colors in index order (0-7 base, 8-15 bright).
    pub fn ansi(&self) -> [u32; 16] {
        [
            self.black,
            self.red,
            self.green,
            self.yellow,
            self.blue,
            self.magenta,
            self.cyan,
            self.white,
            self.bright_black,
            self.bright_red,
            self.bright_green,
            self.bright_yellow,
            self.bright_blue,
            self.bright_magenta,
            self.bright_cyan,
            self.bright_white,
        ]
    }
}

/// Dark, also the fallback for unknown identifiers
pub const DARK_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x0a0a0a,
    foreground: 0xd4d4d4,
    cursor: 0xd4d4d4,
    cursor_accent: 0x0a0a0a,
    selection_background: 0x264f78,
    selection_foreground: None,
    black: 0x1e1e1e,
    red: 0xf44747,
    green: 0x6a9955,
    yellow: 0xdcdcaa,
    blue: 0x569cd6,
    magenta: 0xc586c0,
    cyan: 0x4ec9b0,
    white: 0xd4d4d4,
    bright_black: 0x808080,
    bright_red: 0xf44747,
    bright_green: 0x6a9955,
    bright_yellow: 0xdcdcaa,
    bright_blue: 0x569cd6,
    bright_magenta: 0xc586c0,
    bright_cyan: 0x4ec9b0,
    bright_white: 0xffffff,
};

/// Light
pub const LIGHT_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xffffff,
    foreground: 0x383a42,
    cursor: 0x383a42,
    cursor_accent: 0xffffff,
    selection_background: 0xadd6ff,
    selection_foreground: None,
    black: 0x383a42,
    red: 0xe45649,
    green: 0x50a14f,
    yellow: 0xc18401,
    blue: 0x4078f2,
    magenta: 0xa626a4,
    cyan: 0x0184bc,
    white: 0xfafafa,
    bright_black: 0x4f525e,
    bright_red: 0xe06c75,
    bright_green: 0x98c379,
    bright_yellow: 0xe5c07b,
    bright_blue: 0x61afef,
    bright_magenta: 0xc678dd,
    bright_cyan: 0x56b6c2,
    bright_white: 0xffffff,
};

/// Retro / Cyberpunk
pub const RETRO_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x000000,
    foreground: 0x39ff14,
    cursor: 0x39ff14,
    cursor_accent: 0x000000,
    selection_background: 0x39ff14,
    selection_foreground: Some(0x000000),
    black: 0x000000,
    red: 0xff0055,
    green: 0x39ff14,
    yellow: 0xffff00,
    blue: 0x00ffff,
    magenta: 0xff00ff,
    cyan: 0x00ffff,
    white: 0x39ff14,
    bright_black: 0x555555,
    bright_red: 0xff5555,
    bright_green: 0x55ff55,
    bright_yellow: 0xffff55,
    bright_blue: 0x55ffff,
    bright_magenta: 0xff55ff,
    bright_cyan: 0x55ffff,
    bright_white: 0xffffff,
};

/// Dracula
pub const DRACULA_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x282a36,
    foreground: 0xf8f8f2,
    cursor: 0xf8f8f2,
    cursor_accent: 0x282a36,
    selection_background: 0x44475a,
    selection_foreground: None,
    black: 0x21222c,
    red: 0xff5555,
    green: 0x50fa7b,
    yellow: 0xf1fa8c,
    blue: 0xbd93f9,
    magenta: 0xff79c6,
    cyan: 0x8be9fd,
    white: 0xf8f8f2,
    bright_black: 0x6272a4,
    bright_red: 0xff6e6e,
    bright_green: 0x69ff94,
    bright_yellow: 0xffffa5,
    bright_blue: 0xd6acff,
    bright_magenta: 0xff92df,
    bright_cyan: 0xa4ffff,
    bright_white: 0xffffff,
};

/// Nord
pub const NORD_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x2e3440,
    foreground: 0xd8dee9,
    cursor: 0xd8dee9,
    cursor_accent: 0x2e3440,
    selection_background: 0x434c5e,
    selection_foreground: None,
    black: 0x3b4252,
    red: 0xbf616a,
    green: 0xa3be8c,
    yellow: 0xebcb8b,
    blue: 0x81a1c1,
    magenta: 0xb48ead,
    cyan: 0x88c0d0,
    white: 0xe5e9f0,
    bright_black: 0x4c566a,
    bright_red: 0xbf616a,
    bright_green: 0xa3be8c,
    bright_yellow: 0xebcb8b,
    bright_blue: 0x81a1c1,
    bright_magenta: 0xb48ead,
    bright_cyan: 0x8fbcbb,
    bright_white: 0xeceff4,
};

/// Monokai
pub const MONOKAI_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x272822,
    foreground: 0xf8f8f2,
    cursor: 0xf8f8f2,
    cursor_accent: 0x272822,
    selection_background: 0x49483e,
    selection_foreground: None,
    black: 0x272822,
    red: 0xf92672,
    green: 0xa6e22e,
    yellow: 0xf4bf75,
    blue: 0x66d9ef,
    magenta: 0xae81ff,
    cyan: 0xa1efe4,
    white: 0xf8f8f2,
    bright_black: 0x75715e,
    bright_red: 0xf92672,
    bright_green: 0xa6e22e,
    bright_yellow: 0xf4bf75,
    bright_blue: 0x66d9ef,
    bright_magenta: 0xae81ff,
    bright_cyan: 0xa1efe4,
    bright_white: 0xf9f8f5,
};

/// Tokyo Night
pub const TOKYONIGHT_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x1a1b26,
    foreground: 0xa9b1d6,
    cursor: 0xc0caf5,
    cursor_accent: 0x1a1b26,
    selection_background: 0x33467c,
    selection_foreground: None,
    black: 0x15161e,
    red: 0xf7768e,
    green: 0x9ece6a,
    yellow: 0xe0af68,
    blue: 0x7aa2f7,
    magenta: 0xbb9af7,
    cyan: 0x7dcfff,
    white: 0xa9b1d6,
    bright_black: 0x414868,
    bright_red: 0xf7768e,
    bright_green: 0x9ece6a,
    bright_yellow: 0xe0af68,
    bright_blue: 0x7aa2f7,
    bright_magenta: 0xbb9af7,
    bright_cyan: 0x7dcfff,
    bright_white: 0xc0caf5,
};

/// Solarized Dark
pub const SOLARIZED_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x002b36,
    foreground: 0x839496,
    cursor: 0x839496,
    cursor_accent: 0x002b36,
    selection_background: 0x073642,
    selection_foreground: None,
    black: 0x073642,
    red: 0xdc322f,
    green: 0x859900,
    yellow: 0xb58900,
    blue: 0x268bd2,
    magenta: 0xd33682,
    cyan: 0x2aa198,
    white: 0xeee8d5,
    bright_black: 0x002b36,
    bright_red: 0xcb4b16,
    bright_green: 0x586e75,
    bright_yellow: 0x657b83,
    bright_blue: 0x839496,
    bright_magenta: 0x6c71c4,
    bright_cyan: 0x93a1a1,
    bright_white: 0xfdf6e3,
};

/// Gruvbox Dark
pub const GRUVBOX_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x282828,
    foreground: 0xebdbb2,
    cursor: 0xebdbb2,
    cursor_accent: 0x282828,
    selection_background: 0x504945,
    selection_foreground: None,
    black: 0x282828,
    red: 0xcc241d,
    green: 0x98971a,
    yellow: 0xd79921,
    blue: 0x458588,
    magenta: 0xb16286,
    cyan: 0x689d6a,
    white: 0xa89984,
    bright_black: 0x928374,
    bright_red: 0xfb4934,
    bright_green: 0xb8bb26,
    bright_yellow: 0xfabd2f,
    bright_blue: 0x83a598,
    bright_magenta: 0xd3869b,
    bright_cyan: 0x8ec07c,
    bright_white: 0xebdbb2,
};

/// Catppuccin Mocha
pub const CATPPUCCIN_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x1e1e2e,
    foreground: 0xcdd6f4,
    cursor: 0xf5e0dc,
    cursor_accent: 0x1e1e2e,
    selection_background: 0x45475a,
    selection_foreground: None,
    black: 0x45475a,
    red: 0xf38ba8,
    green: 0xa6e3a1,
    yellow: 0xf9e2af,
    blue: 0x89b4fa,
    magenta: 0xcba6f7,
    cyan: 0x94e2d5,
    white: 0xbac2de,
    bright_black: 0x585b70,
    bright_red: 0xf38ba8,
    bright_green: 0xa6e3a1,
    bright_yellow: 0xf9e2af,
    bright_blue: 0x89b4fa,
    bright_magenta: 0xcba6f7,
    bright_cyan: 0x94e2d5,
    bright_white: 0xa6adc8,
};

/// One Dark
pub const ONEDARK_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x282c34,
    foreground: 0xabb2bf,
    cursor: 0x528bff,
    cursor_accent: 0x282c34,
    selection_background: 0x3e4451,
    selection_foreground: None,
    black: 0x282c34,
    red: 0xe06c75,
    green: 0x98c379,
    yellow: 0xe5c07b,
    blue: 0x61afef,
    magenta: 0xc678dd,
    cyan: 0x56b6c2,
    white: 0xabb2bf,
    bright_black: 0x5c6370,
    bright_red: 0xe06c75,
    bright_green: 0x98c379,
    bright_yellow: 0xe5c07b,
    bright_blue: 0x61afef,
    bright_magenta: 0xc678dd,
    bright_cyan: 0x56b6c2,
    bright_white: 0xffffff,
};

/// Synthwave '84
pub const SYNTHWAVE_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x262335,
    foreground: 0xffffff,
    cursor: 0xff7edb,
    cursor_accent: 0x262335,
    selection_background: 0x463465,
    selection_foreground: None,
    black: 0x262335,
    red: 0xfe4450,
    green: 0x72f1b8,
    yellow: 0xfede5d,
    blue: 0x03edf9,
    magenta: 0xff7edb,
    cyan: 0x03edf9,
    white: 0xffffff,
    bright_black: 0x614d85,
    bright_red: 0xfe4450,
    bright_green: 0x72f1b8,
    bright_yellow: 0xf97e72,
    bright_blue: 0x03edf9,
    bright_magenta: 0xff7edb,
    bright_cyan: 0x03edf9,
    bright_white: 0xffffff,
};

/// Red
pub const RED_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x1a0a0a,
    foreground: 0xc8b0b0,
    cursor: 0xff4444,
    cursor_accent: 0x1a0a0a,
    selection_background: 0x5a2020,
    selection_foreground: None,
    black: 0x2a1010,
    red: 0xff4444,
    green: 0x6a9a6a,
    yellow: 0xccaa55,
    blue: 0x6688aa,
    magenta: 0xaa5588,
    cyan: 0x558888,
    white: 0xb0a0a0,
    bright_black: 0x6a4040,
    bright_red: 0xff6666,
    bright_green: 0x88bb88,
    bright_yellow: 0xddbb66,
    bright_blue: 0x88aacc,
    bright_magenta: 0xcc77aa,
    bright_cyan: 0x77aaaa,
    bright_white: 0xd0c0c0,
};

/// Cream
pub const CREAM_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xf5f3ee,
    foreground: 0x5a4a3a,
    cursor: 0x9d6b53,
    cursor_accent: 0xf5f3ee,
    selection_background: 0xd4c4b0,
    selection_foreground: None,
    black: 0x5a4a3a,
    red: 0xc85a4f,
    green: 0x7a9a6a,
    yellow: 0xc9a554,
    blue: 0x6b8aaa,
    magenta: 0xa66a8a,
    cyan: 0x5a9a8a,
    white: 0xb0a090,
    bright_black: 0x8a7a6a,
    bright_red: 0xe07060,
    bright_green: 0x90b080,
    bright_yellow: 0xe0bb70,
    bright_blue: 0x80a0c0,
    bright_magenta: 0xc080a0,
    bright_cyan: 0x70b0a0,
    bright_white: 0xd0c0b0,
};

/// Sunset
pub const SUNSET_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x1e1a24,
    foreground: 0xf2e8dd,
    cursor: 0xdd8855,
    cursor_accent: 0x1e1a24,
    selection_background: 0x3a2a40,
    selection_foreground: None,
    black: 0x1e1a24,
    red: 0xdd6655,
    green: 0x88bb77,
    yellow: 0xddaa66,
    blue: 0x6699cc,
    magenta: 0xcc7799,
    cyan: 0x66ccaa,
    white: 0xe8d8c8,
    bright_black: 0x4a3a50,
    bright_red: 0xee8866,
    bright_green: 0x99cc88,
    bright_yellow: 0xeebb77,
    bright_blue: 0x88aadd,
    bright_magenta: 0xdd88aa,
    bright_cyan: 0x88ddbb,
    bright_white: 0xf5e8dd,
};

/// Gray
pub const GRAY_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x2a2d32,
    foreground: 0xd0d0d5,
    cursor: 0x8fa0c0,
    cursor_accent: 0x2a2d32,
    selection_background: 0x3a3f48,
    selection_foreground: None,
    black: 0x2a2d32,
    red: 0xd87070,
    green: 0x78b088,
    yellow: 0xd0b060,
    blue: 0x7090c0,
    magenta: 0xa880b0,
    cyan: 0x60a0b0,
    white: 0xb0b0b8,
    bright_black: 0x606068,
    bright_red: 0xe88888,
    bright_green: 0x90c8a0,
    bright_yellow: 0xe0c878,
    bright_blue: 0x90b0d8,
    bright_magenta: 0xc098c8,
    bright_cyan: 0x80b8c8,
    bright_white: 0xe0e0e8,
};

/// Forest
pub const FOREST_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x1a2e1a,
    foreground: 0xc8e0c8,
    cursor: 0x50c878,
    cursor_accent: 0x1a2e1a,
    selection_background: 0x2a4a2a,
    selection_foreground: None,
    black: 0x1a2e1a,
    red: 0xc85050,
    green: 0x50c878,
    yellow: 0xc8b050,
    blue: 0x5080c0,
    magenta: 0xa060a0,
    cyan: 0x50a090,
    white: 0xa8c0a8,
    bright_black: 0x4a6a4a,
    bright_red: 0xe87878,
    bright_green: 0x78e0a0,
    bright_yellow: 0xe0c878,
    bright_blue: 0x78a0e0,
    bright_magenta: 0xc088c0,
    bright_cyan: 0x78c0b0,
    bright_white: 0xd0e8d0,
};

/// Ocean
pub const OCEAN_PALETTE: TerminalPalette = TerminalPalette {
    background: 0x1a1e2e,
    foreground: 0xc8d0e8,
    cursor: 0x5090e0,
    cursor_accent: 0x1a1e2e,
    selection_background: 0x2a3a5a,
    selection_foreground: None,
    black: 0x1a1e2e,
    red: 0xe06070,
    green: 0x60b080,
    yellow: 0xd0b060,
    blue: 0x5090e0,
    magenta: 0xa070c0,
    cyan: 0x50b0c0,
    white: 0xa0b0c8,
    bright_black: 0x4a5a7a,
    bright_red: 0xf08090,
    bright_green: 0x80d0a0,
    bright_yellow: 0xf0d080,
    bright_blue: 0x70b0f0,
    bright_magenta: 0xc090e0,
    bright_cyan: 0x70d0e0,
    bright_white: 0xd0e0f0,
};

/// Solarized Light
pub const SOLARIZEDLIGHT_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xfdf6e3,
    foreground: 0x657b83,
    cursor: 0x657b83,
    cursor_accent: 0xfdf6e3,
    selection_background: 0xeee8d5,
    selection_foreground: None,
    black: 0x073642,
    red: 0xdc322f,
    green: 0x859900,
    yellow: 0xb58900,
    blue: 0x268bd2,
    magenta: 0xd33682,
    cyan: 0x2aa198,
    white: 0xeee8d5,
    bright_black: 0x002b36,
    bright_red: 0xcb4b16,
    bright_green: 0x586e75,
    bright_yellow: 0x657b83,
    bright_blue: 0x839496,
    bright_magenta: 0x6c71c4,
    bright_cyan: 0x93a1a1,
    bright_white: 0xfdf6e3,
};

/// GitHub Light
pub const GITHUB_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xffffff,
    foreground: 0x24292f,
    cursor: 0x0969da,
    cursor_accent: 0xffffff,
    selection_background: 0xadd6ff,
    selection_foreground: None,
    black: 0x24292f,
    red: 0xcf222e,
    green: 0x1a7f37,
    yellow: 0x9a6700,
    blue: 0x0969da,
    magenta: 0x8250df,
    cyan: 0x1b7c83,
    white: 0x6e7781,
    bright_black: 0x57606a,
    bright_red: 0xa40e26,
    bright_green: 0x2da44e,
    bright_yellow: 0xbf8700,
    bright_blue: 0x218bff,
    bright_magenta: 0xa475f9,
    bright_cyan: 0x3192aa,
    bright_white: 0x8c959f,
};

/// Paper
pub const PAPER_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xfafafa,
    foreground: 0x1a1a1a,
    cursor: 0x333333,
    cursor_accent: 0xfafafa,
    selection_background: 0xe0e0e0,
    selection_foreground: None,
    black: 0x1a1a1a,
    red: 0xc04040,
    green: 0x408040,
    yellow: 0x907020,
    blue: 0x406090,
    magenta: 0x704080,
    cyan: 0x307070,
    white: 0x808080,
    bright_black: 0x505050,
    bright_red: 0xd06060,
    bright_green: 0x60a060,
    bright_yellow: 0xb09040,
    bright_blue: 0x6080b0,
    bright_magenta: 0x9060a0,
    bright_cyan: 0x509090,
    bright_white: 0xa0a0a0,
};

/// Rose
pub const ROSE_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xfdf2f4,
    foreground: 0x4a3035,
    cursor: 0xe11d48,
    cursor_accent: 0xfdf2f4,
    selection_background: 0xfce7f3,
    selection_foreground: None,
    black: 0x4a3035,
    red: 0xe11d48,
    green: 0x059669,
    yellow: 0xd97706,
    blue: 0x3b82f6,
    magenta: 0xc026d3,
    cyan: 0x0891b2,
    white: 0x9f8c91,
    bright_black: 0x6b5a5f,
    bright_red: 0xf43f5e,
    bright_green: 0x10b981,
    bright_yellow: 0xf59e0b,
    bright_blue: 0x60a5fa,
    bright_magenta: 0xe879f9,
    bright_cyan: 0x22d3ee,
    bright_white: 0xc4b3b8,
};

/// Mint
pub const MINT_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xf0fdf4,
    foreground: 0x14532d,
    cursor: 0x10b981,
    cursor_accent: 0xf0fdf4,
    selection_background: 0xdcfce7,
    selection_foreground: None,
    black: 0x14532d,
    red: 0xdc2626,
    green: 0x10b981,
    yellow: 0xca8a04,
    blue: 0x2563eb,
    magenta: 0x9333ea,
    cyan: 0x0891b2,
    white: 0x6b7c71,
    bright_black: 0x3f5c47,
    bright_red: 0xef4444,
    bright_green: 0x34d399,
    bright_yellow: 0xeab308,
    bright_blue: 0x3b82f6,
    bright_magenta: 0xa855f7,
    bright_cyan: 0x06b6d4,
    bright_white: 0x8fa196,
};

/// Lavender
pub const LAVENDER_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xfaf5ff,
    foreground: 0x3b2e50,
    cursor: 0x9333ea,
    cursor_accent: 0xfaf5ff,
    selection_background: 0xf3e8ff,
    selection_foreground: None,
    black: 0x3b2e50,
    red: 0xdc2626,
    green: 0x16a34a,
    yellow: 0xca8a04,
    blue: 0x2563eb,
    magenta: 0x9333ea,
    cyan: 0x0891b2,
    white: 0x7c7089,
    bright_black: 0x5a4d6b,
    bright_red: 0xef4444,
    bright_green: 0x22c55e,
    bright_yellow: 0xeab308,
    bright_blue: 0x3b82f6,
    bright_magenta: 0xa855f7,
    bright_cyan: 0x06b6d4,
    bright_white: 0xa094ab,
};

/// Sand
pub const SAND_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xfaf5f0,
    foreground: 0x45392d,
    cursor: 0xd97706,
    cursor_accent: 0xfaf5f0,
    selection_background: 0xfef3c7,
    selection_foreground: None,
    black: 0x45392d,
    red: 0xdc2626,
    green: 0x65a30d,
    yellow: 0xd97706,
    blue: 0x0369a1,
    magenta: 0x9333ea,
    cyan: 0x0e7490,
    white: 0x8a7e71,
    bright_black: 0x6b5d4f,
    bright_red: 0xef4444,
    bright_green: 0x84cc16,
    bright_yellow: 0xf59e0b,
    bright_blue: 0x0284c7,
    bright_magenta: 0xa855f7,
    bright_cyan: 0x06b6d4,
    bright_white: 0xaea196,
};

/// Sky
pub const SKY_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xf0f9ff,
    foreground: 0x1e3a5f,
    cursor: 0x0ea5e9,
    cursor_accent: 0xf0f9ff,
    selection_background: 0xe0f2fe,
    selection_foreground: None,
    black: 0x1e3a5f,
    red: 0xdc2626,
    green: 0x16a34a,
    yellow: 0xca8a04,
    blue: 0x0ea5e9,
    magenta: 0x9333ea,
    cyan: 0x0891b2,
    white: 0x64748b,
    bright_black: 0x475569,
    bright_red: 0xef4444,
    bright_green: 0x22c55e,
    bright_yellow: 0xeab308,
    bright_blue: 0x38bdf8,
    bright_magenta: 0xa855f7,
    bright_cyan: 0x06b6d4,
    bright_white: 0x94a3b8,
};

/// Peach
pub const PEACH_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xfff7ed,
    foreground: 0x431407,
    cursor: 0xf97316,
    cursor_accent: 0xfff7ed,
    selection_background: 0xfed7aa,
    selection_foreground: None,
    black: 0x431407,
    red: 0xdc2626,
    green: 0x16a34a,
    yellow: 0xd97706,
    blue: 0x2563eb,
    magenta: 0xc026d3,
    cyan: 0x0891b2,
    white: 0x78716c,
    bright_black: 0x57534e,
    bright_red: 0xef4444,
    bright_green: 0x22c55e,
    bright_yellow: 0xf59e0b,
    bright_blue: 0x3b82f6,
    bright_magenta: 0xe879f9,
    bright_cyan: 0x22d3ee,
    bright_white: 0xa8a29e,
};

/// Snow
pub const SNOW_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xfafbff,
    foreground: 0x1e293b,
    cursor: 0x6366f1,
    cursor_accent: 0xfafbff,
    selection_background: 0xe0e7ff,
    selection_foreground: None,
    black: 0x1e293b,
    red: 0xdc2626,
    green: 0x16a34a,
    yellow: 0xca8a04,
    blue: 0x6366f1,
    magenta: 0x8b5cf6,
    cyan: 0x0891b2,
    white: 0x64748b,
    bright_black: 0x475569,
    bright_red: 0xef4444,
    bright_green: 0x22c55e,
    bright_yellow: 0xeab308,
    bright_blue: 0x818cf8,
    bright_magenta: 0xa78bfa,
    bright_cyan: 0x06b6d4,
    bright_white: 0x94a3b8,
};

/// Sepia
pub const SEPIA_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xf5f0e6,
    foreground: 0x3d3225,
    cursor: 0x92400e,
    cursor_accent: 0xf5f0e6,
    selection_background: 0xe8dcc8,
    selection_foreground: None,
    black: 0x3d3225,
    red: 0x9a3412,
    green: 0x4d7c0f,
    yellow: 0x92400e,
    blue: 0x1d4ed8,
    magenta: 0x7e22ce,
    cyan: 0x0e7490,
    white: 0x78716c,
    bright_black: 0x57534e,
    bright_red: 0xc2410c,
    bright_green: 0x65a30d,
    bright_yellow: 0xb45309,
    bright_blue: 0x2563eb,
    bright_magenta: 0x9333ea,
    bright_cyan: 0x0891b2,
    bright_white: 0xa8a29e,
};

/// Gruvbox Light
pub const GRUVBOXLIGHT_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xfbf1c7,
    foreground: 0x3c3836,
    cursor: 0xb57614,
    cursor_accent: 0xfbf1c7,
    selection_background: 0xebdbb2,
    selection_foreground: None,
    black: 0x3c3836,
    red: 0x9d0006,
    green: 0x79740e,
    yellow: 0xb57614,
    blue: 0x076678,
    magenta: 0x8f3f71,
    cyan: 0x427b58,
    white: 0x7c6f64,
    bright_black: 0x928374,
    bright_red: 0xcc241d,
    bright_green: 0x98971a,
    bright_yellow: 0xd79921,
    bright_blue: 0x458588,
    bright_magenta: 0xb16286,
    bright_cyan: 0x689d6a,
    bright_white: 0xa89984,
};

/// Nord Light
pub const NORDLIGHT_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xeceff4,
    foreground: 0x2e3440,
    cursor: 0x5e81ac,
    cursor_accent: 0xeceff4,
    selection_background: 0xd8dee9,
    selection_foreground: None,
    black: 0x2e3440,
    red: 0xbf616a,
    green: 0xa3be8c,
    yellow: 0xebcb8b,
    blue: 0x5e81ac,
    magenta: 0xb48ead,
    cyan: 0x88c0d0,
    white: 0x4c566a,
    bright_black: 0x434c5e,
    bright_red: 0xbf616a,
    bright_green: 0xa3be8c,
    bright_yellow: 0xebcb8b,
    bright_blue: 0x81a1c1,
    bright_magenta: 0xb48ead,
    bright_cyan: 0x8fbcbb,
    bright_white: 0x3b4252,
};

/// Blossom
pub const BLOSSOM_PALETTE: TerminalPalette = TerminalPalette {
    background: 0xfdf2f8,
    foreground: 0x4a2040,
    cursor: 0xec4899,
    cursor_accent: 0xfdf2f8,
    selection_background: 0xfce7f3,
    selection_foreground: None,
    black: 0x4a2040,
    red: 0xe11d48,
    green: 0x059669,
    yellow: 0xd97706,
    blue: 0x3b82f6,
    magenta: 0xec4899,
    cyan: 0x0891b2,
    white: 0x9f708c,
    bright_black: 0x6b4060,
    bright_red: 0xf43f5e,
    bright_green: 0x10b981,
    bright_yellow: 0xf59e0b,
    bright_blue: 0x60a5fa,
    bright_magenta: 0xf472b6,
    bright_cyan: 0x22d3ee,
    bright_white: 0xc4a0b4,
};
/// Static palette for a concrete theme. `System` maps to the dark palette here;
/// use [`resolve`] to honour the host appearance.
pub const fn palette_for(mode: ThemeMode) -> &'static TerminalPalette {
    match mode {
        ThemeMode::System | ThemeMode::Dark => &DARK_PALETTE,
        ThemeMode::Retro => &RETRO_PALETTE,
        ThemeMode::Dracula => &DRACULA_PALETTE,
        ThemeMode::Nord => &NORD_PALETTE,
        ThemeMode::Monokai => &MONOKAI_PALETTE,
        ThemeMode::TokyoNight => &TOKYONIGHT_PALETTE,
        ThemeMode::Solarized => &SOLARIZED_PALETTE,
        ThemeMode::Gruvbox => &GRUVBOX_PALETTE,
        ThemeMode::Catppuccin => &CATPPUCCIN_PALETTE,
        ThemeMode::OneDark => &ONEDARK_PALETTE,
        ThemeMode::Synthwave => &SYNTHWAVE_PALETTE,
        ThemeMode::Red => &RED_PALETTE,
        ThemeMode::Sunset => &SUNSET_PALETTE,
        ThemeMode::Gray => &GRAY_PALETTE,
        ThemeMode::Forest => &FOREST_PALETTE,
        ThemeMode::Ocean => &OCEAN_PALETTE,
        ThemeMode::Light => &LIGHT_PALETTE,
        ThemeMode::Cream => &CREAM_PALETTE,
        ThemeMode::SolarizedLight => &SOLARIZEDLIGHT_PALETTE,
        ThemeMode::GitHub => &GITHUB_PALETTE,
        ThemeMode::Paper => &PAPER_PALETTE,
        ThemeMode::Rose => &ROSE_PALETTE,
        ThemeMode::Mint => &MINT_PALETTE,
        ThemeMode::Lavender => &LAVENDER_PALETTE,
        ThemeMode::Sand => &SAND_PALETTE,
        ThemeMode::Sky => &SKY_PALETTE,
        ThemeMode::Peach => &PEACH_PALETTE,
        ThemeMode::Snow => &SNOW_PALETTE,
        ThemeMode::Sepia => &SEPIA_PALETTE,
        ThemeMode::GruvboxLight => &GRUVBOXLIGHT_PALETTE,
        ThemeMode::NordLight => &NORDLIGHT_PALETTE,
        ThemeMode::Blossom => &BLOSSOM_PALETTE,
    }
}

/// Resolve a theme to its terminal palette.
///
/// `System` follows `appearance`; with no signal (headless) it resolves to dark.
pub fn resolve(mode: ThemeMode, appearance: Option<Appearance>) -> TerminalPalette {
    match mode {
        ThemeMode::System => match appearance {
            Some(Appearance::Light) => LIGHT_PALETTE,
            Some(Appearance::Dark) | None => DARK_PALETTE,
        },
        mode => *palette_for(mode),
    }
}

/// Resolve a raw identifier. Unknown identifiers fall back to the dark palette.
pub fn resolve_id(id: &str, appearance: Option<Appearance>) -> TerminalPalette {
    match ThemeMode::from_id(id) {
        Some(mode) => resolve(mode, appearance),
        None => {
            log::debug!("Unknown theme '{}', using dark palette", id);
            DARK_PALETTE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_stable_for_concrete_themes() {
        for mode in ThemeMode::all().filter(|m| *m != ThemeMode::System) {
            let first = resolve(mode, None);
            assert_eq!(first, resolve(mode, None));
            // Host appearance only matters for `System`
            assert_eq!(first, resolve(mode, Some(Appearance::Light)));
            assert_eq!(first, resolve(mode, Some(Appearance::Dark)));
        }
    }

    #[test]
    fn system_follows_host_appearance() {
        assert_eq!(resolve(ThemeMode::System, Some(Appearance::Dark)), DARK_PALETTE);
        assert_eq!(resolve(ThemeMode::System, Some(Appearance::Light)), LIGHT_PALETTE);
        assert_eq!(resolve(ThemeMode::System, None), DARK_PALETTE);
    }

    #[test]
    fn unknown_identifier_falls_back_to_dark() {
        assert_eq!(resolve_id("does-not-exist", Some(Appearance::Light)), DARK_PALETTE);
        assert_eq!(resolve_id("nordlight", None), NORDLIGHT_PALETTE);
        assert_eq!(resolve_id("system", Some(Appearance::Light)), LIGHT_PALETTE);
    }

    #[test]
    fn spot_check_palette_values() {
        assert_eq!(DRACULA_PALETTE.background, 0x282a36);
        assert_eq!(DRACULA_PALETTE.bright_white, 0xffffff);
        assert_eq!(NORDLIGHT_PALETTE.cursor, 0x5e81ac);
        assert_eq!(RETRO_PALETTE.selection_foreground, Some(0x000000));
        assert_eq!(DARK_PALETTE.selection_foreground, None);
    }

    #[test]
    fn cursor_accent_matches_background() {
        for mode in ThemeMode::all() {
            let palette = palette_for(mode);
            assert_eq!(palette.cursor_accent, palette.background, "{}", mode);
        }
    }

    #[test]
    fn to_hex_pads_and_lowercases() {
        assert_eq!(TerminalPalette::to_hex(0x0a0a0a), "#0a0a0a");
        assert_eq!(TerminalPalette::to_hex(0xABCDEF), "#abcdef");
        assert_eq!(TerminalPalette::to_hex(0xFF000000), "#000000");
    }

    #[test]
    fn ansi_order() {
        let ansi = DARK_PALETTE.ansi();
        assert_eq!(ansi[0], DARK_PALETTE.black);
        assert_eq!(ansi[9], DARK_PALETTE.bright_red);
        assert_eq!(ansi[15], DARK_PALETTE.bright_white);
    }
}
