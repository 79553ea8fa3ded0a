mod palettes;
mod types;

pub use palettes::*;
pub use types::{Appearance, ThemeInfo, ThemeMode};
