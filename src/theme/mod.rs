//! Theme configuration for CLI output
//!
//! Centralizes the colors used by status lines, summaries and `config show`.

pub mod cli;

pub use cli::{color_to_ansi, ANSI_RESET};

/// Terminal colors the CLI uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
    Gray,
    DarkGray,
    LightGreen,
    LightYellow,
    White,
    Reset,
}

/// Theme configuration for the CLI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and important elements
    pub accent: Color,
    pub warning: Color,
    pub error: Color,
    pub success: Color,
    /// When false, every text helper returns its input unchanged
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::forge()
    }
}

impl Theme {
    /// FTL theme - light gray text with green accent.
    pub fn forge() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::Red,
            success: Color::LightGreen,
            enabled: true,
        }
    }

    /// Theme that emits no escape codes.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::forge()
        }
    }
}

/// Global theme instance. Honors `NO_COLOR`.
pub fn current_theme() -> Theme {
    match std::env::var_os("NO_COLOR") {
        Some(v) if !v.is_empty() => Theme::plain(),
        _ => Theme::default(),
    }
}
