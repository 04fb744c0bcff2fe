//! Color themes
//!
//! A two-value mode resolving to a fixed palette. Pure presentation state:
//! nothing outside the draw functions reads it, and toggling it cannot
//! affect any controller.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Resolve the configured name; unknown values fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

pub struct Theme {
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
}

pub const DARK: Theme = Theme {
    primary: Color::Cyan,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    text: Color::White,
    muted: Color::DarkGray,
    highlight_bg: Color::Yellow,
    highlight_fg: Color::Black,
};

pub const LIGHT: Theme = Theme {
    primary: Color::Blue,
    success: Color::Green,
    warning: Color::Magenta,
    error: Color::Red,
    text: Color::Black,
    muted: Color::DarkGray,
    highlight_bg: Color::Blue,
    highlight_fg: Color::White,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_falls_back_to_dark() {
        assert_eq!(ThemeMode::from_name("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_name("Dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_name("solarized"), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_roundtrip() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }
}
