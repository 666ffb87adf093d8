//! Per-theme colors

use ratatui::style::Color;

use crate::theme::Theme;

/// Colors applied across the dashboard for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub title: Color,
    pub border: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 250),
            text: Color::Rgb(30, 30, 40),
            title: Color::Blue,
            border: Color::Gray,
            accent: Color::Blue,
            muted: Color::DarkGray,
            error: Color::Red,
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::Rgb(24, 26, 32),
            text: Color::Rgb(220, 220, 225),
            title: Color::Cyan,
            border: Color::DarkGray,
            accent: Color::Cyan,
            muted: Color::Gray,
            error: Color::LightRed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_follow_theme() {
        assert_eq!(Palette::for_theme(Theme::Light), Palette::light());
        assert_eq!(Palette::for_theme(Theme::Dark), Palette::dark());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(
            Palette::for_theme(Theme::Light),
            Palette::for_theme(Theme::Dark)
        );
    }
}
