//! Light/dark palettes.
//!
//! The theme only chooses colors; it never affects terminal behavior.

use portfolio_core::Tone;
use ratatui::style::Color;

/// Color scheme selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page behind the window
    pub page_bg: Color,
    pub page_fg: Color,
    /// Terminal window body, black in both themes
    pub window_bg: Color,
    pub title_bar_bg: Color,
    pub title_fg: Color,
    pub prompt: Color,
    /// Typed command text
    pub command: Color,
    pub border: Color,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                page_bg: Color::Rgb(17, 24, 39),
                page_fg: Color::Gray,
                window_bg: Color::Black,
                title_bar_bg: Color::Rgb(31, 41, 55),
                title_fg: Color::Gray,
                prompt: Color::LightBlue,
                command: Color::White,
                border: Color::DarkGray,
            },
            Theme::Light => Palette {
                page_bg: Color::Rgb(249, 250, 251),
                page_fg: Color::Rgb(31, 41, 55),
                window_bg: Color::Black,
                title_bar_bg: Color::Rgb(55, 65, 81),
                title_fg: Color::White,
                prompt: Color::LightBlue,
                command: Color::White,
                border: Color::Gray,
            },
        }
    }
}

/// Color for a span tone inside the terminal window.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Plain => Color::Gray,
        Tone::Heading => Color::LightGreen,
        Tone::Label => Color::LightBlue,
        Tone::Highlight => Color::LightYellow,
        Tone::Alert => Color::LightRed,
        Tone::Muted => Color::DarkGray,
    }
}

/// Color for a span tone on an ANSI line terminal.
pub fn ansi_color(tone: Tone) -> Option<crossterm::style::Color> {
    use crossterm::style::Color as Ansi;
    match tone {
        Tone::Plain => None,
        Tone::Heading => Some(Ansi::Green),
        Tone::Label => Some(Ansi::Blue),
        Tone::Highlight => Some(Ansi::Yellow),
        Tone::Alert => Some(Ansi::Red),
        Tone::Muted => Some(Ansi::DarkGrey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_stays_black() {
        assert_eq!(Theme::Dark.palette().window_bg, Color::Black);
        assert_eq!(Theme::Light.palette().window_bg, Color::Black);
        assert_ne!(Theme::Dark.palette().page_bg, Theme::Light.palette().page_bg);
    }

    #[test]
    fn test_plain_has_no_ansi_color() {
        assert_eq!(ansi_color(Tone::Plain), None);
        assert!(ansi_color(Tone::Alert).is_some());
    }
}
