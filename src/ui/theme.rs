//! Dark and light palettes.

use crate::models::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Style,
    pub muted: Style,
    pub accent: Style,
    pub card_front: Style,
    pub card_back: Style,
    pub highlight: Style,
    pub error: Style,
    pub busy: Style,
}

pub const DARK: Palette = Palette {
    base: Style::new().fg(Color::Rgb(226, 232, 240)).bg(Color::Rgb(15, 23, 42)),
    muted: Style::new().fg(Color::Rgb(148, 163, 184)),
    accent: Style::new().fg(Color::Rgb(56, 189, 248)).add_modifier(Modifier::BOLD),
    card_front: Style::new().fg(Color::Rgb(226, 232, 240)),
    card_back: Style::new().fg(Color::Rgb(165, 180, 252)),
    highlight: Style::new().fg(Color::Rgb(250, 204, 21)).add_modifier(Modifier::BOLD),
    error: Style::new().fg(Color::Rgb(248, 113, 113)),
    busy: Style::new().fg(Color::Yellow),
};

pub const LIGHT: Palette = Palette {
    base: Style::new().fg(Color::Rgb(15, 23, 42)).bg(Color::Rgb(241, 245, 249)),
    muted: Style::new().fg(Color::Rgb(100, 100, 100)),
    accent: Style::new().fg(Color::Rgb(0, 102, 153)).add_modifier(Modifier::BOLD),
    card_front: Style::new().fg(Color::Rgb(15, 23, 42)),
    card_back: Style::new().fg(Color::Rgb(67, 56, 202)),
    highlight: Style::new().fg(Color::Rgb(120, 120, 0)).add_modifier(Modifier::BOLD),
    error: Style::new().fg(Color::Rgb(185, 28, 28)),
    busy: Style::new().fg(Color::Rgb(180, 83, 9)),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }
}
