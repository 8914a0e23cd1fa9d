use crate::config::Config;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub header: Color,
    pub cursor: Color,
    pub checked: Color,
    pub placeholder: Color,
    pub footer: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub notice_bg: Color,
    pub error_bg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            header: Color::Magenta,
            cursor: Color::Cyan,
            checked: Color::Green,
            placeholder: Color::DarkGray,
            footer: Color::DarkGray,
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
            notice_bg: Color::Rgb(0, 100, 0),
            error_bg: Color::Rgb(160, 30, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            ..Self::default_theme()
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            header: Color::Blue,
            cursor: Color::Blue,
            checked: Color::Rgb(0, 130, 0),
            placeholder: Color::Gray,
            footer: Color::Gray,
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
            notice_bg: Color::Rgb(120, 200, 120),
            error_bg: Color::Rgb(230, 120, 120),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
