use crossterm::style::Color;

pub const ACCENT_LIGHT: Color = Color::Rgb { r: 0x25, g: 0x63, b: 0xeb };
pub const ACCENT_DARK: Color = Color::Rgb { r: 0x81, g: 0x8c, b: 0xf8 };
pub const TEXT_LIGHT: Color = Color::Rgb { r: 0x11, g: 0x18, b: 0x27 };
pub const TEXT_DARK: Color = Color::Rgb { r: 0xf9, g: 0xfa, b: 0xfb };
pub const MUTED: Color = Color::Rgb { r: 0x9c, g: 0xa3, b: 0xaf };
pub const RATING: Color = Color::Rgb { r: 0xf5, g: 0x9e, b: 0x0b };
pub const STATUS_ERROR: Color = Color::Rgb { r: 0xef, g: 0x44, b: 0x44 };

/// Light/dark rendering mode. Owned by the view that renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn accent(self) -> Color {
        match self {
            Theme::Light => ACCENT_LIGHT,
            Theme::Dark => ACCENT_DARK,
        }
    }

    pub fn text(self) -> Color {
        match self {
            Theme::Light => TEXT_LIGHT,
            Theme::Dark => TEXT_DARK,
        }
    }
}
