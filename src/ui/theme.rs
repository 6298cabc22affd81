//! Theme configuration

use iced::Color;

/// Dark theme colors
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
    pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.4, 0.45);
    pub const LINK: Color = Color::from_rgb(0.45, 0.65, 1.0);

    pub const ERROR_BACKGROUND: Color = Color::from_rgb(0.25, 0.1, 0.1);
    pub const ERROR_BORDER: Color = Color::from_rgb(0.7, 0.25, 0.25);
    pub const ERROR_TEXT: Color = Color::from_rgb(1.0, 0.75, 0.75);

    pub const SUCCESS_BORDER: Color = Color::from_rgb(0.2, 0.45, 0.3);
    pub const BADGE: Color = Color::from_rgb(0.15, 0.4, 0.25);
}
