use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xab, 0x8b, 0xff);
pub const ACCENT_LIGHT: Color = Color::Rgb(0xd6, 0xc7, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa4, 0xab);
pub const RATING: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const ERROR_TEXT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
