use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const HOST_UP: Color = Color::Green;
pub const HOST_DOWN: Color = Color::Red;
pub const HOST_SKIPPED: Color = Color::Yellow;
