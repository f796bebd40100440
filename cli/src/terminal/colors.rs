use colored::Color;

pub const PRIMARY: Color = Color::BrightWhite;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const SUCCESS: Color = Color::Green;
pub const ERROR: Color = Color::Red;
pub const WARNING: Color = Color::Yellow;
pub const INFO: Color = Color::Blue;

pub const FORMAT_LABEL: Color = Color::Magenta;
