//! ANSI color codes and helpers for wrapping text in them.
//!
//! Colors are plain escape-sequence strings. An empty string means "no color".

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const PURPLE: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";
pub const BOLD: &str = "\x1b[1m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
/// Truecolor #00FF00
pub const PRIMARY_GREEN: &str = "\x1b[38;2;0;255;0m";

/// Wrap `text` in `color` and a trailing reset. Empty color returns the text as-is.
pub fn colorize(color: &str, text: &str) -> String {
    if color.is_empty() {
        return text.to_string();
    }
    format!("{color}{text}{RESET}")
}

/// Format RGB color as ANSI truecolor foreground code
pub fn rgb_fg(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Prefix for text content: bold modifier (if requested) followed by the text color.
pub fn text_style(text_color: &str, bold: bool) -> String {
    if bold {
        format!("{BOLD}{text_color}")
    } else {
        text_color.to_string()
    }
}

/// Look up a palette color by name. `none` maps to the empty color.
pub fn color_from_name(name: &str) -> Option<&'static str> {
    match name.trim().to_lowercase().as_str() {
        "none" | "" => Some(""),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "yellow" => Some(YELLOW),
        "blue" => Some(BLUE),
        "purple" | "magenta" => Some(PURPLE),
        "cyan" => Some(CYAN),
        "white" => Some(WHITE),
        "bright-green" => Some(BRIGHT_GREEN),
        "primary-green" | "primary" => Some(PRIMARY_GREEN),
        _ => None,
    }
}

/// Parse a palette name or a `#rrggbb` hex value into a color code.
pub fn parse_color(spec: &str) -> Option<String> {
    let spec = spec.trim();
    if let Some(hex) = spec.strip_prefix('#') {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(rgb_fg(channel(0)?, channel(2)?, channel(4)?));
    }
    color_from_name(spec).map(str::to_string)
}
