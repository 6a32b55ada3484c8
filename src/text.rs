//! UTF-8 safe truncation and alignment for banner text.
//!
//! Lengths are counted in `char`s. Display width is not considered, so a wide glyph
//! counts as one unit, but no operation here slices inside a multi-byte character.

/// Horizontal placement of text inside a banner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Counts the number of characters in a string (not bytes).
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Returns a prefix of the string up to `max_chars` characters.
/// Respects UTF-8 boundaries and won't panic on multi-byte characters.
pub fn safe_prefix(s: &str, max_chars: usize) -> &str {
    if s.is_empty() || max_chars == 0 {
        return "";
    }

    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Left-justify `text` in `width` characters, truncating when it doesn't fit.
pub fn align_left(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return safe_prefix(text, width).to_string();
    }
    format!("{text}{}", " ".repeat(width - len))
}

/// Right-justify `text` in `width` characters, truncating when it doesn't fit.
pub fn align_right(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return safe_prefix(text, width).to_string();
    }
    format!("{}{text}", " ".repeat(width - len))
}

/// Center `text` in `width` characters. An odd leftover space goes to the right.
pub fn center(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return safe_prefix(text, width).to_string();
    }

    let total_padding = width - len;
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!("{}{text}{}", " ".repeat(left_pad), " ".repeat(right_pad))
}

/// Fit `text` into exactly `width` characters using `alignment`.
pub fn align(text: &str, width: usize, alignment: Alignment) -> String {
    match alignment {
        Alignment::Left => align_left(text, width),
        Alignment::Center => center(text, width),
        Alignment::Right => align_right(text, width),
    }
}

/// Character count of `s` once ANSI escape sequences are removed.
pub fn visible_width(s: &str) -> usize {
    let stripped = strip_ansi_escapes::strip(s.as_bytes());
    char_len(&String::from_utf8_lossy(&stripped))
}
