//! Banner renderer: box lines, aligned text rows and key-value rows.
//!
//! Every `*_line` method returns the formatted row without a newline; the matching
//! `print_*` method writes it plus `\n` to the sink in a single write.


use std::io::{self, Write};

use crate::border::{BorderSet, BorderStyle};
use crate::color::{colorize, text_style};
use crate::text::{align, char_len, Alignment};

/// Default total width of a banner, borders included.
pub const DEFAULT_WIDTH: usize = 80;

/// Columns taken by the two vertical borders.
const BORDER_COLUMNS: usize = 2;
/// Columns taken by the borders plus one space of padding on each side.
const TEXT_FRAME_COLUMNS: usize = 4;

/// `key:` left-justified to at least `padding` chars, a space, then `value`.
/// Keys longer than `padding` are kept whole.
pub fn key_value_text(key: &str, value: &str, padding: usize) -> String {
    let label = format!("{key}:");
    format!("{label:<padding$} {value}")
}

/// A configurable banner that writes rows to `W` (stdout by default).
#[derive(Debug)]
pub struct Banner<W: Write = io::Stdout> {
    width: usize,
    style: BorderStyle,
    borders: BorderSet,
    border_color: String,
    text_color: String,
    bold: bool,
    writer: W,
}

impl Banner<io::Stdout> {
    /// Banner with default settings writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for Banner<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Banner<W> {
    /// Banner with default settings writing to `writer`.
    pub fn with_writer(writer: W) -> Self {
        let style = BorderStyle::default();
        Self {
            width: DEFAULT_WIDTH,
            style,
            borders: style.borders(),
            border_color: String::new(),
            text_color: String::new(),
            bold: false,
            writer,
        }
    }

    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_style(&mut self, style: BorderStyle) -> &mut Self {
        self.style = style;
        self.borders = style.borders();
        self
    }

    /// Switch style by name. Unknown names leave the current style in place.
    pub fn set_style_name(&mut self, name: &str) -> &mut Self {
        match BorderStyle::from_name(name) {
            Some(style) => self.set_style(style),
            None => {
                tracing::debug!(style = name, current = %self.style, "ignoring unknown border style");
                self
            }
        }
    }

    /// Color for border glyphs. An empty string disables border color.
    pub fn set_border_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.border_color = color.into();
        self
    }

    /// Color for text rows. An empty string disables text color.
    pub fn set_text_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.text_color = color.into();
        self
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn style(&self) -> BorderStyle {
        self.style
    }

    pub fn borders(&self) -> BorderSet {
        self.borders
    }

    pub fn border_color(&self) -> &str {
        &self.border_color
    }

    pub fn text_color(&self) -> &str {
        &self.text_color
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    /// Consume the banner and hand back its sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn edge_line(&self, left: char, right: char) -> String {
        let inner_width = self.width.saturating_sub(BORDER_COLUMNS);
        let fill = self.borders.horizontal.to_string().repeat(inner_width);
        colorize(&self.border_color, &format!("{left}{fill}{right}"))
    }

    pub fn top_line(&self) -> String {
        self.edge_line(self.borders.top_left, self.borders.top_right)
    }

    pub fn bottom_line(&self) -> String {
        self.edge_line(self.borders.bottom_left, self.borders.bottom_right)
    }

    pub fn separator_line(&self) -> String {
        self.edge_line(self.borders.t_left, self.borders.t_right)
    }

    /// Text row: text is truncated or padded to the inner width, then framed by
    /// one space and a vertical border on each side.
    pub fn text_line(&self, text: &str, alignment: Alignment) -> String {
        let inner_width = self.width.saturating_sub(TEXT_FRAME_COLUMNS);
        if char_len(text) > inner_width {
            tracing::trace!(inner_width, "truncating banner text");
        }
        let aligned = align(text, inner_width, alignment);

        let vertical = self.borders.vertical.to_string();
        let border = colorize(&self.border_color, &vertical);
        let style = text_style(&self.text_color, self.bold);
        let content = colorize(&style, &format!(" {aligned} "));

        format!("{border}{content}{border}")
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.writer.write_all(buf.as_bytes())
    }

    pub fn print_top(&mut self) -> io::Result<()> {
        let line = self.top_line();
        self.write_line(&line)
    }

    pub fn print_bottom(&mut self) -> io::Result<()> {
        let line = self.bottom_line();
        self.write_line(&line)
    }

    pub fn print_separator(&mut self) -> io::Result<()> {
        let line = self.separator_line();
        self.write_line(&line)
    }

    pub fn print_text(&mut self, text: &str, alignment: Alignment) -> io::Result<()> {
        let line = self.text_line(text, alignment);
        self.write_line(&line)
    }

    pub fn print_left(&mut self, text: &str) -> io::Result<()> {
        self.print_text(text, Alignment::Left)
    }

    pub fn print_centered(&mut self, text: &str) -> io::Result<()> {
        self.print_text(text, Alignment::Center)
    }

    pub fn print_right(&mut self, text: &str) -> io::Result<()> {
        self.print_text(text, Alignment::Right)
    }

    /// Bordered row with no text.
    pub fn print_empty_line(&mut self) -> io::Result<()> {
        self.print_text("", Alignment::Left)
    }

    pub fn print_key_value(&mut self, key: &str, value: &str, padding: usize) -> io::Result<()> {
        let text = key_value_text(key, value, padding);
        self.print_text(&text, Alignment::Left)
    }
}
