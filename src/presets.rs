//! One-call banners: a top line, centered title and subtitle, and a bottom line.

use std::io::{self, Write};

use crate::renderer::Banner;

/// Print a plain default-width banner to stdout.
pub fn render_simple_banner(title: &str, subtitle: &str) -> io::Result<()> {
    render_simple_banner_to(io::stdout().lock(), title, subtitle)
}

/// Print a bold banner with the given border and text colors to stdout.
pub fn render_colorized_banner(
    title: &str,
    subtitle: &str,
    border_color: &str,
    text_color: &str,
) -> io::Result<()> {
    render_colorized_banner_to(io::stdout().lock(), title, subtitle, border_color, text_color)
}

pub fn render_simple_banner_to<W: Write>(writer: W, title: &str, subtitle: &str) -> io::Result<()> {
    let mut banner = Banner::with_writer(writer);
    draw_titled(&mut banner, title, subtitle)
}

pub fn render_colorized_banner_to<W: Write>(
    writer: W,
    title: &str,
    subtitle: &str,
    border_color: &str,
    text_color: &str,
) -> io::Result<()> {
    let mut banner = Banner::with_writer(writer);
    banner
        .set_border_color(border_color)
        .set_text_color(text_color)
        .set_bold(true);
    draw_titled(&mut banner, title, subtitle)
}

// Empty title or subtitle rows are skipped.
fn draw_titled<W: Write>(banner: &mut Banner<W>, title: &str, subtitle: &str) -> io::Result<()> {
    banner.print_top()?;
    if !title.is_empty() {
        banner.print_centered(title)?;
    }
    if !subtitle.is_empty() {
        banner.print_centered(subtitle)?;
    }
    banner.print_bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BOLD, PURPLE, RESET, YELLOW};
    use crate::text::visible_width;

    fn render_simple(title: &str, subtitle: &str) -> Vec<String> {
        let mut out = Vec::new();
        render_simple_banner_to(&mut out, title, subtitle).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn simple_banner_has_four_rows() {
        let lines = render_simple("MY APPLICATION", "Version 1.0.0");
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("MY APPLICATION"));
        assert!(lines[2].contains("Version 1.0.0"));
        assert!(lines[3].starts_with('└'));
        for line in &lines {
            assert_eq!(line.chars().count(), 80);
        }
    }

    #[test]
    fn simple_banner_centers_title() {
        let lines = render_simple("ab", "");
        let expected = format!("│ {}ab{} │", " ".repeat(37), " ".repeat(37));
        assert_eq!(lines[1], expected);
    }

    #[test]
    fn simple_banner_skips_empty_rows() {
        assert_eq!(render_simple("", "").len(), 2);
        assert_eq!(render_simple("title", "").len(), 3);
        assert_eq!(render_simple("", "subtitle").len(), 3);
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn presets_return_sink_errors() {
        let err = render_simple_banner_to(ClosedSink, "t", "s").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        let err = render_colorized_banner_to(ClosedSink, "t", "s", PURPLE, YELLOW).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn colorized_banner_applies_colors_and_bold() {
        let mut out = Vec::new();
        render_colorized_banner_to(&mut out, "AWESOME SERVICE", "", PURPLE, YELLOW).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(PURPLE));
        assert!(lines[0].ends_with(RESET));
        assert!(lines[1].contains(&format!("{BOLD}{YELLOW}")));
        for line in lines {
            assert_eq!(visible_width(line), 80);
        }
    }
}
