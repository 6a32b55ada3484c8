//! Showcase sections printed by `banner-demo`.

use anyhow::Result;
use std::io::Write;
use termbanner::color::{BLUE, CYAN, GREEN, PURPLE, RED, YELLOW};
use termbanner::{
    render_colorized_banner_to, render_simple_banner_to, Banner, BorderStyle,
};

use crate::config::{DemoConfig, Section};

const STYLE_SAMPLE_WIDTH: usize = 60;
const COMPLEX_WIDTH: usize = 70;

/// With color output off, colors collapse to "" and bold is dropped, so no
/// escape sequence reaches the terminal.
struct Paint {
    enabled: bool,
}

impl Paint {
    fn pick<'a>(&self, color: &'a str) -> &'a str {
        if self.enabled {
            color
        } else {
            ""
        }
    }

    fn bold(&self, wanted: bool) -> bool {
        self.enabled && wanted
    }
}

pub(crate) fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let paint = Paint {
        enabled: config.use_color(),
    };
    render_sections(config, &paint, out)
}

fn render_sections<W: Write>(config: &DemoConfig, paint: &Paint, out: &mut W) -> Result<()> {
    let all = config.section == Section::All;

    if all || config.section == Section::Simple {
        simple(out)?;
    }
    if all || config.section == Section::Colorized {
        colorized(out, paint)?;
    }
    if all || config.section == Section::Custom {
        custom(out, config, paint)?;
    }
    if all || config.section == Section::Styles {
        styles(out, paint)?;
    }
    if all || config.section == Section::Complex {
        complex(out, paint)?;
    }
    out.flush()?;
    Ok(())
}

fn heading<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "\n=== {title} ===")?;
    Ok(())
}

fn simple<W: Write>(out: &mut W) -> Result<()> {
    heading(out, "Simple Banner")?;
    render_simple_banner_to(&mut *out, "MY APPLICATION", "Version 1.0.0")?;
    Ok(())
}

fn colorized<W: Write>(out: &mut W, paint: &Paint) -> Result<()> {
    heading(out, "Colorized Banner")?;
    if !paint.enabled {
        render_simple_banner_to(&mut *out, "AWESOME SERVICE", "High Performance Server")?;
        return Ok(());
    }
    render_colorized_banner_to(
        &mut *out,
        "AWESOME SERVICE",
        "High Performance Server",
        PURPLE,
        YELLOW,
    )?;
    Ok(())
}

fn custom<W: Write>(out: &mut W, config: &DemoConfig, paint: &Paint) -> Result<()> {
    heading(out, "Custom Banner with Details")?;
    let mut banner = Banner::with_writer(&mut *out);
    banner
        .set_style(config.border_style()?)
        .set_width(config.width)
        .set_border_color(paint.pick(&config.border_color()?))
        .set_text_color(paint.pick(&config.text_color()?))
        .set_bold(paint.bold(!config.no_bold));

    banner.print_top()?;
    banner.print_centered("CUSTOM APPLICATION")?;
    banner.print_centered("Enterprise Edition")?;
    banner.print_separator()?;
    banner.print_key_value("Version", env!("CARGO_PKG_VERSION"), 12)?;
    banner.print_key_value("Environment", "Production", 12)?;
    banner.print_key_value("Port", "8080", 12)?;
    banner.print_bottom()?;
    Ok(())
}

fn styles<W: Write>(out: &mut W, paint: &Paint) -> Result<()> {
    heading(out, "Different Styles")?;
    let samples = [
        ("Simple Style", BorderStyle::Simple, GREEN),
        ("Double Style", BorderStyle::Double, BLUE),
        ("Bold Style", BorderStyle::Bold, RED),
        ("Round Style", BorderStyle::Round, PURPLE),
        ("ASCII Style", BorderStyle::Ascii, ""),
    ];

    for (name, style, color) in samples {
        writeln!(out, "\n{name}:")?;
        let mut banner = Banner::with_writer(&mut *out);
        banner
            .set_style(style)
            .set_border_color(paint.pick(color))
            .set_width(STYLE_SAMPLE_WIDTH);

        banner.print_top()?;
        banner.print_centered("Demo Application")?;
        banner.print_separator()?;
        banner.print_left("Left aligned text")?;
        banner.print_centered("Center aligned text")?;
        banner.print_right("Right aligned text")?;
        banner.print_bottom()?;
    }
    Ok(())
}

fn complex<W: Write>(out: &mut W, paint: &Paint) -> Result<()> {
    heading(out, "Complex Layout")?;
    let mut banner = Banner::with_writer(&mut *out);
    banner
        .set_style(BorderStyle::Bold)
        .set_border_color(paint.pick(PURPLE))
        .set_text_color(paint.pick(CYAN))
        .set_width(COMPLEX_WIDTH);

    banner.print_top()?;
    banner.print_empty_line()?;
    banner.print_centered("SERVICE MONITOR")?;
    banner.print_empty_line()?;
    banner.print_separator()?;
    banner.print_left("Status: Online")?;
    banner.print_left("Requests: 1,234,567")?;
    banner.print_left("Uptime: 99.99%")?;
    banner.print_separator()?;
    banner.print_key_value("CPU", "45%", 10)?;
    banner.print_key_value("Memory", "2.3GB", 10)?;
    banner.print_key_value("Disk", "120GB", 10)?;
    banner.print_bottom()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use termbanner::color::BOLD;
    use termbanner::DEFAULT_WIDTH;

    fn render_with(argv: Vec<&str>) -> String {
        let config = DemoConfig::parse_from(argv);
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn render_colored(args: &[&str]) -> String {
        let mut argv = vec!["banner-demo"];
        argv.extend_from_slice(args);
        let config = DemoConfig::parse_from(argv);
        let mut out = Vec::new();
        render_sections(&config, &Paint { enabled: true }, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn render(args: &[&str]) -> String {
        let mut argv = vec!["banner-demo", "--no-color"];
        argv.extend_from_slice(args);
        render_with(argv)
    }

    #[test]
    fn paint_drops_bold_when_color_is_off() {
        let off = Paint { enabled: false };
        assert_eq!(off.pick(PURPLE), "");
        assert!(!off.bold(true));
        let on = Paint { enabled: true };
        assert_eq!(on.pick(PURPLE), PURPLE);
        assert!(on.bold(true));
        assert!(!on.bold(false));
    }

    #[test]
    fn colorized_section_without_color_has_no_bold_escape() {
        let output = render(&["--section", "colorized"]);
        assert!(!output.contains('\x1b'));
        assert!(output.contains("AWESOME SERVICE"));
        assert!(output.contains("High Performance Server"));
    }

    #[test]
    fn custom_section_without_color_keeps_rows_plain() {
        let output = render(&["--section", "custom"]);
        assert!(!output.contains('\x1b'));
        let row = output
            .lines()
            .find(|line| line.contains("Environment:"))
            .expect("environment row");
        assert_eq!(row.chars().count(), DEFAULT_WIDTH);
    }

    #[test]
    fn colored_custom_section_is_bold_unless_disabled() {
        let bold = render_colored(&["--section", "custom"]);
        assert!(bold.contains(BOLD));
        let plain = render_colored(&["--section", "custom", "--no-bold"]);
        assert!(!plain.contains(BOLD));
        assert!(plain.contains(CYAN));
    }

    #[test]
    fn no_color_output_has_no_escape_codes() {
        let output = render(&[]);
        assert!(!output.contains("\x1b["));
        assert!(output.contains("MY APPLICATION"));
        assert!(output.contains("SERVICE MONITOR"));
    }

    #[test]
    fn styles_section_draws_every_style() {
        let output = render(&["--section", "styles"]);
        for corner in ['┌', '╔', '┏', '╭', '+'] {
            assert!(output.contains(corner), "missing {corner}");
        }
        let rows: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("aligned text"))
            .collect();
        assert_eq!(rows.len(), 15);
        assert!(rows.iter().all(|row| row.chars().count() == STYLE_SAMPLE_WIDTH));
    }

    #[test]
    fn custom_section_honors_style_and_width() {
        let output = render(&["--section", "custom", "--style", "ascii", "--width", "30"]);
        let top = output
            .lines()
            .find(|line| line.starts_with('+'))
            .expect("ascii top line");
        assert_eq!(top, format!("+{}+", "-".repeat(28)));
        assert!(output.contains("| Port:        8080          |"));
    }
}
