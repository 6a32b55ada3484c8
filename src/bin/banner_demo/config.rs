use anyhow::{anyhow, bail, Result};
use clap::{Parser, ValueEnum};
use std::env;
use termbanner::{color::parse_color, BorderStyle, TelemetryConfig, DEFAULT_WIDTH};

const MIN_WIDTH: usize = 4;
const MAX_WIDTH: usize = 500;

/// Which part of the showcase to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub(crate) enum Section {
    #[default]
    All,
    Simple,
    Colorized,
    Custom,
    Styles,
    Complex,
}

#[derive(Debug, Parser, Clone)]
#[command(about = "termbanner showcase", author, version)]
pub(crate) struct DemoConfig {
    /// Showcase section to print
    #[arg(long, value_enum, default_value_t = Section::All)]
    pub(crate) section: Section,

    /// Border style for the custom banner (simple, double, bold, round, ascii)
    #[arg(long, default_value = "double")]
    pub(crate) style: String,

    /// Total width of the custom banner, borders included
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub(crate) width: usize,

    /// Border color for the custom banner (palette name or #rrggbb)
    #[arg(long = "border-color", default_value = "cyan")]
    pub(crate) border_color: String,

    /// Text color for the custom banner (palette name or #rrggbb)
    #[arg(long = "text-color", default_value = "white")]
    pub(crate) text_color: String,

    /// Render custom banner text without bold
    #[arg(long = "no-bold", default_value_t = false)]
    pub(crate) no_bold: bool,

    /// Disable all ANSI colors (also honored via NO_COLOR)
    #[arg(long = "no-color", default_value_t = false)]
    pub(crate) no_color: bool,

    /// Enable JSON trace logging
    #[arg(long = "logs", env = "TERMBANNER_LOGS", default_value_t = false)]
    pub(crate) logs: bool,

    /// Disable all logging (overrides --logs)
    #[arg(long = "no-logs", env = "TERMBANNER_NO_LOGS", default_value_t = false)]
    pub(crate) no_logs: bool,
}

impl DemoConfig {
    /// Parse CLI arguments and validate them right away.
    pub(crate) fn parse_args() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
            bail!(
                "--width must be between {MIN_WIDTH} and {MAX_WIDTH}, got {}",
                self.width
            );
        }
        self.border_style()?;
        resolve_color("--border-color", &self.border_color)?;
        resolve_color("--text-color", &self.text_color)?;
        Ok(())
    }

    pub(crate) fn border_style(&self) -> Result<BorderStyle> {
        BorderStyle::from_name(&self.style).ok_or_else(|| {
            anyhow!(
                "--style must be one of {}, got '{}'",
                BorderStyle::available().join(", "),
                self.style
            )
        })
    }

    pub(crate) fn use_color(&self) -> bool {
        !self.no_color && env::var_os("NO_COLOR").is_none()
    }

    pub(crate) fn border_color(&self) -> Result<String> {
        resolve_color("--border-color", &self.border_color)
    }

    pub(crate) fn text_color(&self) -> Result<String> {
        resolve_color("--text-color", &self.text_color)
    }

    pub(crate) fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            logs: self.logs,
            no_logs: self.no_logs,
        }
    }
}

fn resolve_color(flag: &str, name: &str) -> Result<String> {
    parse_color(name).ok_or_else(|| anyhow!("{flag} has unknown color '{name}'"))
}
