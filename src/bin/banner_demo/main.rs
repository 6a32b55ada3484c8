//! `banner-demo`: prints a tour of termbanner's styles, colors and layouts.

mod config;
mod showcase;

use anyhow::{Context, Result};
use std::io;
use termbanner::init_tracing;

use crate::config::DemoConfig;

fn main() -> Result<()> {
    let config = DemoConfig::parse_args()?;
    init_tracing(&config.telemetry());
    tracing::debug!(section = ?config.section, style = %config.style, "starting banner demo");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    showcase::run(&config, &mut out).context("failed to write banner showcase")
}
