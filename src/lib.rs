//! Bordered, colorized text banners for terminal output.
//!
//! ```no_run
//! use termbanner::{color, Banner, BorderStyle};
//!
//! let mut banner = Banner::new();
//! banner
//!     .set_style(BorderStyle::Double)
//!     .set_border_color(color::CYAN)
//!     .set_width(40);
//! banner.print_top()?;
//! banner.print_centered("SERVICE MONITOR")?;
//! banner.print_separator()?;
//! banner.print_key_value("Port", "8080", 10)?;
//! banner.print_bottom()?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod border;
pub mod color;
pub mod presets;
pub mod renderer;
pub mod telemetry;
pub mod text;

pub use border::{BorderSet, BorderStyle};
pub use color::colorize;
pub use presets::{
    render_colorized_banner, render_colorized_banner_to, render_simple_banner,
    render_simple_banner_to,
};
pub use renderer::{key_value_text, Banner, DEFAULT_WIDTH};
pub use telemetry::{init_tracing, TelemetryConfig};
pub use text::Alignment;
