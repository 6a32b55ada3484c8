//! Opt-in trace logging for programs that draw banners.
//!
//! Banner rows go to the terminal, so trace events are written as JSON lines to a
//! separate file instead: `TERMBANNER_TRACE_LOG` if set, else a file in the temp dir.

use std::env;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

const TRACE_LOG_ENV: &str = "TERMBANNER_TRACE_LOG";
const TRACE_LOG_FILE: &str = "termbanner_trace.jsonl";

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Logging switches supplied by the host program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Enable the JSON trace log
    pub logs: bool,
    /// Disable all logging (overrides `logs`)
    pub no_logs: bool,
}

impl TelemetryConfig {
    pub fn enabled(&self) -> bool {
        self.logs && !self.no_logs
    }
}

pub fn tracing_log_path() -> PathBuf {
    env::var_os(TRACE_LOG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join(TRACE_LOG_FILE))
}

fn open_log(path: &Path) -> Option<File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Install the JSON file subscriber. Only the first enabled call per process has
/// any effect; an unopenable log file leaves tracing off.
pub fn init_tracing(config: &TelemetryConfig) {
    if !config.enabled() {
        return;
    }

    TRACING_INIT.get_or_init(|| {
        let Some(file) = open_log(&tracing_log_path()) else {
            return;
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::TRACE)
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_logs_overrides_logs() {
        let config = TelemetryConfig {
            logs: true,
            no_logs: true,
        };
        assert!(!config.enabled());
        assert!(TelemetryConfig {
            logs: true,
            no_logs: false
        }
        .enabled());
        assert!(!TelemetryConfig::default().enabled());
    }

    #[test]
    fn disabled_config_is_a_no_op() {
        init_tracing(&TelemetryConfig::default());
        assert!(TRACING_INIT.get().is_none());
    }

    // Only test that touches TERMBANNER_TRACE_LOG.
    #[test]
    fn trace_log_path_follows_env_override() {
        let custom = env::temp_dir().join("termbanner_custom_trace.jsonl");
        env::set_var(TRACE_LOG_ENV, &custom);
        assert_eq!(tracing_log_path(), custom);

        env::set_var(TRACE_LOG_ENV, "");
        assert_eq!(tracing_log_path(), env::temp_dir().join(TRACE_LOG_FILE));

        env::remove_var(TRACE_LOG_ENV);
        assert_eq!(tracing_log_path(), env::temp_dir().join(TRACE_LOG_FILE));
    }

    #[test]
    fn open_log_fails_for_missing_directory() {
        let path = env::temp_dir()
            .join("termbanner-missing-dir")
            .join("nested")
            .join(TRACE_LOG_FILE);
        assert!(open_log(&path).is_none());
    }
}
