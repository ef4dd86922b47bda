//! Runtime configuration.
//!
//! Settings resolve in three layers: built-in defaults, then environment
//! variables, then explicit overrides from the command line.
//!
//! | Variable            | Setting                         |
//! |---------------------|---------------------------------|
//! | `TASKFLOW_DATA_DIR` | snapshot directory              |
//! | `TASKFLOW_LOG_JSON` | emit JSON log lines (`1`/`0`)   |
//! | `TASKFLOW_LOG`      | `tracing` env-filter directives |

use camino::Utf8PathBuf;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "TASKFLOW_DATA_DIR";
/// Environment variable enabling JSON log output.
pub const LOG_JSON_ENV: &str = "TASKFLOW_LOG_JSON";
/// Environment variable holding the log filter.
pub const LOG_FILTER_ENV: &str = "TASKFLOW_LOG";

const DEFAULT_DATA_DIR: &str = ".taskflow";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Log line encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskflowConfig {
    data_dir: Utf8PathBuf,
    log_format: LogFormat,
    log_filter: String,
}

impl Default for TaskflowConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from(DEFAULT_DATA_DIR),
            log_format: LogFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

/// Explicit settings that take precedence over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Data directory override.
    pub data_dir: Option<Utf8PathBuf>,
    /// Forces JSON logs when `true`.
    pub log_json: bool,
    /// Log filter override.
    pub log_filter: Option<String>,
}

impl TaskflowConfig {
    /// Resolves settings from the process environment and `overrides`.
    #[must_use]
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        Self::from_lookup(|name| std::env::var(name).ok()).with_overrides(overrides)
    }

    /// Resolves settings from an arbitrary variable lookup.
    ///
    /// Unset or unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|value| !value.trim().is_empty())
            .map_or(defaults.data_dir, Utf8PathBuf::from);
        let log_format = match lookup(LOG_JSON_ENV).as_deref().and_then(parse_bool) {
            Some(true) => LogFormat::Json,
            Some(false) | None => defaults.log_format,
        };
        let log_filter = lookup(LOG_FILTER_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_filter);
        Self {
            data_dir,
            log_format,
            log_filter,
        }
    }

    /// Applies explicit overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(data_dir) = overrides.data_dir {
            self.data_dir = data_dir;
        }
        if overrides.log_json {
            self.log_format = LogFormat::Json;
        }
        if let Some(log_filter) = overrides.log_filter {
            self.log_filter = log_filter;
        }
        self
    }

    /// Returns the snapshot directory.
    #[must_use]
    pub fn data_dir(&self) -> &camino::Utf8Path {
        &self.data_dir
    }

    /// Returns the log encoding.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the log filter directives.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
