//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tail::{StartPosition, TailOptions, DEFAULT_POLL_INTERVAL};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log file tailing.
    pub tail: TailConfig,
    /// Record decoding and dispatch.
    pub parser: ParserConfig,
}

/// Settings for the log tailer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailConfig {
    /// Log file to follow. Falls back to [`default_log_path`].
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Where to start reading.
    #[serde(default)]
    pub start: StartPosition,
    /// Keep polling at end of file.
    #[serde(default = "default_follow")]
    pub follow: bool,
    /// Delay between polls in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_follow() -> bool {
    true
}

fn default_poll_interval_ms() -> u64 {
    u64::try_from(DEFAULT_POLL_INTERVAL.as_millis()).unwrap_or(250)
}

impl Default for TailConfig {
    fn default() -> Self {
        Self {
            path: None,
            start: StartPosition::default(),
            follow: default_follow(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl TailConfig {
    /// Tailer options described by this config.
    #[must_use]
    pub fn options(&self) -> TailOptions {
        TailOptions {
            start: self.start,
            follow: self.follow,
            poll_interval: Duration::from_millis(self.poll_interval_ms.max(1)),
        }
    }

    /// The configured path, or the platform default.
    #[must_use]
    pub fn resolve_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(default_log_path)
    }
}

/// Settings for decoding and dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Log outgoing messages whose JSON fails to decode at warn level.
    #[serde(default = "default_true")]
    pub log_outgoing_failures: bool,
    /// Emit unmatched free text as `RawLine` events.
    #[serde(default = "default_true")]
    pub emit_raw_lines: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            log_outgoing_failures: true,
            emit_raw_lines: true,
        }
    }
}

/// Where the game client writes its log on this platform.
///
/// Returns `None` on platforms without a known location.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        // LocalLow sits next to the Local data dir
        dirs::data_local_dir().and_then(|local| {
            local.parent().map(|app_data| {
                app_data
                    .join("LocalLow")
                    .join("Wizards Of The Coast")
                    .join("MTGA")
                    .join("output_log.txt")
            })
        })
    } else if cfg!(target_os = "macos") {
        dirs::home_dir().map(|home| {
            home.join("Library")
                .join("Logs")
                .join("Wizards Of The Coast")
                .join("MTGA")
                .join("Player.log")
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.tail.path.is_none());
        assert_eq!(config.tail.start, StartPosition::End);
        assert!(config.tail.follow);
        assert_eq!(config.tail.poll_interval_ms, 250);
        assert!(config.parser.emit_raw_lines);
        assert!(config.parser.log_outgoing_failures);
    }

    #[test]
    fn test_parse_toml_config() {
        let toml_str = r#"
            [tail]
            path = "/tmp/output_log.txt"
            start = "beginning"
            follow = false
            poll_interval_ms = 50

            [parser]
            emit_raw_lines = false
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tail.path, Some(PathBuf::from("/tmp/output_log.txt")));
        assert_eq!(config.tail.start, StartPosition::Beginning);
        assert!(!config.tail.follow);
        assert!(!config.parser.emit_raw_lines);
        assert!(config.parser.log_outgoing_failures);

        let options = config.tail.options();
        assert_eq!(options.poll_interval, Duration::from_millis(50));
        assert!(!options.follow);
    }

    #[test]
    fn test_partial_tail_section_keeps_defaults() {
        let config: Config = toml::from_str("[tail]\nstart = \"beginning\"\n").unwrap();
        assert!(config.tail.follow);
        assert_eq!(config.tail.poll_interval_ms, 250);
    }

    #[test]
    fn test_zero_poll_interval_clamped() {
        let config = TailConfig {
            poll_interval_ms: 0,
            ..TailConfig::default()
        };
        assert_eq!(config.options().poll_interval, Duration::from_millis(1));
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = TailConfig {
            path: Some(PathBuf::from("/logs/Player.log")),
            ..TailConfig::default()
        };
        assert_eq!(config.resolve_path(), Some(PathBuf::from("/logs/Player.log")));
    }
}
