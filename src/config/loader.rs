//! Configuration file loading with precedence handling.

use crate::model::DayZone;
use crate::state::{ListSettings, SortOrder};
use crate::view_state::{ItemHeight, DEFAULT_OVERSCAN};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MEALDESK_CONFIG";
/// Environment variable overriding the overscan.
pub const OVERSCAN_ENV: &str = "MEALDESK_OVERSCAN";
/// Environment variable overriding the calendar zone.
pub const DAY_ZONE_ENV: &str = "MEALDESK_DAY_ZONE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or an invalid value.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/mealdesk/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Items rendered beyond each edge of the viewport.
    #[serde(default)]
    pub overscan: Option<usize>,

    /// Rows per meal event card. Must be at least 1.
    #[serde(default)]
    pub event_card_height: Option<ItemHeight>,

    /// Quiet period before a typed search is applied.
    #[serde(default)]
    pub search_debounce_ms: Option<u64>,

    /// How long a notice stays visible.
    #[serde(default)]
    pub notice_timeout_ms: Option<u64>,

    /// Start with past events hidden.
    #[serde(default)]
    pub hide_past_events: Option<bool>,

    /// Initial sort order (`date-asc`, `date-desc`, `name-asc`, `name-desc`).
    #[serde(default)]
    pub default_sort: Option<SortOrder>,

    /// Zone whose calendar decides "today" (`local`, `utc` or `+HH:MM`).
    #[serde(default)]
    pub day_zone: Option<DayZone>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Items rendered beyond each edge of the viewport.
    pub overscan: usize,
    /// Rows per meal event card.
    pub event_card_height: ItemHeight,
    /// Quiet period before a typed search is applied.
    pub search_debounce: Duration,
    /// How long a notice stays visible.
    pub notice_timeout: Duration,
    /// Start with past events hidden.
    pub hide_past_events: bool,
    /// Initial meal event order.
    pub default_sort: SortOrder,
    /// Zone whose calendar decides "today".
    pub day_zone: DayZone,
    /// Where tracing output goes.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let lists = ListSettings::default();
        Self {
            overscan: DEFAULT_OVERSCAN,
            event_card_height: lists.event_card_height,
            search_debounce: lists.search_debounce,
            notice_timeout: lists.notice_timeout,
            hide_past_events: lists.hide_past_events,
            default_sort: lists.default_sort,
            day_zone: lists.zone,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Settings for the list screens.
    pub fn list_settings(&self) -> ListSettings {
        ListSettings {
            overscan: self.overscan,
            event_card_height: self.event_card_height,
            search_debounce: self.search_debounce,
            notice_timeout: self.notice_timeout,
            hide_past_events: self.hide_past_events,
            default_sort: self.default_sort,
            zone: self.day_zone,
            ..ListSettings::default()
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/mealdesk/mealdesk.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("mealdesk").join("mealdesk.log"),
        None => PathBuf::from("mealdesk.log"),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/mealdesk/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mealdesk").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `MEALDESK_CONFIG` environment variable
/// 3. Default path `~/.config/mealdesk/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// An environment override that was ignored.
///
/// Collected rather than logged on the spot: overrides are resolved before
/// logging is set up.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("ignoring {var}={value:?}: {reason}")]
pub struct EnvWarning {
    /// Variable that held the value.
    pub var: &'static str,
    /// The rejected value.
    pub value: String,
    /// Why it was rejected.
    pub reason: String,
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `MEALDESK_OVERSCAN` and `MEALDESK_DAY_ZONE`. Values that do not
/// parse are skipped and returned as warnings for the caller to log.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> (ResolvedConfig, Vec<EnvWarning>) {
    let mut warnings = Vec::new();
    if let Ok(raw) = std::env::var(OVERSCAN_ENV) {
        match raw.trim().parse::<usize>() {
            Ok(overscan) => config.overscan = overscan,
            Err(e) => warnings.push(EnvWarning {
                var: OVERSCAN_ENV,
                value: raw,
                reason: e.to_string(),
            }),
        }
    }
    if let Ok(raw) = std::env::var(DAY_ZONE_ENV) {
        match raw.parse::<DayZone>() {
            Ok(zone) => config.day_zone = zone,
            Err(e) => warnings.push(EnvWarning {
                var: DAY_ZONE_ENV,
                value: raw,
                reason: e.to_string(),
            }),
        }
    }

    (config, warnings)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        overscan: config.overscan.unwrap_or(defaults.overscan),
        event_card_height: config
            .event_card_height
            .unwrap_or(defaults.event_card_height),
        search_debounce: config
            .search_debounce_ms
            .map_or(defaults.search_debounce, Duration::from_millis),
        notice_timeout: config
            .notice_timeout_ms
            .map_or(defaults.notice_timeout, Duration::from_millis),
        hide_past_events: config.hide_past_events.unwrap_or(defaults.hide_past_events),
        default_sort: config.default_sort.unwrap_or(defaults.default_sort),
        day_zone: config.day_zone.unwrap_or(defaults.day_zone),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--overscan`.
    pub overscan: Option<usize>,
    /// `--sort`.
    pub sort: Option<SortOrder>,
    /// `--hide-past`.
    pub hide_past: Option<bool>,
    /// `--day-zone`.
    pub day_zone: Option<DayZone>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: &CliOverrides) -> ResolvedConfig {
    if let Some(overscan) = cli.overscan {
        config.overscan = overscan;
    }
    if let Some(sort) = cli.sort {
        config.default_sort = sort;
    }
    if let Some(hide_past) = cli.hide_past {
        config.hide_past_events = hide_past;
    }
    if let Some(zone) = cli.day_zone {
        config.day_zone = zone;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
