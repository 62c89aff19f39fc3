//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

// ===== Paths =====

#[test]
fn default_config_path_points_into_mealdesk_dir() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("mealdesk") && path_str.ends_with("config.toml"),
        "got: {path_str}"
    );
}

#[test]
fn default_log_path_ends_with_mealdesk_log() {
    let path = default_log_path();
    assert!(path.to_string_lossy().ends_with("mealdesk.log"), "got: {path:?}");
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    assert_eq!(load_config_file("/nonexistent/path/to/config.toml"), Ok(None));
}

#[test]
fn load_config_file_parses_every_key() {
    let path = write_temp(
        "mealdesk_test_config_full.toml",
        r#"
overscan = 5
event_card_height = 9
search_debounce_ms = 150
notice_timeout_ms = 2000
hide_past_events = true
default_sort = "name-desc"
day_zone = "+10:00"
log_file_path = "/tmp/mealdesk-test.log"
"#,
    );

    let config = load_config_file(&path).unwrap().unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.overscan, Some(5));
    assert_eq!(config.event_card_height, Some(ItemHeight::new(9).unwrap()));
    assert_eq!(config.search_debounce_ms, Some(150));
    assert_eq!(config.notice_timeout_ms, Some(2000));
    assert_eq!(config.hide_past_events, Some(true));
    assert_eq!(config.default_sort, Some(SortOrder::NameDesc));
    assert_eq!(config.day_zone, Some("+10:00".parse().unwrap()));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/mealdesk-test.log"))
    );
}

#[test]
fn load_config_file_handles_partial_config() {
    let path = write_temp("mealdesk_test_config_partial.toml", "overscan = 1\n");
    let config = load_config_file(&path).unwrap().unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.overscan, Some(1));
    assert_eq!(config.default_sort, None);
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = write_temp("mealdesk_test_config_invalid.toml", "overscan = [");
    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn zero_card_height_is_rejected() {
    let path = write_temp("mealdesk_test_config_zero.toml", "event_card_height = 0\n");
    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    match result {
        Err(ConfigError::ParseError { reason, .. }) => {
            assert!(reason.contains("ItemHeight must be >= 1"), "got: {reason}")
        }
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn unknown_sort_order_is_rejected() {
    let path = write_temp("mealdesk_test_config_sort.toml", "default_sort = \"newest\"\n");
    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn unknown_day_zone_is_rejected() {
    let path = write_temp("mealdesk_test_config_zone.toml", "day_zone = \"Mars\"\n");
    let result = load_config_file(&path);
    fs::remove_file(&path).ok();

    match result {
        Err(ConfigError::ParseError { reason, .. }) => {
            assert!(reason.contains("unknown day zone"), "got: {reason}")
        }
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"\n");
    assert!(result.is_err(), "Unknown keys should be rejected");
}

// ===== merge_config =====

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let file = ConfigFile {
        overscan: Some(0),
        search_debounce_ms: Some(50),
        default_sort: Some(SortOrder::DateDesc),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.overscan, 0);
    assert_eq!(resolved.search_debounce, Duration::from_millis(50));
    assert_eq!(resolved.default_sort, SortOrder::DateDesc);
    assert_eq!(resolved.notice_timeout, defaults.notice_timeout);
    assert_eq!(resolved.event_card_height, defaults.event_card_height);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.overscan, 3);
    assert_eq!(config.search_debounce, Duration::from_millis(300));
    assert_eq!(config.notice_timeout, Duration::from_millis(6000));
    assert!(!config.hide_past_events);
    assert_eq!(config.default_sort, SortOrder::DateAsc);
    assert_eq!(config.day_zone, DayZone::Local);
}

#[test]
fn list_settings_carries_resolved_values() {
    let config = ResolvedConfig {
        overscan: 7,
        hide_past_events: true,
        day_zone: DayZone::utc(),
        ..ResolvedConfig::default()
    };
    let settings = config.list_settings();
    assert_eq!(settings.overscan, 7);
    assert_eq!(settings.zone, DayZone::utc());
    assert!(settings.hide_past_events);
    assert_eq!(settings.event_card_height, config.event_card_height);
}

// ===== env overrides =====

#[test]
#[serial(mealdesk_env)]
fn apply_env_overrides_respects_overscan() {
    let _guard = EnvGuard::new(OVERSCAN_ENV);
    env::set_var(OVERSCAN_ENV, "8");

    let (result, warnings) = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.overscan, 8);
    assert!(warnings.is_empty());
}

#[test]
#[serial(mealdesk_env)]
fn apply_env_overrides_returns_garbage_as_warning() {
    let _guard = EnvGuard::new(OVERSCAN_ENV);
    env::set_var(OVERSCAN_ENV, "lots");

    let (result, warnings) = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.overscan, DEFAULT_OVERSCAN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].var, OVERSCAN_ENV);
    assert_eq!(warnings[0].value, "lots");
    assert!(
        warnings[0].to_string().starts_with("ignoring MEALDESK_OVERSCAN=\"lots\": "),
        "got: {}",
        warnings[0]
    );
}

#[test]
#[serial(mealdesk_env)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(OVERSCAN_ENV);
    let _zone = EnvGuard::new(DAY_ZONE_ENV);
    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), (base, Vec::new()));
}

#[test]
#[serial(mealdesk_env)]
fn apply_env_overrides_reads_day_zone() {
    let _guard = EnvGuard::new(DAY_ZONE_ENV);
    env::set_var(DAY_ZONE_ENV, "utc");

    let (result, warnings) = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.day_zone, DayZone::utc());
    assert!(warnings.is_empty());

    env::set_var(DAY_ZONE_ENV, "somewhere");
    let (result, warnings) = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(result.day_zone, DayZone::Local);
    assert_eq!(warnings[0].var, DAY_ZONE_ENV);
}

// ===== precedence =====

#[test]
#[serial(mealdesk_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    let explicit = write_temp("mealdesk_test_explicit.toml", "overscan = 11\n");
    let from_env = write_temp("mealdesk_test_env.toml", "overscan = 22\n");
    env::set_var(CONFIG_ENV, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()));
    fs::remove_file(&explicit).ok();
    fs::remove_file(&from_env).ok();

    assert_eq!(config.unwrap().unwrap().overscan, Some(11));
}

#[test]
#[serial(mealdesk_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    let from_env = write_temp("mealdesk_test_env_only.toml", "overscan = 22\n");
    env::set_var(CONFIG_ENV, &from_env);

    let config = load_config_with_precedence(None);
    fs::remove_file(&from_env).ok();

    assert_eq!(config.unwrap().unwrap().overscan, Some(22));
}

#[test]
#[serial(mealdesk_config)]
fn env_var_pointing_at_missing_file_means_defaults() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    env::set_var(CONFIG_ENV, "/nonexistent/mealdesk/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}

// ===== CLI overrides =====

#[test]
fn cli_overrides_win_over_everything() {
    let base = ResolvedConfig {
        overscan: 9,
        ..ResolvedConfig::default()
    };
    let cli = CliOverrides {
        overscan: Some(1),
        sort: Some(SortOrder::NameAsc),
        hide_past: Some(true),
        day_zone: Some(DayZone::utc()),
    };
    let resolved = apply_cli_overrides(base, &cli);
    assert_eq!(resolved.overscan, 1);
    assert_eq!(resolved.default_sort, SortOrder::NameAsc);
    assert!(resolved.hide_past_events);
    assert_eq!(resolved.day_zone, DayZone::utc());
}

#[test]
fn empty_cli_overrides_change_nothing() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), &CliOverrides::default()), base);
}
