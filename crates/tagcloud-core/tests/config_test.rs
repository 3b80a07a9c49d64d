//! Tests for the tag cloud configuration system.

use std::sync::Mutex;

use tagcloud_core::config::{ConfigOverrides, TagCloudConfig};
use tagcloud_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_VARS: [&str; 7] = [
    "TAGCLOUD_WEIGHT_FACTOR",
    "TAGCLOUD_MIN_FONT_SIZE",
    "TAGCLOUD_MAX_FONT_SIZE",
    "TAGCLOUD_CLUSTER_CUTOFF",
    "TAGCLOUD_MAX_WORDS",
    "TAGCLOUD_CLUSTERING",
    "TAGCLOUD_USE_STOP_WORDS",
];

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear TAGCLOUD_ env vars and point HOME at an empty directory so the
/// developer's own user config never leaks into a test.
fn isolate_env(home: &std::path::Path) {
    for key in ENV_VARS {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
}

#[test]
fn defaults_apply_without_files() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = TagCloudConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.cloud.effective_weight_factor(), 1.0);
    assert_eq!(config.cloud.effective_min_font_size(), 12);
    assert_eq!(config.cloud.effective_max_font_size(), 64);
    assert_eq!(config.cloud.effective_cluster_cutoff(), 1.0);
    assert_eq!(config.cloud.effective_max_words(), 250);
    assert!(config.cloud.effective_clustering());
    assert!(config.text.effective_use_stop_words());
}

#[test]
fn layered_resolution_overrides_env_project_user() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".tagcloud")).unwrap();
    std::fs::write(
        home.path().join(".tagcloud").join("config.toml"),
        r#"
[cloud]
max_words = 40
min_font_size = 8

[text]
delimiters = ["|"]
"#,
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("tagcloud.toml"),
        r#"
[cloud]
max_words = 80
weight_factor = 0.5
"#,
    )
    .unwrap();

    std::env::set_var("TAGCLOUD_WEIGHT_FACTOR", "0.25");

    let overrides = ConfigOverrides {
        max_words: Some(10),
        ..Default::default()
    };
    let config = TagCloudConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Host override beats project and user.
    assert_eq!(config.cloud.max_words, Some(10));
    // Env beats project.
    assert_eq!(config.cloud.weight_factor, Some(0.25));
    // User value survives where nothing else sets it.
    assert_eq!(config.cloud.min_font_size, Some(8));
    assert_eq!(config.text.delimiters, vec!["|".to_string()]);

    isolate_env(home.path());
}

#[test]
fn malformed_env_value_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("TAGCLOUD_MAX_WORDS", "lots");
    let dir = tempdir();
    let err = TagCloudConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvValue { ref var, .. } if var == "TAGCLOUD_MAX_WORDS"));

    isolate_env(home.path());
}

#[test]
fn invalid_toml_syntax_is_parse_error() {
    let err = TagCloudConfig::from_toml("[cloud\nweight_factor = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn weight_factor_outside_unit_interval_fails_validation() {
    let err = TagCloudConfig::from_toml("[cloud]\nweight_factor = 1.5\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "cloud.weight_factor"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn inverted_font_range_fails_validation() {
    let err = TagCloudConfig::from_toml("[cloud]\nmin_font_size = 40\nmax_font_size = 20\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn negative_cutoff_and_zero_max_words_fail_validation() {
    assert!(TagCloudConfig::from_toml("[cloud]\ncluster_cutoff = -0.1\n").is_err());
    assert!(TagCloudConfig::from_toml("[cloud]\nmax_words = 0\n").is_err());
    assert!(TagCloudConfig::from_toml("[text]\ndelimiters = [\"\"]\n").is_err());
}

#[test]
fn unrecognized_keys_are_accepted() {
    let config = TagCloudConfig::from_toml(
        r#"
[cloud]
weight_factor = 0.3
layout = "spiral"

[render]
palette = "viridis"
"#,
    )
    .unwrap();
    assert_eq!(config.cloud.weight_factor, Some(0.3));
}

#[test]
fn config_round_trips_through_toml() {
    let original = TagCloudConfig::from_toml(
        r#"
[cloud]
weight_factor = 0.75
cluster_cutoff = 0.2
clustering = false

[text]
use_stop_words = false
extra_stop_words = ["protein"]
delimiters = ["x", "::"]
"#,
    )
    .unwrap();

    let serialized = original.to_toml().unwrap();
    let reloaded = TagCloudConfig::from_toml(&serialized).unwrap();
    assert_eq!(original, reloaded);
}
