use crate::{Config, ConfigError};
use crate::tests::{setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_wrong_type_in_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[channel]\nmax_subscribers = \"many\"");

    // When
    let result = Config::load();

    // Then - type errors surface as the TOML variant with the file path
    assert_that!(result, err(anything()));
    match result {
        Err(ConfigError::Toml { path, .. }) => {
            assert!(path.ends_with(crate::CONFIG_FILE_NAME));
        }
        other => panic!("expected Toml error, got {other:?}"),
    }
}

#[test]
#[serial]
fn given_invalid_log_level_in_toml_when_load_then_defaults_to_info() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[logging]\nlevel = \"chatty\"");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_partial_toml_when_load_then_missing_fields_default() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[channel]\nname = \"partial\"");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.channel.name.as_str(), eq("partial"));
    assert_that!(
        config.channel.max_subscribers,
        eq(crate::DEFAULT_MAX_SUBSCRIBERS)
    );
    assert_that!(config.logging.colored, eq(true));
}
