use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SMDASH_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.dataset_path.to_str(), Some(DEFAULT_DATASET_PATH));
    assert_eq!(cfg.csv_delimiter, b',');
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.currency_symbol, "₹");
    assert_eq!(cfg.chart_width, 40);
}

#[test]
fn dataset_path_override() {
    let mut map = HashMap::new();
    map.insert("SMDASH_DATASET_PATH", "/tmp/posts.csv");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.dataset_path.to_str(), Some("/tmp/posts.csv"));
}

#[test]
fn dataset_path_empty_fails() {
    let mut map = HashMap::new();
    map.insert("SMDASH_DATASET_PATH", "");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SMDASH_DATASET_PATH"),
        "expected InvalidEnvVar(SMDASH_DATASET_PATH), got: {result:?}"
    );
}

#[test]
fn delimiter_semicolon_override() {
    let mut map = HashMap::new();
    map.insert("SMDASH_CSV_DELIMITER", ";");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.csv_delimiter, b';');
}

#[test]
fn delimiter_escaped_tab() {
    let mut map = HashMap::new();
    map.insert("SMDASH_CSV_DELIMITER", "\\t");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.csv_delimiter, b'\t');
}

#[test]
fn delimiter_multi_char_fails() {
    let mut map = HashMap::new();
    map.insert("SMDASH_CSV_DELIMITER", "::");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SMDASH_CSV_DELIMITER"),
        "expected InvalidEnvVar(SMDASH_CSV_DELIMITER), got: {result:?}"
    );
}

#[test]
fn delimiter_letter_fails() {
    let mut map = HashMap::new();
    map.insert("SMDASH_CSV_DELIMITER", "x");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn currency_symbol_override() {
    let mut map = HashMap::new();
    map.insert("SMDASH_CURRENCY_SYMBOL", "$");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.currency_symbol, "$");
}

#[test]
fn chart_width_override() {
    let mut map = HashMap::new();
    map.insert("SMDASH_CHART_WIDTH", "60");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.chart_width, 60);
}

#[test]
fn chart_width_invalid() {
    let mut map = HashMap::new();
    map.insert("SMDASH_CHART_WIDTH", "wide");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SMDASH_CHART_WIDTH"),
        "expected InvalidEnvVar(SMDASH_CHART_WIDTH), got: {result:?}"
    );
}

#[test]
fn chart_width_zero_fails() {
    let mut map = HashMap::new();
    map.insert("SMDASH_CHART_WIDTH", "0");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn chart_width_too_large_fails() {
    let mut map = HashMap::new();
    map.insert("SMDASH_CHART_WIDTH", "500");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn log_level_override() {
    let mut map = HashMap::new();
    map.insert("SMDASH_LOG_LEVEL", "smdash_data=debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "smdash_data=debug");
}

#[test]
fn unset_variables_never_fail() {
    let map = HashMap::new();
    assert!(build_app_config(lookup_from_map(&map)).is_ok());
}

#[test]
fn invalid_value_error_names_variable_and_reason() {
    let mut map = HashMap::new();
    map.insert("SMDASH_CHART_WIDTH", "500");
    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for SMDASH_CHART_WIDTH: must be between 1 and 200, got 500"
    );
}
