use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_DATASET_PATH: &str = "./data/social_media_engagement.csv";

const MAX_CHART_WIDTH: usize = 200;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("SMDASH_ENV", "development"))?;

    let dataset_path = PathBuf::from(or_default("SMDASH_DATASET_PATH", DEFAULT_DATASET_PATH));
    if dataset_path.as_os_str().is_empty() {
        return Err(invalid("SMDASH_DATASET_PATH", "must be non-empty".to_string()));
    }

    let csv_delimiter = parse_delimiter(&or_default("SMDASH_CSV_DELIMITER", ","))
        .map_err(|reason| invalid("SMDASH_CSV_DELIMITER", reason))?;

    let log_level = or_default("SMDASH_LOG_LEVEL", "info");
    let currency_symbol = or_default("SMDASH_CURRENCY_SYMBOL", "₹");

    let chart_width = or_default("SMDASH_CHART_WIDTH", "40")
        .parse::<usize>()
        .map_err(|e| invalid("SMDASH_CHART_WIDTH", e.to_string()))?;
    if chart_width == 0 || chart_width > MAX_CHART_WIDTH {
        return Err(invalid(
            "SMDASH_CHART_WIDTH",
            format!("must be between 1 and {MAX_CHART_WIDTH}, got {chart_width}"),
        ));
    }

    Ok(AppConfig {
        env,
        dataset_path,
        csv_delimiter,
        log_level,
        currency_symbol,
        chart_width,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SMDASH_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Accepts a single ASCII character, or the literal `\t` for tab.
fn parse_delimiter(raw: &str) -> Result<u8, String> {
    if raw == "\\t" {
        return Ok(b'\t');
    }
    match raw.as_bytes() {
        [b] if b.is_ascii() && !b.is_ascii_alphanumeric() && *b != b'"' && *b != b'\n' => Ok(*b),
        _ => Err(format!(
            "expected a single non-alphanumeric ASCII character, got {raw:?}"
        )),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
