//! Shared types and configuration for the smdash workspace.

pub mod app_config;
pub mod config;
pub mod error;
pub mod record;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_DATASET_PATH};
pub use error::ConfigError;
pub use record::{PostRecord, Table};
