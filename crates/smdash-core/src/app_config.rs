use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Delimited dataset read by the loader.
    pub dataset_path: PathBuf,
    pub csv_delimiter: u8,
    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Printed in front of the ad spend and revenue cards.
    pub currency_symbol: String,
    /// Width in characters of the longest bar in terminal charts.
    pub chart_width: usize,
}
