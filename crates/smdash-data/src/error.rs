use thiserror::Error;

/// Failure to turn the source file into a [`smdash_core::Table`].
///
/// Row numbers are 1-based and count data rows only (the header is row 0).
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed delimited data in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {path} is missing required columns: {}", columns.join(", "))]
    MissingColumns { path: String, columns: Vec<String> },

    #[error("row {row}: column {column} is required but empty")]
    MissingValue { row: usize, column: &'static str },

    #[error("row {row}: invalid value {value:?} for column {column}: {reason}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },
}
