use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required field 'endpoint' in configuration")]
    MissingEndpoint,

    #[error("endpoint '{endpoint}' is not a valid http(s) URL: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("'min_input_rows' must be at least 1")]
    InvalidMinInputRows,
}
