use super::error::ConfigError;
use super::{ButlerConfig, OverlapPolicy};
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use reqwest::Url;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    endpoint: Option<String>,
    api_key_env: Option<String>,
    title: Option<String>,
    icon: Option<String>,
    welcome_message: Option<String>,
    apology_message: Option<String>,
    formatting_error_message: Option<String>,
    open_scroll_delay_ms: Option<u64>,
    min_input_rows: Option<u16>,
    overlap: Option<OverlapPolicy>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path
pub fn load_config(path: Option<&Path>) -> Result<ButlerConfig, ConfigError> {
    ensure_env_loaded();
    let config_path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
    debug!(path = %config_path.display(), "Reading widget configuration file");

    let content = fs::read_to_string(config_path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: config_path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: config_path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, config_path)
}

/// Parse and validate TOML text; `path` is only used for error reporting
pub fn parse_config(content: &str, path: &Path) -> Result<ButlerConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_and_build(parsed)
}

/// Checks that `endpoint` is an absolute http(s) URL
pub fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };
    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

fn validate_and_build(parsed: RawConfig) -> Result<ButlerConfig, ConfigError> {
    let endpoint = parsed
        .endpoint
        .filter(|e| !e.trim().is_empty())
        .ok_or(ConfigError::MissingEndpoint)?;
    validate_endpoint(&endpoint)?;

    let mut config = ButlerConfig::new(endpoint);
    if let Some(rows) = parsed.min_input_rows {
        if rows == 0 {
            return Err(ConfigError::InvalidMinInputRows);
        }
        config.min_input_rows = rows;
    }

    config.api_key_env = parsed.api_key_env;
    if let Some(title) = parsed.title {
        config.title = title;
    }
    if let Some(icon) = parsed.icon {
        config.icon = icon;
    }
    // An empty welcome text disables the greeting.
    if let Some(welcome) = parsed.welcome_message {
        config.welcome_message = Some(welcome).filter(|w| !w.trim().is_empty());
    }
    if let Some(apology) = parsed.apology_message {
        config.apology_message = apology;
    }
    if let Some(message) = parsed.formatting_error_message {
        config.formatting_error_message = message;
    }
    if let Some(delay) = parsed.open_scroll_delay_ms {
        config.open_scroll_delay_ms = delay;
    }
    if let Some(overlap) = parsed.overlap {
        config.overlap = overlap;
    }

    Ok(config)
}
