pub mod error;
pub mod loader;

use crate::constants::{
    DEFAULT_APOLOGY_MESSAGE, DEFAULT_FORMATTING_ERROR_MESSAGE, DEFAULT_ICON,
    DEFAULT_MIN_INPUT_ROWS, DEFAULT_OPEN_SCROLL_DELAY_MS, DEFAULT_TITLE, DEFAULT_WELCOME_MESSAGE,
};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub use crate::constants::CONFIG_PATH;
pub use error::ConfigError;
pub use loader::{ensure_env_loaded, load_config, parse_config, validate_endpoint};

/// What happens when the user submits while a reply is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Send anyway. The thinking flag stays up until every request resolves
    /// and the last reply to arrive decides the session token.
    #[default]
    Allow,
    /// Refuse the submission and leave the input untouched.
    Reject,
}

/// Validated widget configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButlerConfig {
    pub endpoint: String,
    /// Name of the environment variable holding a bearer token
    pub api_key_env: Option<String>,
    pub title: String,
    pub icon: String,
    pub welcome_message: Option<String>,
    pub apology_message: String,
    pub formatting_error_message: String,
    pub open_scroll_delay_ms: u64,
    pub min_input_rows: u16,
    pub overlap: OverlapPolicy,
}

impl ButlerConfig {
    /// Defaults for everything but the endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key_env: None,
            title: DEFAULT_TITLE.to_string(),
            icon: DEFAULT_ICON.to_string(),
            welcome_message: Some(DEFAULT_WELCOME_MESSAGE.to_string()),
            apology_message: DEFAULT_APOLOGY_MESSAGE.to_string(),
            formatting_error_message: DEFAULT_FORMATTING_ERROR_MESSAGE.to_string(),
            open_scroll_delay_ms: DEFAULT_OPEN_SCROLL_DELAY_MS,
            min_input_rows: DEFAULT_MIN_INPUT_ROWS,
            overlap: OverlapPolicy::default(),
        }
    }

    /// Load configuration from file, `config/butler.toml` when `path` is None
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_config(path)
    }

    /// Bearer token read from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        let var = self.api_key_env.as_deref()?;
        ensure_env_loaded();
        std::env::var(var).ok().filter(|v| !v.trim().is_empty())
    }

    pub fn open_scroll_delay(&self) -> Duration {
        Duration::from_millis(self.open_scroll_delay_ms)
    }
}
