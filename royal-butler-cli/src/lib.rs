pub mod cli;
pub mod tui;

pub use cli::{Cli, OverlapArg, RunMode};

use royal_butler_core::config::validate_endpoint;
use royal_butler_core::{
    AnswerService, ButlerConfig, ChatWidget, ConfigError, HttpAnswerService, SubmitOutcome,
};
use serde_json::json;
use std::error::Error;
use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.mode, cli.log_file.as_deref())?;
    info!("Starting royal-butler");
    debug!(
        mode = ?cli.mode,
        config = ?cli.config,
        endpoint = ?cli.endpoint,
        "CLI arguments parsed"
    );

    let config = resolve_config(&cli)?;
    info!(endpoint = config.endpoint.as_str(), "Using answer service");

    let service = HttpAnswerService::from_config(&config);
    let widget = ChatWidget::from_config(service, &config);
    if let Some(token) = &cli.session {
        widget.set_session_token(token.clone());
    }

    match cli.mode {
        RunMode::Tui => {
            info!("Launching chat panel");
            tui::run_chat(widget, &config.title, &config.icon).await?;
        }
        RunMode::Ask => {
            let prompt = load_prompt(&cli)?;
            ask_once(&widget, &prompt).await?;
        }
    }
    info!("Client execution finished");
    Ok(())
}

/// Loads the configuration file and applies CLI overrides.
///
/// A missing default file is fine as long as `--endpoint` is given.
pub fn resolve_config(cli: &Cli) -> Result<ButlerConfig, Box<dyn Error>> {
    let mut config = match ButlerConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(ConfigError::NotFound { path }) if cli.config.is_none() => {
            let endpoint = cli.endpoint.clone().ok_or_else(|| {
                format!(
                    "no configuration at {}; pass --endpoint or --config",
                    path.display()
                )
            })?;
            debug!(path = %path.display(), "No configuration file; using defaults");
            ButlerConfig::new(endpoint)
        }
        Err(err) => return Err(err.into()),
    };

    if let Some(endpoint) = &cli.endpoint {
        validate_endpoint(endpoint)?;
        config.endpoint = endpoint.clone();
    }
    if let Some(overlap) = cli.overlap {
        config.overlap = overlap.into();
    }
    Ok(config)
}

async fn ask_once<S>(widget: &ChatWidget<S>, prompt: &str) -> Result<(), Box<dyn Error>>
where
    S: AnswerService,
{
    let outcome = widget.submit_message(prompt).await;
    let (reply, failed) = match &outcome {
        SubmitOutcome::Replied(message) => (message.text(), false),
        SubmitOutcome::Failed(message) => (message.text(), true),
        SubmitOutcome::Empty | SubmitOutcome::Busy => {
            warn!("Nothing to send");
            return Err("prompt is empty".into());
        }
    };

    let session = widget.snapshot().session_token;
    let output = json!({
        "sessionId": session,
        "reply": reply,
        "failed": failed,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load_prompt(cli: &Cli) -> Result<String, Box<dyn Error>> {
    if !cli.prompt.is_empty() {
        info!("Using prompt provided through CLI arguments");
        return Ok(cli.prompt.join(" "));
    }

    if !io::stdin().is_terminal() {
        info!("Reading prompt from standard input");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    warn!("Prompt not provided via arguments or stdin");
    Err("prompt required via arguments or stdin".into())
}

/// The chat panel owns the terminal, so it only logs when a file is given.
///
/// Only the first call installs a subscriber; later calls leave any log
/// file untouched.
pub fn init_tracing(mode: RunMode, log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    static INIT: std::sync::Once = std::sync::Once::new();

    let mut result = Ok(());
    INIT.call_once(|| {
        let file = match log_file.map(File::create).transpose() {
            Ok(file) => file,
            Err(err) => {
                result = Err(err);
                return;
            }
        };
        let quiet = mode == RunMode::Tui && file.is_none();
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        let builder = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true);
        match file {
            Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
            None => builder.with_writer(io::stderr).init(),
        }
    });
    result.map_err(Into::into)
}
