use clap::{Parser, ValueEnum};
use royal_butler_core::OverlapPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "royal-butler",
    version,
    about = "Chat with the Royal Brew butler from your terminal"
)]
pub struct Cli {
    /// Configuration file (defaults to config/butler.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Answer service URL; overrides the configuration file
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Resume an existing conversation
    #[arg(long)]
    pub session: Option<String>,
    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Policy for submissions made while a reply is pending
    #[arg(long, value_enum)]
    pub overlap: Option<OverlapArg>,
    #[arg(long, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
    /// Message to send in `ask` mode; read from stdin when omitted
    #[arg()]
    pub prompt: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Interactive chat panel
    Tui,
    /// Send one message and print the reply
    Ask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverlapArg {
    Allow,
    Reject,
}

impl From<OverlapArg> for OverlapPolicy {
    fn from(arg: OverlapArg) -> Self {
        match arg {
            OverlapArg::Allow => OverlapPolicy::Allow,
            OverlapArg::Reject => OverlapPolicy::Reject,
        }
    }
}
