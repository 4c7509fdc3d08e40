use clap::Parser;
use royal_butler_cli::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    royal_butler_cli::run(cli).await
}
