//! Entry point wiring CLI dispatch to the backend client.

use anyhow::Result;
use quizbench::cli::Cli;
use quizbench::config::Settings;
use quizbench::logging;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
