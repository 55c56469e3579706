//! CLI entry-point for free-text prompt completion.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{backend, config::Settings};

/// Args for the `get-output` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Prompt forwarded to the backend.
    pub prompt: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    info!(prompt = %args.prompt, "requesting completion");
    let payload = backend::get_output(&settings, &args.prompt).await?;
    println!("{payload}");
    Ok(())
}
