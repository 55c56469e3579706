//! CLI entry-point for text summarization.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{backend, config::Settings};

/// Args for the `summarize` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Text to be summarized.
    pub text: String,
    /// Image associated with the text, resolved by the backend.
    #[arg(long)]
    pub image: Option<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    info!(chars = args.text.len(), "requesting summary");
    let payload = backend::summarize(&settings, &args.text, args.image.as_deref()).await?;
    println!("{payload}");
    Ok(())
}
