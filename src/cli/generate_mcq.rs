//! CLI entry-point for multiple-choice question generation.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{backend, config::Settings};

/// Args for the `generate-mcq` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Source text for the questions.
    pub text: String,
    /// Number of questions to generate.
    pub number_of_questions: u32,
    /// Difficulty level.
    pub level: u32,
    /// Image associated with the text, resolved by the backend.
    #[arg(long)]
    pub image: Option<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    info!(
        questions = args.number_of_questions,
        level = args.level,
        "requesting MCQ generation"
    );
    let payload = backend::generate_mcq(
        &settings,
        &args.text,
        args.number_of_questions,
        args.level,
        args.image.as_deref(),
    )
    .await?;
    println!("{payload}");
    Ok(())
}
