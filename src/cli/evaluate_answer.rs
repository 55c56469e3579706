//! CLI entry-point for answer evaluation.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{backend, config::Settings};

/// Args for the `evaluate-answer` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// The question text.
    pub question: String,
    /// The answer to be marked.
    pub answer: String,
    /// Maximum marks available for the question.
    pub max_marks: u32,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    info!(max_marks = args.max_marks, "requesting evaluation");
    let payload =
        backend::evaluate_answer(&settings, &args.question, &args.answer, args.max_marks).await?;
    println!("{payload}");
    Ok(())
}
