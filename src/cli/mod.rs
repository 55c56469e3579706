//! Command-line interface wiring for quizbench.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::config::Settings;

pub mod evaluate_answer;
pub mod generate_mcq;
pub mod get_output;
pub mod summarize;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Test harness for the local quiz-generation backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    ///
    /// Without a sub-command the top-level help goes to stdout and the
    /// process exits successfully, before any network activity.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Some(Commands::GetOutput(args)) => get_output::run(args, settings).await,
            Some(Commands::GenerateMcq(args)) => generate_mcq::run(args, settings).await,
            Some(Commands::Summarize(args)) => summarize::run(args, settings).await,
            Some(Commands::EvaluateAnswer(args)) => evaluate_answer::run(args, settings).await,
            None => {
                Self::command().print_help()?;
                Ok(())
            }
        }
    }
}

/// Supported sub-commands, one per backend endpoint.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Complete a free-text prompt.
    GetOutput(get_output::Args),
    /// Generate multiple-choice questions from a passage.
    GenerateMcq(generate_mcq::Args),
    /// Summarize a passage of text.
    Summarize(summarize::Args),
    /// Evaluate an answer against a question.
    EvaluateAnswer(evaluate_answer::Args),
}
