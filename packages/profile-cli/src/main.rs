//! Developer harness for the learner profile library
//!
//! Scores questionnaire submissions and renders narratives from stored
//! preference documents. Results go to stdout as JSON (or plain text for
//! narratives); logs go to stderr.

mod config;

use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use learner_profile::{
    construct_user_profile_string, narrative_hash, LearningPreferences, OnboardingResponses,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "learner-profile")]
#[command(about = "Score onboarding questionnaires and render learner narratives")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Score a questionnaire submission (path to JSON, or - for stdin)
    Score { input: String },

    /// Render the narrative for a preferences document (path to JSON, or - for stdin)
    Narrative {
        input: String,

        /// Emit JSON with the narrative and its cache key
        #[arg(long)]
        hash: bool,
    },
}

#[derive(Serialize)]
struct NarrativeOutput {
    narrative: String,
    hash: String,
}

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let pretty = cli.pretty || config.pretty;

    let output = match &cli.command {
        Commands::Score { input } => cmd_score(&read_input(input)?, pretty)?,
        Commands::Narrative { input, hash } => cmd_narrative(&read_input(input)?, *hash, pretty)?,
    };

    println!("{}", output);
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
}

fn cmd_score(json: &str, pretty: bool) -> Result<String> {
    let responses: OnboardingResponses =
        serde_json::from_str(json).context("Invalid questionnaire JSON")?;

    let profile = responses
        .score()
        .context("Questionnaire failed validation")?;

    tracing::info!("Scored questionnaire");
    to_json(&profile, pretty)
}

fn cmd_narrative(json: &str, with_hash: bool, pretty: bool) -> Result<String> {
    let prefs: LearningPreferences =
        serde_json::from_str(json).context("Invalid preferences JSON")?;

    let narrative = construct_user_profile_string(&prefs);
    tracing::info!(length = narrative.len(), "Rendered narrative");

    if !with_hash {
        return Ok(narrative);
    }

    let hash = narrative_hash(&narrative);
    to_json(&NarrativeOutput { narrative, hash }, pretty)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize output")
}
