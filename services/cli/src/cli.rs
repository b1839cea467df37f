use crate::commands::{run_initialize, run_top_candidates, InitializeArgs, TopCandidatesArgs};
use advocate_ai::config::AppConfig;
use advocate_ai::error::AppError;
use advocate_ai::telemetry;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "advocate-ai",
    about = "Score customers for advocacy potential and plan reference outreach",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score the customer batch and print summary statistics
    Initialize(InitializeArgs),
    /// Rank eligible advocates and produce outreach recommendations
    TopCandidates(TopCandidatesArgs),
}

/// Input overrides shared by every command.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct InputArgs {
    /// Scoring parameters JSON (overrides ADVOCACY_CONFIG_PATH)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Customer data CSV (overrides ADVOCACY_DATA_PATH)
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
}

impl InputArgs {
    pub(crate) fn apply(&mut self, config: &mut AppConfig) {
        if let Some(path) = self.config.take() {
            config.scoring.config_path = path;
        }
        if let Some(path) = self.data.take() {
            config.scoring.data_path = path;
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Initialize(args) => run_initialize(config, args),
        Command::TopCandidates(args) => run_top_candidates(config, args),
    }
}
