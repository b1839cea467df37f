use crate::cli::InputArgs;
use advocate_ai::config::AppConfig;
use advocate_ai::error::AppError;
use advocate_ai::workflows::advocacy::{
    render_batch_summary, render_top_candidates, write_recommendations_to_path, AdvocacyPipeline,
    CustomerDataLoader, CustomerRecord, ScoringConfig, CONSOLE_CANDIDATE_LIMIT,
};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct InitializeArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TopCandidatesArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,
    /// Write recommendations to this CSV file instead of the console
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Maximum number of candidates to shortlist (overrides ADVOCACY_TOP_N)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) top_n: Option<u32>,
}

pub(crate) fn run_initialize(
    mut config: AppConfig,
    mut args: InitializeArgs,
) -> Result<(), AppError> {
    args.input.apply(&mut config);
    println!("Initializing Customer Advocacy Scoring System...");

    let (pipeline, records) = load_inputs(&config)?;
    let run = pipeline.run(&records, config.scoring.top_n);

    println!("{}", render_batch_summary(&run.summary));
    Ok(())
}

pub(crate) fn run_top_candidates(
    mut config: AppConfig,
    mut args: TopCandidatesArgs,
) -> Result<(), AppError> {
    args.input.apply(&mut config);
    if let Some(top_n) = args.top_n {
        config.scoring.top_n = top_n as usize;
    }

    let (pipeline, records) = load_inputs(&config)?;
    let run = pipeline.run(&records, config.scoring.top_n);

    match args.output {
        Some(path) => {
            write_recommendations_to_path(&path, &run.recommendations)?;
            info!(
                path = %path.display(),
                rows = run.recommendations.len(),
                "recommendations written"
            );
            println!("Top candidates saved to {}", path.display());
        }
        None => {
            println!();
            println!(
                "{}",
                render_top_candidates(&run.recommendations, CONSOLE_CANDIDATE_LIMIT)
            );
        }
    }

    Ok(())
}

fn load_inputs(
    config: &AppConfig,
) -> Result<(AdvocacyPipeline, Vec<CustomerRecord>), AppError> {
    let scoring_config = ScoringConfig::from_path(&config.scoring.config_path)?;
    let records = CustomerDataLoader::from_path(&config.scoring.data_path)?;
    info!(
        environment = ?config.environment,
        config = %config.scoring.config_path.display(),
        data = %config.scoring.data_path.display(),
        records = records.len(),
        "scoring inputs loaded"
    );

    Ok((AdvocacyPipeline::new(scoring_config), records))
}
