#[macro_use]
extern crate tracing;

pub mod args;
mod logging;

pub use args::{
    Cli,
    CollectArgs,
    Command,
};
pub use logging::{
    init_errors,
    init_logging,
};

use color_eyre::{
    eyre::Context,
    Result,
};
use lfx_insights_collector::LeaderboardClient;
use lfx_insights_config::Config;
use lfx_insights_report::Classifier;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::new(cli.args).wrap_err("Failed to load configuration")?;
    debug!("Using config directory {}", config.config_dir().display());

    match cli.command {
        Command::Collect(args) => collect(&config, &args),
        Command::Report => report(&config),
    }
}

fn collect(config: &Config, args: &CollectArgs) -> Result<()> {
    let mode = args.fetch_mode(config.top_rank);
    info!("Collecting {} leaderboards from {}", mode, config.api_url);

    let client = LeaderboardClient::new(config.api_url.clone());
    let paths = lfx_insights_collector::collect(&client, mode, &config.dataset_dir)?;

    info!("Saved {} datasets to {}", paths.len(), config.dataset_dir.display());
    Ok(())
}

fn report(config: &Config) -> Result<()> {
    let classifier = Classifier::from(&config.classification);
    let report = lfx_insights_report::generate(&config.dataset_dir, &config.report_path, &classifier)?;

    println!("{}", report.format());
    Ok(())
}
