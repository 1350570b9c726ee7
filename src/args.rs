use clap::{
    Parser,
    Subcommand,
};
use lfx_insights_collector::FetchMode;

/// Collects LFX leaderboard datasets and derives project health insights from them.
#[derive(Parser, Debug, Clone)]
#[command(author, version = lfx_insights_config::version(), about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: lfx_insights_config::Args,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch the leaderboard listing and save one dataset per leaderboard type.
    Collect(CollectArgs),

    /// Build the insights report from the saved datasets.
    Report,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct CollectArgs {
    /// Fetch only entries up to a rank instead of the full listing.
    #[arg(long, action)]
    pub ranked: bool,

    /// Highest rank to fetch. Implies `--ranked`; defaults to `top_rank` from the configuration.
    #[arg(long, value_name = "N")]
    pub max_rank: Option<u32>,

    /// Number of entries in the full listing. Skips the request that discovers it.
    #[arg(long, value_name = "N", conflicts_with_all = ["ranked", "max_rank"])]
    pub total: Option<u64>,
}

impl CollectArgs {
    pub fn fetch_mode(&self, top_rank: u32) -> FetchMode {
        match (self.ranked, self.max_rank) {
            (_, Some(n)) => FetchMode::TopRanked(n),
            (true, None) => FetchMode::TopRanked(top_rank),
            (false, None) => FetchMode::Full { total: self.total },
        }
    }
}
