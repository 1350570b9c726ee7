use clap::Parser;
use color_eyre::Result;
use lfx_insights::{
    init_errors,
    init_logging,
    run,
    Cli,
};

fn main() -> Result<()> {
    init_errors()?;
    let cli = Cli::parse();
    init_logging(cli.args.verbose)?;
    run(cli)
}
