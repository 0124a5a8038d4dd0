use anyhow::Result;
use budget_tracker::cli::Cli;
use budget_tracker::logging::init_tracing;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}
