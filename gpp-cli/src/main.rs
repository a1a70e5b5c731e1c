//! GPP CLI - Command line tool for the global power plant dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gpp-cli",
    version,
    about = "Global power plant dashboard toolkit"
)]
struct Cli {
    /// Path to the power plant CSV
    #[arg(short = 'd', long, default_value = gpp_cmd::DEFAULT_DATASET_PATH)]
    dataset: String,

    #[command(subcommand)]
    command: gpp_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gpp_cmd::run(&cli.dataset, cli.command)
}
