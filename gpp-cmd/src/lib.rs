//! Command implementations for the GPP CLI.
//!
//! Every command loads the dataset once, then prints the summary cards,
//! the dropdown options, or chart specifications as Plotly JSON.

use clap::Subcommand;
use gpp_charts::Dashboard;

pub mod export;
pub mod summary;

pub use gpp_core::{DEFAULT_COUNTRY, DEFAULT_DATASET_PATH};

#[derive(Subcommand)]
pub enum Command {
    /// Print the summary card figures over the whole dataset
    Summary,

    /// List the countries offered by the dropdown, in dataset order
    Countries,

    /// Export the animated choropleth map as Plotly JSON
    Map {
        /// Output file (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Export the ranking, distribution and fuel share charts for a country
    Country {
        /// Country long name, matched exactly
        #[arg(short = 'n', long, default_value = DEFAULT_COUNTRY)]
        name: String,

        /// Directory for ranking.json, distribution.json and fuel_share.json
        /// (stdout when omitted)
        #[arg(short = 'o', long)]
        output_dir: Option<String>,
    },
}

pub fn run(dataset: &str, command: Command) -> anyhow::Result<()> {
    let dashboard = Dashboard::from_path(dataset)?;
    let mut stdout = std::io::stdout().lock();
    match command {
        Command::Summary => summary::run_summary(&dashboard, &mut stdout),
        Command::Countries => summary::run_countries(&dashboard, &mut stdout),
        Command::Map { output } => export::run_map(&dashboard, output.as_deref(), &mut stdout),
        Command::Country { name, output_dir } => {
            export::run_country(&dashboard, &name, output_dir.as_deref(), &mut stdout)
        }
    }
}
