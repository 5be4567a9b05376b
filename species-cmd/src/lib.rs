//! Command implementations for the species CLI.
//!
//! Provides subcommands for printing the speed chart datasets and the species
//! detail view without a browser.

use clap::Subcommand;
use species_core::DisplayMode;

pub mod source;
pub mod species;
pub mod speeds;

#[derive(Subcommand)]
pub enum Command {
    /// Print the speed chart dataset for an animals CSV
    Speeds {
        /// Path or http(s) URL of the animals CSV
        #[arg(short = 's', long)]
        source: String,

        /// grouped (average per diet) or individual (one row per animal)
        #[arg(short = 'm', long, default_value_t = DisplayMode::Individual)]
        mode: DisplayMode,

        /// Print the chart-ready JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the detail view of species records as a given viewer sees them
    Species {
        /// Path or http(s) URL of a JSON array of species rows
        #[arg(short = 's', long)]
        source: String,

        /// Viewer id compared against each record's author
        #[arg(short = 'v', long, default_value = "")]
        viewer: String,

        /// Only show the record with this scientific name
        #[arg(short = 'n', long)]
        name: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Speeds { source, mode, json } => speeds::run_speeds(&source, mode, json).await,
        Command::Species {
            source,
            viewer,
            name,
        } => species::run_species(&source, &viewer, name.as_deref()).await,
    }
}
