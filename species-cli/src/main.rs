//! Species CLI - inspect animal speed data and species records from the terminal.
//!
//! Logging follows `RUST_LOG`; `--verbose` forces debug output, which includes
//! every CSV row the loader skips.

use clap::Parser;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "species-cli", version, about = "Species catalog data toolkit")]
struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: species_cmd::Command,
}

impl Cli {
    /// Level override for the logger, if any.
    fn log_level(&self) -> Option<LevelFilter> {
        self.verbose.then_some(LevelFilter::Debug)
    }
}

fn init_logging(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    species_cmd::run(cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_forces_debug_logging() {
        let cli = Cli::try_parse_from(["species-cli", "--verbose", "speeds", "-s", "animals.csv"]).unwrap();
        assert_eq!(cli.log_level(), Some(LevelFilter::Debug));
    }

    #[test]
    fn default_logging_defers_to_env() {
        let cli = Cli::try_parse_from(["species-cli", "species", "-s", "species.json"]).unwrap();
        assert_eq!(cli.log_level(), None);
    }

    #[test]
    fn verbose_is_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from(["species-cli", "speeds", "-s", "a.csv", "-m", "grouped", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
