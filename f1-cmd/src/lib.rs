//! Command implementations for the F1 CLI.
//!
//! `fetch` builds the season results file from an Ergast-compatible API;
//! `report` loads a results file the same way the dashboard does and prints
//! the derived per-round series and cumulative standings.

use clap::Subcommand;

pub mod fetch;
pub mod report;

use fetch::TrackedDriver;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch per-round results for the tracked drivers and write the dataset JSON
    Fetch {
        /// Championship season to fetch
        #[arg(short, long, default_value_t = fetch::DEFAULT_SEASON)]
        season: u32,

        /// Output path for the dataset JSON array
        #[arg(short, long, default_value = "races_2025.json")]
        out: String,

        /// Base URL of the Ergast-compatible API
        #[arg(long, default_value = fetch::DEFAULT_BASE_URL)]
        base_url: String,

        /// Tracked driver as `driverId=Display Name` (repeatable; replaces the defaults)
        #[arg(short, long = "driver")]
        drivers: Vec<TrackedDriver>,
    },

    /// Print one driver's results and the cumulative standings from a dataset
    Report {
        /// Dataset locations (file paths or http(s) URLs), tried in order
        #[arg(short, long = "data", default_values_t = f1_season::loader::DEFAULT_CANDIDATES.map(String::from))]
        data: Vec<String>,

        /// Driver to report on (defaults to the first driver in the data)
        #[arg(short, long)]
        competitor: Option<String>,

        /// Last round to include (defaults to the last round in the data)
        #[arg(long)]
        cutoff: Option<u32>,

        /// Write the cumulative standings as CSV instead of the text report
        #[arg(long)]
        csv: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch {
            season,
            out,
            base_url,
            drivers,
        } => {
            let drivers = if drivers.is_empty() {
                fetch::default_drivers()
            } else {
                drivers
            };
            fetch::run_fetch(season, &out, &base_url, &drivers).await
        }
        Command::Report {
            data,
            competitor,
            cutoff,
            csv,
        } => report::run_report(&data, competitor.as_deref(), cutoff, csv).await,
    }
}
