//! F1 CLI - builds and inspects the season results dataset.
//!
//! Logs at `info` unless `RUST_LOG` says otherwise.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "f1-cli",
    version,
    about = "F1 season results toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: f1_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::debug!("Running {:?}", cli.command);
    f1_cmd::run(cli.command).await
}
