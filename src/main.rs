mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf_query::config::RunnerConfig;
use bookshelf_query::console::Console;
use bookshelf_query::runner::QueryRunner;

// One operation at a time on a single thread; each awaits its own round-trip.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = cli::Cli::parse();

    let mut config = RunnerConfig::load().context("Failed to load configuration")?;
    config.overlay(cli.uri, cli.database, cli.collection);
    config.validate()?;
    log::debug!("Using {}", config.display_target());

    let runner = QueryRunner::new(config, Console::stdout());
    let outcomes = runner.run_all(&cli.cmd.into_queries()).await;

    let failed = outcomes.iter().filter(|outcome| outcome.is_failed()).count();
    if failed > 0 {
        log::warn!("{failed} of {} operation(s) failed", outcomes.len());
    }
    Ok(())
}
