//! # Dining Philosophers
//!
//! Loads a roster, launches the table and keeps the process alive until every
//! philosopher has left. Ctrl-C interrupts all of them; each puts its forks
//! down before exiting.

use clap::Parser;
use dining_philosophers::config::SimulationConfig;
use dining_philosophers::framework::TracingSink;
use dining_philosophers::lifecycle::{setup_tracing, DiningTable};
use dining_philosophers::model::Outcome;
use dining_philosophers::roster::load_roster;
use dining_philosophers::SimulationError;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "dining-philosophers")]
#[command(about = "Deadlock-free dining philosophers simulation")]
struct Cli {
    /// Roster file: `id arrival_delay hold_duration` per line
    #[arg(default_value = "processes.txt")]
    roster: PathBuf,

    /// JSON config file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Length of one time-unit in milliseconds (overrides the config file)
    #[arg(long)]
    time_unit_ms: Option<u64>,

    /// Upper bound of thinking time in time-units (overrides the config file)
    #[arg(long)]
    think_max_units: Option<u64>,
}

impl Cli {
    fn simulation_config(&self) -> Result<SimulationConfig, SimulationError> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        if let Some(ms) = self.time_unit_ms {
            config.time_unit_ms = ms;
        }
        if let Some(units) = self.think_max_units {
            config.think_max_units = units;
        }
        Ok(config)
    }
}

async fn run(cli: Cli) -> Result<(), SimulationError> {
    let config = cli.simulation_config()?;
    let roster = load_roster(&cli.roster)?;

    let table = DiningTable::launch(roster, config, Arc::new(TracingSink))?;

    let cancel = table.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Ctrl-C received");
            cancel.cancel();
        }
    });

    // Detached tasks die with the process, so stay until the table clears
    let outcomes = table.join().await?;
    let interrupted = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Interrupted { .. }))
        .count();
    info!(
        finished = outcomes.len() - interrupted,
        interrupted, "All philosophers have left"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Simulation aborted");
            ExitCode::FAILURE
        }
    }
}
