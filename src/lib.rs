//! schedstats library root.
//! Exposes the statistics core (timetable completion, heartbeat uptime),
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod input;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::calculator::percentage::percentage_completed;
pub use crate::core::calculator::schedule::get_schedule_stats;
pub use crate::core::calculator::status::get_status_stats;
pub use crate::core::clock::{Clock, FixedClock, SystemClock};
pub use crate::utils::formatting::min_to_str_hours;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path, clock: &dyn Clock) -> AppResult<()> {
    match &cli.command {
        Commands::Schedule { .. } => cli::commands::schedule::handle(&cli.command, cfg, clock),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, clock),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Logs go to stderr; `-v` flags win over `RUST_LOG`, which wins over `warn`.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // A second init (e.g. run() called twice in one process) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .try_init();
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 2️⃣ carica config UNA sola volta
    let (config_path, mut cfg) = match &cli.config {
        Some(path) => (path.clone(), Config::load_from(path)?),
        None => (Config::config_file(), Config::load()?),
    };

    // 3️⃣ override da riga di comando
    if cli.no_color {
        cfg.colors = false;
    }

    let fixed = cli
        .now
        .as_deref()
        .map(utils::date::parse_datetime)
        .transpose()?
        .map(FixedClock::new);
    debug!(config = %config_path.display(), now = ?fixed, "starting");

    match &fixed {
        Some(clock) => dispatch(&cli, &cfg, &config_path, clock),
        None => dispatch(&cli, &cfg, &config_path, &SystemClock),
    }
}
