use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::input::load_status;
use crate::models::stats::StatusStats;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{color_for_alive, paint};
use crate::utils::date::format_datetime;
use crate::utils::formatting::percent;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Status {
        file,
        format,
        out,
        force,
    } = cmd
    {
        let samples = load_status(file)?;

        let stats = Core::new(clock)
            .status(&samples)
            .ok_or_else(|| AppError::EmptyInput(file.display().to_string()))?;

        match format {
            ExportFormat::Text => {
                if out.is_some() {
                    warning("--out is only used with --format json|csv");
                }
                print_report(file, &stats, cfg);
            }
            _ => ExportLogic::status(&stats, *format, out.as_deref(), *force)?,
        }
    }
    Ok(())
}

fn print_report(file: &Path, stats: &StatusStats, cfg: &Config) {
    header(format!("Status: {}", file.display()), cfg.colors);

    let state = if stats.currently_alive { "alive" } else { "down" };

    println!(
        "Uptime:        {} ({}/{} updates)",
        percent(stats.percentage),
        stats.alive_times,
        stats.num_of_updates
    );
    println!(
        "Currently:     {}",
        paint(state, color_for_alive(stats.currently_alive), cfg.colors)
    );
    println!(
        "First update:  {}",
        format_datetime(&stats.first_update, &cfg.datetime_format)
    );
    println!(
        "Last update:   {}",
        format_datetime(&stats.last_update, &cfg.datetime_format)
    );
}
