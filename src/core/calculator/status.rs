use crate::core::calculator::percentage::round2;
use crate::models::stats::StatusStats;
use crate::models::status::StatusSample;
use tracing::debug;

/// Uptime summary of a heartbeat series.
///
/// Samples are trusted to be in chronological order: the first and last
/// elements are reported as bounds without sorting. `None` for a missing or
/// empty series, which has no bounds to report.
pub fn get_status_stats(data: Option<&[StatusSample]>) -> Option<StatusStats> {
    let data = data?;
    let (first, last) = (data.first()?, data.last()?);

    let alive_times = data.iter().filter(|s| s.alive).count();
    let percentage = alive_times as f64 * 100.0 / data.len() as f64;

    debug!(samples = data.len(), alive_times, "status series summarized");

    Some(StatusStats {
        percentage: round2(percentage),
        alive_times,
        currently_alive: last.alive,
        first_update: first.date,
        last_update: last.date,
        num_of_updates: data.len(),
    })
}
