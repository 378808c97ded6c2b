use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::schedule::GroupBy;
use crate::core::clock::Clock;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::input::load_events;
use crate::models::date_range::DateRange;
use crate::models::stats::ScheduleStats;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{CYAN, color_for_completion, paint};
use crate::utils::date::{format_datetime, parse_optional_datetime};
use crate::utils::formatting::{min_to_str_hours, percent, spent_of_total};
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Schedule {
        file,
        from,
        to,
        limit_hour,
        format,
        out,
        force,
    } = cmd
    {
        let events = load_events(file)?;

        let range = DateRange::new(
            parse_optional_datetime(from.as_deref())?,
            parse_optional_datetime(to.as_deref())?,
        );
        if range.begin.is_some() != range.finish.is_some() {
            warning("Only one of --from/--to given: the date filter needs both and is disabled");
        }

        let limit_hour = limit_hour.unwrap_or(cfg.limit_hour);
        let stats = Core::new(clock)
            .schedule(&events, &range, limit_hour)
            .ok_or_else(|| AppError::Other("no schedule statistics produced".to_string()))?;

        match format {
            ExportFormat::Text => {
                if out.is_some() {
                    warning("--out is only used with --format json|csv");
                }
                print_report(file, &stats, limit_hour, cfg, clock);
            }
            _ => ExportLogic::schedule(&stats, *format, out.as_deref(), *force)?,
        }
    }
    Ok(())
}

fn print_report(file: &Path, stats: &ScheduleStats, limit_hour: u32, cfg: &Config, clock: &dyn Clock) {
    header(format!("Schedule: {}", file.display()), cfg.colors);

    let pct = percent(stats.percentage);
    println!(
        "{}          {} ({})",
        paint("Completed:", CYAN, cfg.colors),
        paint(&pct, color_for_completion(stats.percentage), cfg.colors),
        spent_of_total(stats.min_spent, stats.min_total)
    );
    println!("Remaining:          {}", min_to_str_hours(stats.min_total - stats.min_spent));
    println!("Classes after {limit_hour:02}h:  {}", stats.num_of_class_after);
    println!("As of:              {}", format_datetime(&clock.now(), &cfg.datetime_format));

    for group in GroupBy::ALL {
        let records = Core::records_for(stats, group);
        if records.is_empty() {
            continue;
        }

        println!();
        header(format!("By {}", group.label()), cfg.colors);

        let mut table = Table::new(vec![
            Column::left(&capitalize(group.label())),
            Column::right("Spent"),
            Column::right("Total"),
            Column::right("Done"),
        ]);

        for row in Core::group_rows_for(stats, group) {
            table.add_row(vec![
                row.key,
                min_to_str_hours(row.spent_minutes),
                min_to_str_hours(row.total_minutes),
                percent(row.percentage),
            ]);
        }

        print!("{}", table.render());
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
