use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for schedstats
#[derive(Parser)]
#[command(
    name = "schedstats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Completion statistics for class timetables and uptime for heartbeat series",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Freeze "now" (RFC 3339, "YYYY-MM-DD HH:MM" or "YYYY-MM-DD")
    #[arg(global = true, long = "now", value_name = "DATETIME")]
    pub now: Option<String>,

    /// Disable ANSI colors
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Completion statistics of a timetable (JSON or CSV events)
    Schedule {
        /// Events file (.json or .csv)
        file: PathBuf,

        #[arg(long, help = "Only count classes starting strictly after this instant")]
        from: Option<String>,

        #[arg(long, help = "Only count classes ending strictly before this instant")]
        to: Option<String>,

        #[arg(
            long = "limit-hour",
            help = "Hour of day after which a class counts as late (default from config)"
        )]
        limit_hour: Option<u32>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Write json/csv output to FILE instead of stdout")]
        out: Option<PathBuf>,

        #[arg(long, help = "Overwrite --out if it exists")]
        force: bool,
    },

    /// Uptime statistics of a heartbeat series (JSON or CSV samples)
    Status {
        /// Samples file (.json or .csv), in chronological order
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Write json/csv output to FILE instead of stdout")]
        out: Option<PathBuf>,

        #[arg(long, help = "Overwrite --out if it exists")]
        force: bool,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(long, help = "Overwrite an existing configuration file (with --init)")]
        force: bool,
    },
}
