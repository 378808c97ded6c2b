// src/export/logic.rs

use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::StatusRow;
use crate::models::stats::{ScheduleStats, StatusStats};
use std::path::Path;
use tracing::debug;

/// Machine-readable output of the statistics.
pub struct ExportLogic;

impl ExportLogic {
    /// - `json`: the whole [`ScheduleStats`] object
    /// - `csv`: one row per (group, key)
    pub fn schedule(
        stats: &ScheduleStats,
        format: ExportFormat,
        out: Option<&Path>,
        force: bool,
    ) -> AppResult<()> {
        Self::prepare(format, out, force)?;

        match format {
            ExportFormat::Json => export_json(stats, out),
            ExportFormat::Csv => export_csv(&Core::group_rows(stats), out),
            ExportFormat::Text => Err(Self::not_machine_readable()),
        }
    }

    pub fn status(
        stats: &StatusStats,
        format: ExportFormat,
        out: Option<&Path>,
        force: bool,
    ) -> AppResult<()> {
        Self::prepare(format, out, force)?;

        match format {
            ExportFormat::Json => export_json(stats, out),
            ExportFormat::Csv => export_csv(&[StatusRow::from(stats)], out),
            ExportFormat::Text => Err(Self::not_machine_readable()),
        }
    }

    fn prepare(format: ExportFormat, out: Option<&Path>, force: bool) -> AppResult<()> {
        debug!(format = format.as_str(), out = ?out, "exporting statistics");
        if let Some(p) = out {
            ensure_writable(p, force)?;
        }
        Ok(())
    }

    fn not_machine_readable() -> AppError {
        AppError::Export("text output is rendered by the CLI, not exported".to_string())
    }
}
