// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

fn open_sink(path: Option<&Path>) -> AppResult<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(File::create(p)?),
        None => Box::new(io::stdout().lock()),
    })
}

/// Pretty-printed JSON to `path`, or stdout.
pub(crate) fn export_json<T: Serialize + ?Sized>(value: &T, path: Option<&Path>) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(value)?;

    let mut sink = open_sink(path)?;
    sink.write_all(json_data.as_bytes())?;
    sink.write_all(b"\n")?;
    sink.flush()?;

    if let Some(p) = path {
        notify_export_success("JSON", p);
    }
    Ok(())
}

/// CSV (header incluso grazie a serde) to `path`, or stdout.
pub(crate) fn export_csv<R: Serialize>(rows: &[R], path: Option<&Path>) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(open_sink(path)?);

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    if let Some(p) = path {
        notify_export_success("CSV", p);
    }
    Ok(())
}
