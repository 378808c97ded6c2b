// src/input/loader.rs

use super::InputFormat;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::status::StatusSample;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Timetable events from a JSON array or a CSV with header
/// `name,type,teacher,location,start,end`.
pub fn load_events(path: &Path) -> AppResult<Vec<Event>> {
    let events: Vec<Event> = load(path)?;
    info!(path = %path.display(), count = events.len(), "events loaded");
    Ok(events)
}

/// Heartbeat samples from a JSON array or a CSV with header `date,alive`.
/// File order is preserved.
pub fn load_status(path: &Path) -> AppResult<Vec<StatusSample>> {
    let samples: Vec<StatusSample> = load(path)?;
    info!(path = %path.display(), count = samples.len(), "status samples loaded");
    Ok(samples)
}

fn load<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let format = InputFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "reading input");

    let file = File::open(path)?;

    match format {
        InputFormat::Json => Ok(serde_json::from_reader(BufReader::new(file))?),
        InputFormat::Csv => {
            let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
            let mut out = Vec::new();
            for row in rdr.deserialize() {
                out.push(row?);
            }
            Ok(out)
        }
    }
}
