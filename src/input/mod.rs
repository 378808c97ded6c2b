// src/input/mod.rs

mod loader;

pub use loader::{load_events, load_status};

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Supported input files, chosen from the extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(InputFormat::Json),
            "csv" => Ok(InputFormat::Csv),
            _ => Err(AppError::InvalidInputFormat(path.display().to_string())),
        }
    }
}
