//! Snapshot input sources.
//!
//! This module provides input sources for catalog snapshots:
//! - File loading (re-readable)
//! - Stdin for piped input (read once)
//! - Unified InputSource enum for both

use crate::model::error::InputError;
use crate::model::{CatalogSnapshot, ErrorResponse};
use std::path::PathBuf;
use tracing::{info, warn};

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for catalog snapshots.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// Snapshot file, re-read on every load.
    File(FileSource),
    /// Piped stdin, read once.
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Load the snapshot.
    ///
    /// # Behavior:
    /// - File: reads the file every call
    /// - Stdin: the document on the first call, `None` afterwards
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O and decode failures.
    pub fn load(&mut self) -> Result<Option<CatalogSnapshot>, InputError> {
        match self {
            InputSource::File(f) => f.load().map(Some),
            InputSource::Stdin(s) => s.load(),
        }
    }

    /// Whether a later load can return new data.
    pub fn is_reloadable(&self) -> bool {
        matches!(self, InputSource::File(_))
    }

    /// Human-readable name of the source.
    pub fn name(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => stdin::STDIN_NAME.to_string(),
        }
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If a file path is provided: FileSource
/// 2. Else if stdin is piped: StdinSource
/// 3. Else: `InputError::NoInput`
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is not piped.
/// Returns `InputError::FileNotFound` if the file does not exist.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    let source = match file {
        Some(path) => InputSource::File(FileSource::new(path)?),
        None => InputSource::Stdin(StdinSource::new()?),
    };
    info!(source = %source.name(), "input source selected");
    Ok(source)
}

/// Decode a snapshot document.
///
/// # Errors
///
/// Returns `InputError::Service` when the document is the service's error
/// body, otherwise `InputError::Decode` with the line and column of the
/// failure.
pub fn parse_snapshot(source_name: &str, contents: &str) -> Result<CatalogSnapshot, InputError> {
    let snapshot: CatalogSnapshot = match serde_json::from_str(contents) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            return Err(match serde_json::from_str::<ErrorResponse>(contents) {
                Ok(body) => {
                    warn!(
                        source = source_name,
                        code = %body.code,
                        request_id = %body.request_id,
                        "snapshot is a service error"
                    );
                    InputError::Service {
                        source_name: source_name.to_string(),
                        message: body.summary(),
                    }
                }
                Err(_) => InputError::decode(source_name, &e),
            });
        }
    };
    info!(
        source = source_name,
        meal_events = snapshot.meal_events.len(),
        menu_items = snapshot.menu_items.len(),
        menu_sets = snapshot.menu_sets.len(),
        notifications = snapshot.notifications.len(),
        signed_in = snapshot.auth.is_some(),
        "snapshot decoded"
    );
    Ok(snapshot)
}
