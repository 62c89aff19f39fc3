//! Error types for the mealdesk application.
//!
//! Errors follow a small hierarchy built with `thiserror`, composing via `?`
//! and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`InputError`] - Snapshot file/stdin reading and decoding failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! The windowed list core has no error type of its own: it cannot fail in a
//! way a caller could act on.
//!
//! # Recovery Strategy
//!
//! Input errors at startup are fatal and reach `main`. Errors raised while
//! the TUI is running (for example a failed reload) are reported through the
//! notice bar and the UI keeps its previous data.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use mealdesk::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _input = read_snapshot()?;
///     Ok(())
/// }
/// # fn read_snapshot() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the snapshot from file or stdin.
    ///
    /// **Recovery**: fatal at startup; shown as a notice when reloading.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: restore the terminal, print to stderr, exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading snapshot input from files or stdin.
///
/// # Recovery Patterns
///
/// - **FileNotFound**: display error and exit (user provided invalid path)
/// - **NoInput**: display usage; user must provide a path or pipe stdin
/// - **Decode**: point at the offending line and column
/// - **Service**: relay the service's own message
/// - **Io**: generic I/O failures (permissions, broken pipe)
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified snapshot file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use mealdesk::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// No file path was given and stdin is a terminal.
    #[error("No input source: provide a snapshot file path or pipe JSON to stdin")]
    NoInput,

    /// The input is not a valid snapshot document.
    ///
    /// `line` and `column` are 1-based, as reported by `serde_json`.
    #[error("Invalid snapshot in {source_name} at line {line}, column {column}: {message}")]
    Decode {
        /// File path or `<stdin>`.
        source_name: String,
        /// Line of the failure.
        line: usize,
        /// Column of the failure.
        column: usize,
        /// Decoder message.
        message: String,
    },

    /// The input is the service's error body instead of a snapshot, as
    /// saved when a list endpoint refused the request.
    #[error("{source_name} holds a service error: {message}")]
    Service {
        /// File path or `<stdin>`.
        source_name: String,
        /// The service's `error` text, with its code when present.
        message: String,
    },

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Build a [`InputError::Decode`] from a `serde_json` error.
    pub fn decode(source_name: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::Decode {
            source_name: source_name.into(),
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
