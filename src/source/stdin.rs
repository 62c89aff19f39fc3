//! Stdin-based snapshot source for piped input.
//!
//! `curl .../snapshot | mealdesk` reads the document once; stdin cannot be
//! rewound, so later loads report that nothing new is available.

use super::parse_snapshot;
use crate::model::error::InputError;
use crate::model::CatalogSnapshot;
use std::io::{IsTerminal, Read};
use tracing::debug;

/// Label used in decode errors.
pub const STDIN_NAME: &str = "<stdin>";

/// Snapshot piped through stdin.
pub struct StdinSource<R: Read> {
    reader: R,
    consumed: bool,
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal),
    /// so the TUI never blocks waiting on keyboard input meant as data.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(stdin))
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            consumed: false,
        }
    }

    /// Read the whole document on the first call.
    ///
    /// Returns `Ok(None)` on every later call.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures and `InputError::Decode`
    /// for malformed JSON.
    pub fn load(&mut self) -> Result<Option<CatalogSnapshot>, InputError> {
        if self.consumed {
            return Ok(None);
        }
        self.consumed = true;

        let mut contents = String::new();
        self.reader.read_to_string(&mut contents)?;
        debug!(bytes = contents.len(), "snapshot read from stdin");
        parse_snapshot(STDIN_NAME, &contents).map(Some)
    }

    /// Whether the document has already been read.
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

impl<R: Read> std::fmt::Debug for StdinSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdinSource")
            .field("consumed", &self.consumed)
            .finish()
    }
}
