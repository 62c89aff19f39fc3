//! File-based snapshot source.
//!
//! The file is read on every load, so reloading picks up a freshly exported
//! snapshot.

use super::parse_snapshot;
use crate::model::error::InputError;
use crate::model::CatalogSnapshot;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Snapshot stored in a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file was removed since
    /// construction, `InputError::Decode` for malformed JSON, and
    /// `InputError::Io` for other read failures.
    pub fn load(&self) -> Result<CatalogSnapshot, InputError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                InputError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                InputError::Io(e)
            }
        })?;
        debug!(path = %self.path.display(), bytes = contents.len(), "snapshot file read");
        parse_snapshot(&self.path.display().to_string(), &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn new_returns_file_not_found_for_missing_file() {
        let missing = std::env::temp_dir().join("mealdesk_nonexistent_12345.json");
        let result = FileSource::new(&missing);
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn load_decodes_snapshot() {
        let path = std::env::temp_dir().join("mealdesk_file_source_load.json");
        fs::write(
            &path,
            r#"{"menu_items": [{"id": 1, "name": "Soup"}, {"id": 2, "name": "Salad"}]}"#,
        )
        .unwrap();

        let source = FileSource::new(&path).unwrap();
        let snapshot = source.load();
        let _ = fs::remove_file(&path);

        let snapshot = snapshot.unwrap();
        assert_eq!(snapshot.menu_items.len(), 2);
        assert_eq!(snapshot.menu_items[1].name, "Salad");
    }

    #[test]
    fn load_reports_file_removed_after_construction() {
        let path = std::env::temp_dir().join("mealdesk_file_source_removed.json");
        fs::write(&path, "{}").unwrap();
        let source = FileSource::new(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(matches!(source.load(), Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn load_rereads_on_every_call() {
        let path = std::env::temp_dir().join("mealdesk_file_source_reload.json");
        fs::write(&path, "{}").unwrap();
        let source = FileSource::new(&path).unwrap();
        let first = source.load().unwrap();

        fs::write(&path, r#"{"menu_items": [{"id": 1, "name": "Soup"}]}"#).unwrap();
        let second = source.load();
        let _ = fs::remove_file(&path);

        assert!(first.menu_items.is_empty());
        assert_eq!(second.unwrap().menu_items.len(), 1);
    }

    #[test]
    fn load_reports_decode_position() {
        let path = std::env::temp_dir().join("mealdesk_file_source_bad.json");
        fs::write(&path, "{\n\"meal_events\": [,]\n}").unwrap();
        let source = FileSource::new(&path).unwrap();
        let result = source.load();
        let _ = fs::remove_file(&path);

        match result {
            Err(InputError::Decode { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
