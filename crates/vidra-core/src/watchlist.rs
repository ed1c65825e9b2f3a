//! The persisted watchlist: an insertion-ordered, deduplicated list of
//! movie records, fully rewritten to its backing store after every mutation.
//!
//! The backing medium is abstracted behind [`WatchlistBackend`]; the shipped
//! backend is a single JSON file under the platform data dir.

use std::path::{Path, PathBuf};

use crate::error::VidraError;
use crate::models::MovieRecord;

const FILE_NAME: &str = "watchlist.json";

/// A durable single-slot store for the serialized watchlist.
pub trait WatchlistBackend {
    /// Read the stored blob. `Ok(None)` means nothing has been saved yet.
    fn load_raw(&self) -> Result<Option<String>, VidraError>;

    /// Overwrite the stored blob.
    fn save_raw(&self, contents: &str) -> Result<(), VidraError>;
}

/// JSON-file backend, e.g. `~/.local/share/vidra/watchlist.json`.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend at the platform-default data dir location.
    pub fn default_location() -> Self {
        let path = directories::ProjectDirs::from("", "", "vidra")
            .map(|dirs| dirs.data_dir().join(FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(FILE_NAME));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WatchlistBackend for JsonFileBackend {
    fn load_raw(&self) -> Result<Option<String>, VidraError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save_raw(&self, contents: &str) -> Result<(), VidraError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory watchlist bound to a backend.
///
/// Invariants: at most one entry per `imdb_id`, insertion order preserved
/// for unaffected entries.
pub struct WatchlistStore<B: WatchlistBackend> {
    backend: B,
    entries: Vec<MovieRecord>,
}

impl<B: WatchlistBackend> WatchlistStore<B> {
    /// Load the watchlist from the backend.
    ///
    /// A missing or malformed store yields an empty list, never an error:
    /// availability over strictness. Backend read errors are also treated as
    /// empty, logged at warn.
    pub fn load(backend: B) -> Self {
        let entries = match backend.load_raw() {
            Ok(Some(contents)) => match serde_json::from_str::<Vec<MovieRecord>>(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("malformed watchlist, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read watchlist, starting empty: {e}");
                Vec::new()
            }
        };
        Self { backend, entries }
    }

    pub fn entries(&self) -> &[MovieRecord] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up an entry by IMDb id.
    pub fn get(&self, imdb_id: &str) -> Option<&MovieRecord> {
        self.entries.iter().find(|r| r.imdb_id == imdb_id)
    }

    /// Append a record, persisting the full list before returning.
    ///
    /// Idempotent: a record whose `imdb_id` is already present is not added
    /// again. Returns whether the list changed.
    pub fn add(&mut self, record: MovieRecord) -> Result<bool, VidraError> {
        if self.entries.iter().any(|r| r.imdb_id == record.imdb_id) {
            return Ok(false);
        }
        self.entries.push(record);
        self.persist()?;
        Ok(true)
    }

    /// Remove the entry with the given IMDb id, persisting the full list.
    ///
    /// Returns whether an entry was removed.
    pub fn remove(&mut self, imdb_id: &str) -> Result<bool, VidraError> {
        let before = self.entries.len();
        self.entries.retain(|r| r.imdb_id != imdb_id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<(), VidraError> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| VidraError::Storage(e.to_string()))?;
        self.backend.save_raw(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, imdb_id: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            imdb_id: imdb_id.to_string(),
            year: None,
            poster_url: None,
        }
    }

    fn temp_backend(dir: &tempfile::TempDir) -> JsonFileBackend {
        JsonFileBackend::new(dir.path().join("watchlist.json"))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = WatchlistStore::load(temp_backend(&dir));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_content_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = temp_backend(&dir);
        backend.save_raw("{ not json").unwrap();
        let store = WatchlistStore::load(backend);
        assert!(store.is_empty());
    }

    #[test]
    fn add_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = WatchlistStore::load(temp_backend(&dir));

        assert!(store.add(record("Dune", "tt1160419")).unwrap());
        assert!(!store.add(record("Dune", "tt1160419")).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn round_trip_preserves_order_and_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = WatchlistStore::load(temp_backend(&dir));
        store.add(record("Dune", "tt1160419")).unwrap();
        store.add(record("Shazam!", "tt0448115")).unwrap();
        store.add(record("Arrival", "tt2543164")).unwrap();

        let reloaded = WatchlistStore::load(temp_backend(&dir));
        assert_eq!(reloaded.entries(), store.entries());
        assert_eq!(reloaded.entries()[0].imdb_id, "tt1160419");
        assert_eq!(reloaded.entries()[2].imdb_id, "tt2543164");
    }

    #[test]
    fn remove_preserves_order_of_unaffected_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = WatchlistStore::load(temp_backend(&dir));
        store.add(record("Dune", "tt1160419")).unwrap();
        store.add(record("Shazam!", "tt0448115")).unwrap();
        store.add(record("Arrival", "tt2543164")).unwrap();

        assert!(store.remove("tt0448115").unwrap());
        let ids: Vec<_> = store.entries().iter().map(|r| r.imdb_id.as_str()).collect();
        assert_eq!(ids, ["tt1160419", "tt2543164"]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = WatchlistStore::load(temp_backend(&dir));
        store.add(record("Dune", "tt1160419")).unwrap();

        assert!(!store.remove("tt9999999").unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_then_add_restores_membership_at_the_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = WatchlistStore::load(temp_backend(&dir));
        store.add(record("Dune", "tt1160419")).unwrap();
        store.add(record("Shazam!", "tt0448115")).unwrap();

        store.remove("tt1160419").unwrap();
        store.add(record("Dune", "tt1160419")).unwrap();

        let ids: Vec<_> = store.entries().iter().map(|r| r.imdb_id.as_str()).collect();
        assert_eq!(ids, ["tt0448115", "tt1160419"]);
    }

    #[test]
    fn mutations_persist_before_returning() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = WatchlistStore::load(temp_backend(&dir));
        store.add(record("Dune", "tt1160419")).unwrap();

        // A fresh load from the same path sees the entry already.
        let other = WatchlistStore::load(temp_backend(&dir));
        assert_eq!(other.len(), 1);
        assert_eq!(other.get("tt1160419").unwrap().title, "Dune");
    }

    #[test]
    fn older_records_without_optional_fields_still_load() {
        let dir = tempfile::tempdir().unwrap();
        let backend = temp_backend(&dir);
        backend
            .save_raw(r#"[{"title": "Dune", "imdb_id": "tt1160419"}]"#)
            .unwrap();

        let store = WatchlistStore::load(backend);
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].year, None);
    }
}
