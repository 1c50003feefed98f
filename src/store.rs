//! Persistence collaborator for parsed tables.
//!
//! The surrounding service stores each parsed table — plus the caller's
//! sender color map and the media tally the table already carries — under an
//! opaque identifier, in either a temporary or a permanent bucket depending
//! on whether the user chose to keep the chat. [`ProcessedStore`] is that
//! key-value contract; [`MemoryStore`] backs tests and single-process use,
//! [`FsStore`] keeps one JSON file per entry on disk.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ChatlensError, Result};
use crate::table::RecordTable;

/// One stored parse result with its presentation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedEntry {
    /// The parsed record table, media tally included.
    pub table: RecordTable,
    /// Sender name to display color, supplied by the caller.
    pub color_map: HashMap<String, String>,
    /// When the entry was written.
    pub last_updated: DateTime<Utc>,
}

/// Key-value persistence for processed chat data.
pub trait ProcessedStore: Send + Sync {
    /// Stores a table and its color map; returns the opaque identifier to
    /// retrieve it with. `permanent` selects the bucket.
    fn put(
        &self,
        table: &RecordTable,
        color_map: &HashMap<String, String>,
        permanent: bool,
    ) -> Result<String>;

    /// Retrieves a stored entry by identifier, whichever bucket holds it.
    ///
    /// # Errors
    ///
    /// [`ChatlensError::NotFound`] when no bucket has the identifier.
    fn get(&self, id: &str) -> Result<ProcessedEntry>;
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn make_entry(table: &RecordTable, color_map: &HashMap<String, String>) -> ProcessedEntry {
    ProcessedEntry {
        table: table.clone(),
        color_map: color_map.clone(),
        last_updated: Utc::now(),
    }
}

/// In-memory store with separate temporary and permanent buckets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    temp: Mutex<HashMap<String, ProcessedEntry>>,
    permanent: Mutex<HashMap<String, ProcessedEntry>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn bucket(&self, permanent: bool) -> &Mutex<HashMap<String, ProcessedEntry>> {
        if permanent {
            &self.permanent
        } else {
            &self.temp
        }
    }
}

impl ProcessedStore for MemoryStore {
    fn put(
        &self,
        table: &RecordTable,
        color_map: &HashMap<String, String>,
        permanent: bool,
    ) -> Result<String> {
        let id = new_id();
        let mut bucket = self
            .bucket(permanent)
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        bucket.insert(id.clone(), make_entry(table, color_map));
        Ok(id)
    }

    fn get(&self, id: &str) -> Result<ProcessedEntry> {
        for bucket in [&self.permanent, &self.temp] {
            let bucket = bucket
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(entry) = bucket.get(id) {
                return Ok(entry.clone());
            }
        }
        Err(ChatlensError::not_found(id))
    }
}

/// Filesystem store: one JSON file per entry, under a temporary or a
/// permanent directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    temp_dir: PathBuf,
    permanent_dir: PathBuf,
}

impl FsStore {
    /// Creates a store over the two bucket directories. The directories are
    /// created on first write, not here.
    pub fn new(temp_dir: impl Into<PathBuf>, permanent_dir: impl Into<PathBuf>) -> Self {
        Self {
            temp_dir: temp_dir.into(),
            permanent_dir: permanent_dir.into(),
        }
    }

    fn entry_path(dir: &Path, id: &str) -> PathBuf {
        dir.join(format!("{id}.json"))
    }
}

impl ProcessedStore for FsStore {
    fn put(
        &self,
        table: &RecordTable,
        color_map: &HashMap<String, String>,
        permanent: bool,
    ) -> Result<String> {
        let dir = if permanent {
            &self.permanent_dir
        } else {
            &self.temp_dir
        };
        fs::create_dir_all(dir)?;

        let id = new_id();
        let json = serde_json::to_string(&make_entry(table, color_map))?;
        fs::write(Self::entry_path(dir, &id), json)?;
        Ok(id)
    }

    fn get(&self, id: &str) -> Result<ProcessedEntry> {
        for dir in [&self.permanent_dir, &self.temp_dir] {
            match fs::read_to_string(Self::entry_path(dir, id)) {
                Ok(json) => return Ok(serde_json::from_str(&json)?),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Err(ChatlensError::not_found(id))
    }
}
