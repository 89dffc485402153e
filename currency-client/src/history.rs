//! Persisted conversion history.
//!
//! An explicitly constructed, injectable state container: the caller decides
//! where the backing file lives and owns the store's lifecycle. There is no
//! ambient singleton and no implicit teardown; every append is flushed to
//! disk immediately.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use currency_types::ConversionRecord;

/// Default file name of the persisted history.
pub const DEFAULT_STORE_NAME: &str = "currency-conversion-storage.json";

/// Error type for history persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only store of past conversions, persisted as a JSON array.
///
/// Records are kept oldest first. Reads never remove or reorder entries.
/// Growth is unbounded unless a retention cap is configured with
/// [`HistoryStore::with_max_entries`].
pub struct HistoryStore {
    path: PathBuf,
    max_entries: Option<usize>,
    records: Vec<ConversionRecord>,
}

impl HistoryStore {
    /// Loads the history from `path`, starting empty if the file does not
    /// exist yet.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            max_entries: None,
            records,
        })
    }

    /// Caps the history at `cap` entries, evicting oldest first on append.
    pub fn with_max_entries(mut self, cap: usize) -> Self {
        self.max_entries = Some(cap);
        self
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of the history, oldest first.
    pub fn conversion_history(&self) -> &[ConversionRecord] {
        &self.records
    }

    /// Appends a record and persists the whole sequence.
    pub fn add_conversion(&mut self, record: ConversionRecord) -> Result<(), StoreError> {
        self.records.push(record);
        if let Some(cap) = self.max_entries {
            if self.records.len() > cap {
                let excess = self.records.len() - cap;
                self.records.drain(..excess);
            }
        }
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let bytes = serde_json::to_vec_pretty(&self.records)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}
