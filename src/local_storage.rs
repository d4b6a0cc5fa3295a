//! Durable local state.
//!
//! Two independent keyed records live here: the saved-quotes list (JSON array,
//! newest first) and the font size (a single integer). Records are read through
//! a [`KeyValueStore`], so the same logic runs against files on disk or an
//! in-memory map.
//!
//! Reads never fail: a missing or unparsable record yields its default.

use crate::constants::{FONT_SIZE_DEFAULT, STORAGE_KEY_FONT_SIZE, STORAGE_KEY_SAVED_QUOTES};
use crate::quotes::{clamp_font_size, SavedQuote};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String records addressed by key.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// One `<key>.json` file per record inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes go to a sibling temp file first and are renamed into place, so a
    /// crash mid-write leaves the previous record intact.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, key: &str, value: &str) -> Self {
        self.records.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.records.remove(key);
        Ok(())
    }
}

/// Typed access to the saved-quotes and font-size records.
pub struct LocalStorage {
    store: Box<dyn KeyValueStore>,
}

impl LocalStorage {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Default data directory (`$XDG_DATA_HOME/swote` or platform equivalent).
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("swote"))
    }

    pub fn load_saved_quotes(&self) -> Vec<SavedQuote> {
        match self.store.get(STORAGE_KEY_SAVED_QUOTES) {
            Ok(Some(raw)) => parse_saved_quotes(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read saved quotes: {}", e);
                Vec::new()
            }
        }
    }

    pub fn save_saved_quotes(&mut self, quotes: &[SavedQuote]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(quotes)?;
        self.store.set(STORAGE_KEY_SAVED_QUOTES, &raw)?;
        debug!("Persisted {} saved quotes", quotes.len());
        Ok(())
    }

    pub fn load_font_size(&self) -> u8 {
        match self.store.get(STORAGE_KEY_FONT_SIZE) {
            Ok(Some(raw)) => parse_font_size(&raw).unwrap_or_else(|| {
                warn!("Ignoring unparsable font size record {:?}", raw);
                FONT_SIZE_DEFAULT
            }),
            Ok(None) => FONT_SIZE_DEFAULT,
            Err(e) => {
                warn!("Failed to read font size: {}", e);
                FONT_SIZE_DEFAULT
            }
        }
    }

    pub fn save_font_size(&mut self, size: u8) -> Result<(), StorageError> {
        self.store.set(STORAGE_KEY_FONT_SIZE, &size.to_string())?;
        debug!("Persisted font size {}", size);
        Ok(())
    }
}

/// Parse a saved-quotes record. Malformed JSON yields an empty list; entries
/// with an id already seen are dropped so ids stay unique.
pub fn parse_saved_quotes(raw: &str) -> Vec<SavedQuote> {
    let quotes: Vec<SavedQuote> = match serde_json::from_str(raw) {
        Ok(quotes) => quotes,
        Err(e) => {
            warn!("Ignoring malformed saved quotes record: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    quotes.into_iter().filter(|q| seen.insert(q.id.clone())).collect()
}

/// Parse a font-size record, accepting a bare integer or a JSON string
/// holding one. Out-of-range values are clamped.
pub fn parse_font_size(raw: &str) -> Option<u8> {
    let trimmed = raw.trim();
    let unquoted = serde_json::from_str::<String>(trimmed).unwrap_or_else(|_| trimmed.to_string());
    unquoted.trim().parse::<i64>().ok().map(clamp_font_size)
}
