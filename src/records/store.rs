//! Record persistence
//!
//! Handles saving and loading records to/from disk.

use super::{Record, RecordId};
use crate::config::config_dir;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Serializable format for the record store
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    records: Vec<Record>,
}

/// Store for persisting records, kept oldest first
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    /// Path to the records.json file
    store_path: PathBuf,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::with_path(records_file_path())
    }
}

impl RecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a custom path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            records: Vec::new(),
            store_path: path,
        }
    }

    /// All records, oldest first
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Get a record by ID
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Get a record by list position
    pub fn get_at(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Add a record, keeping creation order, and return its list position
    pub fn add(&mut self, record: Record) -> usize {
        let pos = self
            .records
            .partition_point(|r| r.created_at <= record.created_at);
        self.records.insert(pos, record);
        pos
    }

    /// Remove the record at a list position
    pub fn remove_at(&mut self, index: usize) -> Option<Record> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load store from disk
    pub fn load() -> Result<Self> {
        Self::load_from(&records_file_path())
    }

    /// Load store from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::with_path(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).context("Failed to read records file")?;
        let data: StoreData =
            serde_json::from_str(&content).context("Failed to parse records file")?;

        let mut records = data.records;
        records.sort_by_key(|r| r.created_at);

        Ok(Self {
            records,
            store_path: path.to_path_buf(),
        })
    }

    /// Save store to disk
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.store_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create directory for records file")?;
        }

        let data = StoreData {
            records: self.records.clone(),
        };
        let content = serde_json::to_string_pretty(&data).context("Failed to serialize records")?;
        std::fs::write(&self.store_path, content).context("Failed to write records file")?;

        Ok(())
    }
}

/// Get the path to the records file
pub fn records_file_path() -> PathBuf {
    config_dir().join("records.json")
}
