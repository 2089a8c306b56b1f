//! # Storage Backends
//!
//! The storage slot abstraction the cart store persists through.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storage Slot Abstraction                            │
//! │                                                                         │
//! │  CartStore ──► StorageBackend trait ──┬──► MemoryStorage (tests)        │
//! │                 get / set / clear     │                                 │
//! │                                       └──► FileStorage (one file per   │
//! │                                            slot under a data dir)      │
//! │                                                                         │
//! │  The slot is the browser-localStorage analog: a single named location  │
//! │  holding one string payload. The store never reads or writes any       │
//! │  other location.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Backend Trait
// =============================================================================

/// Named-slot string storage.
///
/// Slot names are simple identifiers (`eCommSimCart`), not paths. Backends
/// hold exactly one payload per slot; `set` replaces the previous payload
/// wholesale.
pub trait StorageBackend {
    /// Reads the payload stored in a slot, if any.
    fn get(&self, slot: &str) -> StoreResult<Option<String>>;

    /// Writes a payload to a slot, replacing any previous value.
    fn set(&mut self, slot: &str, payload: &str) -> StoreResult<()>;

    /// Removes a slot entirely. Clearing an absent slot is not an error.
    fn clear(&mut self, slot: &str) -> StoreResult<()>;
}

// =============================================================================
// In-Memory Backend
// =============================================================================

/// In-memory storage backend.
///
/// ## Usage
/// The test double for anything built on [`StorageBackend`]; also useful for
/// an ephemeral cart that should not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, slot: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn set(&mut self, slot: &str, payload: &str) -> StoreResult<()> {
        self.slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }

    fn clear(&mut self, slot: &str) -> StoreResult<()> {
        self.slots.remove(slot);
        Ok(())
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// File-backed storage: each slot is a `<slot>.json` file under a data
/// directory.
///
/// ## Example
/// ```rust,no_run
/// use ecommsim_store::storage::FileStorage;
///
/// let storage = FileStorage::new("./data")?;
/// # Ok::<(), ecommsim_store::StoreError>(())
/// ```
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a file backend rooted at `dir`, creating the directory if
    /// needed.
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::storage(dir.display().to_string(), e))?;
        debug!(dir = %dir.display(), "file storage ready");
        Ok(FileStorage { dir })
    }

    /// Directory the slot files live under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, slot: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::storage(slot, e)),
        }
    }

    fn set(&mut self, slot: &str, payload: &str) -> StoreResult<()> {
        fs::write(self.slot_path(slot), payload).map_err(|e| StoreError::storage(slot, e))
    }

    fn clear(&mut self, slot: &str) -> StoreResult<()> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::storage(slot, e)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
