//! Named key-value slots holding the serialized workout collection.
//!
//! A slot stores one opaque string under a fixed key. The workout store owns
//! the encoding; slots only move bytes in and out.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

/// Default slot key for the workout collection.
pub const DEFAULT_SLOT_KEY: &str = "fitness_tracker_workouts";

/// A single named storage slot.
///
/// Implementations write the whole value at once; callers never observe a
/// partially written value.
pub trait StorageSlot: Send + Sync {
    /// Slot key this instance reads and writes.
    fn key(&self) -> &str;

    /// Read the current value. `Ok(None)` means the slot has never been written.
    fn load(&self) -> Result<Option<String>, SlotError>;

    /// Replace the stored value.
    fn save(&self, contents: &str) -> Result<(), SlotError>;
}

/// Slot access errors.
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Injected failure: {0}")]
    Injected(&'static str),
}

/// Slot backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileSlot {
    key: String,
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot stored as `<dir>/<key>.json`.
    pub fn new(dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = dir.as_ref().join(format!("{key}.json"));
        Self { key, path }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl StorageSlot for FileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> Result<Option<String>, SlotError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SlotError::Io(e)),
        }
    }

    fn save(&self, contents: &str) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write then rename so readers only ever see a complete file.
        let tmp = self.temp_path();
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &self.path)?;

        tracing::trace!("Wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }
}

/// In-process slot. Used for ephemeral sessions and as a test double.
#[derive(Debug, Default)]
pub struct MemorySlot {
    key: String,
    value: RwLock<Option<String>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemorySlot {
    /// Create an empty slot under the default key.
    pub fn new() -> Self {
        Self::with_key(DEFAULT_SLOT_KEY)
    }

    /// Create an empty slot under the given key.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Create a slot pre-populated with a raw value.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let slot = Self::new();
        *slot.value.write().unwrap_or_else(PoisonError::into_inner) = Some(contents.into());
        slot
    }

    /// Raw stored value.
    pub fn contents(&self) -> Option<String> {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Make subsequent loads fail until reset.
    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent saves fail until reset.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl StorageSlot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> Result<Option<String>, SlotError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(SlotError::Injected("load"));
        }
        Ok(self.contents())
    }

    fn save(&self, contents: &str) -> Result<(), SlotError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(SlotError::Injected("save"));
        }
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = Some(contents.to_string());
        Ok(())
    }
}
