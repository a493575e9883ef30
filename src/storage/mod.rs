//! Storage module for slots and configuration.

pub mod config;
pub mod database;
pub mod schema;
pub mod slot;

use std::sync::Arc;

pub use config::{AppConfig, LatencySettings, StorageBackend, Theme, UiSettings};
pub use database::{Database, DatabaseError, SqliteSlot};
pub use slot::{FileSlot, MemorySlot, SlotError, StorageSlot, DEFAULT_SLOT_KEY};

/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE: &str = "rustfit.db";

/// Open the workout slot selected by the configuration.
pub fn open_slot(config: &AppConfig) -> Result<Arc<dyn StorageSlot>, DatabaseError> {
    let key = config.storage.slot_key.clone();

    let slot: Arc<dyn StorageSlot> = match config.storage.backend {
        StorageBackend::File => Arc::new(FileSlot::new(&config.data_dir, key)),
        StorageBackend::Sqlite => {
            let db = Arc::new(Database::open(&config.data_dir.join(DATABASE_FILE))?);
            Arc::new(db.slot(key))
        }
        StorageBackend::Memory => Arc::new(MemorySlot::with_key(key)),
    };

    tracing::info!(
        "Opened {:?} workout slot '{}' in {}",
        config.storage.backend,
        slot.key(),
        config.data_dir.display()
    );

    Ok(slot)
}
