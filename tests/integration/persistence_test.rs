//! Integration tests for workout persistence across restarts.

use std::sync::Arc;

use rustfit::storage::config::{AppConfig, LatencySettings, StorageBackend};
use rustfit::storage::database::Database;
use rustfit::storage::slot::{FileSlot, StorageSlot, DEFAULT_SLOT_KEY};
use rustfit::storage::{open_slot, DATABASE_FILE};
use rustfit::workouts::{validate_workout, WorkoutApi, WorkoutController, WorkoutStore};
use tempfile::TempDir;

fn config_in(dir: &TempDir, backend: StorageBackend) -> AppConfig {
    let mut config = AppConfig::with_defaults();
    config.data_dir = dir.path().to_path_buf();
    config.storage.backend = backend;
    config.latency = LatencySettings::disabled();
    config
}

#[tokio::test]
async fn test_file_slot_survives_restart() {
    let dir = TempDir::new().unwrap();

    let created = {
        let slot = Arc::new(FileSlot::new(dir.path(), DEFAULT_SLOT_KEY));
        let controller =
            WorkoutController::new(WorkoutApi::from_slot(slot, LatencySettings::disabled()));
        controller.initialize().await;
        controller
            .add(validate_workout("Running", Some(30), Some(250)).unwrap())
            .await
            .unwrap()
    };

    let slot = Arc::new(FileSlot::new(dir.path(), DEFAULT_SLOT_KEY));
    assert!(slot.path().exists());

    let controller =
        WorkoutController::new(WorkoutApi::from_slot(slot, LatencySettings::disabled()));
    controller.initialize().await;

    assert_eq!(controller.workouts(), vec![created]);
    assert_eq!(controller.total_calories(), 250);
}

#[test]
fn test_sqlite_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DATABASE_FILE);

    let id = {
        let db = Arc::new(Database::open(&path).unwrap());
        let store = WorkoutStore::new(Arc::new(db.slot(DEFAULT_SLOT_KEY)));
        store
            .create(&validate_workout("Cycling", Some(60), Some(520)).unwrap())
            .unwrap()
            .id
    };

    let db = Arc::new(Database::open(&path).unwrap());
    let store = WorkoutStore::new(Arc::new(db.slot(DEFAULT_SLOT_KEY)));
    let workouts = store.list().unwrap();

    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].id, id);
    assert_eq!(workouts[0].workout_type, "Cycling");
}

#[test]
fn test_slots_are_isolated_by_key() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mine = WorkoutStore::new(Arc::new(db.slot("mine")));
    let theirs = WorkoutStore::new(Arc::new(db.slot("theirs")));

    mine.create(&validate_workout("Yoga", Some(30), Some(120)).unwrap())
        .unwrap();

    assert_eq!(mine.list().unwrap().len(), 1);
    assert!(theirs.list().unwrap().is_empty());
}

#[test]
fn test_open_slot_for_each_backend() {
    let dir = TempDir::new().unwrap();

    for backend in [StorageBackend::File, StorageBackend::Sqlite, StorageBackend::Memory] {
        let config = config_in(&dir, backend);
        let slot = open_slot(&config).unwrap();
        assert_eq!(slot.key(), DEFAULT_SLOT_KEY);

        let store = WorkoutStore::new(slot);
        store
            .create(&validate_workout("Plank", Some(5), Some(30)).unwrap())
            .unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    assert!(dir.path().join(DATABASE_FILE).exists());
}

#[test]
fn test_unreadable_file_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let slot = FileSlot::new(dir.path(), DEFAULT_SLOT_KEY);
    std::fs::write(slot.path(), "[{\"id\": 42}]").unwrap();

    let store = WorkoutStore::new(Arc::new(slot));
    assert!(store.list().unwrap().is_empty());
}
