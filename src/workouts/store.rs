//! Persistent workout store.
//!
//! The store is the only writer of the workout slot. Every mutation reads the
//! whole collection, edits it and writes it back in one `save`.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use super::types::{Workout, WorkoutId};
use super::validation::NewWorkout;
use crate::storage::slot::{SlotError, StorageSlot};

/// Workout store over a storage slot.
#[derive(Clone)]
pub struct WorkoutStore {
    slot: Arc<dyn StorageSlot>,
}

impl WorkoutStore {
    /// Create a store over the given slot.
    pub fn new(slot: Arc<dyn StorageSlot>) -> Self {
        Self { slot }
    }

    /// All stored workouts in stored order.
    ///
    /// A missing or undecodable slot reads as an empty collection. Failing to
    /// read the slot at all is an error.
    pub fn list(&self) -> Result<Vec<Workout>, StoreError> {
        let Some(raw) = self.slot.load()? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Workout>>(&raw) {
            Ok(workouts) => Ok(workouts),
            Err(e) => {
                tracing::warn!(
                    "Slot '{}' holds unreadable workout data ({} bytes), treating as empty: {}",
                    self.slot.key(),
                    raw.len(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Create a workout and prepend it to the collection.
    pub fn create(&self, data: &NewWorkout) -> Result<Workout, StoreError> {
        let mut workouts = self.list()?;

        let mut id = WorkoutId::generate();
        while workouts.iter().any(|w| w.id == id) {
            id = WorkoutId::generate();
        }

        let workout = Workout::from_new(id, data, Utc::now());
        workouts.insert(0, workout.clone());
        self.persist(&workouts)?;

        tracing::debug!("Created workout {} ({})", workout.id, workout.workout_type);
        Ok(workout)
    }

    /// Delete a workout by id. Deleting an unknown id is not an error.
    pub fn delete(&self, id: &WorkoutId) -> Result<(), StoreError> {
        let mut workouts = self.list()?;
        let before = workouts.len();
        workouts.retain(|w| &w.id != id);

        if workouts.len() == before {
            tracing::debug!("Workout {} not in store, nothing to delete", id);
        }

        self.persist(&workouts)
    }

    fn persist(&self, workouts: &[Workout]) -> Result<(), StoreError> {
        let json = serde_json::to_string(workouts)?;
        self.slot.save(&json)?;
        Ok(())
    }
}

/// Workout store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Slot(#[from] SlotError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
