//! Workout access layer.
//!
//! Wraps the [`WorkoutStore`] with the dashboard's request timing and maps
//! every storage failure onto one of three user-facing errors. Store calls run
//! on the blocking pool so slot I/O never stalls the async runtime.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinError;

use super::store::{StoreError, WorkoutStore};
use super::types::{Workout, WorkoutId};
use super::validation::NewWorkout;
use crate::storage::config::LatencySettings;
use crate::storage::slot::StorageSlot;

/// User-facing access layer errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to load workouts. Please try again.")]
    LoadFailed,

    #[error("Failed to save workout. Please try again.")]
    SaveFailed,

    #[error("Failed to delete workout. Please try again.")]
    DeleteFailed,
}

/// Underlying cause of an access layer failure, logged before translation.
#[derive(Debug, Error)]
enum BackendFailure {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("storage task failed: {0}")]
    Task(#[from] JoinError),
}

/// Async workout access layer.
#[derive(Clone)]
pub struct WorkoutApi {
    store: WorkoutStore,
    latency: LatencySettings,
}

impl WorkoutApi {
    /// Create an access layer over a store.
    pub fn new(store: WorkoutStore, latency: LatencySettings) -> Self {
        Self { store, latency }
    }

    /// Create an access layer directly over a slot.
    pub fn from_slot(slot: Arc<dyn StorageSlot>, latency: LatencySettings) -> Self {
        Self::new(WorkoutStore::new(slot), latency)
    }

    /// Fetch all workouts.
    pub async fn list_workouts(&self) -> Result<Vec<Workout>, ApiError> {
        simulate_latency(self.latency.list()).await;

        self.with_store(|store| store.list()).await.map_err(|e| {
            tracing::error!("Failed to fetch workouts: {}", e);
            ApiError::LoadFailed
        })
    }

    /// Create a new workout.
    pub async fn create_workout(&self, data: NewWorkout) -> Result<Workout, ApiError> {
        simulate_latency(self.latency.create()).await;

        self.with_store(move |store| store.create(&data))
            .await
            .map_err(|e| {
                tracing::error!("Failed to create workout: {}", e);
                ApiError::SaveFailed
            })
    }

    /// Delete a workout.
    pub async fn delete_workout(&self, id: &WorkoutId) -> Result<(), ApiError> {
        simulate_latency(self.latency.delete()).await;

        let id = id.clone();
        self.with_store(move |store| store.delete(&id))
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete workout: {}", e);
                ApiError::DeleteFailed
            })
    }

    async fn with_store<T, F>(&self, op: F) -> Result<T, BackendFailure>
    where
        T: Send + 'static,
        F: FnOnce(&WorkoutStore) -> Result<T, StoreError> + Send + 'static,
    {
        let store = self.store.clone();
        let result = tokio::task::spawn_blocking(move || op(&store)).await?;
        Ok(result?)
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
