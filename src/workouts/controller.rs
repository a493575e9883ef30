//! Workout state controller.
//!
//! Holds the in-memory workout list shown by the dashboard, derives the
//! aggregate statistics and runs the add/remove/refresh flows:
//!
//! - `refresh` replaces the list wholesale from the access layer
//! - `add` prepends the created record without refetching
//! - `remove` drops the record immediately, then either confirms or
//!   resynchronizes from storage if the delete failed
//!
//! State sits behind a lock that is never held across an `.await`, so the UI
//! thread can take snapshots while an operation is in flight.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crossbeam::channel::{Receiver, Sender};

use super::api::{ApiError, WorkoutApi};
use super::stats::{self, WorkoutStats};
use super::types::{Workout, WorkoutId};
use super::validation::NewWorkout;

/// Lifecycle of the workout list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing fetched yet
    #[default]
    Uninitialized,
    /// First fetch in flight
    Loading,
    /// At least one fetch has completed (successfully or not)
    Ready,
}

/// Snapshot of controller state.
#[derive(Debug, Clone, Default)]
pub struct WorkoutState {
    /// Workouts, newest first
    pub workouts: Vec<Workout>,
    /// A fetch is in flight
    pub loading: bool,
    /// Message of the most recent failure
    pub error: Option<String>,
    /// List lifecycle
    pub phase: LoadPhase,
    /// An add is in flight
    pub submitting: bool,
    /// Workouts with a delete in flight
    pub deleting: HashSet<WorkoutId>,
}

impl WorkoutState {
    /// Sum of calories over the current list.
    pub fn total_calories(&self) -> u64 {
        stats::total_calories(&self.workouts)
    }

    /// Aggregate statistics over the current list.
    pub fn stats(&self) -> WorkoutStats {
        WorkoutStats::from_workouts(&self.workouts)
    }
}

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn success(title: &str, description: String) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.to_string(),
            description,
        }
    }

    fn error(error: ApiError) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            description: error.to_string(),
        }
    }
}

/// Result of an optimistic removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Storage confirmed the delete; the optimistic list stands
    Confirmed,
    /// The delete failed and the list was reloaded from storage
    Resynchronized(ApiError),
}

impl RemoveOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, RemoveOutcome::Confirmed)
    }
}

/// In-memory workout state and the operations that mutate it.
pub struct WorkoutController {
    api: WorkoutApi,
    state: Arc<RwLock<WorkoutState>>,
    notification_tx: Option<Sender<Notification>>,
    initialized: AtomicBool,
}

impl WorkoutController {
    /// Create a controller over an access layer.
    pub fn new(api: WorkoutApi) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(WorkoutState::default())),
            notification_tx: None,
            initialized: AtomicBool::new(false),
        }
    }

    /// Get a receiver for user notifications.
    pub fn notification_receiver(&mut self) -> Receiver<Notification> {
        let (tx, rx) = crossbeam::channel::unbounded();
        self.notification_tx = Some(tx);
        rx
    }

    fn notify(&self, notification: Notification) {
        if let Some(tx) = &self.notification_tx {
            let _ = tx.send(notification);
        }
    }

    fn update<R>(&self, f: impl FnOnce(&mut WorkoutState) -> R) -> R {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    fn read<R>(&self, f: impl FnOnce(&WorkoutState) -> R) -> R {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> WorkoutState {
        self.read(WorkoutState::clone)
    }

    /// Current workouts, newest first.
    pub fn workouts(&self) -> Vec<Workout> {
        self.read(|s| s.workouts.clone())
    }

    pub fn loading(&self) -> bool {
        self.read(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.read(|s| s.error.clone())
    }

    pub fn phase(&self) -> LoadPhase {
        self.read(|s| s.phase)
    }

    pub fn total_calories(&self) -> u64 {
        self.read(WorkoutState::total_calories)
    }

    pub fn stats(&self) -> WorkoutStats {
        self.read(WorkoutState::stats)
    }

    /// An add is in flight.
    pub fn is_submitting(&self) -> bool {
        self.read(|s| s.submitting)
    }

    /// A delete for this workout is in flight.
    pub fn is_deleting(&self, id: &WorkoutId) -> bool {
        self.read(|s| s.deleting.contains(id))
    }

    /// Run the first fetch. Returns false if it has already run.
    pub async fn initialize(&self) -> bool {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return false;
        }
        tracing::info!("Loading workouts");
        self.refresh().await;
        true
    }

    /// Reload the list from storage.
    ///
    /// On failure the previous list stays in place and the error is recorded.
    pub async fn refresh(&self) {
        self.update(|s| {
            s.loading = true;
            s.error = None;
            if s.phase == LoadPhase::Uninitialized {
                s.phase = LoadPhase::Loading;
            }
        });

        let result = self.api.list_workouts().await;

        let failure = self.update(|s| {
            s.loading = false;
            s.phase = LoadPhase::Ready;
            match result {
                Ok(workouts) => {
                    tracing::debug!("Loaded {} workouts", workouts.len());
                    s.workouts = workouts;
                    None
                }
                Err(e) => {
                    s.error = Some(e.to_string());
                    Some(e)
                }
            }
        });

        if let Some(e) = failure {
            self.notify(Notification::error(e));
        }
    }

    /// Create a workout and prepend it to the list.
    ///
    /// The error is returned so the caller can keep the submitted input.
    pub async fn add(&self, data: NewWorkout) -> Result<Workout, ApiError> {
        self.update(|s| {
            s.error = None;
            s.submitting = true;
        });

        let workout_type = data.workout_type().to_string();
        let result = self.api.create_workout(data).await;

        match result {
            Ok(workout) => {
                self.update(|s| {
                    s.submitting = false;
                    s.workouts.insert(0, workout.clone());
                });
                self.notify(Notification::success(
                    "Success!",
                    format!("{} workout added successfully", workout_type),
                ));
                Ok(workout)
            }
            Err(e) => {
                self.update(|s| {
                    s.submitting = false;
                    s.error = Some(e.to_string());
                });
                self.notify(Notification::error(e));
                Err(e)
            }
        }
    }

    /// Remove a workout optimistically.
    ///
    /// The record leaves the list before storage is touched. If the delete
    /// fails the whole list is reloaded rather than re-inserting the record,
    /// since storage may have changed in the meantime.
    pub async fn remove(&self, id: &WorkoutId) -> RemoveOutcome {
        let removed_type = self.update(|s| {
            s.error = None;
            s.deleting.insert(id.clone());
            let removed_type = s
                .workouts
                .iter()
                .find(|w| &w.id == id)
                .map(|w| w.workout_type.clone());
            s.workouts.retain(|w| &w.id != id);
            removed_type
        });

        match self.api.delete_workout(id).await {
            Ok(()) => {
                self.update(|s| {
                    s.deleting.remove(id);
                });
                self.notify(Notification::success(
                    "Deleted",
                    format!(
                        "{} removed successfully",
                        removed_type.as_deref().unwrap_or("Workout")
                    ),
                ));
                RemoveOutcome::Confirmed
            }
            Err(e) => {
                tracing::warn!("Delete of {} failed, resynchronizing", id);
                self.refresh().await;
                self.update(|s| {
                    s.deleting.remove(id);
                    s.error = Some(e.to_string());
                });
                self.notify(Notification::error(e));
                RemoveOutcome::Resynchronized(e)
            }
        }
    }
}
