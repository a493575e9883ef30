//! Workout record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::NewWorkout;

/// Opaque workout identifier.
///
/// New ids are UUID v4 text, but any string read back from storage is
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Borrow the id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single logged workout.
///
/// Serialized with the field names `id`, `type`, `duration`, `calories` and
/// `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique identifier, assigned by the store
    pub id: WorkoutId,
    /// Activity name, e.g. "Running"
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Duration in minutes
    pub duration: u32,
    /// Calories burned
    pub calories: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Workout {
    /// Build a stored record from validated input.
    pub(crate) fn from_new(id: WorkoutId, data: &NewWorkout, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            workout_type: data.workout_type().to_string(),
            duration: data.duration(),
            calories: data.calories(),
            created_at,
        }
    }
}
