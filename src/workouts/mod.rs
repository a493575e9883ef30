//! Workout logging.
//!
//! Layers, leaves first: [`store`] persists the collection in a storage slot,
//! [`api`] adds request timing and user-facing errors, and [`controller`]
//! keeps the in-memory list the dashboard renders.

pub mod api;
pub mod controller;
pub mod stats;
pub mod store;
pub mod types;
pub mod validation;

pub use api::{ApiError, WorkoutApi};
pub use controller::{
    LoadPhase, Notification, NotificationKind, RemoveOutcome, WorkoutController, WorkoutState,
};
pub use stats::WorkoutStats;
pub use store::{StoreError, WorkoutStore};
pub use types::{Workout, WorkoutId};
pub use validation::{
    validate_workout, Field, FieldError, NewWorkout, ValidationErrors, WorkoutForm,
};
