//! RustFit - Workout Log Dashboard
//!
//! A self-hosted desktop dashboard for logging workouts and tracking calories
//! burned. Workouts persist in a local key-value slot (JSON file, SQLite or
//! memory) behind an async access layer, and an in-memory controller drives
//! the egui front end with optimistic updates.

pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use storage::config::AppConfig;
pub use workouts::controller::WorkoutController;
pub use workouts::types::Workout;
