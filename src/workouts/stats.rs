//! Aggregate workout statistics.

use super::types::Workout;

/// Totals shown on the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkoutStats {
    /// Sum of calories over all workouts
    pub total_calories: u64,
    /// Number of workouts
    pub count: usize,
    /// Calories per workout, rounded to the nearest integer (0 when empty)
    pub average_calories: u64,
}

impl WorkoutStats {
    /// Compute statistics over a list of workouts.
    pub fn from_workouts(workouts: &[Workout]) -> Self {
        let total_calories = total_calories(workouts);
        let count = workouts.len();

        Self {
            total_calories,
            count,
            average_calories: rounded_average(total_calories, count),
        }
    }
}

/// Sum of calories over the given workouts.
pub fn total_calories(workouts: &[Workout]) -> u64 {
    workouts.iter().map(|w| u64::from(w.calories)).sum()
}

/// `round(total / count)` with halves rounded up, or 0 for an empty list.
pub fn rounded_average(total: u64, count: usize) -> u64 {
    if count == 0 {
        return 0;
    }
    let count = count as u64;
    (2 * total + count) / (2 * count)
}

/// Format a number for a stat card: `1.5k` from 1000 upwards.
///
/// Tenths are rounded half up, so 1250 shows as `1.3k`.
pub fn format_compact(value: u64) -> String {
    if value >= 1000 {
        let tenths = (value + 50) / 100;
        format!("{}.{}k", tenths / 10, tenths % 10)
    } else {
        value.to_string()
    }
}
