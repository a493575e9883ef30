//! Workout input validation.
//!
//! [`validate_workout`] is the only constructor of [`NewWorkout`]. The form
//! parses its text through it and the store only accepts `NewWorkout`, so
//! out-of-range input can never reach storage.

use std::fmt;
use std::num::IntErrorKind;
use std::ops::RangeInclusive;

use thiserror::Error;

/// Accepted workout durations in minutes (up to 24 hours).
pub const DURATION_RANGE: RangeInclusive<u32> = 1..=1440;

/// Accepted calorie counts.
pub const CALORIES_RANGE: RangeInclusive<u32> = 1..=10_000;

/// Input field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    WorkoutType,
    Duration,
    Calories,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Workout type is required")]
    TypeRequired,

    #[error("Duration must be a positive number")]
    DurationNotPositive,

    #[error("Duration cannot exceed 24 hours")]
    DurationTooLong,

    #[error("Calories must be a positive number")]
    CaloriesNotPositive,

    #[error("Calories seem too high, please check")]
    CaloriesTooHigh,
}

impl FieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldError::TypeRequired => Field::WorkoutType,
            FieldError::DurationNotPositive | FieldError::DurationTooLong => Field::Duration,
            FieldError::CaloriesNotPositive | FieldError::CaloriesTooHigh => Field::Calories,
        }
    }
}

/// All field errors found in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Error for a specific field, if any.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Drop the error for a field (used when the user edits it).
    pub fn clear(&mut self, field: Field) {
        self.errors.retain(|e| e.field() != field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validated input for creating a workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    workout_type: String,
    duration: u32,
    calories: u32,
}

impl NewWorkout {
    /// Validate typed values.
    pub fn new(
        workout_type: &str,
        duration: u32,
        calories: u32,
    ) -> Result<Self, ValidationErrors> {
        validate_workout(
            workout_type,
            Some(i64::from(duration)),
            Some(i64::from(calories)),
        )
    }

    /// Trimmed activity name.
    pub fn workout_type(&self) -> &str {
        &self.workout_type
    }

    /// Duration in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Calories burned.
    pub fn calories(&self) -> u32 {
        self.calories
    }
}

/// Validate workout input.
///
/// `None` for a numeric field means it was missing or not a number.
pub fn validate_workout(
    workout_type: &str,
    duration: Option<i64>,
    calories: Option<i64>,
) -> Result<NewWorkout, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let workout_type = workout_type.trim();
    if workout_type.is_empty() {
        errors.push(FieldError::TypeRequired);
    }

    let duration = check_range(
        duration,
        &DURATION_RANGE,
        FieldError::DurationNotPositive,
        FieldError::DurationTooLong,
    )
    .map_err(|e| errors.push(e))
    .ok();

    let calories = check_range(
        calories,
        &CALORIES_RANGE,
        FieldError::CaloriesNotPositive,
        FieldError::CaloriesTooHigh,
    )
    .map_err(|e| errors.push(e))
    .ok();

    match (duration, calories) {
        (Some(duration), Some(calories)) if errors.is_empty() => Ok(NewWorkout {
            workout_type: workout_type.to_string(),
            duration,
            calories,
        }),
        _ => Err(errors),
    }
}

fn check_range(
    value: Option<i64>,
    range: &RangeInclusive<u32>,
    not_positive: FieldError,
    too_high: FieldError,
) -> Result<u32, FieldError> {
    match value {
        Some(v) if v > i64::from(*range.end()) => Err(too_high),
        Some(v) if v >= i64::from(*range.start()) => Ok(v as u32),
        _ => Err(not_positive),
    }
}

/// Raw text of the add-workout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutForm {
    pub workout_type: String,
    pub duration: String,
    pub calories: String,
}

impl WorkoutForm {
    /// Parse and validate the form contents.
    pub fn validate(&self) -> Result<NewWorkout, ValidationErrors> {
        validate_workout(
            &self.workout_type,
            parse_integer(&self.duration),
            parse_integer(&self.calories),
        )
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(value) => Some(value),
        // Digit strings past i64 are still numbers, only out of range
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
