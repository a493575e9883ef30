//! Unit tests for workout input validation.

use rustfit::workouts::validation::{
    validate_workout, Field, FieldError, WorkoutForm, CALORIES_RANGE, DURATION_RANGE,
};

fn form(workout_type: &str, duration: &str, calories: &str) -> WorkoutForm {
    WorkoutForm {
        workout_type: workout_type.to_string(),
        duration: duration.to_string(),
        calories: calories.to_string(),
    }
}

#[test]
fn test_valid_input_is_trimmed() {
    let data = form("  Running ", " 30", "250 ").validate().unwrap();

    assert_eq!(data.workout_type(), "Running");
    assert_eq!(data.duration(), 30);
    assert_eq!(data.calories(), 250);
}

#[test]
fn test_range_boundaries() {
    assert!(validate_workout("Walk", Some(1), Some(1)).is_ok());
    assert!(validate_workout(
        "Ultra",
        Some(i64::from(*DURATION_RANGE.end())),
        Some(i64::from(*CALORIES_RANGE.end()))
    )
    .is_ok());

    let errors = validate_workout("Ultra", Some(1441), Some(10_001)).unwrap_err();
    assert_eq!(errors.get(Field::Duration), Some(&FieldError::DurationTooLong));
    assert_eq!(errors.get(Field::Calories), Some(&FieldError::CaloriesTooHigh));
}

#[test]
fn test_every_field_reported_at_once() {
    let errors = form("   ", "0", "-5").validate().unwrap_err();

    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(Field::WorkoutType), Some(&FieldError::TypeRequired));
    assert_eq!(errors.get(Field::Duration), Some(&FieldError::DurationNotPositive));
    assert_eq!(errors.get(Field::Calories), Some(&FieldError::CaloriesNotPositive));
}

#[test]
fn test_non_numeric_text_is_not_positive() {
    let errors = form("Yoga", "half an hour", "").validate().unwrap_err();

    assert_eq!(errors.get(Field::Duration), Some(&FieldError::DurationNotPositive));
    assert_eq!(errors.get(Field::Calories), Some(&FieldError::CaloriesNotPositive));
    assert!(errors.get(Field::WorkoutType).is_none());
}

#[test]
fn test_decimal_text_is_rejected() {
    let errors = form("Swim", "30.5", "200").validate().unwrap_err();
    assert_eq!(errors.get(Field::Duration), Some(&FieldError::DurationNotPositive));
}

#[test]
fn test_error_messages() {
    let errors = form("", "1500", "20000").validate().unwrap_err();

    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "Workout type is required",
            "Duration cannot exceed 24 hours",
            "Calories seem too high, please check",
        ]
    );
}

#[test]
fn test_clearing_a_field_error() {
    let mut errors = form("", "0", "100").validate().unwrap_err();
    assert_eq!(errors.len(), 2);

    errors.clear(Field::WorkoutType);
    assert!(errors.get(Field::WorkoutType).is_none());
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_huge_duration_reports_limit() {
    let errors = form("Hike", "99999999999999999999", "400").validate().unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(Field::Duration).map(ToString::to_string).as_deref(),
        Some("Duration cannot exceed 24 hours")
    );
}
