//! Unit tests for aggregate statistics.

use chrono::Utc;
use rustfit::workouts::stats::{format_compact, WorkoutStats};
use rustfit::workouts::types::{Workout, WorkoutId};

fn workout(id: &str, calories: u32) -> Workout {
    Workout {
        id: WorkoutId::from(id),
        workout_type: "Cycling".to_string(),
        duration: 45,
        calories,
        created_at: Utc::now(),
    }
}

#[test]
fn test_stats_over_list() {
    let workouts = vec![workout("a", 250), workout("b", 400), workout("c", 125)];
    let stats = WorkoutStats::from_workouts(&workouts);

    assert_eq!(stats.total_calories, 775);
    assert_eq!(stats.count, 3);
    // 775 / 3 = 258.33
    assert_eq!(stats.average_calories, 258);
}

#[test]
fn test_average_rounds_half_up() {
    let workouts = vec![workout("a", 100), workout("b", 101)];
    assert_eq!(WorkoutStats::from_workouts(&workouts).average_calories, 101);
}

#[test]
fn test_empty_list() {
    let stats = WorkoutStats::from_workouts(&[]);

    assert_eq!(stats.total_calories, 0);
    assert_eq!(stats.count, 0);
    assert_eq!(stats.average_calories, 0);
}

#[test]
fn test_total_does_not_overflow() {
    let workouts: Vec<Workout> = (0..1000)
        .map(|i| workout(&i.to_string(), 10_000))
        .collect();

    let stats = WorkoutStats::from_workouts(&workouts);
    assert_eq!(stats.total_calories, 10_000_000);
    assert_eq!(format_compact(stats.total_calories), "10000.0k");
}

#[test]
fn test_compact_totals_round_half_up() {
    let workouts = vec![workout("a", 1000), workout("b", 250)];
    let stats = WorkoutStats::from_workouts(&workouts);

    assert_eq!(format_compact(stats.total_calories), "1.3k");
    assert_eq!(format_compact(3250), "3.3k");
    assert_eq!(format_compact(1249), "1.2k");
}
