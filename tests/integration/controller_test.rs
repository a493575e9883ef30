//! Integration tests for the workout controller flows.
//!
//! Each test drives the controller the way the dashboard does: validated
//! input in, state snapshots and notifications out.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossbeam::channel::Receiver;
use rustfit::storage::config::LatencySettings;
use rustfit::storage::slot::MemorySlot;
use rustfit::workouts::{
    validate_workout, ApiError, LoadPhase, Notification, NotificationKind, RemoveOutcome,
    WorkoutApi, WorkoutController, WorkoutForm, WorkoutStore,
};

fn setup(latency: LatencySettings) -> (Arc<MemorySlot>, WorkoutController, Receiver<Notification>) {
    let slot = Arc::new(MemorySlot::new());
    let api = WorkoutApi::from_slot(slot.clone(), latency);
    let mut controller = WorkoutController::new(api);
    let rx = controller.notification_receiver();
    (slot, controller, rx)
}

fn drain(rx: &Receiver<Notification>) -> Vec<Notification> {
    rx.try_iter().collect()
}

#[tokio::test]
async fn test_add_first_workout() {
    let (slot, controller, rx) = setup(LatencySettings::disabled());
    assert!(controller.initialize().await);

    let data = validate_workout("Running", Some(30), Some(250)).unwrap();
    let before = Utc::now();
    let workout = controller.add(data).await.unwrap();
    let after = Utc::now();

    assert!(workout.created_at >= before && workout.created_at <= after);
    assert_eq!(controller.workouts(), vec![workout.clone()]);
    assert_eq!(controller.total_calories(), 250);

    // The record is in storage, not just in memory
    let stored = WorkoutStore::new(slot).list().unwrap();
    assert_eq!(stored, vec![workout]);

    let notes = drain(&rx);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Success);
    assert_eq!(notes[0].title, "Success!");
    assert_eq!(notes[0].description, "Running workout added successfully");
}

#[tokio::test]
async fn test_add_two_then_delete_first() {
    let (_slot, controller, rx) = setup(LatencySettings::disabled());
    controller.initialize().await;

    let first = controller
        .add(validate_workout("Running", Some(30), Some(250)).unwrap())
        .await
        .unwrap();
    let second = controller
        .add(validate_workout("Cycling", Some(45), Some(400)).unwrap())
        .await
        .unwrap();

    assert_eq!(controller.total_calories(), 650);

    let outcome = controller.remove(&first.id).await;
    assert_eq!(outcome, RemoveOutcome::Confirmed);
    assert_eq!(controller.workouts(), vec![second]);
    assert_eq!(controller.total_calories(), 400);

    let last = drain(&rx).pop().unwrap();
    assert_eq!(last.title, "Deleted");
    assert_eq!(last.description, "Running removed successfully");
}

#[tokio::test]
async fn test_invalid_input_never_reaches_storage() {
    let (slot, controller, _rx) = setup(LatencySettings::disabled());
    controller.initialize().await;

    let form = WorkoutForm {
        workout_type: "Marathon".to_string(),
        duration: "1500".to_string(),
        calories: "3000".to_string(),
    };
    assert!(form.validate().is_err());

    assert!(controller.workouts().is_empty());
    assert!(slot.contents().is_none());
}

#[tokio::test]
async fn test_failed_delete_resynchronizes() {
    let (slot, controller, rx) = setup(LatencySettings::disabled());
    controller.initialize().await;

    let workout = controller
        .add(validate_workout("Swimming", Some(40), Some(350)).unwrap())
        .await
        .unwrap();
    drain(&rx);

    slot.set_fail_saves(true);
    let outcome = controller.remove(&workout.id).await;

    assert_eq!(outcome, RemoveOutcome::Resynchronized(ApiError::DeleteFailed));
    assert!(!outcome.is_confirmed());
    assert_eq!(controller.workouts(), vec![workout.clone()]);
    assert_eq!(
        controller.error().as_deref(),
        Some("Failed to delete workout. Please try again.")
    );
    assert!(!controller.is_deleting(&workout.id));

    let notes = drain(&rx);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Error);
    assert_eq!(notes[0].title, "Error");
}

#[tokio::test]
async fn test_failed_delete_reloads_from_storage() {
    let (slot, controller, _rx) = setup(LatencySettings::disabled());
    controller.initialize().await;

    let workout = controller
        .add(validate_workout("Running", Some(30), Some(250)).unwrap())
        .await
        .unwrap();

    // Written behind the controller's back, so only a reload can surface it
    let external = WorkoutStore::new(slot.clone())
        .create(&validate_workout("Climbing", Some(60), Some(500)).unwrap())
        .unwrap();
    assert_eq!(controller.workouts(), vec![workout.clone()]);

    slot.set_fail_saves(true);
    let outcome = controller.remove(&workout.id).await;
    slot.set_fail_saves(false);

    assert_eq!(outcome, RemoveOutcome::Resynchronized(ApiError::DeleteFailed));

    let stored = WorkoutStore::new(slot).list().unwrap();
    assert_eq!(stored, vec![external, workout]);
    assert_eq!(controller.workouts(), stored);
    assert_eq!(controller.total_calories(), 750);
}

#[tokio::test]
async fn test_failed_add_keeps_list() {
    let (slot, controller, rx) = setup(LatencySettings::disabled());
    controller.initialize().await;

    slot.set_fail_saves(true);
    let result = controller
        .add(validate_workout("Boxing", Some(30), Some(300)).unwrap())
        .await;

    assert_eq!(result.unwrap_err(), ApiError::SaveFailed);
    assert!(controller.workouts().is_empty());
    assert!(!controller.is_submitting());
    assert_eq!(
        controller.error().as_deref(),
        Some("Failed to save workout. Please try again.")
    );
    assert_eq!(drain(&rx)[0].kind, NotificationKind::Error);
}

#[tokio::test]
async fn test_failed_load_reports_error() {
    let (slot, controller, rx) = setup(LatencySettings::disabled());
    slot.set_fail_loads(true);

    controller.initialize().await;

    assert_eq!(controller.phase(), LoadPhase::Ready);
    assert!(!controller.loading());
    assert_eq!(
        controller.error().as_deref(),
        Some("Failed to load workouts. Please try again.")
    );
    assert_eq!(drain(&rx).len(), 1);

    // A later refresh clears the error
    slot.set_fail_loads(false);
    controller.refresh().await;
    assert!(controller.error().is_none());
}

#[tokio::test]
async fn test_initialize_runs_once() {
    let (_slot, controller, _rx) = setup(LatencySettings::disabled());

    assert_eq!(controller.phase(), LoadPhase::Uninitialized);
    assert!(controller.initialize().await);
    assert!(!controller.initialize().await);
    assert_eq!(controller.phase(), LoadPhase::Ready);
}

#[tokio::test]
async fn test_remove_is_optimistic() {
    let latency = LatencySettings {
        enabled: true,
        list_ms: 0,
        create_ms: 0,
        delete_ms: 200,
    };
    let (_slot, controller, _rx) = setup(latency);
    let controller = Arc::new(controller);
    controller.initialize().await;

    let workout = controller
        .add(validate_workout("Rowing", Some(20), Some(180)).unwrap())
        .await
        .unwrap();

    let task = {
        let controller = Arc::clone(&controller);
        let id = workout.id.clone();
        tokio::spawn(async move { controller.remove(&id).await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(controller.workouts().is_empty());
    assert!(controller.is_deleting(&workout.id));

    assert!(task.await.unwrap().is_confirmed());
    assert!(!controller.is_deleting(&workout.id));
}

#[tokio::test]
async fn test_latency_is_applied() {
    let latency = LatencySettings {
        enabled: true,
        list_ms: 0,
        create_ms: 60,
        delete_ms: 0,
    };
    let (_slot, controller, _rx) = setup(latency);

    let start = Instant::now();
    controller
        .add(validate_workout("Stretching", Some(15), Some(40)).unwrap())
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_millis(60));
}
