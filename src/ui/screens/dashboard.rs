//! Dashboard screen: stats, add form and workout list.

use egui::{RichText, Ui};

use crate::ui::theme::Palette;
use crate::ui::widgets::{show_stats_row, WorkoutFormWidget, WorkoutListWidget};
use crate::workouts::controller::WorkoutState;
use crate::workouts::types::WorkoutId;
use crate::workouts::validation::NewWorkout;

/// Actions that can result from the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// No action
    None,
    /// Save a validated workout
    Add(NewWorkout),
    /// Delete a workout (already confirmed by the user)
    Remove(WorkoutId),
    /// Reload the list from storage
    Refresh,
}

/// Dashboard screen state.
#[derive(Debug, Default)]
pub struct DashboardScreen {
    form: WorkoutFormWidget,
    list: WorkoutListWidget,
}

impl DashboardScreen {
    /// Create a new dashboard screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when an add finishes. Only a successful save clears the form.
    pub fn on_add_finished(&mut self, saved: bool) {
        self.form.finish(saved);
    }

    /// Called when a delete finishes, whatever the outcome.
    pub fn on_remove_finished(&mut self, id: &WorkoutId) {
        self.list.finish(id);
    }

    /// Render the dashboard.
    pub fn show(&mut self, ui: &mut Ui, state: &WorkoutState) -> DashboardAction {
        let mut action = DashboardAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(
                RichText::new("🏋 Fitness Tracker")
                    .size(34.0)
                    .strong()
                    .color(Palette::FLAME),
            );
            ui.label(
                RichText::new(
                    "Track your workouts, monitor calories burned, and stay motivated on your fitness journey",
                )
                .weak(),
            );
            ui.add_space(12.0);
        });

        if let Some(error) = &state.error {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("⚠ {}", error)).color(Palette::ERROR));
                if ui.add_enabled(!state.loading, egui::Button::new("Retry")).clicked() {
                    action = DashboardAction::Refresh;
                }
            });
            ui.add_space(8.0);
        }

        show_stats_row(ui, &state.stats());
        ui.add_space(16.0);

        ui.columns(2, |columns| {
            if let Some(data) = self.form.show(&mut columns[0], state.submitting || state.loading) {
                action = DashboardAction::Add(data);
            }

            if let Some(id) = self.list.show(&mut columns[1], state) {
                action = DashboardAction::Remove(id);
            }
        });

        action
    }
}
