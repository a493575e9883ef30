//! Workout list with delete confirmation.

use std::collections::HashSet;

use chrono::{DateTime, Local, TimeZone, Utc};
use egui::{Align, Layout, RichText, ScrollArea, Ui, Window};

use crate::ui::theme::Palette;
use crate::workouts::controller::WorkoutState;
use crate::workouts::types::{Workout, WorkoutId};

/// Format a creation timestamp like "Mar 1, 08:15 AM" in the given zone.
pub fn format_workout_time<Tz: TimeZone>(created_at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    created_at
        .with_timezone(tz)
        .format("%b %-d, %I:%M %p")
        .to_string()
}

/// A delete waiting for the user to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingDelete {
    id: WorkoutId,
    workout_type: String,
}

/// Workout list state.
#[derive(Debug, Default)]
pub struct WorkoutListWidget {
    pending: Option<PendingDelete>,
    /// Deletes confirmed here whose completion has not been reported yet
    requested: HashSet<WorkoutId>,
}

impl WorkoutListWidget {
    /// Record a confirmed delete. Returns `None` if one is already requested
    /// for this workout.
    pub fn confirm(&mut self, id: WorkoutId) -> Option<WorkoutId> {
        if self.requested.insert(id.clone()) {
            Some(id)
        } else {
            None
        }
    }

    /// Forget a requested delete once it has finished.
    pub fn finish(&mut self, id: &WorkoutId) {
        self.requested.remove(id);
    }

    /// A delete for this workout was requested and has not finished.
    pub fn is_requested(&self, id: &WorkoutId) -> bool {
        self.requested.contains(id)
    }

    /// Render the list. Returns the id of a workout whose deletion the user
    /// just confirmed.
    pub fn show(&mut self, ui: &mut Ui, state: &WorkoutState) -> Option<WorkoutId> {
        if state.loading {
            show_loading(ui);
            return None;
        }

        if state.workouts.is_empty() {
            show_empty(ui);
            return None;
        }

        ui.label(
            RichText::new(format!("Your Workouts ({})", state.workouts.len()))
                .size(20.0)
                .strong(),
        );
        ui.add_space(8.0);

        ScrollArea::vertical()
            .max_height(600.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for workout in &state.workouts {
                    let deleting =
                        state.deleting.contains(&workout.id) || self.is_requested(&workout.id);
                    if show_item(ui, workout, deleting) {
                        self.pending = Some(PendingDelete {
                            id: workout.id.clone(),
                            workout_type: workout.workout_type.clone(),
                        });
                    }
                    ui.add_space(6.0);
                }
            });

        self.show_confirmation(ui.ctx())
    }

    fn show_confirmation(&mut self, ctx: &egui::Context) -> Option<WorkoutId> {
        let pending = self.pending.clone()?;
        let mut confirmed = None;
        let mut close = false;

        Window::new("Delete Workout")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!(
                    "Are you sure you want to delete this {} workout?",
                    pending.workout_type
                ));
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                    if ui
                        .add(egui::Button::new("Delete").fill(Palette::ERROR))
                        .clicked()
                    {
                        confirmed = Some(pending.id.clone());
                        close = true;
                    }
                });
            });

        if close {
            self.pending = None;
        }
        confirmed.and_then(|id| self.confirm(id))
    }
}

/// Render one workout row. Returns true when its delete button is clicked.
fn show_item(ui: &mut Ui, workout: &Workout, deleting: bool) -> bool {
    let mut clicked = false;

    egui::Frame::group(ui.style()).inner_margin(10.0).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&workout.workout_type).size(17.0).strong());
                ui.horizontal(|ui| {
                    ui.label(format!("⏱ {} min", workout.duration));
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(format!("🔥 {} cal", workout.calories))
                            .color(Palette::FLAME)
                            .strong(),
                    );
                });
                ui.label(
                    RichText::new(format_workout_time(workout.created_at, &Local))
                        .small()
                        .weak(),
                );
            });

            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                let label = if deleting { "🗑 ..." } else { "🗑" };
                let button = egui::Button::new(RichText::new(label).color(Palette::ERROR));
                if ui
                    .add_enabled(!deleting, button)
                    .on_hover_text(format!("Delete {} workout", workout.workout_type))
                    .clicked()
                {
                    clicked = true;
                }
            });
        });
    });

    clicked
}

fn show_loading(ui: &mut Ui) {
    for _ in 0..3 {
        egui::Frame::group(ui.style()).inner_margin(10.0).show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), 60.0));
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Loading workouts...").weak());
            });
        });
        ui.add_space(6.0);
    }
}

fn show_empty(ui: &mut Ui) {
    egui::Frame::group(ui.style()).inner_margin(24.0).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🏃").size(48.0).weak());
            ui.label(RichText::new("No workouts yet").size(18.0).strong());
            ui.label(
                RichText::new("Add your first workout to start tracking your fitness journey!")
                    .weak(),
            );
        });
    });
}
