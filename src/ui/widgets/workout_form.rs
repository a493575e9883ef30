//! Add-workout form.
//!
//! The form keeps its text until the owner reports a successful save through
//! [`WorkoutFormWidget::finish`], so a failed save never loses the user's
//! input. A submitted form stays locked until that report arrives.

use egui::{RichText, TextEdit, Ui};

use crate::ui::theme::Palette;
use crate::workouts::validation::{Field, NewWorkout, ValidationErrors, WorkoutForm};

/// Add-workout form state.
#[derive(Debug, Default)]
pub struct WorkoutFormWidget {
    form: WorkoutForm,
    errors: ValidationErrors,
    /// Submitted and waiting for the add to finish
    pending: bool,
}

impl WorkoutFormWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw input.
    pub fn form(&self) -> &WorkoutForm {
        &self.form
    }

    /// Current field errors.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// An add from this form is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Clear input and errors.
    fn reset(&mut self) {
        self.form.clear();
        self.errors = ValidationErrors::default();
    }

    /// Unlock the form once an add finishes. Input is cleared only if saved.
    pub fn finish(&mut self, saved: bool) {
        self.pending = false;
        if saved {
            self.reset();
        }
    }

    /// Validate the current input, recording field errors on failure.
    ///
    /// Returns `None` while a previous submission is still pending.
    pub fn submit(&mut self) -> Option<NewWorkout> {
        if self.pending {
            return None;
        }

        match self.form.validate() {
            Ok(data) => {
                self.errors = ValidationErrors::default();
                self.pending = true;
                Some(data)
            }
            Err(errors) => {
                tracing::debug!("Workout form rejected: {}", errors);
                self.errors = errors;
                None
            }
        }
    }

    /// Render the form. Returns validated input when the user submits.
    ///
    /// `busy` disables every input while the controller reports work in
    /// flight; a pending submission disables them too.
    pub fn show(&mut self, ui: &mut Ui, busy: bool) -> Option<NewWorkout> {
        let mut submitted = None;
        let busy = busy || self.pending;

        ui.label(RichText::new("Add New Workout").size(20.0).strong().color(Palette::FLAME));
        ui.add_space(8.0);

        ui.add_enabled_ui(!busy, |ui| {
            self.text_field(
                ui,
                Field::WorkoutType,
                "Workout Type *",
                "e.g., Running, Push-ups, Cycling",
            );

            ui.columns(2, |columns| {
                self.text_field(&mut columns[0], Field::Duration, "Duration (minutes) *", "30");
                self.text_field(&mut columns[1], Field::Calories, "Calories Burned *", "250");
            });

            ui.add_space(8.0);

            let label = if busy { "Adding Workout..." } else { "Add Workout" };
            let button = egui::Button::new(RichText::new(label).strong()).fill(Palette::FLAME);
            let width = ui.available_width();

            if ui.add_sized([width, 36.0], button).clicked() {
                submitted = self.submit();
            }
        });

        submitted
    }

    fn text_field(&mut self, ui: &mut Ui, field: Field, label: &str, hint: &str) {
        ui.label(RichText::new(label).size(13.0));

        let value = match field {
            Field::WorkoutType => &mut self.form.workout_type,
            Field::Duration => &mut self.form.duration,
            Field::Calories => &mut self.form.calories,
        };

        let response = ui.add(
            TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        );

        // Editing a field clears its error
        if response.changed() {
            self.errors.clear(field);
        }

        if let Some(error) = self.errors.get(field) {
            ui.label(RichText::new(error.to_string()).small().color(Palette::ERROR));
        }

        ui.add_space(4.0);
    }
}
