//! Stat card widget for the dashboard summary row.

use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

use crate::ui::theme::Palette;
use crate::workouts::stats::{format_compact, WorkoutStats};

/// A single headline number with an icon and caption.
pub struct StatCard<'a> {
    icon: &'a str,
    value: String,
    label: &'a str,
    color: Color32,
}

impl<'a> StatCard<'a> {
    /// Create a new stat card.
    pub fn new(icon: &'a str, value: impl Into<String>, label: &'a str, color: Color32) -> Self {
        Self {
            icon,
            value: value.into(),
            label,
            color,
        }
    }

    /// Total calories card.
    pub fn total_calories(total: u64) -> Self {
        Self::new("🔥", format_compact(total), "Total Calories Burned", Palette::FLAME)
    }

    /// Workout count card.
    pub fn workout_count(count: usize) -> Self {
        Self::new("📈", count.to_string(), "Total Workouts", Palette::ENERGY)
    }

    /// Average calories card.
    pub fn average_calories(average: u64) -> Self {
        Self::new("🎯", format_compact(average), "Avg per Workout", Palette::TARGET)
    }

    /// Render the card.
    pub fn show(self, ui: &mut Ui, width: f32) {
        egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
            ui.set_min_size(Vec2::new(width, 90.0));

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.label(RichText::new(self.icon).size(26.0).color(self.color));
                ui.label(
                    RichText::new(&self.value)
                        .size(28.0)
                        .strong()
                        .color(self.color),
                );
                ui.label(RichText::new(self.label).size(13.0).weak());
            });
        });
    }
}

/// Render the three summary cards side by side.
pub fn show_stats_row(ui: &mut Ui, stats: &WorkoutStats) {
    let spacing = ui.spacing().item_spacing.x;
    // Frame margins and strokes eat into the available width
    let width = ((ui.available_width() - spacing * 2.0) / 3.0 - 28.0).max(80.0);

    ui.horizontal(|ui| {
        StatCard::total_calories(stats.total_calories).show(ui, width);
        StatCard::workout_count(stats.count).show(ui, width);
        StatCard::average_calories(stats.average_calories).show(ui, width);
    });
}
