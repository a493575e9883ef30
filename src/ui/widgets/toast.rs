//! Transient toast notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use egui::{Align2, RichText};

use crate::ui::theme::Palette;
use crate::workouts::controller::{Notification, NotificationKind};

/// Maximum toasts on screen at once.
pub const MAX_VISIBLE: usize = 3;

/// Stack of notifications shown in the bottom-right corner.
#[derive(Debug)]
pub struct ToastStack {
    toasts: VecDeque<(Notification, Instant)>,
    lifetime: Duration,
}

impl ToastStack {
    /// Create a stack whose toasts disappear after `lifetime`.
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::with_capacity(MAX_VISIBLE),
            lifetime,
        }
    }

    /// Add a notification, dropping the oldest if the stack is full.
    pub fn push(&mut self, notification: Notification, now: Instant) {
        if self.toasts.len() == MAX_VISIBLE {
            self.toasts.pop_front();
        }
        self.toasts.push_back((notification, now));
    }

    /// Drop toasts older than the lifetime.
    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.toasts
            .retain(|(_, shown_at)| now.saturating_duration_since(*shown_at) < lifetime);
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Render the stack. Returns true while toasts are visible so the caller
    /// keeps repainting until they expire.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        self.prune(Instant::now());
        if self.toasts.is_empty() {
            return false;
        }

        egui::Area::new(egui::Id::new("toast_stack"))
            .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .show(ctx, |ui| {
                for (notification, _) in &self.toasts {
                    let color = match notification.kind {
                        NotificationKind::Success => Palette::SUCCESS,
                        NotificationKind::Error => Palette::ERROR,
                    };

                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.label(RichText::new(&notification.title).strong().color(color));
                        ui.label(&notification.description);
                    });
                    ui.add_space(6.0);
                }
            });

        true
    }
}
