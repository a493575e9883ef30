//! Main application state and egui integration.
//!
//! The workout controller is async; every operation is spawned on the
//! application's tokio runtime and the UI renders a state snapshot each frame.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam::channel::{unbounded, Receiver, Sender};
use eframe::egui;
use tokio::runtime::Runtime;

use rustfit::storage::config::{save_config, AppConfig};
use rustfit::storage::StorageSlot;
use rustfit::ui::screens::{DashboardAction, DashboardScreen};
use rustfit::ui::theme::Theme;
use rustfit::ui::widgets::ToastStack;
use rustfit::workouts::{Notification, WorkoutApi, WorkoutController, WorkoutId};

/// Repaint interval while an operation is in flight.
const BUSY_REPAINT: Duration = Duration::from_millis(100);

/// Completion events sent back from spawned tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
enum AppEvent {
    /// An add finished; true when the workout was saved
    AddFinished(bool),
    /// A delete finished, confirmed or not
    RemoveFinished(WorkoutId),
}

/// Main application state.
pub struct RustFitApp {
    /// Runtime that drives controller operations
    runtime: Runtime,
    /// Workout controller shared with spawned tasks
    controller: Arc<WorkoutController>,
    /// Notification receiver
    notification_rx: Receiver<Notification>,
    /// Completion events from spawned tasks
    event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,
    /// Application configuration
    config: AppConfig,
    /// UI theme
    theme: Theme,
    /// Dashboard screen state
    dashboard: DashboardScreen,
    /// Visible notifications
    toasts: ToastStack,
}

impl RustFitApp {
    /// Create a new application instance.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: Runtime,
        config: AppConfig,
        slot: Arc<dyn StorageSlot>,
    ) -> Self {
        let theme = Theme::from(config.ui.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale);

        let api = WorkoutApi::from_slot(slot, config.latency.clone());
        let mut controller = WorkoutController::new(api);
        let notification_rx = controller.notification_receiver();
        let controller = Arc::new(controller);

        let (event_tx, event_rx) = unbounded();
        let toasts = ToastStack::new(Duration::from_secs(u64::from(config.ui.toast_seconds)));

        let app = Self {
            runtime,
            controller,
            notification_rx,
            event_tx,
            event_rx,
            config,
            theme,
            dashboard: DashboardScreen::new(),
            toasts,
        };

        app.spawn_initialize(cc.egui_ctx.clone());
        app
    }

    fn spawn_initialize(&self, ctx: egui::Context) {
        let controller = Arc::clone(&self.controller);
        self.runtime.spawn(async move {
            controller.initialize().await;
            ctx.request_repaint();
        });
    }

    /// Hand a dashboard action to the runtime.
    fn dispatch(&self, action: DashboardAction, ctx: &egui::Context) {
        let controller = Arc::clone(&self.controller);
        let ctx = ctx.clone();

        match action {
            DashboardAction::None => {}
            DashboardAction::Add(data) => {
                let event_tx = self.event_tx.clone();
                self.runtime.spawn(async move {
                    let saved = controller.add(data).await.is_ok();
                    let _ = event_tx.send(AppEvent::AddFinished(saved));
                    ctx.request_repaint();
                });
            }
            DashboardAction::Remove(id) => {
                let event_tx = self.event_tx.clone();
                self.runtime.spawn(async move {
                    let outcome = controller.remove(&id).await;
                    tracing::debug!("Remove of {} finished: {:?}", id, outcome);
                    let _ = event_tx.send(AppEvent::RemoveFinished(id));
                    ctx.request_repaint();
                });
            }
            DashboardAction::Refresh => {
                self.runtime.spawn(async move {
                    controller.refresh().await;
                    ctx.request_repaint();
                });
            }
        }
    }

    /// Drain notifications and task completions.
    fn process_events(&mut self) {
        let now = Instant::now();
        while let Ok(notification) = self.notification_rx.try_recv() {
            self.toasts.push(notification, now);
        }

        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::AddFinished(saved) => self.dashboard.on_add_finished(saved),
                AppEvent::RemoveFinished(id) => self.dashboard.on_remove_finished(&id),
            }
        }
    }

    /// Toggle the theme between dark and light and persist the choice.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());

        self.config.ui.theme = self.theme.into();
        if let Err(e) = save_config(&self.config) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }
}

impl eframe::App for RustFitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();

        let state = self.controller.snapshot();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("RustFit");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.theme.toggle_icon()).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(format!("Storage: {:?}", self.config.storage.backend));
            });
        });

        let mut action = DashboardAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                action = self.dashboard.show(ui, &state);
            });
        });

        let toasts_visible = self.toasts.show(ctx);

        self.dispatch(action, ctx);

        if state.loading || state.submitting || !state.deleting.is_empty() || toasts_visible {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }
}
