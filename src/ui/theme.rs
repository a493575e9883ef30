//! UI theme definitions.

use egui::{Color32, Visuals};

use crate::storage::config;

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon for the theme toggle button.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀",
        }
    }
}

impl From<config::Theme> for Theme {
    fn from(theme: config::Theme) -> Self {
        match theme {
            config::Theme::Dark => Theme::Dark,
            config::Theme::Light => Theme::Light,
        }
    }
}

impl From<Theme> for config::Theme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => config::Theme::Dark,
            Theme::Light => config::Theme::Light,
        }
    }
}

/// Colors shared by both themes.
pub struct Palette;

impl Palette {
    /// Calories and the primary brand color
    pub const FLAME: Color32 = Color32::from_rgb(255, 112, 67);
    /// Workout counts
    pub const ENERGY: Color32 = Color32::from_rgb(38, 166, 154);
    /// Averages
    pub const TARGET: Color32 = Color32::from_rgb(171, 71, 188);
    /// Success toasts
    pub const SUCCESS: Color32 = Color32::from_rgb(52, 168, 83);
    /// Error toasts and field errors
    pub const ERROR: Color32 = Color32::from_rgb(234, 67, 53);
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(18, 18, 24);
    pub const PANEL_BG: Color32 = Color32::from_rgb(28, 28, 36);
    pub const CARD_BG: Color32 = Color32::from_rgb(38, 38, 48);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 70);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    pub const CARD_BG: Color32 = Color32::from_rgb(245, 245, 248);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(32, 32, 40);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 96, 104);
    pub const BORDER: Color32 = Color32::from_rgb(218, 218, 224);
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 50, 62);
    visuals.widgets.active.bg_fill = Palette::FLAME;

    visuals.selection.bg_fill = Palette::FLAME.linear_multiply(0.4);
    visuals.selection.stroke.color = Palette::FLAME;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::PANEL_BG;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(230, 230, 235);
    visuals.widgets.active.bg_fill = Palette::FLAME;

    visuals.selection.bg_fill = Palette::FLAME.linear_multiply(0.2);
    visuals.selection.stroke.color = Palette::FLAME;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}
