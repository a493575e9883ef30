//! UI widgets for reusable components.

pub mod stat_card;
pub mod toast;
pub mod workout_form;
pub mod workout_list;

pub use stat_card::{show_stats_row, StatCard};
pub use toast::ToastStack;
pub use workout_form::WorkoutFormWidget;
pub use workout_list::WorkoutListWidget;
