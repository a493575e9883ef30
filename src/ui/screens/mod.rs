//! UI screens for the application.

pub mod dashboard;

pub use dashboard::{DashboardAction, DashboardScreen};
