//! UI Components
//!
//! Leaf views (metric, table, chart) are pure functions from specs to
//! rendered output; section and dashboard compose them. Stateful
//! components communicate through Actions rather than direct mutation.

pub mod chart;
pub mod dashboard;
pub mod help_dialog;
pub mod layout;
pub mod metric;
pub mod section;
pub mod table;

pub use dashboard::DashboardComponent;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_screen_layout, centered_popup, is_compact, ScreenLayout};
