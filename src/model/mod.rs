//! Model layer - the declarative dashboard description
//!
//! This module contains all model types:
//! - `DashboardModel` and its view specs - immutable, validated data
//! - `DashboardState` - the single piece of mutable state (active tab)
//! - `sample` - the built-in borrower profile

pub mod dashboard;
pub mod sample;
pub mod state;

// Re-export commonly used types
pub use dashboard::{
    ChartKind, ChartSpec, DashboardModel, MetricSpec, MetricStatus, PanelSectionModel,
    SectionLayout, Series, TabModel, TableSpec, ViewSpec,
};
pub use sample::sample_model;
pub use state::DashboardState;
