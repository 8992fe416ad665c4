//! Error taxonomy for the dashboard core
//!
//! Two kinds of failure exist: a model that breaks an invariant at
//! construction time, and a tab-selection request for an id the model
//! does not contain. Everything else in the rendering core is total
//! over a validated model.

use thiserror::Error;

/// Raised while constructing or loading a `DashboardModel`.
///
/// Construction is atomic: if any variant fires, no model value is
/// produced and nothing is ever rendered from the offending input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelValidationError {
    #[error("duplicate tab id '{0}'")]
    DuplicateTabId(String),

    #[error("dashboard has no tabs")]
    NoTabs,

    #[error("table in tab '{tab}' declares {columns} columns but a row has {cells} cells")]
    RowWidthMismatch {
        tab: String,
        columns: usize,
        cells: usize,
    },

    #[error("series '{series}' has {categories} categories but {values} values")]
    SeriesLengthMismatch {
        series: String,
        categories: usize,
        values: usize,
    },

    #[error("grouped-bar chart in tab '{tab}': series do not share identical categories")]
    GroupedCategoryMismatch { tab: String },

    #[error("pie chart in tab '{tab}' must carry exactly one series, found {found}")]
    PieSeriesCount { tab: String, found: usize },
}

/// Raised by `DashboardState::select_tab` for an unknown tab id.
///
/// Recoverable: the selection state is left unchanged and the caller
/// (the UI layer) reports the error on the status line.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tab id '{0}'")]
pub struct UnknownTabError(pub String);
