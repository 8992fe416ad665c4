//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while no event is pending
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Tab Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Select a tab by id; unknown ids are rejected and reported
    SelectTab(String),
    /// Move to the next tab (wraps)
    NextTab,
    /// Move to the previous tab (wraps)
    PrevTab,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll the active tab down one section
    ScrollDown,
    /// Scroll the active tab up one section
    ScrollUp,

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs & Export
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the keyboard shortcut overlay
    OpenHelp,
    /// Close the current overlay
    CloseModal,
    /// Export the active tab's tables to CSV files
    ExportActiveTab,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::SelectTab(id) => write!(f, "SelectTab({})", id),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ExportActiveTab => write!(f, "ExportActiveTab"),
        }
    }
}
