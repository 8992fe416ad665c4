//! Metric view - one labeled value with optional delta and status
//!
//! The value is emphasized, the delta is a secondary annotation, and the
//! status maps to one of the three fixed theme treatments. No status
//! means the neutral text color.

use crate::model::MetricSpec;
use crate::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Terminal lines a metric occupies: label, value, optional delta.
pub fn height(spec: &MetricSpec) -> u16 {
    if spec.delta.is_some() {
        3
    } else {
        2
    }
}

/// Build the metric as styled lines. Pure; no error conditions over a
/// validated model.
pub fn render(spec: &MetricSpec, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(3);

    lines.push(Line::from(Span::styled(
        spec.label.clone(),
        Style::default().fg(theme.dim),
    )));
    lines.push(Line::from(Span::styled(
        spec.value.clone(),
        Style::default()
            .fg(theme.status_color(spec.status))
            .add_modifier(Modifier::BOLD),
    )));
    if let Some(delta) = &spec.delta {
        lines.push(Line::from(Span::styled(
            delta.clone(),
            Style::default().fg(theme.status_color(spec.status)),
        )));
    }

    lines
}
