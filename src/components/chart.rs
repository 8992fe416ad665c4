//! Chart view - declarative pie / bar / grouped-bar rendering
//!
//! Values arrive as final display units; nothing here converts or
//! aggregates. The proportional math lives in pure helpers so it can be
//! tested without a terminal; the drawing maps those proportions onto
//! ratatui widgets.

use crate::model::{ChartKind, ChartSpec, Series};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

/// Vertical space a chart occupies inside its section.
pub fn height(spec: &ChartSpec) -> u16 {
    match spec.kind {
        // Breakdown bar + one legend line per slice
        ChartKind::Pie => spec
            .series
            .first()
            .map(|s| 2 + s.categories.len() as u16)
            .unwrap_or(3),
        ChartKind::Bar => 10,
        // Extra line for the series legend
        ChartKind::GroupedBar => 11,
    }
}

/// Draw a chart into `area`. Total over a validated spec; an empty
/// series list leaves the chart area blank.
pub fn draw(frame: &mut Frame, area: Rect, spec: &ChartSpec, theme: &Theme) {
    if spec.series.is_empty() || area.height == 0 {
        return;
    }
    match spec.kind {
        ChartKind::Pie => draw_pie(frame, area, &spec.series[0], theme),
        ChartKind::Bar => draw_bar(frame, area, &spec.series[0], theme),
        ChartKind::GroupedBar => draw_grouped_bar(frame, area, &spec.series, theme),
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Pie
// ─────────────────────────────────────────────────────────────────────────

/// Fraction of the whole per slice. A zero or negative total yields all
/// zeros rather than dividing by zero.
pub fn slice_fractions(series: &Series) -> Vec<f64> {
    let total: f64 = series.values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return vec![0.0; series.values.len()];
    }
    series.values.iter().map(|v| v.max(0.0) / total).collect()
}

/// Slice widths in terminal cells for a breakdown bar of `width` cells.
/// Widths sum to `width` exactly; the remainder goes to the last
/// non-empty slice.
pub fn slice_widths(series: &Series, width: u16) -> Vec<u16> {
    let fractions = slice_fractions(series);
    let mut widths: Vec<u16> = fractions
        .iter()
        .map(|f| (f * width as f64).floor() as u16)
        .collect();
    let used: u16 = widths.iter().sum();
    if let Some(last) = widths.iter_mut().rev().find(|w| **w > 0) {
        *last += width.saturating_sub(used);
    }
    widths
}

fn draw_pie(frame: &mut Frame, area: Rect, series: &Series, theme: &Theme) {
    let mut lines = Vec::with_capacity(series.categories.len() + 2);

    // Proportional breakdown bar standing in for slice angles. Slices
    // always take the palette by position: one explicit series color
    // cannot tell slices apart.
    let widths = slice_widths(series, area.width);
    let bar: Vec<Span> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let color = theme.series_color(None, i);
            Span::styled("█".repeat(*w as usize), Style::default().fg(color))
        })
        .collect();
    lines.push(Line::from(bar));
    lines.push(Line::from(""));

    let fractions = slice_fractions(series);
    for (i, category) in series.categories.iter().enumerate() {
        let color = theme.series_color(None, i);
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(category.clone(), Style::default().fg(theme.text)),
            Span::styled(
                format!("  {:.0}%  ({})", fractions[i] * 100.0, fmt_value(series.values[i])),
                Style::default().fg(theme.dim),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

// ─────────────────────────────────────────────────────────────────────────
// Bar / Grouped bar
// ─────────────────────────────────────────────────────────────────────────

fn draw_bar(frame: &mut Frame, area: Rect, series: &Series, theme: &Theme) {
    if series.categories.is_empty() {
        return;
    }
    let n = series.categories.len() as u16;
    let bar_width = (area.width / n).saturating_sub(1).clamp(1, 8);
    let color = theme.series_color(series.color.as_deref(), 0);

    let bars: Vec<Bar> = series
        .categories
        .iter()
        .zip(&series.values)
        .map(|(category, value)| {
            Bar::default()
                .value(scale_value(*value))
                .text_value(fmt_value(*value))
                .label(Line::from(category.clone()))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

fn draw_grouped_bar(frame: &mut Frame, area: Rect, series: &[Series], theme: &Theme) {
    let categories = &series[0].categories;
    if categories.is_empty() || area.height < 2 {
        return;
    }

    // Legend line, then the chart below it
    let legend: Vec<Span> = series
        .iter()
        .enumerate()
        .flat_map(|(i, s)| {
            let color = theme.series_color(s.color.as_deref(), i);
            vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(
                    format!("{}  ", s.name),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
            ]
        })
        .collect();
    let legend_area = Rect { height: 1, ..area };
    frame.render_widget(Paragraph::new(Line::from(legend)), legend_area);

    let chart_area = Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    };

    let per_group = (area.width / categories.len() as u16).saturating_sub(1);
    let bar_width = (per_group / series.len() as u16).clamp(1, 6);

    let mut chart = BarChart::default().bar_width(bar_width).bar_gap(0).group_gap(1);
    for (ci, category) in categories.iter().enumerate() {
        // One group per category, one adjacent bar per series
        let bars: Vec<Bar> = series
            .iter()
            .enumerate()
            .map(|(si, s)| {
                let color = theme.series_color(s.color.as_deref(), si);
                Bar::default()
                    .value(scale_value(s.values[ci]))
                    .style(Style::default().fg(color))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(category.clone()))
                .bars(&bars),
        );
    }
    frame.render_widget(chart, chart_area);
}

/// Bar heights are proportional, so plain rounding to the widget's
/// integer domain is enough.
fn scale_value(value: f64) -> u64 {
    value.max(0.0).round() as u64
}

/// Compact numeric formatting for bar captions and pie legends.
fn fmt_value(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.1}", value)
    }
}
