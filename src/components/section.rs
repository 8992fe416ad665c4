//! Panel section - a titled group of views in column tracks
//!
//! Lays out a section's items in declared order: single-column stacks
//! them, multi-column(n) distributes item k to track k mod n on row
//! k div n, so a trailing row may be partial.

use crate::components::{chart, metric, table};
use crate::model::{PanelSectionModel, ViewSpec};
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Assign item indices to rows of `tracks` columns, preserving order.
pub fn layout_rows(item_count: usize, tracks: usize) -> Vec<Vec<usize>> {
    let tracks = tracks.max(1);
    (0..item_count)
        .collect::<Vec<_>>()
        .chunks(tracks)
        .map(|chunk| chunk.to_vec())
        .collect()
}

fn item_height(item: &ViewSpec) -> u16 {
    match item {
        ViewSpec::Metric(spec) => metric::height(spec),
        ViewSpec::Table(spec) => table::height(spec),
        ViewSpec::Chart(spec) => chart::height(spec),
    }
}

/// Row height is the tallest item in the row.
fn row_height(section: &PanelSectionModel, row: &[usize]) -> u16 {
    row.iter()
        .map(|&i| item_height(&section.items[i]))
        .max()
        .unwrap_or(0)
}

/// Total terminal lines the section needs, borders included.
pub fn height(section: &PanelSectionModel) -> u16 {
    let rows = layout_rows(section.items.len(), section.layout.tracks());
    let content: u16 = rows.iter().map(|row| row_height(section, row)).sum();
    let gaps = rows.len().saturating_sub(1) as u16;
    content + gaps + 2
}

/// Draw the section: bordered block, heading as the block title, items
/// distributed into equal-width tracks.
pub fn draw(frame: &mut Frame, area: Rect, section: &PanelSectionModel, theme: &Theme) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    if let Some(heading) = &section.heading {
        block = block.title(format!(" {} ", heading)).title_style(
            Style::default()
                .fg(theme.tab_active)
                .add_modifier(Modifier::BOLD),
        );
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tracks = section.layout.tracks();
    let rows = layout_rows(section.items.len(), tracks);
    if rows.is_empty() {
        return;
    }

    // One Length constraint per row plus a one-line gap between rows
    let mut constraints = Vec::with_capacity(rows.len() * 2);
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(row_height(section, row)));
    }
    constraints.push(Constraint::Min(0));
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (ri, row) in rows.iter().enumerate() {
        let row_area = row_areas[ri * 2];
        let track_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, tracks as u32); tracks])
            .split(row_area);

        for (ti, &item_index) in row.iter().enumerate() {
            draw_item(frame, track_areas[ti], &section.items[item_index], theme);
        }
    }
}

fn draw_item(frame: &mut Frame, area: Rect, item: &ViewSpec, theme: &Theme) {
    match item {
        ViewSpec::Metric(spec) => draw_lines(frame, area, metric::render(spec, theme)),
        ViewSpec::Table(spec) => draw_lines(frame, area, table::render(spec, theme)),
        ViewSpec::Chart(spec) => chart::draw(frame, area, spec, theme),
    }
}

fn draw_lines(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    frame.render_widget(Paragraph::new(lines), area);
}
