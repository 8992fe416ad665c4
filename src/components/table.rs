//! Table view - display-only grid for a `TableSpec`
//!
//! Renders one header row from the declared columns plus one line per data
//! row, in declared order. No sorting, filtering, or pagination.

use crate::model::TableSpec;
use crate::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cap per-column width so one long cell cannot swallow the terminal.
const MAX_COL_WIDTH: usize = 40;

/// Number of terminal lines the grid occupies (header + separator + rows).
pub fn height(spec: &TableSpec) -> u16 {
    (2 + spec.rows.len()) as u16
}

/// Build the grid as styled lines. Pure over a validated spec: every row
/// is known to match the column count. Empty `rows` yields just the
/// header and separator.
pub fn render(spec: &TableSpec, theme: &Theme) -> Vec<Line<'static>> {
    let widths = column_widths(spec);
    let mut lines = Vec::with_capacity(spec.rows.len() + 2);

    let header_style = Style::default()
        .fg(theme.tab_active)
        .add_modifier(Modifier::BOLD);
    lines.push(grid_line(&spec.columns, &widths, header_style));

    let separator: String = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        separator,
        Style::default().fg(theme.dim),
    )));

    for row in &spec.rows {
        lines.push(grid_line(row, &widths, Style::default().fg(theme.text)));
    }

    lines
}

/// Column widths sized to the widest cell, by display width rather than
/// byte length - the data carries accented labels.
fn column_widths(spec: &TableSpec) -> Vec<usize> {
    let mut widths: Vec<usize> = spec.columns.iter().map(|c| c.width()).collect();
    for row in &spec.rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.width());
            }
        }
    }
    for w in &mut widths {
        *w = (*w).min(MAX_COL_WIDTH);
    }
    widths
}

fn grid_line(cells: &[String], widths: &[usize], style: Style) -> Line<'static> {
    let mut spans = Vec::with_capacity(cells.len() * 2);
    for (i, cell) in cells.iter().enumerate() {
        let width = widths.get(i).copied().unwrap_or(10);
        let text = fit(cell, width);
        let pad = width.saturating_sub(text.width());
        spans.push(Span::styled(format!("{}{}", text, " ".repeat(pad)), style));
        // Separator only between cells, not after the last column
        if i + 1 < cells.len() {
            spans.push(Span::raw(" │ "));
        }
    }
    Line::from(spans)
}

/// Truncate a cell to `width` display columns, marking the cut with an
/// ellipsis.
fn fit(cell: &str, width: usize) -> String {
    if cell.width() <= width {
        return cell.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in cell.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(columns: &[&str], rows: &[&[&str]]) -> TableSpec {
        TableSpec {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_row_and_column_order_preserved() {
        let spec = spec(
            &["Localidad", "Hectáreas"],
            &[&["Hale", "2,300"], &["Olavarría", "982"]],
        );
        let lines = render(&spec, &Theme::default());

        assert_eq!(lines.len(), 4);
        let header: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(header.starts_with("Localidad"));
        let first: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.starts_with("Hale"));
        let second: String = lines[3].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(second.starts_with("Olavarría"));
    }

    #[test]
    fn test_empty_rows_render_header_only() {
        let spec = spec(&["A", "B"], &[]);
        let lines = render(&spec, &Theme::default());
        // Header and separator, no data lines
        assert_eq!(lines.len(), 2);
        assert_eq!(height(&spec), 2);
    }

    #[test]
    fn test_no_separator_after_last_column() {
        let spec = spec(&["A", "B"], &[&["1", "2"]]);
        for line in render(&spec, &Theme::default()) {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            assert!(!text.trim_end().ends_with('│'), "trailing separator in {:?}", text);
        }
    }

    #[test]
    fn test_column_widths_use_display_width() {
        let spec = spec(&["Categoría"], &[&["Vacas"]]);
        // "Categoría" is 9 display columns even though it is 10 bytes
        assert_eq!(column_widths(&spec), vec![9]);
    }

    #[test]
    fn test_long_cells_truncate_with_ellipsis() {
        let long = "x".repeat(60);
        let fitted = fit(&long, 10);
        assert!(fitted.ends_with('…'));
        assert!(fitted.width() <= 10);
    }
}
