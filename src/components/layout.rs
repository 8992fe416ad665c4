//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Terminal width below which the chrome collapses: one header line
/// instead of two and no outer margin.
pub const COMPACT_WIDTH: u16 = 80;

/// Screen chrome areas around the dashboard body.
pub struct ScreenLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Whether the narrow-viewport presentation applies.
pub fn is_compact(area: Rect) -> bool {
    area.width < COMPACT_WIDTH
}

/// Calculate the screen chrome layout: header, tab bar, body, status
/// line, footer.
pub fn calculate_screen_layout(area: Rect) -> ScreenLayout {
    let outer = if is_compact(area) {
        area
    } else {
        area.inner(Margin {
            vertical: 0,
            horizontal: 1,
        })
    };
    let header_height = if is_compact(area) { 1 } else { 2 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(outer);

    ScreenLayout {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        status: chunks[3],
        footer: chunks[4],
    }
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_breakpoint() {
        assert!(is_compact(Rect::new(0, 0, 60, 24)));
        assert!(!is_compact(Rect::new(0, 0, 120, 40)));
    }

    #[test]
    fn test_wide_layout_keeps_margin_and_two_line_header() {
        let layout = calculate_screen_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.header.height, 2);
        assert_eq!(layout.header.x, 1);
        assert_eq!(layout.footer.y, 39);
    }

    #[test]
    fn test_compact_layout_shrinks_chrome() {
        let layout = calculate_screen_layout(Rect::new(0, 0, 60, 24));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.header.x, 0);
    }

    #[test]
    fn test_centered_popup_is_centered() {
        let popup = centered_popup(Rect::new(0, 0, 100, 40), 60, 10);
        assert_eq!(popup, Rect::new(20, 15, 60, 10));
    }
}
