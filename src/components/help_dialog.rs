//! Help dialog component
//!
//! Displays the keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog;

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content();
        let dialog_area = centered_popup(area, 46, content.len() as u16 + 2);
        frame.render_widget(Clear, dialog_area);

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, dialog_area);

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let shortcut = |key: &str, description: &str| {
        Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ])
    };

    vec![
        Line::from(""),
        shortcut("Tab / l / →", "Next tab"),
        shortcut("S-Tab / h / ←", "Previous tab"),
        shortcut("1-9", "Jump to tab"),
        shortcut("j / ↓", "Scroll down one section"),
        shortcut("k / ↑", "Scroll up one section"),
        shortcut("x", "Export tab tables to CSV"),
        shortcut("?", "Show this help"),
        shortcut("q / Esc", "Quit / Close dialog"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press q, Esc, or ? to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
