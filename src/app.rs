//! Root application component
//!
//! Owns the validated model, the active-tab state, and the child
//! components. App is intentionally lean: it converts keys to Actions,
//! applies Actions to state, and delegates drawing.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_screen_layout, is_compact, DashboardComponent, HelpDialog};
use crate::model::{DashboardModel, DashboardState};
use crate::services;
use crate::theme::Theme;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main application state - coordinates between components
pub struct App {
    /// The validated dashboard model; immutable for the app's lifetime
    pub model: DashboardModel,

    /// Active-tab selection
    pub state: DashboardState,

    /// Fixed theme tokens
    pub theme: Theme,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display on the status line
    pub error: Option<String>,

    /// Status message to display on the status line
    pub status_message: Option<String>,

    /// Whether the help overlay is open
    pub show_help: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub dashboard: DashboardComponent,
    pub help_dialog: HelpDialog,
}

impl App {
    /// Create the app over an already-validated model.
    pub fn new(model: DashboardModel) -> Self {
        let state = DashboardState::new(&model);
        Self {
            model,
            state,
            theme: Theme::default(),
            should_quit: false,
            error: None,
            status_message: None,
            show_help: false,
            dashboard: DashboardComponent::new(),
            help_dialog: HelpDialog,
        }
    }

    fn export_active_tab(&mut self) {
        // Validated state always names an existing tab
        let Some(tab) = self.model.tab(self.state.active_tab_id()) else {
            return;
        };
        match services::export_tab_tables(tab, std::path::Path::new(".")) {
            Ok(paths) if paths.is_empty() => {
                self.status_message = Some("No tables in this tab".to_string());
            }
            Ok(paths) => {
                self.status_message = Some(format!("Exported {} CSV file(s)", paths.len()));
            }
            Err(e) => {
                self.error = Some(format!("Export failed: {}", e));
            }
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let title_style = Style::default()
            .fg(self.theme.heading)
            .add_modifier(Modifier::BOLD);

        if is_compact(frame.area()) {
            // One line: title and subtitle together
            let line = Line::from(vec![
                Span::styled(self.model.title.clone(), title_style),
                Span::styled(
                    format!("  {}", self.model.subtitle),
                    Style::default().fg(self.theme.dim),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), area);
            return;
        }

        let lines = vec![
            Line::from(Span::styled(self.model.title.clone(), title_style)),
            Line::from(Span::styled(
                self.model.subtitle.clone(),
                Style::default().fg(self.theme.dim),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(error) = &self.error {
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(self.theme.critical),
            ))
        } else if let Some(status) = &self.status_message {
            Line::from(Span::styled(
                status.clone(),
                Style::default().fg(self.theme.good),
            ))
        } else {
            Line::from(Span::styled(
                "Tab: switch  j/k: scroll  x: export  ?: help  q: quit",
                Style::default().fg(self.theme.dim),
            ))
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(Line::from(Span::styled(
            self.model.footer.clone(),
            Style::default().fg(self.theme.dim),
        )));
        frame.render_widget(footer, area);

        let date = Paragraph::new(Line::from(Span::styled(
            Local::now().format("%Y-%m-%d").to_string(),
            Style::default().fg(self.theme.dim),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(date, area);
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.show_help {
            return self.help_dialog.handle_key_event(key);
        }

        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextTab),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevTab),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
            KeyCode::Char('x') => Some(Action::ExportActiveTab),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.model
                    .tabs
                    .get(index)
                    .map(|tab| Action::SelectTab(tab.id.clone()))
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick | Action::Resize(_, _) => {}
            Action::Quit => {
                self.should_quit = true;
            }
            Action::SelectTab(id) => match self.state.select_tab(&self.model, &id) {
                Ok(()) => {
                    self.dashboard.reset_scroll();
                    self.error = None;
                }
                // Recoverable: selection unchanged, error shown on the
                // status line
                Err(e) => {
                    self.error = Some(e.to_string());
                }
            },
            Action::NextTab => {
                self.state.select_next(&self.model);
                self.dashboard.reset_scroll();
                self.error = None;
            }
            Action::PrevTab => {
                self.state.select_previous(&self.model);
                self.dashboard.reset_scroll();
                self.error = None;
            }
            Action::ScrollDown => {
                let sections = self
                    .model
                    .tab(self.state.active_tab_id())
                    .map(|tab| tab.sections.len())
                    .unwrap_or(0);
                self.dashboard.scroll_down(sections);
            }
            Action::ScrollUp => {
                self.dashboard.scroll_up();
            }
            Action::OpenHelp => {
                self.show_help = true;
            }
            Action::CloseModal => {
                self.show_help = false;
            }
            Action::ExportActiveTab => {
                self.export_active_tab();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_screen_layout(area);

        self.draw_header(frame, layout.header);
        self.dashboard.draw_dashboard(
            frame,
            layout.tabs,
            layout.body,
            &self.model,
            &self.state,
            &self.theme,
        );
        self.draw_status(frame, layout.status);
        self.draw_footer(frame, layout.footer);

        if self.show_help {
            self.help_dialog.draw(frame, area)?;
        }

        Ok(())
    }
}
