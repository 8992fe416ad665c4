//! Tabbed dashboard - the tab bar plus the active tab's sections
//!
//! Only the active tab's sections are laid out and drawn each frame;
//! the other tabs cost nothing until selected. The component owns a
//! section-granular scroll offset, reset on every tab change.

use crate::components::section;
use crate::model::{DashboardModel, DashboardState, TabModel};
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Tab bar and active-tab body renderer.
#[derive(Default)]
pub struct DashboardComponent {
    /// Index of the first visible section in the active tab
    pub scroll: usize,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the scroll position; called on every tab switch.
    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    /// Scroll down one section, stopping at the last one.
    pub fn scroll_down(&mut self, section_count: usize) {
        let max = section_count.saturating_sub(1);
        if self.scroll < max {
            self.scroll += 1;
        }
    }

    /// Scroll up one section.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Draw the tab bar into `tabs_area` and the active tab's sections
    /// into `body_area`.
    pub fn draw_dashboard(
        &mut self,
        frame: &mut Frame,
        tabs_area: Rect,
        body_area: Rect,
        model: &DashboardModel,
        state: &DashboardState,
        theme: &Theme,
    ) {
        self.draw_tab_bar(frame, tabs_area, model, state, theme);

        // Validated state always names an existing tab
        if let Some(tab) = model.tab(state.active_tab_id()) {
            self.draw_active_tab(frame, body_area, tab, theme);
        }
    }

    fn draw_tab_bar(
        &self,
        frame: &mut Frame,
        area: Rect,
        model: &DashboardModel,
        state: &DashboardState,
        theme: &Theme,
    ) {
        let titles: Vec<String> = model
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| format!("{} {}", i + 1, tab_title(tab)))
            .collect();

        let tabs = Tabs::new(titles)
            .select(state.active_index(model))
            .style(Style::default().fg(theme.dim))
            .highlight_style(
                Style::default()
                    .fg(theme.tab_active)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border)),
            );
        frame.render_widget(tabs, area);
    }

    fn draw_active_tab(&mut self, frame: &mut Frame, area: Rect, tab: &TabModel, theme: &Theme) {
        if tab.sections.is_empty() {
            return;
        }
        self.scroll = self.scroll.min(tab.sections.len() - 1);

        // Fit whole sections from the scroll offset down; clip the last
        // one if it overruns the body.
        let visible = &tab.sections[self.scroll..];
        let mut constraints: Vec<Constraint> = Vec::with_capacity(visible.len() + 1);
        let mut budget = area.height;
        let mut shown = 0;
        for sec in visible {
            if budget == 0 {
                break;
            }
            let h = section::height(sec).min(budget);
            constraints.push(Constraint::Length(h));
            budget -= h;
            shown += 1;
        }
        constraints.push(Constraint::Min(0));

        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, sec) in visible.iter().take(shown).enumerate() {
            section::draw(frame, areas[i], sec, theme);
        }
    }
}

fn tab_title(tab: &TabModel) -> String {
    match &tab.icon {
        Some(icon) => format!("{} {}", icon, tab.label),
        None => tab.label.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_model;

    #[test]
    fn test_scroll_resets_on_tab_change() {
        let mut dashboard = DashboardComponent::new();
        dashboard.scroll_down(5);
        dashboard.scroll_down(5);
        assert_eq!(dashboard.scroll, 2);

        dashboard.reset_scroll();
        assert_eq!(dashboard.scroll, 0);
    }

    #[test]
    fn test_scroll_clamps_to_section_count() {
        let mut dashboard = DashboardComponent::new();
        dashboard.scroll_down(2);
        dashboard.scroll_down(2);
        dashboard.scroll_down(2);
        assert_eq!(dashboard.scroll, 1);
    }

    #[test]
    fn test_scroll_up_saturates_at_zero() {
        let mut dashboard = DashboardComponent::new();
        dashboard.scroll_up();
        assert_eq!(dashboard.scroll, 0);
    }

    #[test]
    fn test_tab_titles_include_icons() {
        let model = sample_model();
        assert_eq!(tab_title(&model.tabs[0]), "📈 Resumen");

        let plain = TabModel {
            id: "x".to_string(),
            label: "Plain".to_string(),
            icon: None,
            sections: vec![],
        };
        assert_eq!(tab_title(&plain), "Plain");
    }
}
