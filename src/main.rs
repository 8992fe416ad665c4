//! lending-tui - a terminal dashboard for a borrower credit profile
//!
//! Renders a declarative dashboard model (metrics, tables, charts across
//! tabs) using the Component Architecture pattern from ratatui. The model
//! comes from a file given on the command line, from the config file, or
//! from the built-in sample profile.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod model;
mod services;
mod theme;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::DashboardModel;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::path::Path;
use std::time::Duration;

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_default();

    // Resolve and validate the model before touching the terminal, so a
    // broken model file fails with a readable error instead of a torn
    // alternate screen.
    let model = resolve_model(&config)?;

    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    let mut app = App::new(model);
    let result = run_app(&mut tui, &mut app);

    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Model source precedence: CLI argument, config file, built-in sample.
fn resolve_model(config: &Config) -> Result<DashboardModel> {
    if let Some(path) = std::env::args().nth(1) {
        return services::load_model(Path::new(&path));
    }
    if let Some(path) = &config.model_path {
        return services::load_model(Path::new(path));
    }
    Ok(model::sample_model())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                eprintln!("Draw error: {}", e);
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
