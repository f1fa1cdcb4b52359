//! font-extractor - copy fonts out of the Adobe CoreSync font cache
//!
//! Loads the cache manifest, shows the installed fonts as a checklist and
//! copies the checked ones to a folder under readable names.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::{Config, Platform};
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;

fn main() -> Result<()> {
    let config = Config::load();

    // Keep the handle alive for the whole run
    let _logger = match Config::log_dir() {
        Some(log_dir) => match logging::init(&log_dir, &config.log_level) {
            Ok(handle) => Some(handle),
            Err(e) => {
                eprintln!("Failed to start logging: {}", e);
                None
            }
        },
        None => None,
    };

    let paths = config.library_paths(Platform::current())?;
    log::info!("Manifest: {}", paths.manifest.display());

    let mut app = App::new(config, paths, services::platform_visibility());

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(250));
    tui.enter()?;

    let result = run_app(&mut tui, &mut app);

    tui.exit()?;

    if let Err(err) = result {
        log::error!("Fatal: {:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                log::error!("Draw error: {}", e);
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // An action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                log::debug!("Action: {}", a);
                current_action = app.update(a)?;
            }
        } else {
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
