//! Terminal setup and the async event loop

use crate::records::Dataset;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{AppContext, Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;

/// Run the dashboard until the user quits, restoring the terminal afterwards
pub async fn run_app(context: AppContext, dataset: Arc<Dataset>) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("ui: started with {} ({} records)", dataset.source, dataset.len());
    let mut app = AppComponent::new(context, dataset);
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Resize(_, _)) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                // Job results arrive between key presses
                let background_actions = app.process_background_actions();
                if !background_actions.is_empty() || app.is_busy() {
                    needs_render = true;
                }
                for action in background_actions {
                    app.dispatch(action);
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
