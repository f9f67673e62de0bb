use crate::routes::Route;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{AppContext, Component, EventHandler, EventType};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the console until the user quits, restoring the terminal afterwards
pub async fn run_app(context: AppContext, start_route: Route) -> anyhow::Result<()> {
    let mouse_enabled = context.config.ui.mouse_enabled;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(context, start_route);
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

pub async fn run_app_loop<B: Backend>(
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

        let event = event_handler.next_event().await?;

        match event {
            EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) => {
                app.handle_event(event).await?;
                needs_render = true;
            }
            EventType::Tick => {
                // Background saves report back here
                let background_actions = app.process_background_actions();
                if !background_actions.is_empty() {
                    needs_render = true;
                }
                for action in background_actions {
                    app.dispatch(action).await;
                }
                // Keep the saving indicator live
                if app.is_saving() {
                    needs_render = true;
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
