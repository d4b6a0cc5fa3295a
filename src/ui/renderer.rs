use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the app until it quits, restoring the terminal on the way out.
pub async fn run_app(mut app: AppComponent, mouse_enabled: bool) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();

    // Hydrate and kick off the book fetch
    app.start();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
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
        // A pending frame waits out the frame interval
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        let is_resize = matches!(event, EventType::Resize(_, _));
        needs_render |= app.handle_event(event)? || is_resize;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
