//! TUI module for chat-mock
//!
//! Provides a terminal user interface using ratatui + crossterm.

mod app;
mod event;
mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, Binding, Focus, ScreenState};
pub use terminal::{restore_terminal, setup_terminal};
pub use theme::Theme;

use crossterm::event::Event;
use ratatui::{backend::Backend, Terminal};
use tracing::info;

use crate::error::Result;

/// Run the TUI application until the quit key is pressed
///
/// # Errors
/// Returns an error if the terminal cannot be set up, drawn to or read from.
/// The terminal is restored before the error is returned.
pub async fn run(theme: Theme) -> Result<()> {
    // Set up terminal
    let mut terminal = setup_terminal(&theme.window_title)?;

    // Create app state
    let mut app = App::new(theme);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    restore_terminal(terminal)?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    // crossterm reports no initial size, so seed one from the real terminal
    let (width, height) = crossterm::terminal::size()?;
    app.handle_event(&Event::Resize(width, height));
    info!(width, height, "started");

    let mut events = event::EventStream::new();

    loop {
        // Render UI
        terminal.draw(|f| ui::draw(f, app))?;

        // Wait for next event
        match events.next().await {
            Some(event) => app.handle_event(&event?),
            None => break,
        }

        // Check for quit
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
