//! Terminal setup and cleanup
//!
//! Handles raw mode, alternate screen, bracketed paste and the window title.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{ChatError, Result};

/// Terminal type alias for convenience
pub type ChatTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Set up the terminal for TUI mode
///
/// This function:
/// - Enables raw mode (disables line buffering, echo)
/// - Enters alternate screen (saves current terminal state)
/// - Enables bracketed paste so pasted text arrives as one event
/// - Sets the window title
///
/// # Errors
/// Returns an error if terminal setup fails
pub fn setup_terminal(title: &str) -> Result<ChatTerminal> {
    enable_raw_mode().map_err(|e| ChatError::terminal("Failed to enable raw mode", e))?;

    let mut stdout = io::stdout();
    unwind_on_err(
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste, SetTitle(title)),
        "Failed to enter alternate screen",
        || {
            let _ = disable_raw_mode();
        },
    )?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = unwind_on_err(Terminal::new(backend), "Failed to create terminal", || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        let _ = disable_raw_mode();
    })?;

    Ok(terminal)
}

/// Run `undo` before reporting a failed setup step, so the error is
/// printed to a cooked terminal
fn unwind_on_err<T>(result: io::Result<T>, step: &str, undo: impl FnOnce()) -> Result<T> {
    result.map_err(|e| {
        undo();
        ChatError::terminal(step, e)
    })
}

/// Restore the terminal to its original state
///
/// This function:
/// - Disables raw mode
/// - Leaves alternate screen (restores previous terminal state)
/// - Disables bracketed paste
/// - Shows the cursor
///
/// # Errors
/// Returns an error if terminal restoration fails
pub fn restore_terminal(mut terminal: ChatTerminal) -> Result<()> {
    disable_raw_mode().map_err(|e| ChatError::terminal("Failed to disable raw mode", e))?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .map_err(|e| ChatError::terminal("Failed to leave alternate screen", e))?;

    terminal
        .show_cursor()
        .map_err(|e| ChatError::terminal("Failed to show cursor", e))?;

    Ok(())
}
