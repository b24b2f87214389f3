//! chat-mock: a terminal mock-up of a chat client
//!
//! Renders a header bar with a search field, a status line, an empty message
//! buffer pane and a compose box, and switches keyboard focus between the
//! search field and the compose box. There is no backend behind any of it.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::too_many_lines)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod tui;

// Re-exports for convenience
pub use error::{ChatError, Result};
