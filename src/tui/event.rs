//! Event handling for the TUI
//!
//! Thin wrapper over crossterm's async event stream so the run loop awaits
//! keyboard, paste and resize events without a reader task of its own.

use crossterm::event::{self, Event};
use futures::StreamExt;

use crate::error::Result;

/// Stream of terminal events
pub struct EventStream {
    inner: event::EventStream,
}

impl EventStream {
    /// Create a new event stream
    pub fn new() -> Self {
        Self {
            inner: event::EventStream::new(),
        }
    }

    /// Get the next event from the stream
    ///
    /// Returns `None` once the terminal input is closed.
    pub async fn next(&mut self) -> Option<Result<Event>> {
        self.inner
            .next()
            .await
            .map(|event| event.map_err(Into::into))
    }
}

impl Default for EventStream {
    fn default() -> Self {
        Self::new()
    }
}
