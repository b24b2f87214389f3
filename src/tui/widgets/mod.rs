//! Adapters over the text-entry libraries
//!
//! Editing (buffer, cursor movement, key bindings) belongs to `tui-input`
//! and `tui-textarea`. The adapters add focus gating, the char limit,
//! placeholders and a column-based view. They never decide their own
//! colours: the caller passes styles derived from the current focus.

mod text_area;
mod text_input;

pub use text_area::TextArea;
pub use text_input::TextInput;

use crossterm::event::{Event, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// Result of forwarding an event to a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The widget acted on the event
    Consumed,
    /// The event was not for this widget (unfocused, or an unbound key)
    Ignored,
}

/// Contract shared by the search field and the compose box
pub trait InputWidget {
    /// Forward a terminal event. Unfocused widgets ignore key and paste events.
    fn handle_event(&mut self, event: &Event) -> EventOutcome;

    /// Start receiving keyboard input
    fn focus(&mut self);

    /// Stop receiving keyboard input
    fn blur(&mut self);

    fn is_focused(&self) -> bool;
}

/// Key press that should be handled at all (releases are dropped)
pub(crate) fn pressed(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(*key),
        _ => None,
    }
}

/// Whether a key carries Ctrl or Alt, which suppresses plain insertion
pub(crate) fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

pub(crate) fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub(crate) fn columns(chars: &[char]) -> usize {
    chars.iter().map(|&c| char_width(c)).sum()
}

/// Text of `chars` after skipping at least `skip` columns, cut to at most
/// `max` columns, plus the columns actually skipped. A wide char straddling
/// `skip` is skipped whole, so the second value can exceed `skip`.
pub(crate) fn window(chars: &[char], skip: usize, max: usize) -> (String, usize) {
    let mut skipped = 0;
    let mut used = 0;
    let mut out = String::new();
    for &c in chars {
        let w = char_width(c);
        if skipped < skip {
            skipped += w;
            continue;
        }
        if used + w > max {
            break;
        }
        used += w;
        out.push(c);
    }
    (out, skipped)
}

/// Columns to scroll so a cursor after `before_cursor` columns stays inside `max`
pub(crate) fn scroll_offset(before_cursor: usize, max: usize) -> usize {
    (before_cursor + 1).saturating_sub(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_skips_and_truncates() {
        let chars: Vec<char> = "hello world".chars().collect();
        assert_eq!(window(&chars, 0, 5), ("hello".to_string(), 0));
        assert_eq!(window(&chars, 6, 20), ("world".to_string(), 6));
        assert_eq!(window(&chars, 0, 0), (String::new(), 0));
    }

    #[test]
    fn test_window_does_not_split_wide_chars() {
        let chars: Vec<char> = "日本語".chars().collect();
        assert_eq!(columns(&chars), 6);
        assert_eq!(window(&chars, 0, 3), ("日".to_string(), 0));
    }

    #[test]
    fn test_window_reports_overshoot_on_wide_chars() {
        let chars: Vec<char> = "日本語".chars().collect();
        // 本 straddles column 3, so 4 columns are skipped
        assert_eq!(window(&chars, 3, 10), ("語".to_string(), 4));
    }

    #[test]
    fn test_scroll_offset_keeps_cursor_cell_visible() {
        assert_eq!(scroll_offset(3, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(0, 0), 1);
    }
}
