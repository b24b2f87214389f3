//! Search field: `tui_input::Input` behind a prompt and placeholder

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use tui_input::{Input, InputRequest};
use unicode_width::UnicodeWidthStr;

use super::{columns, has_command_modifier, pressed, scroll_offset, window, EventOutcome, InputWidget};

/// Single-line input used for the header search field
#[derive(Debug, Clone)]
pub struct TextInput {
    prompt: String,
    placeholder: String,
    input: Input,
    /// Maximum number of chars; 0 means unlimited
    char_limit: usize,
    /// Columns for prompt and text together
    width: u16,
    focused: bool,
}

/// Editing request for a key, using readline-style bindings
fn request(key: &KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let request = match key.code {
        KeyCode::Char('a') if ctrl => InputRequest::GoToStart,
        KeyCode::Char('e') if ctrl => InputRequest::GoToEnd,
        KeyCode::Char('u') if ctrl => InputRequest::DeleteLine,
        KeyCode::Char('w') if ctrl => InputRequest::DeletePrevWord,
        KeyCode::Char('k') if ctrl => InputRequest::DeleteTillEnd,
        KeyCode::Char(c) if !has_command_modifier(key) => InputRequest::InsertChar(c),
        KeyCode::Backspace => InputRequest::DeletePrevChar,
        KeyCode::Delete => InputRequest::DeleteNextChar,
        KeyCode::Left if ctrl => InputRequest::GoToPrevWord,
        KeyCode::Left => InputRequest::GoToPrevChar,
        KeyCode::Right if ctrl => InputRequest::GoToNextWord,
        KeyCode::Right => InputRequest::GoToNextChar,
        KeyCode::Home => InputRequest::GoToStart,
        KeyCode::End => InputRequest::GoToEnd,
        _ => return None,
    };
    Some(request)
}

impl TextInput {
    /// Create an empty, unfocused field
    pub fn new(prompt: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            placeholder: placeholder.into(),
            input: Input::default(),
            char_limit: 0,
            width: 0,
            focused: false,
        }
    }

    #[must_use]
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = limit;
        self
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.input.value().to_string()
    }

    fn apply(&mut self, request: InputRequest) {
        if let InputRequest::InsertChar(_) = request {
            if self.char_limit > 0 && self.input.value().chars().count() >= self.char_limit {
                return;
            }
        }
        self.input.handle(request);
    }

    /// Columns left for text once the prompt is drawn
    fn text_columns(&self) -> usize {
        usize::from(self.width).saturating_sub(self.prompt.width())
    }

    /// Visible text and the columns it starts after
    fn visible(&self) -> (String, usize, usize) {
        let chars: Vec<char> = self.input.value().chars().collect();
        let before = columns(&chars[..self.input.cursor().min(chars.len())]);
        let max = self.text_columns();
        let (text, skipped) = window(&chars, scroll_offset(before, max), max);
        (text, before, skipped)
    }

    /// Render prompt and visible text (or placeholder) as one line
    #[must_use]
    pub fn line(&self, text_style: Style, placeholder_style: Style) -> Line<'static> {
        let body = if self.input.value().is_empty() {
            let placeholder: Vec<char> = self.placeholder.chars().collect();
            let (text, _) = window(&placeholder, 0, self.text_columns());
            Span::styled(text, placeholder_style)
        } else {
            Span::styled(self.visible().0, text_style)
        };
        Line::from(vec![Span::styled(self.prompt.clone(), text_style), body])
    }

    /// Cursor column relative to the start of the field
    #[must_use]
    pub fn cursor_column(&self) -> u16 {
        let (_, before, skipped) = self.visible();
        let col = self.prompt.width() + before.saturating_sub(skipped);
        u16::try_from(col).unwrap_or(u16::MAX)
    }
}

impl InputWidget for TextInput {
    fn handle_event(&mut self, event: &Event) -> EventOutcome {
        if !self.focused {
            return EventOutcome::Ignored;
        }
        if let Event::Paste(text) = event {
            for c in text.chars().filter(|c| !matches!(c, '\r' | '\n')) {
                self.apply(InputRequest::InsertChar(c));
            }
            return EventOutcome::Consumed;
        }
        match pressed(event).as_ref().and_then(request) {
            Some(request) => {
                self.apply(request);
                EventOutcome::Consumed
            }
            None => EventOutcome::Ignored,
        }
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}
