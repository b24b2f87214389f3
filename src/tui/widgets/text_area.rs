//! Compose box: `tui_textarea::TextArea` with a bounded row view
//!
//! The editor keeps every line it is given; `height` only bounds how many
//! rows are shown. Rows are painted here rather than by the editor's own
//! widget so that only the cursor row scrolls sideways; neighbouring rows
//! always start at column 0.

use crossterm::event::{Event, KeyCode};
use ratatui::{style::Style, text::Line};
use tui_textarea::TextArea as Editor;

use super::{columns, pressed, scroll_offset, window, EventOutcome, InputWidget};

pub struct TextArea {
    editor: Editor<'static>,
    placeholder: String,
    width: u16,
    height: u16,
    focused: bool,
}

impl TextArea {
    /// Create an empty, unfocused area one row high
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            editor: Editor::default(),
            placeholder: placeholder.into(),
            width: 0,
            height: 1,
            focused: false,
        }
    }

    /// Number of hard lines in the buffer; an empty buffer has one
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.editor.lines().len()
    }

    /// Set the number of visible rows
    pub fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    /// Number of rows the area renders
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
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
        self.editor.lines().join("\n")
    }

    fn is_empty(&self) -> bool {
        matches!(self.editor.lines(), [only] if only.is_empty())
    }

    /// First buffer row shown
    fn top(&self) -> usize {
        let height = usize::from(self.height.max(1));
        (self.editor.cursor().0 + 1).saturating_sub(height)
    }

    /// Visible part of `line`; only the cursor row is scrolled
    fn row_window(&self, row: usize, line: &str) -> (String, usize) {
        let chars: Vec<char> = line.chars().collect();
        let max = usize::from(self.width);
        let (cursor_row, cursor_col) = self.editor.cursor();
        let skip = if row == cursor_row {
            scroll_offset(columns(&chars[..cursor_col.min(chars.len())]), max)
        } else {
            0
        };
        window(&chars, skip, max)
    }

    /// Exactly `height` rows: visible text, or the placeholder when empty
    #[must_use]
    pub fn lines(&self, text_style: Style, placeholder_style: Style) -> Vec<Line<'static>> {
        let rows = usize::from(self.height);

        let mut out: Vec<Line<'static>> = if self.is_empty() {
            let placeholder: Vec<char> = self.placeholder.chars().collect();
            let (text, _) = window(&placeholder, 0, usize::from(self.width));
            vec![Line::styled(text, placeholder_style)]
        } else {
            let top = self.top();
            self.editor
                .lines()
                .iter()
                .enumerate()
                .skip(top)
                .take(rows)
                .map(|(row, line)| Line::styled(self.row_window(row, line).0, text_style))
                .collect()
        };
        out.truncate(rows);
        out.resize(rows, Line::default());
        out
    }

    /// Cursor position `(column, row)` relative to the first visible cell
    #[must_use]
    pub fn cursor_position(&self) -> (u16, u16) {
        let (row, col) = self.editor.cursor();
        let chars: Vec<char> = self.editor.lines()[row].chars().collect();
        let before = columns(&chars[..col.min(chars.len())]);
        let (_, skipped) = self.row_window(row, &self.editor.lines()[row]);
        (
            u16::try_from(before.saturating_sub(skipped)).unwrap_or(u16::MAX),
            u16::try_from(row - self.top()).unwrap_or(u16::MAX),
        )
    }

    fn paste(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.editor.insert_newline();
            }
            self.editor.insert_str(segment);
        }
    }
}

impl InputWidget for TextArea {
    fn handle_event(&mut self, event: &Event) -> EventOutcome {
        if !self.focused {
            return EventOutcome::Ignored;
        }
        if let Event::Paste(text) = event {
            self.paste(text);
            return EventOutcome::Consumed;
        }
        let Some(key) = pressed(event) else {
            return EventOutcome::Ignored;
        };
        // Tab belongs to the focus switch, not to indentation
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            return EventOutcome::Ignored;
        }

        let cursor = self.editor.cursor();
        let modified = self.editor.input(Event::Key(key));
        if modified || self.editor.cursor() != cursor {
            EventOutcome::Consumed
        } else {
            EventOutcome::Ignored
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
