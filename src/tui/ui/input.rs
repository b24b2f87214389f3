//! Compose box rendering

use ratatui::{
    layout::Position,
    style::Style,
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use super::{clip, layout::ScreenLayout};
use crate::tui::app::{App, Focus};

/// Render prompt, text area and icons inside a rounded, focus-coloured border
pub fn render(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    let theme = app.theme();
    let focused = app.focus() == Focus::Compose;
    let focus_style = theme.focus_style(focused);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(focus_style);
    f.render_widget(block, clip(f, layout.compose));

    let prompt = Paragraph::new(theme.compose_prompt.clone()).style(focus_style);
    f.render_widget(prompt, clip(f, layout.compose_prompt));

    let compose = app.compose();
    let input = clip(f, layout.compose_input);
    f.render_widget(
        Paragraph::new(compose.lines(Style::default(), theme.placeholder_style())),
        input,
    );

    let icons = Paragraph::new(theme.compose_icons.clone()).style(theme.chrome_style());
    f.render_widget(icons, clip(f, layout.compose_icons));

    if focused {
        let (x, y) = compose.cursor_position();
        let cursor = Position::new(
            layout.compose_input.x.saturating_add(x),
            layout.compose_input.y.saturating_add(y),
        );
        if input.contains(cursor) {
            f.set_cursor_position(cursor);
        }
    }
}
