//! Header bar: channel info, search field, icons

use ratatui::{
    layout::Position,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{clip, layout::ScreenLayout};
use crate::tui::app::{App, Focus};

/// Render the bordered header and its three segments
pub fn render(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    let theme = app.theme();

    let block = Block::bordered().border_style(theme.chrome_style());
    f.render_widget(block, clip(f, layout.header));

    let left = Line::from(vec![
        Span::styled(theme.logo.clone(), theme.logo_style()),
        Span::raw(" "),
        Span::styled(theme.channel.clone(), theme.channel_style()),
        Span::raw(" "),
        Span::styled(theme.divider.clone(), theme.chrome_style()),
        Span::raw(" "),
        Span::styled(theme.topic.clone(), theme.topic_style()),
        Span::raw(" "),
        Span::styled(theme.divider.clone(), theme.chrome_style()),
        Span::raw(" "),
    ]);
    f.render_widget(Paragraph::new(left), clip(f, layout.header_left));

    let focused = app.focus() == Focus::Search;
    let search = app
        .search()
        .line(theme.focus_style(focused), theme.placeholder_style());
    let field = clip(f, layout.search_field);
    f.render_widget(Paragraph::new(search), field);

    if focused {
        let cursor = Position::new(
            layout.search_field.x.saturating_add(app.search().cursor_column()),
            layout.search_field.y,
        );
        if field.contains(cursor) {
            f.set_cursor_position(cursor);
        }
    }

    let icons: Vec<Span> = theme
        .header_icons
        .iter()
        .flat_map(|icon| {
            [
                Span::raw(" "),
                Span::styled(format!(" {icon} "), theme.icon_style()),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(icons)), clip(f, layout.header_right));
}
