//! Status line rendering

use ratatui::{widgets::Paragraph, Frame};

use super::{clip, layout::ScreenLayout};
use crate::tui::app::App;

/// Render the single-row inverted status bar
pub fn render(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    let theme = app.theme();
    let status = Paragraph::new(format!(" {}", theme.status_label)).style(theme.status_style());
    f.render_widget(status, clip(f, layout.status));
}
