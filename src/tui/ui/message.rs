//! Message buffer pane
//!
//! Nothing is stored or listed yet, so the pane is an empty bordered box that
//! takes whatever height the other rows leave.

use ratatui::{
    widgets::{Block, Padding},
    Frame,
};

use super::{clip, layout::ScreenLayout};
use crate::tui::app::App;

/// Render the empty message pane
pub fn render(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    let block = Block::bordered()
        .border_style(app.theme().chrome_style())
        .padding(Padding::horizontal(1));
    f.render_widget(block, clip(f, layout.buffer));
}
