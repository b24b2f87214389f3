//! UI rendering components
//!
//! Drawing is a pure function of [`App`]: the same state always paints the
//! same buffer.

mod header;
mod input;
pub mod layout;
mod message;
mod status;

use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::tui::app::App;

/// Shown until the first resize event provides real dimensions
pub const LOADING: &str = "Loading...";

/// Main draw function - renders the entire UI
pub fn draw(f: &mut Frame, app: &App) {
    if app.state().width == 0 {
        f.render_widget(Paragraph::new(LOADING), f.area());
        return;
    }

    let layout = app.layout();
    header::render(f, &layout, app);
    status::render(f, &layout, app);
    message::render(f, &layout, app);
    input::render(f, &layout, app);
}

/// Restrict a layout rect to the frame
fn clip(f: &Frame, rect: Rect) -> Rect {
    rect.intersection(f.area())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::{
        app::Focus,
        theme::{Theme, ACCENT, NEUTRAL},
    };
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Position, Terminal};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn sized(width: u16, height: u16) -> App {
        let mut app = App::new(Theme::default());
        app.handle_event(&Event::Resize(width, height));
        app
    }

    fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(width, height)).unwrap()
    }

    fn render(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = terminal(width, height);
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_loading_before_first_resize() {
        let app = App::new(Theme::default());
        let buf = render(&app, 80, 24);

        assert_eq!(row(&buf, 0).trim_end(), LOADING);
        for y in 1..24 {
            assert_eq!(row(&buf, y).trim(), "", "row {y}");
        }
    }

    #[test]
    fn test_80x24_rows() {
        let buf = render(&sized(80, 24), 80, 24);

        assert_eq!(row(&buf, 0).trim(), "");
        assert_eq!(row(&buf, 1).trim(), "");
        assert!(row(&buf, 2).starts_with("  ┌"));
        assert!(row(&buf, 2).trim_end().ends_with('┐'));

        let header = row(&buf, 3);
        assert!(header.contains("#general | TOPIC: Discussion |"));
        assert!(header.contains("Search"));

        let status = row(&buf, 5);
        assert!(status.starts_with("   MESSAGE-BUFFER"));
        assert_eq!(buf[(2, 5)].bg, ACCENT);
        assert_eq!(buf[(77, 5)].bg, ACCENT);

        assert!(row(&buf, 6).starts_with("  ┌"));
        assert!(row(&buf, 20).starts_with("  └"));

        assert!(row(&buf, 21).starts_with("  ╭"));
        assert!(row(&buf, 22).contains("│ > Type a Message or command (use / for actions)"));
        assert!(row(&buf, 23).starts_with("  ╰"));
    }

    #[test]
    fn test_initial_focus_colours() {
        let buf = render(&sized(80, 24), 80, 24);

        // compose border and prompt
        assert_eq!(buf[(2, 21)].fg, ACCENT);
        assert_eq!(buf[(4, 22)].fg, ACCENT);
        // search prompt glyph, header border
        assert_eq!(buf[(38, 3)].fg, NEUTRAL);
        assert_eq!(buf[(2, 2)].fg, NEUTRAL);
    }

    #[test]
    fn test_switch_focus_recolours_and_restores() {
        let mut app = sized(80, 24);
        let initial = render(&app, 80, 24);

        app.handle_event(&key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Search);
        let switched = render(&app, 80, 24);
        assert_eq!(switched[(2, 21)].fg, NEUTRAL);
        assert_eq!(switched[(4, 22)].fg, NEUTRAL);
        assert_eq!(switched[(38, 3)].fg, ACCENT);

        app.handle_event(&key(KeyCode::Tab));
        assert_eq!(render(&app, 80, 24), initial);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut app = sized(80, 24);
        app.handle_event(&Event::Paste("hello\nworld".to_string()));
        assert_eq!(render(&app, 80, 24), render(&app, 80, 24));
    }

    #[test]
    fn test_three_lines_render_two_rows() {
        let mut app = sized(80, 24);
        app.handle_event(&Event::Paste("one\ntwo\nthree".to_string()));
        let buf = render(&app, 80, 24);

        assert!(row(&buf, 19).starts_with("  └"));
        assert!(row(&buf, 20).starts_with("  ╭"));
        assert!(row(&buf, 21).contains("│ > two"));
        assert!(row(&buf, 22).contains("│   three"));
        assert!(row(&buf, 23).starts_with("  ╰"));
    }

    #[test]
    fn test_cursor_follows_focus() {
        let mut app = sized(80, 24);
        let mut terminal = terminal(80, 24);

        terminal.draw(|f| draw(f, &app)).unwrap();
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(6, 22));

        app.handle_event(&key(KeyCode::Tab));
        app.handle_event(&key(KeyCode::Char('x')));
        terminal.draw(|f| draw(f, &app)).unwrap();
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(41, 3));
    }

    #[test]
    fn test_small_terminals_do_not_panic() {
        for width in 1..=30 {
            for height in 1..=12 {
                let app = sized(width, height);
                let _ = render(&app, width, height);
            }
        }
    }

    #[test]
    fn test_state_larger_than_frame_is_clipped() {
        let app = sized(120, 40);
        let buf = render(&app, 60, 20);
        assert_eq!(buf.area, Rect::new(0, 0, 60, 20));
    }
}
