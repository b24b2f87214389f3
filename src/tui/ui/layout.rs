//! Screen geometry
//!
//! Everything here is pure arithmetic on `u16` with saturating operations, so
//! no rect ever has a negative size. Rects may extend past the terminal on
//! very small screens; the draw pass clips them to the frame.
//!
//! Vertical stack, top to bottom:
//!
//! ```text
//! 1 row   outer padding
//! 1 row   header margin
//! 3 rows  header (border, content, border)
//! 1 row   status line
//! N rows  message buffer pane (borders included)
//! h+2     compose box, h in 1..=2
//! ```

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Theme;

/// Outer padding plus header border and padding, both sides
pub const FIXED_OUTER_PADDING: u16 = 8;
/// Smallest search box, padding included
pub const MIN_SEARCH_WIDTH: u16 = 10;
/// Horizontal padding of the search box
pub const SEARCH_PADDING: u16 = 2;
/// Most rows the compose box shows, whatever its content
pub const MAX_COMPOSE_ROWS: u16 = 2;

const PAD_LEFT: u16 = 2;
const PAD_RIGHT: u16 = 2;
const PAD_TOP: u16 = 1;
const HEADER_MARGIN_TOP: u16 = 1;
const HEADER_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
/// Border plus one column of padding
const BOX_INSET: u16 = 2;

/// Visible compose rows for a buffer of `line_count` lines
#[must_use]
pub fn compose_rows(line_count: usize) -> u16 {
    u16::try_from(line_count.clamp(1, usize::from(MAX_COMPOSE_ROWS))).unwrap_or(1)
}

/// Widths of the fixed-content pieces, measured once from the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// Logo, channel, divider, topic, divider, one margin column each
    pub left_width: u16,
    /// Two icon boxes: margin, padding, glyph, padding
    pub right_width: u16,
    pub prompt_width: u16,
    pub icons_width: u16,
}

fn cols(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

impl Metrics {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let left_width = [
            &theme.logo,
            &theme.channel,
            &theme.divider,
            &theme.topic,
            &theme.divider,
        ]
        .into_iter()
        .fold(0u16, |acc, s| acc.saturating_add(cols(s) + 1));

        let right_width = theme
            .header_icons
            .iter()
            .fold(0u16, |acc, icon| acc.saturating_add(cols(icon) + 3));

        Self {
            left_width,
            right_width,
            prompt_width: cols(&theme.compose_prompt),
            icons_width: cols(&theme.compose_icons),
        }
    }
}

/// Where every piece of the screen goes for one render tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub header_left: Rect,
    /// Search box including its padding
    pub search: Rect,
    /// Search field proper, inside the padding
    pub search_field: Rect,
    pub header_right: Rect,
    pub status: Rect,
    pub buffer: Rect,
    pub compose: Rect,
    pub compose_prompt: Rect,
    pub compose_input: Rect,
    pub compose_icons: Rect,
    /// Inner header width, also the width every stacked box is built from
    pub header_width: u16,
    pub compose_input_width: u16,
    pub available_height: u16,
}

impl ScreenLayout {
    /// Lay out a `width` x `height` terminal with a compose box `rows` high
    #[must_use]
    pub fn compute(width: u16, height: u16, rows: u16, metrics: &Metrics) -> Self {
        let header_width = width.saturating_sub(FIXED_OUTER_PADDING);
        let box_width = header_width.saturating_add(2);
        let x = PAD_LEFT;

        // Header
        let header_y = PAD_TOP + HEADER_MARGIN_TOP;
        let header = Rect::new(x, header_y, box_width, HEADER_HEIGHT);
        let content_x = x + BOX_INSET;
        let content_y = header_y + 1;

        let search_width = header_width
            .saturating_sub(metrics.left_width)
            .saturating_sub(metrics.right_width)
            .saturating_sub(SEARCH_PADDING)
            .max(MIN_SEARCH_WIDTH);
        let header_left = Rect::new(content_x, content_y, metrics.left_width, 1);
        let search = Rect::new(header_left.right(), content_y, search_width, 1);
        let search_field = Rect::new(
            search.x.saturating_add(SEARCH_PADDING / 2),
            content_y,
            search_width - SEARCH_PADDING,
            1,
        );
        let header_right = Rect::new(search.right(), content_y, metrics.right_width, 1);

        // Status line spans the padded width, wider than the boxed rows
        let status = Rect::new(
            x,
            header.bottom(),
            width.saturating_sub(PAD_LEFT + PAD_RIGHT),
            STATUS_HEIGHT,
        );

        // Compose box height decides what is left for the buffer pane
        let rows = rows.clamp(1, MAX_COMPOSE_ROWS);
        let compose_height = rows + 2;
        // Outer height of the buffer pane, borders included. The header counts
        // as 3 rows without its margin, which is folded into the trailing 2.
        // Measuring the pane by content height instead overflows by one row.
        let available_height = height.saturating_sub(
            HEADER_HEIGHT + STATUS_HEIGHT + compose_height + PAD_TOP + HEADER_MARGIN_TOP,
        );
        let buffer = Rect::new(x, status.bottom(), box_width, available_height);
        let compose = Rect::new(x, buffer.bottom(), box_width, compose_height);

        let compose_input_width = header_width
            .saturating_sub(metrics.prompt_width)
            .saturating_sub(metrics.icons_width)
            .saturating_sub(4);
        let inner_y = compose.y.saturating_add(1);
        let compose_prompt = Rect::new(x + BOX_INSET, inner_y, metrics.prompt_width, rows);
        let compose_input = Rect::new(compose_prompt.right(), inner_y, compose_input_width, rows);
        let compose_icons = Rect::new(compose_input.right(), inner_y, metrics.icons_width, 1);

        Self {
            header,
            header_left,
            search,
            search_field,
            header_right,
            status,
            buffer,
            compose,
            compose_prompt,
            compose_input,
            compose_icons,
            header_width,
            compose_input_width,
            available_height,
        }
    }

    /// Every rect, for bulk checks
    #[must_use]
    pub fn rects(&self) -> [Rect; 11] {
        [
            self.header,
            self.header_left,
            self.search,
            self.search_field,
            self.header_right,
            self.status,
            self.buffer,
            self.compose,
            self.compose_prompt,
            self.compose_input,
            self.compose_icons,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn metrics() -> Metrics {
        Metrics::from_theme(&Theme::default())
    }

    #[test]
    fn test_default_metrics() {
        assert_eq!(
            metrics(),
            Metrics {
                left_width: 33,
                right_width: 8,
                prompt_width: 2,
                icons_width: 4,
            }
        );
    }

    #[test]
    fn test_compose_rows_clamp() {
        assert_eq!(compose_rows(0), 1);
        assert_eq!(compose_rows(1), 1);
        assert_eq!(compose_rows(2), 2);
        assert_eq!(compose_rows(3), 2);
        assert_eq!(compose_rows(500), 2);
    }

    #[test]
    fn test_80x24() {
        let layout = ScreenLayout::compute(80, 24, 1, &metrics());

        assert_eq!(layout.header_width, 72);
        assert_eq!(layout.header, Rect::new(2, 2, 74, 3));
        assert_eq!(layout.header_left, Rect::new(4, 3, 33, 1));
        assert_eq!(layout.search, Rect::new(37, 3, 29, 1));
        assert_eq!(layout.search_field, Rect::new(38, 3, 27, 1));
        assert_eq!(layout.header_right, Rect::new(66, 3, 8, 1));
        assert_eq!(layout.status, Rect::new(2, 5, 76, 1));

        assert_eq!(layout.available_height, 15);
        assert_eq!(layout.buffer, Rect::new(2, 6, 74, 15));
        assert_eq!(layout.compose, Rect::new(2, 21, 74, 3));
        assert_eq!(layout.compose_input_width, 62);
        assert_eq!(layout.compose_prompt, Rect::new(4, 22, 2, 1));
        assert_eq!(layout.compose_input, Rect::new(6, 22, 62, 1));
        assert_eq!(layout.compose_icons, Rect::new(68, 22, 4, 1));
    }

    #[test]
    fn test_stack_fills_height_exactly() {
        for rows in 1..=2 {
            let layout = ScreenLayout::compute(80, 24, rows, &metrics());
            assert_eq!(layout.compose.bottom(), 24);
        }
    }

    #[test]
    fn test_two_row_compose_takes_from_buffer() {
        let one = ScreenLayout::compute(80, 24, 1, &metrics());
        let two = ScreenLayout::compute(80, 24, 2, &metrics());
        assert_eq!(two.available_height, one.available_height - 1);
        assert_eq!(two.compose.height, 4);
        assert_eq!(two.compose_input.height, 2);
    }

    #[test]
    fn test_rows_beyond_two_are_capped() {
        let two = ScreenLayout::compute(80, 24, 2, &metrics());
        let three = ScreenLayout::compute(80, 24, 3, &metrics());
        assert_eq!(two, three);
    }

    #[test]
    fn test_search_width_floor() {
        let layout = ScreenLayout::compute(40, 24, 1, &metrics());
        assert_eq!(layout.search.width, MIN_SEARCH_WIDTH);
        assert_eq!(layout.search_field.width, MIN_SEARCH_WIDTH - SEARCH_PADDING);
    }

    #[test]
    fn test_tiny_terminals_never_underflow() {
        let m = metrics();
        for width in 0..=90 {
            for height in 0..=30 {
                for rows in 1..=2 {
                    let layout = ScreenLayout::compute(width, height, rows, &m);
                    assert!(layout.search.width >= MIN_SEARCH_WIDTH);
                    assert!(layout.header_width <= width);
                    assert!(layout.available_height <= height);
                    if height < 4 + rows + 2 + 2 {
                        assert_eq!(layout.available_height, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_large_terminal_stays_in_bounds() {
        let layout = ScreenLayout::compute(500, 200, 2, &metrics());
        for rect in layout.rects() {
            assert!(rect.right() <= 500, "{rect:?}");
            assert!(rect.bottom() <= 200, "{rect:?}");
        }
    }
}
