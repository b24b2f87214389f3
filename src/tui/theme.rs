//! Colours, glyphs and fixed strings of the mock-up
//!
//! A [`Theme`] is plain data built once at startup and passed by reference to
//! the draw pass. Nothing here is mutated after construction; styles that
//! depend on focus are derived per draw by [`Theme::focus_style`].

use ratatui::style::{Color, Modifier, Style};

/// Pink accent used for the focused widget and the status bar
pub const ACCENT: Color = Color::Indexed(212);

/// Gray used for unfocused borders, prompts and icons
pub const NEUTRAL: Color = Color::Indexed(240);

/// Lighter gray for the channel topic
pub const MUTED: Color = Color::Indexed(243);

/// Bright white for the channel name and icons
pub const BRIGHT: Color = Color::Rgb(255, 255, 255);

/// Visual configuration of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Focused widget colour
    pub accent: Color,
    /// Unfocused widget colour
    pub neutral: Color,
    /// Topic text colour
    pub muted: Color,
    /// Channel name and icon colour
    pub bright: Color,

    pub logo: String,
    pub channel: String,
    pub divider: String,
    pub topic: String,
    pub header_icons: [String; 2],

    pub status_label: String,

    pub search_prompt: String,
    pub search_placeholder: String,
    pub search_char_limit: usize,

    pub compose_prompt: String,
    pub compose_placeholder: String,
    /// Trailing glyphs of the compose box, leading space included
    pub compose_icons: String,

    pub window_title: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: ACCENT,
            neutral: NEUTRAL,
            muted: MUTED,
            bright: BRIGHT,
            logo: "\u{f489}".to_string(),
            channel: "#general".to_string(),
            divider: "|".to_string(),
            topic: "TOPIC: Discussion".to_string(),
            header_icons: ["\u{f0f3}".to_string(), "\u{f05a}".to_string()],
            status_label: "MESSAGE-BUFFER".to_string(),
            search_prompt: "\u{f002} ".to_string(),
            search_placeholder: "Search".to_string(),
            search_char_limit: 156,
            compose_prompt: "> ".to_string(),
            compose_placeholder: "Type a Message or command (use / for actions)".to_string(),
            compose_icons: " \u{ee49} \u{f0066}".to_string(),
            window_title: "chat-mock".to_string(),
        }
    }
}

impl Theme {
    /// Foreground style for a widget's border and prompt
    #[must_use]
    pub fn focus_style(&self, focused: bool) -> Style {
        Style::new().fg(if focused { self.accent } else { self.neutral })
    }

    /// Unfocused chrome: header border, buffer border, icons
    #[must_use]
    pub fn chrome_style(&self) -> Style {
        Style::new().fg(self.neutral)
    }

    #[must_use]
    pub fn logo_style(&self) -> Style {
        Style::new().fg(self.accent)
    }

    #[must_use]
    pub fn channel_style(&self) -> Style {
        Style::new().fg(self.bright).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn topic_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    #[must_use]
    pub fn icon_style(&self) -> Style {
        Style::new().fg(self.bright)
    }

    /// Inverted bar: bright text on the accent background
    #[must_use]
    pub fn status_style(&self) -> Style {
        Style::new().fg(self.bright).bg(self.accent)
    }

    /// Placeholder text inside the input widgets
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::new().fg(self.neutral)
    }
}
