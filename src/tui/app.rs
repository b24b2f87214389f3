//! Screen controller: focus, dimensions and the two input widgets
//!
//! Events arrive one at a time through [`App::handle_event`]. The controller
//! applies its own bindings first, then forwards the event to both widgets
//! (each ignores input while unfocused) and finally refits the compose box.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, trace};

use super::{
    theme::Theme,
    ui::layout::{compose_rows, Metrics, ScreenLayout},
    widgets::{pressed, InputWidget, TextArea, TextInput},
};

/// Which widget receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Search,
    #[default]
    Compose,
}

impl Focus {
    /// The other widget
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Focus::Search => Focus::Compose,
            Focus::Compose => Focus::Search,
        }
    }
}

/// Dimensions and focus; zero width means no resize has arrived yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenState {
    pub width: u16,
    pub height: u16,
    pub focus: Focus,
}

/// Keys the controller handles itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Quit,
    SwitchFocus,
    /// Reserved for sending a message; the compose box still gets the key
    Submit,
}

impl Binding {
    /// Map a key event to a controller binding
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Binding::Quit);
        }
        match key.code {
            KeyCode::Tab => Some(Binding::SwitchFocus),
            KeyCode::Enter => Some(Binding::Submit),
            _ => None,
        }
    }
}

/// Main application state
pub struct App {
    state: ScreenState,
    theme: Theme,
    metrics: Metrics,
    search: TextInput,
    compose: TextArea,
    should_quit: bool,
}

impl App {
    /// Create the screen with the compose box focused
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let search = TextInput::new(theme.search_prompt.clone(), theme.search_placeholder.clone())
            .with_char_limit(theme.search_char_limit);
        let mut compose = TextArea::new(theme.compose_placeholder.clone());
        compose.focus();

        Self {
            state: ScreenState::default(),
            metrics: Metrics::from_theme(&theme),
            theme,
            search,
            compose,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> ScreenState {
        self.state
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.state.focus
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn search(&self) -> &TextInput {
        &self.search
    }

    #[must_use]
    pub fn compose(&self) -> &TextArea {
        &self.compose
    }

    /// Check if should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Geometry for the current dimensions and compose height
    #[must_use]
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(
            self.state.width,
            self.state.height,
            self.compose.height(),
            &self.metrics,
        )
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: &Event) {
        if let Some(key) = pressed(event) {
            match Binding::from_key(&key) {
                Some(Binding::Quit) => {
                    info!("quit requested");
                    self.should_quit = true;
                    return;
                }
                Some(Binding::SwitchFocus) => self.switch_focus(),
                Some(Binding::Submit) => {
                    trace!(focus = ?self.state.focus, "submit has no backend");
                }
                None => {}
            }
        }

        if let Event::Resize(width, height) = *event {
            self.resize(width, height);
        }

        self.search.handle_event(event);
        self.compose.handle_event(event);

        self.fit_compose_height();
    }

    fn switch_focus(&mut self) {
        let previous = self.state.focus;
        self.state.focus = previous.toggled();
        match self.state.focus {
            Focus::Search => {
                self.compose.blur();
                self.search.focus();
            }
            Focus::Compose => {
                self.search.blur();
                self.compose.focus();
            }
        }
        debug!(from = ?previous, to = ?self.state.focus, "focus switched");
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.state.width = width;
        self.state.height = height;

        let layout = self.layout();
        self.search.set_width(layout.search_field.width);
        self.compose.set_width(layout.compose_input_width);
        debug!(width, height, "resized");
    }

    /// Show at most two rows of the compose buffer, never fewer than one
    fn fit_compose_height(&mut self) {
        self.compose.set_height(compose_rows(self.compose.line_count()));
    }
}
