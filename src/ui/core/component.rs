use super::actions::Action;
use crossterm::event::{Event, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn handle_events(&mut self, event: Option<Event>) -> Action {
        if let Some(Event::Key(key)) = event {
            self.handle_key_events(key)
        } else {
            Action::None
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    /// Whether the component is capturing text input, in which case global
    /// single-letter shortcuts must not fire
    fn is_editing(&self) -> bool {
        false
    }

    /// Key hints shown in the status bar while the component is active
    fn key_hints(&self) -> &'static str {
        ""
    }
}
