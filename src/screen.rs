//! Screens: the units the application switches between.

use crate::component::Component;
use crate::dispatch::{Dispatch, KeyResult};
use crate::error::Result;
use crate::text::Line;
use crate::types::Key;

/// A full-screen view registered with the application under a unique key.
pub trait Screen: Dispatch {
    fn key(&self) -> &str;

    fn render(&mut self, width: usize, height: usize) -> Result<Vec<Line>>;
}

/// A screen wrapping one root component, with optional hotkeys that switch
/// to other screens.
pub struct SimpleScreen {
    key: String,
    root: Component,
    hotkeys: Vec<(Key, String)>,
}

impl SimpleScreen {
    pub fn new(key: impl Into<String>, root: Component) -> Self {
        Self {
            key: key.into(),
            root,
            hotkeys: Vec::new(),
        }
    }

    /// Bind `key` to a transition to the screen registered as `target`.
    pub fn with_hotkey(mut self, key: Key, target: impl Into<String>) -> Self {
        self.hotkeys.push((key, target.into()));
        self
    }

    pub fn root(&self) -> &Component {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Component {
        &mut self.root
    }
}

impl Dispatch for SimpleScreen {
    fn keypress(&mut self, key: Key) -> KeyResult {
        self.hotkeys
            .iter()
            .find(|(hotkey, _)| *hotkey == key)
            .map(|(_, target)| KeyResult::Transition(target.clone()))
            .unwrap_or(KeyResult::Unhandled)
    }

    fn dispatch_keypress(&mut self, key: Key) -> KeyResult {
        self.root.handle_keypress(key)
    }
}

impl Screen for SimpleScreen {
    fn key(&self) -> &str {
        &self.key
    }

    fn render(&mut self, width: usize, height: usize) -> Result<Vec<Line>> {
        self.root.render(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::TextView;

    #[test]
    fn test_hotkey_transitions_before_root() {
        let mut screen = SimpleScreen::new("main", Component::leaf(TextView::new("body")))
            .with_hotkey(Key::Char('h'), "help");
        assert_eq!(screen.key(), "main");
        assert!(matches!(
            screen.handle_keypress(Key::Char('h')),
            KeyResult::Transition(ref target) if target == "help"
        ));
        assert!(matches!(screen.handle_keypress(Key::Char('x')), KeyResult::Unhandled));
    }

    #[test]
    fn test_render_delegates_to_root() {
        let mut screen = SimpleScreen::new("main", Component::leaf(TextView::new("body")));
        let rows = screen.render(6, 3).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].to_string(), "body  ");
    }
}
