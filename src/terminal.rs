//! TerminalBackend trait + CrosstermBackend implementation.
//!
//! The application loop depends on this trait, not on crossterm directly,
//! so tests and CI can drive it with the headless backend.

use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::types::Key;

/// Input delivered by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalInput {
    Key(Key),
    Resize(u16, u16),
    /// The input source is exhausted; the application stops.
    Closed,
}

// ============================================================================
// TerminalBackend Trait
// ============================================================================

pub trait TerminalBackend {
    fn init(&mut self) -> Result<()>;
    fn shutdown(&mut self) -> Result<()>;
    fn size(&self) -> (u16, u16);
    /// Replace the screen contents with `frame`: newline-separated rows.
    fn write_frame(&mut self, frame: &str) -> Result<()>;
    /// Wait up to `timeout_ms` for one input. `None` means the wait timed out.
    fn read_input(&mut self, timeout_ms: u64) -> Result<Option<TerminalInput>>;
}

// ============================================================================
// CrosstermBackend
// ============================================================================

pub struct CrosstermBackend {
    width: u16,
    height: u16,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Self {
            width: w,
            height: h,
        }
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<()> {
        use crossterm::{
            cursor,
            terminal::{enable_raw_mode, EnterAlternateScreen},
            ExecutableCommand,
        };

        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        // Frames are redrawn in full, so the OS cursor only gets in the way.
        stdout.execute(cursor::Hide)?;

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.width = w;
        self.height = h;

        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        use crossterm::{
            cursor,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
            ExecutableCommand,
        };

        let mut stdout = std::io::stdout();
        // Restore the cursor before leaving so the shell prompt renders
        // correctly after exit.
        stdout.execute(cursor::Show)?;
        stdout.execute(LeaveAlternateScreen)?;
        disable_raw_mode()?;

        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        crossterm::terminal::size().unwrap_or((self.width, self.height))
    }

    fn write_frame(&mut self, frame: &str) -> Result<()> {
        use crossterm::{
            cursor::MoveTo,
            style::Print,
            terminal::{Clear, ClearType},
            QueueableCommand,
        };

        let mut stdout = std::io::stdout();
        let mut rows = 0u16;
        for (y, row) in frame.split('\n').enumerate() {
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            stdout.queue(MoveTo(0, y))?.queue(Print(row))?;
            rows = y.saturating_add(1);
        }
        // Clear whatever a taller previous frame left behind.
        stdout
            .queue(MoveTo(0, rows))?
            .queue(Clear(ClearType::FromCursorDown))?;
        stdout.flush()?;
        Ok(())
    }

    fn read_input(&mut self, timeout_ms: u64) -> Result<Option<TerminalInput>> {
        use crossterm::event::{self, Event, KeyEventKind};

        if !event::poll(Duration::from_millis(timeout_ms))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                Ok(map_key(key_event).map(TerminalInput::Key))
            }
            Event::Resize(w, h) => {
                self.width = w;
                self.height = h;
                Ok(Some(TerminalInput::Resize(w, h)))
            }
            _ => Ok(None),
        }
    }
}

/// Translate a crossterm key event. Keys outside the closed `Key` set map to `None`.
pub fn map_key(key_event: crossterm::event::KeyEvent) -> Option<Key> {
    use crossterm::event::{KeyCode, KeyModifiers};

    let key = match key_event.code {
        KeyCode::Char(c) if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Key::Ctrl(c.to_ascii_lowercase())
        }
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::Esc => Key::Escape,
        KeyCode::F(n) => Key::F(n),
        _ => return None,
    };
    Some(key)
}

// ============================================================================
// HeadlessBackend (for testing and CI environments)
// ============================================================================

/// Fixed-size backend that replays scripted input and records every frame.
/// Once the script runs out it reports [`TerminalInput::Closed`].
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    pub width: u16,
    pub height: u16,
    pub frames: Vec<String>,
    script: VecDeque<TerminalInput>,
    initialized: bool,
}

impl HeadlessBackend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.script.extend(keys.into_iter().map(TerminalInput::Key));
        self
    }

    pub fn push_input(&mut self, input: TerminalInput) {
        self.script.push_back(input);
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl TerminalBackend for HeadlessBackend {
    fn init(&mut self) -> Result<()> {
        self.initialized = true;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.initialized = false;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn write_frame(&mut self, frame: &str) -> Result<()> {
        self.frames.push(frame.to_string());
        Ok(())
    }

    fn read_input(&mut self, _timeout_ms: u64) -> Result<Option<TerminalInput>> {
        let input = self.script.pop_front().unwrap_or(TerminalInput::Closed);
        if let TerminalInput::Resize(w, h) = input {
            self.width = w;
            self.height = h;
        }
        Ok(Some(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_map_key_ctrl_and_plain() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(Key::Ctrl('c')));
        let q = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(map_key(q), Some(Key::Char('Q')));
        let f5 = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(map_key(f5), Some(Key::F(5)));
        let null = KeyEvent::new(KeyCode::Null, KeyModifiers::NONE);
        assert_eq!(map_key(null), None);
    }

    #[test]
    fn test_headless_replays_script_then_closes() {
        let mut backend = HeadlessBackend::new(10, 4).with_keys([Key::Up]);
        backend.push_input(TerminalInput::Resize(20, 5));
        assert_eq!(backend.read_input(0).unwrap(), Some(TerminalInput::Key(Key::Up)));
        assert_eq!(backend.read_input(0).unwrap(), Some(TerminalInput::Resize(20, 5)));
        assert_eq!(backend.size(), (20, 5));
        assert_eq!(backend.read_input(0).unwrap(), Some(TerminalInput::Closed));
    }

    #[test]
    fn test_headless_captures_frames() {
        let mut backend = HeadlessBackend::new(10, 4);
        backend.init().unwrap();
        assert!(backend.is_initialized());
        backend.write_frame("a\nb").unwrap();
        assert_eq!(backend.last_frame(), Some("a\nb"));
        backend.shutdown().unwrap();
        assert!(!backend.is_initialized());
    }
}
