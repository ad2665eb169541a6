//! Application Module — Screen registry and the run loop.
//!
//! Responsibilities:
//! - Keyed registry of screens and the active-screen pointer
//! - Applying dispatch results: transitions, deferred jobs, repaint flag
//! - Rendering the active screen into an escaped frame
//! - The blocking poll-for-key / redraw-if-dirty loop over a `TerminalBackend`

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::dispatch::{Deferred, Dispatch, KeyResult};
use crate::error::{Error, Result};
use crate::escape::escape_lines;
use crate::screen::Screen;
use crate::terminal::{TerminalBackend, TerminalInput};
use crate::types::Key;

pub struct Application {
    screens: HashMap<String, Box<dyn Screen>>,
    active: Option<String>,
    quit_keys: Vec<Key>,
    timeout_ms: u64,
    reserved_rows: usize,
    dirty: bool,
    running: bool,
    deferred: Vec<Deferred>,
}

impl Default for Application {
    fn default() -> Self {
        Self {
            screens: HashMap::new(),
            active: None,
            quit_keys: vec![Key::Ctrl('c')],
            timeout_ms: 500,
            reserved_rows: 1,
            dirty: true,
            running: false,
            deferred: Vec::new(),
        }
    }
}

impl Application {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            quit_keys: config.quit_keys()?,
            timeout_ms: config.timeout_ms,
            reserved_rows: config.reserved_rows,
            ..Self::default()
        })
    }

    // ── Registry ────────────────────────────────────────────────────────

    pub fn register_screen(&mut self, screen: impl Screen + 'static) -> Result<()> {
        let key = screen.key().to_string();
        if self.screens.contains_key(&key) {
            return Err(Error::DuplicateRegistration(key));
        }
        debug!(screen = %key, "registered screen");
        self.screens.insert(key, Box::new(screen));
        Ok(())
    }

    /// Unregister a screen. Clearing the active screen leaves the
    /// application without one.
    pub fn clear_screen(&mut self, key: &str) -> Option<Box<dyn Screen>> {
        let removed = self.screens.remove(key);
        if removed.is_some() {
            debug!(screen = key, "cleared screen");
            if self.active.as_deref() == Some(key) {
                self.active = None;
            }
        }
        removed
    }

    pub fn has_screen(&self, key: &str) -> bool {
        self.screens.contains_key(key)
    }

    pub fn activate(&mut self, key: &str) -> Result<()> {
        if !self.screens.contains_key(key) {
            return Err(Error::UnregisteredScreen(key.to_string()));
        }
        debug!(screen = key, "activated screen");
        self.active = Some(key.to_string());
        self.dirty = true;
        Ok(())
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_screen(&mut self) -> Result<&mut dyn Screen> {
        let key = self.active.as_ref().ok_or(Error::NoActiveScreen)?;
        match self.screens.get_mut(key) {
            Some(screen) => Ok(screen.as_mut()),
            None => Err(Error::UnregisteredScreen(key.clone())),
        }
    }

    // ── State ───────────────────────────────────────────────────────────

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn pending_jobs(&self) -> usize {
        self.deferred.len()
    }

    pub fn take_deferred(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.deferred)
    }

    // ── Keys and frames ─────────────────────────────────────────────────

    /// Offer a key to the dispatch chain and apply the result. Returns
    /// whether anything handled the key.
    pub fn process_key(&mut self, key: Key) -> Result<bool> {
        self.active_screen()?;

        let result = self.handle_keypress(key);
        let handled = result.is_handled();
        if result.needs_repaint() {
            self.dirty = true;
        }
        match result {
            KeyResult::Transition(target) => {
                info!(from = ?self.active, to = %target, "screen transition");
                self.activate(&target)?;
            }
            KeyResult::Async(job) => {
                debug!(job = job.label(), "queued deferred job");
                self.deferred.push(job);
            }
            KeyResult::Unhandled | KeyResult::Continue | KeyResult::Repaint => {}
        }
        Ok(handled)
    }

    /// Render the active screen at `height - reserved_rows` rows and return
    /// the escaped frame. Nothing is returned unless the whole render succeeds.
    pub fn render(&mut self, width: usize, height: usize) -> Result<String> {
        let rows = height.saturating_sub(self.reserved_rows);
        let lines = self.active_screen()?.render(width, rows)?;
        self.dirty = false;
        Ok(escape_lines(&lines))
    }

    /// Drive the application until it is stopped or no screen is active.
    /// The backend is always shut down, even when the loop fails.
    pub fn run<B: TerminalBackend>(&mut self, backend: &mut B) -> Result<()> {
        self.active_screen()?;
        backend.init()?;
        let result = self.run_loop(backend);
        let restored = backend.shutdown();
        self.running = false;
        result.and(restored)
    }

    fn run_loop<B: TerminalBackend>(&mut self, backend: &mut B) -> Result<()> {
        self.running = true;
        self.dirty = true;
        let mut last_size = backend.size();

        while self.running && self.active.is_some() {
            if self.dirty {
                let (width, height) = backend.size();
                let frame = self.render(width as usize, height as usize)?;
                backend.write_frame(&frame)?;
            }

            for job in self.take_deferred() {
                debug!(job = job.label(), "spawning deferred job");
                std::thread::spawn(move || job.run());
            }

            match backend.read_input(self.timeout_ms)? {
                Some(TerminalInput::Key(key)) => {
                    self.process_key(key)?;
                }
                Some(TerminalInput::Resize(width, height)) => {
                    debug!(width, height, "terminal resized");
                    last_size = (width, height);
                    self.dirty = true;
                }
                Some(TerminalInput::Closed) => {
                    info!("input closed, stopping");
                    self.running = false;
                }
                None => {
                    let size = backend.size();
                    if size != last_size {
                        last_size = size;
                        self.dirty = true;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Dispatch for Application {
    fn dispatch_keypress(&mut self, key: Key) -> KeyResult {
        match self.active_screen() {
            Ok(screen) => screen.handle_keypress(key),
            Err(_) => KeyResult::Unhandled,
        }
    }

    fn after_keypress(&mut self, key: Key) -> KeyResult {
        if self.quit_keys.contains(&key) {
            info!(key = %key, "quit key pressed");
            self.running = false;
            return KeyResult::Continue;
        }
        KeyResult::Unhandled
    }
}
