//! Dispatch Module — Keypress chain of responsibility.
//!
//! Responsibilities:
//! - `KeyResult`: what a handler did with a key and whether to repaint
//! - `Dispatch`: the three-stage keypress/dispatch/after chain shared by the
//!   application, screens, layouts and leaf widgets
//! - `Deferred`: work packaged by a handler for the run loop to execute

use std::fmt;

use crate::types::Key;

/// A unit of work returned by a handler and run off the UI thread.
pub struct Deferred {
    label: String,
    job: Box<dyn FnOnce() + Send + 'static>,
}

impl Deferred {
    pub fn new(label: impl Into<String>, job: impl FnOnce() + Send + 'static) -> Self {
        Self {
            label: label.into(),
            job: Box::new(job),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn run(self) {
        (self.job)()
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Outcome of offering a key to a handler.
#[derive(Debug)]
pub enum KeyResult {
    /// Not consumed; the next stage or the parent may act.
    Unhandled,
    /// Consumed, nothing visible changed.
    Continue,
    /// Consumed, the screen must be redrawn.
    Repaint,
    /// Switch to the screen registered under this key.
    Transition(String),
    /// Run the deferred job, then redraw.
    Async(Deferred),
}

impl KeyResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Unhandled)
    }

    pub fn needs_repaint(&self) -> bool {
        matches!(self, Self::Repaint | Self::Transition(_) | Self::Async(_))
    }
}

/// Three-stage keypress handling.
///
/// `keypress` handles local hotkeys, `dispatch_keypress` delegates to the
/// active child, and `after_keypress` is the fallback. Implementors override
/// whichever stages they need; `handle_keypress` should not be overridden.
pub trait Dispatch {
    fn keypress(&mut self, _key: Key) -> KeyResult {
        KeyResult::Unhandled
    }

    fn dispatch_keypress(&mut self, _key: Key) -> KeyResult {
        KeyResult::Unhandled
    }

    fn after_keypress(&mut self, _key: Key) -> KeyResult {
        KeyResult::Unhandled
    }

    /// Run the stages in order and return the first handled result unchanged.
    fn handle_keypress(&mut self, key: Key) -> KeyResult {
        let result = self.keypress(key);
        if result.is_handled() {
            return result;
        }
        let result = self.dispatch_keypress(key);
        if result.is_handled() {
            return result;
        }
        self.after_keypress(key)
    }
}
