//! Leaf widgets.

use crate::component::Widget;
use crate::dispatch::{Dispatch, KeyResult};
use crate::text::{Line, Style};
use crate::types::Key;

/// Marker drawn on the last row when more text follows below.
const MORE_BELOW: &str = " ↓ ";

/// Scrollable, word-wrapped view of a styled line.
///
/// Text shorter than the view is centred vertically. When the text
/// overflows, the last row is replaced with a right-aligned "more below"
/// marker. Up and Down scroll one wrapped row at a time; at either end they
/// are left unhandled so the enclosing layout can move focus instead.
#[derive(Debug, Clone)]
pub struct TextView {
    text: Line,
    offset: usize,
    /// Wrapped row count and view height from the last render.
    total_rows: usize,
    view_height: usize,
}

impl TextView {
    pub fn new(text: impl Into<Line>) -> Self {
        Self {
            text: text.into(),
            offset: 0,
            total_rows: 0,
            view_height: 0,
        }
    }

    pub fn text(&self) -> &Line {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<Line>) {
        self.text = text.into();
        self.offset = 0;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn has_more_below(&self) -> bool {
        self.total_rows.saturating_sub(self.offset) > self.view_height
    }

    fn scroll_up(&mut self) -> KeyResult {
        if self.offset == 0 {
            return KeyResult::Unhandled;
        }
        self.offset -= 1;
        KeyResult::Repaint
    }

    fn scroll_down(&mut self) -> KeyResult {
        if !self.has_more_below() {
            return KeyResult::Unhandled;
        }
        self.offset += 1;
        KeyResult::Repaint
    }
}

impl Dispatch for TextView {
    fn keypress(&mut self, key: Key) -> KeyResult {
        match key {
            Key::Up => self.scroll_up(),
            Key::Down => self.scroll_down(),
            _ => KeyResult::Unhandled,
        }
    }
}

impl Widget for TextView {
    fn name(&self) -> &str {
        "TextView"
    }

    fn content(&mut self, width: usize, height: usize) -> Vec<Line> {
        let wrapped: Vec<Line> = self.text.wrap(width).collect();
        self.total_rows = wrapped.len();
        self.view_height = height;
        self.offset = self.offset.min(self.total_rows.saturating_sub(1));

        let blank = Line::blank(width, Style::default());
        let mut visible: Vec<Line> = wrapped
            .into_iter()
            .skip(self.offset)
            .map(|row| row.justify(width, true))
            .collect();

        if visible.len() > height {
            visible.truncate(height.saturating_sub(1));
            if height > 0 {
                let marker = format!("{}{}", " ".repeat(width.saturating_sub(3)), MORE_BELOW);
                visible.push(Line::raw(marker).fit(width));
            }
            return visible;
        }

        let spare = height - visible.len();
        let above = spare / 2;
        let mut rows = Vec::with_capacity(height);
        rows.extend(std::iter::repeat(blank.clone()).take(above));
        rows.extend(visible);
        rows.extend(std::iter::repeat(blank).take(spare - above));
        rows
    }
}
