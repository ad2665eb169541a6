//! Text Module — Style-preserving styled text.
//!
//! Responsibilities:
//! - `Fragment`: a run of text carrying one style
//! - `Line`: an ordered, non-empty sequence of fragments
//! - Word-wrap, justify, truncate and fit, all keeping per-fragment style
//!
//! Length is measured in grapheme clusters, so a combining sequence counts as
//! one cell. Escaping to terminal sequences lives in `escape`.

use std::fmt;
use std::ops::{Add, AddAssign};

use unicode_segmentation::UnicodeSegmentation;

use crate::text_utils::{grapheme_count, is_blank, split_at_grapheme};
use crate::types::{Capabilities, Color};

/// Default truncation indicator.
pub const ELLIPSIS: &str = "…";

// ============================================================================
// Style
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub capabilities: Capabilities,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            foreground: None,
            background: None,
            capabilities: Capabilities::empty(),
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with(mut self, capability: Capabilities) -> Self {
        self.capabilities |= capability;
        self
    }

    pub fn is_plain(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.capabilities.is_empty()
    }
}

// ============================================================================
// Fragment
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub style: Style,
}

impl Fragment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }

    pub fn len(&self) -> usize {
        grapheme_count(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// ============================================================================
// Line
// ============================================================================

/// A single row of styled text. Always holds at least one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    fragments: Vec<Fragment>,
}

impl Default for Line {
    fn default() -> Self {
        Self::raw("")
    }
}

impl Line {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            fragments: vec![Fragment::raw(text)],
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            fragments: vec![Fragment::new(text, style)],
        }
    }

    /// `width` spaces in a single fragment of the given style.
    pub fn blank(width: usize, style: Style) -> Self {
        Self::styled(" ".repeat(width), style)
    }

    pub fn from_fragments(fragments: Vec<Fragment>) -> Self {
        if fragments.is_empty() {
            return Self::default();
        }
        Self { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.iter().map(Fragment::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(Fragment::is_empty)
    }

    /// Join lines end to end. Fragments are copied, never shared.
    pub fn concat<'a>(lines: impl IntoIterator<Item = &'a Line>) -> Line {
        let fragments: Vec<Fragment> = lines
            .into_iter()
            .flat_map(|line| line.fragments.iter().cloned())
            .collect();
        Self::from_fragments(fragments)
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    // ── Style helpers ───────────────────────────────────────────────────

    /// Set the foreground of every fragment that has none.
    pub fn set_foreground(&mut self, color: Color) {
        for fragment in &mut self.fragments {
            fragment.style.foreground.get_or_insert(color);
        }
    }

    /// Set the background of every fragment that has none.
    pub fn set_background(&mut self, color: Color) {
        for fragment in &mut self.fragments {
            fragment.style.background.get_or_insert(color);
        }
    }

    pub fn apply_capability(&mut self, capability: Capabilities) {
        for fragment in &mut self.fragments {
            fragment.style.capabilities |= capability;
        }
    }

    // ── Sizing ──────────────────────────────────────────────────────────

    /// Exactly `length` cells: padded in the last fragment's style when
    /// short, truncated with an ellipsis when long.
    pub fn fit(&self, length: usize) -> Line {
        self.fit_with(length, ELLIPSIS, true)
    }

    pub fn fit_with(&self, length: usize, indicator: &str, expand: bool) -> Line {
        let current = self.len();
        match current.cmp(&length) {
            std::cmp::Ordering::Less => self.justify(length, expand),
            std::cmp::Ordering::Greater => self.truncate(length, indicator),
            std::cmp::Ordering::Equal => self.clone(),
        }
    }

    /// Pad a short line to `length` with spaces. With `expand` the padding
    /// joins the last fragment and takes its style; otherwise it is appended
    /// as an unstyled fragment.
    pub fn justify(&self, length: usize, expand: bool) -> Line {
        let current = self.len();
        if current >= length {
            return self.clone();
        }
        let padding = " ".repeat(length - current);
        let mut line = self.clone();
        if expand {
            if let Some(last) = line.fragments.last_mut() {
                last.text.push_str(&padding);
            }
        } else {
            line.fragments.push(Fragment::raw(padding));
        }
        line
    }

    /// Keep the prefix of the line and end it with `indicator`, so the result
    /// is exactly `length` long. The indicator takes the style of the last
    /// kept character.
    pub fn truncate(&self, length: usize, indicator: &str) -> Line {
        if self.len() <= length {
            return self.clone();
        }

        let indicator_len = grapheme_count(indicator);
        if length <= indicator_len {
            let (cut, _) = split_at_grapheme(indicator, length);
            return Line::styled(cut, self.fragments[0].style);
        }

        let mut remaining = length - indicator_len;
        let mut kept = Vec::new();
        let mut indicator_style = self.fragments[0].style;
        for fragment in &self.fragments {
            if remaining == 0 {
                break;
            }
            let (head, _) = split_at_grapheme(&fragment.text, remaining);
            if head.is_empty() {
                continue;
            }
            remaining -= grapheme_count(head);
            indicator_style = fragment.style;
            kept.push(Fragment::new(head, fragment.style));
        }
        kept.push(Fragment::new(indicator, indicator_style));
        Line::from_fragments(kept)
    }

    /// Greedy word-wrap to rows of at most `width` cells.
    ///
    /// The returned iterator is lazy and can be cloned to restart from the
    /// same point. Breaks fall on whitespace where possible, words longer
    /// than `width` are hard-broken, and whitespace is normalised to spaces.
    pub fn wrap(&self, width: usize) -> Wrap<'_> {
        let cells = self
            .fragments
            .iter()
            .enumerate()
            .flat_map(|(idx, fragment)| {
                UnicodeSegmentation::graphemes(fragment.text.as_str(), true)
                    .map(move |g| (g, idx))
            })
            .collect();
        Wrap {
            line: self,
            cells,
            width,
            pos: 0,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(&fragment.text)?;
        }
        Ok(())
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::raw(text)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line::raw(text)
    }
}

impl Add<&Line> for &Line {
    type Output = Line;

    fn add(self, rhs: &Line) -> Line {
        Line::concat([self, rhs])
    }
}

impl Add for Line {
    type Output = Line;

    fn add(mut self, rhs: Line) -> Line {
        self.fragments.extend(rhs.fragments);
        self
    }
}

impl AddAssign<&Line> for Line {
    fn add_assign(&mut self, rhs: &Line) {
        self.fragments.extend(rhs.fragments.iter().cloned());
    }
}

// ============================================================================
// Wrap iterator
// ============================================================================

#[derive(Debug, Clone)]
pub struct Wrap<'a> {
    line: &'a Line,
    /// Flattened graphemes, each tagged with the index of its fragment.
    cells: Vec<(&'a str, usize)>,
    width: usize,
    pos: usize,
}

impl Wrap<'_> {
    fn blank_at(&self, idx: usize) -> bool {
        is_blank(self.cells[idx].0)
    }

    /// Rebuild fragments for `cells[start..end]`, splitting on fragment
    /// boundaries.
    fn row(&self, start: usize, end: usize) -> Line {
        let mut fragments: Vec<Fragment> = Vec::new();
        let mut current: Option<usize> = None;
        for &(grapheme, idx) in &self.cells[start..end] {
            if current != Some(idx) {
                fragments.push(Fragment::new(String::new(), self.line.fragments[idx].style));
                current = Some(idx);
            }
            if let Some(fragment) = fragments.last_mut() {
                if is_blank(grapheme) {
                    fragment.text.push(' ');
                } else {
                    fragment.text.push_str(grapheme);
                }
            }
        }
        Line::from_fragments(fragments)
    }
}

impl Iterator for Wrap<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.width == 0 {
            return None;
        }
        let total = self.cells.len();
        while self.pos < total && self.blank_at(self.pos) {
            self.pos += 1;
        }
        if self.pos >= total {
            return None;
        }

        let start = self.pos;
        let limit = start + self.width;
        let mut end = if limit >= total {
            total
        } else if self.blank_at(limit) {
            limit
        } else {
            match (start + 1..limit).rev().find(|&i| self.blank_at(i)) {
                Some(space) => space,
                None => limit,
            }
        };
        self.pos = end;

        while end > start && self.blank_at(end - 1) {
            end -= 1;
        }
        Some(self.row(start, end))
    }
}
