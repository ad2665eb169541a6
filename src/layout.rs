//! Layout Module — Weighted partition and composite layouts.
//!
//! Responsibilities:
//! - `weighted`: split an extent between children in proportion to weights
//! - `Layout`: horizontal/vertical composite owning its children
//! - Focus tracking and focus styling of the children
//! - Arrow-key focus movement along the layout axis

use crate::border::Border;
use crate::component::Component;
use crate::dispatch::{Dispatch, KeyResult};
use crate::error::Result;
use crate::index::FocusList;
use crate::sizing::Sizing;
use crate::text::{Line, Style};
use crate::types::Key;

// ============================================================================
// Weighted partition
// ============================================================================

/// Split `amount` into `weights.len()` extents proportional to `weights`.
///
/// The amount is first cut into `sum(weights)` unit banks, with the
/// remainder handed out one cell at a time to the leading banks. Weights are
/// then served smallest first, each drawing evenly spaced banks from the
/// pool, so rounding bonuses spread across tied weights. The extents always
/// sum to `amount` and come back in the caller's order.
pub fn weighted(amount: usize, weights: &[u32]) -> Vec<usize> {
    let count = weights.len();
    let bank_count: usize = weights.iter().map(|&w| w as usize).sum();
    if count == 0 {
        return Vec::new();
    }
    if bank_count == 0 {
        return vec![0; count];
    }

    let base = amount / bank_count;
    let remainder = amount % bank_count;
    let mut banks: Vec<usize> = (0..bank_count)
        .map(|i| base + usize::from(i < remainder))
        .collect();

    let mut order: Vec<usize> = (0..count).collect();
    order.sort_by_key(|&idx| weights[idx]);

    let mut extents = vec![0; count];
    for (rank, &idx) in order.iter().enumerate() {
        let weight = weights[idx] as usize;
        let stride = count - rank;
        // Highest position first so earlier removals do not shift later ones.
        for k in (0..weight).rev() {
            let pos = k * stride;
            if pos < banks.len() {
                extents[idx] += banks.remove(pos);
            }
        }
    }
    extents
}

// ============================================================================
// Layout
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A composite that lays its children out along one axis.
pub struct Layout {
    axis: Axis,
    children: FocusList<Component>,
    weights: Vec<u32>,
    debug: bool,
    focus_border: Border,
}

impl Layout {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            children: FocusList::new(),
            weights: Vec::new(),
            debug: false,
            focus_border: Border::HEAVY,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Builder form of [`Layout::append`].
    pub fn with_child(mut self, child: Component, weight: u32) -> Self {
        self.append(child, weight);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_focus_border(mut self, border: Border) -> Self {
        self.focus_border = border;
        self
    }

    pub fn name(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "HorizontalLayout",
            Axis::Vertical => "VerticalLayout",
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn append(&mut self, child: Component, weight: u32) {
        self.children.push(child);
        self.weights.push(weight.max(1));
        self.repack();
    }

    /// Pad missing weights with 1 and drop surplus ones so every child has
    /// exactly one weight.
    pub fn repack(&mut self) {
        self.weights.resize(self.children.len(), 1);
    }

    pub fn set_weight(&mut self, index: usize, weight: u32) {
        if let Some(slot) = self.weights.get_mut(index) {
            *slot = weight.max(1);
        }
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.children.index()
    }

    pub fn set_focus(&mut self, index: usize) {
        self.children.set_index(index);
    }

    pub fn child(&self, index: usize) -> Option<&Component> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Component> {
        self.children.get_mut(index)
    }

    pub fn focused(&self) -> Option<&Component> {
        self.children.value()
    }

    pub fn focused_mut(&mut self) -> Option<&mut Component> {
        self.children.value_mut()
    }

    /// Render the children into exactly `height` rows of `width` cells.
    pub fn content(&mut self, width: usize, height: usize) -> Result<Vec<Line>> {
        let mut header = None;
        let mut body_height = height;
        if self.debug && height > 0 {
            body_height -= 1;
            header = Some(self.debug_header(width, height));
        }

        let mut rows = Vec::with_capacity(height);
        rows.extend(header);
        if self.children.is_empty() {
            rows.extend(std::iter::repeat(Line::blank(width, Style::default())).take(body_height));
            return Ok(rows);
        }

        self.apply_focus_style();
        let along = match self.axis {
            Axis::Horizontal => width,
            Axis::Vertical => body_height,
        };
        let extents = weighted(along, &self.weights);

        match self.axis {
            Axis::Horizontal => {
                let mut columns = Vec::with_capacity(extents.len());
                for (child, &extent) in self.children.iter_mut().zip(&extents) {
                    columns.push(child.render(extent, body_height)?);
                }
                for row in 0..body_height {
                    rows.push(Line::concat(columns.iter().map(|column| &column[row])));
                }
            }
            Axis::Vertical => {
                for (child, &extent) in self.children.iter_mut().zip(&extents) {
                    rows.extend(child.render(width, extent)?);
                }
            }
        }
        Ok(rows)
    }

    fn apply_focus_style(&mut self) {
        let focus = self.children.index();
        let focus_border = self.focus_border;
        for (idx, child) in self.children.iter_mut().enumerate() {
            if Some(idx) == focus {
                child.style.border = focus_border;
                child.style.margin = Sizing::zero();
            } else {
                child.style.border = Border::NONE;
                child.style.margin = Sizing::uniform(1);
            }
        }
    }

    fn debug_header(&self, width: usize, height: usize) -> Line {
        let along = match self.axis {
            Axis::Horizontal => ("Widths", width),
            Axis::Vertical => ("Heights", height - 1),
        };
        let extents = if self.children.is_empty() {
            Vec::new()
        } else {
            weighted(along.1, &self.weights)
        };
        Line::raw(format!(
            "{width}x{height} Weights: {:?}, {}: {:?}",
            self.weights, along.0, extents
        ))
        .fit(width)
    }
}

impl Dispatch for Layout {
    fn dispatch_keypress(&mut self, key: Key) -> KeyResult {
        match self.children.value_mut() {
            Some(child) => child.handle_keypress(key),
            None => KeyResult::Unhandled,
        }
    }

    /// Arrow keys along the axis move focus one step, clamped at the ends.
    fn after_keypress(&mut self, key: Key) -> KeyResult {
        match (self.axis, key) {
            (Axis::Horizontal, Key::Left) | (Axis::Vertical, Key::Up) => {
                self.children.decr(1);
                KeyResult::Repaint
            }
            (Axis::Horizontal, Key::Right) | (Axis::Vertical, Key::Down) => {
                self.children.incr(1);
                KeyResult::Repaint
            }
            _ => KeyResult::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Widget;

    struct Fill(char);

    impl Dispatch for Fill {}

    impl Widget for Fill {
        fn name(&self) -> &str {
            "Fill"
        }

        fn content(&mut self, width: usize, height: usize) -> Vec<Line> {
            vec![Line::raw(self.0.to_string().repeat(width)); height]
        }
    }

    /// Consumes every key with `Continue`.
    struct Greedy;

    impl Dispatch for Greedy {
        fn keypress(&mut self, _key: Key) -> KeyResult {
            KeyResult::Continue
        }
    }

    impl Widget for Greedy {
        fn name(&self) -> &str {
            "Greedy"
        }

        fn content(&mut self, width: usize, height: usize) -> Vec<Line> {
            vec![Line::blank(width, Style::default()); height]
        }
    }

    #[test]
    fn test_weighted_exact_examples() {
        assert_eq!(weighted(20, &[1, 3]), vec![5, 15]);
        assert_eq!(weighted(80, &[1, 3]), vec![20, 60]);
        assert_eq!(weighted(81, &[1, 3]), vec![21, 60]);
        assert_eq!(weighted(82, &[1, 3]), vec![21, 61]);
    }

    #[test]
    fn test_weighted_conserves_amount() {
        let cases: [&[u32]; 6] = [&[1], &[1, 1], &[1, 2, 3], &[3, 1, 2], &[5, 5, 1, 7], &[2, 2, 2, 2, 2]];
        for weights in cases {
            for amount in 0..120 {
                let parts = weighted(amount, weights);
                assert_eq!(parts.len(), weights.len());
                assert_eq!(parts.iter().sum::<usize>(), amount, "{amount} {weights:?}");
            }
        }
    }

    #[test]
    fn test_weighted_spreads_remainder_over_ties() {
        assert_eq!(weighted(10, &[1, 1, 1]), vec![4, 3, 3]);
        assert_eq!(weighted(11, &[1, 1, 1]), vec![4, 4, 3]);
        assert_eq!(weighted(7, &[3, 1]), vec![5, 2]);
    }

    #[test]
    fn test_weighted_degenerate() {
        assert!(weighted(10, &[]).is_empty());
        assert_eq!(weighted(10, &[0, 0]), vec![0, 0]);
    }

    #[test]
    fn test_append_and_repack_keep_weights_aligned() {
        let mut layout = Layout::horizontal();
        layout.append(Component::leaf(Fill('a')), 0);
        layout.append(Component::leaf(Fill('b')), 4);
        assert_eq!(layout.weights(), &[1, 4]);

        layout.weights.pop();
        layout.repack();
        assert_eq!(layout.weights(), &[1, 1]);

        layout.set_weight(1, 0);
        assert_eq!(layout.weights(), &[1, 1]);
        layout.set_weight(0, 3);
        assert_eq!(layout.weights(), &[3, 1]);
    }

    #[test]
    fn test_horizontal_content_widths() {
        let mut layout = Layout::horizontal()
            .with_child(Component::leaf(Fill('a')), 1)
            .with_child(Component::leaf(Fill('b')), 3);
        let rows = layout.content(40, 5).unwrap();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.len() == 40));
        // Focused child is framed; the other one starts with a margin row.
        assert_eq!(rows[0].to_string(), format!("┏{}┓{}", "━".repeat(8), " ".repeat(30)));
        assert_eq!(rows[1].to_string(), format!("┃{}┃ {} ", "a".repeat(8), "b".repeat(28)));
    }

    #[test]
    fn test_vertical_content_heights() {
        let mut layout = Layout::vertical()
            .with_child(Component::leaf(Fill('a')), 1)
            .with_child(Component::leaf(Fill('b')), 1);
        layout.set_focus(1);
        let rows = layout.content(6, 8).unwrap();
        let plain: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            plain,
            vec!["      ", " aaaa ", " aaaa ", "      ", "┏━━━━┓", "┃bbbb┃", "┃bbbb┃", "┗━━━━┛"]
        );
    }

    #[test]
    fn test_empty_layout_is_blank() {
        let mut layout = Layout::vertical();
        let rows = layout.content(4, 2).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.to_string() == "    "));
    }

    #[test]
    fn test_debug_header() {
        let mut layout = Layout::horizontal()
            .with_child(Component::leaf(Fill('a')), 1)
            .with_child(Component::leaf(Fill('b')), 3)
            .with_debug(true);
        let rows = layout.content(80, 4).unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows[0]
            .to_string()
            .starts_with("80x4 Weights: [1, 3], Widths: [20, 60]"));
        assert!(rows.iter().all(|r| r.len() == 80));
    }

    #[test]
    fn test_arrow_keys_move_focus_along_axis() {
        let mut layout = Layout::horizontal()
            .with_child(Component::leaf(Fill('a')), 1)
            .with_child(Component::leaf(Fill('b')), 1);
        assert!(matches!(layout.handle_keypress(Key::Right), KeyResult::Repaint));
        assert_eq!(layout.focus_index(), Some(1));
        // Clamped at the last child, still a repaint.
        assert!(matches!(layout.handle_keypress(Key::Right), KeyResult::Repaint));
        assert_eq!(layout.focus_index(), Some(1));
        assert!(matches!(layout.handle_keypress(Key::Down), KeyResult::Unhandled));
        assert!(matches!(layout.handle_keypress(Key::Left), KeyResult::Repaint));
        assert_eq!(layout.focus_index(), Some(0));
    }

    #[test]
    fn test_consuming_child_blocks_fallback() {
        let mut layout = Layout::horizontal()
            .with_child(Component::leaf(Greedy), 1)
            .with_child(Component::leaf(Fill('b')), 1);
        assert!(matches!(layout.handle_keypress(Key::Right), KeyResult::Continue));
        assert_eq!(layout.focus_index(), Some(0));
    }
}
