//! Component Module — Box-model rendering.
//!
//! Responsibilities:
//! - `BoxStyle`: margin, border, padding and the fill style around content
//! - `Component`: one node of the UI tree, either a `Layout` or a leaf `Widget`
//! - Enforce that content exactly fills the inner rectangle
//!
//! Rows are composed outside-in: margin, border, padding, content, padding,
//! border, margin. Every rendered row is exactly `width` cells long.

use tracing::{debug, warn};

use crate::border::Border;
use crate::dispatch::{Dispatch, KeyResult};
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::sizing::Sizing;
use crate::text::{Fragment, Line, Style};
use crate::types::{Capabilities, Color, Key};

// ============================================================================
// Widget trait
// ============================================================================

/// A leaf of the component tree.
///
/// `content` must return exactly `height` lines of exactly `width` cells.
pub trait Widget: Dispatch {
    /// Type name used in contract-violation errors.
    fn name(&self) -> &str;

    fn content(&mut self, width: usize, height: usize) -> Vec<Line>;
}

// ============================================================================
// BoxStyle
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    pub border: Border,
    pub padding: Sizing,
    pub margin: Sizing,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub capabilities: Capabilities,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            border: Border::NONE,
            padding: Sizing::zero(),
            margin: Sizing::zero(),
            foreground: None,
            background: None,
            capabilities: Capabilities::empty(),
        }
    }
}

impl BoxStyle {
    /// Style used for margin, border and padding cells.
    pub fn fill(&self) -> Style {
        Style {
            foreground: self.foreground,
            background: self.background,
            capabilities: self.capabilities,
        }
    }

    pub fn reserved_width(&self) -> usize {
        self.margin.horizontal_total()
            + self.border.left_width()
            + self.border.right_width()
            + self.padding.horizontal_total()
    }

    pub fn reserved_height(&self) -> usize {
        self.margin.vertical_total()
            + self.border.top_height()
            + self.border.bottom_height()
            + self.padding.vertical_total()
    }
}

// ============================================================================
// Component
// ============================================================================

pub enum ComponentKind {
    Layout(Layout),
    Leaf(Box<dyn Widget>),
}

pub struct Component {
    pub style: BoxStyle,
    kind: ComponentKind,
}

impl Component {
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            style: BoxStyle::default(),
            kind,
        }
    }

    pub fn leaf(widget: impl Widget + 'static) -> Self {
        Self::new(ComponentKind::Leaf(Box::new(widget)))
    }

    pub fn layout(layout: Layout) -> Self {
        Self::new(ComponentKind::Layout(layout))
    }

    // ── Builders ────────────────────────────────────────────────────────

    pub fn with_border(mut self, border: Border) -> Self {
        self.style.border = border;
        self
    }

    pub fn with_padding(mut self, padding: Sizing) -> Self {
        self.style.padding = padding;
        self
    }

    pub fn with_margin(mut self, margin: Sizing) -> Self {
        self.style.margin = margin;
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.style.foreground = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.style.capabilities |= capabilities;
        self
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    pub fn as_layout(&self) -> Option<&Layout> {
        match &self.kind {
            ComponentKind::Layout(layout) => Some(layout),
            ComponentKind::Leaf(_) => None,
        }
    }

    pub fn as_layout_mut(&mut self) -> Option<&mut Layout> {
        match &mut self.kind {
            ComponentKind::Layout(layout) => Some(layout),
            ComponentKind::Leaf(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            ComponentKind::Layout(layout) => layout.name(),
            ComponentKind::Leaf(widget) => widget.name(),
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    /// Render to exactly `height` lines of exactly `width` cells.
    ///
    /// Fails with [`Error::InvalidContent`] if the content (or any nested
    /// component's content) does not fill its inner rectangle.
    pub fn render(&mut self, width: usize, height: usize) -> Result<Vec<Line>> {
        let style = self.style;
        let fill = style.fill();
        let reserved_width = style.reserved_width();
        let reserved_height = style.reserved_height();

        if width < reserved_width || height < reserved_height {
            debug!(
                component = self.name(),
                width, height, reserved_width, reserved_height, "too small to render, drawing blank"
            );
            return Ok(vec![Line::blank(width, fill); height]);
        }

        let inner_width = width - reserved_width;
        let inner_height = height - reserved_height;
        let content = match &mut self.kind {
            ComponentKind::Layout(layout) => layout.content(inner_width, inner_height)?,
            ComponentKind::Leaf(widget) => widget.content(inner_width, inner_height),
        };
        self.validate(&content, inner_width, inner_height)?;

        let Sizing {
            top: margin_top,
            right: margin_right,
            bottom: margin_bottom,
            left: margin_left,
        } = style.margin;
        let border = style.border;
        let padding = style.padding;

        let prefix = format!(
            "{}{}{}",
            " ".repeat(margin_left),
            border.left_border(),
            " ".repeat(padding.left)
        );
        let suffix = format!(
            "{}{}{}",
            " ".repeat(padding.right),
            border.right_border(),
            " ".repeat(margin_right)
        );
        let border_width = width - margin_left - margin_right;

        let mut rows = Vec::with_capacity(height);
        rows.extend(std::iter::repeat(Line::blank(width, fill)).take(margin_top));
        if border.has_top() {
            rows.push(Self::edge_row(&border.top_border(border_width), margin_left, margin_right, fill));
        }
        let padding_row = Self::surround(&prefix, Line::blank(inner_width, fill), &suffix, fill);
        rows.extend(std::iter::repeat(padding_row.clone()).take(padding.top));

        for mut line in content {
            if let Some(fg) = style.foreground {
                line.set_foreground(fg);
            }
            if let Some(bg) = style.background {
                line.set_background(bg);
            }
            rows.push(Self::surround(&prefix, line, &suffix, fill));
        }

        rows.extend(std::iter::repeat(padding_row).take(padding.bottom));
        if border.has_bottom() {
            rows.push(Self::edge_row(
                &border.bottom_border(border_width),
                margin_left,
                margin_right,
                fill,
            ));
        }
        rows.extend(std::iter::repeat(Line::blank(width, fill)).take(margin_bottom));

        Ok(rows)
    }

    fn validate(&self, content: &[Line], width: usize, height: usize) -> Result<()> {
        let malformed_lines: Vec<(usize, usize)> = content
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx, line.len()))
            .filter(|&(_, len)| len != width)
            .collect();
        if content.len() == height && malformed_lines.is_empty() {
            return Ok(());
        }

        warn!(
            component = self.name(),
            expected_width = width,
            expected_height = height,
            actual_height = content.len(),
            malformed = malformed_lines.len(),
            "content does not fill its box"
        );
        Err(Error::InvalidContent {
            component: self.name().to_string(),
            expected_width: width,
            expected_height: height,
            actual_height: content.len(),
            malformed_lines,
        })
    }

    fn surround(prefix: &str, middle: Line, suffix: &str, fill: Style) -> Line {
        let mut row = if prefix.is_empty() {
            middle
        } else {
            Line::styled(prefix, fill) + middle
        };
        if !suffix.is_empty() {
            row.push(Fragment::new(suffix, fill));
        }
        row
    }

    fn edge_row(edge: &str, margin_left: usize, margin_right: usize, fill: Style) -> Line {
        Line::styled(
            format!("{}{}{}", " ".repeat(margin_left), edge, " ".repeat(margin_right)),
            fill,
        )
    }
}

impl Dispatch for Component {
    fn dispatch_keypress(&mut self, key: Key) -> KeyResult {
        match &mut self.kind {
            ComponentKind::Layout(layout) => layout.handle_keypress(key),
            ComponentKind::Leaf(widget) => widget.handle_keypress(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fills its box with a single repeated character, or misbehaves on request.
    struct Filler {
        ch: char,
        extra_rows: usize,
        short_row: Option<usize>,
    }

    impl Filler {
        fn new(ch: char) -> Self {
            Self {
                ch,
                extra_rows: 0,
                short_row: None,
            }
        }
    }

    impl Dispatch for Filler {}

    impl Widget for Filler {
        fn name(&self) -> &str {
            "Filler"
        }

        fn content(&mut self, width: usize, height: usize) -> Vec<Line> {
            (0..height + self.extra_rows)
                .map(|row| {
                    let w = if self.short_row == Some(row) { width.saturating_sub(1) } else { width };
                    Line::raw(self.ch.to_string().repeat(w))
                })
                .collect()
        }
    }

    fn plain(rows: &[Line]) -> Vec<String> {
        rows.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_bare_component_is_its_content() {
        let mut c = Component::leaf(Filler::new('x'));
        let rows = c.render(3, 2).unwrap();
        assert_eq!(plain(&rows), vec!["xxx", "xxx"]);
    }

    #[test]
    fn test_box_model_order() {
        let mut c = Component::leaf(Filler::new('x'))
            .with_border(Border::LIGHT)
            .with_padding(Sizing::new(0, 1, 0, 1))
            .with_margin(Sizing::new(1, 0, 0, 1));
        let rows = c.render(6, 4).unwrap();
        assert_eq!(
            plain(&rows),
            vec!["      ", " ┌───┐", " │ x │", " └───┘"]
        );
    }

    #[test]
    fn test_width_invariant_holds_for_many_sizes() {
        let mut c = Component::leaf(Filler::new('x'))
            .with_border(Border::DOUBLE)
            .with_padding(Sizing::uniform(1))
            .with_margin(Sizing::symmetric(1, 2));
        for width in 0..20 {
            for height in 0..10 {
                let rows = c.render(width, height).unwrap();
                assert_eq!(rows.len(), height);
                assert!(rows.iter().all(|r| r.len() == width), "{width}x{height}");
            }
        }
    }

    #[test]
    fn test_too_small_renders_blank_block() {
        let mut c = Component::leaf(Filler::new('x')).with_border(Border::HEAVY);
        let rows = c.render(1, 1).unwrap();
        assert_eq!(plain(&rows), vec![" "]);
    }

    #[test]
    fn test_wrong_height_is_rejected() {
        let mut filler = Filler::new('x');
        filler.extra_rows = 1;
        let mut c = Component::leaf(filler);
        match c.render(4, 2) {
            Err(Error::InvalidContent {
                component,
                expected_height,
                actual_height,
                ..
            }) => {
                assert_eq!(component, "Filler");
                assert_eq!(expected_height, 2);
                assert_eq!(actual_height, 3);
            }
            other => panic!("expected InvalidContent, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_wrong_width_reports_malformed_lines() {
        let mut filler = Filler::new('x');
        filler.short_row = Some(1);
        let mut c = Component::leaf(filler).with_border(Border::LIGHT);
        match c.render(6, 5) {
            Err(Error::InvalidContent {
                expected_width,
                malformed_lines,
                ..
            }) => {
                assert_eq!(expected_width, 4);
                assert_eq!(malformed_lines, vec![(1, 3)]);
            }
            other => panic!("expected InvalidContent, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_fill_style_applies_to_frame_and_content() {
        let mut c = Component::leaf(Filler::new('x'))
            .with_border(Border::LIGHT)
            .with_foreground(Color::Magenta);
        let rows = c.render(3, 3).unwrap();
        assert!(rows
            .iter()
            .flat_map(|r| r.fragments())
            .all(|f| f.style.foreground == Some(Color::Magenta)));
    }

    #[test]
    fn test_reserved_extents() {
        let style = BoxStyle {
            border: Border::LIGHT,
            padding: Sizing::uniform(1),
            margin: Sizing::new(1, 2, 3, 4),
            ..BoxStyle::default()
        };
        assert_eq!(style.reserved_width(), 2 + 2 + 6);
        assert_eq!(style.reserved_height(), 2 + 2 + 4);
    }
}
