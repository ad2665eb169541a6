//! Border glyph tables.
//!
//! A border has eight optional glyph slots. A side counts as present when any
//! of its edge or corner glyphs is set, and a present side always occupies
//! exactly one cell. When a side is present but its edge glyph is unset the
//! edge is drawn with blanks, so a rendered edge never depends on a missing
//! glyph.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Border {
    pub top: Option<char>,
    pub bottom: Option<char>,
    pub left: Option<char>,
    pub right: Option<char>,
    pub top_left: Option<char>,
    pub top_right: Option<char>,
    pub bottom_left: Option<char>,
    pub bottom_right: Option<char>,
}

impl Border {
    pub const NONE: Border = Border {
        top: None,
        bottom: None,
        left: None,
        right: None,
        top_left: None,
        top_right: None,
        bottom_left: None,
        bottom_right: None,
    };

    pub const LIGHT: Border = Border::full('┌', '┐', '└', '┘', '─', '│');
    pub const HEAVY: Border = Border::full('┏', '┓', '┗', '┛', '━', '┃');
    pub const DOUBLE: Border = Border::full('╔', '╗', '╚', '╝', '═', '║');
    pub const ROUNDED: Border = Border::full('╭', '╮', '╰', '╯', '─', '│');

    /// A border with every slot set: corners, then the horizontal and
    /// vertical edge glyphs.
    pub const fn full(
        top_left: char,
        top_right: char,
        bottom_left: char,
        bottom_right: char,
        horizontal: char,
        vertical: char,
    ) -> Self {
        Self {
            top: Some(horizontal),
            bottom: Some(horizontal),
            left: Some(vertical),
            right: Some(vertical),
            top_left: Some(top_left),
            top_right: Some(top_right),
            bottom_left: Some(bottom_left),
            bottom_right: Some(bottom_right),
        }
    }

    pub fn has_top(&self) -> bool {
        self.top_left.is_some() || self.top.is_some() || self.top_right.is_some()
    }

    pub fn has_bottom(&self) -> bool {
        self.bottom_left.is_some() || self.bottom.is_some() || self.bottom_right.is_some()
    }

    pub fn has_left(&self) -> bool {
        self.top_left.is_some() || self.left.is_some() || self.bottom_left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.top_right.is_some() || self.right.is_some() || self.bottom_right.is_some()
    }

    pub fn top_height(&self) -> usize {
        usize::from(self.has_top())
    }

    pub fn bottom_height(&self) -> usize {
        usize::from(self.has_bottom())
    }

    pub fn left_width(&self) -> usize {
        usize::from(self.has_left())
    }

    pub fn right_width(&self) -> usize {
        usize::from(self.has_right())
    }

    /// Top edge, `width` cells wide including corners. Empty if there is no top side.
    pub fn top_border(&self, width: usize) -> String {
        if !self.has_top() {
            return String::new();
        }
        self.horizontal_edge(
            width,
            self.top_left,
            self.top,
            self.top_right,
        )
    }

    /// Bottom edge, `width` cells wide including corners. Empty if there is no bottom side.
    pub fn bottom_border(&self, width: usize) -> String {
        if !self.has_bottom() {
            return String::new();
        }
        self.horizontal_edge(
            width,
            self.bottom_left,
            self.bottom,
            self.bottom_right,
        )
    }

    /// Left edge cell for a content or padding row.
    pub fn left_border(&self) -> String {
        Self::vertical_edge(self.has_left(), self.left)
    }

    /// Right edge cell for a content or padding row.
    pub fn right_border(&self) -> String {
        Self::vertical_edge(self.has_right(), self.right)
    }

    /// Corner columns follow the side columns, so a row is always
    /// `left_width + middle + right_width` cells wide.
    fn horizontal_edge(
        &self,
        width: usize,
        start: Option<char>,
        middle: Option<char>,
        end: Option<char>,
    ) -> String {
        let start_width = self.left_width();
        let end_width = self.right_width();
        let fill = width.saturating_sub(start_width + end_width);

        let mut edge = String::with_capacity(width * 3);
        if start_width == 1 && width > 0 {
            edge.push(start.unwrap_or(' '));
        }
        edge.extend(std::iter::repeat(middle.unwrap_or(' ')).take(fill));
        if end_width == 1 && width > start_width {
            edge.push(end.unwrap_or(' '));
        }
        edge
    }

    fn vertical_edge(present: bool, glyph: Option<char>) -> String {
        if present {
            glyph.unwrap_or(' ').to_string()
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_has_no_sides() {
        let b = Border::NONE;
        assert!(!b.has_top() && !b.has_bottom() && !b.has_left() && !b.has_right());
        assert_eq!(b.top_border(10), "");
        assert_eq!(b.left_border(), "");
        assert_eq!(b.left_width() + b.right_width(), 0);
    }

    #[test]
    fn test_light_border_edges() {
        let b = Border::LIGHT;
        assert_eq!(b.top_border(5), "┌───┐");
        assert_eq!(b.bottom_border(5), "└───┘");
        assert_eq!(b.left_border(), "│");
        assert_eq!(b.right_border(), "│");
        assert_eq!(b.top_height(), 1);
        assert_eq!(b.left_width(), 1);
    }

    #[test]
    fn test_heavy_border_chars() {
        let b = Border::HEAVY;
        assert_eq!(b.top_border(3), "┏━┓");
        assert_eq!(b.bottom_border(2), "┗┛");
    }

    #[test]
    fn test_top_only_border_spans_full_width() {
        let b = Border {
            top: Some('-'),
            ..Border::NONE
        };
        assert!(b.has_top());
        assert!(!b.has_left());
        assert_eq!(b.top_border(4), "----");
        assert_eq!(b.bottom_border(4), "");
    }

    #[test]
    fn test_corner_without_edge_glyph_uses_blank() {
        // A top-left corner makes the left side present even without a left glyph.
        let b = Border {
            top_left: Some('+'),
            ..Border::NONE
        };
        assert!(b.has_left());
        assert!(b.has_top());
        assert_eq!(b.left_border(), " ");
        assert_eq!(b.top_border(4), "+   ");
    }

    #[test]
    fn test_edge_width_is_exact() {
        for border in [Border::LIGHT, Border::DOUBLE, Border::ROUNDED] {
            for width in 2..8 {
                assert_eq!(border.top_border(width).chars().count(), width);
                assert_eq!(border.bottom_border(width).chars().count(), width);
            }
        }
    }
}
