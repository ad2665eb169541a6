//! Four-sided box-model offsets, used for both margin and padding.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sizing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Sizing {
    /// Same argument order as CSS shorthand: top, right, bottom, left.
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub const fn uniform(size: usize) -> Self {
        Self::new(size, size, size, size)
    }

    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn set_vertical(&mut self, size: usize) {
        self.top = size;
        self.bottom = size;
    }

    pub fn set_horizontal(&mut self, size: usize) {
        self.left = size;
        self.right = size;
    }

    pub fn horizontal_total(&self) -> usize {
        self.left + self.right
    }

    pub fn vertical_total(&self) -> usize {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizing_constructors() {
        assert_eq!(Sizing::default(), Sizing::zero());
        assert_eq!(Sizing::uniform(2), Sizing::new(2, 2, 2, 2));
        assert_eq!(Sizing::symmetric(1, 3), Sizing::new(1, 3, 1, 3));
    }

    #[test]
    fn test_sizing_setters_and_totals() {
        let mut s = Sizing::new(1, 2, 3, 4);
        assert_eq!(s.horizontal_total(), 6);
        assert_eq!(s.vertical_total(), 4);

        s.set_vertical(5);
        s.set_horizontal(0);
        assert_eq!(s, Sizing::new(5, 0, 5, 0));
    }
}
