//! Focus tracking over an owned list.

/// A list together with the position of its focused item.
///
/// The index is `None` exactly when the list is empty; otherwise it always
/// points at a valid item. Moving focus clamps at both ends.
#[derive(Debug, Clone)]
pub struct FocusList<T> {
    items: Vec<T>,
    index: Option<usize>,
}

impl<T> Default for FocusList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FocusList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: None,
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        let index = if items.is_empty() { None } else { Some(0) };
        Self { items, index }
    }

    /// Append an item. The first item pushed receives focus.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        if self.index.is_none() {
            self.index = Some(0);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Focus a specific position, clamped to the last item.
    pub fn set_index(&mut self, index: usize) {
        if !self.items.is_empty() {
            self.index = Some(index.min(self.items.len() - 1));
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.index.and_then(|i| self.items.get(i))
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self.index {
            Some(i) => self.items.get_mut(i),
            None => None,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Move focus forward by `n`, stopping at the last item. Returns whether
    /// the index changed.
    pub fn incr(&mut self, n: usize) -> bool {
        let Some(current) = self.index else {
            return false;
        };
        let next = current.saturating_add(n).min(self.items.len() - 1);
        self.index = Some(next);
        next != current
    }

    /// Move focus back by `n`, stopping at the first item. Returns whether
    /// the index changed.
    pub fn decr(&mut self, n: usize) -> bool {
        let Some(current) = self.index else {
            return false;
        };
        let next = current.saturating_sub(n);
        self.index = Some(next);
        next != current
    }
}
