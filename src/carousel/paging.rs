//! Display order and index mapping.
//!
//! Items are shown in the reverse of the order they were supplied, so swiping
//! left/right on a touch device moves through them in the natural direction.

/// Map an index between logical and display order.
///
/// Computes `len - index - 1` clamped to `[0, len - 1]`. On `[0, len - 1]` the
/// mapping is its own inverse.
pub fn reverse_index(index: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len as isize - 1;
    last.saturating_sub(index).clamp(0, last) as usize
}

/// A reversed copy of the caller's items.
///
/// The caller's slice is never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayOrder<T> {
    items: Vec<T>,
}

impl<T: Clone> DisplayOrder<T> {
    pub fn from_logical(items: &[T]) -> Self {
        Self {
            items: items.iter().rev().cloned().collect(),
        }
    }
}

impl<T> DisplayOrder<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, display_index: usize) -> Option<&T> {
        self.items.get(display_index)
    }

    /// Clamp a requested display index into range. Returns 0 for an empty sequence.
    pub fn clamp(&self, requested: isize) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        requested.clamp(0, self.items.len() as isize - 1) as usize
    }

    pub fn to_logical(&self, display_index: usize) -> usize {
        reverse_index(display_index as isize, self.items.len())
    }

    pub fn to_display(&self, logical_index: isize) -> usize {
        reverse_index(logical_index, self.items.len())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}
