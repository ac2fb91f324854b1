//! Raw array views.
//!
//! [`ArrayView`] gives a pointer and an element count the same iteration
//! capability as a container, without owning or copying the elements. It
//! renders exactly like a `Vec` holding the same elements.

use crate::classify::Registered;
use crate::registry::Delimited;
use crate::render::Render;
use std::slice;

/// A non-owning, read-only view over contiguous elements.
#[derive(Debug)]
pub struct ArrayView<'a, T> {
    items: &'a [T],
}

impl<'a, T> ArrayView<'a, T> {
    /// Views an existing slice.
    pub fn new(items: &'a [T]) -> Self {
        ArrayView { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the viewed elements in order.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Clone for ArrayView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayView<'_, T> {}

impl<'a, T> IntoIterator for &ArrayView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for ArrayView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Delimited for ArrayView<'_, T> {}

impl<T: Render> Render for ArrayView<'_, T> {
    type Kind = Registered;
}

/// Wraps `len` elements starting at `ptr` for rendering.
///
/// A zero `len` yields an empty view without touching `ptr`.
///
/// # Safety
///
/// When `len` is non-zero, `ptr` must be non-null, aligned, and point to `len`
/// initialized values of `T` that stay valid and unmodified for the whole
/// lifetime `'a` of the returned view. See [`std::slice::from_raw_parts`].
///
/// # Examples
///
/// ```rust
/// use pprint::{to_string, wrap_array};
///
/// let raw = [1, 2, 4, 8, 16];
/// let view = unsafe { wrap_array(raw.as_ptr(), raw.len()) };
/// assert_eq!(to_string(&view).unwrap(), "[1, 2, 4, 8, 16]");
/// ```
pub unsafe fn wrap_array<'a, T>(ptr: *const T, len: usize) -> ArrayView<'a, T> {
    if len == 0 {
        return ArrayView { items: &[] };
    }
    // SAFETY: upheld by the caller per this function's contract.
    ArrayView {
        items: unsafe { slice::from_raw_parts(ptr, len) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_string;

    #[test]
    fn test_view_matches_vec() {
        let raw = [1, 2, 4, 8, 16];
        let view = unsafe { wrap_array(raw.as_ptr(), 5) };
        assert_eq!(to_string(&view).unwrap(), to_string(&raw.to_vec()).unwrap());
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn test_prefix_of_buffer() {
        let raw = [3, 1, 4, 1, 5, 9];
        let view = unsafe { wrap_array(raw.as_ptr(), 3) };
        assert_eq!(to_string(&view).unwrap(), "[3, 1, 4]");
    }

    #[test]
    fn test_empty_view() {
        let view: ArrayView<'_, i32> = unsafe { wrap_array(std::ptr::null(), 0) };
        assert!(view.is_empty());
        assert_eq!(to_string(&view).unwrap(), "[]");
    }

    #[test]
    fn test_nested_views() {
        let rows = [[1, 2], [3, 4]];
        let view = ArrayView::new(&rows);
        assert_eq!(to_string(&view).unwrap(), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn test_view_does_not_copy() {
        let raw = vec![10, 20];
        let view = ArrayView::new(&raw);
        assert!(std::ptr::eq(view.as_slice().as_ptr(), raw.as_ptr()));
    }

    #[test]
    fn test_iter_visits_elements_in_order() {
        let raw = [7, 8, 9];
        let view = ArrayView::new(&raw);
        let seen: Vec<i32> = view.iter().copied().collect();
        assert_eq!(seen, vec![7, 8, 9]);
    }
}
