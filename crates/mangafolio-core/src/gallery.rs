//! Gallery cursor: a bounded, wrapping index into a project's images.

use crate::content::image_caption;

/// Current position in a gallery of `len` images.
///
/// The index is always `0` for empty and single-image galleries, and in
/// `0..len` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryCursor {
    len: usize,
    index: usize,
}

impl GalleryCursor {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether previous/next controls are worth showing.
    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.can_navigate() {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.can_navigate() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump straight to image `i`. Out-of-range requests are ignored.
    pub fn jump_to(&mut self, i: usize) -> bool {
        if i < self.len {
            self.index = i;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Point the cursor at a different gallery, starting from the first image.
    pub fn retarget(&mut self, len: usize) {
        self.len = len;
        self.reset();
    }

    /// The current image from `gallery`, if any.
    pub fn current<'a>(&self, gallery: &'a [String]) -> Option<&'a str> {
        gallery.get(self.index).map(String::as_str)
    }

    /// One-based position and total, e.g. `(2, 3)` for "Image 2 of 3".
    pub fn position(&self) -> Option<(usize, usize)> {
        (!self.is_empty()).then(|| (self.index + 1, self.len))
    }

    /// Position caption for the current mode, `None` for an empty gallery.
    pub fn label(&self, hacker_mode: bool) -> Option<String> {
        self.position()
            .map(|(pos, total)| image_caption(pos, total, hacker_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single_are_noops() {
        for len in [0, 1] {
            let mut cursor = GalleryCursor::new(len);
            cursor.next();
            assert_eq!(cursor.index(), 0);
            cursor.prev();
            assert_eq!(cursor.index(), 0);
        }
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut cursor = GalleryCursor::new(3);
        cursor.prev();
        assert_eq!(cursor.index(), 2);
        cursor.next();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_three_nexts_return_to_start() {
        let mut cursor = GalleryCursor::new(3);
        for _ in 0..3 {
            cursor.next();
        }
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_jump_to_ignores_out_of_range() {
        let mut cursor = GalleryCursor::new(3);
        assert!(cursor.jump_to(2));
        assert_eq!(cursor.index(), 2);
        assert!(!cursor.jump_to(3));
        assert_eq!(cursor.index(), 2);

        let mut empty = GalleryCursor::new(0);
        assert!(!empty.jump_to(0));
    }

    #[test]
    fn test_retarget_resets_index() {
        let mut cursor = GalleryCursor::new(5);
        cursor.jump_to(4);
        cursor.retarget(2);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.len(), 2);
    }

    #[test]
    fn test_position_and_current() {
        let gallery = vec!["a.png".to_string(), "b.png".to_string()];
        let mut cursor = GalleryCursor::new(gallery.len());
        cursor.next();
        assert_eq!(cursor.current(&gallery), Some("b.png"));
        assert_eq!(cursor.position(), Some((2, 2)));
        assert_eq!(GalleryCursor::new(0).position(), None);
        assert_eq!(cursor.label(false).as_deref(), Some("Image 2 of 2"));
        assert_eq!(GalleryCursor::new(0).label(true), None);
    }
}
