//! Asset repository interface.
//!
//! The viewport core only ever needs to know how large the current item's
//! image is; callers own loading, caching, and decoding. Injecting this
//! interface (instead of reaching into a shared image registry) keeps
//! rescale logic testable with a two-line stub.

use crate::geometry::Size;

/// Read access to loaded image metadata, keyed by item index.
pub trait ImageStore {
    /// Pixel dimensions of the image for `item`, if it has been loaded.
    fn image_size(&self, item: usize) -> Option<Size>;

    /// Whether the item is ready for layout/redraw.
    fn is_loaded(&self, item: usize) -> bool {
        self.image_size(item).is_some()
    }
}

/// Trivial store over a preloaded list of image dimensions.
#[derive(Debug, Clone, Default)]
pub struct SizeListStore {
    sizes: Vec<Size>,
}

impl SizeListStore {
    pub fn new(sizes: Vec<Size>) -> Self {
        Self { sizes }
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl ImageStore for SizeListStore {
    fn image_size(&self, item: usize) -> Option<Size> {
        self.sizes.get(item).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_list_store() {
        let store = SizeListStore::new(vec![Size::new(400.0, 300.0)]);
        assert_eq!(store.image_size(0), Some(Size::new(400.0, 300.0)));
        assert_eq!(store.image_size(1), None);
        assert!(store.is_loaded(0));
        assert!(!store.is_loaded(7));
    }
}
