//! Media library state
//!
//! Ordered list of media URIs the gallery screens render. Not persisted.

use parking_lot::RwLock;

/// In-memory list of saved or picked media URIs
#[derive(Debug, Default)]
pub struct MediaLibrary {
    items: RwLock<Vec<String>>,
}

impl MediaLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one URI
    pub fn add_media(&self, uri: impl Into<String>) {
        self.items.write().push(uri.into());
    }

    /// Replace the whole list
    pub fn set_media(&self, uris: Vec<String>) {
        *self.items.write() = uris;
    }

    /// Current URIs in insertion order
    pub fn media(&self) -> Vec<String> {
        self.items.read().clone()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}
