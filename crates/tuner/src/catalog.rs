use m3u::{Channel, Playlist};

/// What a [`Catalog::replace`] did, for forwarding to observers.
///
/// Returned rather than emitted so the notification contract stays a
/// testable value; a replace always reports both notifications exactly
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogChange {
    pub content_changed: bool,
    pub categories_changed: bool,
}

/// The full, authoritative channel collection of the currently loaded
/// playlist, plus its derived category set.
///
/// Created empty and only ever fully replaced; a failed load must skip
/// [`Catalog::replace`] entirely so prior contents survive.
#[derive(Debug, Default)]
pub struct Catalog {
    channels: Vec<Channel>,
    categories: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically install a freshly parsed playlist, discarding the
    /// previous channel sequence and category set.
    pub fn replace(&mut self, playlist: Playlist) -> CatalogChange {
        self.channels = playlist.channels;
        self.categories = playlist.categories;

        CatalogChange {
            content_changed: true,
            categories_changed: true,
        }
    }

    /// Channels in parse order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Distinct category labels, sorted ascending byte-wise.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
