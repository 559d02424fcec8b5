// Engine façade: wires loader → parser → catalog → view and emits change
// events for the presentation layer.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

use crate::catalog::{Catalog, CatalogChange};
use crate::config::LoaderConfig;
use crate::error::CatalogError;
use crate::events::CatalogEvent;
use crate::source::SourceLoader;
use crate::view::ChannelView;

/// Owns the catalog lifecycle for one playlist consumer.
///
/// Loads are serialized by `&mut self`: a second load cannot start through
/// the same handle before the first one's outcome has been observed.
pub struct CatalogEngine {
    loader: SourceLoader,
    catalog: Catalog,
    view: ChannelView,
    events: UnboundedSender<CatalogEvent>,
}

impl CatalogEngine {
    /// Build an engine and the receiving end of its event stream.
    pub fn new(
        config: LoaderConfig,
    ) -> Result<(Self, UnboundedReceiver<CatalogEvent>), CatalogError> {
        let loader = SourceLoader::new(&config)?;
        let (events, receiver) = mpsc::unbounded_channel();

        let engine = Self {
            loader,
            catalog: Catalog::new(),
            view: ChannelView::default(),
            events,
        };

        Ok((engine, receiver))
    }

    /// Load a playlist by location and replace the catalog with its
    /// contents.
    ///
    /// On success the displayed view is cleared (it stays empty until
    /// [`CatalogEngine::filter`] is called again) and a
    /// [`CatalogEvent::PlaylistReplaced`] is emitted. On failure the prior
    /// catalog and view survive untouched and exactly one
    /// [`CatalogEvent::LoadFailed`] carries the error message.
    pub async fn load(&mut self, location: &str) -> Result<CatalogChange, CatalogError> {
        match self.loader.load(location).await {
            Ok(bytes) => {
                let playlist = m3u::parse(&bytes);
                info!(
                    location,
                    channels = playlist.channels.len(),
                    categories = playlist.categories.len(),
                    "playlist loaded"
                );

                let change = self.catalog.replace(playlist);
                self.view.clear();
                self.emit(CatalogEvent::PlaylistReplaced {
                    channel_count: self.catalog.len(),
                    category_count: self.catalog.categories().len(),
                    change,
                });

                Ok(change)
            }
            Err(error) => {
                warn!(location, %error, "playlist load failed");
                self.emit(CatalogEvent::LoadFailed {
                    message: error.to_string(),
                });

                Err(error)
            }
        }
    }

    /// Recompute the displayed list for a category selection and search
    /// text, returning how many channels are now displayed.
    pub fn filter(&mut self, category: &str, search: &str) -> usize {
        self.view.apply(&self.catalog, category, search);
        self.view.len()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &ChannelView {
        &self.view
    }

    /// Sorted distinct category labels of the current catalog.
    pub fn categories(&self) -> &[String] {
        self.catalog.categories()
    }

    fn emit(&self, event: CatalogEvent) {
        // The consumer may have dropped the receiver; events are advisory.
        let _ = self.events.send(event);
    }
}
