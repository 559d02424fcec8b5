use m3u::Channel;

use crate::catalog::Catalog;

/// The displayed subsequence of the catalog.
///
/// Derived state only: recomputed by [`ChannelView::apply`], cleared on
/// every catalog replacement, and fully replaced on each recomputation.
/// Consumers address entries by index.
#[derive(Debug, Default)]
pub struct ChannelView {
    displayed: Vec<Channel>,
}

impl ChannelView {
    /// Recompute the displayed list.
    ///
    /// A channel is included when its category equals `category` and, for a
    /// non-empty `search`, its name contains the text case-insensitively.
    /// There is no show-all mode: an empty or unknown category yields an
    /// empty list.
    pub fn apply(&mut self, catalog: &Catalog, category: &str, search: &str) {
        let needle = search.to_lowercase();

        self.displayed = catalog
            .channels()
            .iter()
            .filter(|channel| channel.category == category)
            .filter(|channel| needle.is_empty() || channel.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
    }

    pub fn clear(&mut self) {
        self.displayed.clear();
    }

    /// Displayed channels in catalog order.
    pub fn channels(&self) -> &[Channel] {
        &self.displayed
    }

    pub fn get(&self, index: usize) -> Option<&Channel> {
        self.displayed.get(index)
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.get(index).map(|channel| channel.name.as_str())
    }

    pub fn location_at(&self, index: usize) -> Option<&str> {
        self.get(index).map(|channel| channel.location.as_str())
    }

    pub fn len(&self) -> usize {
        self.displayed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.replace(m3u::parse(
            b"#EXTINF:-1 group-title=\"News\",BBC World\nhttp://1\n\
#EXTINF:-1 group-title=\"Sports\",ESPN\nhttp://2\n\
#EXTINF:-1 group-title=\"News\",CNN\nhttp://3\n\
#EXTINF:-1 group-title=\"News\",bbc two\nhttp://4\n",
        ));
        catalog
    }

    #[test]
    fn category_only_filter_preserves_catalog_order() {
        let catalog = catalog();
        let mut view = ChannelView::default();

        view.apply(&catalog, "News", "");

        let names: Vec<_> = view.channels().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["BBC World", "CNN", "bbc two"]);
    }

    #[test]
    fn search_is_a_case_insensitive_substring_match() {
        let catalog = catalog();
        let mut view = ChannelView::default();

        view.apply(&catalog, "News", "bbc");

        let names: Vec<_> = view.channels().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["BBC World", "bbc two"]);

        view.apply(&catalog, "News", "no such channel");
        assert!(view.is_empty());
    }

    #[test]
    fn empty_or_unknown_category_shows_nothing() {
        let catalog = catalog();
        let mut view = ChannelView::default();

        view.apply(&catalog, "", "");
        assert!(view.is_empty());

        view.apply(&catalog, "Movies", "");
        assert!(view.is_empty());
    }

    #[test]
    fn search_never_widens_beyond_the_selected_category() {
        let catalog = catalog();
        let mut view = ChannelView::default();

        view.apply(&catalog, "Sports", "bbc");
        assert!(view.is_empty());
    }

    #[test]
    fn index_accessors_address_displayed_entries() {
        let catalog = catalog();
        let mut view = ChannelView::default();

        view.apply(&catalog, "Sports", "");

        assert_eq!(view.len(), 1);
        assert_eq!(view.name_at(0), Some("ESPN"));
        assert_eq!(view.location_at(0), Some("http://2"));
        assert_eq!(view.name_at(1), None);
        assert_eq!(view.location_at(1), None);
    }
}
