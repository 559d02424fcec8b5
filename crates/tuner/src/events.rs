use crate::catalog::CatalogChange;

/// Notifications emitted by [`crate::CatalogEngine`] toward the
/// presentation layer.
///
/// Delivered over an unbounded channel whose receiver lives on the single
/// consumer task; completion of an asynchronous fetch reaches the catalog
/// only through these messages and the engine's return values, never by
/// touching shared state from the fetch's own context.
#[derive(Debug, Clone)]
pub enum CatalogEvent {
    /// A load completed and the catalog was fully replaced.
    PlaylistReplaced {
        channel_count: usize,
        category_count: usize,
        change: CatalogChange,
    },
    /// A load failed; the previous catalog and view were left untouched.
    LoadFailed { message: String },
}
