/// Category assigned to entries whose directives carry no group information.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Name assigned to `#EXTINF` lines that have no trailing comma-delimited title.
pub const UNKNOWN_CHANNEL_NAME: &str = "Unknown Channel";

/// One playable entry of a channel playlist.
///
/// Immutable once emitted by the parser: `name` and `category` are always
/// non-empty, `location` is the raw resource line and is not validated for
/// reachability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub location: String,
    pub category: String,
}

/// Parse result: channels in document order plus the distinct category
/// labels sorted ascending in byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    pub channels: Vec<Channel>,
    pub categories: Vec<String>,
}

impl Playlist {
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
