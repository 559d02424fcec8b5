// EXTM3U channel playlist format handling
pub mod channel;
pub mod parser;

pub use channel::{Channel, Playlist, DEFAULT_CATEGORY, UNKNOWN_CHANNEL_NAME};
pub use parser::parse;
