// Line-oriented parser for the #EXTINF / #EXTGRP / location-line pairing.

use std::collections::BTreeSet;

use tracing::trace;

use crate::channel::{Channel, Playlist, DEFAULT_CATEGORY, UNKNOWN_CHANNEL_NAME};

const EXTINF_PREFIX: &str = "#EXTINF";
const EXTGRP_PREFIX: &str = "#EXTGRP:";
const GROUP_TITLE_ATTR: &str = "group-title=\"";

/// Parse raw playlist bytes into channels and their distinct categories.
///
/// Never fails: bytes are decoded as UTF-8 lossily, unrecognized lines are
/// skipped, and malformed entries degrade per line (placeholder name,
/// default category, or a silently dropped orphan location) rather than
/// aborting the rest of the document.
pub fn parse(bytes: &[u8]) -> Playlist {
    let text = String::from_utf8_lossy(bytes);
    // A leading BOM would otherwise turn the first directive into a bogus
    // location line.
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut channels = Vec::new();
    let mut categories = BTreeSet::new();
    let mut pending = PendingEntry::default();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(EXTINF_PREFIX) {
            pending.begin(line);
        } else if let Some(group) = line.strip_prefix(EXTGRP_PREFIX) {
            pending.set_override(group);
        } else if line.starts_with('#') {
            // Comment, including the #EXTM3U header.
        } else if let Some(channel) = pending.complete(line) {
            categories.insert(channel.category.clone());
            channels.push(channel);
        } else {
            trace!(location = line, "dropping location line with no pending entry");
        }
    }

    Playlist {
        channels,
        categories: categories.into_iter().collect(),
    }
}

/// In-progress entry state between a directive line and its location line.
///
/// The category is resolved only at emission:
/// `override.unwrap_or(attribute.unwrap_or(DEFAULT_CATEGORY))`. A `None`
/// name means no directive established an entry, so location lines are
/// dropped until the next `#EXTINF`.
#[derive(Debug, Default)]
struct PendingEntry {
    name: Option<String>,
    attribute: Option<String>,
    group_override: Option<String>,
}

impl PendingEntry {
    /// Start a fresh entry from an `#EXTINF` line, discarding any prior
    /// pending state.
    fn begin(&mut self, line: &str) {
        self.attribute = group_title(line);
        self.group_override = None;
        self.name = match line.rsplit_once(',') {
            Some((_, title)) => {
                let title = title.trim();
                (!title.is_empty()).then(|| title.to_owned())
            }
            None => Some(UNKNOWN_CHANNEL_NAME.to_owned()),
        };
    }

    /// Record an `#EXTGRP:` category override. An empty value establishes
    /// nothing, keeping the non-empty-category invariant via defaulting.
    fn set_override(&mut self, value: &str) {
        let value = value.trim();
        self.group_override = (!value.is_empty()).then(|| value.to_owned());
    }

    /// Terminate the entry with its location line, if a name was established.
    /// The name is cleared either way so a stray second location line cannot
    /// reuse it.
    fn complete(&mut self, location: &str) -> Option<Channel> {
        let name = self.name.take()?;
        let category = self
            .group_override
            .clone()
            .or_else(|| self.attribute.clone())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned());
        Some(Channel {
            name,
            location: location.to_owned(),
            category,
        })
    }
}

/// Value between the first `group-title="` and the next quote, verbatim.
/// Empty or unterminated values count as absent.
fn group_title(line: &str) -> Option<String> {
    let start = line.find(GROUP_TITLE_ATTR)? + GROUP_TITLE_ATTR.len();
    let rest = &line[start..];
    let value = &rest[..rest.find('"')?];
    (!value.is_empty()).then(|| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(name: &str, location: &str, category: &str) -> Channel {
        Channel {
            name: name.to_owned(),
            location: location.to_owned(),
            category: category.to_owned(),
        }
    }

    #[test]
    fn parses_extinf_with_group_title_and_name() {
        let playlist = parse(b"#EXTINF:-1 group-title=\"Sports\",ESPN\nhttp://a/espn.ts\n");

        assert_eq!(
            playlist.channels,
            vec![channel("ESPN", "http://a/espn.ts", "Sports")]
        );
        assert_eq!(playlist.categories, vec!["Sports"]);
    }

    #[test]
    fn empty_document_yields_nothing() {
        let playlist = parse(b"");

        assert!(playlist.is_empty());
        assert!(playlist.categories.is_empty());
    }

    #[test]
    fn location_without_directive_is_dropped() {
        let playlist = parse(b"http://x/stream.ts\n");

        assert!(playlist.channels.is_empty());
        assert!(playlist.categories.is_empty());
    }

    #[test]
    fn name_is_cleared_after_emission() {
        // The second location line has no preceding #EXTINF, so the stale
        // name must not be reused even though #EXTGRP appeared in between.
        let input = "#EXTINF:-1 group-title=\"Sports\",ESPN\nhttp://a/espn.ts\n#EXTGRP:News\nhttp://a/espn2.ts\n";
        let playlist = parse(input.as_bytes());

        assert_eq!(
            playlist.channels,
            vec![channel("ESPN", "http://a/espn.ts", "Sports")]
        );
        assert_eq!(playlist.categories, vec!["Sports"]);
    }

    #[test]
    fn extgrp_overrides_group_title() {
        let input = "#EXTINF:-1 group-title=\"A\",Ch1\n#EXTGRP:B\nhttp://u\n";
        let playlist = parse(input.as_bytes());

        assert_eq!(playlist.channels, vec![channel("Ch1", "http://u", "B")]);
        assert_eq!(playlist.categories, vec!["B"]);
    }

    #[test]
    fn missing_comma_uses_placeholder_name() {
        let playlist = parse(b"#EXTINF:-1\nhttp://u\n");

        assert_eq!(
            playlist.channels,
            vec![channel(UNKNOWN_CHANNEL_NAME, "http://u", DEFAULT_CATEGORY)]
        );
    }

    #[test]
    fn blank_name_after_comma_drops_the_entry() {
        let playlist = parse(b"#EXTINF:-1,   \nhttp://u\n");

        assert!(playlist.channels.is_empty());
    }

    #[test]
    fn missing_group_information_defaults_category() {
        let playlist = parse(b"#EXTINF:-1,News 24\nhttp://u\n");

        assert_eq!(
            playlist.channels,
            vec![channel("News 24", "http://u", DEFAULT_CATEGORY)]
        );
        assert_eq!(playlist.categories, vec![DEFAULT_CATEGORY]);
    }

    #[test]
    fn empty_group_title_and_extgrp_fall_back() {
        let input = "#EXTINF:-1 group-title=\"\",Ch1\n#EXTGRP:\nhttp://u\n";
        let playlist = parse(input.as_bytes());

        assert_eq!(
            playlist.channels,
            vec![channel("Ch1", "http://u", DEFAULT_CATEGORY)]
        );
    }

    #[test]
    fn consecutive_directives_keep_only_the_last() {
        let input = "#EXTINF:-1 group-title=\"A\",First\n#EXTINF:-1 group-title=\"B\",Second\nhttp://u\n";
        let playlist = parse(input.as_bytes());

        assert_eq!(playlist.channels, vec![channel("Second", "http://u", "B")]);
        assert_eq!(playlist.categories, vec!["B"]);
    }

    #[test]
    fn extgrp_before_extinf_is_reset() {
        let input = "#EXTGRP:Old\n#EXTINF:-1,Ch1\nhttp://u\n";
        let playlist = parse(input.as_bytes());

        assert_eq!(
            playlist.channels,
            vec![channel("Ch1", "http://u", DEFAULT_CATEGORY)]
        );
    }

    #[test]
    fn trailing_directive_without_location_emits_nothing() {
        let playlist = parse(b"#EXTINF:-1,Dangling\n");

        assert!(playlist.channels.is_empty());
        assert!(playlist.categories.is_empty());
    }

    #[test]
    fn categories_are_sorted_ordinal_and_distinct() {
        let input = "\
#EXTINF:-1 group-title=\"Zoo\",a\nhttp://1\n\
#EXTINF:-1 group-title=\"Art\",b\nhttp://2\n\
#EXTINF:-1 group-title=\"art\",c\nhttp://3\n\
#EXTINF:-1 group-title=\"Art\",d\nhttp://4\n";
        let playlist = parse(input.as_bytes());

        assert_eq!(playlist.categories, vec!["Art", "Zoo", "art"]);
        assert_eq!(playlist.channels.len(), 4);
    }

    #[test]
    fn comments_and_header_are_ignored() {
        let input = "#EXTM3U\n# a comment\n#EXTINF:-1,Ch1\n#EXT-X-SOMETHING:1\nhttp://u\n";
        let playlist = parse(input.as_bytes());

        assert_eq!(
            playlist.channels,
            vec![channel("Ch1", "http://u", DEFAULT_CATEGORY)]
        );
    }

    #[test]
    fn crlf_and_surrounding_whitespace_are_trimmed() {
        let input = "#EXTM3U\r\n  #EXTINF:-1 group-title=\"News\",BBC  \r\n  http://b/bbc.ts  \r\n";
        let playlist = parse(input.as_bytes());

        assert_eq!(
            playlist.channels,
            vec![channel("BBC", "http://b/bbc.ts", "News")]
        );
    }

    #[test]
    fn name_is_text_after_the_last_comma() {
        let playlist = parse(b"#EXTINF:-1 tvg-id=\"x,y\",The, Name\nhttp://u\n");

        assert_eq!(playlist.channels[0].name, "Name");
    }

    #[test]
    fn leading_bom_does_not_hide_the_first_directive() {
        let input = "\u{feff}#EXTINF:-1 group-title=\"News\",BBC\nhttp://b\n";
        let playlist = parse(input.as_bytes());

        assert_eq!(playlist.channels, vec![channel("BBC", "http://b", "News")]);
    }

    #[test]
    fn parse_is_deterministic() {
        let input = b"#EXTINF:-1 group-title=\"A\",Ch1\nhttp://u\n#EXTINF:-1,Ch2\nhttp://v\n";

        assert_eq!(parse(input), parse(input));
    }

    #[test]
    fn invalid_utf8_never_aborts_the_document() {
        let mut input = b"#EXTINF:-1,Ch1\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"http://u\n");
        let playlist = parse(&input);

        // The bogus bytes become a replacement-character location line that
        // terminates the pending entry.
        assert_eq!(playlist.channels.len(), 1);
        assert_eq!(playlist.channels[0].name, "Ch1");
    }
}
