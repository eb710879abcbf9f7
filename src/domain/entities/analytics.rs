//! Analytics view of a link: its record plus raw hit history.

use super::{Hit, Link};

/// A link together with the full contents of its storage unit.
///
/// `history` is the raw byte content (destination line followed by hit
/// lines), kept as-is so callers can display it verbatim.
#[derive(Debug, Clone)]
pub struct LinkAnalytics {
    pub link: Link,
    pub history: Vec<u8>,
}

impl LinkAnalytics {
    pub fn new(link: Link, history: Vec<u8>) -> Self {
        Self { link, history }
    }

    /// Parses the recorded hits in the order they were written.
    ///
    /// The destination line and any malformed line are skipped. Invalid UTF-8
    /// is replaced rather than rejected.
    pub fn hits(&self) -> Vec<Hit> {
        String::from_utf8_lossy(&self.history)
            .lines()
            .skip(1)
            .filter_map(Hit::parse_line)
            .collect()
    }

    /// Lossy text rendering of the raw history.
    pub fn history_text(&self) -> String {
        String::from_utf8_lossy(&self.history).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analytics(history: &str) -> LinkAnalytics {
        LinkAnalytics::new(
            Link::new("abc".to_string(), "https://example.com".to_string()),
            history.as_bytes().to_vec(),
        )
    }

    #[test]
    fn test_no_hits() {
        assert!(analytics("https://example.com\n").hits().is_empty());
    }

    #[test]
    fn test_hits_in_order() {
        let a = analytics(
            "https://example.com\n\
             hit: 2026/10/15 09:30:00 first\n\
             hit: 2026/10/15 09:30:01 second\n",
        );

        let hits = a.hits();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].client_signature, "first");
        assert_eq!(hits[1].client_signature, "second");
    }

    #[test]
    fn test_torn_last_line_is_skipped() {
        let a = analytics(
            "https://example.com\n\
             hit: 2026/10/15 09:30:00 complete\n\
             hit: 2026/10/",
        );

        assert_eq!(a.hits().len(), 1);
    }

    #[test]
    fn test_destination_that_looks_like_hit_is_not_counted() {
        let a = LinkAnalytics::new(
            Link::new("abc".to_string(), "hit: 2026/10/15 09:30:00 x".to_string()),
            b"hit: 2026/10/15 09:30:00 x\n".to_vec(),
        );

        assert!(a.hits().is_empty());
        assert_eq!(a.history_text(), "hit: 2026/10/15 09:30:00 x\n");
    }
}
