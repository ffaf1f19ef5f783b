use std::io::{BufRead, BufReader};
use std::time::Duration;

use log::debug;
use regex::Regex;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::domain::FeedId;
use crate::errors::{DigestError, DigestResult};

/// Stop reading a page that grows past this without showing a canonical link
const MAX_PAGE_BYTES: usize = 2 * 1024 * 1024;

pub struct ChannelResolver {
    client: Client,
    channel_re: Regex,
    playlist_re: Regex,
    canonical_re: Regex,
}

impl ChannelResolver {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            channel_re: Regex::new(r"youtube\.com/channel/(UC[\w-]{22})").unwrap(),
            playlist_re: Regex::new(r"[?&]list=([\w-]+)").unwrap(),
            canonical_re: Regex::new(r#"<link\s+rel="canonical"\s+href="([^"]+)""#).unwrap(),
        }
    }

    /// Resolve a configured URL to a feed id.
    ///
    /// Playlist URLs (anything carrying a `list=` parameter) and /channel/ URLs
    /// are recognized without a network round trip. Handle, custom and legacy
    /// user URLs need a page fetch to find the canonical channel link.
    pub fn resolve(&self, url: &str) -> DigestResult<FeedId> {
        if let Some(caps) = self.playlist_re.captures(url) {
            debug!("{} recognized as playlist", url);
            return Ok(FeedId::Playlist(caps[1].to_string()));
        }

        if let Some(caps) = self.channel_re.captures(url) {
            return Ok(FeedId::Channel(caps[1].to_string()));
        }

        let parsed = Url::parse(url).map_err(|e| {
            DigestError::InvalidUrl(format!("{}: {}", url, e))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(DigestError::InvalidUrl(url.to_string()));
        }

        let canonical = self.fetch_canonical_link(url)?;
        debug!("canonical link for {}: {}", url, canonical);

        let id = self
            .channel_id_from_canonical(&canonical)
            .ok_or_else(|| DigestError::ChannelResolve(url.to_string()))?;

        Ok(FeedId::Channel(id))
    }

    /// Fetch the page and return the canonical link href. The body is scanned
    /// line by line and reading stops at the first match, so the tail of the
    /// page is never downloaded in the common case.
    fn fetch_canonical_link(&self, url: &str) -> DigestResult<String> {
        let response = self.client.get(url).send()?.error_for_status()?;
        let mut reader = BufReader::new(response);

        let mut line = Vec::new();
        let mut document = String::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            let text = String::from_utf8_lossy(&line);
            if let Some(caps) = self.canonical_re.captures(&text) {
                return Ok(caps[1].to_string());
            }

            document.push_str(&text);
            if document.len() > MAX_PAGE_BYTES {
                debug!("{}: no canonical link in first {} bytes", url, MAX_PAGE_BYTES);
                break;
            }
        }

        // The line scan assumes the tag sits on one line with rel before href.
        // Reparse the whole document for anything else.
        canonical_from_document(&document)
            .ok_or_else(|| DigestError::ChannelResolve(url.to_string()))
    }

    /// Channel id is the last path segment of the canonical href
    fn channel_id_from_canonical(&self, href: &str) -> Option<String> {
        if let Some(caps) = self.channel_re.captures(href) {
            return Some(caps[1].to_string());
        }

        Url::parse(href)
            .ok()?
            .path_segments()?
            .filter(|s| !s.is_empty())
            .last()
            .map(String::from)
    }
}

impl Default for ChannelResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn canonical_from_document(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("link[rel='canonical']").unwrap();

    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_url_detected() {
        let resolver = ChannelResolver::new();

        let id = resolver
            .resolve("https://www.youtube.com/playlist?list=PL85XCvVv9zLtDA8uMTb9eBvTHTNbb3M5p")
            .unwrap();
        assert_eq!(
            id,
            FeedId::Playlist("PL85XCvVv9zLtDA8uMTb9eBvTHTNbb3M5p".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_list_param_is_playlist() {
        let resolver = ChannelResolver::new();

        let id = resolver
            .resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLabc123_-xyz")
            .unwrap();
        assert_eq!(id, FeedId::Playlist("PLabc123_-xyz".to_string()));
    }

    #[test]
    fn test_channel_url_resolved_without_fetch() {
        let resolver = ChannelResolver::new();

        let id = resolver
            .resolve("https://www.youtube.com/channel/UC2DjFE7Xf11URZqWBigcVOQ")
            .unwrap();
        assert_eq!(id, FeedId::Channel("UC2DjFE7Xf11URZqWBigcVOQ".to_string()));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let resolver = ChannelResolver::new();

        assert!(matches!(
            resolver.resolve("not a url"),
            Err(DigestError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_canonical_regex_matches_youtube_markup() {
        let resolver = ChannelResolver::new();
        let line = r#"<link rel="canonical" href="https://www.youtube.com/channel/UC2DjFE7Xf11URZqWBigcVOQ">"#;

        let caps = resolver.canonical_re.captures(line).unwrap();
        assert_eq!(
            &caps[1],
            "https://www.youtube.com/channel/UC2DjFE7Xf11URZqWBigcVOQ"
        );
    }

    #[test]
    fn test_document_fallback_handles_reordered_attributes() {
        let html = r#"<html><head>
            <link href="https://www.youtube.com/channel/UC2DjFE7Xf11URZqWBigcVOQ" rel="canonical">
        </head><body></body></html>"#;

        assert_eq!(
            canonical_from_document(html).as_deref(),
            Some("https://www.youtube.com/channel/UC2DjFE7Xf11URZqWBigcVOQ")
        );
    }

    #[test]
    fn test_document_without_canonical_link() {
        assert!(canonical_from_document("<html><head></head></html>").is_none());
    }

    #[test]
    fn test_channel_id_from_canonical() {
        let resolver = ChannelResolver::new();

        assert_eq!(
            resolver
                .channel_id_from_canonical("https://www.youtube.com/channel/UC2DjFE7Xf11URZqWBigcVOQ")
                .as_deref(),
            Some("UC2DjFE7Xf11URZqWBigcVOQ")
        );
    }

    #[test]
    fn test_channel_id_from_canonical_trailing_slash() {
        let resolver = ChannelResolver::new();

        // Non-channel canonical, last segment is still returned
        assert_eq!(
            resolver
                .channel_id_from_canonical("https://www.youtube.com/some/id/")
                .as_deref(),
            Some("id")
        );
    }
}
