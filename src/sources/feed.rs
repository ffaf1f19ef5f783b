use std::time::Duration;

use feed_rs::parser;
use log::{debug, warn};
use reqwest::blocking::Client;

use crate::domain::{FeedId, Video};
use crate::errors::{DigestError, DigestResult};

pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Fetch the Atom feed for a channel or playlist and extract its videos
    pub fn fetch_videos(&self, feed_id: &FeedId) -> DigestResult<Vec<Video>> {
        debug!("fetching feed for {}", feed_id);

        let response = self
            .client
            .get(feed_id.feed_url())
            .send()?
            .error_for_status()?;
        let bytes = response.bytes()?;

        Self::videos_from_bytes(&bytes)
    }

    fn videos_from_bytes(bytes: &[u8]) -> DigestResult<Vec<Video>> {
        let parsed =
            parser::parse(bytes).map_err(|e| DigestError::FeedParse(e.to_string()))?;

        let mut videos = Vec::new();

        for entry in parsed.entries {
            let title = entry
                .title
                .map(|t| t.content)
                .unwrap_or_else(|| "Untitled".to_string());

            let Some(url) = entry.links.into_iter().next().map(|l| l.href) else {
                warn!("feed entry '{}' has no link, skipped", title);
                continue;
            };

            let Some(published) = entry.published.or(entry.updated) else {
                warn!("feed entry '{}' has no publish time, skipped", title);
                continue;
            };

            videos.push(Video::new(published.fixed_offset(), title, url));
        }

        Ok(videos)
    }
}

impl Default for FeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}
