use chrono::{DateTime, FixedOffset};
use log::warn;

use crate::domain::Video;
use crate::errors::DigestResult;
use crate::sources::{ChannelResolver, FeedFetcher};

/// Videos selected for one configured channel, in display order
#[derive(Debug, Clone)]
pub struct ChannelDigest {
    pub source: String,
    pub videos: Vec<Video>,
}

pub struct DigestService {
    resolver: ChannelResolver,
    fetcher: FeedFetcher,
}

impl DigestService {
    pub fn new(resolver: ChannelResolver, fetcher: FeedFetcher) -> Self {
        Self { resolver, fetcher }
    }

    /// Build digests for all configured channels, preserving config order.
    /// A channel that fails to resolve or fetch is logged and skipped so one
    /// dead feed does not take down the whole digest.
    pub fn build(
        &self,
        channels: &[String],
        limit: usize,
        since: Option<DateTime<FixedOffset>>,
    ) -> Vec<ChannelDigest> {
        channels
            .iter()
            .filter_map(|source| match self.channel_digest(source, limit, since) {
                Ok(digest) => Some(digest),
                Err(e) => {
                    warn!("skipping {}: {}", source, e);
                    None
                }
            })
            .collect()
    }

    pub fn channel_digest(
        &self,
        source: &str,
        limit: usize,
        since: Option<DateTime<FixedOffset>>,
    ) -> DigestResult<ChannelDigest> {
        let feed_id = self.resolver.resolve(source)?;
        let videos = self.fetcher.fetch_videos(&feed_id)?;

        // Truncate before applying the cutoff: the cutoff narrows the newest
        // N videos, it never reaches further back into the feed.
        let videos = Self::apply_cutoff(Self::latest_videos(videos, limit), since);

        Ok(ChannelDigest {
            source: source.to_string(),
            videos,
        })
    }

    /// Most recent videos first, at most `limit` of them
    pub fn latest_videos(mut videos: Vec<Video>, limit: usize) -> Vec<Video> {
        videos.sort_unstable_by(|a, b| b.cmp(a));
        videos.truncate(limit);
        videos
    }

    /// Drop videos published before the cutoff; the boundary is inclusive
    pub fn apply_cutoff(
        videos: Vec<Video>,
        since: Option<DateTime<FixedOffset>>,
    ) -> Vec<Video> {
        match since {
            Some(cutoff) => videos
                .into_iter()
                .filter(|v| v.published >= cutoff)
                .collect(),
            None => videos,
        }
    }
}
