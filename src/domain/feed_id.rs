/// Identifier a channel URL resolves to. A feed is addressed by a channel id
/// or a playlist id, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedId {
    Channel(String),
    Playlist(String),
}

impl FeedId {
    /// The Atom feed endpoint for this id
    pub fn feed_url(&self) -> String {
        match self {
            FeedId::Channel(id) => format!(
                "https://www.youtube.com/feeds/videos.xml?channel_id={}",
                id
            ),
            FeedId::Playlist(id) => format!(
                "https://www.youtube.com/feeds/videos.xml?playlist_id={}",
                id
            ),
        }
    }
}

impl std::fmt::Display for FeedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedId::Channel(id) => write!(f, "channel {}", id),
            FeedId::Playlist(id) => write!(f, "playlist {}", id),
        }
    }
}
