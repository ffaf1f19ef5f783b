pub mod feed_id;
pub mod video;

pub use feed_id::FeedId;
pub use video::Video;
