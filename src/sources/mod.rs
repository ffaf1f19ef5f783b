pub mod feed;
pub mod resolver;

pub use feed::FeedFetcher;
pub use resolver::ChannelResolver;
