use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: String,
        source: toml::de::Error,
    },

    // Resolution errors
    #[error("Invalid channel URL: {0}")]
    InvalidUrl(String),

    #[error("No channel id found for {0}")]
    ChannelResolve(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    #[error("Invalid date '{0}': expected RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DigestResult<T> = Result<T, DigestError>;
