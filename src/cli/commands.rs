use clap::Parser;

#[derive(Parser)]
#[command(name = "tubedigest")]
#[command(about = "Print a Markdown digest of recent videos from YouTube channels and playlists")]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to tubedigest.toml in the user config directory)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Locale for date formatting, e.g. fr_FR (overrides the config value)
    #[arg(long)]
    pub locale: Option<String>,

    /// Only show videos published at or after this time: RFC 3339 or YYYY-MM-DD
    #[arg(long)]
    pub since: Option<String>,

    /// Maximum number of videos per channel
    #[arg(long)]
    pub limit: Option<usize>,
}
