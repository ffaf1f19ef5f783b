use clap::Parser;

use tubedigest::cli::Cli;
use tubedigest::config::{self, Config};
use tubedigest::errors::DigestResult;
use tubedigest::output;
use tubedigest::services::DigestService;
use tubedigest::sources::{ChannelResolver, FeedFetcher};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> DigestResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // CLI flags win over config values
    let locale = cli
        .locale
        .as_deref()
        .or(config.locale.as_deref())
        .map(config::parse_locale)
        .transpose()?;

    let since = cli
        .since
        .as_deref()
        .or(config.since.as_deref())
        .map(config::parse_since)
        .transpose()?;

    let limit = config::effective_limit(cli.limit, config.limit);

    let service = DigestService::new(ChannelResolver::new(), FeedFetcher::new());
    let digests = service.build(&config.channels, limit, since);

    print!("{}", output::render(&digests, locale));

    Ok(())
}
