use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Local, LocalResult, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::Deserialize;

use crate::errors::{DigestError, DigestResult};

pub const DEFAULT_LIMIT: usize = 5;

const CONFIG_FILE: &str = "tubedigest.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Channel or playlist URLs to include in the digest
    pub channels: Vec<String>,
    pub locale: Option<String>,
    pub since: Option<String>,
    pub limit: Option<usize>,
}

impl Config {
    pub fn load(path: Option<&str>) -> DigestResult<Self> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };

        let content = fs::read_to_string(&path).map_err(|e| {
            DigestError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        Self::from_toml(&content).map_err(|source| DigestError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Platform config dir, e.g. ~/.config/tubedigest.toml on Linux
    fn default_path() -> DigestResult<PathBuf> {
        let dirs = directories::BaseDirs::new()
            .ok_or_else(|| DigestError::Config("no home directory found".to_string()))?;
        Ok(dirs.config_dir().join(CONFIG_FILE))
    }
}

/// Parse a cutoff timestamp. Accepts RFC 3339, a naive datetime or a bare date;
/// naive values are interpreted in the local timezone.
pub fn parse_since(value: &str) -> DigestResult<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return local_datetime(naive, value);
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return local_datetime(date.and_time(NaiveTime::MIN), value);
    }

    Err(DigestError::InvalidDate(value.to_string()))
}

fn local_datetime(naive: NaiveDateTime, raw: &str) -> DigestResult<DateTime<FixedOffset>> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.fixed_offset()),
        LocalResult::None => Err(DigestError::InvalidDate(raw.to_string())),
    }
}

/// Per-channel video limit: CLI flag wins over the config value
pub fn effective_limit(cli_limit: Option<usize>, config_limit: Option<usize>) -> usize {
    cli_limit.or(config_limit).unwrap_or(DEFAULT_LIMIT)
}

/// Resolve a POSIX locale name like "fr_FR" to a chrono locale
pub fn parse_locale(name: &str) -> DigestResult<Locale> {
    Locale::try_from(name).map_err(|_| DigestError::UnknownLocale(name.to_string()))
}
