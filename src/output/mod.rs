use chrono::Locale;

use crate::domain::Video;
use crate::services::ChannelDigest;

const SEPARATOR: &str = "====================";
const DATE_FORMAT: &str = "%d %B %Y";

/// Render the digest as Markdown. Each channel gets a header and a trailing
/// separator even when every video fell outside the cutoff.
pub fn render(digests: &[ChannelDigest], locale: Option<Locale>) -> String {
    let mut out = String::new();

    for digest in digests {
        out.push_str("# ");
        out.push_str(&digest.source);
        out.push_str("\n\n");

        for video in &digest.videos {
            out.push_str(&render_video(video, locale));
        }

        out.push_str(SEPARATOR);
        out.push_str("\n\n");
    }

    out
}

fn render_video(video: &Video, locale: Option<Locale>) -> String {
    let date = match locale {
        Some(loc) => video
            .published
            .format_localized(DATE_FORMAT, loc)
            .to_string(),
        None => video.published.format(DATE_FORMAT).to_string(),
    };

    format!("## {}\n- {}\n- {}\n\n", video.title, video.url, date)
}
