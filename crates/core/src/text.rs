//! Display helpers for human-readable output

use chrono::{DateTime, Utc};
use regex::Regex;

/// Convert Unix timestamp to formatted string
pub fn format_timestamp(timestamp: u64) -> Option<String> {
    let dt = DateTime::<Utc>::from_timestamp(i64::try_from(timestamp).ok()?, 0)?;
    Some(dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// Convert an HTML fragment (descriptions, comment bodies) to plain text
///
/// Line-breaking tags become newlines, remaining tags are removed, entities are
/// decoded and blank lines dropped.
pub fn plain_text(html: &str) -> String {
    let text = html
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .replace("<br />", "\n")
        .replace("</p>", "\n");

    let re = Regex::new(r"<[^>]+>").expect("tag pattern is valid");
    let cleaned = re.replace_all(&text, "");

    let decoded = html_escape::decode_html_entities(&cleaned);

    decoded
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
