//! Social profile links.

use serde_json::{Map, Value};

/// Platforms the footer knows how to render an icon for. Anything else in
/// the `social` mapping is silently skipped.
pub const KNOWN_PLATFORMS: [&str; 3] = ["linkedin", "twitter", "facebook"];

/// Iterate renderable social links in document order: known platforms with a
/// non-empty string URL. Unknown platforms and empty values are skipped.
pub fn renderable(social: &Map<String, Value>) -> impl Iterator<Item = (&str, &str)> {
    social.iter().filter_map(|(platform, value)| {
        if !KNOWN_PLATFORMS.contains(&platform.as_str()) {
            return None;
        }
        match value {
            Value::String(url) if !url.is_empty() => Some((platform.as_str(), url.as_str())),
            _ => None,
        }
    })
}
