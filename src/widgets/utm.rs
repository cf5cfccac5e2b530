//! Lead source attribution.

use url::form_urlencoded;

/// Attribution value when nothing identifies the source.
pub const DIRECT: &str = "direct";

/// Query keys carrying the lead source, highest priority first.
const SOURCE_KEYS: [&str; 3] = ["utm_source", "source", "ref"];

/// Lead source from a raw query string. Key priority beats document order:
/// `utm_source` anywhere wins over an earlier `source`. Empty values are
/// treated as absent.
pub fn capture_source(query: &str) -> String {
    for key in SOURCE_KEYS {
        let value = form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned());
        if let Some(value) = value
            && !value.is_empty()
        {
            return value;
        }
    }
    DIRECT.to_string()
}

/// Referrer attribution from the `Referer` header value.
pub fn referrer_or_direct(referer: Option<&str>) -> String {
    match referer {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DIRECT.to_string(),
    }
}
