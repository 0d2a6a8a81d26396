//! Counter key scheme
//!
//! Keys embed an hour-granular timestamp so read-time aggregation can
//! bucket and filter by day without any secondary index:
//!
//! - `pv:YYYY-MM-DD-HH:<path>:<country>`
//! - `bot:YYYY-MM-DD-HH:<name>`, and likewise `ref:`, `browser:`, `os:`,
//!   `device:`

use chrono::Utc;
use url::Url;

/// Current hour stamp, `YYYY-MM-DD-HH`
pub(super) fn hour_stamp() -> String {
    Utc::now().format("%Y-%m-%d-%H").to_string()
}

pub(super) fn page_view_key(stamp: &str, path: &str, country: &str) -> String {
    format!("pv:{}:{}:{}", stamp, path, country)
}

pub(super) fn suffix_key(prefix: &str, stamp: &str, value: &str) -> String {
    format!("{}:{}:{}", prefix, stamp, value)
}

/// Parse `pv:YYYY-MM-DD-HH:<path>:<country>` into (date, path, country)
pub(super) fn parse_page_view_key(key: &str) -> Option<(&str, &str, &str)> {
    let rest = key.strip_prefix("pv:")?;
    let (stamp, rest) = rest.split_once(':')?;
    let (path, country) = rest.split_once(':')?;
    Some((date_of_stamp(stamp)?, path, country))
}

/// Parse `<prefix>:YYYY-MM-DD-HH:<value>` into (date, value)
pub(super) fn parse_suffix_key<'a>(prefix: &str, key: &'a str) -> Option<(&'a str, &'a str)> {
    let rest = key.strip_prefix(prefix)?.strip_prefix(':')?;
    let (stamp, value) = rest.split_once(':')?;
    Some((date_of_stamp(stamp)?, value))
}

/// The `YYYY-MM-DD` part of an hour stamp
fn date_of_stamp(stamp: &str) -> Option<&str> {
    // YYYY-MM-DD-HH
    if stamp.len() != 13 || !stamp.is_char_boundary(10) {
        return None;
    }
    let (date, hour) = stamp.split_at(10);
    if !hour.starts_with('-') {
        return None;
    }
    Some(date)
}

/// Normalize a referrer URL to its host, dropping a leading `www.`
///
/// Returns `None` for unparseable or host-less referrers, which are simply
/// not tracked.
pub(super) fn referrer_domain(referrer: &str) -> Option<String> {
    let url = Url::parse(referrer).ok()?;
    let host = url.host_str()?;
    let domain = host.strip_prefix("www.").unwrap_or(host);
    if domain.is_empty() || domain == "unknown" {
        return None;
    }
    Some(domain.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_key_roundtrip() {
        let key = page_view_key("2024-12-04-14", "/about", "IT");
        assert_eq!(key, "pv:2024-12-04-14:/about:IT");
        assert_eq!(
            parse_page_view_key(&key),
            Some(("2024-12-04", "/about", "IT"))
        );
    }

    #[test]
    fn test_suffix_key_roundtrip() {
        let key = suffix_key("bot", "2024-12-04-14", "Googlebot");
        assert_eq!(key, "bot:2024-12-04-14:Googlebot");
        assert_eq!(
            parse_suffix_key("bot", &key),
            Some(("2024-12-04", "Googlebot"))
        );
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert!(parse_page_view_key("pv:garbage").is_none());
        assert!(parse_page_view_key("bot:2024-12-04-14:x").is_none());
        assert!(parse_suffix_key("bot", "bot:not-a-stamp:x").is_none());
    }

    #[test]
    fn test_referrer_domain() {
        assert_eq!(
            referrer_domain("https://www.example.com/some/page"),
            Some("example.com".to_string())
        );
        assert_eq!(
            referrer_domain("https://news.ycombinator.com/item?id=1"),
            Some("news.ycombinator.com".to_string())
        );
        assert_eq!(referrer_domain("not a url"), None);
    }

    #[test]
    fn test_hour_stamp_shape() {
        let stamp = hour_stamp();
        assert_eq!(stamp.len(), 13);
        assert!(date_of_stamp(&stamp).is_some());
    }
}
