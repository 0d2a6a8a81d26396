//! Crawler detection from user-agent strings

use once_cell::sync::Lazy;
use regex::Regex;

static BOT_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("Googlebot", r"(?i)googlebot"),
        ("Bingbot", r"(?i)bingbot|msnbot"),
        ("GPTBot", r"(?i)gptbot"),
        ("ClaudeBot", r"(?i)claude"),
        ("Applebot", r"(?i)applebot"),
        ("DuckDuckBot", r"(?i)duckduckbot"),
        ("YandexBot", r"(?i)yandexbot"),
        ("Slurp", r"(?i)slurp"),
        ("facebookexternalhit", r"(?i)facebookexternalhit"),
        ("Twitterbot", r"(?i)twitterbot"),
        ("LinkedInBot", r"(?i)linkedinbot"),
        ("WhatsApp", r"(?i)whatsapp"),
        ("TelegramBot", r"(?i)telegrambot"),
        ("Baiduspider", r"(?i)baiduspider"),
        ("Sogou", r"(?i)sogou"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("static bot pattern")))
    .collect()
});

/// Name of the crawler matching `user_agent`, if any
pub fn detect_bot(user_agent: &str) -> Option<&'static str> {
    if user_agent.is_empty() {
        return None;
    }

    BOT_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(user_agent))
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bots_detected() {
        assert_eq!(
            detect_bot("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)"),
            Some("Googlebot")
        );
        assert_eq!(detect_bot("GPTBot/1.0"), Some("GPTBot"));
        assert_eq!(
            detect_bot("Mozilla/5.0 (compatible; bingbot/2.0)"),
            Some("Bingbot")
        );
    }

    #[test]
    fn test_browsers_not_detected() {
        assert_eq!(
            detect_bot("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) Safari/605.1.15"),
            None
        );
        assert_eq!(detect_bot(""), None);
    }
}
