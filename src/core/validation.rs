//! URL validation utilities
//!
//! Decides whether an incoming chat message names a supported Instagram
//! post, reel or story. Whitelist-based, anchored at the start of the text:
//! a link that appears in the middle of a sentence is not accepted.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Host patterns accepted by the bot.
///
/// Each pattern is anchored with `^`, so only text that *starts* with a
/// supported link matches.
const SUPPORTED_URL_PATTERNS: &[&str] = &[r"^https?://(www\.)?instagram\.com/", r"^https?://(www\.)?instagr\.am/"];

#[allow(clippy::expect_used)]
static SUPPORTED_URLS: Lazy<RegexSet> =
    Lazy::new(|| RegexSet::new(SUPPORTED_URL_PATTERNS).expect("supported URL patterns are valid regexes"));

/// Returns true if `text` starts with a supported Instagram link.
///
/// Pure and total: no trimming, no I/O, any input yields a boolean.
///
/// # Examples
/// ```
/// use reelrelay::core::validation::is_supported;
///
/// assert!(is_supported("https://www.instagram.com/reel/XYZ789/"));
/// assert!(is_supported("http://instagr.am/p/ABC123/"));
///
/// assert!(!is_supported("look: https://www.instagram.com/p/ABC123/"));
/// assert!(!is_supported("https://evil.com/instagram.com/p/ABC123/"));
/// ```
pub fn is_supported(text: &str) -> bool {
    SUPPORTED_URLS.is_match(text)
}
