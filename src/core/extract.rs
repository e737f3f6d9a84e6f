//! Feature reference extraction
//!
//! Finds references of the form:
//! License.feature_available?(:feature_name)

use once_cell::sync::Lazy;
use regex::Regex;

/// Static regex for feature references. The capture is non-greedy so each
/// occurrence ends at its nearest ')'. '.' does not cross newlines.
pub static FEATURE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"License\.feature_available\?\(:(.+?)\)").expect("Invalid FEATURE_RE regex")
});

/// Reduce a raw capture to the feature token: text up to the first ':',
/// then up to the first ')'
fn token_from_capture(raw: &str) -> &str {
    let head = raw.split(':').next().unwrap_or_default();
    head.split(')').next().unwrap_or_default()
}

/// Extract every non-empty feature token from one file's content, in
/// occurrence order. Duplicates are kept; the caller deduplicates.
pub fn extract_features(content: &str) -> Vec<&str> {
    FEATURE_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| token_from_capture(m.as_str()))
        .filter(|token| !token.is_empty())
        .collect()
}
