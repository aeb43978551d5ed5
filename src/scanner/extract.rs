//! Key extraction from a single candidate file's text.

use super::patterns::KeyPatterns;

/// Extract every localization key found in `text`.
///
/// Duplicates within one file are kept; deduplication happens when the
/// per-file results are merged into the run's key set. Zero matches is the
/// normal case for most files and is not an error.
pub fn extract_keys(text: &str, patterns: &KeyPatterns) -> Vec<String> {
    let mut keys = Vec::new();

    for caps in patterns.call().captures_iter(text) {
        if let Some(key) = caps.get(1) {
            push_key(&mut keys, key.as_str());
        }
    }

    for caps in patterns.tag_attribute().captures_iter(text) {
        // Group 1 is the double-quoted value, group 2 the single-quoted one.
        if let Some(key) = caps.get(1).or_else(|| caps.get(2)) {
            push_key(&mut keys, key.as_str());
        }
    }

    for caps in patterns.tag_content().captures_iter(text) {
        if let Some(key) = caps.get(1) {
            push_key(&mut keys, key.as_str().trim());
        }
    }

    keys
}

fn push_key(keys: &mut Vec<String>, key: &str) {
    if !key.is_empty() {
        keys.push(key.to_string());
    }
}
