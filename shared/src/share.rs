//! Shareable links
//!
//! The item list travels in the URL fragment as a percent-encoded snapshot,
//! e.g. `https://example.com/wheel#%5B%22A%22%2C%22B%22%5D`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::snapshot::{self, SnapshotError};

/// Characters left alone by JavaScript's `encodeURIComponent`
const FRAGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode the item list as a link fragment (without the `#`)
pub fn encode_fragment(items: &[String]) -> String {
    utf8_percent_encode(&snapshot::encode(items), FRAGMENT).to_string()
}

/// Decode a link fragment (without the `#`) into an item list
pub fn decode_fragment(fragment: &str) -> Result<Vec<String>, SnapshotError> {
    let json = percent_decode_str(fragment).decode_utf8()?;
    snapshot::decode(&json)
}

/// The fragment of a URL, if it has a non-empty one
pub fn fragment_of(url: &str) -> Option<&str> {
    url.split_once('#')
        .map(|(_, fragment)| fragment)
        .filter(|fragment| !fragment.is_empty())
}

/// Build a link that reproduces `items` when opened
///
/// Any fragment already on `base_url` is replaced.
pub fn export_link(base_url: &str, items: &[String]) -> String {
    let base = base_url
        .split_once('#')
        .map_or(base_url, |(base, _)| base);
    format!("{}#{}", base, encode_fragment(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_export_link_format() {
        let link = export_link("https://wheel.example/", &items(&["A", "B"]));
        assert_eq!(link, "https://wheel.example/#%5B%22A%22%2C%22B%22%5D");
    }

    #[test]
    fn test_export_link_replaces_existing_fragment() {
        let link = export_link("https://wheel.example/#old", &items(&["x"]));
        assert_eq!(link.matches('#').count(), 1);
        assert!(link.starts_with("https://wheel.example/#"));
    }

    #[test]
    fn test_link_round_trip() {
        let original = items(&["Ryu", "Chun Li", "M. Bison", "a#b", "50% off", "naïve", ""]);
        let link = export_link("https://wheel.example/", &original);
        let fragment = fragment_of(&link).unwrap();
        assert_eq!(decode_fragment(fragment).unwrap(), original);
    }

    #[test]
    fn test_fragment_has_no_raw_separators() {
        let fragment = encode_fragment(&items(&["a b", "c#d", "e&f"]));
        assert!(!fragment.contains(' '));
        assert!(!fragment.contains('#'));
        assert!(!fragment.contains('&'));
    }

    #[test]
    fn test_fragment_of() {
        assert_eq!(fragment_of("https://x/#abc"), Some("abc"));
        assert_eq!(fragment_of("https://x/#"), None);
        assert_eq!(fragment_of("https://x/"), None);
    }

    #[test]
    fn test_decode_fragment_rejects_garbage() {
        assert!(decode_fragment("%5Bnope").is_err());
        assert!(decode_fragment("%FF%FE").is_err());
    }

    #[test]
    fn test_decode_accepts_unencoded_json() {
        assert_eq!(decode_fragment(r#"["A","B"]"#).unwrap(), items(&["A", "B"]));
    }
}
