//! Item list snapshots
//!
//! A snapshot is a JSON array of strings. It is the format of both the durable
//! storage record and the shareable link fragment.

/// Why a snapshot could not be read
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Not JSON, not an array, or an element that isn't a string
    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),
    /// Percent-decoding produced bytes that aren't UTF-8
    #[error("invalid fragment encoding: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Serialize the item list
pub fn encode(items: &[String]) -> String {
    // Serializing a slice of strings has no failure path
    serde_json::to_string(items).unwrap_or_else(|_| String::from("[]"))
}

/// Parse a snapshot back into an item list
pub fn decode(json: &str) -> Result<Vec<String>, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_json_array() {
        let items = vec!["A".to_string(), "C".to_string()];
        assert_eq!(encode(&items), r#"["A","C"]"#);
        assert_eq!(encode(&[]), "[]");
    }

    #[test]
    fn test_round_trip_keeps_order_and_duplicates() {
        let items: Vec<String> = ["pizza", "tacos", "pizza", "\"quoted\"", "ünï 🎡"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(decode(&encode(&items)).unwrap(), items);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode("not json").is_err());
        assert!(decode(r#"{"items": []}"#).is_err());
        assert!(decode("[1, 2, 3]").is_err());
        assert!(decode("null").is_err());
        assert!(decode("").is_err());
    }
}
