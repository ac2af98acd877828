//! Pagination cursor codec.
//!
//! A references page may leave several uploads mid-pagination, each with its
//! own resume token. The resolver folds those into one opaque string:
//! base64 over a JSON object mapping upload id to token. An empty mapping
//! encodes to the empty string, and the empty (or absent) string decodes to
//! an empty mapping, so "no cursor" and "nothing left to resume" round-trip
//! cleanly.

use crate::error::QueryError;
use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::collections::HashMap;

pub fn encode_cursor(tokens: &HashMap<i64, String>) -> Result<String> {
    if tokens.is_empty() {
        return Ok(String::new());
    }

    let json = serde_json::to_vec(tokens)
        .map_err(|err| QueryError::CursorEncode(err.to_string()))?;
    Ok(STANDARD.encode(json))
}

pub fn decode_cursor(cursor: Option<&str>) -> Result<HashMap<i64, String>> {
    let cursor = match cursor {
        None | Some("") => return Ok(HashMap::new()),
        Some(cursor) => cursor,
    };

    let decoded = STANDARD
        .decode(cursor)
        .map_err(|err| QueryError::CursorDecode(err.to_string()))?;
    serde_json::from_slice(&decoded).map_err(|err| QueryError::CursorDecode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_mapping_encodes_to_empty_string() {
        assert_eq!(encode_cursor(&HashMap::new()).unwrap(), "");
    }

    #[test]
    fn empty_and_absent_cursors_decode_to_empty_mapping() {
        assert_eq!(decode_cursor(None).unwrap(), HashMap::new());
        assert_eq!(decode_cursor(Some("")).unwrap(), HashMap::new());
    }

    #[test]
    fn round_trips_nonempty_mapping() {
        let tokens = HashMap::from([
            (1_i64, "tokA2".to_string()),
            (3_i64, "tokC2".to_string()),
        ]);
        let encoded = encode_cursor(&tokens).unwrap();
        assert!(!encoded.is_empty());
        assert_eq!(decode_cursor(Some(&encoded)).unwrap(), tokens);
    }

    #[test]
    fn invalid_base64_is_a_decode_error() {
        assert_matches!(
            decode_cursor(Some("not base64!!")),
            Err(QueryError::CursorDecode(_))
        );
    }

    #[test]
    fn valid_base64_with_invalid_json_is_a_decode_error() {
        let garbage = STANDARD.encode(b"[not a map]");
        assert_matches!(
            decode_cursor(Some(&garbage)),
            Err(QueryError::CursorDecode(_))
        );
    }
}
