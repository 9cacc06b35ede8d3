//! Best-effort parsing of the model's JSON output.
//!
//! Models asked for "JSON only" still produce trailing commentary, code
//! fences, or cut-off objects often enough that a single strict parse is
//! not good enough. The stages below are tried in order, stopping at the
//! first success; total failure is reported but never fatal.

use log::{debug, warn};
use serde_json::{Deserializer, Map, Value};

/// Parses the raw model response into a field mapping. Returns an empty
/// map when nothing recoverable is found; never errors.
pub fn parse_model_response(raw_text: &str) -> Map<String, Value> {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        warn!("empty response from model");
        return Map::new();
    }

    if let Some(map) = parse_strict(trimmed) {
        return map;
    }
    debug!("strict JSON parse failed, trying partial decode");

    if let Some(map) = parse_partial(trimmed) {
        return map;
    }

    if let Some(map) = parse_truncated(trimmed) {
        warn!("recovered JSON object by truncating trailing content");
        return map;
    }

    warn!("failed to parse model response; raw text: {}", raw_text);
    Map::new()
}

/// Stage 1: the whole text is one JSON object.
fn parse_strict(text: &str) -> Option<Map<String, Value>> {
    serde_json::from_str::<Map<String, Value>>(text).ok()
}

/// Stage 2: decode the first complete JSON value off the front of the text,
/// tolerating whatever follows it.
fn parse_partial(text: &str) -> Option<Map<String, Value>> {
    let mut stream = Deserializer::from_str(text).into_iter::<Value>();
    match stream.next() {
        Some(Ok(Value::Object(map))) => {
            warn!(
                "partial JSON parsed successfully up to byte offset {}",
                stream.byte_offset()
            );
            Some(map)
        }
        _ => None,
    }
}

/// Stage 3: cut everything after the last `}` and retry a strict parse,
/// salvaging objects the model appended garbage inside of.
fn parse_truncated(text: &str) -> Option<Map<String, Value>> {
    let last_brace = text.rfind('}')?;
    parse_strict(&text[..=last_brace])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_object_round_trips() {
        let parsed = parse_model_response(r#"  {"TSN": "6000", "CSN": null}  "#);
        assert_eq!(parsed.get("TSN"), Some(&json!("6000")));
        assert_eq!(parsed.get("CSN"), Some(&Value::Null));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_partial_decode_accepts_trailing_commentary() {
        let parsed = parse_model_response(
            "{\"TSN\": 6000}\nHope this helps! Let me know if you need anything else.",
        );
        assert_eq!(parsed.get("TSN"), Some(&json!(6000)));
    }

    #[test]
    fn test_truncation_stage_recovers_valid_prefix() {
        let parsed = parse_truncated("{\"TSN\": 6000} and some trailing garbage");
        assert_eq!(parsed.unwrap().get("TSN"), Some(&json!(6000)));
    }

    #[test]
    fn test_truncation_stage_rejects_broken_prefix() {
        assert!(parse_truncated("not json at all }").is_none());
    }

    #[test]
    fn test_top_level_array_is_not_a_mapping() {
        assert!(parse_model_response("[1, 2, 3]").is_empty());
    }

    #[test]
    fn test_total_failure_returns_empty_map() {
        assert!(parse_model_response("I could not find any data.").is_empty());
    }

    #[test]
    fn test_blank_input_returns_empty_map() {
        assert!(parse_model_response("").is_empty());
        assert!(parse_model_response("   \n\t").is_empty());
    }
}
