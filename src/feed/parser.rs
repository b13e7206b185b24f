//! Parses Guardian search payloads into [`Article`] values.
//!
//! The wire shape is `{ "response": { "results": [ ... ] } }`. The envelope
//! is required; everything inside a result item is optional. String fields
//! that are missing or null become empty strings, non-string scalars are
//! kept as their JSON text, and the author stays `None` rather than empty.
//! An item whose publication timestamp is unusable is dropped and counted,
//! never failing the rest of the payload.
use crate::article::Article;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors from parsing a single payload.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Payload is not the expected `{ "response": { "results": [..] } }` shape
    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Outcome of parsing one payload: the usable articles plus a count of
/// items dropped for an unusable publication timestamp.
#[derive(Debug)]
pub struct ParseResult {
    pub articles: Vec<Article>,
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct Payload {
    response: PayloadResponse,
}

#[derive(Debug, Deserialize)]
struct PayloadResponse {
    results: Vec<RawItem>,
}

/// One result item as it appears on the wire. Every field is optional,
/// and scalar fields coerce rather than fail on an unexpected type; only a
/// structural mismatch (the envelope, `fields`, `tags`) fails the payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    #[serde(default, deserialize_with = "lenient_string")]
    web_publication_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    section_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    web_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    web_url: Option<String>,
    fields: Option<RawFields>,
    tags: Option<Vec<RawTag>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFields {
    #[serde(default, deserialize_with = "lenient_string")]
    trail_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTag {
    #[serde(default, deserialize_with = "lenient_string")]
    web_title: Option<String>,
}

/// Reads an optional string field the way a coercing accessor would:
/// absent and null are `None`, strings pass through, anything else is
/// rendered as its JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }))
}

/// Parses one payload into articles.
///
/// A payload that does not match the envelope shape is a total loss for
/// that payload only ([`ParseError::Malformed`]); per-item problems are
/// contained to the item.
pub fn parse(bytes: &[u8]) -> Result<ParseResult, ParseError> {
    let payload: Payload = serde_json::from_slice(bytes)?;

    let mut articles = Vec::with_capacity(payload.response.results.len());
    let mut skipped = 0usize;

    for item in payload.response.results {
        let stamp = item.web_publication_date.unwrap_or_default();
        let Some((publication_date, publication_time)) = split_timestamp(&stamp) else {
            skipped += 1;
            continue;
        };

        // First contributor tag only; an empty name counts as absent.
        let author = item
            .tags
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|tag| tag.web_title)
            .filter(|name| !name.is_empty());

        articles.push(Article {
            publication_date,
            publication_time,
            category: item.section_name.unwrap_or_default(),
            title: item.web_title.unwrap_or_default(),
            url: item.web_url.unwrap_or_default(),
            summary: item.fields.and_then(|f| f.trail_text).unwrap_or_default(),
            author,
        });
    }

    Ok(ParseResult { articles, skipped })
}

/// Splits `YYYY-MM-DDTHH:MM:SSZ` into `(date, time)` by fixed offsets.
///
/// This is a format assumption, not an ISO-8601 parser: the stamp must be
/// at least 16 bytes with `T` at byte 10, giving date `0..10` and time
/// `11..16`. `str::get` keeps both slices on char boundaries, so a stamp
/// with multibyte characters in the wrong place is rejected instead of
/// panicking.
fn split_timestamp(stamp: &str) -> Option<(String, String)> {
    if stamp.len() < 16 || stamp.as_bytes()[10] != b'T' {
        return None;
    }
    let date = stamp.get(0..10)?;
    let time = stamp.get(11..16)?;
    Some((date.to_string(), time.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Wraps result items in the response envelope.
    fn payload(items: &str) -> String {
        format!(r#"{{"response":{{"results":[{items}]}}}}"#)
    }

    const FULL_ITEM: &str = r#"{
        "webPublicationDate": "2023-05-01T09:07:00Z",
        "sectionName": "World news",
        "webTitle": "Quake shakes capital",
        "webUrl": "https://www.theguardian.com/world/quake",
        "fields": {"trailText": "Tremors felt across the region."},
        "tags": [{"webTitle": "Jane Reporter"}]
    }"#;

    #[test]
    fn test_full_item_maps_every_field() {
        let result = parse(payload(FULL_ITEM).as_bytes()).unwrap();
        assert_eq!(result.skipped, 0);
        assert_eq!(result.articles.len(), 1);

        let article = &result.articles[0];
        assert_eq!(article.publication_date, "2023-05-01");
        assert_eq!(article.publication_time, "09:07");
        assert_eq!(article.category, "World news");
        assert_eq!(article.title, "Quake shakes capital");
        assert_eq!(article.url, "https://www.theguardian.com/world/quake");
        assert_eq!(article.summary, "Tremors felt across the region.");
        assert_eq!(article.author.as_deref(), Some("Jane Reporter"));
    }

    #[test]
    fn test_missing_trail_text_gives_empty_summary() {
        let item = r#"{
            "webPublicationDate": "2023-05-01T09:07:00Z",
            "fields": {},
            "tags": []
        }"#;
        let result = parse(payload(item).as_bytes()).unwrap();
        assert_eq!(result.articles[0].summary, "");
    }

    #[test]
    fn test_missing_fields_object_gives_empty_summary() {
        let item = r#"{"webPublicationDate": "2023-05-01T09:07:00Z"}"#;
        let result = parse(payload(item).as_bytes()).unwrap();
        assert_eq!(result.articles.len(), 1);
        assert_eq!(result.articles[0].summary, "");
    }

    #[test]
    fn test_null_fields_and_section_are_tolerated() {
        let item = r#"{
            "webPublicationDate": "2023-05-01T09:07:00Z",
            "sectionName": null,
            "fields": null,
            "tags": null
        }"#;
        let result = parse(payload(item).as_bytes()).unwrap();
        let article = &result.articles[0];
        assert_eq!(article.category, "");
        assert_eq!(article.summary, "");
        assert_eq!(article.author, None);
    }

    #[test]
    fn test_empty_tags_means_no_author() {
        let item = r#"{"webPublicationDate": "2023-05-01T09:07:00Z", "tags": []}"#;
        let result = parse(payload(item).as_bytes()).unwrap();
        assert_eq!(result.articles[0].author, None);
    }

    #[test]
    fn test_empty_tag_name_means_no_author() {
        let item = r#"{
            "webPublicationDate": "2023-05-01T09:07:00Z",
            "tags": [{"webTitle": ""}]
        }"#;
        let result = parse(payload(item).as_bytes()).unwrap();
        assert_eq!(result.articles[0].author, None);
    }

    #[test]
    fn test_only_first_tag_is_consulted() {
        let item = r#"{
            "webPublicationDate": "2023-05-01T09:07:00Z",
            "tags": [{"webTitle": "First Author"}, {"webTitle": "Second Author"}]
        }"#;
        let result = parse(payload(item).as_bytes()).unwrap();
        assert_eq!(result.articles[0].author.as_deref(), Some("First Author"));
    }

    #[test]
    fn test_first_tag_empty_does_not_fall_through_to_second() {
        let item = r#"{
            "webPublicationDate": "2023-05-01T09:07:00Z",
            "tags": [{}, {"webTitle": "Second Author"}]
        }"#;
        let result = parse(payload(item).as_bytes()).unwrap();
        assert_eq!(result.articles[0].author, None);
    }

    #[test]
    fn test_short_timestamp_skips_item_only() {
        let items = format!(
            r#"{{"webPublicationDate": "2023-05-01"}}, {FULL_ITEM}"#
        );
        let result = parse(payload(&items).as_bytes()).unwrap();
        assert_eq!(result.skipped, 1);
        assert_eq!(result.articles.len(), 1);
        assert_eq!(result.articles[0].title, "Quake shakes capital");
    }

    #[test]
    fn test_missing_timestamp_skips_item() {
        let result = parse(payload(r#"{"webTitle": "No date"}"#).as_bytes()).unwrap();
        assert_eq!(result.skipped, 1);
        assert!(result.articles.is_empty());
    }

    #[test]
    fn test_space_separated_timestamp_skips_item() {
        // Right length, but no 'T' at offset ten.
        let item = r#"{"webPublicationDate": "2023-05-01 09:07:00Z"}"#;
        let result = parse(payload(item).as_bytes()).unwrap();
        assert_eq!(result.skipped, 1);
        assert!(result.articles.is_empty());
    }

    #[test]
    fn test_multibyte_timestamp_skips_without_panicking() {
        // 'T' sits at byte ten, but byte sixteen lands inside a multibyte
        // character, so the time slice is off a char boundary.
        let item = r#"{"webPublicationDate": "2023-05-01Tééé!!"}"#;
        let result = parse(payload(item).as_bytes()).unwrap();
        assert_eq!(result.skipped, 1);
        assert!(result.articles.is_empty());
    }

    #[test]
    fn test_empty_results_is_zero_articles() {
        let result = parse(payload("").as_bytes()).unwrap();
        assert!(result.articles.is_empty());
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_missing_response_key_is_malformed() {
        let err = parse(br#"{"status": "ok"}"#).unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn test_missing_results_key_is_malformed() {
        let err = parse(br#"{"response": {"status": "ok"}}"#).unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn test_non_object_top_level_is_malformed() {
        assert!(parse(b"[]").is_err());
        assert!(parse(b"\"response\"").is_err());
        assert!(parse(b"not json at all").is_err());
    }

    #[test]
    fn test_non_string_scalars_coerce_to_their_text() {
        let item = r#"{
            "webPublicationDate": "2023-05-01T09:07:00Z",
            "sectionName": 20230501,
            "webTitle": true
        }"#;
        let result = parse(payload(item).as_bytes()).unwrap();
        let article = &result.articles[0];
        assert_eq!(article.category, "20230501");
        assert_eq!(article.title, "true");
    }

    #[test]
    fn test_numeric_timestamp_coerces_then_skips_the_item() {
        // The stamp survives deserialization as "20230501", which is then
        // too short to slice, so the item is skipped rather than the
        // payload failing.
        let item = r#"{"webPublicationDate": 20230501}"#;
        let result = parse(payload(item).as_bytes()).unwrap();
        assert_eq!(result.skipped, 1);
        assert!(result.articles.is_empty());
    }

    #[test]
    fn test_wrongly_typed_structure_is_malformed() {
        let bad_tags = r#"{"webPublicationDate": "2023-05-01T09:07:00Z", "tags": "none"}"#;
        assert!(parse(payload(bad_tags).as_bytes()).is_err());

        let bad_fields = r#"{"webPublicationDate": "2023-05-01T09:07:00Z", "fields": 3}"#;
        assert!(parse(payload(bad_fields).as_bytes()).is_err());
    }

    #[test]
    fn test_split_timestamp_round_trip() {
        assert_eq!(
            split_timestamp("2023-05-01T09:07:00Z"),
            Some(("2023-05-01".to_string(), "09:07".to_string()))
        );
    }

    #[test]
    fn test_split_timestamp_rejects_short_inputs() {
        assert_eq!(split_timestamp(""), None);
        assert_eq!(split_timestamp("2023-05-01"), None);
        assert_eq!(split_timestamp("2023-05-01T09:0"), None);
    }

    #[test]
    fn test_split_timestamp_minimum_length_input() {
        // Exactly sixteen bytes is enough for date plus minutes.
        assert_eq!(
            split_timestamp("2023-05-01T09:07"),
            Some(("2023-05-01".to_string(), "09:07".to_string()))
        );
    }
}
