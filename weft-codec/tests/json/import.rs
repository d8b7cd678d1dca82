//! Import tests for the JSON format (source text → fragment)
//!
//! These go through the Format trait the way the CLI does, from raw JSON
//! source all the way to a live fragment.

use weft_codec::dom;
use weft_codec::format::Format;
use weft_codec::formats::json::JsonFormat;
use weft_codec::{ContextStore, ConvertError, CONTEXT_ATTR};

#[test]
fn test_import_builds_sibling_fragment() {
    let source = r#"{
        "content": [
            { "tag": "h1", "string": "Title" },
            { "tag": "p", "string": "Body text." }
        ]
    }"#;

    let mut store = ContextStore::new();
    let fragment = JsonFormat::default()
        .parse(source, "page", &mut store)
        .unwrap();

    let kids = dom::children(&fragment);
    assert_eq!(kids.len(), 2);
    assert_eq!(dom::tag_name(&kids[0]), Some("h1".to_string()));
    assert_eq!(dom::tag_name(&kids[1]), Some("p".to_string()));
}

#[test]
fn test_import_applies_mode_styling() {
    let source = r#"{
        "content": [
            {
                "tag": "p",
                "string": "Featured paragraph",
                "context": {
                    "page": { "style": "featured" },
                    "teaser": { "style": ["compact", "muted"] }
                }
            }
        ]
    }"#;

    let mut page_store = ContextStore::new();
    let page = JsonFormat::default()
        .parse(source, "page", &mut page_store)
        .unwrap();
    let p = &dom::children(&page)[0];
    assert_eq!(dom::get_attribute(p, "class"), Some("featured".to_string()));

    let mut teaser_store = ContextStore::new();
    let teaser = JsonFormat::default()
        .parse(source, "teaser", &mut teaser_store)
        .unwrap();
    let p = &dom::children(&teaser)[0];
    assert_eq!(
        dom::get_attribute(p, "class"),
        Some("compact muted".to_string())
    );
}

#[test]
fn test_import_registers_whole_payload_under_any_mode() {
    let source = r#"{
        "content": [
            { "tag": "p", "string": "x", "context": { "teaser": { "style": "compact" } } }
        ]
    }"#;

    let mut store = ContextStore::new();
    let fragment = JsonFormat::default()
        .parse(source, "page", &mut store)
        .unwrap();

    let p = &dom::children(&fragment)[0];
    let token = dom::get_attribute(p, CONTEXT_ATTR).unwrap();
    let payload = store.get(&token).unwrap();
    assert_eq!(payload["teaser"]["style"], serde_json::json!("compact"));
}

#[test]
fn test_import_accepts_multiple_documents_per_store() {
    // Tokens stay unique across independent imports into the same store.
    let source = r#"{"content": [{ "tag": "p", "string": "x", "context": { "page": {} } }]}"#;
    let format = JsonFormat::default();
    let mut store = ContextStore::new();

    let first = format.parse(source, "page", &mut store).unwrap();
    let second = format.parse(source, "page", &mut store).unwrap();

    let token_a = dom::get_attribute(&dom::children(&first)[0], CONTEXT_ATTR).unwrap();
    let token_b = dom::get_attribute(&dom::children(&second)[0], CONTEXT_ATTR).unwrap();
    assert_ne!(token_a, token_b);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_import_rejects_malformed_source() {
    let mut store = ContextStore::new();
    let result = JsonFormat::default().parse("{not json", "page", &mut store);
    assert!(matches!(result, Err(ConvertError::ParseError(_))));
}

#[test]
fn test_import_rejects_non_sequence_content() {
    let mut store = ContextStore::new();
    let result =
        JsonFormat::default().parse(r#"{"content": "oops"}"#, "page", &mut store);
    assert!(matches!(result, Err(ConvertError::ParseError(_))));
}
