//! Export tests for the JSON format (fragment → text form)
//!
//! The text form is checked byte-for-byte: its assembly is hand-rolled and
//! exactness is the point.

use insta::assert_snapshot;
use weft_codec::format::Format;
use weft_codec::formats::json::{JsonFormat, TextOptions};
use weft_codec::{from_fragment, ContextStore};

/// Import a JSON source and export it again through the given options
fn roundtrip_text(source: &str, mode: &str, options: TextOptions) -> String {
    let mut store = ContextStore::new();
    let fragment = JsonFormat::default()
        .parse(source, mode, &mut store)
        .unwrap();
    JsonFormat::new(options)
        .serialize(&fragment, &store)
        .unwrap()
}

#[test]
fn test_export_simple_document() {
    let json = roundtrip_text(
        r#"{"content": [
            { "tag": "p", "string": "hi" },
            { "tag": "div", "content": [{ "tag": "span", "string": "x" }] }
        ]}"#,
        "page",
        TextOptions::default(),
    );

    assert_snapshot!(
        json,
        @r#"{"content":[{"tag":"p","string":"hi"},{"tag":"div","content":[{"tag":"span","string":"x"}]}]}"#
    );
}

#[test]
fn test_export_embeds_context_payload() {
    let json = roundtrip_text(
        r#"{"content": [
            { "tag": "p", "string": "styled", "context": { "page": { "style": "featured" } } }
        ]}"#,
        "page",
        TextOptions::default(),
    );

    assert_snapshot!(
        json,
        @r#"{"content":[{"tag":"p","string":"styled","context":{"page":{"style":"featured"}}}]}"#
    );
}

#[test]
fn test_export_empty_fragment_still_wraps_content() {
    let json = roundtrip_text(r#"{"content": []}"#, "page", TextOptions::default());
    assert_snapshot!(json, @r#"{"content":[]}"#);
}

#[test]
fn test_export_escaped_output_is_strict_json() {
    let source = r#"{"content": [{ "tag": "p", "string": "line one\nline \"two\"" }]}"#;
    let json = roundtrip_text(source, "page", TextOptions::escaped());

    let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        reparsed["content"][0]["string"],
        serde_json::json!("line one\nline \"two\"")
    );
}

#[test]
fn test_object_form_matches_input_without_context() {
    // Reserializing reproduces the input descriptors verbatim when none of
    // them carried a context payload.
    let source = r#"{"content": [
        { "tag": "p", "string": "hi" },
        { "tag": "div", "content": [{ "tag": "span", "string": "x" }] }
    ]}"#;

    let mut store = ContextStore::new();
    let format = JsonFormat::default();
    let fragment = format.parse(source, "page", &mut store).unwrap();

    let document = from_fragment(&fragment, &store);
    let expected = weft_codec::formats::json::parse_document(source).unwrap();
    assert_eq!(document, expected);
}
