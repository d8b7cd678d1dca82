//! Round-trip property: object → tree → object → tree yields the same tree.
//!
//! Token values are allocation-dependent, so trees are compared by structure,
//! attributes and *resolved* context payloads rather than by raw token.

use markup5ever_rcdom::Handle;
use proptest::prelude::*;
use serde_json::json;
use weft_codec::schema::{Document, NodeDescriptor};
use weft_codec::{dom, from_fragment, to_fragment, ContextStore, CONTEXT_ATTR};

fn assert_nodes_equivalent(a: &Handle, b: &Handle, store: &ContextStore) {
    assert_eq!(dom::is_element(a), dom::is_element(b));

    if dom::is_element(a) {
        assert_eq!(dom::tag_name(a), dom::tag_name(b));
        assert_eq!(
            dom::get_attribute(a, "class"),
            dom::get_attribute(b, "class")
        );

        let payload_a = dom::get_attribute(a, CONTEXT_ATTR).map(|t| store.get(&t).cloned());
        let payload_b = dom::get_attribute(b, CONTEXT_ATTR).map(|t| store.get(&t).cloned());
        assert_eq!(payload_a, payload_b);
    } else {
        assert_eq!(dom::text_value(a), dom::text_value(b));
    }

    let kids_a = dom::children(a);
    let kids_b = dom::children(b);
    assert_eq!(kids_a.len(), kids_b.len());
    for (child_a, child_b) in kids_a.iter().zip(kids_b.iter()) {
        assert_nodes_equivalent(child_a, child_b, store);
    }
}

fn tag_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["p", "div", "span", "em", "li"]).prop_map(str::to_string)
}

fn context_strategy() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(|name| json!({ "page": { "style": name } })),
        prop::collection::vec("[a-z]{1,6}", 1..3)
            .prop_map(|names| json!({ "page": { "style": names } })),
        "[a-z]{1,6}".prop_map(|name| json!({ "teaser": { "style": name } })),
    ]
}

fn descriptor_strategy() -> impl Strategy<Value = NodeDescriptor> {
    let leaf = (
        tag_strategy(),
        prop::option::of("[a-z ]{1,10}"),
        prop::option::of(context_strategy()),
    )
        .prop_map(|(tag, string, context)| NodeDescriptor {
            tag: Some(tag),
            string,
            context,
            ..Default::default()
        });

    leaf.prop_recursive(3, 24, 4, |inner| {
        let entry = prop_oneof![
            4 => inner,
            // Bare text runs are legal inside content (import skips them).
            1 => "[a-z]{1,8}".prop_map(|text| NodeDescriptor::text(text)),
        ];
        (
            tag_strategy(),
            prop::collection::vec(entry, 1..4),
            prop::option::of(context_strategy()),
        )
            .prop_map(|(tag, content, context)| NodeDescriptor {
                tag: Some(tag),
                content: Some(content),
                context,
                ..Default::default()
            })
    })
}

proptest! {
    #[test]
    fn roundtrip_reproduces_the_tree(descriptors in prop::collection::vec(descriptor_strategy(), 0..5)) {
        let document = Document::new(descriptors);
        let mut store = ContextStore::new();

        let first = to_fragment(&document, "page", &mut store);
        let reread = from_fragment(&first, &store);
        let second = to_fragment(&reread, "page", &mut store);

        assert_nodes_equivalent(&first, &second, &store);
    }
}

#[test]
fn test_concrete_roundtrip_without_context() {
    let document = Document::new(vec![
        NodeDescriptor {
            tag: Some("p".to_string()),
            string: Some("hi".to_string()),
            ..Default::default()
        },
        NodeDescriptor {
            tag: Some("div".to_string()),
            content: Some(vec![NodeDescriptor {
                tag: Some("span".to_string()),
                string: Some("x".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        },
    ]);

    let mut store = ContextStore::new();
    let fragment = to_fragment(&document, "page", &mut store);

    // Two siblings: <p>hi</p> and <div><span>x</span></div>.
    let kids = dom::children(&fragment);
    assert_eq!(kids.len(), 2);
    assert_eq!(dom::tag_name(&kids[0]), Some("p".to_string()));
    let div_kids = dom::children(&kids[1]);
    assert_eq!(div_kids.len(), 1);
    assert_eq!(dom::tag_name(&div_kids[0]), Some("span".to_string()));
    assert_eq!(
        dom::text_value(&dom::children(&div_kids[0])[0]),
        Some("x".to_string())
    );

    // No descriptor carried context, so the output matches the input exactly.
    assert_eq!(from_fragment(&fragment, &store), document);
}

#[test]
fn test_roundtrip_preserves_context_payloads() {
    let payload = json!({ "page": { "style": "featured" }, "note": "kept" });
    let document = Document::new(vec![NodeDescriptor {
        tag: Some("p".to_string()),
        string: Some("styled".to_string()),
        context: Some(payload.clone()),
        ..Default::default()
    }]);

    let mut store = ContextStore::new();
    let fragment = to_fragment(&document, "page", &mut store);
    let reread = from_fragment(&fragment, &store);

    assert_eq!(reread.content[0].context, Some(payload));
}
