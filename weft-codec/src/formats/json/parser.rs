//! JSON import (schema → fragment)
//!
//! Walks a descriptor sequence and builds the equivalent live fragment,
//! resolving per-mode context styling and registering context payloads in the
//! store as it goes.

use crate::context::{ContextStore, CONTEXT_ATTR};
use crate::dom;
use crate::error::ConvertError;
use crate::schema::{Document, NodeDescriptor};
use markup5ever_rcdom::Handle;
use serde_json::Value;

/// Decode a JSON source string into the typed document envelope.
///
/// Structural errors (malformed JSON, a `content` field that is not a
/// sequence) are fatal; the walk itself never sees a malformed shape.
pub fn parse_document(source: &str) -> Result<Document, ConvertError> {
    serde_json::from_str(source)
        .map_err(|e| ConvertError::ParseError(format!("JSON decoding error: {e}")))
}

/// Build a fragment from an ordered descriptor sequence.
///
/// `mode` is the ambient presentation mode used to resolve which style
/// variant of a `context` payload applies. Each payload is registered whole
/// in `store` and its token stamped on the element under [`CONTEXT_ATTR`].
pub fn build_fragment(descriptors: &[NodeDescriptor], mode: &str, store: &mut ContextStore) -> Handle {
    let fragment = dom::create_fragment();
    convert(descriptors, &fragment, mode, store);
    fragment
}

fn convert(descriptors: &[NodeDescriptor], parent: &Handle, mode: &str, store: &mut ContextStore) {
    for item in descriptors {
        // Only tagged descriptors produce nodes. Bare text runs are defined
        // for export but have no import mapping; they are skipped.
        let Some(tag) = &item.tag else {
            continue;
        };

        let element = dom::create_element(tag);

        if let Some(text) = &item.string {
            dom::append(&element, dom::create_text(text));
        }

        if let Some(content) = &item.content {
            convert(content, &element, mode, store);
        }

        if tag == "img" && item.src.is_some() {
            apply_image_attributes(&element, item);
        }

        if let Some(context) = &item.context {
            apply_mode_styles(&element, context, mode);

            // The whole payload is stored, not just the resolved mode entry.
            let token = store.add(context.clone());
            dom::set_attribute(&element, CONTEXT_ATTR, &token);
        }

        dom::append(parent, element);
    }
}

/// Image attributes go on in fixed order: src first, then alt, width, height,
/// regardless of their order in the descriptor.
fn apply_image_attributes(element: &Handle, item: &NodeDescriptor) {
    if let Some(src) = &item.src {
        dom::set_attribute(element, "src", src);
    }
    if let Some(alt) = &item.alt {
        dom::set_attribute(element, "alt", alt);
    }
    if let Some(width) = &item.width {
        dom::set_attribute(element, "width", width);
    }
    if let Some(height) = &item.height {
        dom::set_attribute(element, "height", height);
    }
}

/// Resolve the `style` directive of the payload entry matching `mode` and
/// append its class tokens to the element's class attribute. A single string
/// normalizes to a one-element token list. Entries for other modes are left
/// uninterpreted.
fn apply_mode_styles(element: &Handle, context: &Value, mode: &str) {
    let Some(style) = context.get(mode).and_then(|entry| entry.get("style")) else {
        return;
    };

    let mut class = dom::get_attribute(element, "class").unwrap_or_default();
    match style {
        Value::String(name) => {
            class.push(' ');
            class.push_str(name);
        }
        Value::Array(names) => {
            for name in names {
                if let Value::String(name) = name {
                    class.push(' ');
                    class.push_str(name);
                }
            }
        }
        _ => {}
    }

    // Starting from an empty class attribute leaves one superfluous
    // prefix space.
    let class = class.strip_prefix(' ').unwrap_or(&class);
    if !class.is_empty() {
        dom::set_attribute(element, "class", class);
    }
}
