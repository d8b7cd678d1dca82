//! JSON export (fragment → schema)
//!
//! One walk over the live tree, two equivalent outputs: the in-memory object
//! form ([`fragment_to_document`]) and the JSON text form
//! ([`serialize_fragment`]), which is assembled from the object form by
//! direct string concatenation so embedded context payloads go through the
//! value formatter.

use super::text::{quote, render_value, TextOptions};
use crate::context::{ContextStore, CONTEXT_ATTR};
use crate::dom;
use crate::schema::{Document, NodeDescriptor};
use markup5ever_rcdom::Handle;

/// Convert a fragment into the object form.
///
/// Children of the fragment become the envelope's `content` sequence.
pub fn fragment_to_document(fragment: &Handle, store: &ContextStore) -> Document {
    Document {
        content: descriptors_for(&dom::children(fragment), store),
    }
}

/// Convert a fragment into the JSON text form, wrapped as `{"content": [...]}`.
pub fn serialize_fragment(fragment: &Handle, store: &ContextStore, options: &TextOptions) -> String {
    document_to_text(&fragment_to_document(fragment, store), options)
}

/// Render an object-form document as JSON text.
pub fn document_to_text(document: &Document, options: &TextOptions) -> String {
    format!(
        "{{\"content\":{}}}",
        render_descriptor_list(&document.content, options)
    )
}

fn descriptors_for(nodes: &[Handle], store: &ContextStore) -> Vec<NodeDescriptor> {
    let mut descriptors = Vec::new();

    for node in nodes {
        if dom::is_element(node) {
            descriptors.push(element_descriptor(node, store));
        } else if let Some(value) = dom::text_value(node) {
            // Empty text nodes are semantically absent.
            if !value.is_empty() {
                descriptors.push(NodeDescriptor::text(value));
            }
        }
        // Other node kinds are outside the schema.
    }

    descriptors
}

fn element_descriptor(node: &Handle, store: &ContextStore) -> NodeDescriptor {
    let tag = dom::tag_name(node).unwrap_or_default().to_lowercase();
    let mut descriptor = NodeDescriptor::element(tag);

    let children = dom::children(node);
    match children.as_slice() {
        // No children: a void element or an element without text.
        [] => {}
        [only] => {
            if dom::is_text(only) {
                let value = dom::text_value(only).unwrap_or_default();
                // A single empty text child is equivalent to no children.
                if !value.is_empty() {
                    descriptor.string = Some(value);
                }
            } else if dom::is_element(only) {
                descriptor.content = Some(descriptors_for(&children, store));
            }
        }
        _ => {
            descriptor.content = Some(descriptors_for(&children, store));
        }
    }

    if let Some(token) = dom::get_attribute(node, CONTEXT_ATTR) {
        descriptor.context = store.get(&token).cloned();
    }

    descriptor
}

fn render_descriptor_list(items: &[NodeDescriptor], options: &TextOptions) -> String {
    let rendered: Vec<String> = items
        .iter()
        .map(|item| render_descriptor(item, options))
        .collect();
    format!("[{}]", rendered.join(","))
}

fn render_descriptor(item: &NodeDescriptor, options: &TextOptions) -> String {
    let mut fields = Vec::new();

    if let Some(tag) = &item.tag {
        fields.push(format!("\"tag\":{}", quote(tag, options)));
    }
    if let Some(text) = &item.string {
        fields.push(format!("\"string\":{}", quote(text, options)));
    }
    if let Some(content) = &item.content {
        fields.push(format!(
            "\"content\":{}",
            render_descriptor_list(content, options)
        ));
    }
    if let Some(context) = &item.context {
        fields.push(format!("\"context\":{}", render_value(context, options)));
    }

    format!("{{{}}}", fields.join(","))
}
