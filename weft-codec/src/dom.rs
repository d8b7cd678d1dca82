//! Minimal live-tree capabilities over the rcdom node type
//!
//! The codec treats the document tree as an external structure with a small
//! capability set: create element/text/fragment nodes, append children, read
//! and write attributes, and inspect node kind, tag name and text value.
//! Everything here is a thin layer over `markup5ever_rcdom`; the conversion
//! walks never touch `NodeData` directly.

use html5ever::{ns, Attribute, LocalName, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Create an element node with no attributes
pub fn create_element(tag: &str) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(Vec::new()),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
pub fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Create a fragment: an ordered collection of siblings with no containing
/// element. Backed by a document node, which serializes as its children only.
pub fn create_fragment() -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Document,
    })
}

/// Append a child to a parent node
pub fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Snapshot of a node's ordered child list
pub fn children(node: &Handle) -> Vec<Handle> {
    node.children.borrow().clone()
}

/// Tag name of an element node, as created
pub fn tag_name(node: &Handle) -> Option<String> {
    match node.data {
        NodeData::Element { ref name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// Text value of a text node
pub fn text_value(node: &Handle) -> Option<String> {
    match node.data {
        NodeData::Text { ref contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

pub fn is_element(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

pub fn is_text(node: &Handle) -> bool {
    matches!(node.data, NodeData::Text { .. })
}

/// Read an attribute value from an element node
pub fn get_attribute(element: &Handle, name: &str) -> Option<String> {
    match element.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Set an attribute on an element node, replacing any existing value.
/// New attributes keep their insertion order.
pub fn set_attribute(element: &Handle, name: &str, value: &str) {
    if let NodeData::Element { ref attrs, .. } = element.data {
        let mut attrs = attrs.borrow_mut();
        if let Some(existing) = attrs.iter_mut().find(|attr| &*attr.name.local == name) {
            existing.value = value.to_string().into();
            return;
        }
        attrs.push(Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        });
    }
}

/// Attribute names of an element in insertion order
pub fn attribute_names(element: &Handle) -> Vec<String> {
    match element.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .map(|attr| attr.name.local.to_string())
            .collect(),
        _ => Vec::new(),
    }
}
