//! Wire schema for the compact JSON document representation
//!
//! A document is an envelope holding an ordered descriptor sequence. Each
//! descriptor is either a tagged element or a bare text run; which optional
//! fields are populated decides the variant, mirroring the property-presence
//! branching of the wire format.

use serde::Deserialize;
use serde_json::Value;

/// Top-level document envelope: `{"content": [...]}`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Document {
    pub content: Vec<NodeDescriptor>,
}

impl Document {
    pub fn new(content: Vec<NodeDescriptor>) -> Self {
        Document { content }
    }
}

/// One entry in a descriptor sequence.
///
/// Population rules:
/// - `tag` present: an element. `string` models a leaf element with a single
///   text run; `content` models nested children. Raw input carries at most
///   one of the two, but `content` with no `string` (a pure container) is
///   accepted as-is.
/// - `tag` absent, `string` present: a text run. Text runs only appear nested
///   inside `content`; empty text is never represented.
/// - `src`/`alt`/`width`/`height` are only meaningful when `tag == "img"`.
/// - `context` is an opaque payload attached out-of-band to the element.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NodeDescriptor {
    pub tag: Option<String>,
    pub string: Option<String>,
    pub content: Option<Vec<NodeDescriptor>>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub context: Option<Value>,
}

impl NodeDescriptor {
    /// Descriptor for an element with the given tag
    pub fn element(tag: impl Into<String>) -> Self {
        NodeDescriptor {
            tag: Some(tag.into()),
            ..Default::default()
        }
    }

    /// Descriptor for a bare text run
    pub fn text(value: impl Into<String>) -> Self {
        NodeDescriptor {
            string: Some(value.into()),
            ..Default::default()
        }
    }

    /// Whether this descriptor carries a tag (i.e. models an element)
    pub fn is_element(&self) -> bool {
        self.tag.is_some()
    }
}
