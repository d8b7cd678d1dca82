//! Compact JSON document format
//!
//! Bidirectional conversion between the wire schema and the live fragment.
//!
//! # Schema
//!
//! A document is `{"content": [<descriptor>, ...]}` where each descriptor is
//! either a tagged element or a bare text run:
//!
//! | Descriptor                        | Fragment shape                          |
//! |-----------------------------------|-----------------------------------------|
//! | `{tag, string}`                   | element with a single text child        |
//! | `{tag, content: [...]}`           | element with nested children            |
//! | `{tag}`                           | childless element (e.g. a void `<img>`) |
//! | `{tag: "img", src, alt?, ...}`    | image element with attributes           |
//! | `{tag, context: {...}}`           | element with out-of-band context        |
//! | `{string}`                        | text node (only nested in `content`)    |
//!
//! Import resolves per-mode `context` styling into the element's class
//! attribute and registers the whole payload in the [`ContextStore`]; export
//! reads payloads back through the token stamped on the element.
//!
//! # Output assembly
//!
//! The text form is assembled by direct string concatenation rather than a
//! generic serializer, because embedded context payloads are rendered through
//! the value formatter in [`text`]. By default strings are emitted without
//! escaping, matching the legacy output byte-for-byte; see [`TextOptions`].

pub mod parser;
pub mod serializer;
pub mod text;

use crate::context::ContextStore;
use crate::error::ConvertError;
use crate::format::Format;
use markup5ever_rcdom::Handle;

pub use parser::{build_fragment, parse_document};
pub use serializer::{fragment_to_document, serialize_fragment};
pub use text::TextOptions;

/// Format implementation for the compact JSON document schema
#[derive(Debug, Clone, Default)]
pub struct JsonFormat {
    options: TextOptions,
}

impl JsonFormat {
    pub fn new(options: TextOptions) -> Self {
        Self { options }
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Compact JSON document schema"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(
        &self,
        source: &str,
        mode: &str,
        store: &mut ContextStore,
    ) -> Result<Handle, ConvertError> {
        let document = parse_document(source)?;
        Ok(build_fragment(&document.content, mode, store))
    }

    fn serialize(&self, fragment: &Handle, store: &ContextStore) -> Result<String, ConvertError> {
        Ok(serialize_fragment(fragment, store, &self.options))
    }
}
