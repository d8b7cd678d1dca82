//! HTML preview output
//!
//! Serializes the live fragment to an HTML string so a built tree can be
//! displayed and inspected. Class attributes applied by context styling show
//! up here, as does the reserved context-token attribute.
//!
//! # Library Choice
//!
//! We use `html5ever`'s serializer over the `markup5ever_rcdom` tree (the
//! same tree type the codec builds), so preview output needs no conversion
//! step. Serialize-only: HTML is a view of the fragment, not a source format
//! for the codec.

use crate::context::ContextStore;
use crate::dom;
use crate::error::ConvertError;
use crate::format::Format;
use html5ever::{serialize, serialize::SerializeOpts, serialize::TraversalScope};
use markup5ever_rcdom::{Handle, SerializableHandle};

/// Serialize each child of the fragment to HTML, in order
pub fn serialize_to_html(fragment: &Handle) -> Result<String, ConvertError> {
    let mut output = Vec::new();

    // IncludeNode serializes the element itself, not just its children.
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in dom::children(fragment) {
        let serializable = SerializableHandle::from(child);
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            ConvertError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
    }

    String::from_utf8(output)
        .map_err(|e| ConvertError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}

/// Format implementation for the HTML preview
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML preview of the live fragment"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, fragment: &Handle, _store: &ContextStore) -> Result<String, ConvertError> {
        serialize_to_html(fragment)
    }
}
