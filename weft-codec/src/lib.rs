//! Bidirectional JSON/DOM content codec with out-of-band context metadata
//!
//!     This crate converts between a compact JSON document schema and a live
//!     DOM fragment, in both directions, and manages the "context" metadata
//!     that rides alongside elements without being stored inline in the tree.
//!
//! Architecture
//!
//!     The two conversion directions are independent tree walks over a shared
//!     vocabulary: the typed descriptor schema (./schema.rs) on the wire side
//!     and a minimal tree capability set (./dom.rs) on the document side.
//!     Context payloads never travel inside the tree: import deposits each
//!     payload in the ContextStore (./context.rs) and stamps the element with
//!     the returned token; export reads the token back off the element and
//!     resolves it against the same store. The store is the only stateful
//!     component; both walks are pure transformations around it.
//!
//!     This is a pure lib: it powers the weft CLI but is shell agnostic, that
//!     is, no code here prints, reads env vars or touches the filesystem.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── context.rs              # Out-of-band context registry
//!     ├── dom.rs                  # Live-tree capabilities (rcdom)
//!     ├── schema.rs               # Typed wire schema
//!     ├── formats
//!     │   ├── json
//!     │   │   ├── parser.rs       # schema → fragment
//!     │   │   ├── serializer.rs   # fragment → schema (object + text forms)
//!     │   │   ├── text.rs         # value → JSON text formatter
//!     │   │   └── mod.rs
//!     │   └── html
//!     │       └── mod.rs          # fragment → HTML preview
//!     └── lib.rs
//!
//! Presentation modes
//!
//!     A context payload may carry one style variant per presentation mode
//!     (e.g. "page" vs "teaser"). The active mode is an explicit parameter of
//!     the import entry points, never ambient state, so the same process can
//!     run imports under different modes back to back.
//!
//! Library Choices
//!
//!     The live tree is the `markup5ever_rcdom` DOM built through `html5ever`
//!     types, which also gives us browser-grade HTML serialization of the
//!     fragment for free. The wire schema is decoded with `serde_json` into
//!     typed descriptors, so structural errors surface at the decoding
//!     boundary and the walks never see malformed shapes. The JSON text
//!     output is deliberately NOT produced by a generic serializer, see
//!     formats/json/mod.rs.

pub mod context;
pub mod dom;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod schema;

pub use context::{ContextStore, CONTEXT_ATTR};
pub use error::ConvertError;
pub use format::Format;
pub use formats::{HtmlFormat, JsonFormat, TextOptions};
pub use registry::FormatRegistry;

use markup5ever_rcdom::Handle;

/// Builds a live fragment from a decoded document.
///
/// `mode` selects which style variant of each context payload applies;
/// payloads are registered in `store` and linked from their elements by
/// token.
pub fn to_fragment(
    document: &schema::Document,
    mode: &str,
    store: &mut ContextStore,
) -> Handle {
    formats::json::build_fragment(&document.content, mode, store)
}

/// Reads a live fragment back into the object form.
///
/// This is the counterpart of [`to_fragment`]: context payloads are resolved
/// through `store` and attached to their descriptors.
pub fn from_fragment(fragment: &Handle, store: &ContextStore) -> schema::Document {
    formats::json::fragment_to_document(fragment, store)
}
