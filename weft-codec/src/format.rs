//! Format trait definition
//!
//! A format converts between a textual document representation and the live
//! fragment. Parsing needs the ambient presentation mode (to resolve context
//! styling) and a mutable context store (to register payloads); serialization
//! only reads the store back.

use crate::context::ContextStore;
use crate::error::ConvertError;
use markup5ever_rcdom::Handle;

/// Trait for document formats
///
/// Implementors provide conversion between a string representation and a live
/// fragment. Formats can support parsing, serialization, or both.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → fragment)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (fragment → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a live fragment.
    ///
    /// `mode` is the ambient presentation mode used to resolve per-mode
    /// context styling; context payloads are registered in `store`.
    fn parse(
        &self,
        _source: &str,
        _mode: &str,
        _store: &mut ContextStore,
    ) -> Result<Handle, ConvertError> {
        Err(ConvertError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a fragment into source text, reading context payloads back
    /// from `store`.
    fn serialize(&self, _fragment: &Handle, _store: &ContextStore) -> Result<String, ConvertError> {
        Err(ConvertError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
