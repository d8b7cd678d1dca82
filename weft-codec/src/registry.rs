//! Format registry for format discovery and selection
//!
//! Provides a centralized registry for all available formats. Formats can be
//! registered and retrieved by name, or detected from a file extension.

use crate::context::ContextStore;
use crate::error::ConvertError;
use crate::format::Format;
use markup5ever_rcdom::Handle;
use std::collections::HashMap;

/// Registry of document formats
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, ConvertError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| ConvertError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for format in self.formats.values() {
            if format.file_extensions().contains(&extension) {
                return Some(format.name().to_string());
            }
        }

        None
    }

    /// Parse source text using the specified format
    pub fn parse(
        &self,
        source: &str,
        format: &str,
        mode: &str,
        store: &mut ContextStore,
    ) -> Result<Handle, ConvertError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(ConvertError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source, mode, store)
    }

    /// Serialize a fragment using the specified format
    pub fn serialize(
        &self,
        fragment: &Handle,
        format: &str,
        store: &ContextStore,
    ) -> Result<String, ConvertError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(ConvertError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        fmt.serialize(fragment, store)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::json::JsonFormat::default());
        registry.register(crate::formats::html::HtmlFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
