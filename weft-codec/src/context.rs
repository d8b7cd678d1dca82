//! Out-of-band context registry
//!
//! Elements in the live tree never carry their context payload inline. The
//! deserializer deposits the payload here and stamps the element with the
//! returned token; the serializer later reads the token back off the element
//! and looks the payload up again.
//!
//! The store is append-only and process-scoped: tokens are never reused and
//! payloads are never evicted. One document's worth of contexts per run is
//! the intended working set.

use serde_json::Value;
use std::collections::HashMap;

/// Reserved element attribute holding a context token.
///
/// Read and written by both conversion directions. Input descriptors must not
/// carry this attribute name themselves.
pub const CONTEXT_ATTR: &str = "data-wf-context";

const TOKEN_PREFIX: &str = "wf";

/// Keyed registry of context payloads.
///
/// Elements hold only the token (a non-owning back-reference); the store owns
/// every payload exclusively.
#[derive(Debug, Default)]
pub struct ContextStore {
    entries: HashMap<String, Value>,
    counter: u64,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a payload under a freshly minted token.
    ///
    /// Tokens are `"wf<n>"` with a monotonic counter, unique for the lifetime
    /// of the store.
    pub fn add(&mut self, payload: Value) -> String {
        self.counter += 1;
        let token = format!("{TOKEN_PREFIX}{}", self.counter);
        self.entries.insert(token.clone(), payload);
        token
    }

    /// Look up a payload previously inserted under `token`.
    ///
    /// Returns `None` only for tokens this store never issued, which is a
    /// caller contract violation rather than a runtime failure case.
    pub fn get(&self, token: &str) -> Option<&Value> {
        self.entries.get(token)
    }

    /// Number of stored payloads.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
