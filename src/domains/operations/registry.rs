//! Operation Registry - lookup of operation definitions.
//!
//! Single source of truth for the set of operations. The services, the
//! gateway routing table and role selection all resolve operations here
//! instead of repeating per-operation code.

use super::definitions::{OperationDef, OperationKind};

/// Registry of all arithmetic operations.
pub struct OperationRegistry;

impl OperationRegistry {
    /// All operation definitions.
    pub fn all() -> impl Iterator<Item = &'static OperationDef> {
        OperationKind::ALL.into_iter().map(OperationKind::def)
    }

    /// Look up an operation by its URL path segment (`"add"`).
    pub fn by_path(path: &str) -> Option<&'static OperationDef> {
        Self::all().find(|def| def.path == path)
    }

    /// Look up an operation by path segment or result label.
    ///
    /// Matching is case-insensitive, so `"ADD"`, `"add"` and `"addition"`
    /// all resolve to the same definition.
    pub fn lookup(name: &str) -> Option<&'static OperationDef> {
        let name = name.trim().to_lowercase();
        Self::all().find(|def| def.path == name || def.label == name)
    }

    /// Get all operation paths.
    pub fn paths() -> Vec<&'static str> {
        Self::all().map(|def| def.path).collect()
    }
}
