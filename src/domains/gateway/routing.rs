//! Static routing table: operation -> backend base URL.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domains::operations::{OperationKind, OperationRegistry};

/// Backend base URL per operation.
///
/// Built once at startup; every operation always has an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingTable {
    routes: BTreeMap<OperationKind, String>,
}

impl Default for RoutingTable {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl RoutingTable {
    /// Build the table, reading each backend URL through `lookup` and falling
    /// back to the operation's local default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let routes = OperationRegistry::all()
            .map(|def| {
                let url = lookup(def.url_env)
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| def.default_url());
                (def.kind, url.trim_end_matches('/').to_string())
            })
            .collect();
        Self { routes }
    }

    /// Override the base URL of one operation.
    pub fn with_route(mut self, kind: OperationKind, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.routes
            .insert(kind, base_url.trim_end_matches('/').to_string());
        self
    }

    /// Base URL of the backend serving `kind`.
    pub fn base_url(&self, kind: OperationKind) -> &str {
        // from_lookup fills every kind
        self.routes.get(&kind).map(String::as_str).unwrap_or_default()
    }

    /// Full endpoint URL for `kind`, e.g. `http://localhost:3001/add`.
    pub fn endpoint(&self, kind: OperationKind) -> String {
        format!("{}/{}", self.base_url(kind), kind.path())
    }

    /// Iterate over `(operation, base URL)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (OperationKind, &str)> {
        self.routes.iter().map(|(kind, url)| (*kind, url.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let table = RoutingTable::default();
        assert_eq!(
            table.endpoint(OperationKind::Addition),
            "http://localhost:3001/add"
        );
        assert_eq!(
            table.endpoint(OperationKind::Division),
            "http://localhost:3004/divide"
        );
        assert_eq!(table.iter().count(), 4);
    }

    #[test]
    fn test_lookup_overrides_and_trailing_slash() {
        let table = RoutingTable::from_lookup(|key| match key {
            "MUL_SERVICE_URL" => Some("http://multiply-service:3003/".to_string()),
            "SUB_SERVICE_URL" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(
            table.endpoint(OperationKind::Multiplication),
            "http://multiply-service:3003/multiply"
        );
        assert_eq!(
            table.base_url(OperationKind::Subtraction),
            "http://localhost:3002"
        );
    }

    #[test]
    fn test_with_route() {
        let table = RoutingTable::default().with_route(OperationKind::Addition, "http://x:1/");
        assert_eq!(table.base_url(OperationKind::Addition), "http://x:1");
    }
}
