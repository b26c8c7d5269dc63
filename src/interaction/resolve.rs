//! Incremental name search over the catalog-backed name universe.

use std::sync::Arc;

use tracing::debug;

use crate::dataset::ReferenceStore;

/// Candidate cap for incremental-search inputs.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 5;

/// Case-insensitive substring search over the unified display names.
/// Pure view over the store; resolving has no side effects.
pub struct NameResolver {
    store: Arc<ReferenceStore>,
}

impl NameResolver {
    pub fn new(store: Arc<ReferenceStore>) -> Self {
        Self { store }
    }

    /// Up to `limit` display names containing `query` (ignoring case),
    /// lexicographically ascending. An empty query yields no candidates.
    pub fn resolve(&self, query: &str, limit: usize) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        // The universe is already sorted and deduplicated, so filtering
        // preserves ascending order.
        let candidates: Vec<String> = self
            .store
            .name_universe()
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect();
        debug!(query, count = candidates.len(), "candidates_resolved");
        candidates
    }

    /// [`resolve`](Self::resolve) with the default candidate cap.
    pub fn candidates(&self, query: &str) -> Vec<String> {
        self.resolve(query, DEFAULT_CANDIDATE_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn store_with_names(names: &[&str]) -> Arc<ReferenceStore> {
        let catalog: BTreeMap<String, String> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (format!("D{i}"), name.to_string()))
            .collect();
        Arc::new(ReferenceStore::from_parts(
            catalog,
            BTreeMap::new(),
            BTreeMap::new(),
            Vec::new(),
        ))
    }

    #[test]
    fn matches_are_case_insensitive_and_sorted() {
        let resolver = NameResolver::new(store_with_names(&[
            "Aspirin",
            "Asparagus",
            "Warfarin",
        ]));
        assert_eq!(resolver.candidates("as"), vec!["Asparagus", "Aspirin"]);
    }

    #[test]
    fn empty_query_yields_nothing() {
        let resolver = NameResolver::new(store_with_names(&["Aspirin"]));
        assert!(resolver.candidates("").is_empty());
    }

    #[test]
    fn limit_truncates_candidates() {
        let resolver = NameResolver::new(store_with_names(&[
            "Amiodarone",
            "Amitriptyline",
            "Amlodipine",
        ]));
        assert_eq!(
            resolver.resolve("am", 2),
            vec!["Amiodarone", "Amitriptyline"]
        );
    }

    #[test]
    fn duplicate_catalog_names_appear_once() {
        let resolver = NameResolver::new(store_with_names(&["Aspirin", "Aspirin"]));
        assert_eq!(resolver.candidates("asp"), vec!["Aspirin"]);
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        let resolver = NameResolver::new(store_with_names(&["Aspirin"]));
        assert!(resolver.candidates("xyz").is_empty());
    }
}
