//! Abstract store contract and the in-memory implementation.
//!
//! The registry core depends only on the [`CodeStore`] trait; how a store
//! durably persists rows is its own concern. [`MemoryStore`] is the
//! default backing store, keyed by SWIFT code.

use std::collections::HashMap;

use crate::core::errors::StoreResult;
use crate::models::SwiftEntry;

/// Backing-store contract the registry core requires.
///
/// `save` upserts by code. Query methods never fail on empty results;
/// an empty vector is a valid outcome.
pub trait CodeStore: Send + Sync {
    fn find_by_code(&self, code: &str) -> StoreResult<Option<SwiftEntry>>;

    fn exists_by_code(&self, code: &str) -> StoreResult<bool>;

    /// All entries for a country, ordered by code.
    fn find_by_country(&self, iso2: &str) -> StoreResult<Vec<SwiftEntry>>;

    /// Branches currently linked to the given headquarters code.
    fn find_by_headquarter(&self, hq_code: &str) -> StoreResult<Vec<SwiftEntry>>;

    /// Branch entries sharing `prefix` that have no headquarters link.
    fn find_orphans_by_prefix(&self, prefix: &str) -> StoreResult<Vec<SwiftEntry>>;

    /// Every entry in the store.
    fn find_all(&self) -> StoreResult<Vec<SwiftEntry>>;

    /// Insert or replace the entry stored under its code.
    fn save(&mut self, entry: SwiftEntry) -> StoreResult<()>;

    fn delete_by_code(&mut self, code: &str) -> StoreResult<()>;
}

/// In-memory store for registry entries, keyed by SWIFT code.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, SwiftEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CodeStore for MemoryStore {
    fn find_by_code(&self, code: &str) -> StoreResult<Option<SwiftEntry>> {
        Ok(self.entries.get(code).cloned())
    }

    fn exists_by_code(&self, code: &str) -> StoreResult<bool> {
        Ok(self.entries.contains_key(code))
    }

    fn find_by_country(&self, iso2: &str) -> StoreResult<Vec<SwiftEntry>> {
        let mut matches: Vec<SwiftEntry> = self
            .entries
            .values()
            .filter(|e| e.country_iso2 == iso2)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.swift_code.cmp(&b.swift_code));
        Ok(matches)
    }

    fn find_by_headquarter(&self, hq_code: &str) -> StoreResult<Vec<SwiftEntry>> {
        let mut matches: Vec<SwiftEntry> = self
            .entries
            .values()
            .filter(|e| e.headquarter_code.as_deref() == Some(hq_code))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.swift_code.cmp(&b.swift_code));
        Ok(matches)
    }

    fn find_orphans_by_prefix(&self, prefix: &str) -> StoreResult<Vec<SwiftEntry>> {
        let mut matches: Vec<SwiftEntry> = self
            .entries
            .values()
            .filter(|e| e.swift_code.starts_with(prefix) && e.is_orphan())
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.swift_code.cmp(&b.swift_code));
        Ok(matches)
    }

    fn find_all(&self) -> StoreResult<Vec<SwiftEntry>> {
        Ok(self.entries.values().cloned().collect())
    }

    fn save(&mut self, entry: SwiftEntry) -> StoreResult<()> {
        self.entries.insert(entry.swift_code.clone(), entry);
        Ok(())
    }

    fn delete_by_code(&mut self, code: &str) -> StoreResult<()> {
        self.entries.remove(code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, iso2: &str, hq: bool, linked_to: Option<&str>) -> SwiftEntry {
        let mut e = SwiftEntry::new(
            code.to_string(),
            "Test Bank".to_string(),
            "Branch Office".to_string(),
            iso2.to_string(),
            "POLAND".to_string(),
            hq,
        );
        e.headquarter_code = linked_to.map(str::to_string);
        e
    }

    #[test]
    fn test_save_is_upsert() {
        let mut store = MemoryStore::new();
        store.save(entry("TESTPL00AAA", "PL", false, None)).unwrap();
        store
            .save(entry("TESTPL00AAA", "PL", false, Some("TESTPL00XXX")))
            .unwrap();

        assert_eq!(store.len(), 1);
        let stored = store.find_by_code("TESTPL00AAA").unwrap().unwrap();
        assert_eq!(stored.headquarter_code.as_deref(), Some("TESTPL00XXX"));
    }

    #[test]
    fn test_find_by_country_is_ordered() {
        let mut store = MemoryStore::new();
        store.save(entry("ZZBKPL00", "PL", false, None)).unwrap();
        store.save(entry("AABKPL00", "PL", false, None)).unwrap();
        store.save(entry("MMBKDE00", "DE", false, None)).unwrap();

        let codes: Vec<String> = store
            .find_by_country("PL")
            .unwrap()
            .into_iter()
            .map(|e| e.swift_code)
            .collect();
        assert_eq!(codes, vec!["AABKPL00", "ZZBKPL00"]);
    }

    #[test]
    fn test_find_by_country_empty_is_ok() {
        let store = MemoryStore::new();
        assert!(store.find_by_country("PL").unwrap().is_empty());
    }

    #[test]
    fn test_orphan_query_excludes_linked_and_headquarters() {
        let mut store = MemoryStore::new();
        store.save(entry("TESTPL00XXX", "PL", true, None)).unwrap();
        store
            .save(entry("TESTPL00AAA", "PL", false, Some("TESTPL00XXX")))
            .unwrap();
        store.save(entry("TESTPL00BBB", "PL", false, None)).unwrap();
        store.save(entry("OTHRPL00CCC", "PL", false, None)).unwrap();

        let orphans: Vec<String> = store
            .find_orphans_by_prefix("TESTPL00")
            .unwrap()
            .into_iter()
            .map(|e| e.swift_code)
            .collect();
        assert_eq!(orphans, vec!["TESTPL00BBB"]);
    }

    #[test]
    fn test_find_by_headquarter() {
        let mut store = MemoryStore::new();
        store
            .save(entry("TESTPL00AAA", "PL", false, Some("TESTPL00XXX")))
            .unwrap();
        store.save(entry("TESTPL00BBB", "PL", false, None)).unwrap();

        let linked = store.find_by_headquarter("TESTPL00XXX").unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].swift_code, "TESTPL00AAA");
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = MemoryStore::new();
        assert!(store.delete_by_code("TESTPL00AAA").is_ok());
    }
}
