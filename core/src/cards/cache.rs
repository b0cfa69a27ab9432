//! Shared card metadata cache.

use chronos_shared::CanonicalCard;
use hashbrown::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Append-only `code -> card` map shared by every clone of the handle.
///
/// Entries are never evicted or invalidated; the cache lives as long as the
/// last handle. Concurrent resolvers may insert the same code twice, which is
/// harmless because normalization is pure.
#[derive(Debug, Clone, Default)]
pub struct CardCache {
    cards: Arc<RwLock<HashMap<String, CanonicalCard>>>,
}

impl CardCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, code: &str) -> Option<CanonicalCard> {
        self.cards
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(code)
            .cloned()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.cards
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(code)
    }

    /// Store a card under its own code.
    pub fn insert(&self, card: CanonicalCard) {
        self.cards
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(card.code.clone(), card);
    }

    /// Codes from `codes` not cached yet, deduplicated, in first-seen order.
    pub fn missing<S: AsRef<str>>(&self, codes: &[S]) -> Vec<String> {
        let cards = self.cards.read().unwrap_or_else(PoisonError::into_inner);
        let mut missing: Vec<String> = Vec::new();
        for code in codes {
            let code: &str = code.as_ref();
            if !cards.contains_key(code) && !missing.iter().any(|m| m == code) {
                missing.push(code.to_string());
            }
        }
        missing
    }

    /// Cached cards for `codes`, in request order, skipping uncached codes.
    pub fn collect<S: AsRef<str>>(&self, codes: &[S]) -> Vec<CanonicalCard> {
        let cards = self.cards.read().unwrap_or_else(PoisonError::into_inner);
        codes
            .iter()
            .filter_map(|code| {
                let code: &str = code.as_ref();
                cards.get(code).cloned()
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cards.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> CanonicalCard {
        CanonicalCard {
            code: code.to_string(),
            name: format!("Card {}", code),
            ..Default::default()
        }
    }

    #[test]
    fn clones_share_entries() {
        let cache = CardCache::new();
        let other = cache.clone();
        cache.insert(card("A"));
        assert!(other.contains("A"));
        assert_eq!(other.get("A").unwrap().name, "Card A");
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn fresh_caches_are_independent() {
        let first = CardCache::new();
        first.insert(card("A"));
        assert!(CardCache::new().is_empty());
    }

    #[test]
    fn missing_deduplicates_in_order() {
        let cache = CardCache::new();
        cache.insert(card("B"));
        assert_eq!(cache.missing(&["C", "B", "A", "C"]), vec!["C", "A"]);
    }

    #[test]
    fn collect_keeps_request_order_and_skips_unknown() {
        let cache = CardCache::new();
        cache.insert(card("A"));
        cache.insert(card("B"));
        let codes: Vec<String> = cache
            .collect(&["B", "X", "A"])
            .into_iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec!["B", "A"]);
    }

    #[test]
    fn reinsert_replaces_with_equal_value() {
        let cache = CardCache::new();
        cache.insert(card("A"));
        cache.insert(card("A"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("A"), Some(card("A")));
    }
}
