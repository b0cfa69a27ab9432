//! Canonical card metadata.

use serde::{Deserialize, Serialize};

/// A card record with a stable shape, independent of which backend revision
/// produced it.
///
/// Every numeric field is present; absent or unparseable raw values become `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalCard {
    /// Unique card code (the cache key).
    pub code: String,
    pub name: String,
    /// Flavour/rules text, empty when the backend sends none.
    pub description: String,
    pub image_url: String,
    pub damage: i64,
    pub heal: i64,
    pub fire: i64,
    pub might: i64,
    pub magic: i64,
    /// Corner number printed on the card.
    pub number: i64,
}
