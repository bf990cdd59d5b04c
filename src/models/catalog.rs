use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::NO_TRAIT_LABEL;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One entry of the item name table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub num: i64,
    pub name: String,
}

/// One entry of the trait name table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitInfo {
    pub name: String,
}

/// Identifier-to-display-name lookup tables for items and traits.
///
/// Matches the shape of the decompressed `auction_house_data.json` document:
/// a list of `{num, name}` items and a map of trait id (stringified) to
/// `{name}`. Loaded once per analysis run and treated as read-only; the
/// engine takes it as an explicit argument, never as ambient state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub traits: BTreeMap<String, TraitInfo>,
}

impl Catalog {
    /// Resolve an item id to its display name.
    ///
    /// Snapshot keys are stringified numeric ids; the lookup is by exact
    /// numeric match. On duplicate ids the first listed entry wins (known
    /// limitation of the source data). An unresolved or non-numeric id
    /// falls back to the raw id string.
    pub fn item_name(&self, item_id: &str) -> String {
        if let Ok(num) = item_id.parse::<i64>() {
            if let Some(item) = self.items.iter().find(|i| i.num == num) {
                return item.name.clone();
            }
        }
        tracing::warn!(item_id, "item id not in catalog, falling back to raw id");
        item_id.to_string()
    }

    /// Resolve a trait id to its display name.
    ///
    /// `None` is the trait-less sentinel and maps to `"NONE"` without a
    /// lookup. An id missing from the trait table falls back to its raw
    /// string form rather than failing the record.
    pub fn trait_name(&self, trait_id: Option<u32>) -> String {
        let Some(id) = trait_id else {
            return NO_TRAIT_LABEL.to_string();
        };
        if let Some(info) = self.traits.get(&id.to_string()) {
            return info.name.clone();
        }
        tracing::warn!(trait_id = id, "trait id not in catalog, falling back to raw id");
        id.to_string()
    }
}
