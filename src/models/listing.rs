use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// SaleRecord
// ---------------------------------------------------------------------------

/// One observed listing: `count` units offered at `price` each, optionally
/// carrying the trait that partitions this item into a separate market.
///
/// Field names follow the vendor's wire format (`p`, `c`, `t`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "p")]
    pub price: f64,
    #[serde(rename = "c")]
    pub count: u32,
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub trait_id: Option<u32>,
}

// ---------------------------------------------------------------------------
// ItemSales — wire shape of one snapshot entry
// ---------------------------------------------------------------------------

/// The vendor nests a snapshot entry's records under a `sales` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemSales {
    #[serde(default)]
    pub sales: Vec<SaleRecord>,
}

// ---------------------------------------------------------------------------
// ListingSnapshot
// ---------------------------------------------------------------------------

/// Point-in-time market state for one server: item id (stringified numeric
/// id, as keyed by the vendor) to the listings observed for that item.
///
/// An ordered map keeps analysis output deterministic across runs.
pub type ListingSnapshot = BTreeMap<String, Vec<SaleRecord>>;
