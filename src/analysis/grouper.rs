//! Listing Grouper: partitions raw per-item sale records into (item, trait)
//! groups and applies the sample-size floor.

use std::collections::BTreeMap;

use crate::models::ListingSnapshot;

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// A priced lot: `count` units offered at `price` each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lot {
    pub price: f64,
    pub count: u32,
}

/// The listings of one (item, trait) market. The trait has moved into the
/// key; a `None` trait marks the item's trait-less sub-market.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub item_id: String,
    pub trait_id: Option<u32>,
    pub lots: Vec<Lot>,
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Partition a snapshot into (item, trait) groups.
///
/// Classification inspects every record of an item, not just the first:
/// trait-less records inside a trait-bearing item are bucketed under the
/// item's `None` sub-group instead of being misfiled or rejected.
///
/// Records with a non-finite or negative price, or a zero count, are skipped.
/// Groups with fewer than `min_group_size` records are dropped entirely; too
/// few data points make the depth-profit estimates unreliable. Neither case
/// is an error.
pub fn group(snapshot: &ListingSnapshot, min_group_size: usize) -> Vec<Group> {
    let mut groups = Vec::new();

    for (item_id, records) in snapshot {
        if records.is_empty() {
            tracing::debug!(%item_id, "snapshot entry has no sale records, skipping");
            continue;
        }

        let mut buckets: BTreeMap<Option<u32>, Vec<Lot>> = BTreeMap::new();
        for record in records {
            if !record.price.is_finite() || record.price < 0.0 || record.count == 0 {
                tracing::debug!(
                    %item_id,
                    price = record.price,
                    count = record.count,
                    "malformed sale record, skipping"
                );
                continue;
            }
            buckets.entry(record.trait_id).or_default().push(Lot {
                price: record.price,
                count: record.count,
            });
        }

        for (trait_id, lots) in buckets {
            if lots.len() < min_group_size {
                tracing::debug!(
                    %item_id,
                    ?trait_id,
                    records = lots.len(),
                    "group below sample-size floor, dropping"
                );
                continue;
            }
            groups.push(Group {
                item_id: item_id.clone(),
                trait_id,
                lots,
            });
        }
    }

    groups
}
