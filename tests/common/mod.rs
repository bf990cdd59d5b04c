//! Shared fixtures for the tlmarket integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;

use tlmarket::{
    AuctionAnalyzer, Catalog, CatalogItem, ListingSnapshot, SaleRecord, Thresholds, TraitInfo,
};

/// An analyzer with the default engine constants (23% tax, 5-record floor).
pub fn analyzer() -> AuctionAnalyzer {
    AuctionAnalyzer::builder().build().unwrap()
}

pub fn record(price: f64, count: u32, trait_id: Option<u32>) -> SaleRecord {
    SaleRecord {
        price,
        count,
        trait_id,
    }
}

/// `n` trait-less single-unit records at the same price.
pub fn uniform(price: f64, n: usize) -> Vec<SaleRecord> {
    vec![record(price, 1, None); n]
}

pub fn snapshot_of(entries: Vec<(&str, Vec<SaleRecord>)>) -> ListingSnapshot {
    entries
        .into_iter()
        .map(|(id, records)| (id.to_string(), records))
        .collect()
}

/// Catalog with two items and two traits, matching the ids used across the
/// test snapshots.
pub fn sample_catalog() -> Catalog {
    Catalog {
        items: vec![
            CatalogItem {
                num: 1012,
                name: "Karnix's Netherblade".to_string(),
            },
            CatalogItem {
                num: 2044,
                name: "Ebon Roar Gauntlets".to_string(),
            },
        ],
        traits: BTreeMap::from([
            (
                "7".to_string(),
                TraitInfo {
                    name: "Critical Hit".to_string(),
                },
            ),
            (
                "9".to_string(),
                TraitInfo {
                    name: "Max Health".to_string(),
                },
            ),
        ]),
    }
}

/// Thresholds that retain every computed row.
pub fn permissive() -> Thresholds {
    Thresholds {
        min_profitability_pct: f64::NEG_INFINITY,
        max_cost: f64::INFINITY,
        max_depth: 10,
        min_instant_profit: f64::NEG_INFINITY,
    }
}
