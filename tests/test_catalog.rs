//! Name resolution and model serialization tests.

mod common;

use common::{record, sample_catalog};
use tlmarket::{Catalog, CatalogItem, DepthResult, SaleRecord};

// ---------------------------------------------------------------------------
// Item resolution
// ---------------------------------------------------------------------------

#[test]
fn item_name_resolves_by_numeric_match() {
    let catalog = sample_catalog();
    assert_eq!(catalog.item_name("1012"), "Karnix's Netherblade");
    assert_eq!(catalog.item_name("2044"), "Ebon Roar Gauntlets");
}

#[test]
fn unresolved_item_falls_back_to_raw_id() {
    let catalog = sample_catalog();
    assert_eq!(catalog.item_name("9999"), "9999");
    assert_eq!(catalog.item_name("not-a-number"), "not-a-number");
}

#[test]
fn duplicate_item_ids_resolve_to_the_first_entry() {
    let catalog = Catalog {
        items: vec![
            CatalogItem {
                num: 5,
                name: "First".to_string(),
            },
            CatalogItem {
                num: 5,
                name: "Second".to_string(),
            },
        ],
        traits: Default::default(),
    };
    assert_eq!(catalog.item_name("5"), "First");
}

// ---------------------------------------------------------------------------
// Trait resolution
// ---------------------------------------------------------------------------

#[test]
fn traitless_groups_resolve_to_the_none_label() {
    assert_eq!(sample_catalog().trait_name(None), "NONE");
    // No lookup happens for the sentinel, so an empty catalog behaves the same.
    assert_eq!(Catalog::default().trait_name(None), "NONE");
}

#[test]
fn trait_name_resolves_known_ids() {
    let catalog = sample_catalog();
    assert_eq!(catalog.trait_name(Some(7)), "Critical Hit");
    assert_eq!(catalog.trait_name(Some(9)), "Max Health");
}

#[test]
fn unresolved_trait_falls_back_to_raw_id() {
    assert_eq!(sample_catalog().trait_name(Some(42)), "42");
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

#[test]
fn sale_record_uses_the_vendor_field_names() {
    let with_trait: SaleRecord = serde_json::from_str(r#"{"p": 12.5, "c": 2, "t": 7}"#).unwrap();
    assert_eq!(with_trait, record(12.5, 2, Some(7)));

    let without: SaleRecord = serde_json::from_str(r#"{"p": 3.0, "c": 1}"#).unwrap();
    assert_eq!(without.trait_id, None);

    // The trait field is omitted, not nulled, on the way back out.
    assert_eq!(serde_json::to_string(&without).unwrap(), r#"{"p":3.0,"c":1}"#);
}

#[test]
fn catalog_parses_the_persisted_document_shape() {
    let doc = r#"{
        "items": [{"num": 1012, "name": "Karnix's Netherblade"}],
        "traits": {"7": {"name": "Critical Hit"}}
    }"#;
    let catalog: Catalog = serde_json::from_str(doc).unwrap();
    assert_eq!(catalog.item_name("1012"), "Karnix's Netherblade");
    assert_eq!(catalog.trait_name(Some(7)), "Critical Hit");
}

#[test]
fn depth_result_serializes_camel_case() {
    let row = DepthResult {
        name: "Karnix's Netherblade".to_string(),
        trait_name: "NONE".to_string(),
        depth: 1,
        cost: 10.0,
        instant_profit: -2.3,
        profitability_pct: -23,
        item_price: 10.0,
        occurrences: 5,
        sale_price: 10.0,
    };
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["traitName"], "NONE");
    assert_eq!(json["instantProfit"], -2.3);
    assert_eq!(json["profitabilityPct"], -23);
    assert_eq!(json["itemPrice"], 10.0);
    assert_eq!(json["salePrice"], 10.0);
}
