//! Validation tests for threshold and engine-constant configuration.

use tlmarket::{AuctionAnalyzer, MarketError, Thresholds};

fn base() -> Thresholds {
    Thresholds {
        min_profitability_pct: 20.0,
        max_cost: 3000.0,
        max_depth: 5,
        min_instant_profit: 10.0,
    }
}

// ---------------------------------------------------------------------------
// Thresholds::validate
// ---------------------------------------------------------------------------

#[test]
fn default_thresholds_are_valid() {
    assert!(Thresholds::default().validate().is_ok());
}

#[test]
fn zero_max_depth_is_rejected() {
    let mut thresholds = base();
    thresholds.max_depth = 0;
    assert!(matches!(
        thresholds.validate().unwrap_err(),
        MarketError::InvalidConfig(_)
    ));
}

#[test]
fn negative_max_cost_is_rejected() {
    let mut thresholds = base();
    thresholds.max_cost = -1.0;
    assert!(thresholds.validate().is_err());
}

#[test]
fn nan_thresholds_are_rejected() {
    let mut thresholds = base();
    thresholds.max_cost = f64::NAN;
    assert!(thresholds.validate().is_err());

    let mut thresholds = base();
    thresholds.min_profitability_pct = f64::NAN;
    assert!(thresholds.validate().is_err());

    let mut thresholds = base();
    thresholds.min_instant_profit = f64::NAN;
    assert!(thresholds.validate().is_err());
}

#[test]
fn lower_bounds_may_be_negative_or_unbounded() {
    // The two minimums are lower bounds; negative values only widen the
    // result set and are legal, all the way down to -inf.
    let mut thresholds = base();
    thresholds.min_profitability_pct = -50.0;
    thresholds.min_instant_profit = f64::NEG_INFINITY;
    assert!(thresholds.validate().is_ok());
}

#[test]
fn unbounded_max_cost_is_valid() {
    let mut thresholds = base();
    thresholds.max_cost = f64::INFINITY;
    assert!(thresholds.validate().is_ok());
}

// ---------------------------------------------------------------------------
// AuctionAnalyzerBuilder validation
// ---------------------------------------------------------------------------

#[test]
fn builder_defaults_build() {
    let engine = AuctionAnalyzer::builder().build().unwrap();
    assert_eq!(engine.tax_rate(), 0.23);
    assert_eq!(engine.min_group_size(), 5);
}

#[test]
fn tax_rate_must_be_a_fraction() {
    assert!(AuctionAnalyzer::builder().tax_rate(1.0).build().is_err());
    assert!(AuctionAnalyzer::builder().tax_rate(-0.1).build().is_err());
    assert!(AuctionAnalyzer::builder().tax_rate(f64::NAN).build().is_err());
    assert!(AuctionAnalyzer::builder().tax_rate(0.0).build().is_ok());
}

#[test]
fn min_group_size_must_be_positive() {
    assert!(AuctionAnalyzer::builder().min_group_size(0).build().is_err());
    assert!(AuctionAnalyzer::builder().min_group_size(1).build().is_ok());
}
