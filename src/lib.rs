//! Market arbitrage analysis for Throne and Liberty auction-house data.
//!
//! Turns a point-in-time snapshot of sale listings into ranked instant-resale
//! opportunities: for each (item, trait) market, what it would cost to buy
//! the `depth` cheapest lots, what relisting them at the next price tier
//! would return net of the 23% marketplace tax, and how profitable that is.
//!
//! The engine is a pure function of its inputs: a [`ListingSnapshot`], a
//! [`Catalog`] of display names, and a [`Thresholds`] configuration. It holds
//! no state between calls and performs no I/O; the [`store`] module loads the
//! persisted snapshot/catalog documents, and [`wire::devalue`] decodes the
//! vendor's flattened catalog payload.
//!
//! # Quick start
//!
//! ```
//! use tlmarket::{AuctionAnalyzer, Catalog, ListingSnapshot, SaleRecord, Thresholds};
//!
//! let analyzer = AuctionAnalyzer::builder().build().unwrap();
//!
//! let mut snapshot = ListingSnapshot::new();
//! snapshot.insert(
//!     "1012".to_string(),
//!     vec![SaleRecord { price: 10.0, count: 1, trait_id: None }; 5],
//! );
//!
//! let thresholds = Thresholds {
//!     min_profitability_pct: f64::NEG_INFINITY,
//!     max_cost: f64::INFINITY,
//!     max_depth: 3,
//!     min_instant_profit: f64::NEG_INFINITY,
//! };
//! let results = analyzer
//!     .analyze(&snapshot, &Catalog::default(), &thresholds)
//!     .unwrap();
//! assert_eq!(results.len(), 3);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod wire;

pub use analysis::Thresholds;
pub use error::{MarketError, Result};
pub use models::{Catalog, CatalogItem, DepthResult, ItemSales, ListingSnapshot, SaleRecord, TraitInfo};
pub use store::DataStore;

// ---------------------------------------------------------------------------
// AuctionAnalyzerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AuctionAnalyzer`].
///
/// Use [`AuctionAnalyzer::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](AuctionAnalyzerBuilder::build)
/// to create the analyzer.
pub struct AuctionAnalyzerBuilder {
    tax_rate: f64,
    min_group_size: usize,
}

impl Default for AuctionAnalyzerBuilder {
    fn default() -> Self {
        Self {
            tax_rate: config::DEFAULT_TAX_RATE,
            min_group_size: config::DEFAULT_MIN_GROUP_SIZE,
        }
    }
}

impl AuctionAnalyzerBuilder {
    /// Set the marketplace resale tax rate.
    ///
    /// Defaults to 23%, the rate observed in the source market. Must be in
    /// `[0, 1)`.
    pub fn tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Set the minimum records an (item, trait) group needs to be analyzed.
    ///
    /// Defaults to 5. Must be at least 1.
    pub fn min_group_size(mut self, size: usize) -> Self {
        self.min_group_size = size;
        self
    }

    /// Build the analyzer, validating the engine constants.
    pub fn build(self) -> Result<AuctionAnalyzer> {
        if !self.tax_rate.is_finite() || !(0.0..1.0).contains(&self.tax_rate) {
            return Err(MarketError::InvalidConfig(
                "tax_rate must be in [0, 1)".into(),
            ));
        }
        if self.min_group_size == 0 {
            return Err(MarketError::InvalidConfig(
                "min_group_size must be at least 1".into(),
            ));
        }
        Ok(AuctionAnalyzer {
            tax_rate: self.tax_rate,
            min_group_size: self.min_group_size,
        })
    }
}

// ---------------------------------------------------------------------------
// AuctionAnalyzer
// ---------------------------------------------------------------------------

/// The profitability analysis engine.
///
/// Holds only the engine constants (tax rate, sample-size floor); every
/// [`analyze`](AuctionAnalyzer::analyze) call is an independent, side-effect
/// free computation over the inputs it is given, so one analyzer can be
/// shared across snapshots and servers.
pub struct AuctionAnalyzer {
    tax_rate: f64,
    min_group_size: usize,
}

impl AuctionAnalyzer {
    /// Create a new builder for configuring the analyzer.
    pub fn builder() -> AuctionAnalyzerBuilder {
        AuctionAnalyzerBuilder::default()
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn min_group_size(&self) -> usize {
        self.min_group_size
    }

    /// Analyze one snapshot and return the ranked opportunities.
    ///
    /// Validates `thresholds` up front, then runs the pipeline: group the
    /// snapshot into (item, trait) markets, compute a depth-profit series per
    /// surviving group (resolving display names through `catalog`), and keep
    /// the rows that clear every threshold, ordered by descending instant
    /// profit. An empty result means no current opportunity meets the
    /// thresholds.
    pub fn analyze(
        &self,
        snapshot: &ListingSnapshot,
        catalog: &Catalog,
        thresholds: &Thresholds,
    ) -> Result<Vec<DepthResult>> {
        thresholds.validate()?;

        let groups = analysis::grouper::group(snapshot, self.min_group_size);
        let sale_multiplier = 1.0 - self.tax_rate;

        let mut rows = Vec::new();
        for group in &groups {
            rows.extend(analysis::depth::compute_depths(
                group,
                thresholds.max_depth,
                sale_multiplier,
                catalog,
            ));
        }

        Ok(analysis::ranker::filter_and_rank(rows, thresholds))
    }
}
