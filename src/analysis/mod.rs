//! The profitability analysis pipeline.
//!
//! Pure, synchronous transformations over one listings snapshot: partition
//! records into (item, trait) groups, compute cumulative cost and resale
//! profit per purchase depth, then filter and rank the surviving rows.
//! No module here holds state between invocations.

pub mod depth;
pub mod grouper;
pub mod ranker;

pub use grouper::{Group, Lot};

use serde::{Deserialize, Serialize};

use crate::error::{MarketError, Result};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Caller-supplied retention thresholds for the Result Filter & Ranker.
///
/// `min_profitability_pct` and `min_instant_profit` are lower bounds and may
/// be negative (down to `-inf`) to widen the result set; `max_cost` may be
/// `+inf`. Defaults match the interactive tool this engine was extracted
/// from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Keep rows whose rounded profitability percentage is at least this.
    pub min_profitability_pct: f64,
    /// Keep rows whose cumulative cost is at most this.
    pub max_cost: f64,
    /// Largest purchase depth to evaluate per group, additionally capped by
    /// the lots available in each group.
    pub max_depth: usize,
    /// Keep rows whose instant profit is at least this.
    pub min_instant_profit: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_profitability_pct: 20.0,
            max_cost: 3000.0,
            max_depth: 1,
            min_instant_profit: 10.0,
        }
    }
}

impl Thresholds {
    /// Validate the configuration before any computation starts.
    ///
    /// A rejected configuration never reaches the pipeline (fail fast, not
    /// mid-run).
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(MarketError::InvalidConfig(
                "max_depth must be at least 1".into(),
            ));
        }
        if self.max_cost.is_nan() || self.max_cost < 0.0 {
            return Err(MarketError::InvalidConfig(
                "max_cost must be non-negative".into(),
            ));
        }
        if self.min_profitability_pct.is_nan() || self.min_instant_profit.is_nan() {
            return Err(MarketError::InvalidConfig(
                "thresholds must not be NaN".into(),
            ));
        }
        Ok(())
    }
}
