use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DepthResult
// ---------------------------------------------------------------------------

/// One row of analysis output: the outcome of buying the `depth` cheapest
/// lots of an (item, trait) market and relisting at the next price tier.
///
/// Derived per analysis call, never persisted by the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthResult {
    /// Resolved item display name, or the raw id when unresolved.
    pub name: String,
    /// Resolved trait display name, `"NONE"` for trait-less groups.
    pub trait_name: String,
    /// Number of cheapest lots hypothetically purchased, starting at 1.
    pub depth: usize,
    /// Cumulative acquisition cost of the first `depth` lots.
    pub cost: f64,
    /// Resale revenue minus cost, net of marketplace tax. Rounded to 2
    /// decimal places.
    pub instant_profit: f64,
    /// `instant_profit / cost` as a whole percentage; `0` when cost is zero.
    pub profitability_pct: i64,
    /// Unit price of the last lot actually purchased.
    pub item_price: f64,
    /// Number of sale records in the group this row was computed from.
    pub occurrences: usize,
    /// Unit price of the next lot, used to estimate the resale price.
    pub sale_price: f64,
}
