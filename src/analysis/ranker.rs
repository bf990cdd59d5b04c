//! Result Filter & Ranker: threshold retention and descending-profit order.

use crate::analysis::Thresholds;
use crate::models::DepthResult;

/// Retain rows meeting every threshold, then sort by descending instant
/// profit.
///
/// The sort is stable, so equal-profit rows keep their construction order
/// (snapshot item order, then trait order, then ascending depth). An empty
/// result is a valid outcome: no current opportunity meets the thresholds.
pub fn filter_and_rank(mut results: Vec<DepthResult>, thresholds: &Thresholds) -> Vec<DepthResult> {
    results.retain(|row| {
        row.profitability_pct as f64 >= thresholds.min_profitability_pct
            && row.cost <= thresholds.max_cost
            && row.instant_profit >= thresholds.min_instant_profit
    });
    results.sort_by(|a, b| b.instant_profit.total_cmp(&a.instant_profit));
    results
}
