//! Depth-Profit Calculator: per-group cumulative cost, resale revenue and
//! profitability for every purchase depth.

use crate::analysis::Group;
use crate::models::{Catalog, DepthResult};

/// Compute one [`DepthResult`] per purchase depth for a single group.
///
/// Lots are stable-sorted by ascending unit price, so equal-priced lots keep
/// their snapshot order and repeated runs over the same snapshot produce
/// identical output. Depth `d` buys the `d` cheapest lots and relists them at
/// the price of lot `d`, net of the marketplace tax (`sale_multiplier` is
/// `1 - tax_rate`).
///
/// Boundary policy: a depth is only evaluated while a resale lot exists
/// beyond the purchased ones, so the last lot never forms a depth (skip, not
/// clamp). A group too small to produce a single depth contributes no rows.
pub fn compute_depths(
    group: &Group,
    max_depth: usize,
    sale_multiplier: f64,
    catalog: &Catalog,
) -> Vec<DepthResult> {
    let mut lots = group.lots.clone();
    lots.sort_by(|a, b| a.price.total_cmp(&b.price));

    let name = catalog.item_name(&group.item_id);
    let trait_name = catalog.trait_name(group.trait_id);
    let occurrences = lots.len();

    let last = max_depth.min(lots.len().saturating_sub(1));
    let mut results = Vec::with_capacity(last);
    let mut cost = 0.0;

    for depth in 1..=last {
        let bought = lots[depth - 1];
        cost += bought.price * f64::from(bought.count);

        let sale_price = lots[depth].price;
        let sale_revenue = sale_price * sale_multiplier * depth as f64;
        let instant_profit = sale_revenue - cost;
        // Percentage is taken from the unrounded profit; zero cost is a
        // defined result, not a division error.
        let profitability_pct = if cost > 0.0 {
            ((instant_profit / cost) * 100.0).round() as i64
        } else {
            0
        };

        results.push(DepthResult {
            name: name.clone(),
            trait_name: trait_name.clone(),
            depth,
            cost,
            instant_profit: round2(instant_profit),
            profitability_pct,
            item_price: bought.price,
            occurrences,
            sale_price,
        });
    }

    results
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
