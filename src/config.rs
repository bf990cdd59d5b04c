use std::path::PathBuf;

/// Marketplace resale tax withheld on every sale (23%).
pub const DEFAULT_TAX_RATE: f64 = 0.23;

/// Minimum number of sale records an (item, trait) group needs before its
/// depth-profit estimates are considered statistically usable.
pub const DEFAULT_MIN_GROUP_SIZE: usize = 5;

/// Display name used for the trait slot of trait-less groups.
pub const NO_TRAIT_LABEL: &str = "NONE";

/// Conventional file names of the persisted auction-house documents.
pub const CATALOG_DOCUMENT: &str = "auction_house_data";
pub const SNAPSHOT_DOCUMENT: &str = "auction_house_prices";

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("tlmarket")
    } else {
        PathBuf::from(".tlmarket-data")
    }
}
