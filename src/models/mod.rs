pub mod catalog;
pub mod listing;
pub mod opportunity;

pub use catalog::*;
pub use listing::*;
pub use opportunity::*;
