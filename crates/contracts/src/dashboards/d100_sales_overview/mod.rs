pub mod aggregate;
pub mod dto;

pub use aggregate::{filter_and_aggregate, parse_threshold, SalesSummary};
pub use dto::*;
