pub mod aggregate;

pub use aggregate::{AggregationResult, Aggregator, GroupEntry, GroupKey};
