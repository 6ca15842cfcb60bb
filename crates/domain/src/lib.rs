//! # Domain
//!
//! Records, grouping configuration and the aggregation logic that turns a
//! list of product records into counted attribute combinations.
//!
//! - [`model`]: `Record` and `Header`
//! - [`config`]: the immutable `GroupingConfig` (required fields, key delimiter)
//! - [`validation`]: required-field checks against an input header
//! - [`analytics`]: the `Aggregator` and its result types
//! - [`options`]: the `DataFormat` selector

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;
pub mod options;
pub mod validation;

pub use product_grouper_shared_kernel::value_objects;
