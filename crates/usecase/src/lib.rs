//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and port implementations
//! to implement specific use cases:
//!
//! - [`orchestrator`]: load → decode → validate → group → encode → persist
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{GroupingOutput, GroupingRequest};
pub use orchestrator::GroupCombinations;
