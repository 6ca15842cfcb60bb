// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod formats;
pub mod persistence;

pub use formats::FormatAdapter;
pub use persistence::{AtomicFileTarget, FileInputSource};
