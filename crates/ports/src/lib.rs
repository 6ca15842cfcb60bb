//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`dataset`]: decoding raw input bytes into header + records
//! - [`table`]: encoding grouped rows into an output document
//! - [`storage`]: loading input bytes and persisting output bytes
//!
//! These ports allow the domain and application layers to remain
//! independent of specific file formats and of the filesystem.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dataset;
pub mod storage;
pub mod table;
