use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Paths of a single grouping run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingRequest {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingOutput {
    pub records_read: usize,
    pub groups_written: usize,
    pub output: PathBuf,
}
