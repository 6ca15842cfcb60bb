// crates/ports/src/dataset.rs
use product_grouper_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// One decoded input unit as named values, in source order. Values are not yet trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub fields: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }
}

/// DTO produced by a dataset reader: the observed header and every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDataset {
    pub header: Vec<String>,
    pub records: Vec<RawRecord>,
}

/// Port for decoding a whole input document.
pub trait DatasetReader {
    fn read(&self, input: &[u8]) -> Result<RawDataset>;
}
