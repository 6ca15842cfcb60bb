// crates/ports/src/table.rs
use std::io::Write;

use product_grouper_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// One output row: values aligned with [`GroupTable::columns`] plus its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedRow {
    pub values: Vec<String>,
    pub count: usize,
}

/// DTO handed to writers: column names, count column name, rows in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTable {
    pub columns: Vec<String>,
    pub count_column: String,
    pub rows: Vec<GroupedRow>,
}

impl GroupTable {
    /// Header cells: every column followed by the count column.
    pub fn header(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str).chain(std::iter::once(self.count_column.as_str()))
    }
}

/// Port for encoding grouped rows into a complete output document.
pub trait GroupTableWriter {
    fn write(&self, table: &GroupTable, out: &mut dyn Write) -> Result<()>;
}
