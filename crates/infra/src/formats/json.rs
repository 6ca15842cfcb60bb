// crates/infra/src/formats/json.rs
use std::io::Write;

use log::warn;
use product_grouper_domain::options::DataFormat;
use product_grouper_ports::{
    dataset::{DatasetReader, RawDataset, RawRecord},
    table::{GroupTable, GroupTableWriter, GroupedRow},
};
use product_grouper_shared_kernel::{InfrastructureError, Result};
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

use super::parse_error;

/// A JSON array of flat objects.
///
/// The header is the key order of the first object. Every object is matched to
/// fields by its own key names, so objects may list their keys in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonFormat;

impl DatasetReader for JsonFormat {
    fn read(&self, input: &[u8]) -> Result<RawDataset> {
        let value: Value = serde_json::from_slice(input).map_err(|e| parse_error(DataFormat::Json, e))?;
        let Value::Array(items) = value else {
            return Err(parse_error(DataFormat::Json, "top-level value is not an array"));
        };
        if items.is_empty() {
            return Err(InfrastructureError::NoRecords {
                format: DataFormat::Json.label().to_string(),
                reason: "the array has no objects".to_string(),
            }
            .into());
        }

        let mut header: Vec<String> = Vec::new();
        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let Value::Object(object) = item else {
                return Err(parse_error(DataFormat::Json, format!("element {index} is not an object")));
            };
            if index == 0 {
                header = object.keys().cloned().collect();
            } else if object.len() != header.len() || !header.iter().all(|k| object.contains_key(k)) {
                warn!("element {index} has different keys than the first object; fields matched by name");
            }
            let fields = object
                .into_iter()
                .map(|(key, value)| {
                    let text = scalar_text(&value).ok_or_else(|| {
                        parse_error(DataFormat::Json, format!("field '{key}' of element {index} is not a scalar"))
                    })?;
                    Ok((key, text))
                })
                .collect::<Result<Vec<_>>>()?;
            records.push(RawRecord::new(fields));
        }
        Ok(RawDataset { header, records })
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Serializes one grouped row as an object whose keys follow the table columns.
struct JsonRow<'a> {
    table: &'a GroupTable,
    row: &'a GroupedRow,
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.table.columns.len() + 1))?;
        for (column, value) in self.table.columns.iter().zip(&self.row.values) {
            map.serialize_entry(column, value)?;
        }
        map.serialize_entry(&self.table.count_column, &self.row.count)?;
        map.end()
    }
}

impl GroupTableWriter for JsonFormat {
    fn write(&self, table: &GroupTable, out: &mut dyn Write) -> Result<()> {
        let rows: Vec<JsonRow<'_>> = table.rows.iter().map(|row| JsonRow { table, row }).collect();
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        Ok(())
    }
}
