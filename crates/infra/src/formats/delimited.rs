// crates/infra/src/formats/delimited.rs
use std::{io::Write, iter};

use log::warn;
use product_grouper_domain::options::DataFormat;
use product_grouper_ports::{
    dataset::{DatasetReader, RawDataset, RawRecord},
    table::{GroupTable, GroupTableWriter},
};
use product_grouper_shared_kernel::Result;

use super::{encode_error, parse_error};

/// Comma-separated values with a mandatory header line and RFC 4180 quoting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvFormat;

impl DatasetReader for CsvFormat {
    fn read(&self, input: &[u8]) -> Result<RawDataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // short and long rows are aligned by position below
            .trim(csv::Trim::All)
            .from_reader(input);

        let header: Vec<String> =
            reader.headers().map_err(|e| parse_error(DataFormat::Csv, e))?.iter().map(str::to_string).collect();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| parse_error(DataFormat::Csv, e))?;
            if row.len() > header.len() {
                let line = row.position().map_or(0, csv::Position::line);
                warn!("line {line}: {} cells for {} columns, extra cells ignored", row.len(), header.len());
            }
            let cells = row.iter().map(str::to_string).chain(iter::repeat(String::new()));
            records.push(RawRecord::new(header.iter().cloned().zip(cells).collect()));
        }
        Ok(RawDataset { header, records })
    }
}

impl GroupTableWriter for CsvFormat {
    fn write(&self, table: &GroupTable, out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::WriterBuilder::new().from_writer(out);
        writer.write_record(table.header()).map_err(|e| encode_error(DataFormat::Csv, e))?;
        for row in &table.rows {
            let count = row.count.to_string();
            let cells = row.values.iter().map(String::as_str).chain(iter::once(count.as_str()));
            writer.write_record(cells).map_err(|e| encode_error(DataFormat::Csv, e))?;
        }
        writer.flush()?;
        Ok(())
    }
}
