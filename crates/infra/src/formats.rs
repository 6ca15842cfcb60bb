// crates/infra/src/formats.rs
//! Format adapters. [`FormatAdapter`] is chosen once from a [`DataFormat`] and
//! then serves as both the dataset reader and the group-table writer.

pub mod delimited;
pub mod json;
pub mod xml;

use std::io::Write;

use product_grouper_domain::options::DataFormat;
use product_grouper_ports::{
    dataset::{DatasetReader, RawDataset},
    table::{GroupTable, GroupTableWriter},
};
use product_grouper_shared_kernel::{GrouperError, InfrastructureError, Result};

pub use delimited::CsvFormat;
pub use json::JsonFormat;
pub use xml::XmlFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatAdapter {
    Csv(CsvFormat),
    Json(JsonFormat),
    Xml(XmlFormat),
}

impl FormatAdapter {
    pub fn for_format(format: DataFormat) -> Self {
        match format {
            DataFormat::Csv => Self::Csv(CsvFormat),
            DataFormat::Json => Self::Json(JsonFormat),
            DataFormat::Xml => Self::Xml(XmlFormat),
        }
    }

    pub fn format(&self) -> DataFormat {
        match self {
            Self::Csv(_) => DataFormat::Csv,
            Self::Json(_) => DataFormat::Json,
            Self::Xml(_) => DataFormat::Xml,
        }
    }
}

impl From<DataFormat> for FormatAdapter {
    fn from(format: DataFormat) -> Self {
        Self::for_format(format)
    }
}

impl DatasetReader for FormatAdapter {
    fn read(&self, input: &[u8]) -> Result<RawDataset> {
        match self {
            Self::Csv(f) => f.read(input),
            Self::Json(f) => f.read(input),
            Self::Xml(f) => f.read(input),
        }
    }
}

impl GroupTableWriter for FormatAdapter {
    fn write(&self, table: &GroupTable, out: &mut dyn Write) -> Result<()> {
        match self {
            Self::Csv(f) => f.write(table, out),
            Self::Json(f) => f.write(table, out),
            Self::Xml(f) => f.write(table, out),
        }
    }
}

fn parse_error(format: DataFormat, details: impl std::fmt::Display) -> GrouperError {
    InfrastructureError::Parse { format: format.label().to_string(), details: details.to_string() }.into()
}

fn encode_error(format: DataFormat, details: impl std::fmt::Display) -> GrouperError {
    InfrastructureError::Serialization { format: format.label().to_string(), details: details.to_string() }.into()
}
