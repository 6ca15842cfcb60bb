// crates/infra/src/formats/xml.rs
use std::io::Write;

use log::{debug, warn};
use product_grouper_domain::options::DataFormat;
use product_grouper_ports::{
    dataset::{DatasetReader, RawDataset, RawRecord},
    table::{GroupTable, GroupTableWriter},
};
use product_grouper_shared_kernel::{GrouperError, InfrastructureError, Result};
use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use super::{encode_error, parse_error};

const ROOT_ELEMENT: &str = "rows";
const ROW_ELEMENT: &str = "row";

/// A root element holding repeated `<row>` elements whose attributes and child
/// elements are the fields.
///
/// Output uses `<rows>` as the root and one child element per column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmlFormat;

impl DatasetReader for XmlFormat {
    fn read(&self, input: &[u8]) -> Result<RawDataset> {
        let text = std::str::from_utf8(input).map_err(|e| parse_error(DataFormat::Xml, e))?;
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);

        let mut root_seen = false;
        let mut records = Vec::new();
        loop {
            let event = reader.read_event().map_err(|e| xml_error(&reader, e))?;
            match event {
                Event::Start(_) if !root_seen => root_seen = true,
                Event::Empty(_) if !root_seen => {
                    root_seen = true;
                    break;
                }
                Event::Start(e) if e.name().as_ref() == ROW_ELEMENT.as_bytes() => {
                    let mut fields = attributes(&reader, &e)?;
                    read_row_children(&mut reader, &mut fields)?;
                    records.push(RawRecord::new(fields));
                }
                Event::Empty(e) if e.name().as_ref() == ROW_ELEMENT.as_bytes() => {
                    records.push(RawRecord::new(attributes(&reader, &e)?));
                }
                Event::Start(e) => {
                    debug!("skipping <{}> under the root", String::from_utf8_lossy(e.name().as_ref()));
                    reader.read_to_end(e.name()).map_err(|err| xml_error(&reader, err))?;
                }
                // Closing tag of the root; nothing after it can hold rows.
                Event::End(_) => break,
                Event::Eof => break,
                _ => {}
            }
        }

        if !root_seen {
            return Err(parse_error(DataFormat::Xml, "document has no root element"));
        }
        let Some(first) = records.first() else {
            return Err(InfrastructureError::NoRecords {
                format: DataFormat::Xml.label().to_string(),
                reason: format!("no <{ROW_ELEMENT}> elements under the root"),
            }
            .into());
        };
        let header = first.fields.iter().map(|(name, _)| name.clone()).collect();
        Ok(RawDataset { header, records })
    }
}

fn xml_error(reader: &Reader<&[u8]>, err: impl std::fmt::Display) -> GrouperError {
    parse_error(DataFormat::Xml, format!("at byte {}: {err}", reader.buffer_position()))
}

fn attributes(reader: &Reader<&[u8]>, element: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
    element
        .attributes()
        .map(|attr| {
            let attr = attr.map_err(|e| xml_error(reader, e))?;
            let value = attr.unescape_value().map_err(|e| xml_error(reader, e))?;
            Ok((String::from_utf8_lossy(attr.key.as_ref()).into_owned(), value.into_owned()))
        })
        .collect()
}

/// Consumes a row up to its closing tag, appending one field per child element.
/// A child name seen twice in the same row keeps its first value.
fn read_row_children(reader: &mut Reader<&[u8]>, fields: &mut Vec<(String, String)>) -> Result<()> {
    loop {
        match reader.read_event().map_err(|e| xml_error(reader, e))? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let value = read_text(reader)?;
                push_field(fields, name, value);
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                push_field(fields, name, String::new());
            }
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(parse_error(DataFormat::Xml, format!("unclosed <{ROW_ELEMENT}> element"))),
            _ => {}
        }
    }
}

fn push_field(fields: &mut Vec<(String, String)>, name: String, value: String) {
    if fields.iter().any(|(existing, _)| *existing == name) {
        warn!("<{name}> repeated within a row; keeping the first value");
        return;
    }
    fields.push((name, value));
}

/// Collects the text content of the element whose start tag was just read,
/// including text of nested elements, up to its matching end tag.
fn read_text(reader: &mut Reader<&[u8]>) -> Result<String> {
    let mut text = String::new();
    let mut depth = 0usize;
    loop {
        match reader.read_event().map_err(|e| xml_error(reader, e))? {
            Event::Text(t) => text.push_str(&t.unescape().map_err(|e| xml_error(reader, e))?),
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c.into_inner())),
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return Ok(text),
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(parse_error(DataFormat::Xml, "unexpected end of document inside a field")),
            _ => {}
        }
    }
}

fn write_error(err: impl std::fmt::Display) -> GrouperError {
    encode_error(DataFormat::Xml, err)
}

impl GroupTableWriter for XmlFormat {
    fn write(&self, table: &GroupTable, out: &mut dyn Write) -> Result<()> {
        let mut writer = Writer::new_with_indent(&mut *out, b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None))).map_err(write_error)?;
        writer.write_event(Event::Start(BytesStart::new(ROOT_ELEMENT))).map_err(write_error)?;
        for row in &table.rows {
            writer.write_event(Event::Start(BytesStart::new(ROW_ELEMENT))).map_err(write_error)?;
            let count = row.count.to_string();
            let cells = table
                .columns
                .iter()
                .zip(&row.values)
                .map(|(c, v)| (c.as_str(), v.as_str()))
                .chain(std::iter::once((table.count_column.as_str(), count.as_str())));
            for (name, value) in cells {
                writer.write_event(Event::Start(BytesStart::new(name))).map_err(write_error)?;
                writer.write_event(Event::Text(BytesText::new(value))).map_err(write_error)?;
                writer.write_event(Event::End(BytesEnd::new(name))).map_err(write_error)?;
            }
            writer.write_event(Event::End(BytesEnd::new(ROW_ELEMENT))).map_err(write_error)?;
        }
        writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT))).map_err(write_error)?;
        writeln!(writer.into_inner())?;
        Ok(())
    }
}
