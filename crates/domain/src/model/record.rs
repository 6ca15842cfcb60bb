use indexmap::IndexMap;

use crate::{model::Header, value_objects::FieldName};

/// One input row: field name to trimmed value, in source order.
///
/// Values are trimmed once on construction and never change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: IndexMap<FieldName, String>,
}

impl Record {
    /// Builds a record from named values. A repeated name keeps its first value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FieldName>,
        V: AsRef<str>,
    {
        let mut values = IndexMap::new();
        for (name, value) in pairs {
            values.entry(name.into()).or_insert_with(|| value.as_ref().trim().to_string());
        }
        Self { values }
    }

    /// Maps `cells` onto `header` by position. Missing trailing cells become empty
    /// strings; cells beyond the header are dropped.
    pub fn from_positional<I, V>(header: &Header, cells: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let mut cells = cells.into_iter();
        Self::from_pairs(header.iter().map(|field| {
            let value = cells.next().map(|v| v.as_ref().trim().to_string()).unwrap_or_default();
            (field.clone(), value)
        }))
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Value of `field`, or `""` when the record does not carry it.
    pub fn value_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }
}
