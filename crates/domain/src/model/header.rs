use std::fmt;

use crate::value_objects::FieldName;

/// Ordered field names describing the shape of the input records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header(Vec<FieldName>);

impl Header {
    pub fn new(fields: Vec<FieldName>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[FieldName] {
        &self.0
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|f| f.as_str() == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldName> {
        self.0.iter()
    }
}

impl<S: Into<FieldName>> FromIterator<S> for Header {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Header {
    type Item = &'a FieldName;
    type IntoIter = std::slice::Iter<'a, FieldName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}
