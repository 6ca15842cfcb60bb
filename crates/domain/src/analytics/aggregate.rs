use std::fmt;

use indexmap::IndexMap;

use crate::{config::GroupingConfig, model::Record, value_objects::FieldName};

/// Canonical identity of a field combination: the lower-cased, trimmed required
/// values joined by the configured delimiter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey(String);

impl GroupKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Representative values of the first record seen for a key, plus how many
/// records share that key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    values: Vec<String>,
    count: usize,
}

impl GroupEntry {
    fn first(values: Vec<String>) -> Self {
        Self { values, count: 1 }
    }

    /// Values aligned with [`GroupingConfig::required_fields`].
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Groups in order of first occurrence in the input.
#[derive(Debug, Clone, Default)]
pub struct AggregationResult {
    fields: Vec<FieldName>,
    groups: IndexMap<GroupKey, GroupEntry>,
    records: usize,
}

impl AggregationResult {
    /// Field names the entry values are aligned with.
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records folded into the groups.
    pub fn total_records(&self) -> usize {
        self.records
    }

    pub fn get(&self, key: &GroupKey) -> Option<&GroupEntry> {
        self.groups.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &GroupEntry)> {
        self.groups.iter()
    }

    pub fn entries(&self) -> impl Iterator<Item = &GroupEntry> {
        self.groups.values()
    }

    /// Value of `field` in `entry`, `""` when the field is not a grouping field.
    pub fn value_of<'a>(&self, entry: &'a GroupEntry, field: &str) -> &'a str {
        self.fields.iter().position(|f| f.as_str() == field).map_or("", |i| entry.values[i].as_str())
    }
}

/// Counts records per unique combination of the configured required fields.
///
/// Keys compare case-insensitively after trimming, so `Red` and ` red` share a
/// group. The displayed values are those of the record that opened the group and
/// are never overwritten by later duplicates. Records lacking a required field
/// are grouped with an empty value for it.
pub struct Aggregator<'a> {
    config: &'a GroupingConfig,
}

impl<'a> Aggregator<'a> {
    pub fn new(config: &'a GroupingConfig) -> Self {
        Self { config }
    }

    pub fn aggregate<'r, I>(&self, records: I) -> AggregationResult
    where
        I: IntoIterator<Item = &'r Record>,
    {
        let mut groups: IndexMap<GroupKey, GroupEntry> = IndexMap::new();
        let mut total = 0;
        for record in records {
            total += 1;
            let values = self.extract(record);
            let key = self.key_for(&values);
            groups.entry(key).and_modify(|entry| entry.count += 1).or_insert_with(|| GroupEntry::first(values));
        }
        AggregationResult { fields: self.config.required_fields().to_vec(), groups, records: total }
    }

    /// Group key of a single record.
    pub fn group_key(&self, record: &Record) -> GroupKey {
        self.key_for(&self.extract(record))
    }

    fn extract(&self, record: &Record) -> Vec<String> {
        self.config.required_fields().iter().map(|f| record.value_or_empty(f.as_str()).to_string()).collect()
    }

    fn key_for(&self, values: &[String]) -> GroupKey {
        let mut key = String::with_capacity(values.iter().map(|v| v.len() + 1).sum());
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                key.push(self.config.key_delimiter());
            }
            key.push_str(&value.trim().to_lowercase());
        }
        GroupKey(key)
    }
}
