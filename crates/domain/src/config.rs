use std::collections::HashSet;

use product_grouper_shared_kernel::{DomainError, DomainResult};

use crate::value_objects::FieldName;

/// Product attributes that define a unique combination, in output column order.
pub const PRODUCT_FIELDS: [&str; 7] = [
    "brand_name",
    "model_name",
    "colour_name",
    "gb_spec_name",
    "network_name",
    "grade_name",
    "condition_name",
];

pub const DEFAULT_KEY_DELIMITER: char = '|';
pub const DEFAULT_COUNT_FIELD: &str = "count";

/// Immutable grouping configuration shared by the validator, aggregator and writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingConfig {
    required_fields: Vec<FieldName>,
    key_delimiter: char,
    count_field: FieldName,
}

impl GroupingConfig {
    /// Builds a configuration, rejecting an empty or duplicated field list and a
    /// count column that collides with a grouping field.
    pub fn new(
        required_fields: Vec<FieldName>,
        key_delimiter: char,
        count_field: impl Into<FieldName>,
    ) -> DomainResult<Self> {
        let count_field = count_field.into();
        if required_fields.is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "no grouping fields given".to_string() });
        }
        let mut seen = HashSet::new();
        if let Some(dup) = required_fields.iter().find(|f| !seen.insert(f.as_str())) {
            return Err(DomainError::InvalidConfiguration { reason: format!("field '{dup}' listed twice") });
        }
        if required_fields.contains(&count_field) {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("count column '{count_field}' is also a grouping field"),
            });
        }
        Ok(Self { required_fields, key_delimiter, count_field })
    }

    /// The seven product attributes joined by `|`, counted into `count`.
    pub fn product_defaults() -> Self {
        Self {
            required_fields: PRODUCT_FIELDS.into_iter().map(FieldName::from).collect(),
            key_delimiter: DEFAULT_KEY_DELIMITER,
            count_field: FieldName::from(DEFAULT_COUNT_FIELD),
        }
    }

    pub fn required_fields(&self) -> &[FieldName] {
        &self.required_fields
    }

    pub fn key_delimiter(&self) -> char {
        self.key_delimiter
    }

    pub fn count_field(&self) -> &FieldName {
        &self.count_field
    }

    /// Output columns: the required fields followed by the count column.
    pub fn output_columns(&self) -> impl Iterator<Item = &FieldName> {
        self.required_fields.iter().chain(std::iter::once(&self.count_field))
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self::product_defaults()
    }
}
