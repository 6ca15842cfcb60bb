use product_grouper_shared_kernel::{DomainError, DomainResult};

use crate::{model::Header, value_objects::FieldName};

/// Ensures every `required` field appears in `header` (exact, case-sensitive match).
///
/// On failure the error lists all absent fields in `required` order, not only the first.
pub fn validate_required_fields(header: &Header, required: &[FieldName]) -> DomainResult<()> {
    let missing: Vec<FieldName> = required.iter().filter(|f| !header.contains(f.as_str())).cloned().collect();
    if missing.is_empty() { Ok(()) } else { Err(DomainError::MissingFields { fields: missing }) }
}
