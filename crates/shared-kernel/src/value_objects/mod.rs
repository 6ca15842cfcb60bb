// crates/shared-kernel/src/value_objects/mod.rs
pub mod field_name;

pub use field_name::FieldName;
