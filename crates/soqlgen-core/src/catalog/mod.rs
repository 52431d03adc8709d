//! Field type catalog and operator resolver.

mod field;
mod operators;
mod types;

pub use field::FieldDescriptor;
pub use operators::{catalog, operators_for, OperatorId, OperatorSpec, KEY_PLACEHOLDER};
pub use types::{FieldType, NUMERIC_TYPES, OTHER_TYPES};
