//! Core error types.

use crate::catalog::{FieldType, OperatorId};
use thiserror::Error;

/// Errors raised by the catalog, clause builder, rule set, and assembler.
///
/// Everything here is a caller contract violation: the presentation layer
/// validates user input before it reaches these components, so these are
/// programming errors in the surrounding layer and fail loudly.
#[derive(Debug, Error)]
pub enum Error {
    /// Field is not part of the active field set.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Operator is not legal for the field's type.
    #[error("operator {operator:?} is not applicable to type {field_type}")]
    IllegalOperator {
        operator: OperatorId,
        field_type: FieldType,
    },

    /// Value shape does not match the field type (e.g. a scalar for
    /// MULTIPICKLIST, or a value list for a scalar field).
    #[error("{field_type} field expects a {expected} value")]
    ValueShape {
        field_type: FieldType,
        expected: &'static str,
    },

    /// An unquoted literal contained characters outside the safe alphabet.
    #[error("unsafe unquoted literal '{0}'")]
    UnsafeLiteral(String),

    /// Rule index outside `1..=len`.
    #[error("rule index {index} out of range (rule count {len})")]
    RuleIndexOutOfRange { index: usize, len: usize },

    /// Query assembly requires at least one projected field.
    #[error("cannot assemble a query with no fields")]
    EmptyFieldList,

    /// Query assembly requires a non-empty WHERE clause.
    #[error("cannot assemble a query with an empty where clause")]
    EmptyWhereClause,

    /// Schema provider has no such field set.
    #[error("field set '{field_set}' not found on object '{object}'")]
    FieldSetNotFound { object: String, field_set: String },

    /// Schema file could not be decoded.
    #[error("schema decode error: {0}")]
    SchemaDecode(#[from] serde_json::Error),
}
