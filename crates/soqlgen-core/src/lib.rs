//! soqlgen-core — field catalog, operator resolver, and clause builder.
//!
//! This crate turns one typed filter rule (field descriptor + operator +
//! raw value) into a WHERE fragment and a display summary, keeps the
//! ordered set of confirmed rules, and assembles the final SELECT text.
//! Combining fragments through a user-authored boolean expression lives in
//! the companion `soqlgen-lang` crate.

pub mod catalog;
pub mod clause;
pub mod error;
pub mod locale;
pub mod query;
pub mod rules;
pub mod schema;

pub use catalog::{
    catalog, operators_for, FieldDescriptor, FieldType, OperatorId, OperatorSpec, KEY_PLACEHOLDER,
};
pub use clause::{build_fragment, build_summary, RuleSummary, RuleValue};
pub use error::Error;
pub use locale::{
    Locale, MSG_INDEX_OUT_OF_RANGE, MSG_MALFORMED_EXPRESSION, MSG_UNUSED_OR_MISSING_RULE,
};
pub use query::{assemble, combine, Connective};
pub use rules::{FilterRule, RuleSet};
pub use schema::{SchemaProvider, StaticSchemaProvider};
