//! soqlgen — incremental filter-rule query builder.
//!
//! Build a set of typed field/operator/value filter rules against a known
//! schema and combine them into one SOQL-style SELECT statement, either by
//! plain AND/OR chaining or through a custom boolean expression over rule
//! numbers such as `(1 AND 2) OR 3`.
//!
//! # Usage
//!
//! ```rust
//! use soqlgen::{Logic, QueryBuilder};
//! use soqlgen::core::{FieldDescriptor, FieldType, Locale, OperatorId};
//!
//! let mut builder = QueryBuilder::new(
//!     "Account",
//!     vec![
//!         FieldDescriptor::new("Name", "Account Name", FieldType::String),
//!         FieldDescriptor::new("AnnualRevenue", "Annual Revenue", FieldType::Currency),
//!     ],
//!     vec!["Id".into(), "Name".into()],
//!     Locale::en(),
//! );
//!
//! builder.add_rule("Name", OperatorId::Contains, "corp".into()).unwrap();
//! builder.add_rule("AnnualRevenue", OperatorId::GreaterThan, "50000".into()).unwrap();
//!
//! let query = builder.build_query(&Logic::And).unwrap();
//! assert_eq!(
//!     query,
//!     "SELECT Id, Name FROM Account WHERE Name LIKE '%corp%' AND AnnualRevenue > 50000"
//! );
//! ```
//!
//! The pieces are usable on their own: `soqlgen-core` holds the operator
//! catalog and clause builder, `soqlgen-lang` the custom logic expression
//! compiler. Both are re-exported here.

mod builder;

pub use builder::{BuilderError, FieldOption, Logic, OperatorOption, QueryBuilder};

/// Catalog, clause builder, rule set, schema, and locale types.
pub use soqlgen_core as core;
/// Custom logic expression parser and compiler.
pub use soqlgen_lang as lang;
