//! Final SELECT statement assembly.

use crate::error::Error;

/// Connective used when rules are chained without custom logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    /// The query-language keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

/// Join fragments with a single connective: `f1 AND f2 AND f3`.
pub fn combine(fragments: &[&str], connective: Connective) -> String {
    fragments.join(&format!(" {} ", connective.as_str()))
}

/// Assemble the complete query text.
///
/// Exact format: `SELECT f1, f2 FROM Object WHERE clause` with a single
/// space around keywords and fields joined by `", "`. Empty inputs are a
/// caller error, never silently tolerated.
pub fn assemble(fields: &[String], object_name: &str, where_clause: &str) -> Result<String, Error> {
    if fields.is_empty() {
        return Err(Error::EmptyFieldList);
    }
    if where_clause.is_empty() {
        return Err(Error::EmptyWhereClause);
    }
    Ok(format!(
        "SELECT {} FROM {} WHERE {}",
        fields.join(", "),
        object_name,
        where_clause
    ))
}
