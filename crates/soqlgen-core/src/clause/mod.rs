//! WHERE-fragment construction for a single filter rule.

mod format;

pub use format::{build_summary, RuleSummary};

use crate::catalog::{FieldDescriptor, FieldType, OperatorSpec, KEY_PLACEHOLDER};
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The raw value attached to a rule: one string for scalar fields, a
/// selection list for MULTIPICKLIST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Scalar(String),
    List(Vec<String>),
}

impl RuleValue {
    fn as_scalar(&self, field_type: FieldType) -> Result<&str, Error> {
        match self {
            RuleValue::Scalar(s) => Ok(s),
            RuleValue::List(_) => Err(Error::ValueShape {
                field_type,
                expected: "scalar",
            }),
        }
    }

    fn as_list(&self, field_type: FieldType) -> Result<&[String], Error> {
        match self {
            RuleValue::List(values) => Ok(values),
            RuleValue::Scalar(_) => Err(Error::ValueShape {
                field_type,
                expected: "value list",
            }),
        }
    }
}

impl From<&str> for RuleValue {
    fn from(s: &str) -> Self {
        RuleValue::Scalar(s.to_string())
    }
}

impl From<Vec<String>> for RuleValue {
    fn from(values: Vec<String>) -> Self {
        RuleValue::List(values)
    }
}

/// Escape a value for embedding inside a single-quoted literal.
///
/// Backslash first, then the quote: the generated text must never let a
/// user value terminate the literal early.
fn escape_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Check an unquoted literal against the safe alphabet.
///
/// Dates, datetimes, times, numbers, and booleans all fit; anything else
/// (whitespace, quotes, operators) is rejected rather than inlined.
fn checked_unquoted(value: &str) -> Result<&str, Error> {
    let safe = !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, ':' | '.' | '+' | '-'));
    if safe {
        Ok(value)
    } else {
        Err(Error::UnsafeLiteral(value.to_string()))
    }
}

/// Build the WHERE fragment for one rule.
///
/// The four branches are checked in priority order, and that order is a
/// contract: TIME before MULTIPICKLIST before LIKE templates before the
/// general quoted/unquoted literal.
pub fn build_fragment(
    field: &FieldDescriptor,
    operator: &OperatorSpec,
    value: &RuleValue,
) -> Result<String, Error> {
    if !operator.applies_to(field.field_type) {
        return Err(Error::IllegalOperator {
            operator: operator.id,
            field_type: field.field_type,
        });
    }

    // TIME literals are never quoted and always carry the UTC suffix.
    if field.field_type == FieldType::Time {
        let raw = checked_unquoted(value.as_scalar(field.field_type)?)?;
        return Ok(format!("{} {} {}Z", field.api_name, operator.symbol, raw));
    }

    // MULTIPICKLIST swaps the scalar template for set membership.
    if field.field_type == FieldType::Multipicklist {
        let symbol = operator
            .multi_value_symbol
            .ok_or(Error::IllegalOperator {
                operator: operator.id,
                field_type: field.field_type,
            })?;
        let joined = value
            .as_list(field.field_type)?
            .iter()
            .map(|v| escape_quoted(v))
            .collect::<Vec<_>>()
            .join(";");
        return Ok(format!(
            "{} {}",
            field.api_name,
            symbol.replacen(KEY_PLACEHOLDER, &joined, 1)
        ));
    }

    // LIKE templates embed the value inside their own quotes.
    if operator.symbol.contains("LIKE") {
        let escaped = escape_quoted(value.as_scalar(field.field_type)?);
        return Ok(format!(
            "{} {}",
            field.api_name,
            operator.symbol.replacen(KEY_PLACEHOLDER, &escaped, 1)
        ));
    }

    let raw = value.as_scalar(field.field_type)?;
    let literal = if field.field_type.is_unquoted() {
        checked_unquoted(raw)?.to_string()
    } else {
        format!("'{}'", escape_quoted(raw))
    };
    Ok(format!("{} {} {}", field.api_name, operator.symbol, literal))
}
