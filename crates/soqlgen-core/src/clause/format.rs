//! Human-readable rule summaries.
//!
//! Summary formatting is independent of fragment formatting: the display
//! locale must never leak into the query literal, so both are computed
//! from the same raw value.

use super::RuleValue;
use crate::catalog::{FieldDescriptor, FieldType, OperatorId};
use crate::locale::Locale;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// What the presentation layer shows for one confirmed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSummary {
    /// Field display label.
    pub field: String,
    /// Localized operator label.
    pub operator: String,
    /// Display-formatted value.
    pub value: String,
}

/// Build the display summary for a rule.
///
/// Unparseable date/datetime input passes through unchanged; the
/// presentation layer validated it, and a summary is display-only.
pub fn build_summary(
    field: &FieldDescriptor,
    operator: OperatorId,
    value: &RuleValue,
    locale: &Locale,
) -> RuleSummary {
    let value = match value {
        RuleValue::List(values) => values.join(";"),
        RuleValue::Scalar(raw) => match field.field_type {
            FieldType::Date => format_date(raw),
            FieldType::DateTime => format_datetime(raw),
            FieldType::Time => format_time(raw),
            FieldType::Boolean => locale.boolean_label(raw == "true").to_string(),
            _ => raw.clone(),
        },
    };

    RuleSummary {
        field: field.label.clone(),
        operator: locale.operator_label(operator).to_string(),
        value,
    }
}

/// `YYYY-MM-DD` input to `DD/MM/YYYY`. Day-of-month, not day-of-week.
fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// ISO datetime input to `DD/MM/YYYY HH:MM` (24-hour, zero-padded).
fn format_datetime(raw: &str) -> String {
    let trimmed = raw.strip_suffix('Z').unwrap_or(raw);
    let parsed = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"));
    match parsed {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Truncate `HH:MM:SS[.fff]` to `HH:MM`; an `HH:MM` input is left alone.
fn format_time(raw: &str) -> String {
    raw.split(':').take(2).collect::<Vec<_>>().join(":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldDescriptor;

    fn locale() -> Locale {
        Locale::en()
    }

    #[test]
    fn test_date_summary_uses_day_of_month() {
        let field = FieldDescriptor::new("Birthdate", "Birth Date", FieldType::Date);
        let summary = build_summary(
            &field,
            OperatorId::Equals,
            &"2024-03-15".into(),
            &locale(),
        );
        assert_eq!(summary.field, "Birth Date");
        assert_eq!(summary.operator, "equals");
        assert_eq!(summary.value, "15/03/2024");
    }

    #[test]
    fn test_datetime_summary() {
        let field = FieldDescriptor::new("CreatedDate", "Created", FieldType::DateTime);
        let summary = build_summary(
            &field,
            OperatorId::LessThan,
            &"2024-03-15T09:05:30".into(),
            &locale(),
        );
        assert_eq!(summary.value, "15/03/2024 09:05");

        let summary = build_summary(
            &field,
            OperatorId::LessThan,
            &"2024-12-01T23:59".into(),
            &locale(),
        );
        assert_eq!(summary.value, "01/12/2024 23:59");
    }

    #[test]
    fn test_time_summary_truncates_seconds() {
        let field = FieldDescriptor::new("StartTime", "Start", FieldType::Time);
        let summary = build_summary(
            &field,
            OperatorId::GreaterThan,
            &"14:30:00".into(),
            &locale(),
        );
        assert_eq!(summary.value, "14:30");

        let summary = build_summary(&field, OperatorId::GreaterThan, &"14:30".into(), &locale());
        assert_eq!(summary.value, "14:30");
    }

    #[test]
    fn test_boolean_summary_is_localized() {
        let field = FieldDescriptor::new("IsActive", "Active", FieldType::Boolean);
        let fr = Locale::fr();
        let summary = build_summary(&field, OperatorId::Equals, &"true".into(), &fr);
        assert_eq!(summary.value, "vrai");
        let summary = build_summary(&field, OperatorId::Equals, &"false".into(), &fr);
        assert_eq!(summary.value, "faux");
    }

    #[test]
    fn test_other_types_pass_through() {
        let field = FieldDescriptor::new("Name", "Name", FieldType::String);
        let summary = build_summary(&field, OperatorId::Contains, &"Acme".into(), &locale());
        assert_eq!(summary.value, "Acme");
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        let field = FieldDescriptor::new("Birthdate", "Birth Date", FieldType::Date);
        let summary = build_summary(&field, OperatorId::Equals, &"not-a-date".into(), &locale());
        assert_eq!(summary.value, "not-a-date");
    }

    #[test]
    fn test_list_value_joined() {
        let field = FieldDescriptor::new("Tags__c", "Tags", FieldType::Multipicklist);
        let value = RuleValue::from(vec!["A".to_string(), "B".to_string()]);
        let summary = build_summary(&field, OperatorId::Contains, &value, &locale());
        assert_eq!(summary.value, "A;B");
    }
}
