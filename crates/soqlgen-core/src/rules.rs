//! The ordered set of confirmed filter rules.

use crate::catalog::{FieldDescriptor, OperatorId};
use crate::clause::{RuleSummary, RuleValue};
use crate::error::Error;

/// One confirmed filter rule with its compiled artifacts.
///
/// Immutable once created. The display index is not stored here: it is the
/// rule's position in the [`RuleSet`] plus one, so deletions can never leave
/// a stale index behind.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRule {
    /// The field the rule filters on.
    pub field: FieldDescriptor,
    /// The chosen operator.
    pub operator: OperatorId,
    /// The raw user value the fragment was built from.
    pub raw_value: RuleValue,
    /// Display summary for the rule list.
    pub summary: RuleSummary,
    /// Compiled WHERE fragment.
    pub fragment: String,
}

/// Ordered collection of confirmed rules. Display order is insertion order;
/// indices are always exactly `1..=len()`.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<FilterRule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of confirmed rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no rules are confirmed.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append a rule, returning its display index.
    pub fn append(&mut self, rule: FilterRule) -> usize {
        tracing::debug!(field = %rule.field.api_name, fragment = %rule.fragment, "rule appended");
        self.rules.push(rule);
        self.rules.len()
    }

    /// Remove the rule at the given 1-based display index.
    ///
    /// Subsequent rules shift down, so indices stay contiguous. Fragments
    /// do not embed indices and are untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<FilterRule, Error> {
        if index == 0 || index > self.rules.len() {
            return Err(Error::RuleIndexOutOfRange {
                index,
                len: self.rules.len(),
            });
        }
        tracing::debug!(index, "rule removed");
        Ok(self.rules.remove(index - 1))
    }

    /// Discard every rule.
    pub fn reset(&mut self) {
        tracing::debug!(count = self.rules.len(), "rule set reset");
        self.rules.clear();
    }

    /// Iterate rules with their current 1-based display indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &FilterRule)> {
        self.rules.iter().enumerate().map(|(i, rule)| (i + 1, rule))
    }

    /// The compiled fragments, in display order.
    pub fn fragments(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.fragment.as_str()).collect()
    }

    /// The display summaries, in display order.
    pub fn summaries(&self) -> Vec<&RuleSummary> {
        self.rules.iter().map(|rule| &rule.summary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FieldType, OperatorSpec};
    use crate::clause::{build_fragment, build_summary};
    use crate::locale::Locale;

    fn rule(api: &str, value: &str) -> FilterRule {
        let field = FieldDescriptor::new(api, api, FieldType::String);
        let spec = OperatorSpec::get(OperatorId::Equals);
        let value = RuleValue::from(value);
        let fragment = build_fragment(&field, spec, &value).unwrap();
        let summary = build_summary(&field, spec.id, &value, &Locale::en());
        FilterRule {
            field,
            operator: spec.id,
            raw_value: value,
            summary,
            fragment,
        }
    }

    fn indices(set: &RuleSet) -> Vec<usize> {
        set.iter().map(|(i, _)| i).collect()
    }

    #[test]
    fn test_append_assigns_next_index() {
        let mut set = RuleSet::new();
        assert_eq!(set.append(rule("A", "1")), 1);
        assert_eq!(set.append(rule("B", "2")), 2);
        assert_eq!(set.append(rule("C", "3")), 3);
        assert_eq!(indices(&set), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_renumbers_contiguously() {
        let mut set = RuleSet::new();
        set.append(rule("A", "1"));
        set.append(rule("B", "2"));
        set.append(rule("C", "3"));

        let removed = set.remove_at(2).unwrap();
        assert_eq!(removed.field.api_name, "B");
        assert_eq!(indices(&set), vec![1, 2]);

        // Fragments survive renumbering untouched.
        assert_eq!(set.fragments(), vec!["A = '1'", "C = '3'"]);
    }

    #[test]
    fn test_remove_then_append_restores_contiguity() {
        let mut set = RuleSet::new();
        set.append(rule("A", "1"));
        set.append(rule("B", "2"));
        set.remove_at(1).unwrap();
        assert_eq!(set.append(rule("C", "3")), 2);
        assert_eq!(indices(&set), vec![1, 2]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut set = RuleSet::new();
        set.append(rule("A", "1"));
        assert!(matches!(
            set.remove_at(0),
            Err(Error::RuleIndexOutOfRange { .. })
        ));
        assert!(matches!(
            set.remove_at(2),
            Err(Error::RuleIndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut set = RuleSet::new();
        set.append(rule("A", "1"));
        set.append(rule("B", "2"));
        set.reset();
        assert!(set.is_empty());
        assert_eq!(set.append(rule("C", "3")), 1);
    }

    #[test]
    fn test_indices_always_contiguous_under_mixed_ops() {
        let mut set = RuleSet::new();
        for i in 0..5 {
            set.append(rule(&format!("F{i}"), "v"));
        }
        set.remove_at(5).unwrap();
        set.remove_at(1).unwrap();
        set.append(rule("G", "v"));
        set.remove_at(2).unwrap();
        let expected: Vec<usize> = (1..=set.len()).collect();
        assert_eq!(indices(&set), expected);
    }
}
