//! Validation and substitution for custom logic expressions.
//!
//! Three checks run in a fixed order and the first failure wins:
//! well-formedness (the parse itself), index range, then completeness.
//! Substitution operates on the original text so the author's exact
//! connectives and parentheses reach the output verbatim.

use crate::ast::LogicExpr;
use crate::error::LogicError;
use crate::parser::parse;
use crate::span::Span;
use std::collections::BTreeSet;

/// Validate a parsed expression against the current rule count.
///
/// Runs the range check (every reference in `1..=rule_count`), then the
/// completeness check (every rule referenced at least once). Duplicate
/// references are fine.
pub fn validate(expr: &LogicExpr, rule_count: usize) -> Result<(), LogicError> {
    let mut refs = Vec::new();
    expr.references(&mut refs);

    for reference in &refs {
        if reference.value == 0 || reference.value > rule_count as u64 {
            return Err(LogicError::out_of_range(
                reference.value,
                rule_count,
                reference.span,
            ));
        }
    }

    let distinct: BTreeSet<u64> = refs.iter().map(|r| r.value).collect();
    if distinct.len() != rule_count {
        let missing: Vec<u64> = (1..=rule_count as u64)
            .filter(|i| !distinct.contains(i))
            .collect();
        return Err(LogicError::unused_rules(&missing, expr.span()));
    }

    Ok(())
}

/// Replace each maximal digit run in `source` with the fragment of the
/// rule it references. Keywords, parentheses, and whitespace pass through
/// unchanged.
///
/// Callers must have validated the expression first; an unresolvable
/// reference still reports cleanly rather than emitting a partial clause.
pub fn substitute(source: &str, fragments: &[&str]) -> Result<String, LogicError> {
    let bytes = source.as_bytes();
    let mut out = String::with_capacity(source.len());
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos].is_ascii_digit() {
            let start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            let run = &source[start..pos];
            let span = Span::new(start, pos);
            let index: u64 = run.parse().unwrap_or(u64::MAX);
            let fragment = usize::try_from(index)
                .ok()
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| fragments.get(i))
                .ok_or_else(|| LogicError::out_of_range(index, fragments.len(), span))?;
            out.push_str(fragment);
        } else {
            let ch = match source[pos..].chars().next() {
                Some(ch) => ch,
                None => break,
            };
            out.push(ch);
            pos += ch.len_utf8();
        }
    }

    Ok(out)
}

/// Parse, validate, and substitute in one step.
///
/// `fragments` are the rule WHERE fragments in display order; their count
/// is the rule count the expression is validated against.
pub fn compile(source: &str, fragments: &[&str]) -> Result<String, LogicError> {
    let expr = parse(source)?;
    validate(&expr, fragments.len())?;
    substitute(source, fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogicErrorKind;
    use pretty_assertions::assert_eq;

    const FRAGMENTS: [&str; 3] = ["A=1", "B=2", "C=3"];

    fn kind(source: &str, fragments: &[&str]) -> LogicErrorKind {
        compile(source, fragments).unwrap_err().kind
    }

    #[test]
    fn test_compile_preserves_author_text() {
        let clause = compile("(1 OR 2) AND 3", &FRAGMENTS).unwrap();
        assert_eq!(clause, "(A=1 OR B=2) AND C=3");
    }

    #[test]
    fn test_compile_keeps_spacing_verbatim() {
        let clause = compile("( 1  OR 2 )AND 3", &FRAGMENTS).unwrap();
        assert_eq!(clause, "( A=1  OR B=2 )AND C=3");
    }

    #[test]
    fn test_compile_with_duplicates() {
        let clause = compile("1 AND (2 OR 3) AND 1", &FRAGMENTS).unwrap();
        assert_eq!(clause, "A=1 AND (B=2 OR C=3) AND A=1");
    }

    #[test]
    fn test_three_rule_acceptance() {
        assert!(compile("(1 AND 2) OR 3", &FRAGMENTS).is_ok());
    }

    #[test]
    fn test_unreferenced_rule_fails_completeness() {
        assert_eq!(
            kind("(1 AND 2)", &FRAGMENTS),
            LogicErrorKind::UnusedOrMissingRule
        );
    }

    #[test]
    fn test_out_of_range_reference() {
        assert_eq!(kind("(1 AND 4)", &FRAGMENTS), LogicErrorKind::IndexOutOfRange);
    }

    #[test]
    fn test_malformed_expression() {
        assert_eq!(kind("(1 AND) 2", &FRAGMENTS), LogicErrorKind::MalformedExpression);
    }

    #[test]
    fn test_zero_is_out_of_range() {
        assert_eq!(kind("0 AND 1", &["A=1"]), LogicErrorKind::IndexOutOfRange);
    }

    #[test]
    fn test_check_order_malformed_wins() {
        // Malformed and out-of-range at once: well-formedness reports first.
        assert_eq!(kind("(9 AND", &FRAGMENTS), LogicErrorKind::MalformedExpression);
    }

    #[test]
    fn test_check_order_range_beats_completeness() {
        // References 4 (out of range) and omits 2 and 3: range reports first.
        assert_eq!(kind("1 AND 4", &FRAGMENTS), LogicErrorKind::IndexOutOfRange);
    }

    #[test]
    fn test_oversized_index_is_out_of_range() {
        assert_eq!(
            kind("1 AND 99999999999999999999999", &["A=1"]),
            LogicErrorKind::IndexOutOfRange
        );
    }

    #[test]
    fn test_multi_digit_indices_substitute_whole_runs() {
        let fragments: Vec<String> = (1..=12).map(|i| format!("F{i}=1")).collect();
        let refs: Vec<&str> = fragments.iter().map(String::as_str).collect();
        let source = "1 AND 2 AND 3 AND 4 AND 5 AND 6 AND 7 AND 8 AND 9 AND 10 AND 11 AND 12";
        let clause = compile(source, &refs).unwrap();
        assert!(clause.ends_with("F10=1 AND F11=1 AND F12=1"));
        assert!(clause.starts_with("F1=1 AND F2=1"));
    }

    #[test]
    fn test_validate_standalone() {
        let expr = parse("2 OR 1").unwrap();
        assert!(validate(&expr, 2).is_ok());
        assert_eq!(
            validate(&expr, 3).unwrap_err().kind,
            LogicErrorKind::UnusedOrMissingRule
        );
        assert_eq!(
            validate(&expr, 1).unwrap_err().kind,
            LogicErrorKind::IndexOutOfRange
        );
    }

    #[test]
    fn test_no_partial_output_on_failure() {
        assert!(compile("1 AND 5", &FRAGMENTS).is_err());
    }
}
