//! Error types for custom logic compilation.

use crate::span::Span;
use thiserror::Error;

/// The three user-visible failure kinds, checked in this order.
///
/// Each kind carries a localization message key the presentation layer
/// resolves to translated text; the messages here are developer-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicErrorKind {
    /// The expression is not a well-formed boolean expression.
    MalformedExpression,
    /// A referenced rule number is outside `1..=rule_count`.
    IndexOutOfRange,
    /// Not every existing rule is referenced.
    UnusedOrMissingRule,
}

impl LogicErrorKind {
    /// The localization key the presentation layer uses for this kind.
    pub fn message_key(&self) -> &'static str {
        match self {
            LogicErrorKind::MalformedExpression => "wrongCustomLogicErrorMsg",
            LogicErrorKind::IndexOutOfRange => "wrongCustomLogicNumbersErrorMsg",
            LogicErrorKind::UnusedOrMissingRule => "unusedFilterRulesInCustomLogicErrorMsg",
        }
    }
}

/// A custom logic compilation error.
#[derive(Debug, Clone, Error)]
pub struct LogicError {
    /// Error kind for programmatic handling.
    pub kind: LogicErrorKind,
    /// Developer-facing message.
    pub message: String,
    /// Where in the expression the error was detected.
    pub span: Span,
}

impl std::fmt::Display for LogicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl LogicError {
    /// Create a new error.
    pub fn new(kind: LogicErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }

    /// A malformed-expression error.
    pub fn malformed(message: impl Into<String>, span: Span) -> Self {
        Self::new(LogicErrorKind::MalformedExpression, message, span)
    }

    /// An index-out-of-range error.
    pub fn out_of_range(index: u64, rule_count: usize, span: Span) -> Self {
        Self::new(
            LogicErrorKind::IndexOutOfRange,
            format!("rule number {index} does not exist (rule count {rule_count})"),
            span,
        )
    }

    /// An unused-or-missing-rule error.
    pub fn unused_rules(missing: &[u64], span: Span) -> Self {
        let list = missing
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(
            LogicErrorKind::UnusedOrMissingRule,
            format!("expression does not reference rule(s) {list}"),
            span,
        )
    }

    /// Render the error with the expression text and a caret under the
    /// offending range.
    pub fn format_with_source(&self, source: &str) -> String {
        let mut out = format!("error: {}\n", self.message);
        out.push_str(&format!("  | {source}\n  | "));
        for _ in 0..self.span.start.min(source.len()) {
            out.push(' ');
        }
        out.push('^');
        for _ in 1..self.span.len().max(1) {
            out.push('~');
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_keys() {
        assert_eq!(
            LogicErrorKind::MalformedExpression.message_key(),
            "wrongCustomLogicErrorMsg"
        );
        assert_eq!(
            LogicErrorKind::IndexOutOfRange.message_key(),
            "wrongCustomLogicNumbersErrorMsg"
        );
        assert_eq!(
            LogicErrorKind::UnusedOrMissingRule.message_key(),
            "unusedFilterRulesInCustomLogicErrorMsg"
        );
    }

    #[test]
    fn test_caret_rendering() {
        let source = "(1 AND) 2";
        let err = LogicError::malformed("expected rule number or '('", Span::new(6, 7));
        let formatted = err.format_with_source(source);
        assert!(formatted.contains("error: expected rule number or '('"));
        assert!(formatted.contains("  | (1 AND) 2"));
        // Caret sits under the closing paren.
        assert!(formatted.contains("  |       ^"));
    }
}
