//! Parse tree for custom logic expressions.

use crate::span::{Span, Spanned};

/// A parsed boolean expression over rule indices.
///
/// The tree exists only to validate structure and references; the final
/// clause is substituted from the original text, never re-serialized from
/// this tree, so the author's grouping survives verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicExpr {
    /// A rule reference by 1-based display index.
    Rule(Spanned<u64>),
    /// Conjunction of two or more operands.
    And(Vec<LogicExpr>),
    /// Disjunction of two or more operands.
    Or(Vec<LogicExpr>),
}

impl LogicExpr {
    /// Collect every rule reference, left to right.
    pub fn references(&self, out: &mut Vec<Spanned<u64>>) {
        match self {
            LogicExpr::Rule(index) => out.push(*index),
            LogicExpr::And(operands) | LogicExpr::Or(operands) => {
                for operand in operands {
                    operand.references(out);
                }
            }
        }
    }

    /// The source span this expression covers.
    pub fn span(&self) -> Span {
        match self {
            LogicExpr::Rule(index) => index.span,
            LogicExpr::And(operands) | LogicExpr::Or(operands) => operands
                .iter()
                .map(LogicExpr::span)
                .reduce(Span::merge)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(index: u64, start: usize) -> LogicExpr {
        LogicExpr::Rule(Spanned::new(index, Span::new(start, start + 1)))
    }

    #[test]
    fn test_references_left_to_right() {
        let expr = LogicExpr::Or(vec![
            LogicExpr::And(vec![rule(1, 1), rule(2, 7)]),
            rule(1, 13),
        ]);
        let mut refs = Vec::new();
        expr.references(&mut refs);
        let values: Vec<u64> = refs.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![1, 2, 1]);
    }

    #[test]
    fn test_span_covers_operands() {
        let expr = LogicExpr::And(vec![rule(1, 0), rule(2, 8)]);
        assert_eq!(expr.span(), Span::new(0, 9));
    }
}
