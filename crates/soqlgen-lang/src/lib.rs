//! soqlgen custom logic expression language.
//!
//! Users combine numbered filter rules with a free-text boolean expression
//! such as `(1 AND 2) OR 3`. This crate tokenizes that text, validates it
//! structurally and against the current rule count, and substitutes each
//! rule number with its WHERE fragment to produce the compound clause.
//!
//! # Expression syntax
//!
//! ```text
//! 1 AND 2
//! (1 OR 2) AND 3
//! ((1 AND 2) OR (3 AND 4)) AND 5
//! 1 AND (2 OR 1)          -- duplicate references are allowed
//! ```
//!
//! Connectives are uppercase `AND`/`OR`; rule numbers are 1-based display
//! indices; whitespace is insignificant.
//!
//! # Usage
//!
//! ```rust
//! use soqlgen_lang::compile;
//!
//! let fragments = ["Name = 'Acme'", "Amount > 100", "Stage = 'Won'"];
//! let clause = compile("(1 OR 2) AND 3", &fragments).unwrap();
//! assert_eq!(clause, "(Name = 'Acme' OR Amount > 100) AND Stage = 'Won'");
//! ```
//!
//! # Failure kinds
//!
//! Validation reports exactly one of three kinds, checked in order:
//! [`LogicErrorKind::MalformedExpression`], [`LogicErrorKind::IndexOutOfRange`],
//! [`LogicErrorKind::UnusedOrMissingRule`]. No partial clause is ever
//! produced.

pub mod ast;
pub mod compiler;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::LogicExpr;
pub use compiler::{compile, substitute, validate};
pub use error::{LogicError, LogicErrorKind};
pub use lexer::{tokenize, SpannedToken, Token};
pub use parser::parse;
pub use span::{Span, Spanned};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_happy_path() {
        let fragments = ["A = 1", "B = 2"];
        assert_eq!(compile("1 AND 2", &fragments).unwrap(), "A = 1 AND B = 2");
    }

    #[test]
    fn test_error_carries_message_key() {
        let err = compile("1 AND", &["A = 1"]).unwrap_err();
        assert_eq!(err.kind, LogicErrorKind::MalformedExpression);
        assert_eq!(err.kind.message_key(), "wrongCustomLogicErrorMsg");
    }

    #[test]
    fn test_error_renders_with_source() {
        let source = "1 AND 4";
        let err = compile(source, &["A = 1"]).unwrap_err();
        assert_eq!(err.kind, LogicErrorKind::IndexOutOfRange);
        let rendered = err.format_with_source(source);
        assert!(rendered.contains("1 AND 4"));
        assert!(rendered.contains('^'));
    }
}
