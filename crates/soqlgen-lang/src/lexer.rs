//! Lexer for custom logic expressions using logos.
//!
//! The alphabet is tiny: `AND`, `OR`, parentheses, and digit runs.
//! Whitespace separates tokens; anything else fails the well-formedness
//! check before parsing even starts.

use crate::error::LogicError;
use crate::span::Span;
use logos::Logos;

/// Token types for the logic expression language.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    #[token("AND")]
    And,
    #[token("OR")]
    Or,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // A maximal digit run is one rule index token. Runs too long for u64
    // saturate; the range check rejects them against the real rule count.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().unwrap_or(u64::MAX))]
    Index(u64),
}

impl Token {
    /// Short description for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Token::And => "'AND'",
            Token::Or => "'OR'",
            Token::LParen => "'('",
            Token::RParen => "')'",
            Token::Index(_) => "rule number",
        }
    }
}

/// A token with its span in the expression text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

/// Tokenize an expression, rejecting any character outside the alphabet.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, LogicError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let span: Span = lexer.span().into();
        match result {
            Ok(token) => tokens.push(SpannedToken { token, span }),
            Err(()) => {
                return Err(LogicError::malformed(
                    format!("unexpected character '{}'", lexer.slice()),
                    span,
                ));
            }
        }
    }
    Ok(tokens)
}
