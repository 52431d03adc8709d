//! Recursive descent parser for custom logic expressions.
//!
//! Grammar:
//!
//! ```text
//! expr    := term (OR term)*
//! term    := primary (AND primary)*
//! primary := INDEX | '(' expr ')'
//! ```
//!
//! Structural validation happens here, not through any generic expression
//! evaluator: a parse failure is exactly the malformed-expression case.

use crate::ast::LogicExpr;
use crate::error::LogicError;
use crate::lexer::{tokenize, SpannedToken, Token};
use crate::span::{Span, Spanned};

/// Parser over a pre-tokenized expression.
pub struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
    end: usize,
}

impl Parser {
    /// Tokenize and prepare a parser for the given expression.
    pub fn new(source: &str) -> Result<Self, LogicError> {
        Ok(Self {
            tokens: tokenize(source)?,
            pos: 0,
            end: source.len(),
        })
    }

    /// Parse the complete expression; trailing tokens are an error.
    pub fn parse(mut self) -> Result<LogicExpr, LogicError> {
        let expr = self.parse_or()?;
        if let Some(tok) = self.peek() {
            return Err(LogicError::malformed(
                format!("unexpected {} after expression", tok.token.describe()),
                tok.span,
            ));
        }
        Ok(expr)
    }

    fn parse_or(&mut self) -> Result<LogicExpr, LogicError> {
        let mut left = self.parse_and()?;
        while self.eat(Token::Or) {
            let right = self.parse_and()?;
            left = match left {
                LogicExpr::Or(mut operands) => {
                    operands.push(right);
                    LogicExpr::Or(operands)
                }
                _ => LogicExpr::Or(vec![left, right]),
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<LogicExpr, LogicError> {
        let mut left = self.parse_primary()?;
        while self.eat(Token::And) {
            let right = self.parse_primary()?;
            left = match left {
                LogicExpr::And(mut operands) => {
                    operands.push(right);
                    LogicExpr::And(operands)
                }
                _ => LogicExpr::And(vec![left, right]),
            };
        }
        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<LogicExpr, LogicError> {
        let tok = self.next().ok_or_else(|| {
            LogicError::malformed(
                "unexpected end of expression, expected rule number or '('",
                Span::new(self.end, self.end),
            )
        })?;

        match tok.token {
            Token::Index(value) => Ok(LogicExpr::Rule(Spanned::new(value, tok.span))),
            Token::LParen => {
                // An immediate ')' is an empty group, not a valid operand.
                if let Some(next) = self.peek() {
                    if next.token == Token::RParen {
                        return Err(LogicError::malformed(
                            "empty parentheses",
                            tok.span.merge(next.span),
                        ));
                    }
                }
                let inner = self.parse_or()?;
                let close = self.next().ok_or_else(|| {
                    LogicError::malformed(
                        "unclosed parenthesis",
                        Span::new(self.end, self.end),
                    )
                })?;
                if close.token != Token::RParen {
                    return Err(LogicError::malformed(
                        format!("expected ')', found {}", close.token.describe()),
                        close.span,
                    ));
                }
                Ok(inner)
            }
            other => Err(LogicError::malformed(
                format!("expected rule number or '(', found {}", other.describe()),
                tok.span,
            )),
        }
    }

    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<SpannedToken> {
        let tok = self.tokens.get(self.pos).copied();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, expected: Token) -> bool {
        if self.peek().map(|t| t.token) == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}

/// Parse an expression into its validation tree.
pub fn parse(source: &str) -> Result<LogicExpr, LogicError> {
    Parser::new(source)?.parse()
}
