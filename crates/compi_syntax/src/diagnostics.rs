//! Lexical diagnostics.
//!
//! Lexical errors are plain data extracted from `Invalid` tokens; the lexer
//! itself never fails and keeps going after one. Syntax errors have no data
//! representation at all: a grammar rule that cannot match returns an absent
//! node and the caller reports a generic failure.

use thiserror::Error;

use crate::lexer::{Token, TokenKind};

/// Classification of a lexical error.
///
/// A single case today; kept as an enum because the classification is
/// expected to grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexicalErrorKind {
    #[error("InvalidValue")]
    InvalidValue,
}

/// A lexical error: the offending token text plus its classification.
///
/// Produced only from tokens already classified [`TokenKind::Invalid`];
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: {text} ({kind})")]
pub struct LexicalError {
    pub text: String,
    pub kind: LexicalErrorKind,
}

/// Filter one line's token batch down to its lexical errors.
///
/// Runs once per batch; the driver concatenates the results in line order.
pub fn lexical_errors(tokens: &[Token]) -> Vec<LexicalError> {
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Invalid)
        .map(|t| LexicalError {
            text: t.text.clone(),
            kind: LexicalErrorKind::InvalidValue,
        })
        .collect()
}
