//! Token types for the Compi lexer.

use std::fmt;

/// Kind of token produced by the lexer.
///
/// Classification priority on a buffered run is reserved word, combination
/// marker, constant, operator, identifier, then `Invalid` as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    ReservedWord,
    Combination,
    Constant,
    Operator,
    Identifier,
    StringLiteral,
    Invalid,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::ReservedWord => "ReservedWord",
            TokenKind::Combination => "Combination",
            TokenKind::Constant => "Constant",
            TokenKind::Operator => "Operator",
            TokenKind::Identifier => "Identifier",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Invalid => "Invalid",
        };
        write!(f, "{}", name)
    }
}

/// A token: its classification plus the exact source substring it matched.
///
/// Immutable once constructed; owned solely by the sequence that holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    /// External display form: `<Kind>: <Text>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.text)
    }
}
