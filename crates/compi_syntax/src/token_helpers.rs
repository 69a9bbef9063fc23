//! Small helper APIs for working with `Token`.
//!
//! These helpers exist to reduce repetitive kind-and-text checks at parser
//! call sites.

use crate::lexer::{Token, TokenKind};

impl Token {
    /// Return `true` if this token has the given kind and exact text.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    /// Return `true` if this is the given reserved word.
    pub fn is_reserved(&self, word: &str) -> bool {
        self.is(TokenKind::ReservedWord, word)
    }

    /// Return `true` if this is the given combination marker.
    pub fn is_combination(&self, marker: &str) -> bool {
        self.is(TokenKind::Combination, marker)
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.is(TokenKind::Operator, symbol)
    }
}
