/// Token-stream helpers.
///
/// Low-level primitives shared by the grammar rules: peeking, advancing, the
/// expected-token consume, and the statement-list boundary test.
impl<'a> Parser<'a> {
    /// Return `true` once the cursor has passed the last token.
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consume and return the current token, whatever it is.
    fn advance(&mut self) -> Option<&Token> {
        if self.is_at_end() {
            return None;
        }
        self.pos += 1;
        Some(&self.tokens[self.pos - 1])
    }

    /// Consume the current token if it matches the expected kind and text.
    ///
    /// On mismatch this is deliberately a no-op: nothing is recorded and the
    /// cursor stays put, so the rules that follow see the same token.
    fn consume(&mut self, kind: TokenKind, text: &str) {
        if self.peek().is_some_and(|t| t.is(kind, text)) {
            self.pos += 1;
        }
    }

    /// Return `true` if the current position ends a statement list: end of
    /// input, the block terminator `fin`, or the else marker `elsebfhjk`.
    fn at_block_end(&self) -> bool {
        match self.peek() {
            None => true,
            Some(t) => t.is_reserved("fin") || t.is_combination("elsebfhjk"),
        }
    }
}
