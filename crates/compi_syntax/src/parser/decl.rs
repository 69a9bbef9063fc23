/// Declaration parsing.
impl<'a> Parser<'a> {
    /// `Declaration*` -- runs while the next token is `int` or `cad`.
    fn declarations(&mut self) -> Option<Vec<AstNode>> {
        let mut decls = Vec::new();
        while self
            .peek()
            .is_some_and(|t| t.is_reserved("int") || t.is_reserved("cad"))
        {
            decls.push(self.declaration()?);
        }
        Some(decls)
    }

    /// `Declaration := ("int" | "cad") Identifier ";"`
    ///
    /// The node is labeled with the declaring keyword and owns a single
    /// `Identifier` child; the semicolon is consumed but not kept. The name
    /// slot takes the current token's text without checking its kind.
    fn declaration(&mut self) -> Option<AstNode> {
        let keyword = self.advance()?.text.clone();
        let mut node = AstNode::new(NodeKind::Declaration, keyword);
        let name = self.advance()?.text.clone();
        node.push(AstNode::new(NodeKind::Identifier, name));
        self.consume(TokenKind::Operator, ";");
        Some(node)
    }
}
