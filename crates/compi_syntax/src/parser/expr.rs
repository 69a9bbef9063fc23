/// Expression parsing.
///
/// Precedence is structural: `Expression -> Term -> Factor`, with `+ -`
/// binding looser than `* /` and parentheses resetting to `Expression`.
impl<'a> Parser<'a> {
    /// `Expression := Term (("+" | "-") Term)*`
    fn expression(&mut self) -> Option<AstNode> {
        let mut node = AstNode::new(NodeKind::Expression, "Expression");
        node.push(self.term()?);
        while self
            .peek()
            .is_some_and(|t| t.is_operator("+") || t.is_operator("-"))
        {
            let op = self.advance()?.text.clone();
            node.push(AstNode::new(NodeKind::Operator, op));
            node.push(self.term()?);
        }
        Some(node)
    }

    /// `Term := Factor (("*" | "/") Factor)*`
    fn term(&mut self) -> Option<AstNode> {
        let mut node = AstNode::new(NodeKind::Term, "Term");
        node.push(self.factor()?);
        while self
            .peek()
            .is_some_and(|t| t.is_operator("*") || t.is_operator("/"))
        {
            let op = self.advance()?.text.clone();
            node.push(AstNode::new(NodeKind::Operator, op));
            node.push(self.factor()?);
        }
        Some(node)
    }

    /// `Factor := Identifier | Constant | "(" Expression ")"`
    ///
    /// Returns the identifier, constant, or inner expression node directly;
    /// no `Factor` node is ever constructed. Anything else is an absent node.
    fn factor(&mut self) -> Option<AstNode> {
        let (kind, text) = {
            let token = self.peek()?;
            (token.kind, token.text.clone())
        };
        match kind {
            TokenKind::Identifier => {
                self.pos += 1;
                Some(AstNode::new(NodeKind::Identifier, text))
            }
            TokenKind::Constant => {
                self.pos += 1;
                Some(AstNode::new(NodeKind::Constant, text))
            }
            TokenKind::Operator if text == "(" => {
                self.pos += 1;
                let node = self.expression()?;
                self.consume(TokenKind::Operator, ")");
                Some(node)
            }
            _ => None,
        }
    }
}
