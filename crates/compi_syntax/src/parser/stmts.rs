/// Statement parsing.
///
/// Dispatch is by the text of the next reserved word; any other token --
/// including an unrecognized reserved word -- falls through to the
/// assignment rule.
impl<'a> Parser<'a> {
    /// `Statement*` -- bounded by `fin`, `elsebfhjk`, or end of input.
    fn statements(&mut self) -> Option<Vec<AstNode>> {
        let mut stmts = Vec::new();
        while !self.at_block_end() {
            stmts.push(self.statement()?);
        }
        Some(stmts)
    }

    fn statement(&mut self) -> Option<AstNode> {
        let dispatch = self
            .peek()
            .filter(|t| t.kind == TokenKind::ReservedWord)
            .map(|t| t.text.clone());
        match dispatch.as_deref() {
            Some("si") => self.conditional(),
            Some("for") => self.for_loop(),
            Some("impr") => self.print_stmt(),
            Some("while") => self.while_loop(),
            _ => self.assignment(),
        }
    }

    /// `Conditional := "si" Condition "bfhjk" Statement* ("elsebfhjk" Statement*)? "fin"`
    ///
    /// Children: the condition, then the then-branch statements, then --
    /// with no marker in between -- the else-branch statements, flattened.
    fn conditional(&mut self) -> Option<AstNode> {
        let mut node = AstNode::new(NodeKind::Statement, "Conditional Statement");
        self.consume(TokenKind::ReservedWord, "si");
        node.push(self.condition()?);
        self.consume(TokenKind::Combination, "bfhjk");
        node.children.extend(self.statements()?);
        if self.peek().is_some_and(|t| t.is_combination("elsebfhjk")) {
            self.pos += 1;
            node.children.extend(self.statements()?);
        }
        self.consume(TokenKind::ReservedWord, "fin");
        Some(node)
    }

    /// `ForLoop := "for" Assignment "to" Expression "bfhjk" Statement* "fin"`
    ///
    /// `to` is not in the reserved vocabulary, so the lexer emits it as an
    /// identifier and the expectation below never matches; the cursor stays
    /// put and the loop header misparses. Kept as-is (see DESIGN.md).
    fn for_loop(&mut self) -> Option<AstNode> {
        let mut node = AstNode::new(NodeKind::Statement, "For Statement");
        self.consume(TokenKind::ReservedWord, "for");
        node.push(self.assignment()?);
        self.consume(TokenKind::ReservedWord, "to");
        node.push(self.expression()?);
        self.consume(TokenKind::Combination, "bfhjk");
        node.children.extend(self.statements()?);
        self.consume(TokenKind::ReservedWord, "fin");
        Some(node)
    }

    /// `PrintStmt := "impr" Expression ";"`
    fn print_stmt(&mut self) -> Option<AstNode> {
        let mut node = AstNode::new(NodeKind::Statement, "Print Statement");
        self.consume(TokenKind::ReservedWord, "impr");
        node.push(self.expression()?);
        self.consume(TokenKind::Operator, ";");
        Some(node)
    }

    /// `WhileLoop := "while" Condition "bfhjk" Statement* "fin"`
    fn while_loop(&mut self) -> Option<AstNode> {
        let mut node = AstNode::new(NodeKind::Statement, "While Statement");
        self.consume(TokenKind::ReservedWord, "while");
        node.push(self.condition()?);
        self.consume(TokenKind::Combination, "bfhjk");
        node.children.extend(self.statements()?);
        self.consume(TokenKind::ReservedWord, "fin");
        Some(node)
    }

    /// `Assignment := Identifier ":=" Expression ";"`
    ///
    /// The identifier slot takes the current token's text without checking
    /// its kind.
    fn assignment(&mut self) -> Option<AstNode> {
        let mut node = AstNode::new(NodeKind::Assignment, "Assignment");
        let name = self.advance()?.text.clone();
        node.push(AstNode::new(NodeKind::Identifier, name));
        self.consume(TokenKind::Operator, ":=");
        node.push(self.expression()?);
        self.consume(TokenKind::Operator, ";");
        Some(node)
    }

    /// `Condition := Expression RelOp Expression`
    ///
    /// The relational slot wraps whatever token sits there as an `Operator`
    /// node; there is no check that it is actually relational.
    fn condition(&mut self) -> Option<AstNode> {
        let mut node = AstNode::new(NodeKind::Condition, "Condition");
        node.push(self.expression()?);
        let op = self.advance()?.text.clone();
        node.push(AstNode::new(NodeKind::Operator, op));
        node.push(self.expression()?);
        Some(node)
    }
}
