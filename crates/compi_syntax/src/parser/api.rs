/// Parse a flat token sequence into a `Program` syntax tree.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: flat token sequence produced by `crate::lexer`, all lines
///   concatenated in order.
///
/// ## Returns
/// - `Some(root)` on success; `None` when the tree cannot be built. There is
///   no partial error report -- lexical errors travel separately as data.
///
/// ## Examples
/// ```rust
/// use compi_syntax::{lexer, parser};
///
/// let tokens = lexer::tokenize("impr x ;");
/// assert!(parser::parse(&tokens).is_some());
/// ```
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Option<AstNode> {
    Parser::new(tokens).parse()
}
