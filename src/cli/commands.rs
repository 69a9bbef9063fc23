//! CLI command implementation.
//!
//! `check_file` drives the whole pipeline: read the file, strip comments,
//! lex line by line, print tokens and lexical errors, parse the flat token
//! sequence, and print the syntax tree. Everything returns
//! `CliResult<ExitCode>`; exits happen in the top-level `run()`.

use std::fs;

use compi_syntax::ast::AstNode;
use compi_syntax::diagnostics::{self, LexicalError};
use compi_syntax::lexer::{self, Token};
use compi_syntax::parser;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (16 MB).
///
/// Files larger than this are rejected before reading to prevent
/// out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (16 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Drop everything from the first `//` to the end of the line.
pub fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Lex a full source text line by line, then parse the result.
///
/// Returns the flat token sequence (line order), the lexical errors (also
/// line order), and the syntax tree root if one could be built. Lexical
/// errors never stop the analysis.
pub fn analyze_source(source: &str) -> (Vec<Token>, Vec<LexicalError>, Option<AstNode>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for line in source.lines() {
        let batch = lexer::tokenize(strip_comment(line));
        errors.extend(diagnostics::lexical_errors(&batch));
        tokens.extend(batch);
    }

    tracing::debug!(
        token_count = tokens.len(),
        error_count = errors.len(),
        "lexing finished"
    );

    let tree = parser::parse(&tokens);
    (tokens, errors, tree)
}

/// Render a syntax tree depth-first, pre-order, two spaces of indentation
/// per depth level, one node per line.
pub fn render_tree(node: &AstNode) -> String {
    let mut out = String::new();
    render_into(node, 0, &mut out);
    out
}

fn render_into(node: &AstNode, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&node.to_string());
    out.push('\n');
    for child in &node.children {
        render_into(child, depth + 1, out);
    }
}

/// Analyze a file: print its tokens, its lexical errors, and its syntax tree.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let (tokens, errors, tree) = analyze_source(&source);

    for token in &tokens {
        println!("{}", token);
    }

    println!("\nLexical errors:");
    for error in &errors {
        println!("{}", error);
    }

    match tree {
        Some(root) => {
            println!("\nSyntax tree:");
            print!("{}", render_tree(&root));
            Ok(ExitCode::SUCCESS)
        }
        None => Err(CliError::failure("error: could not build the syntax tree")),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use compi_syntax::lexer::TokenKind;

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("int x; // declare x"), "int x; ");
        assert_eq!(strip_comment("// whole line"), "");
        assert_eq!(strip_comment("x := 1;"), "x := 1;");
        assert_eq!(strip_comment(""), "");
    }

    #[test]
    fn test_analyze_source_collects_across_lines() {
        let (tokens, errors, tree) = analyze_source("int x;\nx := 1;\n");
        assert_eq!(tokens.len(), 7);
        assert!(errors.is_empty());
        assert!(tree.is_some());
    }

    #[test]
    fn test_lexical_errors_do_not_stop_analysis() {
        let (tokens, errors, tree) = analyze_source("int x@;\nimpr x;\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].text, "x@");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Invalid));
        // The declaration rule takes the invalid token's text blindly, so a
        // tree still comes out.
        assert!(tree.is_some());
    }

    #[test]
    fn test_render_tree_indents_two_spaces_per_level() {
        let (_, _, tree) = analyze_source("impr x;\n");
        let rendered = render_tree(&tree.expect("tree"));
        assert_eq!(
            rendered,
            "Program: Program\n\
             \x20 Statement: Print Statement\n\
             \x20   Expression: Expression\n\
             \x20     Term: Term\n\
             \x20       Identifier: x\n"
        );
    }
}
