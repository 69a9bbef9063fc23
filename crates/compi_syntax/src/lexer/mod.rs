//! Lexer for the Compi language.
//!
//! Tokenizes one comment-stripped line at a time:
//! - Quoted string literals (both delimiting quotes kept in the token text)
//! - The hard delimiters `( ) { } ;`, emitted immediately
//! - Buffered runs classified as reserved word, combination marker, numeric
//!   constant, operator, identifier, or `Invalid`, in that priority order
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//!
//! The driver concatenates the per-line batches in line order and hands the
//! flat sequence to `crate::parser`.

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::vocab;

/// Lexer over a single line of source text.
///
/// The line must already have trailing `//` comments removed; comment
/// stripping belongs to the driver. Whitespace separates tokens and is never
/// emitted. A single left-to-right pass, no backtracking.
pub struct Lexer<'a> {
    line: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given line.
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            chars: line.char_indices().peekable(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole line.
    ///
    /// Every non-whitespace character lands in exactly one token; malformed
    /// runs come back as [`TokenKind::Invalid`] tokens rather than errors.
    pub fn tokenize(mut self) -> Vec<Token> {
        let line = self.line;
        while let Some(&(start, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else if c == '"' {
                self.scan_string(start);
            } else if vocab::is_hard_delimiter(c) {
                self.chars.next();
                let end = self.pos();
                self.tokens
                    .push(Token::new(TokenKind::Operator, &line[start..end]));
            } else {
                self.scan_run(start);
            }
        }
        self.tokens
    }

    /// Byte offset of the next unconsumed character (line length at the end).
    fn pos(&mut self) -> usize {
        self.chars.peek().map(|&(i, _)| i).unwrap_or(self.line.len())
    }

    /// Scan a quoted string starting at the opening `"`.
    ///
    /// On success the token text includes both delimiting quotes. If the line
    /// ends first, everything accumulated (opening quote included) becomes a
    /// single `Invalid` token.
    fn scan_string(&mut self, start: usize) {
        let line = self.line;
        self.chars.next();
        while let Some(&(_, c)) = self.chars.peek() {
            self.chars.next();
            if c == '"' {
                let end = self.pos();
                self.tokens
                    .push(Token::new(TokenKind::StringLiteral, &line[start..end]));
                return;
            }
        }
        self.tokens.push(Token::new(TokenKind::Invalid, &line[start..]));
    }

    /// Buffer a run starting at the current character and classify it.
    ///
    /// The first character always belongs to the run. Buffering stops at
    /// whitespace, a quote, a hard delimiter, or an operator character --
    /// unless the run extended by that operator character is itself a
    /// registered spelling (`:=`, `>=`, `<=`, `<>`), in which case the
    /// character is appended and buffering continues.
    fn scan_run(&mut self, start: usize) {
        let line = self.line;
        self.chars.next();
        while let Some(&(i, c)) = self.chars.peek() {
            if c.is_whitespace() || c == '"' || vocab::is_hard_delimiter(c) {
                break;
            }
            if vocab::is_operator_char(c) && !vocab::is_operator_spelling(&line[start..i + c.len_utf8()]) {
                break;
            }
            self.chars.next();
        }
        let end = self.pos();
        let text = &line[start..end];
        self.tokens.push(Token::new(classify(text), text));
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Classify a buffered run, in fixed priority order.
fn classify(text: &str) -> TokenKind {
    if vocab::is_reserved_word(text) {
        TokenKind::ReservedWord
    } else if vocab::is_combination_marker(text) {
        TokenKind::Combination
    } else if is_constant(text) {
        TokenKind::Constant
    } else if vocab::is_operator_spelling(text) {
        TokenKind::Operator
    } else if is_identifier(text) {
        TokenKind::Identifier
    } else {
        TokenKind::Invalid
    }
}

/// Numeric constant: one or more ASCII digits, nothing else.
fn is_constant(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Identifier: an ASCII letter, then letters, digits, or dots.
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '.')
}

/// Convenience function to tokenize a single comment-stripped line.
///
/// This is a shorthand for `Lexer::new(line).tokenize()`.
#[tracing::instrument(skip_all, fields(line_len = line.len()))]
pub fn tokenize(line: &str) -> Vec<Token> {
    Lexer::new(line).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{COMBINATION_MARKERS, OPERATOR_SPELLINGS, RESERVED_WORDS};

    fn kinds_and_texts(line: &str) -> Vec<(TokenKind, String)> {
        tokenize(line).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_declaration_line() {
        assert_eq!(
            tokenize("int x;"),
            vec![
                Token::new(TokenKind::ReservedWord, "int"),
                Token::new(TokenKind::Identifier, "x"),
                Token::new(TokenKind::Operator, ";"),
            ]
        );
    }

    #[test]
    fn test_assignment_line() {
        assert_eq!(
            tokenize("x := 5 + 3;"),
            vec![
                Token::new(TokenKind::Identifier, "x"),
                Token::new(TokenKind::Operator, ":="),
                Token::new(TokenKind::Constant, "5"),
                Token::new(TokenKind::Operator, "+"),
                Token::new(TokenKind::Constant, "3"),
                Token::new(TokenKind::Operator, ";"),
            ]
        );
    }

    #[test]
    fn test_multi_character_operators_are_single_tokens() {
        for spelling in [":=", ">=", "<=", "<>"] {
            let tokens = tokenize(spelling);
            assert_eq!(tokens, vec![Token::new(TokenKind::Operator, spelling)]);
        }
    }

    #[test]
    fn test_reserved_word_registry_parity() {
        for word in RESERVED_WORDS {
            let tokens = tokenize(word);
            assert_eq!(tokens, vec![Token::new(TokenKind::ReservedWord, *word)]);
        }
    }

    #[test]
    fn test_combination_marker_registry_parity() {
        for marker in COMBINATION_MARKERS {
            let tokens = tokenize(marker);
            assert_eq!(tokens, vec![Token::new(TokenKind::Combination, *marker)]);
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        for spelling in OPERATOR_SPELLINGS {
            let tokens = tokenize(spelling);
            assert_eq!(tokens, vec![Token::new(TokenKind::Operator, *spelling)]);
        }
    }

    #[test]
    fn test_string_literal_keeps_quotes() {
        assert_eq!(
            kinds_and_texts("impr \"hola mundo\";"),
            vec![
                (TokenKind::ReservedWord, "impr".to_string()),
                (TokenKind::StringLiteral, "\"hola mundo\"".to_string()),
                (TokenKind::Operator, ";".to_string()),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_is_invalid() {
        let tokens = tokenize("impr \"hola;");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::new(TokenKind::ReservedWord, "impr"));
        assert_eq!(tokens[1].kind, TokenKind::Invalid);
        assert!(tokens[1].text.starts_with('"'));
        assert_eq!(tokens[1].text, "\"hola;");
    }

    #[test]
    fn test_hard_delimiters_split_runs() {
        assert_eq!(
            kinds_and_texts("si(x)"),
            vec![
                (TokenKind::ReservedWord, "si".to_string()),
                (TokenKind::Operator, "(".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Operator, ")".to_string()),
            ]
        );
    }

    #[test]
    fn test_identifier_with_dots() {
        assert_eq!(tokenize("x.y"), vec![Token::new(TokenKind::Identifier, "x.y")]);
    }

    #[test]
    fn test_invalid_runs() {
        // Digit-led run with letters is neither constant nor identifier.
        assert_eq!(tokenize("9abc"), vec![Token::new(TokenKind::Invalid, "9abc")]);
        // Underscore cannot start an identifier.
        assert_eq!(tokenize("_foo"), vec![Token::new(TokenKind::Invalid, "_foo")]);
    }

    #[test]
    fn test_operator_glued_to_operand_is_invalid() {
        // Buffering only stops at a boundary, so `>` swallows the digit that
        // follows it and the run falls through every classification.
        assert_eq!(
            kinds_and_texts("x>1"),
            vec![
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Invalid, ">1".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_and_whitespace_only_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn no_token_embeds_whitespace_on_quote_free_lines(line in "[^\"]{0,64}") {
                for token in tokenize(&line) {
                    prop_assert!(
                        !token.text.chars().any(char::is_whitespace),
                        "token {:?} contains whitespace",
                        token
                    );
                }
            }

            #[test]
            fn tokens_cover_every_non_whitespace_character(line in "[^\"]{0,64}") {
                let concatenated: String = tokenize(&line).iter().map(|t| t.text.as_str()).collect();
                let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();
                prop_assert_eq!(concatenated, stripped);
            }

            #[test]
            fn tokenize_never_panics(line in any::<String>()) {
                let _ = tokenize(&line);
            }
        }
    }
}
