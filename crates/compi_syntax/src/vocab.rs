//! Fixed vocabulary for the Compi language.
//!
//! This module is the single source of truth for the reserved words,
//! combination markers, and operator spellings the lexer classifies against.
//! The boundary test used while buffering a token run reads the same operator
//! table as final classification, so the two can never disagree.
//!
//! ## Notes
//! - The vocabulary is static; the language defines no way to grow it.
//! - Lookup is case-sensitive.

/// Reserved words with a special grammatical role.
pub const RESERVED_WORDS: &[&str] = &["si", "fin", "for", "impr", "int", "cad", "do", "while"];

/// Combination markers used as block delimiters.
///
/// Only `bfhjk` and `elsebfhjk` are consumed by any grammar rule; the rest
/// are classifiable but never referenced by the parser.
pub const COMBINATION_MARKERS: &[&str] = &[
    "bfhjk",
    "ifbfhjk",
    "elsebfhjk",
    "forbfhjk",
    "printbfhjk",
    "intbfhjk",
];

/// Operator spellings, multi-character forms included.
pub const OPERATOR_SPELLINGS: &[&str] = &[
    "+", "-", "*", "/", ":=", ">=", "<=", ">", "<", "=", "<>", "{", "}", "[", "]", "(", ")", ",",
    ":", ";",
];

/// Delimiters the lexer emits immediately as single-character operator
/// tokens, without buffering.
pub const HARD_DELIMITERS: &[char] = &['(', ')', '{', '}', ';'];

/// Return `true` if `s` is a reserved word.
pub fn is_reserved_word(s: &str) -> bool {
    RESERVED_WORDS.contains(&s)
}

/// Return `true` if `s` is a combination marker.
pub fn is_combination_marker(s: &str) -> bool {
    COMBINATION_MARKERS.contains(&s)
}

/// Return `true` if `s` is an operator spelling (whole-text match).
pub fn is_operator_spelling(s: &str) -> bool {
    OPERATOR_SPELLINGS.contains(&s)
}

/// Return `true` if `c` is one of the hard delimiters.
pub fn is_hard_delimiter(c: char) -> bool {
    HARD_DELIMITERS.contains(&c)
}

/// Boundary test used while buffering a token run: a character terminates
/// the run exactly when it is, by itself, an operator spelling.
pub fn is_operator_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    is_operator_spelling(c.encode_utf8(&mut buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        assert!(is_reserved_word("si"));
        assert!(is_reserved_word("while"));
        assert!(!is_reserved_word("to"));
        assert!(is_combination_marker("bfhjk"));
        assert!(is_combination_marker("elsebfhjk"));
        assert!(!is_combination_marker("elsebf"));
        assert!(is_operator_spelling(":="));
        assert!(is_operator_spelling("<>"));
        assert!(!is_operator_spelling(":=;"));
    }

    #[test]
    fn test_boundary_and_classification_share_one_operator_set() {
        // Every character of every multi-character spelling must itself be an
        // operator character, so the buffering continuation rule and final
        // classification stay self-consistent.
        for spelling in OPERATOR_SPELLINGS {
            for c in spelling.chars() {
                assert!(
                    is_operator_char(c),
                    "character {:?} of spelling {:?} is not an operator character",
                    c,
                    spelling
                );
            }
        }
    }

    #[test]
    fn test_hard_delimiters_are_operator_spellings() {
        for &c in HARD_DELIMITERS {
            assert!(is_operator_char(c));
        }
    }
}
