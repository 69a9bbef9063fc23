//! Syntax frontend for the Compi teaching language: lexer, parser, AST,
//! lexical diagnostics.
//!
//! This crate is intentionally "syntax-only": no semantic analysis, no type
//! checking, no execution. The driver strips `//` comments, feeds each line
//! to [`lexer::tokenize`], concatenates the batches in line order, and hands
//! the flat sequence to [`parser::parse`].
//!
//! ## Notes
//! - Lexical errors are data ([`diagnostics::LexicalError`]); the lexer never
//!   fails. Syntax errors are not: a failed parse is an absent root.
//! - Language vocabulary (reserved words, combination markers, operator
//!   spellings) comes from the [`vocab`] registry.
//!
//! ## Examples
//! ```rust
//! use compi_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("impr 1 ;");
//! let tree = parser::parse(&tokens).expect("tree");
//! assert_eq!(tree.children.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
pub mod vocab;
