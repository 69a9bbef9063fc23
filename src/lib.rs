#![forbid(unsafe_code)]
//! Compi compiler front-end.
//!
//! The root crate is the command-line driver: it reads a source file, strips
//! trailing `//` comments, and prints the token list, the lexical errors,
//! and the syntax tree. The lexer, parser, and tree types live in
//! `compi_syntax`.

pub mod cli;
