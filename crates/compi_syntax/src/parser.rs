//! Recursive-descent parser for the Compi language.
//!
//! One method per grammar non-terminal over a flat token slice with a single
//! cursor; no backtracking, no error recovery. A rule that cannot match
//! returns `None` and the absence propagates to the root -- syntax errors
//! carry no data (see `crate::diagnostics` for the lexical channel).
//!
//! ## Examples
//! ```rust
//! use compi_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("int x; x := 1;");
//! let tree = parser::parse(&tokens).expect("tree");
//! assert_eq!(tree.children.len(), 2);
//! ```

use crate::ast::{AstNode, NodeKind};
use crate::lexer::{Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep
// all parser methods in the same Rust module while avoiding a single large
// source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
