//! Lexer for a small teaching language.
//!
//! Tokens carry a numeric id: keywords and punctuation use a fixed table,
//! identifiers and number literals are numbered as they are first seen.

/// Scanning and id assignment
pub mod lexer;
pub mod registry;
pub mod text;

/// Table rendering
pub mod report;

pub use lexer::{Keyword, LexerError, Token, TokenKind, tokenize};
pub use registry::IdRegistry;
