use logos::Logos;
use log::{debug, trace};
use std::{error::Error, fmt, ops::Range};

use crate::registry::IdRegistry;
use crate::text::LineIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// No pattern matches at `offset`. `line` and `column` are 1-based.
    UnrecognizedCharacter {
        ch: char,
        offset: usize,
        line: usize,
        column: usize,
    },
}

impl LexerError {
    fn unrecognized(source: &str, offset: usize) -> Self {
        let ch = source[offset..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        let (line, column) = LineIndex::new(source).line_col(offset);
        LexerError::UnrecognizedCharacter {
            ch,
            offset,
            line: line + 1,
            column: column + 1,
        }
    }
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexerError::UnrecognizedCharacter {
                ch, line, column, ..
            } => write!(f, "unexpected character {ch:?} at {line}:{column}"),
        }
    }
}

impl Error for LexerError {}

/// Raw scanner failure; positioned into a [`LexerError`] by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    InvalidToken,
}

impl Default for ScanError {
    fn default() -> Self {
        ScanError::InvalidToken
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Int,
    Main,
    Begin,
    End,
    While,
}

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = ScanError)]
pub enum TokenKind {
    // trivia
    #[regex(r"[ \t]+")]
    Whitespace,
    #[regex(r"\r?\n")]
    Newline,

    #[token("int", |_| Keyword::Int)]
    #[token("main", |_| Keyword::Main)]
    #[token("begin", |_| Keyword::Begin)]
    #[token("end", |_| Keyword::End)]
    #[token("while", |_| Keyword::While)]
    Keyword(Keyword),

    // Digits glued to other word characters are neither a number nor an
    // identifier, so that longer match is turned into an error.
    #[regex(r"\d+")]
    #[regex(r"\d+[\w--\d]\w*", |_| false)]
    Number,

    #[regex(r"[a-zA-Z_]\w*")]
    Identifier,

    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }

    /// Upper-case category name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "SKIP",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Keyword(_) => "KEYWORD",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub id: u32,
    pub span: Range<usize>,
}

/// Raw scan of `code`, trivia included.
pub fn lex(
    code: &str,
) -> impl Iterator<Item = (Result<TokenKind, ScanError>, &str, Range<usize>)> {
    TokenKind::lexer(code).spanned().map(|(tok, span)| {
        let text = &code[span.start..span.end];
        (tok, text, span)
    })
}

/// Tokenizes `source` with a fresh [`IdRegistry`].
///
/// Returns the non-trivia tokens in source order together with the registry
/// as it stands after the whole input was read. The first unrecognized
/// character aborts the run.
pub fn tokenize(source: &str) -> Result<(Vec<Token>, IdRegistry), LexerError> {
    let mut tokens = vec![];
    let mut registry = IdRegistry::new();

    for (result, text, span) in lex(source) {
        let kind = match result {
            Ok(kind) if kind.is_trivia() => continue,
            Ok(kind) => kind,
            Err(ScanError::InvalidToken) => {
                return Err(LexerError::unrecognized(source, span.start));
            }
        };

        // keywords and punctuation resolve through the reserved table
        let id = registry.intern(text);
        trace!("{} {text:?} -> {id}", kind.name());

        tokens.push(Token {
            kind,
            lexeme: text.to_string(),
            id,
            span,
        });
    }

    debug!(
        "tokenized {} tokens, {} distinct identifiers and numbers",
        tokens.len(),
        registry.identifiers().count()
    );
    Ok((tokens, registry))
}
