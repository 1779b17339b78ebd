use derive_getters::Getters;
use std::fmt;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    OpenParen,
    CloseParen,
    Number,
    String,
    Symbol,
    Whitespace,
}

/// A lexeme together with where it starts (1-based line and column).
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: usize,
    column: usize,
}


impl TokenKind {
    /// Trivia is recognized by the tokenizer but never reaches the parser.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Whitespace)
    }

    pub(super) fn group_name(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::OpenParen => "open_paren",
            TokenKind::CloseParen => "close_paren",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::Whitespace => "whitespace",
        }
    }
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, text: S, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}


impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {:?}, {}:{})",
            self.kind, self.text, self.line, self.column
        )
    }
}
