//! Module for breaking source text into tokens.

use derive_getters::Getters;
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use std::fmt;

use super::token::{Token, TokenKind};

use self::TokenizeErrorKind::*;


// Tried in this order at every position; the first one to match wins, which
// leaves Symbol as the catch-all for operators and names.
const PATTERNS: &[(TokenKind, &str)] = &[
    (TokenKind::Comment, r";[^\n]*"),
    (TokenKind::OpenParen, r"\("),
    (TokenKind::CloseParen, r"\)"),
    (TokenKind::Number, r"-?[0-9]+\.?[0-9]*"),
    (TokenKind::String, r#""[^"]*""#),
    (TokenKind::Symbol, r#"[^\s()";#]+"#),
    (TokenKind::Whitespace, r"\s+"),
];

lazy_static! {
    static ref TOKEN_RE: Regex = {
        let alternatives = PATTERNS
            .iter()
            .map(|(kind, pattern)| format!("(?P<{}>{})", kind.group_name(), pattern))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!("^(?:{})", alternatives)).unwrap()
    };
}


/// Tokenize all of `source`, dropping comments and whitespace.
pub fn tokenize<S: AsRef<str>>(source: S) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    for token in Tokenizer::new(source.as_ref()) {
        let token = token?;
        if !token.kind().is_trivia() {
            trace!("{}", token);
            tokens.push(token);
        }
    }
    Ok(tokens)
}


/// Yields every lexeme of the source, trivia included.
///
/// Stops after the first error.
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct TokenizeError {
    line: usize,
    column: usize,
    kind: TokenizeErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenizeErrorKind {
    UnrecognizedCharacter(char),
    UnterminatedString,
}


impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn advance(&mut self, lexeme: &str) {
        self.pos += lexeme.len();
        match lexeme.rfind('\n') {
            Some(i) => {
                self.line += lexeme.matches('\n').count();
                self.column = lexeme[i + 1..].chars().count() + 1;
            }
            None => self.column += lexeme.chars().count(),
        }
    }

    fn error(&mut self, c: char) -> TokenizeError {
        let kind = match c {
            '"' => UnterminatedString,
            _ => UnrecognizedCharacter(c),
        };
        let err = TokenizeError {
            line: self.line,
            column: self.column,
            kind,
        };
        // Nothing past a failure is meaningful.
        self.pos = self.source.len();
        err
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.source[self.pos..];
        let c = rest.chars().next()?;

        let captures = match TOKEN_RE.captures(rest) {
            Some(captures) => captures,
            None => return Some(Err(self.error(c))),
        };
        for (kind, _) in PATTERNS {
            if let Some(m) = captures.name(kind.group_name()) {
                let token = Token::new(*kind, m.as_str(), self.line, self.column);
                self.advance(m.as_str());
                return Some(Ok(token));
            }
        }
        Some(Err(self.error(c)))
    }
}


impl TokenizeError {
    /// Whether more input could still complete the text that failed.
    pub fn is_incomplete(&self) -> bool {
        self.kind == UnterminatedString
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            UnrecognizedCharacter(c) => write!(
                f,
                "Unrecognized character '{}' at {}:{}",
                c, self.line, self.column
            ),
            UnterminatedString => write!(
                f,
                "Unterminated string starting at {}:{}",
                self.line, self.column
            ),
        }
    }
}

impl std::error::Error for TokenizeError {}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
