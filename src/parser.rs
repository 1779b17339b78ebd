//! Module for parsing tokens into syntax trees.
//!
//! Recursive descent with one token of lookahead. Each call to [parse]
//! consumes exactly one top-level form.

use log::debug;
use std::fmt;

use crate::ast::Node;
use crate::number::Number;
use crate::token::{Token, TokenKind};

use self::ParseErrorReason::*;


/// Deepest list nesting accepted, and deepest nesting of applications during
/// evaluation. Trees are walked recursively on the native stack.
pub const MAX_DEPTH: usize = 256;

/// Parse the form starting at `pos`, returning it with the position of the
/// first token after it, or None if no tokens remain at `pos`.
pub fn parse(tokens: &[Token], pos: usize) -> Result<Option<(Node, usize)>, ParseError> {
    if pos >= tokens.len() {
        return Ok(None);
    }

    let (node, next) = parse_expr(tokens, pos, 0)?;
    debug!("Parsed form: {}", node);
    Ok(Some((node, next)))
}

fn parse_expr(tokens: &[Token], pos: usize, depth: usize) -> Result<(Node, usize), ParseError> {
    let token = tokens.get(pos).ok_or_else(ParseError::end_of_input)?;
    let text = token.text();
    let node = match token.kind() {
        TokenKind::Number => match text.parse::<Number>() {
            Ok(num) => Node::Number(num),
            Err(_) => {
                return Err(ParseError {
                    reason: InvalidNumber,
                    token: Some(token.clone()),
                });
            }
        },
        TokenKind::String => Node::String(strip_quotes(text).to_string()),
        TokenKind::Symbol => Node::Symbol(text.clone()),
        TokenKind::OpenParen if depth >= MAX_DEPTH => {
            return Err(ParseError {
                reason: TooDeep,
                token: Some(token.clone()),
            });
        }
        TokenKind::OpenParen => return parse_list(tokens, pos + 1, depth + 1),
        _ => return Err(ParseError::unexpected(token.clone())),
    };
    Ok((node, pos + 1))
}

fn parse_list(
    tokens: &[Token],
    mut pos: usize,
    depth: usize,
) -> Result<(Node, usize), ParseError> {
    let mut children = Vec::new();
    loop {
        match tokens.get(pos) {
            None => return Err(ParseError::end_of_input()),
            Some(token) if *token.kind() == TokenKind::CloseParen => {
                return Ok((Node::List(children), pos + 1));
            }
            Some(_) => {
                let (child, next) = parse_expr(tokens, pos, depth)?;
                children.push(child);
                pos = next;
            }
        }
    }
}

fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}


/// Iterator over the successive top-level forms of a token sequence.
///
/// Stops after the first error.
pub struct ParseIter<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> ParseIter<'a> {
    pub fn from_tokens(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }
}

impl<'a> Iterator for ParseIter<'a> {
    type Item = Result<Node, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match parse(self.tokens, self.pos) {
            Ok(Some((node, next))) => {
                self.pos = next;
                Some(Ok(node))
            }
            Ok(None) => None,
            Err(err) => {
                self.pos = self.tokens.len();
                Some(Err(err))
            }
        }
    }
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParseErrorReason {
    UnexpectedToken,
    UnexpectedEndOfInput,
    InvalidNumber,
    TooDeep,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    reason: ParseErrorReason,
    token: Option<Token>,
}

impl ParseError {
    pub fn unexpected(token: Token) -> Self {
        Self {
            reason: UnexpectedToken,
            token: Some(token),
        }
    }

    pub fn end_of_input() -> Self {
        Self {
            reason: UnexpectedEndOfInput,
            token: None,
        }
    }

    pub fn reason(&self) -> ParseErrorReason {
        self.reason
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Whether more tokens could still complete the form that failed.
    pub fn is_incomplete(&self) -> bool {
        self.reason == UnexpectedEndOfInput
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.reason, &self.token) {
            (UnexpectedEndOfInput, _) | (_, None) => write!(f, "Unexpected end of input"),
            (UnexpectedToken, Some(token)) => write!(
                f,
                "Unexpected token {} {:?} at {}:{}",
                token.kind(),
                token.text(),
                token.line(),
                token.column()
            ),
            (InvalidNumber, Some(token)) => write!(
                f,
                "Invalid number {:?} at {}:{}",
                token.text(),
                token.line(),
                token.column()
            ),
            (TooDeep, Some(token)) => write!(
                f,
                "Lists nested deeper than {} at {}:{}",
                MAX_DEPTH,
                token.line(),
                token.column()
            ),
        }
    }
}

impl std::error::Error for ParseError {}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
