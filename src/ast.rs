//! Syntax trees produced by the parser.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::number::Number;
use crate::parser::{self, ParseError};
use crate::token::tokenize;


/// One parsed expression. Children are owned; there are no parent links.
#[derive(Clone, Debug)]
pub enum Node {
    Number(Number),
    /// Contents without the surrounding quotes.
    String(String),
    Symbol(String),
    List(Vec<Node>),
}


impl Node {
    pub fn symbol<S: Into<String>>(name: S) -> Self {
        Node::Symbol(name.into())
    }

    pub fn string<S: Into<String>>(contents: S) -> Self {
        Node::String(contents.into())
    }

    pub fn list<I: IntoIterator<Item = Node>>(children: I) -> Self {
        Node::List(children.into_iter().collect())
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Number(Number::Integer(i))
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Node::Number(Number::Float(f))
    }
}


/// Structural equality: an Integer never equals a Float, unlike the numeric
/// equality of Number.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Number(Number::Integer(a)), Node::Number(Number::Integer(b))) => a == b,
            (Node::Number(Number::Float(a)), Node::Number(Number::Float(b))) => a == b,
            (Node::String(a), Node::String(b)) => a == b,
            (Node::Symbol(a), Node::Symbol(b)) => a == b,
            (Node::List(a), Node::List(b)) => a == b,
            _ => false,
        }
    }
}

/// Canonical form: parsing the output yields an equal tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(num) => write!(f, "{}", num),
            Node::String(s) => write!(f, "\"{}\"", s),
            Node::Symbol(name) => write!(f, "{}", name),
            Node::List(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Parses exactly one expression.
impl FromStr for Node {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(s)?;
        match parser::parse(&tokens, 0)? {
            Some((node, next)) if next == tokens.len() => Ok(node),
            Some((_, next)) => Err(ParseError::unexpected(tokens[next].clone()).into()),
            None => Err(ParseError::end_of_input().into()),
        }
    }
}


#[cfg(test)]
#[path = "./ast_test.rs"]
mod ast_test;
