//! Errors from any stage of the pipeline.

use std::fmt;

use crate::lang_err::LangErr;
use crate::parser::ParseError;
use crate::token::TokenizeError;


#[derive(Debug)]
pub enum Error {
    Tokenize(TokenizeError),
    Parse(ParseError),
    Lang(LangErr),
}


impl Error {
    /// Whether the source text merely ended too early (an open list or
    /// string), so that appending more text may succeed.
    pub fn is_incomplete(&self) -> bool {
        match self {
            Error::Tokenize(err) => err.is_incomplete(),
            Error::Parse(err) => err.is_incomplete(),
            Error::Lang(_) => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Tokenize(err) => write!(f, "{}", err),
            Error::Parse(err) => write!(f, "{}", err),
            Error::Lang(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Tokenize(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Lang(err) => Some(err),
        }
    }
}

impl From<TokenizeError> for Error {
    fn from(err: TokenizeError) -> Self {
        Error::Tokenize(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<LangErr> for Error {
    fn from(err: LangErr) -> Self {
        Error::Lang(err)
    }
}
