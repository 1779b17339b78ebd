//! Errors raised while evaluating.

use std::borrow::Cow;
use std::fmt;
use std::io;

use self::ErrKind::*;
use self::ExpectedCount::*;
use crate::value::Value;


/// Creates a LangErr wrapped in Err.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::lang_err::LangErr::new(
            $crate::lang_err::ErrKind::$($kind)+,
        ))
    };
}


#[derive(Debug)]
pub struct LangErr {
    kind: ErrKind,
}

#[derive(Debug)]
pub enum ErrKind {
    UnboundSymbol(String),
    NotCallable(Value),
    WrongArgumentCount {
        builtin: &'static str,
        given: usize,
        expected: ExpectedCount,
    },
    InvalidArgument {
        builtin: &'static str,
        given: Value,
        expected: Cow<'static, str>,
    },
    DivisionByZero,
    TooDeep(usize),
    Io(io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
}


impl LangErr {
    // Prefer using err! for convenience.
    pub fn new(kind: ErrKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &ErrKind {
        &self.kind
    }

    /// Failures a builtin raises about the count or kind of its arguments.
    pub fn is_arity_or_type_error(&self) -> bool {
        matches!(
            self.kind,
            WrongArgumentCount { .. } | InvalidArgument { .. } | DivisionByZero
        )
    }
}

impl ExpectedCount {
    pub fn admits(self, given: usize) -> bool {
        match self {
            Exactly(exactly) => given == exactly,
            AtLeast(minimum) => given >= minimum,
        }
    }
}


impl fmt::Display for LangErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UnboundSymbol(name) => write!(f, "Unbound symbol: \"{}\"", name),
            NotCallable(value) => write!(f, "Not callable: {:?}", value),
            WrongArgumentCount {
                builtin,
                given,
                expected,
            } => write!(
                f,
                "Wrong argument count for {}: given {}, expected {}",
                builtin, given, expected
            ),
            InvalidArgument {
                builtin,
                given,
                expected,
            } => write!(
                f,
                "Invalid argument for {}: given {:?}, expected {}",
                builtin, given, expected
            ),
            DivisionByZero => write!(f, "Division by zero"),
            TooDeep(limit) => write!(f, "Applications nested deeper than {}", limit),
            Io(err) => write!(f, "Output error: {}", err),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
        }
    }
}

impl std::error::Error for LangErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Lets builtins that write output use `?` on io results.
impl From<io::Error> for LangErr {
    fn from(err: io::Error) -> Self {
        LangErr::new(Io(err))
    }
}
