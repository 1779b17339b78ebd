//! A small S-expression interpreter.
//!
//! Source text goes through [tokenize], then [parse] one top-level form at a
//! time, then [evaluate] against an [Environment] chain rooted at the one
//! built by [make_global_environment].
//!
//! Note that the library only logs through the `log` facade; executables
//! should install a logger themselves. See:
//!   https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod lang_err;

pub mod ast;
pub mod builtins;
pub mod environment;
pub mod error;
pub mod function;
pub mod interpreter;
pub mod number;
pub mod parser;
pub mod token;
pub mod value;

pub use crate::builtins::{make_global_environment, make_global_environment_with_output, Output};
pub use crate::environment::Environment;
pub use crate::interpreter::{evaluate, run};
pub use crate::parser::parse;
pub use crate::token::tokenize;

pub mod prelude {
    pub use crate::ast::Node;
    pub use crate::environment::Environment;
    pub use crate::error::Error;
    pub use crate::function::{BuiltIn, Func, Function, Procedure};
    pub use crate::lang_err::{ErrKind, LangErr};
    pub use crate::number::Number;
    pub use crate::value::Value;
    // Macros.
    pub use crate::err;
}
