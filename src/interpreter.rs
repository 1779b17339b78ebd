//! Tree-walking evaluation of syntax trees.

use log::debug;
use std::cell::Cell;

use crate::ast::Node;
use crate::environment::Environment;
use crate::error::Error;
use crate::function::{Func, Ret};
use crate::lang_err::LangErr;
use crate::parser::{ParseIter, MAX_DEPTH};
use crate::token::tokenize;
use crate::value::Value;


thread_local! {
    // Applications (including procedure bodies) in progress on this thread.
    static DEPTH: Cell<usize> = Cell::new(0);
}


/// Evaluates |node| against |env|.
///
/// Literals evaluate to themselves and symbols to their binding. A non-empty
/// list is an application: the operator is evaluated first, then each
/// argument from left to right, and finally the operator is called. The
/// empty list evaluates to the absent value.
///
/// Applications nest at most MAX_DEPTH deep, procedure calls included;
/// past that the evaluation fails with TooDeep.
pub fn evaluate(node: &Node, env: &Environment) -> Ret {
    match node {
        Node::Number(num) => Ok(Value::Number(*num)),
        Node::String(s) => Ok(Value::String(s.clone())),
        Node::Symbol(name) => env.lookup(name),
        Node::List(children) => {
            let (first, rest) = match children.split_first() {
                Some(split) => split,
                None => return Ok(Value::Absent),
            };

            let _guard = DepthGuard::enter()?;
            let operator = evaluate(first, env)?;
            let mut args = Vec::with_capacity(rest.len());
            for arg in rest {
                args.push(evaluate(arg, env)?);
            }
            match operator {
                Value::Function(function) => {
                    debug!("Applying {} to {:?}", function, args);
                    function.call(args)
                }
                other => err!(NotCallable(other)),
            }
        }
    }
}

/// Tokenizes, parses and evaluates every top-level form of |source| in order,
/// stopping at the first error.
pub fn run<S: AsRef<str>>(source: S, env: &Environment) -> Result<Vec<Value>, Error> {
    let tokens = tokenize(source)?;
    let mut results = Vec::new();
    for node in ParseIter::from_tokens(&tokens) {
        results.push(evaluate(&node?, env)?);
    }
    Ok(results)
}


/// Holds one level of application depth while alive.
struct DepthGuard;

impl DepthGuard {
    fn enter() -> Result<DepthGuard, LangErr> {
        DEPTH.with(|depth| {
            if depth.get() >= MAX_DEPTH {
                return err!(TooDeep(MAX_DEPTH));
            }
            depth.set(depth.get() + 1);
            Ok(DepthGuard)
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
