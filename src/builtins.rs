//! Creation of the global environment and its native primitives.

use std::borrow::Cow;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::io::{self, Write};
use std::rc::Rc;

use crate::environment::Environment;
use crate::function::{Args, BuiltIn, Function, Ret};
use crate::lang_err::ExpectedCount::{self, *};
use crate::lang_err::LangErr;
use crate::number::Number;
use crate::value::Value;


/// Where `display` and `newline` write.
pub type Output = Rc<RefCell<dyn Write>>;

macro_rules! builtins {
    [$($n:tt : $x:expr),*] => {
        vec![
            $(
                BuiltIn::new($n, $x),
            )*
        ]
    };
    [$($n:tt : $x:expr),+ ,] => {
        builtins![$($n : $x),*]
    };
}


/// Root environment for a session, writing to stdout.
pub fn make_global_environment() -> Environment {
    make_global_environment_with_output(Rc::new(RefCell::new(io::stdout())))
}

pub fn make_global_environment_with_output(output: Output) -> Environment {
    let env = Environment::new();
    for builtin in generate_builtins(output) {
        env.define(builtin.name(), Function::from(builtin).into());
    }
    env
}

pub fn generate_builtins(output: Output) -> Vec<BuiltIn> {
    let display_out = output.clone();
    let newline_out = output;

    let mut builtins = builtins![
        "+": add,
        "-": sub,
        "*": mul,
        "/": div,
        "=": eq,
        "<": lt,
        ">": gt,
        "not": not,
        "list": list,
        "car": car,
        "cdr": cdr,
        "cons": cons,
    ];
    builtins.push(BuiltIn::new("display", move |args: Args| {
        display(&display_out, args)
    }));
    builtins.push(BuiltIn::new("newline", move |args: Args| {
        newline(&newline_out, args)
    }));
    builtins
}


pub fn add(args: Args) -> Ret {
    let mut curr = Number::default();
    for arg in args {
        curr += number("+", arg)?;
    }
    Ok(curr.into())
}

/// Negation with one argument, otherwise the first minus the sum of the rest.
pub fn sub(args: Args) -> Ret {
    check_count("-", &args, AtLeast(1))?;
    let mut args = args.into_iter();
    let first = number("-", args.next().unwrap_or_default())?;
    if args.len() == 0 {
        return Ok((-first).into());
    }

    let mut rest = Number::default();
    for arg in args {
        rest += number("-", arg)?;
    }
    let mut curr = first;
    curr -= rest;
    Ok(curr.into())
}

pub fn mul(args: Args) -> Ret {
    let mut curr = Number::Integer(1);
    for arg in args {
        curr *= number("*", arg)?;
    }
    Ok(curr.into())
}

pub fn div(args: Args) -> Ret {
    let [a, b] = two("/", args)?;
    let (a, b) = (number("/", a)?, number("/", b)?);
    match a.checked_div(b) {
        Some(quotient) => Ok(quotient.into()),
        None => err!(DivisionByZero),
    }
}

pub fn eq(args: Args) -> Ret {
    let [a, b] = two("=", args)?;
    Ok((a == b).into())
}

pub fn lt(args: Args) -> Ret {
    let [a, b] = two("<", args)?;
    Ok((compare("<", a, b)? == Ordering::Less).into())
}

pub fn gt(args: Args) -> Ret {
    let [a, b] = two(">", args)?;
    Ok((compare(">", a, b)? == Ordering::Greater).into())
}

pub fn not(args: Args) -> Ret {
    let [arg] = one("not", args)?;
    Ok((!arg.is_truthy()).into())
}

pub fn list(args: Args) -> Ret {
    Ok(Value::List(args))
}

pub fn car(args: Args) -> Ret {
    let [arg] = one("car", args)?;
    let items = sequence("car", arg)?;
    Ok(items.into_iter().next().unwrap_or_default())
}

pub fn cdr(args: Args) -> Ret {
    let [arg] = one("cdr", args)?;
    let items = sequence("cdr", arg)?;
    Ok(Value::List(items.into_iter().skip(1).collect()))
}

pub fn cons(args: Args) -> Ret {
    let [head, tail] = two("cons", args)?;
    let mut items = Vec::with_capacity(1);
    items.push(head);
    items.extend(sequence("cons", tail)?);
    Ok(Value::List(items))
}

pub fn display(output: &Output, args: Args) -> Ret {
    let [arg] = one("display", args)?;
    let mut out = output.borrow_mut();
    write!(out, "{}", arg)?;
    out.flush()?;
    Ok(Value::Absent)
}

pub fn newline(output: &Output, args: Args) -> Ret {
    check_count("newline", &args, Exactly(0))?;
    let mut out = output.borrow_mut();
    writeln!(out)?;
    out.flush()?;
    Ok(Value::Absent)
}


fn check_count(
    builtin: &'static str,
    args: &Args,
    expected: ExpectedCount,
) -> Result<(), LangErr> {
    if expected.admits(args.len()) {
        return Ok(());
    }
    err!(WrongArgumentCount {
        builtin,
        given: args.len(),
        expected,
    })
}

fn one(builtin: &'static str, args: Args) -> Result<[Value; 1], LangErr> {
    check_count(builtin, &args, Exactly(1))?;
    let mut args = args.into_iter();
    Ok([args.next().unwrap_or_default()])
}

fn two(builtin: &'static str, args: Args) -> Result<[Value; 2], LangErr> {
    check_count(builtin, &args, Exactly(2))?;
    let mut args = args.into_iter();
    Ok([
        args.next().unwrap_or_default(),
        args.next().unwrap_or_default(),
    ])
}

fn number(builtin: &'static str, arg: Value) -> Result<Number, LangErr> {
    match arg {
        Value::Number(num) => Ok(num),
        other => err!(InvalidArgument {
            builtin,
            given: other,
            expected: Cow::Borrowed("a number"),
        }),
    }
}

fn sequence(builtin: &'static str, arg: Value) -> Result<Vec<Value>, LangErr> {
    match arg {
        Value::List(items) => Ok(items),
        other => err!(InvalidArgument {
            builtin,
            given: other,
            expected: Cow::Borrowed("a sequence"),
        }),
    }
}

fn compare(builtin: &'static str, a: Value, b: Value) -> Result<Ordering, LangErr> {
    match (a, b) {
        // NaN compares as neither less nor greater.
        (Value::Number(x), Value::Number(y)) => Ok(x.partial_cmp(&y).unwrap_or(Ordering::Equal)),
        (Value::String(x), Value::String(y)) => Ok(x.cmp(&y)),
        (a @ Value::Number(_), b) | (a @ Value::String(_), b) => err!(InvalidArgument {
            builtin,
            given: b,
            expected: Cow::Owned(format!("a {} to compare with", a.type_name())),
        }),
        (a, _) => err!(InvalidArgument {
            builtin,
            given: a,
            expected: Cow::Borrowed("a number or string"),
        }),
    }
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
