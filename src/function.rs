//! Callable values: native builtins and interpreted procedures.

use derivative::Derivative;
use dyn_clone::DynClone;
use std::fmt;
use std::rc::Rc;

use crate::ast::Node;
use crate::environment::Environment;
use crate::interpreter::evaluate;
use crate::lang_err::LangErr;
use crate::value::Value;


pub type Args = Vec<Value>;
pub type Ret = Result<Value, LangErr>;

/// Anything that can sit in operator position.
pub trait Func {
    fn call(&self, args: Args) -> Ret;
}

/// Native implementation of a builtin. Closures may capture state (e.g. an
/// output stream) as long as they can be cloned.
pub trait NativeFn: Fn(Args) -> Ret + DynClone {}

impl<F> NativeFn for F where F: Fn(Args) -> Ret + Clone {}

dyn_clone::clone_trait_object!(NativeFn);


#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    BuiltIn(BuiltIn),
    Procedure(Procedure),
}

#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct BuiltIn {
    name: &'static str,
    #[derivative(Debug = "ignore")]
    fun: Box<dyn NativeFn>,
}

/// User-defined function closing over the environment it was created in.
///
/// The environment is shared, so later definitions in it are visible to the
/// body.
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct Procedure {
    params: Vec<String>,
    body: Rc<Node>,
    #[derivative(Debug = "ignore")]
    env: Environment,
}


impl BuiltIn {
    pub fn new<F: NativeFn + 'static>(name: &'static str, fun: F) -> BuiltIn {
        BuiltIn {
            name,
            fun: Box::new(fun),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Procedure {
    /// Captures |env| by shared reference.
    ///
    /// Binding the result in |env| itself (or in any frame |env| descends
    /// from) forms a reference cycle, so that frame is never freed on its own.
    /// Bind it in a parent of the captured frame instead, or call
    /// [Environment::clear] on the frame when the session ends.
    pub fn new<I, S>(params: I, body: Node, env: &Environment) -> Procedure
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Procedure {
            params: params.into_iter().map(Into::into).collect(),
            body: Rc::new(body),
            env: env.clone(),
        }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn body(&self) -> &Node {
        &self.body
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }
}


impl Func for Function {
    fn call(&self, args: Args) -> Ret {
        match self {
            Function::BuiltIn(builtin) => builtin.call(args),
            Function::Procedure(procedure) => procedure.call(args),
        }
    }
}

/// Arity is the builtin's own business.
impl Func for BuiltIn {
    fn call(&self, args: Args) -> Ret {
        (self.fun)(args)
    }
}

/// Binds parameters by position in a fresh frame under the captured
/// environment. Missing arguments leave their parameters unbound; extra
/// arguments are ignored.
impl Func for Procedure {
    fn call(&self, args: Args) -> Ret {
        let frame = Environment::with_parent(&self.env);
        for (param, arg) in self.params.iter().zip(args) {
            frame.define(param.as_str(), arg);
        }
        evaluate(&self.body, &frame)
    }
}


impl PartialEq for BuiltIn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl PartialEq for Procedure {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body) && self.env.ptr_eq(&other.env)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::BuiltIn(builtin) => write!(f, "<builtin {}>", builtin.name),
            Function::Procedure(procedure) => {
                write!(f, "<function ({})>", procedure.params.join(" "))
            }
        }
    }
}

impl From<BuiltIn> for Function {
    fn from(builtin: BuiltIn) -> Self {
        Function::BuiltIn(builtin)
    }
}

impl From<Procedure> for Function {
    fn from(procedure: Procedure) -> Self {
        Function::Procedure(procedure)
    }
}

impl From<Procedure> for Value {
    fn from(procedure: Procedure) -> Self {
        Value::Function(procedure.into())
    }
}
