use std::cell::RefCell;
use std::rc::Rc;

use snake_lisp::error::Error;
use snake_lisp::value::Value;
use snake_lisp::{make_global_environment_with_output, run, Environment};


/// A fresh global environment plus the buffer its `display`/`newline` write to.
pub fn setup() -> (Environment, Rc<RefCell<Vec<u8>>>) {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    let output = Rc::new(RefCell::new(Vec::<u8>::new()));
    let env = make_global_environment_with_output(output.clone());
    (env, output)
}

pub fn results<S: AsRef<str>>(env: &Environment, s: S) -> Vec<Value> {
    run(s, env).unwrap()
}

pub fn results_with_errors<S: AsRef<str>>(env: &Environment, s: S) -> Result<Vec<Value>, Error> {
    run(s, env)
}

pub fn output(buffer: &Rc<RefCell<Vec<u8>>>) -> String {
    String::from_utf8(buffer.borrow().clone()).unwrap()
}
