//! Module for representing environments.
//!
//! An Environment is a shared handle to one frame of bindings plus an
//! optional parent. Cloning the handle aliases the frame, which is what lets
//! closures see definitions made after they were created.

use log::trace;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;

use crate::function::Ret;
use crate::value::Value;


#[derive(Clone)]
pub struct Environment {
    frame: Rc<Frame>,
}

struct Frame {
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Environment>,
}


impl Environment {
    /// Creates a root environment with no bindings.
    pub fn new() -> Environment {
        Environment {
            frame: Rc::new(Frame {
                bindings: RefCell::new(HashMap::new()),
                parent: None,
            }),
        }
    }

    pub fn with_parent(parent: &Environment) -> Environment {
        Environment {
            frame: Rc::new(Frame {
                bindings: RefCell::new(HashMap::new()),
                parent: Some(parent.clone()),
            }),
        }
    }

    pub fn parent(&self) -> Option<&Environment> {
        self.frame.parent.as_ref()
    }

    /// Binds |name| in this frame only, replacing any existing binding here.
    /// Bindings of the same name in ancestors are shadowed, not modified.
    pub fn define<S: Into<String>>(&self, name: S, value: Value) {
        self.frame.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Drops every binding of this frame.
    ///
    /// A procedure bound in the frame it captured keeps that frame alive
    /// through a reference cycle; clearing the frame releases it.
    pub fn clear(&self) {
        self.frame.bindings.borrow_mut().clear();
    }

    /// Number of live handles sharing this frame, closures and children
    /// included.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.frame)
    }

    /// Resolves |name| in the innermost frame that binds it.
    pub fn lookup(&self, name: &str) -> Ret {
        let mut curr = self;
        let mut hops = 0;
        loop {
            if let Some(value) = curr.frame.bindings.borrow().get(name) {
                trace!("Resolved {} after {} hop(s)", name, hops);
                return Ok(value.clone());
            }
            match curr.parent() {
                Some(parent) => {
                    trace!("{} not bound at depth {}, trying parent", name, hops);
                    curr = parent;
                    hops += 1;
                }
                None => return err!(UnboundSymbol(name.to_string())),
            }
        }
    }

    /// Number of parent links followed before |name| is found.
    pub fn hops_to(&self, name: &str) -> Option<usize> {
        let mut curr = Some(self);
        let mut hops = 0;
        while let Some(env) = curr {
            if env.frame.bindings.borrow().contains_key(name) {
                return Some(hops);
            }
            curr = env.parent();
            hops += 1;
        }
        None
    }

    /// All names visible from here, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        let mut curr = Some(self);
        while let Some(env) = curr {
            names.extend(env.frame.bindings.borrow().keys().cloned());
            curr = env.parent();
        }
        names.into_iter().collect()
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.frame, &other.frame)
    }
}


impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0;
        let mut curr = self.parent();
        while let Some(env) = curr {
            depth += 1;
            curr = env.parent();
        }
        write!(
            f,
            "[Environment @ {:p}, {} binding(s), depth {}]",
            Rc::as_ptr(&self.frame),
            self.frame.bindings.borrow().len(),
            depth
        )
    }
}


#[cfg(test)]
#[path = "./environment_test.rs"]
mod environment_test;
