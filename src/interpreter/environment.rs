use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

use super::builtins;
use super::error::InterpreterError;
use crate::value::Value;

/// A scope chain link. Cloning an `Environment` shares the frame, so a
/// lambda that captures a scope sees later mutations of it.
#[derive(Debug, Clone)]
pub struct Environment {
    frame: Rc<Frame>,
}

#[derive(Debug)]
struct Frame {
    names: RefCell<IndexMap<String, Value>>,
    parent: Option<Environment>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            frame: Rc::new(Frame {
                names: RefCell::new(IndexMap::new()),
                parent: None,
            }),
        }
    }

    /// The scope every program starts from: a fresh global frame whose
    /// parent holds the builtin operators.
    pub fn with_builtins() -> Self {
        let root = Environment::new();
        builtins::install(&root);
        root.child()
    }

    /// Creates a new innermost frame chained onto this one.
    pub fn child(&self) -> Self {
        Self {
            frame: Rc::new(Frame {
                names: RefCell::new(IndexMap::new()),
                parent: Some(self.clone()),
            }),
        }
    }

    /// Walks the chain from innermost to outermost and returns the nearest
    /// binding.
    pub fn lookup(&self, name: &str) -> Result<Value, InterpreterError> {
        let mut frame = &self.frame;
        loop {
            if let Some(value) = frame.names.borrow().get(name) {
                return Ok(value.clone());
            }
            match &frame.parent {
                Some(parent) => frame = &parent.frame,
                None => return Err(InterpreterError::name(name)),
            }
        }
    }

    /// Rebinds an existing binding in the nearest frame that holds it and
    /// returns the value it replaced.
    pub fn assign(&self, name: &str, value: Value) -> Result<Value, InterpreterError> {
        let mut frame = &self.frame;
        loop {
            {
                let mut names = frame.names.borrow_mut();
                if let Some(slot) = names.get_mut(name) {
                    return Ok(std::mem::replace(slot, value));
                }
            }
            match &frame.parent {
                Some(parent) => frame = &parent.frame,
                None => return Err(InterpreterError::name(name)),
            }
        }
    }

    /// Binds a name in this frame only, overwriting any prior binding here.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.frame.names.borrow_mut().insert(name.into(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
