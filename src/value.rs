use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::interpreter::builtins::BuiltinOp;
use crate::interpreter::Environment;

/// A runtime node. Pairs are shared, mutable heap cells; everything else is
/// immutable after construction. The empty list is a distinguished value,
/// not a pair.
#[derive(Debug, Clone)]
pub enum Value {
    Empty,
    Number(i64),
    Bool(bool),
    Symbol(Rc<str>),
    Pair(Rc<RefCell<Pair>>),
    Builtin(&'static BuiltinOp),
    Lambda(Rc<Lambda>),
}

#[derive(Debug)]
pub struct Pair {
    pub head: Value,
    pub tail: Value,
}

/// A user-defined function: parameter names, body expressions, and the scope
/// it closed over.
pub struct Lambda {
    pub params: Vec<Rc<str>>,
    pub body: Vec<Value>,
    pub env: Environment,
}

impl fmt::Debug for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The captured environment can reference this lambda back; leave it out.
        write!(f, "Lambda(params={:?}, body={:?})", self.params, self.body)
    }
}

pub fn cons(head: Value, tail: Value) -> Value {
    Value::Pair(Rc::new(RefCell::new(Pair { head, tail })))
}

pub fn symbol(name: &str) -> Value {
    Value::Symbol(Rc::from(name))
}

/// Builds a proper list out of the given elements.
pub fn list_of(items: Vec<Value>) -> Value {
    items
        .into_iter()
        .rev()
        .fold(Value::Empty, |tail, head| cons(head, tail))
}

impl Value {
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Value::Pair(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn as_number(&self) -> Option<i64> {
        if let Value::Number(numeric_value) = self {
            Some(*numeric_value)
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(bool_value) = self {
            Some(*bool_value)
        } else {
            None
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        if let Value::Symbol(name) = self {
            Some(name.as_ref())
        } else {
            None
        }
    }

    pub fn as_pair(&self) -> Option<&Rc<RefCell<Pair>>> {
        if let Value::Pair(cell) = self {
            Some(cell)
        } else {
            None
        }
    }

    /// The only false value is the boolean false; zero and the empty list are
    /// both truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    /// True for the empty list and for any pair chain terminating in empty.
    /// Does not terminate on cyclic chains built through mutation.
    pub fn is_proper_list(&self) -> bool {
        let mut current = self.clone();
        loop {
            match current {
                Value::Empty => return true,
                Value::Pair(cell) => {
                    let tail = cell.borrow().tail.clone();
                    current = tail;
                }
                _ => return false,
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Empty, Value::Empty) => true,
            (Value::Number(left), Value::Number(right)) => left == right,
            (Value::Bool(left), Value::Bool(right)) => left == right,
            (Value::Symbol(left), Value::Symbol(right)) => left == right,
            (Value::Pair(left), Value::Pair(right)) => Rc::ptr_eq(left, right),
            (Value::Builtin(left), Value::Builtin(right)) => left.name == right.name,
            (Value::Lambda(left), Value::Lambda(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

/// Serializes a value back into source form. Proper lists print as
/// `(a b c)`, dotted tails as `(a b . c)`; callables get an opaque
/// placeholder.
pub fn value_to_string(val: &Value) -> String {
    match val {
        Value::Empty => "()".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "#t".to_string(),
        Value::Bool(false) => "#f".to_string(),
        Value::Symbol(name) => name.to_string(),
        Value::Pair(cell) => {
            let mut out = String::from("(");
            let mut current = Rc::clone(cell);
            loop {
                let (head, tail) = {
                    let pair = current.borrow();
                    (pair.head.clone(), pair.tail.clone())
                };
                out.push_str(&value_to_string(&head));
                match tail {
                    Value::Empty => {
                        out.push(')');
                        break;
                    }
                    Value::Pair(next) => {
                        out.push(' ');
                        current = next;
                    }
                    other => {
                        out.push_str(" . ");
                        out.push_str(&value_to_string(&other));
                        out.push(')');
                        break;
                    }
                }
            }
            out
        }
        Value::Builtin(op) => format!("#<builtin:{}>", op.name),
        Value::Lambda(_) => "#<lambda>".to_string(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", value_to_string(self))
    }
}
