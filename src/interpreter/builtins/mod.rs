//! Built-in operators for the lisk interpreter.
//!
//! Operators are organized into categories:
//! - **Math**: integer arithmetic, comparisons and predicates
//! - **List**: pair construction, access, mutation and predicates
//! - **Logic**: boolean operators, including the short-circuiting forms
//! - **Forms**: the binding and control special forms
//!
//! Each entry in [`BUILTIN_OPS`] declares its argument discipline: an
//! applicative operator has its arguments evaluated left to right by the
//! evaluator before it runs, while a special form receives the unevaluated
//! argument expressions together with the calling scope.

mod forms;
mod list;
mod logic;
mod math;

use std::fmt;

use super::environment::Environment;
use super::error::InterpreterError;
use crate::value::Value;

#[derive(Clone, Copy)]
pub enum OpKind {
    /// Runs on already-evaluated argument values.
    Applicative(fn(&[Value]) -> Result<Value, InterpreterError>),
    /// Runs on the raw argument expressions in the calling scope.
    Special(fn(&[Value], &Environment) -> Result<Value, InterpreterError>),
}

pub struct BuiltinOp {
    pub name: &'static str,
    pub kind: OpKind,
}

impl fmt::Debug for BuiltinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            OpKind::Applicative(_) => "applicative",
            OpKind::Special(_) => "special",
        };
        write!(f, "BuiltinOp({}, {})", self.name, kind)
    }
}

impl PartialEq for BuiltinOp {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

pub static BUILTIN_OPS: &[BuiltinOp] = &[
    // Control and binding
    BuiltinOp { name: "quote", kind: OpKind::Special(forms::quote) },
    BuiltinOp { name: "define", kind: OpKind::Special(forms::define) },
    BuiltinOp { name: "set!", kind: OpKind::Special(forms::set) },
    BuiltinOp { name: "if", kind: OpKind::Special(forms::if_form) },
    BuiltinOp { name: "lambda", kind: OpKind::Special(forms::lambda) },
    // Arithmetic and comparison
    BuiltinOp { name: "+", kind: OpKind::Applicative(math::add) },
    BuiltinOp { name: "-", kind: OpKind::Applicative(math::subtract) },
    BuiltinOp { name: "*", kind: OpKind::Applicative(math::multiply) },
    BuiltinOp { name: "/", kind: OpKind::Applicative(math::divide) },
    BuiltinOp { name: "=", kind: OpKind::Applicative(math::equal) },
    BuiltinOp { name: "<", kind: OpKind::Applicative(math::less) },
    BuiltinOp { name: ">", kind: OpKind::Applicative(math::greater) },
    BuiltinOp { name: "<=", kind: OpKind::Applicative(math::less_equal) },
    BuiltinOp { name: ">=", kind: OpKind::Applicative(math::greater_equal) },
    BuiltinOp { name: "min", kind: OpKind::Applicative(math::min) },
    BuiltinOp { name: "max", kind: OpKind::Applicative(math::max) },
    BuiltinOp { name: "abs", kind: OpKind::Applicative(math::abs) },
    BuiltinOp { name: "number?", kind: OpKind::Applicative(math::is_number) },
    // Lists
    BuiltinOp { name: "cons", kind: OpKind::Applicative(list::cons_pair) },
    BuiltinOp { name: "car", kind: OpKind::Applicative(list::car) },
    BuiltinOp { name: "cdr", kind: OpKind::Applicative(list::cdr) },
    BuiltinOp { name: "list", kind: OpKind::Applicative(list::list) },
    BuiltinOp { name: "list-ref", kind: OpKind::Applicative(list::list_ref) },
    BuiltinOp { name: "list-tail", kind: OpKind::Applicative(list::list_tail) },
    BuiltinOp { name: "set-car!", kind: OpKind::Applicative(list::set_car) },
    BuiltinOp { name: "set-cdr!", kind: OpKind::Applicative(list::set_cdr) },
    BuiltinOp { name: "pair?", kind: OpKind::Applicative(list::is_pair) },
    BuiltinOp { name: "null?", kind: OpKind::Applicative(list::is_null) },
    BuiltinOp { name: "list?", kind: OpKind::Applicative(list::is_list) },
    // Booleans
    BuiltinOp { name: "not", kind: OpKind::Applicative(logic::not) },
    BuiltinOp { name: "boolean?", kind: OpKind::Applicative(logic::is_boolean) },
    BuiltinOp { name: "symbol?", kind: OpKind::Applicative(logic::is_symbol) },
    BuiltinOp { name: "and", kind: OpKind::Special(logic::and) },
    BuiltinOp { name: "or", kind: OpKind::Special(logic::or) },
];

/// Defines every builtin in the given frame. Called once per interpreter to
/// populate the root of the scope chain.
pub fn install(env: &Environment) {
    for op in BUILTIN_OPS {
        env.define(op.name, Value::Builtin(op));
    }
}

macro_rules! require_args {
    ($args:expr, $n:expr, $name:expr) => {
        if $args.len() != $n {
            return Err(InterpreterError::runtime(format!(
                "{} expects exactly {} argument(s), got {}",
                $name,
                $n,
                $args.len()
            )));
        }
    };
}

macro_rules! require_at_least {
    ($args:expr, $n:expr, $name:expr) => {
        if $args.len() < $n {
            return Err(InterpreterError::runtime(format!(
                "{} expects at least {} argument(s), got {}",
                $name,
                $n,
                $args.len()
            )));
        }
    };
}

macro_rules! with_number {
    ($value:expr, $name:expr) => {
        match $value {
            Value::Number(n) => *n,
            other => {
                return Err(InterpreterError::runtime(format!(
                    "{} expects integer arguments, got {}",
                    $name,
                    crate::value::value_to_string(other)
                )));
            }
        }
    };
}

macro_rules! with_pair {
    ($value:expr, $name:expr) => {
        match $value {
            Value::Pair(cell) => std::rc::Rc::clone(cell),
            other => {
                return Err(InterpreterError::runtime(format!(
                    "{} expects a pair, got {}",
                    $name,
                    crate::value::value_to_string(other)
                )));
            }
        }
    };
}

pub(crate) use require_args;
pub(crate) use require_at_least;
pub(crate) use with_number;
pub(crate) use with_pair;
