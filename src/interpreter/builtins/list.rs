//! Pair and list operators: construction, access, mutation and predicates.

use super::super::error::InterpreterError;
use super::super::evaluator::list_to_vec;
use super::{require_args, with_number, with_pair};
use crate::value::{cons, list_of, Value};

pub fn cons_pair(args: &[Value]) -> Result<Value, InterpreterError> {
    require_args!(args, 2, "cons");
    Ok(cons(args[0].clone(), args[1].clone()))
}

pub fn car(args: &[Value]) -> Result<Value, InterpreterError> {
    require_args!(args, 1, "car");
    let cell = with_pair!(&args[0], "car");
    let head = cell.borrow().head.clone();
    Ok(head)
}

pub fn cdr(args: &[Value]) -> Result<Value, InterpreterError> {
    require_args!(args, 1, "cdr");
    let cell = with_pair!(&args[0], "cdr");
    let tail = cell.borrow().tail.clone();
    Ok(tail)
}

pub fn list(args: &[Value]) -> Result<Value, InterpreterError> {
    Ok(list_of(args.to_vec()))
}

pub fn list_ref(args: &[Value]) -> Result<Value, InterpreterError> {
    require_args!(args, 2, "list-ref");
    let items = list_to_vec(&args[0])?;
    let index = with_number!(&args[1], "list-ref");
    if index < 0 || index as usize >= items.len() {
        return Err(InterpreterError::runtime("list-ref index out of bounds"));
    }
    Ok(items[index as usize].clone())
}

/// Returns the tail starting at position k, sharing structure with the
/// argument; k may equal the length, yielding the empty list.
pub fn list_tail(args: &[Value]) -> Result<Value, InterpreterError> {
    require_args!(args, 2, "list-tail");
    let items = list_to_vec(&args[0])?;
    let index = with_number!(&args[1], "list-tail");
    if index < 0 || index as usize > items.len() {
        return Err(InterpreterError::runtime("list-tail index out of bounds"));
    }
    let mut current = args[0].clone();
    for _ in 0..index {
        let cell = with_pair!(&current, "list-tail");
        let tail = cell.borrow().tail.clone();
        current = tail;
    }
    Ok(current)
}

pub fn set_car(args: &[Value]) -> Result<Value, InterpreterError> {
    require_args!(args, 2, "set-car!");
    let cell = with_pair!(&args[0], "set-car!");
    cell.borrow_mut().head = args[1].clone();
    Ok(Value::Empty)
}

pub fn set_cdr(args: &[Value]) -> Result<Value, InterpreterError> {
    require_args!(args, 2, "set-cdr!");
    let cell = with_pair!(&args[0], "set-cdr!");
    cell.borrow_mut().tail = args[1].clone();
    Ok(Value::Empty)
}

pub fn is_pair(args: &[Value]) -> Result<Value, InterpreterError> {
    require_args!(args, 1, "pair?");
    Ok(Value::Bool(args[0].is_pair()))
}

pub fn is_null(args: &[Value]) -> Result<Value, InterpreterError> {
    require_args!(args, 1, "null?");
    Ok(Value::Bool(args[0].is_empty()))
}

pub fn is_list(args: &[Value]) -> Result<Value, InterpreterError> {
    require_args!(args, 1, "list?");
    Ok(Value::Bool(args[0].is_proper_list()))
}
