//! Binding and control special forms: `quote`, `define`, `set!`, `if` and
//! `lambda`. Each receives its argument expressions unevaluated, so
//! ill-formed shapes are syntax errors rather than runtime ones.

use std::rc::Rc;

use super::super::environment::Environment;
use super::super::error::InterpreterError;
use super::super::evaluator::{evaluate, list_to_vec};
use crate::value::{value_to_string, Lambda, Value};

pub fn quote(args: &[Value], _env: &Environment) -> Result<Value, InterpreterError> {
    if args.len() != 1 {
        return Err(InterpreterError::syntax("quote expects exactly one argument"));
    }
    Ok(args[0].clone())
}

pub fn if_form(args: &[Value], env: &Environment) -> Result<Value, InterpreterError> {
    if args.len() != 2 && args.len() != 3 {
        return Err(InterpreterError::syntax(
            "if expects a test, a consequent and an optional alternative",
        ));
    }
    let test = evaluate(&args[0], env)?;
    if test.is_truthy() {
        evaluate(&args[1], env)
    } else if let Some(alternative) = args.get(2) {
        evaluate(alternative, env)
    } else {
        Ok(Value::Empty)
    }
}

/// Two shapes: `(define name expr)` binds an evaluated value, and
/// `(define (name params...) body...)` is sugar for binding a lambda. Both
/// return the defined name.
pub fn define(args: &[Value], env: &Environment) -> Result<Value, InterpreterError> {
    if args.is_empty() {
        return Err(InterpreterError::syntax("empty define"));
    }
    match &args[0] {
        Value::Symbol(name) => {
            if args.len() != 2 {
                return Err(InterpreterError::syntax("define expects a name and a value"));
            }
            let value = evaluate(&args[1], env)?;
            env.define(name.as_ref(), value);
            Ok(Value::Symbol(Rc::clone(name)))
        }
        Value::Pair(_) => {
            let signature = list_to_vec(&args[0]).map_err(|_| {
                InterpreterError::syntax("define expects a proper list as function signature")
            })?;
            let Some((name, params)) = signature.split_first() else {
                return Err(InterpreterError::syntax("define expects a function name"));
            };
            let name = match name {
                Value::Symbol(name) => Rc::clone(name),
                other => {
                    return Err(InterpreterError::syntax(format!(
                        "function name must be a symbol, got {}",
                        value_to_string(other)
                    )));
                }
            };
            let lambda = make_lambda(params, &args[1..], env)?;
            env.define(name.as_ref(), lambda);
            Ok(Value::Symbol(name))
        }
        other => Err(InterpreterError::syntax(format!(
            "define expects a symbol or a function signature, got {}",
            value_to_string(other)
        ))),
    }
}

/// Evaluates the value first, then rebinds the nearest existing binding and
/// returns the value it replaced.
pub fn set(args: &[Value], env: &Environment) -> Result<Value, InterpreterError> {
    if args.len() != 2 {
        return Err(InterpreterError::syntax("set! expects a name and a value"));
    }
    let name = match &args[0] {
        Value::Symbol(name) => name,
        other => {
            return Err(InterpreterError::syntax(format!(
                "set! expects a symbol as its first argument, got {}",
                value_to_string(other)
            )));
        }
    };
    let value = evaluate(&args[1], env)?;
    env.assign(name, value)
}

pub fn lambda(args: &[Value], env: &Environment) -> Result<Value, InterpreterError> {
    if args.len() < 2 {
        return Err(InterpreterError::syntax(
            "lambda expects a parameter list and at least one body expression",
        ));
    }
    let param_list = list_to_vec(&args[0])
        .map_err(|_| InterpreterError::syntax("lambda expects a proper list of parameters"))?;
    make_lambda(&param_list, &args[1..], env)
}

fn make_lambda(
    params: &[Value],
    body: &[Value],
    env: &Environment,
) -> Result<Value, InterpreterError> {
    if body.is_empty() {
        return Err(InterpreterError::syntax("lambda body cannot be empty"));
    }
    let params = params
        .iter()
        .map(|param| match param {
            Value::Symbol(name) => Ok(Rc::clone(name)),
            other => Err(InterpreterError::syntax(format!(
                "parameter names must be symbols, got {}",
                value_to_string(other)
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Lambda(Rc::new(Lambda {
        params,
        body: body.to_vec(),
        env: env.clone(),
    })))
}
