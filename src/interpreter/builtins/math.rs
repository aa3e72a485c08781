//! Integer arithmetic and comparison operators.

use super::super::error::InterpreterError;
use super::{require_args, require_at_least, with_number};
use crate::value::Value;

fn overflow(name: &str) -> InterpreterError {
    InterpreterError::runtime(format!("integer overflow in {}", name))
}

fn checked_div(numerator: i64, denominator: i64) -> Result<i64, InterpreterError> {
    if denominator == 0 {
        return Err(InterpreterError::runtime("division by zero"));
    }
    numerator.checked_div(denominator).ok_or_else(|| overflow("/"))
}

pub fn add(args: &[Value]) -> Result<Value, InterpreterError> {
    let mut sum: i64 = 0;
    for arg in args {
        let n = with_number!(arg, "+");
        sum = sum.checked_add(n).ok_or_else(|| overflow("+"))?;
    }
    Ok(Value::Number(sum))
}

pub fn subtract(args: &[Value]) -> Result<Value, InterpreterError> {
    require_at_least!(args, 1, "-");
    let first = with_number!(&args[0], "-");
    if args.len() == 1 {
        return Ok(Value::Number(first.checked_neg().ok_or_else(|| overflow("-"))?));
    }
    let mut difference = first;
    for arg in &args[1..] {
        let n = with_number!(arg, "-");
        difference = difference.checked_sub(n).ok_or_else(|| overflow("-"))?;
    }
    Ok(Value::Number(difference))
}

pub fn multiply(args: &[Value]) -> Result<Value, InterpreterError> {
    let mut product: i64 = 1;
    for arg in args {
        let n = with_number!(arg, "*");
        product = product.checked_mul(n).ok_or_else(|| overflow("*"))?;
    }
    Ok(Value::Number(product))
}

/// Unary `(/ x)` is `1/x` in integer division, so it collapses to zero for
/// any |x| > 1. See DESIGN.md on this choice.
pub fn divide(args: &[Value]) -> Result<Value, InterpreterError> {
    require_at_least!(args, 1, "/");
    let first = with_number!(&args[0], "/");
    if args.len() == 1 {
        return Ok(Value::Number(checked_div(1, first)?));
    }
    let mut quotient = first;
    for arg in &args[1..] {
        let n = with_number!(arg, "/");
        quotient = checked_div(quotient, n)?;
    }
    Ok(Value::Number(quotient))
}

// Chained comparisons: with fewer than two arguments the relation holds
// vacuously; otherwise every adjacent pair must satisfy it.
macro_rules! comparison {
    ($name:ident, $op:tt, $op_str:expr) => {
        pub fn $name(args: &[Value]) -> Result<Value, InterpreterError> {
            if args.len() <= 1 {
                return Ok(Value::Bool(true));
            }
            let mut prev = with_number!(&args[0], $op_str);
            for arg in &args[1..] {
                let current = with_number!(arg, $op_str);
                if !(prev $op current) {
                    return Ok(Value::Bool(false));
                }
                prev = current;
            }
            Ok(Value::Bool(true))
        }
    };
}

comparison!(equal, ==, "=");
comparison!(less, <, "<");
comparison!(greater, >, ">");
comparison!(less_equal, <=, "<=");
comparison!(greater_equal, >=, ">=");

pub fn min(args: &[Value]) -> Result<Value, InterpreterError> {
    require_at_least!(args, 1, "min");
    let mut result = with_number!(&args[0], "min");
    for arg in &args[1..] {
        result = result.min(with_number!(arg, "min"));
    }
    Ok(Value::Number(result))
}

pub fn max(args: &[Value]) -> Result<Value, InterpreterError> {
    require_at_least!(args, 1, "max");
    let mut result = with_number!(&args[0], "max");
    for arg in &args[1..] {
        result = result.max(with_number!(arg, "max"));
    }
    Ok(Value::Number(result))
}

pub fn abs(args: &[Value]) -> Result<Value, InterpreterError> {
    require_args!(args, 1, "abs");
    let n = with_number!(&args[0], "abs");
    Ok(Value::Number(n.checked_abs().ok_or_else(|| overflow("abs"))?))
}

pub fn is_number(args: &[Value]) -> Result<Value, InterpreterError> {
    require_args!(args, 1, "number?");
    Ok(Value::Bool(args[0].is_number()))
}
