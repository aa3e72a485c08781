use chumsky::span::SimpleSpan;
use chumsky::Parser;

use super::builtins::OpKind;
use super::environment::Environment;
use super::error::InterpreterError;
use super::parser::Reader;
use crate::diagnostic::Span;
use crate::lexer::lexer;
use crate::token::Token;
use crate::value::{value_to_string, Value};

/// A long-lived evaluation session: one global scope rooted on the builtins
/// frame, fed one expression at a time.
pub struct Interpreter {
    globals: Environment,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            globals: Environment::with_builtins(),
        }
    }

    /// Runs one line: tokenize, read exactly one expression, require end of
    /// input, evaluate, serialize.
    pub fn run(&mut self, source: &str) -> Result<String, InterpreterError> {
        let tokens = lex(source)?;
        let mut reader = Reader::new(tokens);
        let expr = reader.read_expr()?;
        if !reader.is_end() {
            return Err(InterpreterError::syntax("garbage at the end of input"));
        }
        let result = evaluate(&expr, &self.globals)?;
        Ok(value_to_string(&result))
    }
}

/// Tokenizes a whole line, mapping lexer failures to syntax errors that
/// carry the offending character and its position.
fn lex(source: &str) -> Result<Vec<(Token, SimpleSpan)>, InterpreterError> {
    lexer().parse(source).into_result().map_err(|errors| {
        let position = errors.first().map(|e| e.span().start).unwrap_or(0);
        match source[position..].chars().next() {
            Some(found) => InterpreterError::syntax_at(
                format!(
                    "tokenization failed at position {}: unexpected character {:?}",
                    position, found
                ),
                Span::new(position, position + found.len_utf8()),
            ),
            None => InterpreterError::syntax("tokenization failed: unexpected end of input"),
        }
    })
}

/// Interprets a value node under a scope. Atoms and callables evaluate to
/// themselves, symbols resolve through the scope chain, and a pair is an
/// application of its evaluated head to its raw tail.
pub fn evaluate(expr: &Value, env: &Environment) -> Result<Value, InterpreterError> {
    match expr {
        Value::Empty => Err(InterpreterError::runtime("empty list cannot be evaluated")),
        Value::Number(_) | Value::Bool(_) | Value::Builtin(_) | Value::Lambda(_) => {
            Ok(expr.clone())
        }
        Value::Symbol(name) => env.lookup(name),
        Value::Pair(cell) => {
            let (head, tail) = {
                let pair = cell.borrow();
                (pair.head.clone(), pair.tail.clone())
            };
            let callee = evaluate(&head, env)?;
            apply(&callee, &tail, env)
        }
    }
}

/// Calls a builtin or lambda with the syntactic argument list. Applicative
/// callees have each argument evaluated left to right first; special forms
/// get the raw expressions.
fn apply(callee: &Value, args: &Value, env: &Environment) -> Result<Value, InterpreterError> {
    let arg_exprs = list_to_vec(args)?;
    match callee {
        Value::Builtin(op) => match op.kind {
            OpKind::Special(run) => run(&arg_exprs, env),
            OpKind::Applicative(run) => {
                let values = evaluate_each(&arg_exprs, env)?;
                run(&values)
            }
        },
        Value::Lambda(lambda) => {
            if arg_exprs.len() != lambda.params.len() {
                return Err(InterpreterError::runtime(format!(
                    "lambda expects {} argument(s), got {}",
                    lambda.params.len(),
                    arg_exprs.len()
                )));
            }
            // Arguments are evaluated in the caller's scope; the body runs in
            // a fresh frame chained onto the captured scope.
            let values = evaluate_each(&arg_exprs, env)?;
            let frame = lambda.env.child();
            for (param, value) in lambda.params.iter().zip(values) {
                frame.define(param.as_ref(), value);
            }
            let mut result = Value::Empty;
            for expr in &lambda.body {
                result = evaluate(expr, &frame)?;
            }
            Ok(result)
        }
        other => Err(InterpreterError::runtime(format!(
            "first element of list is not applicable: {}",
            value_to_string(other)
        ))),
    }
}

fn evaluate_each(exprs: &[Value], env: &Environment) -> Result<Vec<Value>, InterpreterError> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        values.push(evaluate(expr, env)?);
    }
    Ok(values)
}

/// Flattens a proper list node into its elements; improper lists are
/// rejected where a proper one is demanded.
pub fn list_to_vec(node: &Value) -> Result<Vec<Value>, InterpreterError> {
    let mut items = Vec::new();
    let mut current = node.clone();
    loop {
        match current {
            Value::Empty => return Ok(items),
            Value::Pair(cell) => {
                let (head, tail) = {
                    let pair = cell.borrow();
                    (pair.head.clone(), pair.tail.clone())
                };
                items.push(head);
                current = tail;
            }
            _ => {
                return Err(InterpreterError::runtime(
                    "expected a proper list of arguments",
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::ErrorKind;
    use crate::value::{cons, list_of, symbol};

    fn run(source: &str) -> String {
        Interpreter::new().run(source).expect("should evaluate")
    }

    fn run_err(source: &str) -> ErrorKind {
        Interpreter::new()
            .run(source)
            .expect_err("should fail")
            .kind()
    }

    #[test]
    fn test_self_evaluating_atoms() {
        assert_eq!(run("42"), "42");
        assert_eq!(run("-42"), "-42");
        assert_eq!(run("#t"), "#t");
        assert_eq!(run("#f"), "#f");
    }

    #[test]
    fn test_symbols_resolve_through_scope() {
        let mut interpreter = Interpreter::new();
        interpreter.run("(define x 7)").unwrap();
        assert_eq!(interpreter.run("x").unwrap(), "7");
        assert_eq!(run_err("y"), ErrorKind::Name);
    }

    #[test]
    fn test_application() {
        assert_eq!(run("(+ 1 2)"), "3");
        assert_eq!(run("((lambda (x) (* x x)) 6)"), "36");
    }

    #[test]
    fn test_non_callable_head() {
        assert_eq!(run_err("(1 2)"), ErrorKind::Runtime);
        assert_eq!(run_err("(())"), ErrorKind::Runtime);
    }

    #[test]
    fn test_improper_argument_list() {
        assert_eq!(run_err("(+ 1 . 2)"), ErrorKind::Runtime);
    }

    #[test]
    fn test_run_rejects_trailing_input() {
        assert_eq!(run_err("1 2"), ErrorKind::Syntax);
        assert_eq!(run_err("(+ 1 2))"), ErrorKind::Syntax);
    }

    #[test]
    fn test_run_rejects_empty_input() {
        assert_eq!(run_err(""), ErrorKind::Syntax);
        assert_eq!(run_err("   "), ErrorKind::Syntax);
    }

    #[test]
    fn test_run_rejects_unknown_characters() {
        assert_eq!(run_err("(+ 1 2) ["), ErrorKind::Syntax);
        assert_eq!(run_err(","), ErrorKind::Syntax);
    }

    #[test]
    fn test_list_to_vec() {
        let proper = list_of(vec![symbol("a"), symbol("b")]);
        assert_eq!(list_to_vec(&proper).unwrap().len(), 2);
        assert!(list_to_vec(&Value::Empty).unwrap().is_empty());
        assert!(list_to_vec(&cons(symbol("a"), symbol("b"))).is_err());
        assert!(list_to_vec(&Value::Number(1)).is_err());
    }
}
