#![allow(dead_code)]

use lisk::interpreter::{ErrorKind, Interpreter, InterpreterError};

/// A REPL-like session: one global scope shared across lines.
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    pub fn new() -> Self {
        Self {
            interpreter: Interpreter::new(),
        }
    }

    /// Evaluates one line and returns its printed result, panicking on error.
    pub fn run(&mut self, source: &str) -> String {
        match self.interpreter.run(source) {
            Ok(result) => result,
            Err(error) => panic!("`{}` should evaluate, got: {}", source, error),
        }
    }

    /// Evaluates one line that is expected to fail.
    pub fn run_err(&mut self, source: &str) -> InterpreterError {
        match self.interpreter.run(source) {
            Ok(result) => panic!("`{}` should fail, got `{}`", source, result),
            Err(error) => error,
        }
    }

    /// Runs a sequence of lines, asserting each (input, output) row in order.
    pub fn check_all(&mut self, rows: &[(&str, &str)]) {
        for (input, expected) in rows {
            let actual = self.run(input);
            assert_eq!(&actual, expected, "input: `{}`", input);
        }
    }
}

/// Evaluates one expression in a fresh session.
pub fn eval(source: &str) -> String {
    Session::new().run(source)
}

/// Evaluates one expression in a fresh session, returning the error category.
pub fn eval_err(source: &str) -> ErrorKind {
    Session::new().run_err(source).kind()
}
