use chumsky::span::SimpleSpan;
use std::rc::Rc;

use super::error::InterpreterError;
use crate::diagnostic::Span;
use crate::token::Token;
use crate::value::{cons, Value};

/// Consumes the lexer's token stream and builds value nodes. The caller
/// reads one expression with [`Reader::read_expr`] and then checks
/// [`Reader::is_end`] to reject trailing input.
pub struct Reader {
    tokens: Vec<(Token, SimpleSpan)>,
    current: usize,
}

impl Reader {
    pub fn new(tokens: Vec<(Token, SimpleSpan)>) -> Self {
        Self { tokens, current: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current).map(|(token, _)| token)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.current).map(|(token, _)| token.clone());
        if token.is_some() {
            self.current += 1;
        }
        token
    }

    pub fn is_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Span of the token at the cursor, or a zero-width span past the last
    /// token once the stream is exhausted.
    fn span(&self) -> Span {
        match self.tokens.get(self.current) {
            Some((_, span)) => Span::new(span.start, span.end),
            None => self
                .tokens
                .last()
                .map(|(_, span)| Span::new(span.end, span.end))
                .unwrap_or_else(Span::unknown),
        }
    }

    /// Reads one whole expression and returns its root node.
    pub fn read_expr(&mut self) -> Result<Value, InterpreterError> {
        let span = self.span();
        let Some(token) = self.advance() else {
            return Err(InterpreterError::syntax("unexpected end of input"));
        };
        match token {
            Token::CloseParen => Err(InterpreterError::syntax_at(
                "unexpected closing bracket",
                span,
            )),
            Token::OpenParen => self.read_list(),
            Token::Number(value) => Ok(Value::Number(value)),
            // Booleans are symbols at the token level and recognized here.
            Token::Symbol(name) => Ok(match name.as_str() {
                "#t" => Value::Bool(true),
                "#f" => Value::Bool(false),
                _ => Value::Symbol(Rc::from(name.as_str())),
            }),
            Token::Quote => {
                let quoted = self.read_expr()?;
                Ok(cons(
                    Value::Symbol(Rc::from("quote")),
                    cons(quoted, Value::Empty),
                ))
            }
            Token::Dot => Err(InterpreterError::syntax_at(
                "dot is only valid inside a list",
                span,
            )),
        }
    }

    /// Reads the remainder of a list; the opening bracket has already been
    /// consumed.
    fn read_list(&mut self) -> Result<Value, InterpreterError> {
        match self.peek() {
            None => return Err(InterpreterError::syntax("list misses closing bracket")),
            Some(Token::CloseParen) => {
                self.advance();
                return Ok(Value::Empty);
            }
            Some(Token::Dot) => {
                return Err(InterpreterError::syntax_at("ill-formed dotted list", self.span()));
            }
            Some(_) => {}
        }
        let head = self.read_expr()?;
        if self.peek() == Some(&Token::Dot) {
            self.advance();
            if self.is_end() {
                return Err(InterpreterError::syntax("list misses closing bracket"));
            }
            let tail = self.read_expr()?;
            match self.peek() {
                Some(Token::CloseParen) => {
                    self.advance();
                }
                Some(_) => {
                    return Err(InterpreterError::syntax_at(
                        "ill-formed dotted list",
                        self.span(),
                    ));
                }
                None => return Err(InterpreterError::syntax("list misses closing bracket")),
            }
            return Ok(cons(head, tail));
        }
        let tail = self.read_list()?;
        Ok(cons(head, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::ErrorKind;
    use crate::lexer::lexer;
    use crate::value::value_to_string;
    use chumsky::Parser;

    fn read(source: &str) -> Result<Value, InterpreterError> {
        let tokens = lexer().parse(source).output().expect("Lexer failed").clone();
        let mut reader = Reader::new(tokens);
        let expr = reader.read_expr()?;
        assert!(reader.is_end(), "reader left trailing tokens in `{}`", source);
        Ok(expr)
    }

    fn read_ok(source: &str) -> String {
        value_to_string(&read(source).expect("should read"))
    }

    fn read_err(source: &str) -> ErrorKind {
        read(source).expect_err("should fail").kind()
    }

    #[test]
    fn test_read_atoms() {
        assert_eq!(read_ok("42"), "42");
        assert_eq!(read_ok("-3"), "-3");
        assert_eq!(read_ok("#t"), "#t");
        assert_eq!(read_ok("#f"), "#f");
        assert_eq!(read_ok("abc"), "abc");
    }

    #[test]
    fn test_read_lists() {
        assert_eq!(read_ok("()"), "()");
        assert_eq!(read_ok("(1 2 3)"), "(1 2 3)");
        assert_eq!(read_ok("(1 (2 3) 4)"), "(1 (2 3) 4)");
        assert_eq!(read_ok("( 1  2 )"), "(1 2)");
    }

    #[test]
    fn test_read_dotted_pairs() {
        assert_eq!(read_ok("(1 . 2)"), "(1 . 2)");
        assert_eq!(read_ok("(1 2 . 3)"), "(1 2 . 3)");
        assert_eq!(read_ok("(1 . (2 . ()))"), "(1 2)");
    }

    #[test]
    fn test_quote_shorthand_expands_to_list() {
        assert_eq!(read_ok("'a"), "(quote a)");
        assert_eq!(read_ok("'(1 2)"), "(quote (1 2))");
        assert_eq!(read_ok("''a"), "(quote (quote a))");
    }

    #[test]
    fn test_read_errors() {
        assert_eq!(read_err(""), ErrorKind::Syntax);
        assert_eq!(read_err(")"), ErrorKind::Syntax);
        assert_eq!(read_err("(1 2"), ErrorKind::Syntax);
        assert_eq!(read_err("(. 2)"), ErrorKind::Syntax);
        assert_eq!(read_err("(1 . 2 3)"), ErrorKind::Syntax);
        assert_eq!(read_err("(1 ."), ErrorKind::Syntax);
        assert_eq!(read_err("."), ErrorKind::Syntax);
        assert_eq!(read_err("'"), ErrorKind::Syntax);
    }

    #[test]
    fn test_trailing_tokens_are_left_for_the_caller() {
        let tokens = lexer().parse("1 2").output().expect("Lexer failed").clone();
        let mut reader = Reader::new(tokens);
        reader.read_expr().expect("should read the first expression");
        assert!(!reader.is_end());
    }
}
