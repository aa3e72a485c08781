use crate::diagnostic::{Diagnostic, Span};

/// Every failure the interpreter can raise, split into the three categories
/// the driver distinguishes: malformed input, unresolvable names, and
/// everything that goes wrong during evaluation.
#[derive(Debug, Clone)]
pub enum InterpreterError {
    Syntax { message: String, span: Span },
    Name { name: String, span: Span },
    Runtime { message: String, span: Span },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Name,
    Runtime,
}

impl InterpreterError {
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax { message: message.into(), span: Span::unknown() }
    }

    pub fn syntax_at(message: impl Into<String>, span: Span) -> Self {
        Self::Syntax { message: message.into(), span }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::Name { name: name.into(), span: Span::unknown() }
    }

    pub fn name_at(name: impl Into<String>, span: Span) -> Self {
        Self::Name { name: name.into(), span }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime { message: message.into(), span: Span::unknown() }
    }

    pub fn runtime_at(message: impl Into<String>, span: Span) -> Self {
        Self::Runtime { message: message.into(), span }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::Name { .. } => ErrorKind::Name,
            Self::Runtime { .. } => ErrorKind::Runtime,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Syntax { span, .. } => *span,
            Self::Name { span, .. } => *span,
            Self::Runtime { span, .. } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (diagnostic, pointer_message) = match self {
            Self::Syntax { message, .. } => (
                Diagnostic::error(message.clone()).with_code("E0101"),
                "invalid syntax",
            ),
            Self::Name { name, .. } => (
                Diagnostic::error(format!("unable to find symbol `{}`", name))
                    .with_code("E0201")
                    .with_help(format!("`{}` is not bound in any enclosing scope", name)),
                "not found in this scope",
            ),
            Self::Runtime { message, .. } => (
                Diagnostic::error(message.clone()).with_code("E0301"),
                "raised here",
            ),
        };
        let span = self.span();
        if span.is_known() {
            diagnostic.with_pointer(span, pointer_message)
        } else {
            diagnostic
        }
    }
}

impl std::fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpreterError::Syntax { message, .. } => write!(f, "Syntax error: {}", message),
            InterpreterError::Name { name, .. } => {
                write!(f, "Name error: unable to find symbol {}", name)
            }
            InterpreterError::Runtime { message, .. } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for InterpreterError {}
