//! Error reports for one line of input. The interpreter reads a single
//! expression at a time, so a report is a headline plus an optional caret
//! under the offending slice of the echoed line; there are no files, line
//! numbers or severities to track.

use owo_colors::OwoColorize;

/// Byte range inside the line being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// For errors that cannot point anywhere in the input.
    pub fn unknown() -> Self {
        Self { start: 0, end: 0 }
    }

    pub fn is_known(&self) -> bool {
        self.start != 0 || self.end != 0
    }

    fn width(&self) -> usize {
        self.end.saturating_sub(self.start).max(1)
    }
}

/// A caret anchor: where in the line to point, and what to say beside it.
#[derive(Debug, Clone)]
pub struct Pointer {
    pub span: Span,
    pub message: String,
}

/// One error report: headline message, stable code, optional caret into the
/// source line, and trailing notes.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: Option<String>,
    pub message: String,
    pub pointer: Option<Pointer>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            pointer: None,
            notes: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_pointer(mut self, span: Span, message: impl Into<String>) -> Self {
        self.pointer = Some(Pointer {
            span,
            message: message.into(),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.notes.push(format!("help: {}", help.into()));
        self
    }
}

/// Renders a report against the line it came from:
///
/// ```text
/// error[E0101]: unexpected closing bracket
///   | (+ 1 2))
///   |         ^ invalid syntax
///   = help: ...
/// ```
pub fn render_diagnostic(source: &str, diagnostic: &Diagnostic, use_color: bool) -> String {
    let style = Styler { enabled: use_color };
    let mut output = String::new();

    match &diagnostic.code {
        Some(code) => output.push_str(&format!(
            "{}[{}]: {}\n",
            style.red_bold("error"),
            code,
            style.bold(&diagnostic.message)
        )),
        None => output.push_str(&format!(
            "{}: {}\n",
            style.red_bold("error"),
            style.bold(&diagnostic.message)
        )),
    }

    if let Some(pointer) = diagnostic.pointer.as_ref().filter(|p| p.span.is_known()) {
        let (line, column) = line_at(source, pointer.span.start);
        output.push_str(&format!("  {} {}\n", style.blue("|"), line));
        let underline = format!("{}{}", " ".repeat(column), "^".repeat(pointer.span.width()));
        output.push_str(&format!(
            "  {} {} {}\n",
            style.blue("|"),
            style.red_bold(&underline),
            pointer.message
        ));
    }

    for note in &diagnostic.notes {
        let prefix = if note.starts_with("help:") {
            style.cyan("=")
        } else {
            style.blue("=")
        };
        output.push_str(&format!("  {} {}\n", prefix, note));
    }

    output
}

/// The line containing `offset` and the column of `offset` within it. The
/// REPL feeds single lines, but an `--eval` argument may carry newlines.
fn line_at(source: &str, offset: usize) -> (&str, usize) {
    let offset = offset.min(source.len());
    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = source[offset..]
        .find('\n')
        .map(|i| offset + i)
        .unwrap_or(source.len());
    let column = source[line_start..offset].chars().count();
    (&source[line_start..line_end], column)
}

struct Styler {
    enabled: bool,
}

impl Styler {
    fn red_bold(&self, text: &str) -> String {
        if self.enabled {
            format!("{}", text.red().bold())
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.enabled {
            format!("{}", text.bold())
        } else {
            text.to_string()
        }
    }

    fn blue(&self, text: &str) -> String {
        if self.enabled {
            format!("{}", text.blue())
        } else {
            text.to_string()
        }
    }

    fn cyan(&self, text: &str) -> String {
        if self.enabled {
            format!("{}", text.cyan())
        } else {
            text.to_string()
        }
    }
}
