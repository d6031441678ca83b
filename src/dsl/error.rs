//! Error types for the melody compiler.

use thiserror::Error;

use super::compile::Mode;

/// An error that occurred while compiling melody source.
///
/// `line` and `col` are 1-based. Errors that concern a whole line (directives,
/// mode checks) report column 1.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[{line}:{col}] {kind}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    #[error("unknown symbol '{0}'")]
    InvalidSymbol(char),
    #[error("note '{0}' is missing its octave digit")]
    MissingOctave(char),
    #[error("unknown directive '{0}'")]
    UnknownDirective(String),
    #[error("invalid value '{value}' for directive '{key}'")]
    InvalidDirectiveValue { key: String, value: String },
    #[error("note lines cannot be compiled in {0} mode")]
    UnsupportedMode(Mode),
    #[error("malformed directive '{0}': expected exactly one '='")]
    MalformedDirective(String),
    #[error("sustain has no preceding tone to extend")]
    DanglingSustain,
    #[error("composition is longer than {limit_ms} ms")]
    TooLong { limit_ms: f64 },
}

impl CompileError {
    pub fn new(kind: ErrorKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }

    /// An error attributed to a whole line.
    pub fn at_line(kind: ErrorKind, line: usize) -> Self {
        Self::new(kind, line, 1)
    }

    /// Returns a copy of this error attributed to `line`.
    ///
    /// The tokenizer and directive interpreter work on a single line and leave
    /// the line number at 0; the compiler fills it in.
    pub fn on_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position() {
        let err = CompileError::new(ErrorKind::InvalidSymbol('x'), 3, 7);
        assert_eq!(err.to_string(), "[3:7] unknown symbol 'x'");
    }

    #[test]
    fn on_line_keeps_column() {
        let err = CompileError::new(ErrorKind::DanglingSustain, 0, 4).on_line(9);
        assert_eq!(err.line, 9);
        assert_eq!(err.col, 4);
    }

    #[test]
    fn directive_value_message() {
        let err = CompileError::at_line(
            ErrorKind::InvalidDirectiveValue {
                key: "bpm".into(),
                value: "fast".into(),
            },
            2,
        );
        assert_eq!(
            err.to_string(),
            "[2:1] invalid value 'fast' for directive 'bpm'"
        );
    }
}
