//! Melody compiler — note lines and directives → tone list.

pub mod compile;
pub mod directive;
pub mod error;
pub mod expr;
pub mod lexer;
pub mod note;
pub mod token;

pub use compile::{CompilerState, Mode, NoteCompiler, Tone};
pub use error::{CompileError, ErrorKind};

use compile::compile_source;

/// The melody compiler.
///
/// Runs each source line through either the directive interpreter or the
/// tokenizer and frequency calculator, collecting an ordered tone list.
pub struct Compiler;

impl Compiler {
    /// Compile melody source into its tone list.
    ///
    /// A failed compilation yields no tones at all.
    pub fn compile(source: &str) -> Result<Vec<Tone>, CompileError> {
        compile_source(source)
    }
}
