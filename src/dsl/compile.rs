//! Melody compiler — turns source text into an ordered tone list.
//!
//! Compilation is a single sequential pass over the source lines. Directive
//! lines update the [`CompilerState`]; note lines are tokenized and turned
//! into [`Tone`]s using the state in effect at that line.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::directive::Directive;
use super::error::{CompileError, ErrorKind};
use super::lexer::tokenize;
use super::note::note_to_freq;
use super::token::{Symbol, SymbolKind};

/// Notation mode selected by the `mode` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Notes,
    /// Accepted, but note lines cannot be compiled in this mode.
    Tabs,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "notes" => Ok(Mode::Notes),
            "tabs" => Ok(Mode::Tabs),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Notes => write!(f, "notes"),
            Mode::Tabs => write!(f, "tabs"),
        }
    }
}

/// Settings that directives change and note lines read.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerState {
    pub ms_per_beat: f64,
    /// Frequency of `c1`, the reference every note is computed from.
    pub tuning_a1_hz: f64,
    pub time_divisor: f64,
    pub mode: Mode,
}

impl Default for CompilerState {
    fn default() -> Self {
        Self {
            ms_per_beat: 500.0,
            tuning_a1_hz: 55.0,
            time_divisor: 1.0,
            mode: Mode::Notes,
        }
    }
}

impl CompilerState {
    /// Duration of one symbol on a note line, in milliseconds.
    pub fn note_len(&self) -> f64 {
        self.ms_per_beat / self.time_divisor
    }
}

/// One playback unit. A frequency of 0 Hz is silence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f64,
    pub duration_ms: f64,
}

impl Tone {
    pub fn new(frequency: f64, duration_ms: f64) -> Self {
        Self {
            frequency,
            duration_ms,
        }
    }

    pub fn rest(duration_ms: f64) -> Self {
        Self::new(0.0, duration_ms)
    }

    pub fn is_silent(&self) -> bool {
        self.frequency == 0.0
    }
}

/// Longest composition the compiler accepts, in milliseconds (one hour).
///
/// Rendering holds the whole composition in memory, one byte per sample.
pub const MAX_TOTAL_MS: f64 = 3_600_000.0;

/// Stateful compiler for one source document.
#[derive(Debug, Clone, Default)]
pub struct NoteCompiler {
    state: CompilerState,
    tones: Vec<Tone>,
    /// Pitch of the most recent note symbol; revived by a sustain after a rest.
    prev_note_frequency: f64,
    total_ms: f64,
}

impl NoteCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CompilerState {
        &self.state
    }

    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    pub fn into_tones(self) -> Vec<Tone> {
        self.tones
    }

    /// Compile every line of `source` in order.
    pub fn compile_source(&mut self, source: &str) -> Result<(), CompileError> {
        for (idx, line) in source.lines().enumerate() {
            self.compile_line(idx + 1, line)?;
        }
        debug!(
            tones = self.tones.len(),
            total_ms = self.total_ms,
            "compiled source"
        );
        Ok(())
    }

    /// Compile one raw source line. `line_no` is 1-based and only used for
    /// error reporting.
    pub fn compile_line(&mut self, line_no: usize, raw: &str) -> Result<(), CompileError> {
        let line = strip_comment(raw);

        if line.trim_matches(' ').is_empty() {
            return Ok(());
        }

        if line.starts_with('!') {
            let directive =
                Directive::parse(line).map_err(|kind| CompileError::at_line(kind, line_no))?;
            directive.apply(&mut self.state);
            debug!(line = line_no, ?directive, "applied directive");
            return Ok(());
        }

        if self.state.mode != Mode::Notes {
            return Err(CompileError::at_line(
                ErrorKind::UnsupportedMode(self.state.mode),
                line_no,
            ));
        }

        let symbols = tokenize(line).map_err(|e| e.on_line(line_no))?;
        let note_len = self.state.note_len();
        for symbol in symbols {
            self.push_symbol(symbol, note_len)
                .map_err(|e| e.on_line(line_no))?;
        }
        Ok(())
    }

    fn push_symbol(&mut self, symbol: Symbol, note_len: f64) -> Result<(), CompileError> {
        // Every symbol lengthens the composition by one unit.
        let total_ms = self.total_ms + note_len;
        if total_ms > MAX_TOTAL_MS {
            return Err(CompileError::new(
                ErrorKind::TooLong {
                    limit_ms: MAX_TOTAL_MS,
                },
                0,
                symbol.col,
            ));
        }
        self.total_ms = total_ms;

        match symbol.kind {
            SymbolKind::Note { letter, octave } => {
                let frequency = note_to_freq(letter, octave, self.state.tuning_a1_hz)
                    .ok_or_else(|| {
                        CompileError::new(ErrorKind::InvalidSymbol(letter), 0, symbol.col)
                    })?;
                self.tones.push(Tone::new(frequency, note_len));
                self.prev_note_frequency = frequency;
            }
            SymbolKind::Sustain => {
                let last = self.tones.last_mut().ok_or_else(|| {
                    CompileError::new(ErrorKind::DanglingSustain, 0, symbol.col)
                })?;
                if last.is_silent() {
                    self.tones
                        .push(Tone::new(self.prev_note_frequency, note_len));
                } else {
                    last.duration_ms += note_len;
                }
            }
            SymbolKind::Rest => self.tones.push(Tone::rest(note_len)),
        }
        Ok(())
    }
}

/// Everything before the first `#`.
fn strip_comment(line: &str) -> &str {
    line.find('#').map_or(line, |pos| &line[..pos])
}

/// Compile a whole document into its tone list.
pub fn compile_source(source: &str) -> Result<Vec<Tone>, CompileError> {
    let mut compiler = NoteCompiler::new();
    compiler.compile_source(source)?;
    Ok(compiler.into_tones())
}
