//! Symbol types produced by the note-line tokenizer.

/// A symbol produced by the tokenizer, with its 1-based column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub col: usize,
}

/// The kind of symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SymbolKind {
    /// A pitched note, e.g. `a4` or `F3` (uppercase = sharp).
    Note { letter: char, octave: u32 },
    /// `-` — hold the previous pitch for one more unit.
    Sustain,
    /// `_` — one unit of silence.
    Rest,
}
