//! Tokenizer for note lines.
//!
//! Converts one line of note text into a stream of [`Symbol`]s. Directive
//! lines and comments never reach the lexer; the compiler strips them first.

use super::error::{CompileError, ErrorKind};
use super::note::is_note_class;
use super::token::{Symbol, SymbolKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    col: usize,
}

impl Lexer {
    pub fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
            col: 1,
        }
    }

    /// Tokenize the whole line, left to right.
    ///
    /// Errors carry the column of the offending character and line 0.
    pub fn tokenize(&mut self) -> Result<Vec<Symbol>, CompileError> {
        let mut symbols = Vec::new();

        while !self.is_at_end() {
            let ch = self.peek();
            let symbol = match ch {
                ' ' => {
                    self.advance();
                    continue;
                }
                '-' => self.single_char(SymbolKind::Sustain),
                '_' => self.single_char(SymbolKind::Rest),
                c if is_note_class(c) => self.lex_note()?,
                _ => return Err(CompileError::new(ErrorKind::InvalidSymbol(ch), 0, self.col)),
            };
            symbols.push(symbol);
        }

        Ok(symbols)
    }

    fn peek(&self) -> char {
        self.chars[self.pos]
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        self.col += 1;
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn single_char(&mut self, kind: SymbolKind) -> Symbol {
        let col = self.col;
        self.advance();
        Symbol { kind, col }
    }

    /// Lex a two-character note: class letter plus octave digit.
    fn lex_note(&mut self) -> Result<Symbol, CompileError> {
        let col = self.col;
        let letter = self.advance();

        if self.is_at_end() {
            return Err(CompileError::new(ErrorKind::MissingOctave(letter), 0, col));
        }

        let digit_col = self.col;
        let digit = self.advance();
        let octave = digit
            .to_digit(10)
            .ok_or_else(|| CompileError::new(ErrorKind::InvalidSymbol(digit), 0, digit_col))?;

        Ok(Symbol {
            kind: SymbolKind::Note { letter, octave },
            col,
        })
    }
}

/// Tokenize a single note line.
pub fn tokenize(line: &str) -> Result<Vec<Symbol>, CompileError> {
    Lexer::new(line).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<SymbolKind> {
        tokenize(line)
            .unwrap()
            .into_iter()
            .map(|s| s.kind)
            .collect()
    }

    #[test]
    fn empty_line() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("    ").unwrap().is_empty());
    }

    #[test]
    fn spaced_notes() {
        assert_eq!(
            kinds("c4 - _ A3"),
            vec![
                SymbolKind::Note {
                    letter: 'c',
                    octave: 4
                },
                SymbolKind::Sustain,
                SymbolKind::Rest,
                SymbolKind::Note {
                    letter: 'A',
                    octave: 3
                },
            ]
        );
    }

    #[test]
    fn packed_notes() {
        assert_eq!(
            kinds("c4d4--_"),
            vec![
                SymbolKind::Note {
                    letter: 'c',
                    octave: 4
                },
                SymbolKind::Note {
                    letter: 'd',
                    octave: 4
                },
                SymbolKind::Sustain,
                SymbolKind::Sustain,
                SymbolKind::Rest,
            ]
        );
    }

    #[test]
    fn columns_are_one_based() {
        let symbols = tokenize("c4 -  _").unwrap();
        let cols: Vec<usize> = symbols.iter().map(|s| s.col).collect();
        assert_eq!(cols, vec![1, 4, 7]);
    }

    #[test]
    fn unknown_symbol_reports_column() {
        let err = tokenize("c4 x").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSymbol('x'));
        assert_eq!(err.col, 4);
    }

    #[test]
    fn uppercase_e_is_not_a_note() {
        // E# and B# do not exist in the alphabet.
        let err = tokenize("E4").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSymbol('E'));
    }

    #[test]
    fn tab_is_rejected() {
        let err = tokenize("c4\td4").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSymbol('\t'));
    }

    #[test]
    fn non_digit_octave() {
        let err = tokenize("cC1").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidSymbol('C'));
        assert_eq!(err.col, 2);
    }

    #[test]
    fn note_at_end_of_line() {
        let err = tokenize("c4 g").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingOctave('g'));
        assert_eq!(err.col, 4);
    }
}
