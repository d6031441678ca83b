//! Note frequencies — equal-temperament pitch from a note class, octave digit,
//! and tuning reference.

/// The twelve note classes in ascending order. Uppercase marks the sharp of
/// the preceding natural.
pub const NOTE_CLASSES: [char; 12] = ['c', 'C', 'd', 'D', 'e', 'f', 'F', 'g', 'G', 'a', 'A', 'b'];

/// Whether `ch` begins a note symbol.
pub fn is_note_class(ch: char) -> bool {
    NOTE_CLASSES.contains(&ch)
}

/// Semitone position of a note class within its octave (0..=11).
pub fn semitone(letter: char) -> Option<usize> {
    NOTE_CLASSES.iter().position(|&c| c == letter)
}

/// Derive the octave-1 reference from the `a4` directive pitch.
///
/// The divisor is 8, so this sits three octaves below `a4`.
pub fn a4_to_a1(a4: f64) -> f64 {
    a4 / 8.0
}

/// Frequency in Hz of `letter` in `octave`, relative to the reference `a1`.
///
/// `a1` is the frequency of the first note class of octave 1, so `c1`
/// resolves to exactly `a1`. Rounded to 3 decimal places. Returns `None` for
/// a letter outside the note alphabet.
pub fn note_to_freq(letter: char, octave: u32, a1: f64) -> Option<f64> {
    let position = semitone(letter)?;
    let note_index = (octave as f64 - 1.0) + position as f64 / 12.0;
    Some(round3(a1 * 2.0f64.powf(note_index)))
}

/// Round to 3 decimal places, ties to even.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round_ties_even() / 1000.0
}
