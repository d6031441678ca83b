//! Directive lines — `!key=value` settings that change tempo, tuning, time
//! division or notation mode for every following line.

use super::compile::{CompilerState, Mode};
use super::error::ErrorKind;
use super::expr::evaluate;
use super::note::{a4_to_a1, round3};

/// A parsed directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Beats per minute.
    Bpm(u32),
    /// Reference pitch of `a` in octave 4, in Hz.
    A4(u32),
    /// Units per beat for following note lines.
    Time(f64),
    Mode(Mode),
}

impl Directive {
    /// Parse a directive line, including its leading `!`.
    ///
    /// Spaces anywhere in the line are ignored.
    pub fn parse(line: &str) -> Result<Self, ErrorKind> {
        let compact: String = line.chars().filter(|&c| c != ' ').collect();
        let body = compact.strip_prefix('!').unwrap_or(compact.as_str());

        let mut parts = body.split('=');
        let (key, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => (key, value),
            _ => return Err(ErrorKind::MalformedDirective(body.to_string())),
        };

        let invalid = || ErrorKind::InvalidDirectiveValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "bpm" => value
                .parse::<u32>()
                .ok()
                .filter(|&bpm| bpm > 0)
                .map(Directive::Bpm)
                .ok_or_else(invalid),
            "a4" => value
                .parse::<u32>()
                .ok()
                .filter(|&a4| a4 > 0)
                .map(Directive::A4)
                .ok_or_else(invalid),
            "time" => evaluate(value)
                .ok()
                .filter(|t| t.is_finite() && *t > 0.0)
                .map(Directive::Time)
                .ok_or_else(invalid),
            "mode" => value.parse::<Mode>().map(Directive::Mode).map_err(|_| invalid()),
            _ => Err(ErrorKind::UnknownDirective(key.to_string())),
        }
    }

    /// Apply this directive to the compiler state.
    pub fn apply(&self, state: &mut CompilerState) {
        match *self {
            Directive::Bpm(bpm) => state.ms_per_beat = bpm_to_ms_per_beat(bpm),
            Directive::A4(a4) => state.tuning_a1_hz = a4_to_a1(a4 as f64),
            Directive::Time(divisor) => state.time_divisor = divisor,
            Directive::Mode(mode) => state.mode = mode,
        }
    }
}

/// Milliseconds per beat at `bpm`, rounded to 3 decimal places.
pub fn bpm_to_ms_per_beat(bpm: u32) -> f64 {
    round3(60_000.0 / bpm as f64)
}
