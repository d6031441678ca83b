//! `beep(1)` command-line output — plays the tone list on the PC speaker
//! instead of rendering PCM.

use crate::dsl::Tone;

/// Format the tone list as a single `beep` invocation.
///
/// Each tone becomes `-f <hz> -l <ms>`; tones are separated by `-n`, which
/// starts a new note in `beep`. Rests are written as `-f 0`.
pub fn beep_script(tones: &[Tone]) -> String {
    let notes: Vec<String> = tones
        .iter()
        .map(|t| {
            if t.is_silent() {
                format!("-f 0 -l {:?}", t.duration_ms)
            } else {
                format!("-f {:?} -l {:?}", t.frequency, t.duration_ms)
            }
        })
        .collect();

    if notes.is_empty() {
        "beep".to_string()
    } else {
        format!("beep {}", notes.join(" -n "))
    }
}
