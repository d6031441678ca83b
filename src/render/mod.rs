//! Output stage — tone list → square-wave PCM, WAV container, or `beep` script.

pub mod script;
pub mod square;
pub mod wav;

pub use script::beep_script;
pub use square::{render, SquareRenderer, SAMPLE_RATE};
pub use wav::{to_wav_bytes, write_wav, write_wav_file};
