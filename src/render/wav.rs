//! WAV container output for rendered PCM.
//!
//! The container is always mono, 8-bit unsigned integer PCM at
//! [`SAMPLE_RATE`](super::square::SAMPLE_RATE).

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use super::square::SAMPLE_RATE;

/// Format of every file this crate writes.
pub fn wav_spec() -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 8,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Write unsigned PCM bytes as a complete WAV file.
pub fn write_wav<W: Write + Seek>(writer: W, pcm: &[u8]) -> hound::Result<()> {
    let mut wav = hound::WavWriter::new(writer, wav_spec())?;
    for &byte in pcm {
        // hound stores 8-bit samples as signed + 128.
        wav.write_sample((i16::from(byte) - 128) as i8)?;
    }
    wav.finalize()
}

/// Write unsigned PCM bytes to a WAV file at `path`, creating or truncating it.
pub fn write_wav_file(path: impl AsRef<Path>, pcm: &[u8]) -> hound::Result<()> {
    let file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_wav(file, pcm)
}

/// Encode unsigned PCM bytes as an in-memory WAV file.
pub fn to_wav_bytes(pcm: &[u8]) -> hound::Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::with_capacity(pcm.len() + 44));
    write_wav(&mut buf, pcm)?;
    Ok(buf.into_inner())
}
