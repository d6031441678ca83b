//! Square-wave synthesis — tone list to unsigned 8-bit PCM.

use std::iter;

use tracing::debug;

use crate::dsl::Tone;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Byte emitted for silent tones. Sits between the two rails.
pub const SILENCE_LEVEL: u8 = 0x60;
/// First half of every full cycle.
pub const LOW_RAIL: u8 = 0x00;
/// Second half of every full cycle.
pub const HIGH_RAIL: u8 = 0xC0;

/// Number of samples covering `duration_ms` at `sample_rate`, rounded down.
pub fn samples_for(duration_ms: f64, sample_rate: u32) -> usize {
    (sample_rate as f64 * duration_ms / 1000.0) as usize
}

/// Renders tones as a monophonic square wave, one byte per sample.
#[derive(Debug, Clone, Copy)]
pub struct SquareRenderer {
    sample_rate: u32,
}

impl Default for SquareRenderer {
    fn default() -> Self {
        Self::new(SAMPLE_RATE)
    }
}

impl SquareRenderer {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Render every tone in order into one contiguous buffer.
    pub fn render(&self, tones: &[Tone]) -> Vec<u8> {
        let total: usize = tones
            .iter()
            .map(|t| samples_for(t.duration_ms, self.sample_rate))
            .sum();
        let mut out = Vec::with_capacity(total);
        for tone in tones {
            self.render_tone(tone, &mut out);
        }
        debug!(tones = tones.len(), samples = out.len(), "rendered square wave");
        out
    }

    /// Append the samples for a single tone to `out`.
    ///
    /// Whole cycles are written as `floor(half_cycle)` low bytes followed by
    /// as many high bytes. Whatever the whole cycles leave over is filled by
    /// the parity of `floor(i * 2 * half_cycle)`, with `i` counted from the
    /// start of the leftover: even is high, odd is low.
    pub fn render_tone(&self, tone: &Tone, out: &mut Vec<u8>) {
        let mut remaining = samples_for(tone.duration_ms, self.sample_rate);

        if tone.is_silent() {
            out.extend(iter::repeat(SILENCE_LEVEL).take(remaining));
            return;
        }

        let half_cycle = self.sample_rate as f64 / tone.frequency;
        let whole = half_cycle as usize;

        if whole != 0 {
            while remaining as f64 >= 2.0 * half_cycle {
                out.extend(iter::repeat(LOW_RAIL).take(whole));
                out.extend(iter::repeat(HIGH_RAIL).take(whole));
                remaining -= 2 * whole;
            }
        }

        out.extend((0..remaining).map(|i| {
            let phase = (i as f64 * 2.0 * half_cycle) as u64;
            if phase % 2 == 0 {
                HIGH_RAIL
            } else {
                LOW_RAIL
            }
        }));
    }
}

/// Render at the standard 44.1 kHz output rate.
pub fn render(tones: &[Tone]) -> Vec<u8> {
    SquareRenderer::default().render(tones)
}
