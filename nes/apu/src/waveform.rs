use color_eyre::eyre::Result;
use log::debug;
use rand::Rng;
use std::f64::consts::TAU;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// `Waveform` defines the single cycle shapes which can be sampled.
/// Iteration order is also the order they are emitted in.
#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq)]
pub enum Waveform {
    /// Full amplitude sine.
    Sine,

    /// Two level square at +/- max.
    Square,

    /// Ramp up from -max to max and back down.
    Triangle,

    /// Ramp up from -max to max.
    Saw,

    /// Uniform random values in [-max, max].
    Noise,

    /// Placeholder with no generation rule of its own. Each sample holds
    /// the previous value (so it repeats the final noise sample).
    Custom,
}

/// `WaveformError` defines the parameter problems `Sampler` rejects.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WaveformError {
    /// Depth has to leave a sign bit and fit the 16 bit output.
    #[error("Sample depth {depth} must be between 1 and 16 bits")]
    InvalidDepth {
        /// depth is the requested sample depth.
        depth: u32,
    },

    /// The value can't be represented in the given depth.
    #[error("Sample {val} doesn't fit in {depth} bits")]
    OutOfRange {
        /// val is the sample value.
        val: i64,
        /// depth is the sample depth in bits.
        depth: u32,
    },
}

const MAX_DEPTH: u32 = 16;

/// Returns the largest positive sample for the given depth (one bit is
/// reserved for the sign).
///
/// # Errors
/// Depth must be 1-16.
pub fn max_value(depth: u32) -> std::result::Result<i64, WaveformError> {
    if depth == 0 || depth > MAX_DEPTH {
        return Err(WaveformError::InvalidDepth { depth });
    }
    Ok((1 << (depth - 1)) - 1)
}

/// Convert a signed sample into its unsigned two's complement form in
/// `depth` bits.
///
/// # Errors
/// Depth must be 1-16 and val must fit in it.
pub fn two_complement(val: i64, depth: u32) -> std::result::Result<u16, WaveformError> {
    if depth == 0 || depth > MAX_DEPTH {
        return Err(WaveformError::InvalidDepth { depth });
    }
    let out = if val >= 0 { val } else { (1 << depth) + val };
    u16::try_from(out).map_err(|_| WaveformError::OutOfRange { val, depth })
}

/// `Sampler` computes single cycle samples for a given depth and cycle size.
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    depth: u32,
    size: usize,
    max: i64,
}

impl Sampler {
    /// Create a sampler emitting `size` samples per cycle at `depth` bits.
    ///
    /// # Errors
    /// Depth must be 1-16.
    pub fn new(depth: u32, size: usize) -> std::result::Result<Self, WaveformError> {
        Ok(Self {
            depth,
            size,
            max: max_value(depth)?,
        })
    }

    /// The peak sample value.
    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Compute sample `idx` of the given waveform. `previous` is the last
    /// sample produced and is only used by `Waveform::Custom`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn sample<R: Rng>(&self, wave: Waveform, idx: usize, rng: &mut R, previous: i64) -> i64 {
        let i = idx as f64;
        let n = self.size as f64;
        let m = self.max as f64;

        // All float results truncate toward zero.
        match wave {
            Waveform::Sine => ((i / n * TAU).sin() * m) as i64,
            Waveform::Square => {
                if i < n / 2.0 {
                    self.max
                } else {
                    -self.max
                }
            }
            Waveform::Triangle => {
                let mut val = (i / n * 2.0) * m * 2.0 - m;
                if i > n / 2.0 {
                    val = m * 2.0 - val;
                }
                val as i64
            }
            Waveform::Saw => ((i / n) * m * 2.0 - m) as i64,
            Waveform::Noise => rng.gen_range(-self.max..=self.max),
            Waveform::Custom => previous,
        }
    }

    /// Compute a full cycle of the given waveform.
    pub fn cycle<R: Rng>(&self, wave: Waveform, rng: &mut R, previous: i64) -> Vec<i64> {
        let mut last = previous;
        (0..self.size)
            .map(|idx| {
                last = self.sample(wave, idx, rng, last);
                last
            })
            .collect()
    }

    /// Serialize samples as big endian 16 bit two's complement values.
    /// The output width is always 16 bits regardless of depth.
    ///
    /// # Errors
    /// Any sample outside of the depth range.
    pub fn encode(&self, samples: &[i64]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(samples.len() * 2);
        for val in samples {
            out.extend_from_slice(&two_complement(*val, self.depth)?.to_be_bytes());
        }
        Ok(out)
    }
}

/// Generate a cycle of every `Waveform` (in order) and return them as one
/// contiguous block of big endian 16 bit samples.
///
/// # Errors
/// Depth must be 1-16.
pub fn generate<R: Rng>(depth: u32, size: usize, rng: &mut R) -> Result<Vec<u8>> {
    let sampler = Sampler::new(depth, size)?;
    debug!("Sampling depth {depth} size {size} max {}", sampler.max());

    let mut out = Vec::with_capacity(Waveform::iter().count() * size * 2);
    let mut last = 0;
    for wave in Waveform::iter() {
        let samples = sampler.cycle(wave, rng, last);
        last = samples.last().copied().unwrap_or(last);
        out.extend(sampler.encode(&samples)?);
    }
    Ok(out)
}
