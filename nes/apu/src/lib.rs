//! `apu` provides the fixed tables and sample generators used to build
//! audio data for the NES APU (and wavetable style sound code in general).

mod waveform;

pub use waveform::{generate, max_value, two_complement, Sampler, Waveform, WaveformError};


/// `LENGTH_TABLE` is the 32 entry length counter lookup table indexed by
/// the top 5 bits written to a channel's length register.
pub const LENGTH_TABLE: [u8; 32] = [
    10, 254, 20, 2, 40, 4, 80, 6, 160, 8, 60, 10, 14, 12, 26, 14, 12, 16, 24, 18, 48, 20, 96, 22,
    192, 24, 72, 26, 16, 28, 32, 30,
];
