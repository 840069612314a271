//! Fixed settings of the noise synthesis engine: reference defaults for
//! duration, sample rate and peak amplitude, the frequency floor used by the
//! spectral shaper and the 16-bit PCM ceiling.

/// Real valued signal buffer used by every stage before quantization.
pub type SampleBuffer = Vec<f64>;

/// Fixed-point payload handed to the container writer.
pub type PcmBuffer = Vec<i16>;

pub const SR: u32 = 44100;

pub const DURATION_SECONDS: f64 = 10.0;

// Headroom below full scale
pub const AMPLITUDE: u32 = 12000;

// Largest magnitude representable by a signed 16-bit sample
pub const MAX_AMPLITUDE: u32 = i16::MAX as u32;

/// Floor applied to every bin frequency before dividing,
/// keeps the DC bin finite.
pub const FREQ_FLOOR_HZ: f64 = 1e-6;

// Smallest signal with a usable one-sided spectrum
pub const MIN_SAMPLES: usize = 2;

// RIFF and data chunk sizes are u32; leave room for the header
pub const MAX_SAMPLES: usize = ((u32::MAX - 64) / 2) as usize;

pub const CHANNELS: u16 = 1;
pub const BITS_PER_SAMPLE: u16 = 16;

pub const OUT_PATH: &str = "pink_noise_sleep_10s.wav";
