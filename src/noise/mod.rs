//! Noise sources and the spectral shaper that turns white noise pink.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use rustfft::num_complex::Complex;

use crate::analysis::xform_freq;
use crate::error::{NoiseError, Result};
use crate::synth::{SampleBuffer, FREQ_FLOOR_HZ, MIN_SAMPLES};

/// `length` independent draws from the standard normal distribution.
pub fn white<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<SampleBuffer> {
    if length == 0 {
        return Err(NoiseError::InvalidDuration {
            reason: "white noise needs a positive sample count, got 0".to_string(),
        });
    }
    Ok((0..length).map(|_| StandardNormal.sample(rng)).collect())
}

/// Divides every bin by its frequency, floored at `FREQ_FLOOR_HZ`.
///
/// This is a `1/f` roll-off on amplitude, which is `1/f^2` on power.
pub fn pink(spectrum: &mut [Complex<f64>], freqs: &[f64]) {
    assert_eq!(spectrum.len(), freqs.len(), "spectrum and frequency axis must align");
    for (bin, &f) in spectrum.iter_mut().zip(freqs) {
        *bin /= f.max(FREQ_FLOOR_HZ);
    }
}

/// Imposes the `1/f` roll-off on a real signal and returns a signal of the same length.
pub fn shape_pink(signal: &[f64], sample_rate: u32) -> Result<SampleBuffer> {
    let n = signal.len();
    if n < MIN_SAMPLES {
        return Err(NoiseError::InvalidDuration {
            reason: format!("spectral shaping needs at least {} samples, got {}", MIN_SAMPLES, n),
        });
    }

    let mut spectrum = xform_freq::rfft(signal);
    let freqs = xform_freq::rfft_freqs(n, sample_rate);
    tracing::debug!(bins = spectrum.len(), "shaping spectrum");

    pink(&mut spectrum, &freqs);
    Ok(xform_freq::irfft(&spectrum, n))
}
