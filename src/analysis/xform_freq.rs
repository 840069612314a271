//! One-sided real transforms.
//!
//! The forward transform is unnormalized and the inverse scales by `1/n`,
//! so `irfft(&rfft(x), x.len())` reproduces `x`. A length `n` signal has
//! `n / 2 + 1` bins; bin `k` sits at `k * sample_rate / n` Hz.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::synth::SampleBuffer;

pub type Spectrum = Vec<Complex<f64>>;

/// Number of one-sided bins for a real signal of length `n`.
pub fn n_bins(n: usize) -> usize {
    n / 2 + 1
}

/// Forward transform of a real signal, keeping the non-negative frequencies.
pub fn rfft(signal: &[f64]) -> Spectrum {
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    fft.process(&mut buffer);

    buffer.truncate(n_bins(n));
    buffer
}

/// Inverse of `rfft` for a real signal of length `n`.
///
/// The negative frequencies are rebuilt by conjugate symmetry. Any imaginary
/// part on the DC bin, or on the Nyquist bin when `n` is even, does not
/// survive into the real output.
pub fn irfft(spectrum: &[Complex<f64>], n: usize) -> SampleBuffer {
    if n == 0 {
        return Vec::new();
    }
    assert_eq!(
        spectrum.len(),
        n_bins(n),
        "one-sided spectrum of {} bins cannot describe {} samples",
        spectrum.len(),
        n
    );

    let mut full = vec![Complex::new(0.0, 0.0); n];
    full[..spectrum.len()].copy_from_slice(spectrum);
    for k in 1..(n + 1) / 2 {
        full[n - k] = spectrum[k].conj();
    }

    let mut planner = FftPlanner::<f64>::new();
    let ifft = planner.plan_fft_inverse(n);
    ifft.process(&mut full);

    let scale = 1.0 / n as f64;
    full.iter().map(|c| c.re * scale).collect()
}

/// Frequency in Hz of every one-sided bin for a length `n` signal.
pub fn rfft_freqs(n: usize, sample_rate: u32) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = sample_rate as f64 / n as f64;
    (0..n_bins(n)).map(|k| k as f64 * step).collect()
}
