use crate::error::{NoiseError, Result};
use crate::synth::{MAX_SAMPLES, MIN_SAMPLES};

// Allowed drift between duration * rate and the nearest whole sample
const WHOLE_SAMPLE_TOLERANCE: f64 = 1e-6;

/// Given a duration in seconds and a constant sample rate,
/// determines the number of samples required to hold the signal.
///
/// The product must land on a whole number of samples, hold at least
/// `MIN_SAMPLES` for the one-sided spectrum to have usable bins, and fit
/// the 32-bit size fields of a WAV data chunk.
pub fn samples_of_duration(duration_seconds: f64, sample_rate: u32) -> Result<usize> {
    let invalid = |reason: &str| NoiseError::InvalidDuration {
        reason: format!("{}s at {} Hz: {}", duration_seconds, sample_rate, reason),
    };

    if !duration_seconds.is_finite() {
        return Err(invalid("duration must be finite"));
    }
    if duration_seconds <= 0.0 {
        return Err(invalid("duration must be positive"));
    }
    if sample_rate == 0 {
        return Err(invalid("sample rate must be positive"));
    }

    let exact = duration_seconds * sample_rate as f64;
    let n = exact.round();
    if (exact - n).abs() > WHOLE_SAMPLE_TOLERANCE {
        return Err(invalid("duration does not span a whole number of samples"));
    }
    if n > MAX_SAMPLES as f64 {
        return Err(invalid("sample count exceeds what a 16-bit WAV data chunk can hold"));
    }

    let n = n as usize;
    if n < MIN_SAMPLES {
        return Err(invalid("at least two samples are required"));
    }
    Ok(n)
}

pub fn seconds_of_samples(n: usize, sample_rate: u32) -> f64 {
    n as f64 / sample_rate as f64
}
