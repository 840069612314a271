/// Largest absolute value in the signal. NaN samples poison the result.
pub fn peak(signal: &[f64]) -> f64 {
    signal.iter().fold(0.0f64, |max, &x| {
        if max.is_nan() || x.is_nan() {
            f64::NAN
        } else {
            max.max(x.abs())
        }
    })
}

/// Identify the RMS value of a signal slice.
pub fn rms(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    let sum: f64 = signal.iter().map(|&x| x * x).sum();
    (sum / signal.len() as f64).sqrt()
}

/// Same as `rms` for quantized samples, in sample units.
pub fn rms_pcm(samples: &[i16]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum / samples.len() as f64).sqrt()
}
