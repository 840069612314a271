pub mod engrave;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use crate::analysis::volume;
use crate::error::{NoiseError, Result};
use crate::files;
use crate::noise;
use crate::synth::{PcmBuffer, SampleBuffer, MAX_AMPLITUDE};
use crate::synth_config::NoiseConfig;

/// Scales the buffer so its peak magnitude is exactly 1.0 and returns the old peak.
///
/// An all-zero or non-finite buffer has no meaningful peak and is rejected.
pub fn normalize(buffer: &mut [f64]) -> Result<f64> {
    let max_amplitude = volume::peak(buffer);
    if max_amplitude == 0.0 || !max_amplitude.is_finite() {
        return Err(NoiseError::DegenerateSignal { stage: "normalize" });
    }
    buffer.iter_mut().for_each(|sample| *sample /= max_amplitude);
    Ok(max_amplitude)
}

/// Multiplies a normalized buffer by `amplitude` and truncates toward zero.
pub fn quantize(buffer: &[f64], amplitude: u32) -> Result<PcmBuffer> {
    if amplitude == 0 || amplitude > MAX_AMPLITUDE {
        return Err(NoiseError::PreconditionViolation {
            field: "amplitude",
            reason: format!("{} is outside [1, {}]", amplitude, MAX_AMPLITUDE),
        });
    }
    let scale = amplitude as f64;
    Ok(buffer.iter().map(|&x| (x * scale) as i16).collect())
}

/// Runs stages A through C and returns the quantized payload.
pub fn synthesize<R: Rng + ?Sized>(config: &NoiseConfig, rng: &mut R) -> Result<PcmBuffer> {
    let n_samples = config.validate()?;

    let white: SampleBuffer = noise::white(n_samples, rng)?;
    tracing::debug!(n_samples, rms = volume::rms(&white), "drew white noise");

    let mut pink = noise::shape_pink(&white, config.sample_rate)?;
    drop(white);

    let peak = normalize(&mut pink)?;
    tracing::debug!(peak, "normalized shaped signal");

    let pcm = quantize(&pink, config.amplitude)?;
    tracing::debug!(rms = volume::rms_pcm(&pcm), "quantized to 16-bit");
    Ok(pcm)
}

/// Random source for a config: seeded when asked, fresh entropy otherwise.
pub fn rng_for(config: &NoiseConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Synthesizes pink noise and writes it to `config.out_path`, returning the path written.
pub fn render(config: &NoiseConfig) -> Result<PathBuf> {
    let mut rng = rng_for(config);
    let pcm = synthesize(config, &mut rng)?;

    if config.create_dirs {
        files::with_parent_dir(&config.out_path)?;
    }
    engrave::samples(config.sample_rate, &pcm, &config.out_path)?;

    tracing::info!(
        path = %config.out_path.display(),
        samples = pcm.len(),
        sample_rate = config.sample_rate,
        "wrote pink noise"
    );
    Ok(config.out_path.clone())
}
