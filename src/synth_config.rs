use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NoiseError, Result};
use crate::synth;
use crate::time;

/// Immutable parameters of one rendition.
/// Built once before synthesis and only read from then on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub duration_seconds: f64,
    pub sample_rate: u32,
    pub amplitude: u32,
    pub out_path: PathBuf,
    /// Fixed seed for the white noise source. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Create missing parent directories of `out_path` before writing.
    pub create_dirs: bool,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        NoiseConfig {
            duration_seconds: synth::DURATION_SECONDS,
            sample_rate: synth::SR,
            amplitude: synth::AMPLITUDE,
            out_path: PathBuf::from(synth::OUT_PATH),
            seed: None,
            create_dirs: false,
        }
    }
}

impl NoiseConfig {
    pub fn new(duration_seconds: f64, sample_rate: u32, amplitude: u32, out_path: impl Into<PathBuf>) -> NoiseConfig {
        NoiseConfig {
            duration_seconds,
            sample_rate,
            amplitude,
            out_path: out_path.into(),
            ..NoiseConfig::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> NoiseConfig {
        self.seed = Some(seed);
        self
    }

    /// Reads a JSON config. Missing fields take the reference defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<NoiseConfig> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| NoiseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| NoiseError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks every precondition of the pipeline and returns the sample count `N`.
    pub fn validate(&self) -> Result<usize> {
        if self.amplitude == 0 || self.amplitude > synth::MAX_AMPLITUDE {
            return Err(NoiseError::PreconditionViolation {
                field: "amplitude",
                reason: format!("{} is outside [1, {}]", self.amplitude, synth::MAX_AMPLITUDE),
            });
        }
        time::samples_of_duration(self.duration_seconds, self.sample_rate)
    }
}
