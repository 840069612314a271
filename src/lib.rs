//! Offline pink noise renderer.
//!
//! Gaussian white noise is reshaped in the frequency domain with a `1/f`
//! amplitude roll-off, peak normalized, truncated to 16-bit PCM and written
//! to a mono WAV file.
pub mod analysis;
pub mod error;
pub mod files;
pub mod noise;
pub mod render;
pub mod synth;
pub mod synth_config;
pub mod time;

pub use error::{NoiseError, Result};
pub use render::{render, synthesize};
pub use synth_config::NoiseConfig;
