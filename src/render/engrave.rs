use std::fs;
use std::io::{Seek, Write};
use std::path::Path;

use crate::error::{NoiseError, Result};
use crate::synth::{BITS_PER_SAMPLE, CHANNELS};

pub fn pcm_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Writes 16-bit mono PCM samples to `path`.
///
/// The file handle is released on every path out of this function. A failure to
/// open leaves whatever was at `path` alone; a failure after opening removes the
/// partial file so nothing on disk looks like a finished rendition.
pub fn samples(sample_rate: u32, samples: &[i16], path: &Path) -> Result<()> {
    let writer = hound::WavWriter::create(path, pcm_spec(sample_rate)).map_err(|e| NoiseError::from_wav(path, e))?;
    let result = write_pcm(writer, samples, path);
    if let Err(err) = &result {
        tracing::debug!("write to {} failed: {}", path.display(), err);
        discard_partial(path);
    }
    result
}

fn write_pcm<W: Write + Seek>(mut writer: hound::WavWriter<W>, samples: &[i16], path: &Path) -> Result<()> {
    for &sample in samples {
        writer.write_sample(sample).map_err(|e| NoiseError::from_wav(path, e))?;
    }
    writer.finalize().map_err(|e| NoiseError::from_wav(path, e))
}

// Only regular files are ours to remove; device nodes and the like stay.
fn discard_partial(path: &Path) {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {
            if let Err(cleanup) = fs::remove_file(path) {
                tracing::warn!("could not remove partial file {}: {}", path.display(), cleanup);
            }
        }
        Ok(_) => tracing::debug!("leaving non-regular file {} in place", path.display()),
        Err(_) => {}
    }
}
