use hound::{SampleFormat, WavReader};
use std::path::Path;

use crate::error::{NoiseError, Result};

/// Header fields of a written container plus its frame count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WavSummary {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub sample_format: SampleFormat,
    pub frames: u32,
}

impl WavSummary {
    /// Bytes occupied by the sample payload.
    pub fn data_len(&self) -> u64 {
        self.frames as u64 * self.channels as u64 * (self.bits_per_sample as u64 / 8)
    }
}

/// Reads the header of a WAV file.
///
/// # Errors
/// Returns an error if the file cannot be opened or is not a valid container.
pub fn inspect(path: &Path) -> Result<WavSummary> {
    let reader = WavReader::open(path).map_err(|e| NoiseError::from_wav(path, e))?;
    let spec = reader.spec();
    Ok(WavSummary {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        sample_format: spec.sample_format,
        frames: reader.duration(),
    })
}

/// Reads every sample of a 16-bit mono file.
pub fn read_pcm(path: &Path) -> Result<Vec<i16>> {
    let mut reader = WavReader::open(path).map_err(|e| NoiseError::from_wav(path, e))?;
    reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, hound::Error>>()
        .map_err(|e| NoiseError::from_wav(path, e))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_file_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let result = inspect(&dir.path().join("absent.wav"));
        assert!(matches!(result, Err(NoiseError::Io { .. })));
    }

    #[test]
    fn test_garbage_is_container_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.wav");
        std::fs::write(&path, b"definitely not a riff header").unwrap();
        assert!(matches!(inspect(&path), Err(NoiseError::Wav { .. })));
    }
}
