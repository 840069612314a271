#![allow(dead_code)]
use pinknoise::NoiseConfig;
use std::path::{Path, PathBuf};

pub fn test_audio_name(dir: &Path, config: &NoiseConfig, label: &str) -> PathBuf {
    let name = format!("{}_sample-rate_{}_channels_{}", label, config.sample_rate, 1);
    dir.join(format!("{}.wav", name))
}

// Small seeded config so renders stay fast
pub fn test_config(dir: &Path, label: &str) -> NoiseConfig {
    let mut config = NoiseConfig::new(0.5, 8000, 12000, "").with_seed(1234);
    config.out_path = test_audio_name(dir, &config, label);
    config
}

/// Size field of the `data` chunk as written in the file.
pub fn declared_data_len(bytes: &[u8]) -> u32 {
    let at = bytes
        .windows(4)
        .position(|w| w == b"data")
        .expect("container has no data chunk");
    u32::from_le_bytes([bytes[at + 4], bytes[at + 5], bytes[at + 6], bytes[at + 7]])
}
