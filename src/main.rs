use clap::Parser;
use std::path::PathBuf;
use std::process;

use pinknoise::analysis::sampler;
use pinknoise::{render, time, NoiseConfig};

/// Render a mono 16-bit pink noise WAV file
#[derive(Parser, Debug)]
#[command(name = "pinknoise", version, about)]
struct Args {
    /// JSON file with any of the fields below; flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Length of the rendition in seconds
    #[arg(short, long)]
    duration: Option<f64>,

    /// Frames per second
    #[arg(short = 'r', long)]
    sample_rate: Option<u32>,

    /// Peak sample magnitude, 1 to 32767
    #[arg(short, long)]
    amplitude: Option<u32>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write the WAV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Create missing parent directories of the output path
    #[arg(long)]
    create_dirs: bool,
}

impl Args {
    fn into_config(self) -> pinknoise::Result<NoiseConfig> {
        let mut config = match &self.config {
            Some(path) => NoiseConfig::from_json_file(path)?,
            None => NoiseConfig::default(),
        };
        if let Some(duration) = self.duration {
            config.duration_seconds = duration;
        }
        if let Some(sample_rate) = self.sample_rate {
            config.sample_rate = sample_rate;
        }
        if let Some(amplitude) = self.amplitude {
            config.amplitude = amplitude;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(output) = self.output {
            config.out_path = output;
        }
        config.create_dirs |= self.create_dirs;
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Problem loading config: {}", err);
            process::exit(1);
        }
    };

    match render(&config) {
        Ok(path) => {
            match sampler::inspect(&path) {
                Ok(summary) => tracing::info!(
                    "{} ch, {} Hz, {} bit, {:.2}s",
                    summary.channels,
                    summary.sample_rate,
                    summary.bits_per_sample,
                    time::seconds_of_samples(summary.frames as usize, summary.sample_rate)
                ),
                Err(err) => tracing::warn!("could not read back {}: {}", path.display(), err),
            }
            println!("Generated: {}", path.display());
        }
        Err(err) => {
            eprintln!("Problem while rendering: {}", err);
            process::exit(1);
        }
    }
}
