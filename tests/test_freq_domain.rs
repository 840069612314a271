mod common;

use pinknoise::analysis::xform_freq::{irfft, rfft, rfft_freqs};
use pinknoise::noise::{self, shape_pink};
use pinknoise::render::normalize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;

fn two_tones(n: usize, sample_rate: u32, f1: f64, f2: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (2.0 * PI * f1 * t).sin() + (2.0 * PI * f2 * t).sin()
        })
        .collect()
}

fn bin_of(freqs: &[f64], hz: f64) -> usize {
    freqs.iter().position(|&f| (f - hz).abs() < 1e-9).expect("tone must sit on a bin")
}

#[test]
fn test_two_tone_ratio_grows_by_frequency_ratio() {
    let (n, sr) = (2000usize, 1000u32);
    for (f1, f2) in [(10.0, 40.0), (25.0, 300.0), (5.0, 7.0)] {
        let signal = two_tones(n, sr, f1, f2);
        let freqs = rfft_freqs(n, sr);
        let (k1, k2) = (bin_of(&freqs, f1), bin_of(&freqs, f2));

        let before = rfft(&signal);
        let after = rfft(&shape_pink(&signal, sr).unwrap());

        let ratio_before = before[k1].norm() / before[k2].norm();
        let ratio_after = after[k1].norm() / after[k2].norm();
        let growth = ratio_after / ratio_before;
        assert!(
            (growth - f2 / f1).abs() / (f2 / f1) < 1e-6,
            "{} Hz vs {} Hz: ratio grew by {}, expected {}",
            f1,
            f2,
            growth,
            f2 / f1
        );
    }
}

#[test]
fn test_white_noise_roundtrip_without_shaping() {
    let mut rng = StdRng::seed_from_u64(99);
    for n in [4410usize, 4411] {
        let white = noise::white(n, &mut rng).unwrap();
        let back = irfft(&rfft(&white), n);
        assert_eq!(back.len(), n);
        let worst = white.iter().zip(&back).map(|(a, b)| (a - b).abs()).fold(0.0, f64::max);
        assert!(worst < 1e-9, "roundtrip drifted by {} at n = {}", worst, n);
    }
}

#[test]
fn test_shaped_noise_normalizes_to_unit_peak() {
    let mut rng = StdRng::seed_from_u64(7);
    for (n, sr) in [(8usize, 8u32), (4411, 44100), (44100, 44100)] {
        let white = noise::white(n, &mut rng).unwrap();
        let mut pink = shape_pink(&white, sr).unwrap();
        assert_eq!(pink.len(), n);
        normalize(&mut pink).unwrap();
        let peak = pink.iter().fold(0.0f64, |m, x| m.max(x.abs()));
        assert!((peak - 1.0).abs() < 1e-9, "peak after normalization was {}", peak);
    }
}

#[test]
fn test_high_bins_lose_energy_against_low_bins() {
    let (n, sr) = (44100usize, 44100u32);
    let white = noise::white(n, &mut StdRng::seed_from_u64(21)).unwrap();
    let spectrum = rfft(&shape_pink(&white, sr).unwrap());
    let freqs = rfft_freqs(n, sr);

    let band = |lo: f64, hi: f64| -> f64 {
        let bins: Vec<f64> = freqs
            .iter()
            .zip(&spectrum)
            .filter(|(f, _)| **f >= lo && **f < hi)
            .map(|(_, c)| c.norm_sqr())
            .collect();
        bins.iter().sum::<f64>() / bins.len() as f64
    };
    assert!(band(100.0, 200.0) > 10.0 * band(5000.0, 10000.0));
}
