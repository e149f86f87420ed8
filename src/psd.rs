//! Spectral estimation helpers for validating generated noise.
//!
//! These are read-only consumers of sample buffers; they never touch
//! generator state. Frequencies are in cycles per sample (unit rate).

use itertools::izip;
use rayon::prelude::*;
use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::NoiseError;
use crate::gen;

/// One-sided periodogram, length floor(n/2)+1.
///
/// Interior bins are doubled so the one-sided values carry the power of
/// their negative-frequency mirrors; DC and the Nyquist bin (even n) have
/// no mirror and are not doubled.
pub fn periodogram(samples: &[f64]) -> Vec<f64> {
    let n = samples.len();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);

    let mut buf: Vec<Complex<f64>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    fft.process(&mut buf);

    let m = n / 2 + 1;
    (0..m)
        .map(|k| {
            let p = buf[k].norm_sqr() / n as f64;
            if k == 0 || (n % 2 == 0 && k == m - 1) {
                p
            } else {
                2.0 * p
            }
        })
        .collect()
}

/// Mean periodogram over `runs` independent realizations.
///
/// Each realization gets its own seeded source, so the runs are safe to
/// execute in parallel and the whole ensemble is reproducible from the base
/// seed.
pub fn averaged_periodogram(
    exponent: f64,
    len: usize,
    fmin: f64,
    runs: usize,
    seed: u64,
) -> Result<Vec<f64>, NoiseError> {
    let spectra: Vec<Vec<f64>> = (0..runs)
        .into_par_iter()
        .map(|i| {
            gen::generate_seeded(exponent, len, fmin, seed.wrapping_add(i as u64))
                .map(|y| periodogram(&y))
        })
        .collect::<Result<_, _>>()?;

    let m = len / 2 + 1;
    let mut mean = vec![0.0; m];
    for spectrum in &spectra {
        for (acc, &p) in mean.iter_mut().zip(spectrum) {
            *acc += p;
        }
    }
    for v in &mut mean {
        *v /= runs as f64;
    }
    Ok(mean)
}

/// Least-squares slope of log power against log frequency.
///
/// Bins with nonpositive frequency or power are skipped, which drops DC and
/// anything clamped to zero.
pub fn log_log_slope(freqs: &[f64], power: &[f64]) -> f64 {
    let points: Vec<(f64, f64)> = izip!(freqs, power)
        .filter(|(&f, &p)| f > 0.0 && p > 0.0)
        .map(|(&f, &p)| (f.ln(), p.ln()))
        .collect();

    let n = points.len() as f64;
    let sx: f64 = points.iter().map(|(x, _)| x).sum();
    let sy: f64 = points.iter().map(|(_, y)| y).sum();
    let sxx: f64 = points.iter().map(|(x, _)| x * x).sum();
    let sxy: f64 = points.iter().map(|(x, y)| x * y).sum();

    (n * sxy - sx * sy) / (n * sxx - sx * sx)
}

/// Fraction of total (non-DC) power carried by bins strictly below `fsplit`.
pub fn low_band_fraction(freqs: &[f64], power: &[f64], fsplit: f64) -> f64 {
    let mut low = 0.0;
    let mut total = 0.0;
    for (&f, &p) in izip!(freqs, power) {
        if f <= 0.0 {
            continue;
        }
        total += p;
        if f < fsplit {
            low += p;
        }
    }
    low / total
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::filter::rfft_freqs;
    use std::f64::consts::PI;

    #[test]
    fn sine_concentrates_in_one_bin() {
        let n = 256;
        let k0 = 12;
        let y: Vec<f64> = (0..n)
            .map(|t| (2.0 * PI * k0 as f64 * t as f64 / n as f64).cos())
            .collect();
        let p = periodogram(&y);
        let peak = p
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap()
            .0;
        assert_eq!(peak, k0);
        // |Y_k0| = n/2 for a unit cosine, so the doubled bin reads n/2
        assert!((p[k0] - n as f64 / 2.0).abs() < 1e-6);
    }

    #[test]
    fn exact_power_law_fits_exactly() {
        let freqs = rfft_freqs(1024);
        let power: Vec<f64> = freqs
            .iter()
            .map(|&f| if f > 0.0 { f.powf(-2.0) } else { 0.0 })
            .collect();
        let slope = log_log_slope(&freqs, &power);
        assert!((slope + 2.0).abs() < 1e-9);
    }

    #[test]
    fn low_band_fraction_splits_power() {
        let freqs = vec![0.0, 0.1, 0.2, 0.3, 0.4];
        let power = vec![100.0, 1.0, 1.0, 1.0, 1.0];
        let frac = low_band_fraction(&freqs, &power, 0.25);
        assert!((frac - 0.5).abs() < 1e-12);
    }
}
