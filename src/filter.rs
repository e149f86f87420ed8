//! Frequency-domain amplitude filter for power-law spectra.
//!
//! The filter assigns each one-sided frequency bin the amplitude
//! f_k^(-alpha/2), so that the shaped spectrum carries power f_k^(-alpha).
//! Bins below the cutoff fraction reuse the first unclamped value, which
//! keeps the zero-frequency bin finite for positive exponents.

use crate::error::NoiseError;
use crate::types::FreqFraction;

/// Non-negative frequency fractions f_k = k/n for a length-n real transform,
/// k = 0..floor(n/2).
pub fn rfft_freqs(n: usize) -> Vec<FreqFraction> {
    let nf = n as f64;
    (0..=n / 2).map(|k| k as f64 / nf).collect()
}

/// Amplitude filter over the one-sided grid, length floor(n/2)+1.
///
/// Bins with f_k below `max(fmin, 1/n)` are pinned to the value at the first
/// bin at or above that cutoff. Coefficients that overflow or underflow f64
/// are clamped to the representable range instead of becoming Inf or zero;
/// for extreme exponents the spectral shape is therefore only approximate.
pub fn spectral_filter(exponent: f64, n: usize, fmin: f64) -> Result<Vec<f64>, NoiseError> {
    if n < 1 {
        return Err(NoiseError::InvalidLength(n));
    }
    if !(0.0..0.5).contains(&fmin) {
        return Err(NoiseError::InvalidCutoff(fmin));
    }

    let mut scale = rfft_freqs(n);
    let cutoff = fmin.max(1.0 / n as f64);
    let ix = scale.iter().take_while(|&&f| f < cutoff).count();
    if ix > 0 && ix < scale.len() {
        let pin = scale[ix];
        for s in &mut scale[..ix] {
            *s = pin;
        }
    }
    for s in &mut scale {
        *s = clamp_representable(s.powf(-exponent / 2.0));
    }
    Ok(scale)
}

/// Standard deviation of the raw (unnormalized) inverse transform implied by
/// the filter. The DC bin carries no weight; for even n the Nyquist bin
/// counts at half weight because +0.5 and -0.5 cycles per sample coincide.
pub fn filter_sigma(filter: &[f64], n: usize) -> f64 {
    let m = filter.len();
    let mut sum = 0.0;
    for (k, &c) in filter.iter().enumerate().skip(1) {
        let w = if n % 2 == 0 && k == m - 1 { 0.5 * c } else { c };
        sum += w * w;
    }
    2.0 * sum.sqrt() / n as f64
}

#[inline]
fn clamp_representable(x: f64) -> f64 {
    if x.is_infinite() {
        f64::MAX
    } else if x < f64::MIN_POSITIVE {
        // powf of a positive base only reaches zero by underflow
        f64::MIN_POSITIVE
    } else {
        x
    }
}
