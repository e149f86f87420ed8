//! Inverse one-sided transform back to the time domain.

use realfft::RealFftPlanner;
use rustfft::num_complex::Complex;

use crate::error::NoiseError;
use crate::types::SampleBuffer;

/// Reconstruct all n real samples from a one-sided spectrum of length
/// floor(n/2)+1 and scale to unit ensemble variance.
///
/// realfft leaves the inverse transform unnormalized (a factor of n against
/// the forward direction), so the output is divided by n * sigma, where
/// sigma is the raw standard deviation implied by the filter design.
pub fn synthesize(
    mut spectrum: Vec<Complex<f64>>,
    n: usize,
    sigma: f64,
) -> Result<SampleBuffer, NoiseError> {
    let mut planner = RealFftPlanner::<f64>::new();
    let c2r = planner.plan_fft_inverse(n);
    let mut out = c2r.make_output_vec();
    c2r.process(&mut spectrum, &mut out)
        .map_err(|e| NoiseError::Transform(e.to_string()))?;

    let scale = 1.0 / (n as f64 * sigma);
    for y in &mut out {
        *y *= scale;
    }
    Ok(out)
}
