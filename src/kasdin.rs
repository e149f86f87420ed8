//! Discrete power-law noise after Kasdin & Walter, "Discrete simulation of
//! power law noise [for oscillator stability evaluation]", Proc. 1992 IEEE
//! Frequency Control Symposium, pp. 274-283.
//!
//! Unlike the spectral method in [`crate::gen`], this path shapes white
//! noise with the accumulated fractional-integration coefficients h_k and
//! parameterizes amplitude by the discrete variance Qd rather than by unit
//! output variance. The slope here is the phase PSD exponent b in
//! S_x(f) = g_b * f^b, so white phase noise is b = 0 and random-walk
//! frequency noise is b = -4.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use realfft::RealFftPlanner;
use std::f64::consts::PI;
use tracing::debug;

use crate::error::NoiseError;
use crate::types::SampleBuffer;

/// Generate `len` samples with discrete variance `qd` and phase PSD slope
/// `slope`.
///
/// The white sequence and the filter coefficients are zero-padded to twice
/// the length so the FFT convolution is linear rather than circular over
/// the returned samples.
pub fn noise_gen<R: Rng + ?Sized>(
    len: usize,
    qd: f64,
    slope: f64,
    rng: &mut R,
) -> Result<SampleBuffer, NoiseError> {
    if len < 1 {
        return Err(NoiseError::InvalidLength(len));
    }
    debug!(len, qd, slope, "generating kasdin-walter noise");

    let mhb = -slope / 2.0;
    let sd = qd.sqrt();
    let padded = 2 * len;

    let mut white = vec![0.0f64; padded];
    for w in &mut white[..len] {
        let g: f64 = rng.sample(StandardNormal);
        *w = sd * g;
    }

    let mut kernel = vec![0.0f64; padded];
    kernel[0] = 1.0;
    for k in 1..len {
        kernel[k] = kernel[k - 1] * (mhb + (k as f64 - 1.0)) / k as f64;
    }

    let mut planner = RealFftPlanner::<f64>::new();
    let r2c = planner.plan_fft_forward(padded);
    let c2r = planner.plan_fft_inverse(padded);

    let mut white_f = r2c.make_output_vec();
    r2c.process(&mut white, &mut white_f)
        .map_err(|e| NoiseError::Transform(e.to_string()))?;
    let mut kernel_f = r2c.make_output_vec();
    r2c.process(&mut kernel, &mut kernel_f)
        .map_err(|e| NoiseError::Transform(e.to_string()))?;

    for (w, h) in white_f.iter_mut().zip(&kernel_f) {
        *w *= *h;
    }

    let mut shaped = c2r.make_output_vec();
    c2r.process(&mut white_f, &mut shaped)
        .map_err(|e| NoiseError::Transform(e.to_string()))?;

    let scale = 1.0 / padded as f64;
    Ok(shaped[..len].iter().map(|y| y * scale).collect())
}

/// Seeded wrapper around [`noise_gen`].
pub fn noise_gen_seeded(
    len: usize,
    qd: f64,
    slope: f64,
    seed: u64,
) -> Result<SampleBuffer, NoiseError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    noise_gen(len, qd, slope, &mut rng)
}

/// Phase PSD prefactor g_b such that noise generated with (qd, slope, tau0)
/// shows S_x(f) = g_b * f^b. Kasdin & Walter eqn (39).
pub fn phase_psd_from_qd(qd: f64, slope: f64, tau0: f64) -> f64 {
    qd * 2.0 * (2.0 * PI).powf(slope) * tau0.powf(slope + 1.0)
}

/// Frequency PSD prefactor h_a such that the same noise shows
/// S_y(f) = h_a * f^a with a = b + 2. Kasdin & Walter eqn (39).
pub fn frequency_psd_from_qd(qd: f64, slope: f64, tau0: f64) -> f64 {
    let a = slope + 2.0;
    qd * 2.0 * (2.0 * PI).powf(a) * tau0.powf(a - 1.0)
}

/// Allan deviation prefactor for the five canonical slopes.
///
/// Coefficients from Dawkins, McFerran & Luiten, IEEE Trans. UFFC 54(5),
/// 2007. The flicker phase case depends on tau through its log term; the
/// others do not.
pub fn adev_from_qd(qd: f64, slope: i32, tau0: f64, tau: f64) -> Result<f64, NoiseError> {
    let g_b = phase_psd_from_qd(qd, slope as f64, tau0);
    let f_h = 0.5 / tau0;
    let coeff = match slope {
        0 => 3.0 * f_h / (4.0 * PI.powi(2)),
        -1 => (1.038 + 3.0 * (2.0 * PI * f_h * tau).ln()) / (4.0 * PI.powi(2)),
        -2 => 0.5,
        -3 => 2.0 * 2.0f64.ln(),
        -4 => 2.0 * PI.powi(2) / 3.0,
        other => return Err(NoiseError::UnsupportedSlope(other)),
    };
    Ok((coeff * g_b * (2.0 * PI).powi(2)).sqrt())
}

/// Modified Allan deviation prefactor for the five canonical slopes.
pub fn mdev_from_qd(qd: f64, slope: i32, tau0: f64, _tau: f64) -> Result<f64, NoiseError> {
    let g_b = phase_psd_from_qd(qd, slope as f64, tau0);
    let f_h = 0.5 / tau0;
    let coeff = match slope {
        0 => 3.0 / (8.0 * PI.powi(2)),
        -1 => (24.0 * 2.0f64.ln() - 9.0 * 3.0f64.ln()) / (8.0 * PI.powi(2)),
        -2 => 0.25,
        -3 => 2.0 * (3.0 * 3.0f64.powf(11.0 / 16.0) / 4.0).ln(),
        -4 => 11.0 / 20.0 * PI.powi(2),
        other => return Err(NoiseError::UnsupportedSlope(other)),
    };
    Ok((coeff * g_b * (2.0 * PI).powi(2)).sqrt())
}
