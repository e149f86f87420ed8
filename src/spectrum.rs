//! Random one-sided spectra shaped by a spectral filter.

use rand::Rng;
use rand_distr::StandardNormal;
use rustfft::num_complex::Complex;
use std::f64::consts::SQRT_2;

/// Draw a shaped one-sided spectrum: per bin, independent standard-normal
/// real and imaginary parts, both scaled by the bin's filter coefficient.
///
/// The DC bin of a real sequence must be real, and for even n the Nyquist
/// bin as well. Those imaginary parts are dropped and the surviving real
/// part is scaled by sqrt(2) to keep the bin's expected power unchanged.
/// The negative-frequency mirror is never constructed; the inverse real
/// transform reconstructs it implicitly.
pub fn sample_spectrum<R: Rng + ?Sized>(
    filter: &[f64],
    n: usize,
    rng: &mut R,
) -> Vec<Complex<f64>> {
    let m = filter.len();
    let mut spectrum: Vec<Complex<f64>> = filter
        .iter()
        .map(|&c| {
            let re: f64 = rng.sample(StandardNormal);
            let im: f64 = rng.sample(StandardNormal);
            Complex::new(re * c, im * c)
        })
        .collect();

    spectrum[0] = Complex::new(spectrum[0].re * SQRT_2, 0.0);
    if n % 2 == 0 && m > 1 {
        spectrum[m - 1] = Complex::new(spectrum[m - 1].re * SQRT_2, 0.0);
    }
    spectrum
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn real_bins_for_even_length() {
        let filter = vec![1.0; 5];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let spec = sample_spectrum(&filter, 8, &mut rng);
        assert_eq!(spec.len(), 5);
        assert_eq!(spec[0].im, 0.0);
        assert_eq!(spec[4].im, 0.0);
    }

    #[test]
    fn nyquist_untouched_for_odd_length() {
        let filter = vec![1.0; 5];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let spec = sample_spectrum(&filter, 9, &mut rng);
        assert_eq!(spec[0].im, 0.0);
        assert!(spec[4].im != 0.0);
    }

    #[test]
    fn coefficients_scale_both_parts() {
        let mut a = ChaCha8Rng::seed_from_u64(11);
        let mut b = ChaCha8Rng::seed_from_u64(11);
        let unit = sample_spectrum(&[1.0, 1.0, 1.0], 5, &mut a);
        let scaled = sample_spectrum(&[3.0, 3.0, 3.0], 5, &mut b);
        for (u, s) in unit.iter().zip(&scaled) {
            assert!((s.re - 3.0 * u.re).abs() < 1e-12);
            assert!((s.im - 3.0 * u.im).abs() < 1e-12);
        }
    }
}
