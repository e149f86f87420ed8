use serde::{Deserialize, Serialize};

/// Time-domain sample values.
pub type SampleBuffer = Vec<f64>;

/// Frequency fraction in [0, 0.5], in cycles per sample.
pub type FreqFraction = f64;

/// Named spectral slopes for the common noise colors.
///
/// The exponent is the alpha in S(f) proportional to 1/f^alpha: positive
/// slopes put power at low frequency, negative slopes at high frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NoiseColor {
    Violet,
    Blue,
    White,
    Pink,
    Red,
}

impl NoiseColor {
    pub fn variants() -> Vec<NoiseColor> {
        vec![
            NoiseColor::White,
            NoiseColor::Pink,
            NoiseColor::Blue,
            NoiseColor::Red,
            NoiseColor::Violet,
        ]
    }

    #[inline]
    pub fn exponent(&self) -> f64 {
        match self {
            NoiseColor::Violet => -2.0,
            NoiseColor::Blue => -1.0,
            NoiseColor::White => 0.0,
            NoiseColor::Pink => 1.0,
            NoiseColor::Red => 2.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn color_exponents_cover_the_classic_slopes() {
        assert_eq!(NoiseColor::White.exponent(), 0.0);
        assert_eq!(NoiseColor::Pink.exponent(), 1.0);
        assert_eq!(NoiseColor::Red.exponent(), 2.0);
        assert_eq!(NoiseColor::variants().len(), 5);
    }
}
