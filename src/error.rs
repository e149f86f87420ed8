use thiserror::Error;

/// Failures surfaced by the noise generators.
///
/// Parameter validation happens before any random draw or transform, so a
/// returned error always means no work was done and no output exists.
#[derive(Debug, Error, PartialEq)]
pub enum NoiseError {
    #[error("sequence length must be at least 1, got {0}")]
    InvalidLength(usize),

    #[error("cutoff fraction must lie in [0, 0.5), got {0}")]
    InvalidCutoff(f64),

    #[error("no deviation prefactor for phase PSD slope {0}")]
    UnsupportedSlope(i32),

    #[error("inverse transform failed: {0}")]
    Transform(String),
}
