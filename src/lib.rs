//! Synthesis of discrete time-domain sequences with power-law spectra,
//! S(f) proportional to 1/f^alpha: white (alpha = 0), pink (1), brown (2),
//! and anything in between or beyond. Includes the Kasdin-Walter discrete
//! filter method for oscillator stability work.

pub mod error;
pub mod filter;
pub mod gen;
pub mod kasdin;
pub mod psd;
pub mod spectrum;
pub mod transform;
pub mod types;

pub use error::NoiseError;
pub use gen::{colored, generate, generate_seeded, generate_with, NoiseConfig};
pub use types::{NoiseColor, SampleBuffer};
