//! Amplitudes, gates and state vectors.
//!
//! - [`amplitude`]: complex arithmetic on `(re, im)` pairs.
//! - [`gate`]: n-qubit operators built by tensoring a fixed 2×2 base.
//! - [`state`]: `2^n` amplitude vectors that gates are applied to.
//! - [`circuit`]: maps a piece action to a gate and runs it on a vector.

pub mod amplitude;
pub mod circuit;
pub mod gate;
pub mod state;

pub use amplitude::Amplitude;
