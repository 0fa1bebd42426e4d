//! Board geometry primitives.
//!
//! - [`coord`]: step vectors and the king step set.
//! - [`square`]: a bounds-checked square index with row/column access.

pub mod coord;
pub mod square;
