//! Mathematical utilities: piecewise-linear interpolation between bands.

pub mod interp;

pub use interp::*;
