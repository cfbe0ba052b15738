//! Cross-method score conversion.
//!
//! Responsibilities:
//!
//! - classify a score into its percentile band
//! - interpolate it into another method's band interval
//! - report each method's valid score domain

pub mod converter;

pub use converter::*;
