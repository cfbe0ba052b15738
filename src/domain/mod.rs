//! Domain types used throughout the converter.
//!
//! This module defines:
//!
//! - the evaluation methods (`Method`) and percentile bands (`Band`)
//! - closed score intervals (`ScoreRange`)
//! - the convert-to-all output record (`MethodScores`)

pub mod types;

pub use types::*;
