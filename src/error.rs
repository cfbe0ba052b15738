use std::fmt;

use crate::domain::{Band, Method, ScoreRange};

/// A conversion table that violates the per-method band layout.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// A band interval has a NaN or infinite endpoint.
    NonFinite { band: Band, method: Method },
    /// `min == max`; interpolating out of it would divide by zero.
    Degenerate { band: Band, method: Method, at: f64 },
    /// `min > max`.
    Inverted { band: Band, method: Method, range: ScoreRange },
    /// Band `band`'s min does not meet the next band's max.
    Gap {
        band: Band,
        method: Method,
        min: f64,
        next_max: f64,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::NonFinite { band, method } => {
                write!(f, "{method} {band}: interval endpoints must be finite.")
            }
            TableError::Degenerate { band, method, at } => {
                write!(f, "{method} {band}: zero-width interval at {at}.")
            }
            TableError::Inverted { band, method, range } => {
                write!(f, "{method} {band}: interval {range} has min > max.")
            }
            TableError::Gap {
                band,
                method,
                min,
                next_max,
            } => write!(
                f,
                "{method} {band}: min {min} does not meet the next band's max {next_max}."
            ),
        }
    }
}

impl std::error::Error for TableError {}

/// Why a strict conversion was refused.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The input score is NaN or infinite.
    NonFinite { score: f64 },
    /// The score lies outside every band of the source method.
    OutOfRange {
        score: f64,
        method: Method,
        range: ScoreRange,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::NonFinite { score } => write!(f, "Score {score} is not a finite number."),
            ConvertError::OutOfRange {
                score,
                method,
                range,
            } => write!(f, "Score {score} is outside the {method} range {range}."),
        }
    }
}

impl std::error::Error for ConvertError {}
