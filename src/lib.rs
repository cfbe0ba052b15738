//! `score-bands` library crate.
//!
//! Converts an exam score obtained under one evaluation method (TSA, THPT, HSA,
//! HOCBA) into its equivalent under another, using a fixed seven-band
//! percentile table and linear interpolation inside each band.
//!
//! The free functions below work on the compiled-in table. Use
//! [`ScoreConverter`] directly to convert against a custom [`ConversionTable`]
//! or to get explanatory errors from [`ScoreConverter::try_convert`].
//!
//! ```
//! use score_bands::{convert_score, Method};
//!
//! assert_eq!(convert_score(83.98, Method::Tsa, Method::Thpt), Some(29.25));
//! assert_eq!(convert_score(10.0, Method::Tsa, Method::Thpt), None);
//! ```

pub mod convert;
pub mod domain;
pub mod error;
pub mod math;
pub mod table;

pub use convert::ScoreConverter;
pub use domain::{Band, Method, MethodScores, ScoreRange, UnknownMethod};
pub use error::{ConvertError, TableError};
pub use table::ConversionTable;

/// Convert `score` from `from`'s scale to `to`'s. `None` means unconvertible.
pub fn convert_score(score: f64, from: Method, to: Method) -> Option<f64> {
    ScoreConverter::default().convert(score, from, to)
}

/// Valid score domain for `method`.
pub fn score_range(method: Method) -> ScoreRange {
    ScoreConverter::default().valid_range(method)
}

pub fn is_valid_score(score: f64, method: Method) -> bool {
    ScoreConverter::default().is_valid(score, method)
}

/// Convert `score` into all four scales at once.
pub fn all_method_converted(score: f64, method: Method) -> MethodScores {
    ScoreConverter::default().convert_to_all(score, method)
}
