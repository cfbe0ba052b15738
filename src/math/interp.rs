//! Band-to-band linear interpolation.
//!
//! A score `x` inside a source interval `[x1, x2]` is mapped to the point at the
//! same relative position inside the target interval `[y1, y2]`:
//!
//! ```text
//! y = y1 + (x - x1) * (y2 - y1) / (x2 - x1)
//! ```
//!
//! Numerical notes:
//! - No clamping: an `x` outside `[x1, x2]` extrapolates along the same line.
//! - The caller guarantees `x2 != x1` (tables are validated on construction).

use crate::domain::ScoreRange;

/// Map `x` from `source` into `target` by affine interpolation.
pub fn rescale(x: f64, source: ScoreRange, target: ScoreRange) -> f64 {
    let (x1, x2) = (source.min, source.max);
    let (y1, y2) = (target.min, target.max);
    y1 + ((x - x1) * (y2 - y1)) / (x2 - x1)
}
