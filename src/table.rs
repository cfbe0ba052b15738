//! The band × method conversion table.
//!
//! Each row is one percentile band (row 0 = band 1, the top band); each column is
//! one method in `Method::ALL` order. For a fixed method the intervals are
//! contiguous and decrease with the band index, so together they cover the
//! method's whole valid domain.

use tracing::trace;

use crate::domain::{Band, Method, ScoreRange};
use crate::error::TableError;

/// One band's interval for every method, in `Method::ALL` order.
pub type BandRow = [ScoreRange; 4];

const fn r(min: f64, max: f64) -> ScoreRange {
    ScoreRange::new(min, max)
}

// Columns: TSA, THPT, HSA, HOCBA.
static BUILTIN: ConversionTable = ConversionTable {
    rows: [
        [r(83.98, 100.0), r(29.25, 30.00), r(118.0, 127.0), r(29.50, 30.00)],
        [r(76.23, 83.98), r(28.46, 29.25), r(109.81, 118.0), r(28.97, 29.50)],
        [r(69.88, 76.23), r(27.55, 28.46), r(103.13, 109.81), r(28.36, 28.97)],
        [r(59.71, 69.88), r(25.08, 27.55), r(88.23, 103.13), r(26.71, 28.36)],
        [r(55.22, 59.71), r(23.46, 25.08), r(80.84, 88.23), r(25.63, 26.71)],
        [r(46.95, 55.22), r(19.50, 23.46), r(67.00, 80.84), r(22.99, 25.63)],
        [r(37.44, 46.95), r(15.00, 19.50), r(53.60, 67.00), r(19.98, 22.99)],
    ],
};

/// Immutable mapping `Band → Method → ScoreRange`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTable {
    rows: [BandRow; Band::COUNT],
}

impl ConversionTable {
    /// The compiled-in table shared by the crate-level functions.
    pub fn builtin() -> &'static ConversionTable {
        &BUILTIN
    }

    /// Build a table from rows ordered band 1 first.
    ///
    /// Rejects tables whose intervals are non-finite, zero-width, inverted, or
    /// not contiguous from one band to the next.
    pub fn new(rows: [BandRow; Band::COUNT]) -> Result<Self, TableError> {
        let table = Self { rows };
        table.validate()?;
        Ok(table)
    }

    /// Interval of `band` for `method`.
    pub fn range(&self, band: Band, method: Method) -> ScoreRange {
        self.rows[band.index()][method.column()]
    }

    /// `(band, interval)` pairs for `method`, in scan order.
    pub fn bands(&self, method: Method) -> impl Iterator<Item = (Band, ScoreRange)> + '_ {
        Band::ALL.into_iter().map(move |b| (b, self.range(b, method)))
    }

    /// Overall domain for `method`: smallest band min through largest band max.
    pub fn valid_range(&self, method: Method) -> ScoreRange {
        self.bands(method).fold(
            ScoreRange::new(f64::INFINITY, f64::NEG_INFINITY),
            |acc, (_, range)| ScoreRange::new(acc.min.min(range.min), acc.max.max(range.max)),
        )
    }

    /// Check the per-method band layout.
    pub fn validate(&self) -> Result<(), TableError> {
        for method in Method::ALL {
            let mut prev: Option<(Band, ScoreRange)> = None;
            for (band, range) in self.bands(method) {
                if !(range.min.is_finite() && range.max.is_finite()) {
                    return Err(TableError::NonFinite { band, method });
                }
                if range.min == range.max {
                    return Err(TableError::Degenerate {
                        band,
                        method,
                        at: range.min,
                    });
                }
                if range.min > range.max {
                    return Err(TableError::Inverted { band, method, range });
                }
                if let Some((prev_band, prev_range)) = prev {
                    if prev_range.min != range.max {
                        return Err(TableError::Gap {
                            band: prev_band,
                            method,
                            min: prev_range.min,
                            next_max: range.max,
                        });
                    }
                }
                prev = Some((band, range));
            }
            trace!(%method, range = %self.valid_range(method), "table column ok");
        }
        Ok(())
    }
}
