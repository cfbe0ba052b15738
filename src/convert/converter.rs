//! Score conversion over a single conversion table.
//!
//! Given a score under a source method we:
//! - find the first band (scanning 1 → 7) whose interval contains it
//! - map it into the same band's interval for the target method
//!
//! Adjacent bands share a boundary value, so the ascending scan means a score
//! exactly on a boundary belongs to the higher-ranked (lower-numbered) band.
//! One consequence: a round trip A → B → A is exact only strictly inside a band;
//! at a shared boundary the reverse lookup may land in the neighbouring band.

use tracing::debug;

use crate::domain::{Band, Method, MethodScores, ScoreRange};
use crate::error::ConvertError;
use crate::math::rescale;
use crate::table::ConversionTable;

/// Converter bound to a table. Cheap to copy; holds only a reference.
#[derive(Debug, Clone, Copy)]
pub struct ScoreConverter<'t> {
    table: &'t ConversionTable,
}

impl Default for ScoreConverter<'static> {
    fn default() -> Self {
        Self::new(ConversionTable::builtin())
    }
}

impl<'t> ScoreConverter<'t> {
    pub fn new(table: &'t ConversionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t ConversionTable {
        self.table
    }

    /// First band whose `method` interval contains `score`, inclusive.
    pub fn find_band(&self, score: f64, method: Method) -> Option<Band> {
        self.table
            .bands(method)
            .find(|(_, range)| range.contains(score))
            .map(|(band, _)| band)
    }

    /// Interval of `band` for `method`.
    pub fn band_range(&self, band: Band, method: Method) -> ScoreRange {
        self.table.range(band, method)
    }

    /// Convert `score` from one method's scale to another's.
    ///
    /// Same-method conversion returns `score` untouched, even when it is out of
    /// range. Otherwise returns `None` when no band of `from` contains `score`
    /// (this includes NaN and infinities).
    pub fn convert(&self, score: f64, from: Method, to: Method) -> Option<f64> {
        if from == to {
            return Some(score);
        }
        let Some(band) = self.find_band(score, from) else {
            debug!(score, %from, %to, "score outside every band; unconvertible");
            return None;
        };
        let source = self.table.range(band, from);
        let target = self.table.range(band, to);
        let converted = rescale(score, source, target);
        debug!(score, %from, %to, band = band.rank(), converted, "converted score");
        Some(converted)
    }

    /// Like [`convert`](Self::convert) but explains refusals and rejects
    /// non-finite input up front, including for same-method conversion.
    pub fn try_convert(&self, score: f64, from: Method, to: Method) -> Result<f64, ConvertError> {
        if !score.is_finite() {
            return Err(ConvertError::NonFinite { score });
        }
        self.convert(score, from, to)
            .ok_or_else(|| ConvertError::OutOfRange {
                score,
                method: from,
                range: self.valid_range(from),
            })
    }

    /// Overall valid domain of `method`.
    pub fn valid_range(&self, method: Method) -> ScoreRange {
        self.table.valid_range(method)
    }

    /// Whether `score` falls inside `method`'s valid domain, inclusive.
    pub fn is_valid(&self, score: f64, method: Method) -> bool {
        self.valid_range(method).contains(score)
    }

    /// Convert `score` into every method's scale, including `method` itself.
    pub fn convert_to_all(&self, score: f64, method: Method) -> MethodScores {
        let mut out = MethodScores::default();
        for target in Method::ALL {
            out.set(target, self.convert(score, method, target));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use rand::rngs::StdRng;

    use super::*;

    const TOL: f64 = 1e-9;

    fn conv() -> ScoreConverter<'static> {
        ScoreConverter::default()
    }

    #[test]
    fn worked_examples_tsa_to_thpt() {
        let c = conv();

        let y = c.convert(90.0, Method::Tsa, Method::Thpt).unwrap();
        let expected = 29.25 + (90.0 - 83.98) * (30.00 - 29.25) / (100.0 - 83.98);
        assert!((y - expected).abs() < TOL);
        assert!((y - 29.5318).abs() < 1e-3, "got {y}");

        assert_eq!(c.convert(83.98, Method::Tsa, Method::Thpt), Some(29.25));

        // Band 6: [46.95, 55.22] -> [19.50, 23.46].
        let y = c.convert(50.0, Method::Tsa, Method::Thpt).unwrap();
        let expected = 19.50 + (50.0 - 46.95) * (23.46 - 19.50) / (55.22 - 46.95);
        assert!((y - expected).abs() < TOL);
        assert!((y - 20.9605).abs() < 1e-3, "got {y}");

        assert_eq!(c.convert(10.0, Method::Tsa, Method::Thpt), None);
    }

    #[test]
    fn identity_short_circuits_even_out_of_range() {
        let c = conv();
        for m in Method::ALL {
            assert_eq!(c.convert(-5.0, m, m), Some(-5.0));
            assert_eq!(c.convert(1_000.0, m, m), Some(1_000.0));
            assert_eq!(c.convert(25.0, m, m), Some(25.0));
            assert!(c.convert(f64::NAN, m, m).unwrap().is_nan());
        }
    }

    #[test]
    fn every_band_endpoint_converts() {
        let c = conv();
        for from in Method::ALL {
            for band in Band::ALL {
                let range = c.band_range(band, from);
                for to in Method::ALL {
                    assert!(c.convert(range.min, from, to).is_some());
                    assert!(c.convert(range.max, from, to).is_some());
                }
            }
        }
    }

    #[test]
    fn shared_boundary_resolves_to_lower_band_index() {
        let c = conv();
        for method in Method::ALL {
            for pair in Band::ALL.windows(2) {
                let (upper, lower) = (pair[0], pair[1]);
                let boundary = c.band_range(upper, method).min;
                assert_eq!(boundary, c.band_range(lower, method).max);
                assert_eq!(c.find_band(boundary, method), Some(upper));
            }
        }
        // On a shared boundary the converted value is the target band's min.
        let boundary = c.band_range(Band::ALL[3], Method::Hsa).min;
        let y = c.convert(boundary, Method::Hsa, Method::Hocba).unwrap();
        assert!((y - c.band_range(Band::ALL[3], Method::Hocba).min).abs() < TOL);
    }

    #[test]
    fn out_of_range_is_unconvertible() {
        let c = conv();
        for from in Method::ALL {
            let range = c.valid_range(from);
            for to in Method::ALL.into_iter().filter(|&to| to != from) {
                assert_eq!(c.convert(range.min - 0.01, from, to), None);
                assert_eq!(c.convert(range.max + 0.01, from, to), None);
                assert_eq!(c.convert(f64::NAN, from, to), None);
                assert_eq!(c.convert(f64::INFINITY, from, to), None);
            }
        }
    }

    #[test]
    fn round_trip_recovers_score_inside_bands() {
        let c = conv();
        let mut rng = StdRng::seed_from_u64(7);
        for from in Method::ALL {
            for to in Method::ALL {
                for band in Band::ALL {
                    let range = c.band_range(band, from);
                    for _ in 0..20 {
                        // Stay clear of both boundaries.
                        let t: f64 = rng.gen_range(0.01..0.99);
                        let s = range.min + t * range.width();
                        let there = c.convert(s, from, to).unwrap();
                        let back = c.convert(there, to, from).unwrap();
                        assert!((back - s).abs() < 1e-9, "{from}->{to}: {s} came back as {back}");
                    }
                }
            }
        }
    }

    #[test]
    fn is_valid_matches_union_of_bands() {
        let c = conv();
        let mut rng = StdRng::seed_from_u64(11);
        for method in Method::ALL {
            let range = c.valid_range(method);
            for _ in 0..500 {
                let s: f64 = rng.gen_range((range.min - 10.0)..(range.max + 10.0));
                assert_eq!(c.is_valid(s, method), c.find_band(s, method).is_some());
            }
            assert!(c.is_valid(range.min, method));
            assert!(c.is_valid(range.max, method));
            assert!(!c.is_valid(f64::NAN, method));
        }
    }

    #[test]
    fn convert_to_all_keeps_identity_and_absent_values() {
        let c = conv();
        let all = c.convert_to_all(90.0, Method::Tsa);
        assert_eq!(all.tsa, Some(90.0));
        assert_eq!(all.thpt, c.convert(90.0, Method::Tsa, Method::Thpt));
        assert_eq!(all.hsa, c.convert(90.0, Method::Tsa, Method::Hsa));
        assert_eq!(all.hocba, c.convert(90.0, Method::Tsa, Method::Hocba));

        let all = c.convert_to_all(10.0, Method::Tsa);
        assert_eq!(all.tsa, Some(10.0));
        assert_eq!(all.thpt, None);
        assert_eq!(all.hsa, None);
        assert_eq!(all.hocba, None);
    }

    #[test]
    fn try_convert_explains_refusals() {
        let c = conv();
        assert!(matches!(
            c.try_convert(f64::NAN, Method::Tsa, Method::Tsa),
            Err(ConvertError::NonFinite { .. })
        ));
        assert_eq!(
            c.try_convert(10.0, Method::Tsa, Method::Hsa),
            Err(ConvertError::OutOfRange {
                score: 10.0,
                method: Method::Tsa,
                range: ScoreRange::new(37.44, 100.0),
            })
        );
        assert_eq!(c.try_convert(29.25, Method::Thpt, Method::Tsa), Ok(83.98));
    }

    #[test]
    fn custom_table_is_used() {
        let mut rows = [[ScoreRange::new(0.0, 1.0); 4]; Band::COUNT];
        for (i, row) in rows.iter_mut().enumerate() {
            let hi = (Band::COUNT - i) as f64;
            row[0] = ScoreRange::new(hi - 1.0, hi);
            row[1] = ScoreRange::new((hi - 1.0) * 10.0, hi * 10.0);
            row[2] = row[0];
            row[3] = row[1];
        }
        let table = ConversionTable::new(rows).unwrap();
        let c = ScoreConverter::new(&table);
        assert_eq!(c.find_band(6.5, Method::Tsa), Some(Band::ALL[0]));
        let y = c.convert(6.5, Method::Tsa, Method::Thpt).unwrap();
        assert!((y - 65.0).abs() < TOL);
        assert_eq!(c.valid_range(Method::Hocba), ScoreRange::new(0.0, 70.0));
    }
}
